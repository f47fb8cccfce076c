pub mod scenario_controller;

pub use scenario_controller::configure;
