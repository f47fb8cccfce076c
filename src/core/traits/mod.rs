pub mod calculator;
pub mod components;

pub use calculator::ScenarioCalculator;
pub use components::RoundComponents;
