use serde::{Deserialize, Serialize};
use std::fmt;

/// The six invoice decomposition scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// 1: VAT and PPDA embedded in the invoice
    General,
    /// 2: VAT, PPDA and tourism levy, optional hall hire
    Hospitality,
    /// 3: VAT, retention, PPDA and NCIC
    Construction,
    /// 4: VAT and PPDA on the non-labour remainder, thresholded labour WHT
    Labour,
    /// 5: invoice already net of levies, WHT only
    WithholdingOnly,
    /// 6: VAT embedded, WHT deducted
    VatOnly,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::General,
        Scenario::Hospitality,
        Scenario::Construction,
        Scenario::Labour,
        Scenario::WithholdingOnly,
        Scenario::VatOnly,
    ];

    /// Position in the scenario list (1-based)
    pub fn number(&self) -> u8 {
        match self {
            Scenario::General => 1,
            Scenario::Hospitality => 2,
            Scenario::Construction => 3,
            Scenario::Labour => 4,
            Scenario::WithholdingOnly => 5,
            Scenario::VatOnly => 6,
        }
    }

    /// URL segment for this scenario
    pub fn slug(&self) -> &'static str {
        match self {
            Scenario::General => "general",
            Scenario::Hospitality => "hospitality",
            Scenario::Construction => "construction",
            Scenario::Labour => "labour",
            Scenario::WithholdingOnly => "withholding-only",
            Scenario::VatOnly => "vat-only",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Scenario::General => "General transactions with VAT and PPDA",
            Scenario::Hospitality => "Hospitality with tourism levy and hall hire",
            Scenario::Construction => "Construction with retention and NCIC levy",
            Scenario::Labour => "Supplies with a labour charge",
            Scenario::WithholdingOnly => "Withholding tax only",
            Scenario::VatOnly => "VAT and withholding tax only",
        }
    }

    pub fn path(&self) -> String {
        format!("/scenarios/{}", self.slug())
    }

    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            number: self.number(),
            slug: self.slug(),
            title: self.title(),
            path: self.path(),
        }
    }
}

/// Catalogue entry used by front ends to build their navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioSummary {
    pub number: u8,
    pub slug: &'static str,
    pub title: &'static str,
    pub path: String,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.slug() == needle || scenario.number().to_string() == needle)
            .ok_or_else(|| format!("Unknown scenario: {}", s))
    }
}

impl TryFrom<&str> for Scenario {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
