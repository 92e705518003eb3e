use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Broad disease grouping. Each category bundles its own conditions and
/// question set; a session resolves exactly one from the classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Category {
    Inflammatory,
    Infectious,
    Autoimmune,
    BenignGrowth,
    Pigmentary,
    SkinCancer,
    Environmental,
    Default,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Inflammatory,
        Category::Infectious,
        Category::Autoimmune,
        Category::BenignGrowth,
        Category::Pigmentary,
        Category::SkinCancer,
        Category::Environmental,
        Category::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Inflammatory => "INFLAMMATORY",
            Category::Infectious => "INFECTIOUS",
            Category::Autoimmune => "AUTOIMMUNE",
            Category::BenignGrowth => "BENIGN_GROWTH",
            Category::Pigmentary => "PIGMENTARY",
            Category::SkinCancer => "SKIN_CANCER",
            Category::Environmental => "ENVIRONMENTAL",
            Category::Default => "DEFAULT",
        }
    }

    /// Percentage at which the display layer highlights a result.
    pub fn display_threshold(&self) -> u32 {
        match self {
            Category::Inflammatory => 25,
            Category::Infectious => 20,
            Category::Autoimmune => 30,
            Category::BenignGrowth => 15,
            Category::Pigmentary => 25,
            Category::SkinCancer => 10,
            Category::Environmental => 20,
            Category::Default => 25,
        }
    }

    /// Share (percent of the top-four positive total) a single condition
    /// must reach for the share-of-top stop rule to end the questionnaire.
    pub fn auto_complete_share(&self) -> f64 {
        match self {
            Category::Inflammatory => 45.0,
            Category::Infectious => 35.0,
            Category::Autoimmune => 45.0,
            Category::BenignGrowth => 40.0,
            Category::Pigmentary => 38.0,
            Category::SkinCancer => 60.0,
            Category::Environmental => 30.0,
            Category::Default => 40.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
