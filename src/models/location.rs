use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of places staff can check in at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Main Training Site")]
    MainTrainingSite, // main
    #[serde(rename = "Survival FTA")]
    SurvivalFta, // fta
    #[serde(rename = "LegoLand")]
    LegoLand, // lego
    #[serde(rename = "City of Cold Lake")]
    CityOfColdLake, // city
    #[serde(rename = "Other")]
    Other, // other
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::MainTrainingSite,
        Location::SurvivalFta,
        Location::LegoLand,
        Location::CityOfColdLake,
        Location::Other,
    ];

    /// Label as written in the backing file.
    pub fn label(&self) -> &'static str {
        match self {
            Location::MainTrainingSite => "Main Training Site",
            Location::SurvivalFta => "Survival FTA",
            Location::LegoLand => "LegoLand",
            Location::CityOfColdLake => "City of Cold Lake",
            Location::Other => "Other",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Location::MainTrainingSite => "main",
            Location::SurvivalFta => "fta",
            Location::LegoLand => "lego",
            Location::CityOfColdLake => "city",
            Location::Other => "other",
        }
    }

    /// Convert stored label → enum (exact match)
    pub fn from_label(s: &str) -> Option<Self> {
        Location::ALL.into_iter().find(|l| l.label() == s)
    }

    /// Helper: accept either the short code or the label, any case
    pub fn from_input(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        Location::ALL
            .into_iter()
            .find(|l| l.code() == needle || l.label().to_lowercase() == needle)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
