//! Category labels.
//!
//! Every value in an almanac lives in exactly one category. A stage maps
//! values of its source category into its destination category, so the
//! category is both the domain tag of a value and the key used to find the
//! next stage.

/// A named domain in the stage chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Seed,
    Soil,
    Fertilizer,
    Water,
    Light,
    Temperature,
    Humidity,
    Location,
}

impl Category {
    /// Every category, in chain order.
    pub const ALL: [Category; 8] = [
        Self::Seed,
        Self::Soil,
        Self::Fertilizer,
        Self::Water,
        Self::Light,
        Self::Temperature,
        Self::Humidity,
        Self::Location,
    ];

    /// Lowercase name as it appears in stage headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Soil => "soil",
            Self::Fertilizer => "fertilizer",
            Self::Water => "water",
            Self::Light => "light",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Location => "location",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
