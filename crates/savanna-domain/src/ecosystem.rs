//! Ecosystem module - the closed set of landscape categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Landscape category a passage can be classified into
///
/// `Unknown` is reserved for "no indicator matched any category".
/// The derived ordering follows declaration order and is only used for
/// stable map keys, never for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EcosystemType {
    /// Open grassland with scattered trees
    Savanna,

    /// Closed-canopy woodland
    Forest,

    /// Treeless grass-dominated plains
    Grassland,

    /// Dry, thorny shrubland
    ThornScrub,

    /// Marsh, swamp and floodplain
    Wetland,

    /// Arid, sparsely vegetated land
    Desert,

    /// No indicator matched any category
    Unknown,
}

impl EcosystemType {
    /// All categories, in declaration order
    pub const ALL: [EcosystemType; 7] = [
        EcosystemType::Savanna,
        EcosystemType::Forest,
        EcosystemType::Grassland,
        EcosystemType::ThornScrub,
        EcosystemType::Wetland,
        EcosystemType::Desert,
        EcosystemType::Unknown,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EcosystemType::Savanna => "savanna",
            EcosystemType::Forest => "forest",
            EcosystemType::Grassland => "grassland",
            EcosystemType::ThornScrub => "thorn_scrub",
            EcosystemType::Wetland => "wetland",
            EcosystemType::Desert => "desert",
            EcosystemType::Unknown => "unknown",
        }
    }

    /// Parse a category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "savanna" => Some(EcosystemType::Savanna),
            "forest" => Some(EcosystemType::Forest),
            "grassland" => Some(EcosystemType::Grassland),
            "thorn_scrub" | "thorn-scrub" => Some(EcosystemType::ThornScrub),
            "wetland" => Some(EcosystemType::Wetland),
            "desert" => Some(EcosystemType::Desert),
            "unknown" => Some(EcosystemType::Unknown),
            _ => None,
        }
    }

    /// Whether this is the `Unknown` sentinel
    pub fn is_unknown(&self) -> bool {
        matches!(self, EcosystemType::Unknown)
    }
}

impl fmt::Display for EcosystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EcosystemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid ecosystem type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for ecosystem in EcosystemType::ALL {
            assert_eq!(EcosystemType::parse(ecosystem.as_str()), Some(ecosystem));
        }
    }

    #[test]
    fn test_parse_accepts_hyphenated_thorn_scrub() {
        assert_eq!(EcosystemType::parse("Thorn-Scrub"), Some(EcosystemType::ThornScrub));
        assert!(EcosystemType::parse("tundra").is_none());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&EcosystemType::ThornScrub).unwrap();
        assert_eq!(json, "\"thorn_scrub\"");
    }
}
