//! License category catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable symbolic key for a license category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Drivers,
    Business,
    Professional,
    Special,
}

impl CategoryId {
    /// Lowercase key as used by the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drivers => "drivers",
            Self::Business => "business",
            Self::Professional => "professional",
            Self::Special => "special",
        }
    }

    /// The catalog entry for this id
    pub fn category(self) -> &'static LicenseCategory {
        // Every id has exactly one entry, in declaration order
        match self {
            Self::Drivers => &CATALOG[0],
            Self::Business => &CATALOG[1],
            Self::Professional => &CATALOG[2],
            Self::Special => &CATALOG[3],
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown license category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .map(|c| c.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Static catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseCategory {
    pub id: CategoryId,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed, ordered catalog shown by the selector
pub const CATALOG: [LicenseCategory; 4] = [
    LicenseCategory {
        id: CategoryId::Drivers,
        title: "Driver's License",
        description: "Renew or replace your driver's license",
    },
    LicenseCategory {
        id: CategoryId::Business,
        title: "Business License",
        description: "Renew your business operating permit",
    },
    LicenseCategory {
        id: CategoryId::Professional,
        title: "Professional License",
        description: "Renew professional certifications",
    },
    LicenseCategory {
        id: CategoryId::Special,
        title: "Special Permits",
        description: "Event permits, parking permits, etc.",
    },
];

/// List all license categories in display order
pub fn list_categories() -> &'static [LicenseCategory] {
    &CATALOG
}
