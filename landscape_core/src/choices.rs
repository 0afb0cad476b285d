//! # Estimate Choices
//!
//! The four categorical inputs of the instant estimate. Each is a closed
//! enum so every rate-table lookup is an exhaustive `match`; an unknown key
//! is rejected when it is parsed, never halfway through a calculation.
//!
//! Keys serialize as the lowercase strings used by the site config
//! (`"patio"`, `"shedbase"`, `"mid"`, ...).
//!
//! ## Example
//!
//! ```rust
//! use landscape_core::choices::{MaterialTier, ProjectType};
//!
//! let project = ProjectType::from_key("Patio").unwrap();
//! assert_eq!(project, ProjectType::Patio);
//! assert_eq!(MaterialTier::Premium.label(), "£££ (premium)");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{LandscapeError, LandscapeResult};

/// Type of landscaping job
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Natural stone or porcelain patio
    #[default]
    Patio,
    /// Concrete or slab shed base
    ShedBase,
    /// Garden steps
    Steps,
    /// Sleeper raised beds
    RaisedBeds,
    /// Gravel or flagstone path
    Path,
}

impl ProjectType {
    /// All project types in display order
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Patio,
        ProjectType::ShedBase,
        ProjectType::Steps,
        ProjectType::RaisedBeds,
        ProjectType::Path,
    ];

    /// Config/CLI key
    pub fn key(&self) -> &'static str {
        match self {
            ProjectType::Patio => "patio",
            ProjectType::ShedBase => "shedbase",
            ProjectType::Steps => "steps",
            ProjectType::RaisedBeds => "raisedbeds",
            ProjectType::Path => "path",
        }
    }

    /// Customer-facing label
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Patio => "Patio (natural stone or porcelain)",
            ProjectType::ShedBase => "Shed Base (concrete/slab)",
            ProjectType::Steps => "Garden Steps",
            ProjectType::RaisedBeds => "Raised Beds (sleepers)",
            ProjectType::Path => "Garden Path (gravel/flags)",
        }
    }

    /// Parse a key, ignoring case and surrounding whitespace
    pub fn from_key(key: &str) -> LandscapeResult<Self> {
        find_by_key(&Self::ALL, key, Self::key)
            .ok_or_else(|| LandscapeError::unknown_key("project", key, &Self::ALL.map(|p| p.key())))
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Material quality level; scales material cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialTier {
    Basic,
    #[default]
    Mid,
    Premium,
}

impl MaterialTier {
    pub const ALL: [MaterialTier; 3] = [MaterialTier::Basic, MaterialTier::Mid, MaterialTier::Premium];

    pub fn key(&self) -> &'static str {
        match self {
            MaterialTier::Basic => "basic",
            MaterialTier::Mid => "mid",
            MaterialTier::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaterialTier::Basic => "£ (budget)",
            MaterialTier::Mid => "££ (mid)",
            MaterialTier::Premium => "£££ (premium)",
        }
    }

    pub fn from_key(key: &str) -> LandscapeResult<Self> {
        find_by_key(&Self::ALL, key, Self::key)
            .ok_or_else(|| LandscapeError::unknown_key("tier", key, &Self::ALL.map(|t| t.key())))
    }
}

impl std::fmt::Display for MaterialTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Site accessibility; scales labour cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteAccess {
    Easy,
    #[default]
    Normal,
    Tricky,
}

impl SiteAccess {
    pub const ALL: [SiteAccess; 3] = [SiteAccess::Easy, SiteAccess::Normal, SiteAccess::Tricky];

    pub fn key(&self) -> &'static str {
        match self {
            SiteAccess::Easy => "easy",
            SiteAccess::Normal => "normal",
            SiteAccess::Tricky => "tricky",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteAccess::Easy => "Easy",
            SiteAccess::Normal => "Normal",
            SiteAccess::Tricky => "Tricky",
        }
    }

    pub fn from_key(key: &str) -> LandscapeResult<Self> {
        find_by_key(&Self::ALL, key, Self::key)
            .ok_or_else(|| LandscapeError::unknown_key("access", key, &Self::ALL.map(|a| a.key())))
    }
}

impl std::fmt::Display for SiteAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Expected waste/disposal burden; adds a per-m² material surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteLevel {
    None,
    #[default]
    Some,
    Heavy,
}

impl WasteLevel {
    pub const ALL: [WasteLevel; 3] = [WasteLevel::None, WasteLevel::Some, WasteLevel::Heavy];

    pub fn key(&self) -> &'static str {
        match self {
            WasteLevel::None => "none",
            WasteLevel::Some => "some",
            WasteLevel::Heavy => "heavy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteLevel::None => "None",
            WasteLevel::Some => "Some",
            WasteLevel::Heavy => "Heavy",
        }
    }

    pub fn from_key(key: &str) -> LandscapeResult<Self> {
        find_by_key(&Self::ALL, key, Self::key)
            .ok_or_else(|| LandscapeError::unknown_key("waste", key, &Self::ALL.map(|w| w.key())))
    }
}

impl std::fmt::Display for WasteLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn find_by_key<T: Copy>(all: &[T], key: &str, key_of: fn(&T) -> &'static str) -> Option<T> {
    let wanted = key.trim();
    all.iter().copied().find(|item| key_of(item).eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_roundtrip_through_from_key() {
        for project in ProjectType::ALL {
            assert_eq!(ProjectType::from_key(project.key()).unwrap(), project);
        }
        for tier in MaterialTier::ALL {
            assert_eq!(MaterialTier::from_key(tier.key()).unwrap(), tier);
        }
        for access in SiteAccess::ALL {
            assert_eq!(SiteAccess::from_key(access.key()).unwrap(), access);
        }
        for waste in WasteLevel::ALL {
            assert_eq!(WasteLevel::from_key(waste.key()).unwrap(), waste);
        }
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(ProjectType::from_key(" ShedBase ").unwrap(), ProjectType::ShedBase);
        assert_eq!(SiteAccess::from_key("TRICKY").unwrap(), SiteAccess::Tricky);
    }

    #[test]
    fn test_unknown_key() {
        let err = MaterialTier::from_key("gold").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_KEY");
        assert!(err.to_string().contains("basic, mid, premium"));
    }

    #[test]
    fn test_serde_keys_match_config_keys() {
        assert_eq!(serde_json::to_string(&ProjectType::RaisedBeds).unwrap(), "\"raisedbeds\"");
        assert_eq!(serde_json::to_string(&ProjectType::ShedBase).unwrap(), "\"shedbase\"");
        let waste: WasteLevel = serde_json::from_str("\"heavy\"").unwrap();
        assert_eq!(waste, WasteLevel::Heavy);
    }

    #[test]
    fn test_defaults_match_form_initial_state() {
        assert_eq!(ProjectType::default(), ProjectType::Patio);
        assert_eq!(MaterialTier::default(), MaterialTier::Mid);
        assert_eq!(SiteAccess::default(), SiteAccess::Normal);
        assert_eq!(WasteLevel::default(), WasteLevel::Some);
    }
}
