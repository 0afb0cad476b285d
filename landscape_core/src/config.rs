//! # Site Configuration
//!
//! Brand details and pricing, layered as built-in defaults plus an optional
//! override document (normally `/config.json` next to the site). The merge
//! happens once at startup and produces an immutable [`SiteConfig`].
//!
//! ## Merge Rules
//!
//! - Top level is shallow: `brand` and `pricing` are handled independently,
//!   anything else in the document is ignored.
//! - `brand` and `pricing` merge field by field.
//! - Rate tables merge key by key, so `{"tiers": {"mid": 1.5}}` changes the
//!   mid multiplier and keeps the built-in basic and premium ones.
//! - Keys that name no known choice and values that fail range checks are
//!   skipped with a warning; the default stays in place.
//!
//! ## Example
//!
//! ```rust
//! use landscape_core::config::{ConfigOverride, SiteConfig};
//!
//! let over = ConfigOverride::from_json_str(r#"{"pricing": {"overheadRate": 0.1}}"#).unwrap();
//! let config = SiteConfig::default().merged(over);
//! assert_eq!(config.pricing.overhead_rate, 0.1);
//! assert_eq!(config.pricing.contingency_rate, 0.08);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::choices::{MaterialTier, ProjectType, SiteAccess, WasteLevel};
use crate::errors::{LandscapeError, LandscapeResult};
use crate::pricing::{check_non_negative, check_positive, BaseRate, PricingConfig};

/// Business contact details shown on the page and used in outbound links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub owner: String,
    /// Display phone number, also used for `tel:` links
    pub phone: String,
    /// WhatsApp number in international format
    pub whatsapp: String,
    pub email: String,
    /// Service area line
    pub areas: String,
    /// Headline strapline
    pub strap: String,
}

impl Default for Brand {
    fn default() -> Self {
        Brand {
            name: "Bates Landscapes".to_string(),
            owner: "Bates Landscapes".to_string(),
            phone: "+44 7785 585 870".to_string(),
            whatsapp: "447785585870".to_string(),
            email: "jrboyce@hotmail.com".to_string(),
            areas: "Sheffield & Peak District".to_string(),
            strap: "Patios • Shed Bases • Garden Beds — Sheffield & Peak District".to_string(),
        }
    }
}

/// Fully resolved site configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: Brand,
    pub pricing: PricingConfig,
}

/// Partial brand block from an override document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandOverride {
    pub name: Option<String>,
    pub owner: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub areas: Option<String>,
    pub strap: Option<String>,
}

/// Partial base rate; a missing side keeps the existing rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseRateOverride {
    pub labour_per_m2: Option<f64>,
    pub material_per_m2: Option<f64>,
}

/// Partial pricing block from an override document.
///
/// Table keys stay as strings here so that an unknown key is a warning
/// rather than a parse failure of the whole document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingOverride {
    pub bases: Option<BTreeMap<String, BaseRateOverride>>,
    pub tiers: Option<BTreeMap<String, f64>>,
    pub access: Option<BTreeMap<String, f64>>,
    pub waste_add_per_m2: Option<BTreeMap<String, f64>>,
    pub productivity: Option<BTreeMap<String, f64>>,
    pub overhead_rate: Option<f64>,
    pub contingency_rate: Option<f64>,
    pub overhead_floor: Option<f64>,
}

/// Override document, `{ brand?: {...}, pricing?: {...} }`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigOverride {
    pub brand: Option<BrandOverride>,
    pub pricing: Option<PricingOverride>,
}

impl ConfigOverride {
    /// Parse an override document
    pub fn from_json_str(json: &str) -> LandscapeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an override document from disk
    pub fn from_file(path: &Path) -> LandscapeResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LandscapeError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&contents)
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.pricing.is_none()
    }
}

impl SiteConfig {
    /// Apply an override on top of this config, returning the merged result.
    pub fn merged(&self, over: ConfigOverride) -> SiteConfig {
        if over.is_empty() {
            tracing::debug!("config override carries no brand or pricing, nothing to merge");
            return self.clone();
        }
        let mut merged = self.clone();
        if let Some(brand) = over.brand {
            merge_brand(&mut merged.brand, brand);
        }
        if let Some(pricing) = over.pricing {
            merge_pricing(&mut merged.pricing, pricing);
        }
        tracing::debug!(brand = %merged.brand.name, "merged site config override");
        merged
    }

    /// Built-in defaults, optionally overlaid with a local override file.
    ///
    /// A missing or broken file is logged and the defaults are used.
    pub fn load_layered(path: Option<&Path>) -> SiteConfig {
        let defaults = SiteConfig::default();
        let Some(path) = path else {
            return defaults;
        };
        match ConfigOverride::from_file(path) {
            Ok(over) => defaults.merged(over),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config override unusable, keeping defaults");
                defaults
            }
        }
    }
}

fn merge_brand(brand: &mut Brand, over: BrandOverride) {
    let fields = [
        (&mut brand.name, over.name),
        (&mut brand.owner, over.owner),
        (&mut brand.phone, over.phone),
        (&mut brand.whatsapp, over.whatsapp),
        (&mut brand.email, over.email),
        (&mut brand.areas, over.areas),
        (&mut brand.strap, over.strap),
    ];
    for (slot, value) in fields {
        if let Some(value) = value {
            *slot = value;
        }
    }
}

fn merge_pricing(pricing: &mut PricingConfig, over: PricingOverride) {
    if let Some(bases) = over.bases {
        for (key, rate) in bases {
            let Some(project) = known_key(ProjectType::from_key(&key), "bases") else {
                continue;
            };
            let current = pricing.base_rate(project);
            let labour = accept(
                rate.labour_per_m2.map(|v| check_non_negative(&format!("bases.{key}.labourPerM2"), v)),
                current.labour_per_m2,
            );
            let material = accept(
                rate.material_per_m2.map(|v| check_non_negative(&format!("bases.{key}.materialPerM2"), v)),
                current.material_per_m2,
            );
            pricing.bases.insert(project, BaseRate::new(labour, material));
        }
    }

    merge_table(&mut pricing.tiers, over.tiers, "tiers", MaterialTier::from_key, check_positive);
    merge_table(&mut pricing.access, over.access, "access", SiteAccess::from_key, check_positive);
    merge_table(
        &mut pricing.waste_add_per_m2,
        over.waste_add_per_m2,
        "wasteAddPerM2",
        WasteLevel::from_key,
        check_non_negative,
    );
    merge_table(
        &mut pricing.productivity,
        over.productivity,
        "productivity",
        ProjectType::from_key,
        check_positive,
    );

    pricing.overhead_rate = accept(
        over.overhead_rate.map(|v| check_non_negative("overheadRate", v)),
        pricing.overhead_rate,
    );
    pricing.contingency_rate = accept(
        over.contingency_rate.map(|v| check_non_negative("contingencyRate", v)),
        pricing.contingency_rate,
    );
    pricing.overhead_floor = accept(
        over.overhead_floor.map(|v| check_non_negative("overheadFloor", v)),
        pricing.overhead_floor,
    );
}

fn merge_table<K: Ord>(
    table: &mut BTreeMap<K, f64>,
    over: Option<BTreeMap<String, f64>>,
    name: &str,
    parse_key: fn(&str) -> LandscapeResult<K>,
    check: fn(&str, f64) -> LandscapeResult<f64>,
) {
    let Some(over) = over else {
        return;
    };
    for (key, value) in over {
        let Some(parsed) = known_key(parse_key(&key), name) else {
            continue;
        };
        if let Some(value) = ok_or_warn(check(&format!("{name}.{key}"), value)) {
            table.insert(parsed, value);
        }
    }
}

fn known_key<K>(parsed: LandscapeResult<K>, table: &str) -> Option<K> {
    match parsed {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!(table, error = %e, "ignoring unknown key in config override");
            None
        }
    }
}

fn ok_or_warn(checked: LandscapeResult<f64>) -> Option<f64> {
    match checked {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring out-of-range value in config override");
            None
        }
    }
}

fn accept(checked: Option<LandscapeResult<f64>>, current: f64) -> f64 {
    checked.and_then(ok_or_warn).unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overhead_rate_only_override() {
        let over = ConfigOverride::from_json_str(r#"{"pricing": {"overheadRate": 0.2}}"#).unwrap();
        let defaults = SiteConfig::default();
        let merged = defaults.merged(over);

        assert_eq!(merged.pricing.overhead_rate, 0.2);
        assert_eq!(merged.pricing.bases, defaults.pricing.bases);
        assert_eq!(merged.pricing.tiers, defaults.pricing.tiers);
        assert_eq!(merged.pricing.access, defaults.pricing.access);
        assert_eq!(merged.pricing.waste_add_per_m2, defaults.pricing.waste_add_per_m2);
        assert_eq!(merged.pricing.productivity, defaults.pricing.productivity);
        assert_eq!(merged.pricing.contingency_rate, defaults.pricing.contingency_rate);
        assert_eq!(merged.pricing.overhead_floor, defaults.pricing.overhead_floor);
        assert_eq!(merged.brand, defaults.brand);
    }

    #[test]
    fn test_partial_table_keeps_other_keys() {
        let over = ConfigOverride::from_json_str(r#"{"pricing": {"tiers": {"mid": 1.5}}}"#).unwrap();
        let merged = SiteConfig::default().merged(over);

        assert_eq!(merged.pricing.tiers[&MaterialTier::Mid], 1.5);
        assert_eq!(merged.pricing.tiers[&MaterialTier::Basic], 1.0);
        assert_eq!(merged.pricing.tiers[&MaterialTier::Premium], 1.75);
    }

    #[test]
    fn test_partial_base_rate() {
        let over = ConfigOverride::from_json_str(
            r#"{"pricing": {"bases": {"patio": {"labourPerM2": 80}}}}"#,
        )
        .unwrap();
        let merged = SiteConfig::default().merged(over);
        assert_eq!(merged.pricing.base_rate(ProjectType::Patio), BaseRate::new(80.0, 55.0));
    }

    #[test]
    fn test_unknown_keys_are_skipped() {
        let over = ConfigOverride::from_json_str(
            r#"{"theme": "dark", "pricing": {"bases": {"decking": {"labourPerM2": 90, "materialPerM2": 60}}, "access": {"awful": 2.0}}}"#,
        )
        .unwrap();
        let merged = SiteConfig::default().merged(over);
        assert_eq!(merged, SiteConfig::default());
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let over = ConfigOverride::from_json_str(
            r#"{"pricing": {"tiers": {"premium": 0}, "overheadFloor": -10, "contingencyRate": 0.1}}"#,
        )
        .unwrap();
        let merged = SiteConfig::default().merged(over);
        assert_eq!(merged.pricing.tiers[&MaterialTier::Premium], 1.75);
        assert_eq!(merged.pricing.overhead_floor, 50.0);
        assert_eq!(merged.pricing.contingency_rate, 0.1);
        assert!(merged.pricing.validate().is_ok());
    }

    #[test]
    fn test_brand_merges_field_by_field() {
        let over = ConfigOverride::from_json_str(r#"{"brand": {"name": "Bates & Son"}}"#).unwrap();
        let merged = SiteConfig::default().merged(over);
        assert_eq!(merged.brand.name, "Bates & Son");
        assert_eq!(merged.brand.whatsapp, "447785585870");
    }

    #[test]
    fn test_malformed_document_is_error() {
        let err = ConfigOverride::from_json_str("{not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = ConfigOverride::from_json_str(r#"{"pricing": {"overheadRate": "high"}}"#).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_empty_document() {
        let over = ConfigOverride::from_json_str("{}").unwrap();
        assert!(over.is_empty());
        assert_eq!(SiteConfig::default().merged(over), SiteConfig::default());
    }

    #[test]
    fn test_load_layered_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pricing": {{"overheadFloor": 75}}}}"#).unwrap();

        let config = SiteConfig::load_layered(Some(file.path()));
        assert_eq!(config.pricing.overhead_floor, 75.0);
    }

    #[test]
    fn test_load_layered_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_layered(Some(&dir.path().join("config.json")));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(SiteConfig::load_layered(None), SiteConfig::default());
    }

    #[test]
    fn test_from_file_missing_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigOverride::from_file(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
