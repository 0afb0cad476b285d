//! # Pricing Tables
//!
//! Rate tables that drive the estimator. Tables are keyed by the closed
//! enums in [`crate::choices`] and every lookup is total: an entry missing
//! from a table resolves to the built-in rate for that key, so a partially
//! specified config can never push an undefined value into the arithmetic.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "bases": { "patio": { "labourPerM2": 70, "materialPerM2": 55 } },
//!   "tiers": { "basic": 1, "mid": 1.35, "premium": 1.75 },
//!   "access": { "easy": 1, "normal": 1.1, "tricky": 1.25 },
//!   "wasteAddPerM2": { "none": 0, "some": 5, "heavy": 12 },
//!   "productivity": { "patio": 8 },
//!   "overheadRate": 0.05,
//!   "contingencyRate": 0.08,
//!   "overheadFloor": 50
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::choices::{MaterialTier, ProjectType, SiteAccess, WasteLevel};
use crate::errors::{LandscapeError, LandscapeResult};

/// Throughput used when a project type has no usable productivity entry (m²/day)
pub const DEFAULT_PRODUCTIVITY_M2_PER_DAY: f64 = 8.0;

/// Per-area labour and material rates for one project type (£/m²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRate {
    pub labour_per_m2: f64,
    pub material_per_m2: f64,
}

impl BaseRate {
    pub const fn new(labour_per_m2: f64, material_per_m2: f64) -> Self {
        BaseRate {
            labour_per_m2,
            material_per_m2,
        }
    }
}

/// Built-in labour/material rates
pub fn default_base_rate(project: ProjectType) -> BaseRate {
    match project {
        ProjectType::Patio => BaseRate::new(70.0, 55.0),
        ProjectType::ShedBase => BaseRate::new(55.0, 35.0),
        ProjectType::Steps => BaseRate::new(120.0, 65.0),
        ProjectType::RaisedBeds => BaseRate::new(65.0, 50.0),
        ProjectType::Path => BaseRate::new(50.0, 30.0),
    }
}

/// Built-in material multiplier per tier
pub fn default_tier_multiplier(tier: MaterialTier) -> f64 {
    match tier {
        MaterialTier::Basic => 1.0,
        MaterialTier::Mid => 1.35,
        MaterialTier::Premium => 1.75,
    }
}

/// Built-in labour multiplier per access level
pub fn default_access_multiplier(access: SiteAccess) -> f64 {
    match access {
        SiteAccess::Easy => 1.0,
        SiteAccess::Normal => 1.1,
        SiteAccess::Tricky => 1.25,
    }
}

/// Built-in waste surcharge (£/m²)
pub fn default_waste_add_per_m2(waste: WasteLevel) -> f64 {
    match waste {
        WasteLevel::None => 0.0,
        WasteLevel::Some => 5.0,
        WasteLevel::Heavy => 12.0,
    }
}

/// Built-in productivity (m²/day)
pub fn default_productivity(project: ProjectType) -> f64 {
    match project {
        ProjectType::Patio => 8.0,
        ProjectType::ShedBase => 10.0,
        ProjectType::Steps => 4.0,
        ProjectType::RaisedBeds => 10.0,
        ProjectType::Path => 12.0,
    }
}

/// Complete pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub bases: BTreeMap<ProjectType, BaseRate>,
    pub tiers: BTreeMap<MaterialTier, f64>,
    pub access: BTreeMap<SiteAccess, f64>,
    pub waste_add_per_m2: BTreeMap<WasteLevel, f64>,
    pub productivity: BTreeMap<ProjectType, f64>,
    /// Overhead as a fraction of subtotal
    pub overhead_rate: f64,
    /// Contingency as a fraction of subtotal
    pub contingency_rate: f64,
    /// Minimum overhead charge (£)
    pub overhead_floor: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            bases: ProjectType::ALL.iter().map(|&p| (p, default_base_rate(p))).collect(),
            tiers: MaterialTier::ALL.iter().map(|&t| (t, default_tier_multiplier(t))).collect(),
            access: SiteAccess::ALL.iter().map(|&a| (a, default_access_multiplier(a))).collect(),
            waste_add_per_m2: WasteLevel::ALL.iter().map(|&w| (w, default_waste_add_per_m2(w))).collect(),
            productivity: ProjectType::ALL.iter().map(|&p| (p, default_productivity(p))).collect(),
            overhead_rate: 0.05,
            contingency_rate: 0.08,
            overhead_floor: 50.0,
        }
    }
}

impl PricingConfig {
    pub fn base_rate(&self, project: ProjectType) -> BaseRate {
        self.bases
            .get(&project)
            .copied()
            .unwrap_or_else(|| default_base_rate(project))
    }

    pub fn tier_multiplier(&self, tier: MaterialTier) -> f64 {
        self.tiers
            .get(&tier)
            .copied()
            .unwrap_or_else(|| default_tier_multiplier(tier))
    }

    pub fn access_multiplier(&self, access: SiteAccess) -> f64 {
        self.access
            .get(&access)
            .copied()
            .unwrap_or_else(|| default_access_multiplier(access))
    }

    pub fn waste_add_per_m2(&self, waste: WasteLevel) -> f64 {
        self.waste_add_per_m2
            .get(&waste)
            .copied()
            .unwrap_or_else(|| default_waste_add_per_m2(waste))
    }

    /// Productivity in m²/day, or [`DEFAULT_PRODUCTIVITY_M2_PER_DAY`] when the
    /// entry is absent or not a positive number
    pub fn productivity(&self, project: ProjectType) -> f64 {
        self.productivity
            .get(&project)
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(DEFAULT_PRODUCTIVITY_M2_PER_DAY)
    }

    /// Check every table entry and global rate is in range.
    pub fn validate(&self) -> LandscapeResult<()> {
        for (project, rate) in &self.bases {
            check_non_negative(&format!("bases.{}.labourPerM2", project.key()), rate.labour_per_m2)?;
            check_non_negative(&format!("bases.{}.materialPerM2", project.key()), rate.material_per_m2)?;
        }
        for (tier, value) in &self.tiers {
            check_positive(&format!("tiers.{}", tier.key()), *value)?;
        }
        for (access, value) in &self.access {
            check_positive(&format!("access.{}", access.key()), *value)?;
        }
        for (waste, value) in &self.waste_add_per_m2 {
            check_non_negative(&format!("wasteAddPerM2.{}", waste.key()), *value)?;
        }
        for (project, value) in &self.productivity {
            check_positive(&format!("productivity.{}", project.key()), *value)?;
        }
        check_non_negative("overheadRate", self.overhead_rate)?;
        check_non_negative("contingencyRate", self.contingency_rate)?;
        check_non_negative("overheadFloor", self.overhead_floor)?;
        Ok(())
    }
}

/// Rates, addends and fractions: finite and `>= 0`
pub(crate) fn check_non_negative(field: &str, value: f64) -> LandscapeResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LandscapeError::invalid_rate(
            field,
            value.to_string(),
            "must be a non-negative number",
        ))
    }
}

/// Multipliers and throughputs: finite and `> 0`
pub(crate) fn check_positive(field: &str, value: f64) -> LandscapeResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LandscapeError::invalid_rate(
            field,
            value.to_string(),
            "must be a positive number",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_key() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.bases.len(), ProjectType::ALL.len());
        assert_eq!(pricing.tiers.len(), MaterialTier::ALL.len());
        assert_eq!(pricing.access.len(), SiteAccess::ALL.len());
        assert_eq!(pricing.waste_add_per_m2.len(), WasteLevel::ALL.len());
        assert_eq!(pricing.productivity.len(), ProjectType::ALL.len());
        assert!(pricing.validate().is_ok());
    }

    #[test]
    fn test_missing_entries_fall_back_to_builtin() {
        let mut pricing = PricingConfig::default();
        pricing.tiers.clear();
        pricing.bases.remove(&ProjectType::Steps);

        assert_eq!(pricing.tier_multiplier(MaterialTier::Premium), 1.75);
        assert_eq!(pricing.base_rate(ProjectType::Steps), BaseRate::new(120.0, 65.0));
    }

    #[test]
    fn test_productivity_fallback() {
        let mut pricing = PricingConfig::default();
        pricing.productivity.remove(&ProjectType::Path);
        pricing.productivity.insert(ProjectType::Steps, 0.0);

        assert_eq!(pricing.productivity(ProjectType::Path), DEFAULT_PRODUCTIVITY_M2_PER_DAY);
        assert_eq!(pricing.productivity(ProjectType::Steps), DEFAULT_PRODUCTIVITY_M2_PER_DAY);
        assert_eq!(pricing.productivity(ProjectType::ShedBase), 10.0);
    }

    #[test]
    fn test_validate_rejects_zero_multiplier() {
        let mut pricing = PricingConfig::default();
        pricing.access.insert(SiteAccess::Tricky, 0.0);
        let err = pricing.validate().unwrap_err();
        assert!(matches!(err, LandscapeError::InvalidRate { ref field, .. } if field == "access.tricky"));
    }

    #[test]
    fn test_validate_rejects_negative_floor() {
        let pricing = PricingConfig {
            overhead_floor: -1.0,
            ..PricingConfig::default()
        };
        assert!(pricing.validate().is_err());
    }

    #[test]
    fn test_json_uses_config_field_names() {
        let json = serde_json::to_value(PricingConfig::default()).unwrap();
        assert_eq!(json["bases"]["patio"]["labourPerM2"], 70.0);
        assert_eq!(json["wasteAddPerM2"]["heavy"], 12.0);
        assert_eq!(json["overheadFloor"], 50.0);
    }
}
