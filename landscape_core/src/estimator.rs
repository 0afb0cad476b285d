//! # Instant Estimate
//!
//! Pure cost and duration estimate for a landscaping job.
//!
//! ```text
//! area        = max(0, length * width)
//! labour      = labourPerM2 * area * access
//! materials   = (materialPerM2 * tier + wasteAddPerM2) * area
//! subtotal    = labour + materials
//! overhead    = max(overheadFloor, subtotal * overheadRate)
//! contingency = subtotal * contingencyRate
//! total       = subtotal + overhead + contingency
//! low / high  = total * 0.9 / total * 1.1
//! days        = max(1, ceil(area / productivity))
//! ```
//!
//! The estimate never fails: an empty or garbled dimension counts as zero and
//! yields the overhead floor over a single day.
//!
//! ## Example
//!
//! ```rust
//! use landscape_core::estimator::{estimate, EstimateInput};
//! use landscape_core::pricing::PricingConfig;
//!
//! let input = EstimateInput::new(4.0, 3.0);
//! let result = estimate(&PricingConfig::default(), &input);
//! assert_eq!(result.days, 2);
//! assert!((result.total - 2118.75).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::choices::{MaterialTier, ProjectType, SiteAccess, WasteLevel};
use crate::pricing::PricingConfig;

/// Lower edge of the likely range as a fraction of the total
pub const RANGE_LOW_FACTOR: f64 = 0.9;

/// Upper edge of the likely range as a fraction of the total
pub const RANGE_HIGH_FACTOR: f64 = 1.1;

/// Inputs for one estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "project": "patio",
///   "tier": "mid",
///   "access": "normal",
///   "waste": "some",
///   "length_m": 4.0,
///   "width_m": 3.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EstimateInput {
    pub project: ProjectType,
    pub tier: MaterialTier,
    pub access: SiteAccess,
    pub waste: WasteLevel,
    /// Length in metres
    pub length_m: f64,
    /// Width in metres
    pub width_m: f64,
}

impl EstimateInput {
    /// Default choices with the given dimensions
    pub fn new(length_m: f64, width_m: f64) -> Self {
        EstimateInput {
            length_m,
            width_m,
            ..Default::default()
        }
    }

    /// Build from the raw text of the length and width fields
    pub fn from_text(length: &str, width: &str) -> Self {
        Self::new(parse_dimension(length), parse_dimension(width))
    }

    pub fn with_project(mut self, project: ProjectType) -> Self {
        self.project = project;
        self
    }

    pub fn with_tier(mut self, tier: MaterialTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_access(mut self, access: SiteAccess) -> Self {
        self.access = access;
        self
    }

    pub fn with_waste(mut self, waste: WasteLevel) -> Self {
        self.waste = waste;
        self
    }

    /// Plan area in m², never negative
    pub fn area_m2(&self) -> f64 {
        (sanitize_dimension(self.length_m) * sanitize_dimension(self.width_m)).max(0.0)
    }
}

/// Estimate breakdown. Currency fields are unrounded pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub area_m2: f64,
    pub labour: f64,
    pub materials: f64,
    pub overhead: f64,
    pub contingency: f64,
    pub total: f64,
    pub low: f64,
    pub high: f64,
    /// Whole working days, at least 1
    pub days: u32,
}

impl EstimateResult {
    /// Overheads and contingency as shown on one line of the breakdown
    pub fn overheads_and_contingency(&self) -> f64 {
        self.overhead + self.contingency
    }
}

/// Run the estimate.
pub fn estimate(pricing: &PricingConfig, input: &EstimateInput) -> EstimateResult {
    let area = input.area_m2();

    let base = pricing.base_rate(input.project);
    let labour = base.labour_per_m2 * area * pricing.access_multiplier(input.access);
    let materials = (base.material_per_m2 * pricing.tier_multiplier(input.tier)
        + pricing.waste_add_per_m2(input.waste))
        * area;

    let subtotal = labour + materials;
    let overhead = pricing.overhead_floor.max(subtotal * pricing.overhead_rate);
    let contingency = subtotal * pricing.contingency_rate;
    let total = subtotal + overhead + contingency;

    EstimateResult {
        area_m2: area,
        labour,
        materials,
        overhead,
        contingency,
        total,
        low: total * RANGE_LOW_FACTOR,
        high: total * RANGE_HIGH_FACTOR,
        days: duration_days(area, pricing.productivity(input.project)),
    }
}

fn duration_days(area_m2: f64, productivity: f64) -> u32 {
    let days = (area_m2 / productivity).ceil();
    if days.is_finite() && days >= 1.0 {
        // Saturates for absurd areas
        days as u32
    } else {
        1
    }
}

/// Parse a dimension typed into a form field.
///
/// Reads the longest numeric prefix (`"4"`, `" 3.5 "`, `"4m"`, `".5"`).
/// Anything unparseable, negative or non-finite is 0.
pub fn parse_dimension(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    // Exponent only counts if at least one digit follows it
    if end > digits_start && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    let value = trimmed[..end].parse::<f64>().unwrap_or(0.0);
    sanitize_dimension(value)
}

fn sanitize_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
