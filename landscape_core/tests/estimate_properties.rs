//! End-to-end checks of the published estimate behaviour: worked examples,
//! invariants across every choice combination, and the config merge.

use landscape_core::choices::{MaterialTier, ProjectType, SiteAccess, WasteLevel};
use landscape_core::{estimate, ConfigOverride, EstimateInput, Enquiry, QuoteContext, SiteConfig};

fn every_input(length: f64, width: f64) -> Vec<EstimateInput> {
    let mut inputs = Vec::new();
    for project in ProjectType::ALL {
        for tier in MaterialTier::ALL {
            for access in SiteAccess::ALL {
                for waste in WasteLevel::ALL {
                    inputs.push(
                        EstimateInput::new(length, width)
                            .with_project(project)
                            .with_tier(tier)
                            .with_access(access)
                            .with_waste(waste),
                    );
                }
            }
        }
    }
    inputs
}

#[test]
fn worked_patio_example() {
    let config = SiteConfig::default();
    let input = EstimateInput::from_text("4", "3");
    let r = estimate(&config.pricing, &input);

    assert!((r.labour - 924.0).abs() < 1e-9);
    assert!((r.materials - 951.0).abs() < 1e-9);
    assert!((r.overhead - 93.75).abs() < 1e-9);
    assert!((r.contingency - 150.0).abs() < 1e-9);
    assert!((r.total - 2118.75).abs() < 1e-9);
    assert!((r.low - 1906.875).abs() < 1e-9);
    assert!((r.high - 2330.625).abs() < 1e-9);
    assert_eq!(r.days, 2);
}

#[test]
fn invariants_hold_for_every_choice() {
    let config = SiteConfig::default();
    for (length, width) in [(0.0, 0.0), (0.0, 5.0), (1.0, 1.0), (4.0, 3.0), (17.3, 6.8)] {
        for input in every_input(length, width) {
            let r = estimate(&config.pricing, &input);
            assert_eq!(r.area_m2, length * width);
            assert_eq!(r.total, r.labour + r.materials + r.overhead + r.contingency);
            assert!(r.overhead >= config.pricing.overhead_floor);
            assert_eq!(r.low, r.total * 0.9);
            assert_eq!(r.high, r.total * 1.1);
            assert!(r.days >= 1);
            assert!(r.total.is_finite());
        }
    }
}

#[test]
fn zero_dimension_shows_floor_only() {
    let config = SiteConfig::default();
    for input in every_input(0.0, 3.0) {
        let r = estimate(&config.pricing, &input);
        assert_eq!(r.total, 50.0);
        assert_eq!(r.days, 1);
    }
}

#[test]
fn overhead_rate_override_leaves_tables_alone() {
    let defaults = SiteConfig::default();
    let over = ConfigOverride::from_json_str(r#"{"pricing": {"overheadRate": 0.5}}"#).unwrap();
    let merged = defaults.merged(over);

    assert_eq!(merged.pricing.bases, defaults.pricing.bases);
    assert_eq!(merged.pricing.tiers, defaults.pricing.tiers);
    assert_eq!(merged.pricing.access, defaults.pricing.access);
    assert_eq!(merged.pricing.waste_add_per_m2, defaults.pricing.waste_add_per_m2);
    assert_eq!(merged.pricing.productivity, defaults.pricing.productivity);

    // 1875 * 0.5 now beats the floor
    let r = estimate(&merged.pricing, &EstimateInput::new(4.0, 3.0));
    assert!((r.overhead - 937.5).abs() < 1e-9);
}

#[test]
fn partial_override_never_produces_nan() {
    let over = ConfigOverride::from_json_str(
        r#"{"pricing": {"tiers": {"premium": 2.0}, "access": {}, "productivity": {"steps": 5}}}"#,
    )
    .unwrap();
    let merged = SiteConfig::default().merged(over);
    for input in every_input(3.0, 2.0) {
        let r = estimate(&merged.pricing, &input);
        assert!(r.total.is_finite());
    }
}

#[test]
fn links_reflect_the_estimate() {
    let config = SiteConfig::default();
    let input = EstimateInput::new(4.0, 3.0);
    let result = estimate(&config.pricing, &input);
    let enquiry = Enquiry::default();
    let quote = QuoteContext::new(&config.brand, &input, &result, &enquiry);

    assert!(quote.whatsapp_link().contains("%C2%A31%2C907%E2%80%93%C2%A32%2C331"));
    assert!(quote.mailto_link().starts_with("mailto:jrboyce@hotmail.com?subject="));
    assert!(quote.summary_text().contains("Estimate: £1,907–£2,331 over ~2 day(s)"));
}
