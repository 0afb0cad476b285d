//! Plain-text rendering of estimates and links.

use landscape_core::format::{format_area, format_dimension, format_gbp, format_gbp_range};
use landscape_core::{EstimateInput, EstimateResult, QuoteContext, SiteConfig};

const RULE: &str = "═══════════════════════════════════════";

/// Breakdown lines as (label, value) pairs, in display order
pub fn estimate_rows(input: &EstimateInput, result: &EstimateResult) -> Vec<(&'static str, String)> {
    let area = if result.area_m2 > 0.0 {
        format_area(result.area_m2)
    } else {
        "—".to_string()
    };
    vec![
        ("Project", input.project.label().to_string()),
        (
            "Size",
            format!("{}m x {}m", format_dimension(input.length_m), format_dimension(input.width_m)),
        ),
        ("Material tier", input.tier.label().to_string()),
        ("Access", input.access.label().to_string()),
        ("Waste", input.waste.label().to_string()),
        ("Area", area),
        ("Labour", format_gbp(result.labour)),
        ("Materials", format_gbp(result.materials)),
        ("Overheads & contingency", format_gbp(result.overheads_and_contingency())),
        ("Estimated total", format_gbp(result.total)),
        ("Likely range", format_gbp_range(result.low, result.high)),
        ("Likely duration", format!("~{} day(s)", result.days)),
    ]
}

pub fn print_estimate(config: &SiteConfig, input: &EstimateInput, result: &EstimateResult) {
    println!("{}", RULE);
    println!("  {} - INSTANT ESTIMATE", config.brand.name.to_uppercase());
    println!("{}", RULE);
    for (label, value) in estimate_rows(input, result) {
        println!("  {:<25} {}", label, value);
    }
    println!("{}", RULE);
    println!("Guide only. Final quotes follow a site visit and written scope.");
    println!("Prices assume materials delivered to site. VAT not included unless specified.");
}

pub fn print_links(quote: &QuoteContext<'_>) {
    println!("WhatsApp: {}", quote.whatsapp_link());
    println!();
    println!("Email:    {}", quote.mailto_link());
    println!();
    println!("Call:     {}", quote.tel_link());
}

#[cfg(test)]
mod tests {
    use super::*;
    use landscape_core::estimate;

    #[test]
    fn test_rows_for_patio() {
        let config = SiteConfig::default();
        let input = EstimateInput::new(4.0, 3.0);
        let result = estimate(&config.pricing, &input);
        let rows = estimate_rows(&input, &result);

        let value = |label: &str| rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.clone()).unwrap();
        assert_eq!(value("Area"), "12.0 m²");
        assert_eq!(value("Labour"), "£924");
        assert_eq!(value("Materials"), "£951");
        assert_eq!(value("Overheads & contingency"), "£244");
        assert_eq!(value("Estimated total"), "£2,119");
        assert_eq!(value("Likely duration"), "~2 day(s)");
    }

    #[test]
    fn test_zero_area_shows_dash() {
        let config = SiteConfig::default();
        let input = EstimateInput::new(0.0, 3.0);
        let result = estimate(&config.pricing, &input);
        let rows = estimate_rows(&input, &result);
        assert!(rows.contains(&("Area", "—".to_string())));
    }
}
