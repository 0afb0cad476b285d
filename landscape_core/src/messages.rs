//! # Quote Messages and Links
//!
//! Text for the three outbound actions: a WhatsApp deep link, a `mailto:`
//! enquiry and the plain "copy summary" block. All of them interpolate the
//! same estimate, so they are built from one [`QuoteContext`].
//!
//! Query values are percent-encoded with the component set used by browsers
//! for `encodeURIComponent`: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
//!
//! ## Example
//!
//! ```rust
//! use landscape_core::config::SiteConfig;
//! use landscape_core::estimator::{estimate, EstimateInput};
//! use landscape_core::messages::{Enquiry, QuoteContext};
//!
//! let config = SiteConfig::default();
//! let input = EstimateInput::new(4.0, 3.0);
//! let result = estimate(&config.pricing, &input);
//! let enquiry = Enquiry::default();
//!
//! let quote = QuoteContext::new(&config.brand, &input, &result, &enquiry);
//! assert!(quote.whatsapp_link().starts_with("https://wa.me/447785585870?text=Hi%20"));
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::config::Brand;
use crate::estimator::{EstimateInput, EstimateResult};
use crate::format::{format_area, format_dimension, format_gbp_range};

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Customer details from the enquiry form. Every field may be blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub name: String,
    pub postcode: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl Enquiry {
    /// Phone if given, otherwise email
    pub fn contact(&self) -> Option<&str> {
        non_blank(&self.phone).or_else(|| non_blank(&self.email))
    }

    fn notes(&self) -> Option<&str> {
        non_blank(&self.notes)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Everything an outbound message needs.
#[derive(Debug, Clone, Copy)]
pub struct QuoteContext<'a> {
    pub brand: &'a Brand,
    pub input: &'a EstimateInput,
    pub result: &'a EstimateResult,
    pub enquiry: &'a Enquiry,
}

impl<'a> QuoteContext<'a> {
    pub fn new(
        brand: &'a Brand,
        input: &'a EstimateInput,
        result: &'a EstimateResult,
        enquiry: &'a Enquiry,
    ) -> Self {
        QuoteContext {
            brand,
            input,
            result,
            enquiry,
        }
    }

    /// `4m x 3m (≈ 12.0 m²)`
    fn size_line(&self) -> String {
        format!(
            "{}m x {}m (≈ {})",
            format_dimension(self.input.length_m),
            format_dimension(self.input.width_m),
            format_area(self.result.area_m2)
        )
    }

    /// `£1,907–£2,331 over ~2 day(s)`
    fn range_line(&self) -> String {
        format!(
            "{} over ~{} day(s)",
            format_gbp_range(self.result.low, self.result.high),
            self.result.days
        )
    }

    /// Plain-text WhatsApp message, one fact per line
    pub fn whatsapp_message(&self) -> String {
        let enquiry = self.enquiry;
        let lines = [
            format!("Hi {}, I'd like an exact quote.", self.brand.owner),
            format!("Project: {}", self.input.project.label()),
            format!("Size: {}", self.size_line()),
            format!("Material tier: {}", self.input.tier.label()),
            format!("Access: {}", self.input.access.label()),
            format!("Waste: {}", self.input.waste.label()),
            enquiry.notes().map(|n| format!("Notes: {}", n)).unwrap_or_default(),
            format!(
                "My details: {}, {}, {}",
                non_blank(&enquiry.name).unwrap_or("(name)"),
                non_blank(&enquiry.postcode).unwrap_or("(postcode)"),
                enquiry.contact().unwrap_or("(contact)")
            ),
            format!("Estimator shows ~{}.", self.range_line()),
        ];
        lines
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `https://wa.me/<digits>?text=<message>`
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.brand.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!(
            "https://wa.me/{}?text={}",
            digits,
            encode_component(&self.whatsapp_message())
        )
    }

    pub fn email_subject(&self) -> String {
        format!("{} enquiry — {}", self.brand.name, self.input.project.label())
    }

    pub fn email_body(&self) -> String {
        let enquiry = self.enquiry;
        let mut body = format!("Hello {},\n\n", self.brand.owner);
        body.push_str(&format!("I'm interested in: {}\n", self.input.project.label()));
        body.push_str(&format!("Size: {}\n", self.size_line()));
        body.push_str(&format!("Tier: {}\n", self.input.tier.label()));
        body.push_str(&format!("Access: {}\n", self.input.access.label()));
        body.push_str(&format!("Waste: {}\n", self.input.waste.label()));
        if let Some(notes) = enquiry.notes() {
            body.push_str(&format!("Notes: {}\n", notes));
        }
        body.push_str(&format!("Estimator range: {}.\n\n", self.range_line()));

        let mut details = vec!["My details:".to_string()];
        if let Some(name) = non_blank(&enquiry.name) {
            details.push(name.to_string());
        }
        if let Some(postcode) = non_blank(&enquiry.postcode) {
            details.push(format!("({})", postcode));
        }
        if let Some(contact) = enquiry.contact() {
            details.push(format!("— {}", contact));
        }
        body.push_str(&details.join(" "));
        body
    }

    /// `mailto:<address>?subject=<subject>&body=<body>`
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.brand.email,
            encode_component(&self.email_subject()),
            encode_component(&self.email_body())
        )
    }

    /// `tel:` link for the Call button
    pub fn tel_link(&self) -> String {
        tel_link(self.brand)
    }

    /// Text placed on the clipboard by "Copy summary"
    pub fn summary_text(&self) -> String {
        let mut summary = format!(
            "PROJECT SUMMARY\n{}\n{}\nTier: {}\nAccess: {}\nWaste: {}\nEstimate: {}",
            self.input.project.label(),
            self.size_line(),
            self.input.tier.label(),
            self.input.access.label(),
            self.input.waste.label(),
            self.range_line()
        );
        if let Some(notes) = self.enquiry.notes() {
            summary.push_str(&format!("\nNotes: {}", notes));
        }
        summary
    }
}

/// `tel:` link with spaces removed
pub fn tel_link(brand: &Brand) -> String {
    let number: String = brand.phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::estimator::estimate;

    fn patio() -> (SiteConfig, EstimateInput, EstimateResult) {
        let config = SiteConfig::default();
        let input = EstimateInput::new(4.0, 3.0);
        let result = estimate(&config.pricing, &input);
        (config, input, result)
    }

    #[test]
    fn test_encode_component_matches_browser_set() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("£ ≈\n"), "%C2%A3%20%E2%89%88%0A");
    }

    #[test]
    fn test_whatsapp_message_without_details() {
        let (config, input, result) = patio();
        let enquiry = Enquiry::default();
        let quote = QuoteContext::new(&config.brand, &input, &result, &enquiry);

        let expected = "Hi Bates Landscapes, I'd like an exact quote.\n\
            Project: Patio (natural stone or porcelain)\n\
            Size: 4m x 3m (≈ 12.0 m²)\n\
            Material tier: ££ (mid)\n\
            Access: Normal\n\
            Waste: Some\n\
            My details: (name), (postcode), (contact)\n\
            Estimator shows ~£1,907–£2,331 over ~2 day(s).";
        assert_eq!(quote.whatsapp_message(), expected);
    }

    #[test]
    fn test_whatsapp_message_with_details() {
        let (config, input, result) = patio();
        let enquiry = Enquiry {
            name: "Jane Doe".to_string(),
            postcode: "S7 1AA".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            notes: "Skip on drive".to_string(),
        };
        let message = QuoteContext::new(&config.brand, &input, &result, &enquiry).whatsapp_message();
        assert!(message.contains("\nNotes: Skip on drive\n"));
        assert!(message.contains("My details: Jane Doe, S7 1AA, jane@example.com"));
    }

    #[test]
    fn test_whatsapp_link_uses_digits_only() {
        let (mut config, input, result) = patio();
        config.brand.whatsapp = "+44 7785-585870".to_string();
        let enquiry = Enquiry::default();
        let link = QuoteContext::new(&config.brand, &input, &result, &enquiry).whatsapp_link();
        assert!(link.starts_with("https://wa.me/447785585870?text="));
        assert!(!link.contains(' '));
        assert!(link.contains("%0AProject%3A%20Patio"));
    }

    #[test]
    fn test_mailto_link() {
        let (config, input, result) = patio();
        let enquiry = Enquiry {
            name: "Jane".to_string(),
            postcode: "S7 1AA".to_string(),
            phone: "07123 456789".to_string(),
            ..Default::default()
        };
        let quote = QuoteContext::new(&config.brand, &input, &result, &enquiry);

        assert_eq!(
            quote.email_subject(),
            "Bates Landscapes enquiry — Patio (natural stone or porcelain)"
        );
        let body = quote.email_body();
        assert!(body.starts_with("Hello Bates Landscapes,\n\nI'm interested in: Patio"));
        assert!(body.contains("Estimator range: £1,907–£2,331 over ~2 day(s).\n\n"));
        assert!(body.ends_with("My details: Jane (S7 1AA) — 07123 456789"));

        let link = quote.mailto_link();
        assert!(link.starts_with("mailto:jrboyce@hotmail.com?subject=Bates%20Landscapes%20enquiry%20%E2%80%94%20"));
        assert!(link.contains("&body=Hello%20Bates%20Landscapes%2C%0A%0A"));
    }

    #[test]
    fn test_summary_text() {
        let (config, input, result) = patio();
        let enquiry = Enquiry::default();
        let summary = QuoteContext::new(&config.brand, &input, &result, &enquiry).summary_text();
        assert_eq!(
            summary,
            "PROJECT SUMMARY\nPatio (natural stone or porcelain)\n4m x 3m (≈ 12.0 m²)\n\
             Tier: ££ (mid)\nAccess: Normal\nWaste: Some\nEstimate: £1,907–£2,331 over ~2 day(s)"
        );
    }

    #[test]
    fn test_summary_area_rounds_ties_up() {
        let config = SiteConfig::default();
        let input = EstimateInput::from_text("1.5", "1.5");
        let result = estimate(&config.pricing, &input);
        let enquiry = Enquiry::default();
        let summary = QuoteContext::new(&config.brand, &input, &result, &enquiry).summary_text();
        assert!(summary.contains("\n1.5m x 1.5m (≈ 2.3 m²)\n"));
    }

    #[test]
    fn test_tel_link() {
        assert_eq!(tel_link(&SiteConfig::default().brand), "tel:+447785585870");
    }
}
