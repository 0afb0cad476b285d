//! # landscape_core - Instant Estimate Engine
//!
//! `landscape_core` holds everything behind the "Instant Estimate" card of a
//! landscaping business site: rate tables, the layered site configuration,
//! the estimate itself, and the text of the outbound WhatsApp, email and
//! clipboard messages. The front ends (`landscape_cli`, `landscape_gui`) only
//! collect inputs and render what this crate returns.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the estimate is a pure function of config and input
//! - **Closed choices**: project, tier, access and waste are enums, so every
//!   rate lookup is exhaustive and a missing table entry falls back to its default
//! - **Always show something**: bad dimensions count as zero, a broken or
//!   unreachable config keeps the built-in rates
//! - **JSON-First**: config, inputs and results implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use landscape_core::{estimate, EstimateInput, SiteConfig};
//! use landscape_core::choices::{MaterialTier, ProjectType};
//!
//! let config = SiteConfig::default();
//! let input = EstimateInput::from_text("5", "2.4")
//!     .with_project(ProjectType::ShedBase)
//!     .with_tier(MaterialTier::Basic);
//!
//! let result = estimate(&config.pricing, &input);
//! assert_eq!(result.days, 2);
//! ```
//!
//! ## Modules
//!
//! - [`choices`] - Project type, material tier, site access, waste level
//! - [`pricing`] - Rate tables and their built-in defaults
//! - [`config`] - Brand + pricing, override documents and the merge
//! - [`estimator`] - The estimate calculation and dimension parsing
//! - [`messages`] - WhatsApp / mailto / summary text and links
//! - [`format`] - Currency and area formatting
//! - [`gallery`] - Recent-work image enumeration
//! - [`errors`] - Structured error types
//! - `remote` - One-shot fetch of `/config.json` (feature `remote`, always
//!   on under `cargo test`)

pub mod choices;
pub mod config;
pub mod errors;
pub mod estimator;
pub mod format;
pub mod gallery;
pub mod messages;
pub mod pricing;
#[cfg(feature = "remote")]
pub mod remote;

// Re-export commonly used types at crate root for convenience
pub use config::{Brand, ConfigOverride, SiteConfig};
pub use errors::{LandscapeError, LandscapeResult};
pub use estimator::{estimate, parse_dimension, EstimateInput, EstimateResult};
pub use messages::{Enquiry, QuoteContext};
pub use pricing::PricingConfig;
