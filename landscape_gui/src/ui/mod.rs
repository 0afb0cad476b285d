//! UI module for the estimator window
//!
//! # Layout
//! - `header` - Brand, service areas, Call/WhatsApp buttons, settings dropdown
//! - `estimate_form` - Left: project type, dimensions, tier, access, waste, notes
//! - `estimate_panel` - Right: live breakdown, range, duration, copy/send actions
//! - `gallery_panel` - Recent work thumbnails
//! - `enquiry_form` - Quick enquiry details with email/WhatsApp buttons
//! - `status_bar` - Footer line and bottom status messages
//! - `lightbox` - Full-size photo overlay

pub mod header;
pub mod estimate_form;
pub mod estimate_panel;
pub mod gallery_panel;
pub mod enquiry_form;
pub mod status_bar;
pub mod lightbox;
