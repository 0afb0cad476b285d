//! Status Bar (Bottom)
//!
//! Displays:
//! - Where the current rates came from
//! - Status messages
//!
//! plus the page footer line above it.

use chrono::Datelike;
use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use landscape_core::Brand;

use crate::{ConfigSource, Message};

/// Render the status bar
pub fn view_status_bar<'a>(source: &'a ConfigSource, status: &'a str) -> Element<'a, Message> {
    row![
        text(source.to_string()).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}

/// Copyright footer
pub fn view_footer(brand: &Brand) -> Element<'static, Message> {
    let year = chrono::Local::now().year();
    text(format!("© {} {}. Built with love and graft.", year, brand.name))
        .size(10)
        .color([0.5, 0.5, 0.5])
        .into()
}
