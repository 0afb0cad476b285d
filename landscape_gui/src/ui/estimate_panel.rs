//! Estimate Panel (Right)
//!
//! Shows the breakdown for the current form values and the two quick actions
//! (copy summary, send to WhatsApp).

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Element, Length, Padding};

use landscape_core::format::{format_area, format_gbp, format_gbp_range};
use landscape_core::{EstimateInput, EstimateResult};

use crate::Message;

/// Render the estimate breakdown
pub fn view(input: EstimateInput, result: EstimateResult) -> Element<'static, Message> {
    let area = if input.area_m2() > 0.0 {
        format_area(result.area_m2)
    } else {
        "—".to_string()
    };

    let muted = [0.42, 0.45, 0.5];

    let breakdown: Column<'static, Message> = column![
        key_value("Area", area, 12),
        key_value("Labour", format_gbp(result.labour), 12),
        key_value("Materials", format_gbp(result.materials), 12),
        key_value(
            "Overheads & contingency",
            format_gbp(result.overheads_and_contingency()),
            12
        ),
        Space::new().height(6),
        key_value("Estimated total", format_gbp(result.total), 15),
        row![
            text("Likely range").size(11).color(muted),
            Space::new().width(Length::Fill),
            text(format_gbp_range(result.low, result.high)).size(11).color(muted),
        ],
        row![
            text("Likely duration").size(11).color(muted),
            Space::new().width(Length::Fill),
            text(format!("~{} day(s)", result.days)).size(11).color(muted),
        ],
    ]
    .spacing(4);

    let actions = row![
        button(text("Copy summary").size(11))
            .on_press(Message::CopySummary)
            .padding(Padding::from([6, 12]))
            .width(Length::Fill)
            .style(button::secondary),
        button(text("Send to WhatsApp").size(11))
            .on_press(Message::OpenWhatsApp)
            .padding(Padding::from([6, 12]))
            .width(Length::Fill)
            .style(button::primary),
    ]
    .spacing(8);

    let panel = column![
        text(input.project.label()).size(14),
        Space::new().height(8),
        breakdown,
        Space::new().height(12),
        actions,
        Space::new().height(8),
        text(
            "Guide only. Final quotes follow a site visit and written scope. \
             Prices assume materials delivered to site. VAT not included unless specified."
        )
        .size(10)
        .color(muted),
    ];

    container(panel.padding(8))
        .width(Length::FillPortion(45))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn key_value(label: &'static str, value: String, size: u32) -> Element<'static, Message> {
    row![
        text(label).size(size),
        Space::new().width(Length::Fill),
        text(value).size(size),
    ]
    .into()
}
