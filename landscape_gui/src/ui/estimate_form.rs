//! Estimate Form (Left)
//!
//! Project type, length/width, material quality, access, waste and notes.
//! Every change re-runs the estimate on the next render.

use iced::widget::{column, container, pick_list, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length};

use landscape_core::choices::{MaterialTier, ProjectType, SiteAccess, WasteLevel};

use crate::{App, Message};

/// Render the estimate form
pub fn view(app: &App) -> Element<'_, Message> {
    let panel: Column<'_, Message> = column![
        text("Instant Estimate").size(16),
        text("Get a ballpark cost and timeframe. For an exact quote, send photos via WhatsApp.")
            .size(11)
            .color([0.42, 0.45, 0.5]),
        Space::new().height(8),
        labeled_row(
            "Project type",
            pick_list(&ProjectType::ALL[..], Some(app.project), Message::ProjectSelected)
                .width(Length::Fill)
                .text_size(11)
                .into(),
        ),
        row![
            labeled_row("Length (m)", dimension_input(&app.length, Message::LengthChanged)),
            Space::new().width(8),
            labeled_row("Width (m)", dimension_input(&app.width, Message::WidthChanged)),
        ],
        row![
            labeled_row(
                "Material quality",
                pick_list(&MaterialTier::ALL[..], Some(app.tier), Message::TierSelected)
                    .width(Length::Fill)
                    .text_size(11)
                    .into(),
            ),
            Space::new().width(8),
            labeled_row(
                "Access",
                pick_list(&SiteAccess::ALL[..], Some(app.access), Message::AccessSelected)
                    .width(Length::Fill)
                    .text_size(11)
                    .into(),
            ),
        ],
        labeled_row(
            "Waste",
            pick_list(&WasteLevel::ALL[..], Some(app.waste), Message::WasteSelected)
                .width(Length::Fill)
                .text_size(11)
                .into(),
        ),
        labeled_row(
            "Extra notes (optional)",
            text_input(
                "Stone type, photos to WhatsApp, access notes, skip on drive, drainage, etc.",
                &app.enquiry.notes,
            )
            .on_input(Message::NotesChanged)
            .padding(4)
            .size(11)
            .into(),
        ),
    ]
    .spacing(8);

    container(panel.padding(8))
        .width(Length::FillPortion(55))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn dimension_input<'a>(value: &'a str, on_change: fn(String) -> Message) -> Element<'a, Message> {
    text_input("0", value)
        .on_input(on_change)
        .width(Length::Fill)
        .padding(4)
        .size(11)
        .into()
}

/// Label stacked above its control
fn labeled_row<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(11), control]
        .spacing(3)
        .width(Length::Fill)
        .align_x(Alignment::Start)
        .into()
}
