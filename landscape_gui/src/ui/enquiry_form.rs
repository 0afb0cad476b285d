//! Quick Enquiry form
//!
//! Name, postcode, email and phone for the outbound email or WhatsApp
//! message. All fields are optional.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use landscape_core::Enquiry;

use crate::Message;

/// Render the enquiry editor
pub fn view(enquiry: &Enquiry) -> Element<'_, Message> {
    let fields = column![
        row![
            labeled_input("Name:", "Jane Doe", &enquiry.name, Message::NameChanged),
            Space::new().width(12),
            labeled_input("Postcode:", "S7 1AA", &enquiry.postcode, Message::PostcodeChanged),
        ],
        row![
            labeled_input("Email:", "you@example.com", &enquiry.email, Message::EmailChanged),
            Space::new().width(12),
            labeled_input("Phone:", "07…", &enquiry.phone, Message::PhoneChanged),
        ],
    ]
    .spacing(6);

    let buttons = row![
        button(text("Send Enquiry Email").size(11))
            .on_press(Message::OpenEmail)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
        button(text("WhatsApp instead").size(11))
            .on_press(Message::OpenWhatsApp)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
    ]
    .spacing(8);

    container(
        column![
            text("Quick Enquiry").size(14),
            text("Prefer email? Share your details and we’ll confirm a site visit window.")
                .size(11)
                .color([0.42, 0.45, 0.5]),
            Space::new().height(8),
            fields,
            Space::new().height(12),
            buttons,
        ]
        .padding(8),
    )
    .width(Length::Fill)
    .style(container::bordered_box)
    .padding(5)
    .into()
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(70.0)),
        text_input(placeholder, value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .into()
}
