//! Lightbox overlay
//!
//! Full-size preview of a gallery photo over a dimmed backdrop. Clicking
//! anywhere closes it.

use std::path::Path;

use iced::widget::{button, container, image, Space};
use iced::{ContentFit, Element, Length};

use crate::Message;

/// Render the backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::CloseLightbox)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.75))
        })
        .into()
}

/// Render the enlarged photo, centered
pub fn view_lightbox(path: &Path) -> Element<'static, Message> {
    let photo = button(
        image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
    )
    .on_press(Message::CloseLightbox)
    .padding(0)
    .style(button::text);

    container(photo)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
