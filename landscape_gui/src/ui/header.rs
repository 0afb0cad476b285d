//! Header component
//!
//! Brand name and service areas on the left, contact buttons and the
//! settings dropdown on the right.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use landscape_core::Brand;

use crate::Message;

/// Render the header bar
pub fn view_header(brand: &Brand, settings_menu_open: bool) -> Element<'_, Message> {
    let title = column![
        text(&brand.name).size(22),
        text(&brand.areas).size(11).color([0.42, 0.45, 0.5]),
    ]
    .spacing(2);

    let contact_buttons = row![
        button(text("Call").size(11))
            .on_press(Message::Call)
            .padding(Padding::from([4, 10]))
            .style(button::secondary),
        button(text("WhatsApp").size(11))
            .on_press(Message::OpenWhatsApp)
            .padding(Padding::from([4, 10]))
            .style(button::primary),
    ]
    .spacing(6);

    let settings_button_text = if settings_menu_open { "Settings ▲" } else { "Settings ▼" };
    let settings_button = button(text(settings_button_text).size(11))
        .on_press(Message::ToggleSettingsMenu)
        .padding(Padding::from([4, 8]))
        .style(if settings_menu_open { button::primary } else { button::secondary });

    let strap = text(&brand.strap).size(14);

    column![
        row![
            title,
            Space::new().width(Length::Fill),
            contact_buttons,
            Space::new().width(12),
            settings_button,
        ]
        .align_y(Alignment::Center),
        Space::new().height(6),
        strap,
    ]
    .padding(Padding::from([4, 0]))
    .into()
}

/// Render the settings dropdown menu
pub fn view_settings_menu(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let dropdown_content = column![
        button(text(theme_label).size(10))
            .on_press(Message::ToggleDarkMode)
            .padding(Padding::from([4, 12]))
            .width(Length::Fill)
            .style(button::secondary),
        button(text("Load Rates…").size(10))
            .on_press(Message::LoadConfigFile)
            .padding(Padding::from([4, 12]))
            .width(Length::Fill)
            .style(button::secondary),
        button(text("Gallery Folder…").size(10))
            .on_press(Message::ChooseGalleryFolder)
            .padding(Padding::from([4, 12]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(2)
    .width(Length::Fixed(140.0));

    container(dropdown_content)
        .padding(4)
        .style(container::bordered_box)
        .into()
}
