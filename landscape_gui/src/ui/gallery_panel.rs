//! Recent Work gallery
//!
//! Thumbnails of every image in the gallery folder, three to a row.
//! Clicking a thumbnail opens it in the lightbox.

use std::path::{Path, PathBuf};

use iced::widget::{button, column, image, row, text, Column, Row, Space};
use iced::{ContentFit, Element, Length};

use crate::Message;

const COLUMNS: usize = 3;
const THUMB_HEIGHT: f32 = 160.0;

/// Render the gallery section
pub fn view<'a>(dir: &'a Path, images: &'a [PathBuf]) -> Column<'a, Message> {
    let heading = column![
        text("Recent Work").size(14),
        text("A few real jobs around Sheffield & the Peaks. Ask for references and site photos.")
            .size(11)
            .color([0.42, 0.45, 0.5]),
    ]
    .spacing(2);

    if images.is_empty() {
        return heading.push(Space::new().height(6)).push(
            text(format!("No photos in {} yet.", dir.display()))
                .size(11)
                .color([0.5, 0.5, 0.5]),
        );
    }

    let mut grid: Column<'a, Message> = column![].spacing(8);
    for chunk in images.chunks(COLUMNS) {
        let mut thumbs: Row<'a, Message> = row![].spacing(8);
        for path in chunk {
            thumbs = thumbs.push(thumbnail(path));
        }
        // Pad the last row so thumbnails keep the same width
        for _ in chunk.len()..COLUMNS {
            thumbs = thumbs.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(thumbs);
    }

    heading.push(Space::new().height(8)).push(grid)
}

fn thumbnail(path: &Path) -> Element<'static, Message> {
    button(
        image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(THUMB_HEIGHT))
            .content_fit(ContentFit::Cover),
    )
    .on_press(Message::OpenLightbox(path.to_path_buf()))
    .padding(0)
    .width(Length::Fill)
    .style(button::text)
    .into()
}
