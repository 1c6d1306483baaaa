/// UI building blocks
///
/// - Notices shown after each action (notice.rs)
/// - Preview panes for the original and edited images

pub mod notice;

pub use notice::{Notice, NoticeLevel};

use iced::widget::image::Handle;
use iced::widget::{column, container, image as picture, text};
use iced::{Alignment, Element, Length};

use crate::pipeline::Preview;

/// Fixed on-screen size of a preview pane
const PANE_SIDE: f32 = 200.0;

/// Upload preview pixels into an iced image handle (no disk round trip)
pub fn preview_handle(preview: Preview) -> Handle {
    Handle::from_rgba(preview.width, preview.height, preview.rgba)
}

/// A labelled pane showing `handle`, or just the label while empty
pub fn preview_pane<'a, Message: 'a>(label: &'a str, handle: Option<&Handle>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match handle {
        Some(handle) => picture(handle.clone())
            .width(Length::Fixed(PANE_SIDE))
            .height(Length::Fixed(PANE_SIDE))
            .into(),
        None => container(text("No image").size(14))
            .width(Length::Fixed(PANE_SIDE))
            .height(Length::Fixed(PANE_SIDE))
            .center_x(Length::Fixed(PANE_SIDE))
            .center_y(Length::Fixed(PANE_SIDE))
            .into(),
    };

    column![text(label).size(16), body]
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
}
