// SPDX-License-Identifier: MPL-2.0
//! Media lightbox overlay.
//!
//! Shown on top of the page when a media entry is open. Images render at
//! lightbox size; videos render their thumbnail with a watch button that
//! hands the URL to the system browser. Clicking the backdrop does not
//! close the overlay, only the close button does.

use crate::content::{ContentItem, MediaEntry};
use crate::domain::FontScale;
use crate::i18n::fluent::I18n;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

const ASPECT: f32 = 9.0 / 16.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub font_scale: FontScale,
    pub thumbnails: &'a ThumbnailCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    /// Open the video's watch page in the system browser.
    OpenLink(String),
}

/// Render the overlay for `item.media[index]`.
///
/// The caller guarantees the index is in range; the open transition
/// rejects out-of-range indices before state ever reaches a view.
pub fn view<'a>(
    item: &'a ContentItem,
    index: usize,
    ctx: ViewContext<'a>,
) -> Element<'a, Message> {
    let scale = ctx.font_scale;
    let entry = &item.media[index];

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(&item.title)
                .size(scale.apply(typography::TITLE_SM))
                .color(palette::ZINC_100),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(
                Text::new(ctx.i18n.tr("lightbox-close-label"))
                    .size(scale.apply(typography::CAPTION)),
            )
            .on_press(Message::Close)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::close),
        );

    let mut panel = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::LIGHTBOX_WIDTH))
        .push(header)
        .push(media(entry, &ctx));

    if let Some(watch_url) = entry.watch_url() {
        panel = panel.push(
            button(
                Text::new(ctx.i18n.tr("lightbox-watch-label"))
                    .size(scale.apply(typography::BODY)),
            )
            .on_press(Message::OpenLink(watch_url))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::accent),
        );
    }

    if let Some(caption) = entry.caption() {
        panel = panel.push(
            Text::new(caption)
                .size(scale.apply(typography::CAPTION))
                .color(palette::ZINC_400),
        );
    }

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop)
        .into()
}

fn media<'a>(entry: &'a MediaEntry, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let width = sizing::LIGHTBOX_WIDTH;
    let height = width * ASPECT;
    let address = entry.thumbnail_address();
    match ctx.thumbnails.handle(&address) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .into(),
        None => {
            let key = if ctx.thumbnails.is_failed(&address) {
                "media-unavailable"
            } else {
                "media-loading"
            };
            Container::new(
                Text::new(ctx.i18n.tr(key)).size(ctx.font_scale.apply(typography::BODY)),
            )
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::media_placeholder)
            .into()
        }
    }
}
