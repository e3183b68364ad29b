// SPDX-License-Identifier: MPL-2.0
//! Biography header band, in wide and narrow variants.
//!
//! The wide variant is a full-width band with the portrait beside the name
//! and tagline; the floating toolbar is layered separately. The narrow
//! variant stacks an inline toolbar row above the portrait/name row, as a
//! phone-width page would.

use crate::domain::FontScale;
use crate::i18n::fluent::I18n;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::toolbar;
use iced::widget::{container, Column, Container, Image, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Address of the portrait photo, resolved through the thumbnail cache.
pub const PORTRAIT_ADDRESS: &str = "images/pfp.jpg";

/// Contextual data needed to render either header variant.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub font_scale: FontScale,
    pub thumbnails: &'a ThumbnailCache,
}

/// Wide header: portrait, name, and tagline in one band.
pub fn wide(ctx: ViewContext<'_>) -> Element<'_, toolbar::Message> {
    let scale = ctx.font_scale;

    let identity = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("name")).size(scale.apply(typography::TITLE_LG)))
        .push(
            Text::new(ctx.i18n.tr("tagline"))
                .size(scale.apply(typography::BODY))
                .color(palette::ZINC_300),
        );

    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(portrait(&ctx, sizing::PORTRAIT_LG))
        .push(identity);

    band(Container::new(row).padding(spacing::XL).width(Length::Fill))
}

/// Narrow header: inline toolbar row, then portrait and name, then tagline.
pub fn narrow(ctx: ViewContext<'_>) -> Element<'_, toolbar::Message> {
    let scale = ctx.font_scale;

    let toolbar_row = Container::new(toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        font_scale: scale,
    }))
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding([spacing::SM, spacing::SM]);

    let name_row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(portrait(&ctx, sizing::PORTRAIT_SM))
        .push(Text::new(ctx.i18n.tr("name")).size(scale.apply(typography::TITLE_MD)));

    let column = Column::new()
        .spacing(spacing::SM)
        .push(toolbar_row)
        .push(Container::new(name_row).padding([0.0, spacing::MD]))
        .push(
            Container::new(
                Text::new(ctx.i18n.tr("tagline"))
                    .size(scale.apply(typography::BODY))
                    .color(palette::ZINC_300),
            )
            .padding([0.0, spacing::MD]),
        );

    band(Container::new(column).padding([0.0, 0.0]).width(Length::Fill))
}

fn band<'a>(
    content: Container<'a, toolbar::Message>,
) -> Element<'a, toolbar::Message> {
    container(content.padding(spacing::MD))
        .width(Length::Fill)
        .style(styles::container::chrome)
        .into()
}

fn portrait<'a>(ctx: &ViewContext<'a>, size: f32) -> Element<'a, toolbar::Message> {
    match ctx.thumbnails.handle(PORTRAIT_ADDRESS) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(""))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(styles::container::media_placeholder)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_header_renders_without_portrait() {
        let i18n = I18n::default();
        let thumbnails = ThumbnailCache::new();
        let _element = wide(ViewContext {
            i18n: &i18n,
            font_scale: FontScale::Base,
            thumbnails: &thumbnails,
        });
    }

    #[test]
    fn narrow_header_renders_with_portrait() {
        let i18n = I18n::default();
        let mut thumbnails = ThumbnailCache::new();
        thumbnails.insert(
            PORTRAIT_ADDRESS.to_owned(),
            Ok(iced::widget::image::Handle::from_rgba(1, 1, vec![0_u8; 4])),
        );
        let _element = narrow(ViewContext {
            i18n: &i18n,
            font_scale: FontScale::Large,
            thumbnails: &thumbnails,
        });
    }
}
