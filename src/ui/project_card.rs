// SPDX-License-Identifier: MPL-2.0
//! Project/lab card.
//!
//! Two-column body (description and tech chips beside the hero media),
//! link actions overlaid on the hero, and a thumbnail strip below. The
//! hero is `media[0]`: a video hero shows its thumbnail with a play
//! affordance that opens the lightbox; an image hero is not interactive
//! itself, only the strip thumbnails are.

use crate::content::{ContentItem, LinkAction};
use crate::domain::FontScale;
use crate::i18n::fluent::I18n;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Image, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Border, Color, ContentFit, Element, Length, Theme,
};

/// 16:9 media boxes everywhere on the card.
const ASPECT: f32 = 9.0 / 16.0;

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub font_scale: FontScale,
    pub thumbnails: &'a ThumbnailCache,
}

/// Messages emitted by a card. The parent attaches the item identity.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the lightbox on the media entry at this index.
    OpenMedia(usize),
    /// Open an external link in the system browser.
    OpenLink(String),
}

/// Render one card.
pub fn view<'a>(item: &'a ContentItem, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scale = ctx.font_scale;

    let mut text_column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(&item.title).size(scale.apply(typography::TITLE_MD)))
        .push(
            Text::new(&item.description)
                .size(scale.apply(typography::BODY))
                .color(palette::ZINC_300),
        );

    if !item.tech.is_empty() {
        text_column = text_column
            .push(
                Text::new(ctx.i18n.tr("tech-stack-heading"))
                    .size(scale.apply(typography::CAPTION))
                    .color(palette::EMERALD_300),
            )
            .push(tech_chips(item, scale));
    }

    let body = Row::new()
        .spacing(spacing::MD)
        .push(text_column)
        .push(hero(item, &ctx));

    // The strip covers every media entry, hero included. For an image
    // hero (non-interactive by itself) the strip is the only way into
    // the lightbox, so it renders even for single-media items.
    let card = Column::new()
        .spacing(spacing::MD)
        .push(body)
        .push(
            Text::new(ctx.i18n.tr("more-media-heading"))
                .size(scale.apply(typography::CAPTION))
                .color(palette::ZINC_400),
        )
        .push(thumbnail_strip(item, &ctx));

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

fn tech_chips(item: &ContentItem, scale: FontScale) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for tech in &item.tech {
        row = row.push(
            Container::new(Text::new(tech).size(scale.apply(typography::CAPTION)))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::chip),
        );
    }
    row.into()
}

/// Hero media with the link actions overlaid bottom-left.
fn hero<'a>(item: &'a ContentItem, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(hero) = item.hero() else {
        return media_box(ctx, None, sizing::HERO_WIDTH);
    };

    let address = hero.thumbnail_address();
    let picture = media_box(ctx, Some(&address), sizing::HERO_WIDTH);

    let hero_layer: Element<'a, Message> = if hero.is_video() {
        // Thumbnail plus centered play badge, the whole area opens media 0.
        let framed = Stack::new()
            .push(picture)
            .push(
                Container::new(play_badge(32.0))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        button(framed)
            .on_press(Message::OpenMedia(0))
            .padding(0)
            .style(styles::button::thumbnail)
            .into()
    } else {
        picture
    };

    let mut layers = Stack::new().push(hero_layer);

    let actions = link_actions(item, ctx);
    if !actions.is_empty() {
        let mut row = Row::new().spacing(spacing::XS);
        for action in actions {
            row = row.push(action);
        }
        layers = layers.push(
            Container::new(row)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Bottom)
                .padding(spacing::XS),
        );
    }

    layers.into()
}

/// One button per `links` entry; else one generic action for the legacy
/// link; else nothing.
fn link_actions<'a>(item: &'a ContentItem, ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    let scale = ctx.font_scale;
    item.actions()
        .into_iter()
        .map(|action| {
            let label = match &action {
                LinkAction::Labeled { label, .. } => (*label).to_owned(),
                LinkAction::Generic { .. } => ctx.i18n.tr("view-link-label"),
            };
            button(Text::new(label).size(scale.apply(typography::CAPTION)))
                .on_press(Message::OpenLink(action.href().to_owned()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::accent)
                .into()
        })
        .collect()
}

/// Thumbnail strip over every media entry, each opening the lightbox at
/// its index.
fn thumbnail_strip<'a>(item: &'a ContentItem, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for (idx, entry) in item.media.iter().enumerate() {
        let address = entry.thumbnail_address();
        let mut layers = Stack::new().push(media_box(ctx, Some(&address), sizing::THUMB_WIDTH));
        if entry.is_video() {
            layers = layers.push(
                Container::new(play_badge(16.0))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }
        row = row.push(
            button(layers)
                .on_press(Message::OpenMedia(idx))
                .padding(0)
                .style(styles::button::thumbnail),
        );
    }
    row.into()
}

/// A fixed 16:9 media box: the cached image, or a neutral placeholder
/// while loading / after a failed fetch.
fn media_box<'a>(
    ctx: &ViewContext<'a>,
    address: Option<&str>,
    width: f32,
) -> Element<'a, Message> {
    let height = width * ASPECT;
    let handle = address.and_then(|address| ctx.thumbnails.handle(address));
    match handle {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let key = match address {
                Some(address) if ctx.thumbnails.is_failed(address) => "media-unavailable",
                _ => "media-loading",
            };
            Container::new(
                Text::new(ctx.i18n.tr(key)).size(ctx.font_scale.apply(typography::CAPTION)),
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

fn play_badge<'a>(size: f32) -> Element<'a, Message> {
    container(Text::new("▶").size(size).color(palette::WHITE))
        .padding(spacing::XS)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: opacity::PLAY_BADGE,
                ..palette::BLACK
            })),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::domain::Section;

    #[test]
    fn every_catalog_card_renders() {
        let i18n = I18n::default();
        let thumbnails = ThumbnailCache::new();
        let catalog = Catalog::load(None);
        for section in [Section::Projects, Section::Lab] {
            for item in catalog.items_for(section) {
                let _element = view(
                    item,
                    ViewContext {
                        i18n: &i18n,
                        font_scale: FontScale::Base,
                        thumbnails: &thumbnails,
                    },
                );
            }
        }
    }

    #[test]
    fn single_media_item_still_renders_the_thumbnail_strip() {
        let i18n = I18n::default();
        let thumbnails = ThumbnailCache::new();
        let item = ContentItem {
            id: "solo".into(),
            title: "Solo".into(),
            description: "One image, no other way into the lightbox".into(),
            tech: Vec::new(),
            media: vec![crate::content::MediaEntry::Image {
                src: "images/solo.png".into(),
                alt: None,
            }],
            links: Vec::new(),
            link: None,
        };
        let _element = view(
            &item,
            ViewContext {
                i18n: &i18n,
                font_scale: FontScale::Base,
                thumbnails: &thumbnails,
            },
        );
    }

    #[test]
    fn card_renders_with_cached_media() {
        let i18n = I18n::default();
        let catalog = Catalog::load(None);
        let mut thumbnails = ThumbnailCache::new();
        for address in catalog.media_addresses() {
            thumbnails.insert(
                address,
                Ok(iced::widget::image::Handle::from_rgba(1, 1, vec![0_u8; 4])),
            );
        }
        let item = &catalog.items_for(Section::Projects)[0];
        let _element = view(
            item,
            ViewContext {
                i18n: &i18n,
                font_scale: FontScale::Small,
                thumbnails: &thumbnails,
            },
        );
    }
}
