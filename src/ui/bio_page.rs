// SPDX-License-Identifier: MPL-2.0
//! Bio tab body: a short prose page, no cards.

use crate::domain::FontScale;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub font_scale: FontScale,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scale = ctx.font_scale;
    let prose = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(ctx.i18n.tr("bio-heading"))
                .size(scale.apply(typography::TITLE_SM))
                .color(palette::EMERALD_300),
        )
        .push(
            Text::new(ctx.i18n.tr("bio-body"))
                .size(scale.apply(typography::BODY))
                .color(palette::ZINC_300),
        );

    Container::new(prose)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_at_every_font_scale() {
        let i18n = I18n::default();
        for scale in FontScale::ALL {
            let _element: Element<'_, ()> = view(ViewContext {
                i18n: &i18n,
                font_scale: scale,
            });
        }
    }
}
