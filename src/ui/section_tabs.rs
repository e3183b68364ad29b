// SPDX-License-Identifier: MPL-2.0
//! Section tab switcher.
//!
//! Three equal-width pill buttons, centered. Emits the selected [`Section`]
//! directly; the application wraps it into its own message type.

use crate::domain::{FontScale, Section};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the tabs.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Section,
    pub font_scale: FontScale,
}

/// Render the tab row.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Section> {
    let mut row = Row::new().spacing(spacing::MD);

    for section in Section::ALL {
        let style = if section == ctx.current {
            styles::button::tab_selected
        } else {
            styles::button::tab_unselected
        };
        let label = Text::new(ctx.i18n.tr(section.label_key()))
            .size(ctx.font_scale.apply(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center);
        row = row.push(
            button(label)
                .on_press(section)
                .width(Length::Fixed(sizing::TAB_WIDTH))
                .padding([spacing::XS, spacing::LG])
                .style(style),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::LG, 0.0])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_render_for_every_current_section() {
        let i18n = I18n::default();
        for section in Section::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                current: section,
                font_scale: FontScale::Base,
            });
        }
    }
}
