// SPDX-License-Identifier: MPL-2.0
//! Preferences toolbar: language select and font-size toggle group.
//!
//! Rendered floating in the top-right corner on wide layouts and inline in
//! the header band on narrow ones. Both placements share this view.

use crate::domain::FontScale;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, Row, Text};
use iced::{alignment::Vertical, Element};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub font_scale: FontScale,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    FontScaleSelected(FontScale),
}

/// Pick-list entry showing the locale under its localized language name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LocaleOption {
    id: LanguageIdentifier,
    label: String,
}

impl LocaleOption {
    fn new(id: LanguageIdentifier, i18n: &I18n) -> Self {
        let label = i18n.tr(&format!("language-name-{id}"));
        Self { id, label }
    }
}

impl fmt::Display for LocaleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Render the toolbar row.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scale = ctx.font_scale;
    let caption = |key: &str| {
        Text::new(ctx.i18n.tr(key)).size(scale.apply(typography::CAPTION))
    };

    let options: Vec<LocaleOption> = ctx
        .i18n
        .available_locales
        .iter()
        .cloned()
        .map(|id| LocaleOption::new(id, ctx.i18n))
        .collect();
    let selected = LocaleOption::new(ctx.i18n.current_locale().clone(), ctx.i18n);
    let language_picker = pick_list(options, Some(selected), |option| {
        Message::LanguageSelected(option.id)
    })
    .text_size(scale.apply(typography::CAPTION))
    .padding([spacing::XXS, spacing::XS]);

    let mut toggle_group = Row::new().spacing(spacing::XXS);
    for tier in FontScale::ALL {
        let style = if tier == scale {
            styles::button::toggle_selected
        } else {
            styles::button::toggle_unselected
        };
        toggle_group = toggle_group.push(
            button(Text::new(tier.label()).size(scale.apply(typography::CAPTION)))
                .on_press(Message::FontScaleSelected(tier))
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(caption("toolbar-language-label"))
        .push(language_picker)
        .push(caption("toolbar-font-size-label"))
        .push(toggle_group)
        .into()
}
