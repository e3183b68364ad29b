// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Emerald action button (link actions, lightbox "watch").
pub fn accent(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::EMERALD_500,
        _ => palette::EMERALD_600,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::EMERALD_800,
            width: 1.0,
            radius: radius::SM.into(),
        },
        snap: true,
        ..Default::default()
    }
}

/// Selected section tab: emerald outline, accent text, transparent fill.
pub fn tab_selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::EMERALD_300,
        border: Border {
            color: palette::EMERALD_500,
            width: 1.0,
            radius: radius::LG.into(),
        },
        snap: true,
        ..Default::default()
    }
}

/// Unselected section tab: muted outline, hover fill.
pub fn tab_unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(palette::ZINC_800)),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::ZINC_300,
        border: Border {
            color: palette::ZINC_700,
            width: 1.0,
            radius: radius::LG.into(),
        },
        snap: true,
        ..Default::default()
    }
}

/// Selected segment of the font-size toggle group.
pub fn toggle_selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::ACCENT_FILL,
            ..palette::EMERALD_500
        })),
        text_color: palette::EMERALD_300,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        snap: true,
        ..Default::default()
    }
}

/// Unselected segment of the font-size toggle group.
pub fn toggle_unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ZINC_700,
        _ => palette::ZINC_800,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::ZINC_300,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        snap: true,
        ..Default::default()
    }
}

/// Media thumbnail frame; the emerald ring marks hover/focus.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::EMERALD_500,
        _ => palette::ZINC_800,
    };
    button::Style {
        background: None,
        text_color: palette::ZINC_300,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        snap: true,
        ..Default::default()
    }
}

/// Lightbox close button, an outlined chip on the backdrop.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ZINC_800,
        _ => palette::ZINC_900,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::ZINC_100,
        border: Border {
            color: palette::ZINC_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        snap: true,
        ..Default::default()
    }
}
