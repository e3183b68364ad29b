// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent chrome band (toolbar, header, footer).
pub fn chrome(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::ZINC_900
        })),
        border: Border {
            color: palette::ZINC_800,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Project/lab card surface.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::ZINC_900
        })),
        border: Border {
            color: palette::ZINC_800,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Small emerald tech chip.
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::ACCENT_FILL,
            ..palette::EMERALD_500
        })),
        text_color: Some(palette::EMERALD_300),
        border: Border {
            color: Color {
                a: 0.3,
                ..palette::EMERALD_500
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Neutral block standing in for media that is loading or failed.
pub fn media_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_800)),
        text_color: Some(palette::ZINC_400),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_950)),
        text_color: Some(palette::ZINC_100),
        ..Default::default()
    }
}
