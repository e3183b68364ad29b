// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the portfolio view.
//!
//! The palette follows the site's dark zinc surfaces with an emerald
//! accent. Typography tokens are base sizes; the font-scale preference
//! multiplies them at view time.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Zinc surfaces (dark to light)
    pub const ZINC_950: Color = Color::from_rgb(0.035, 0.035, 0.043);
    pub const ZINC_900: Color = Color::from_rgb(0.094, 0.094, 0.106);
    pub const ZINC_800: Color = Color::from_rgb(0.153, 0.153, 0.165);
    pub const ZINC_700: Color = Color::from_rgb(0.247, 0.247, 0.275);
    pub const ZINC_400: Color = Color::from_rgb(0.631, 0.631, 0.667);
    pub const ZINC_300: Color = Color::from_rgb(0.831, 0.831, 0.847);
    pub const ZINC_100: Color = Color::from_rgb(0.957, 0.957, 0.961);

    // Emerald accent
    pub const EMERALD_300: Color = Color::from_rgb(0.431, 0.906, 0.718);
    pub const EMERALD_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const EMERALD_600: Color = Color::from_rgb(0.020, 0.588, 0.412);
    pub const EMERALD_800: Color = Color::from_rgb(0.024, 0.373, 0.275);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimmed backdrop behind the lightbox.
    pub const BACKDROP: f32 = 0.8;
    /// Translucent chrome surfaces (toolbar, header bands, footer).
    pub const SURFACE: f32 = 0.9;
    /// Accent fill behind selected toggles and chips.
    pub const ACCENT_FILL: f32 = 0.12;
    /// Play badge circle on video thumbnails.
    pub const PLAY_BADGE: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Portrait diameter in the wide header.
    pub const PORTRAIT_LG: f32 = 128.0;
    /// Portrait diameter in the narrow header.
    pub const PORTRAIT_SM: f32 = 80.0;
    /// Hero media width on a card.
    pub const HERO_WIDTH: f32 = 420.0;
    /// Thumbnail strip entry width.
    pub const THUMB_WIDTH: f32 = 120.0;
    /// Lightbox media width.
    pub const LIGHTBOX_WIDTH: f32 = 900.0;
    /// Equal tab width so the switcher reads as one control.
    pub const TAB_WIDTH: f32 = 160.0;
    /// Content column cap, mirroring the page's max width.
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Name in the wide header.
    pub const TITLE_LG: f32 = 30.0;
    /// Name in the narrow header, card titles.
    pub const TITLE_MD: f32 = 22.0;
    /// Section headings inside cards.
    pub const TITLE_SM: f32 = 18.0;
    /// Body copy.
    pub const BODY: f32 = 15.0;
    /// Labels, chips, captions.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::PORTRAIT_LG > sizing::PORTRAIT_SM);
    assert!(sizing::LIGHTBOX_WIDTH > sizing::HERO_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn palette_channels_are_normalized() {
        for color in [palette::ZINC_950, palette::EMERALD_500] {
            assert!(color.r >= 0.0 && color.r <= 1.0);
            assert!(color.g >= 0.0 && color.g <= 1.0);
            assert!(color.b >= 0.0 && color.b <= 1.0);
        }
    }
}
