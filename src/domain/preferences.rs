// SPDX-License-Identifier: MPL-2.0
//! Font-scale preference.
//!
//! One of three tiers applied as a multiplier to every typography token at
//! view time. Held only in memory; the preference resets to `Base` on every
//! launch.

/// Text-scale tier selected from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontScale {
    Small,
    #[default]
    Base,
    Large,
}

impl FontScale {
    /// All tiers in toolbar order.
    pub const ALL: [FontScale; 3] = [FontScale::Small, FontScale::Base, FontScale::Large];

    /// Short tier name shown on the segmented buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FontScale::Small => "sm",
            FontScale::Base => "base",
            FontScale::Large => "lg",
        }
    }

    /// Multiplier applied to typography tokens.
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            FontScale::Small => 0.875,
            FontScale::Base => 1.0,
            FontScale::Large => 1.125,
        }
    }

    /// Scales a base text size by this tier.
    #[must_use]
    pub fn apply(self, size: f32) -> f32 {
        size * self.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tier_is_base() {
        assert_eq!(FontScale::default(), FontScale::Base);
        assert_eq!(FontScale::Base.factor(), 1.0);
    }

    #[test]
    fn tiers_scale_monotonically() {
        assert!(FontScale::Small.factor() < FontScale::Base.factor());
        assert!(FontScale::Base.factor() < FontScale::Large.factor());
    }

    #[test]
    fn apply_multiplies_base_size() {
        assert_eq!(FontScale::Base.apply(16.0), 16.0);
        assert_eq!(FontScale::Small.apply(16.0), 14.0);
        assert_eq!(FontScale::Large.apply(16.0), 18.0);
    }
}
