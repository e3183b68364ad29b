// SPDX-License-Identifier: MPL-2.0
//! Layout classification from window width.
//!
//! The classification is a pure function of a width measurement so the
//! header-switching logic can be tested without a real window. Acquisition
//! of the measurement (the resize subscription) lives in `app::subscription`.

/// Width below which the narrow (stacked) header layout is used.
pub const NARROW_BREAKPOINT: f32 = 768.0;

/// Header layout variant derived from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    /// Floating toolbar plus wide biography band.
    Wide,
    /// Combined header with an inline toolbar row.
    Narrow,
}

impl LayoutClass {
    /// Classifies a window width against the fixed breakpoint.
    #[must_use]
    pub fn classify(width: f32) -> Self {
        if width < NARROW_BREAKPOINT {
            LayoutClass::Narrow
        } else {
            LayoutClass::Wide
        }
    }

    #[must_use]
    pub fn is_narrow(self) -> bool {
        self == LayoutClass::Narrow
    }
}
