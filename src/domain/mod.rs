// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure view/selection state with no external dependencies.
//!
//! These modules hold the state that drives the portfolio view: the layout
//! classification, the active section, the lightbox state machine, and the
//! font-scale preference. All of it is plain data with synchronous
//! transitions so it stays testable without a display.

pub mod layout;
pub mod lightbox;
pub mod preferences;
pub mod section;

pub use layout::{LayoutClass, NARROW_BREAKPOINT};
pub use lightbox::Lightbox;
pub use preferences::FontScale;
pub use section::Section;
