// SPDX-License-Identifier: MPL-2.0
//! UI components for the portfolio view.
//!
//! Each module renders one region of the page and emits its own `Message`
//! enum; the application maps those into its top-level message type.

pub mod bio_header;
pub mod bio_page;
pub mod design_tokens;
pub mod lightbox;
pub mod project_card;
pub mod section_tabs;
pub mod styles;
pub mod toolbar;
