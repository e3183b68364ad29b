// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization goes through the Fluent system: one embedded `.ftl` copy
//! table per supported locale (`en`, `es`), loaded at startup, switched at
//! runtime from the toolbar. The copy tables must be total over every key
//! the views read; `COPY_KEYS` enumerates them so tests can enforce that.

pub mod fluent;

/// Every key the copy tables carry. Each locale bundle must define all of
/// them, so the page never shows mixed-language copy after a switch.
pub const COPY_KEYS: &[&str] = &[
    "window-title",
    "name",
    "tagline",
    "toolbar-language-label",
    "toolbar-font-size-label",
    "tab-projects",
    "tab-lab",
    "tab-bio",
    "tech-stack-heading",
    "more-media-heading",
    "view-link-label",
    "footer-copyright",
    "footer-note",
    "bio-heading",
    "bio-body",
    "lightbox-close-label",
    "lightbox-watch-label",
    "media-loading",
    "media-unavailable",
    "language-name-en",
    "language-name-es",
];
