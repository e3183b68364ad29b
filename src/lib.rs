// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio viewer built with the Iced GUI
//! framework.
//!
//! It renders a static project catalog as a tabbed page with a media
//! lightbox, and demonstrates internationalization with Fluent, in-app
//! display preferences, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
