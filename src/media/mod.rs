// SPDX-License-Identifier: MPL-2.0
//! Media resolution for the portfolio view.
//!
//! All card and lightbox imagery goes through [`thumbnails`]: addresses are
//! fetched once at startup into an in-memory cache and looked up by the
//! views afterwards.

pub mod thumbnails;

pub use thumbnails::ThumbnailCache;
