// SPDX-License-Identifier: MPL-2.0
//! Async thumbnail loading and the in-memory handle cache.
//!
//! Remote addresses (`http`/`https`) are fetched over TLS; everything else
//! is treated as a path and read from disk, with relative paths resolved
//! under the `assets/` directory. Decoding is deferred to Iced's image
//! handle, so a fetch only moves bytes.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory that relative media addresses resolve against.
const ASSET_DIR: &str = "assets";

const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

/// Lifecycle of one address in the cache.
#[derive(Debug, Clone)]
enum Entry {
    Loading,
    Ready(Handle),
    Failed,
}

/// Startup-populated map from media address to decoded-on-demand handle.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailCache {
    entries: HashMap<String, Entry>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a fetch task for `address` is in flight.
    pub fn mark_loading(&mut self, address: &str) {
        self.entries
            .entry(address.to_owned())
            .or_insert(Entry::Loading);
    }

    /// Stores a fetch result. Failures stay in the map so the views can
    /// show an explicit fallback instead of a loading state forever.
    pub fn insert(&mut self, address: String, result: Result<Handle>) {
        let entry = match result {
            Ok(handle) => Entry::Ready(handle),
            Err(_) => Entry::Failed,
        };
        self.entries.insert(address, entry);
    }

    #[must_use]
    pub fn handle(&self, address: &str) -> Option<&Handle> {
        match self.entries.get(address) {
            Some(Entry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_failed(&self, address: &str) -> bool {
        matches!(self.entries.get(address), Some(Entry::Failed))
    }
}

/// Fetches one media address into an image handle.
pub async fn fetch(address: String) -> Result<Handle> {
    let bytes = if address.starts_with("http://") || address.starts_with("https://") {
        fetch_remote(&address).await?
    } else {
        read_local(Path::new(&address)).await?
    };
    Ok(Handle::from_bytes(bytes))
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "HTTP status {} for {url}",
            response.status()
        )));
    }

    Ok(response.bytes().await?.to_vec())
}

async fn read_local(path: &Path) -> Result<Vec<u8>> {
    let resolved: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(ASSET_DIR).join(path)
    };
    tokio::fs::read(&resolved).await.map_err(Error::from)
}
