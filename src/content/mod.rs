// SPDX-License-Identifier: MPL-2.0
//! Static content catalog.
//!
//! Two read-only collections (projects and lab experiments) parsed once at
//! startup from JSON documents embedded in the binary. An optional override
//! directory can supply replacement documents; a missing or malformed
//! override falls back to the embedded copy with a warning, it never fails
//! the launch.

mod item;

pub use item::{youtube_thumbnail, ContentItem, Link, LinkAction, MediaEntry};

use crate::domain::Section;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

#[derive(RustEmbed)]
#[folder = "content/"]
struct Asset;

const PROJECTS_DOC: &str = "projects.json";
const LAB_DOC: &str = "lab.json";

/// Read-only item collections backing the section tabs.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<ContentItem>,
    lab: Vec<ContentItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load(None)
    }
}

impl Catalog {
    /// Loads the catalog, preferring documents from `override_dir` when
    /// given and falling back to the embedded documents otherwise.
    #[must_use]
    pub fn load(override_dir: Option<&Path>) -> Self {
        Self {
            projects: load_document(PROJECTS_DOC, override_dir),
            lab: load_document(LAB_DOC, override_dir),
        }
    }

    /// The visible item list for a section. `Bio` has no catalog backing
    /// and maps to an empty slice; it renders prose instead.
    #[must_use]
    pub fn items_for(&self, section: Section) -> &[ContentItem] {
        match section {
            Section::Projects => &self.projects,
            Section::Lab => &self.lab,
            Section::Bio => &[],
        }
    }

    /// Looks an item up by identity across both collections.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&ContentItem> {
        self.projects
            .iter()
            .chain(self.lab.iter())
            .find(|item| item.id == id)
    }

    /// Distinct preview addresses across every media entry, used to drive
    /// the startup thumbnail prefetch.
    #[must_use]
    pub fn media_addresses(&self) -> BTreeSet<String> {
        self.projects
            .iter()
            .chain(self.lab.iter())
            .flat_map(|item| item.media.iter())
            .map(MediaEntry::thumbnail_address)
            .collect()
    }
}

/// Parses one catalog document, trying the override directory first.
fn load_document(name: &str, override_dir: Option<&Path>) -> Vec<ContentItem> {
    if let Some(dir) = override_dir {
        match parse_file(&dir.join(name)) {
            Ok(items) => return items,
            Err(err) => {
                warn!(document = name, %err, "content override unusable, using embedded copy");
            }
        }
    }
    parse_embedded(name)
}

fn parse_file(path: &Path) -> Result<Vec<ContentItem>> {
    let bytes = std::fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(Error::from)
}

fn parse_embedded(name: &str) -> Vec<ContentItem> {
    // Embedded documents ship with the binary; failing to parse them is a
    // packaging defect, same as a missing .ftl bundle.
    let file = Asset::get(name).expect("embedded catalog document missing");
    serde_json::from_slice(file.data.as_ref()).expect("embedded catalog document invalid")
}
