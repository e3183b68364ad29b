// SPDX-License-Identifier: MPL-2.0
//! Content item and media entry types.
//!
//! These mirror the static catalog documents: every item carries an ordered
//! media sequence whose first entry is the "hero" shown prominently on the
//! card. Media entries are a tagged union so image/video handling stays
//! exhaustive at compile time.

use serde::Deserialize;

/// Conventional YouTube thumbnail address for a video identifier.
#[must_use]
pub fn youtube_thumbnail(youtube_id: &str) -> String {
    format!("https://img.youtube.com/vi/{youtube_id}/hqdefault.jpg")
}

/// A single media entry within an item, ordered and significant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum MediaEntry {
    #[serde(rename = "image")]
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    #[serde(rename = "youtube", rename_all = "camelCase")]
    Video {
        youtube_id: String,
        #[serde(default)]
        thumb: Option<String>,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl MediaEntry {
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, MediaEntry::Video { .. })
    }

    /// Address of the preview shown on cards and thumbnail strips.
    ///
    /// Videos fall back to the conventional YouTube thumbnail address when
    /// no explicit thumbnail is supplied.
    #[must_use]
    pub fn thumbnail_address(&self) -> String {
        match self {
            MediaEntry::Image { src, .. } => src.clone(),
            MediaEntry::Video {
                youtube_id, thumb, ..
            } => thumb
                .clone()
                .unwrap_or_else(|| youtube_thumbnail(youtube_id)),
        }
    }

    /// Caption shown below the lightbox: explicit caption, else alt text,
    /// else nothing.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        match self {
            MediaEntry::Image { alt, .. } => alt.as_deref(),
            MediaEntry::Video { caption, alt, .. } => caption.as_deref().or(alt.as_deref()),
        }
    }

    /// Watch page for video entries.
    #[must_use]
    pub fn watch_url(&self) -> Option<String> {
        match self {
            MediaEntry::Video { youtube_id, .. } => {
                Some(format!("https://www.youtube.com/watch?v={youtube_id}"))
            }
            MediaEntry::Image { .. } => None,
        }
    }
}

/// A labeled external link attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// A link action resolved from an item's links (see [`ContentItem::actions`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction<'a> {
    /// An entry from the `links` list, rendered with its own label.
    Labeled { href: &'a str, label: &'a str },
    /// The legacy single-link field, rendered with the generic "view" label.
    Generic { href: &'a str },
}

impl LinkAction<'_> {
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            LinkAction::Labeled { href, .. } | LinkAction::Generic { href } => href,
        }
    }
}

/// An immutable catalog entry. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub media: Vec<MediaEntry>,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Legacy single-link field; only consulted when `links` is empty.
    #[serde(default)]
    pub link: Option<String>,
}

impl ContentItem {
    /// The first media entry, shown prominently on the card.
    #[must_use]
    pub fn hero(&self) -> Option<&MediaEntry> {
        self.media.first()
    }

    /// Resolves the link actions rendered on the card.
    ///
    /// A non-empty `links` list yields one action per entry in list order
    /// and shadows the legacy field. An empty list with a legacy `link`
    /// yields exactly one generic action. Neither yields none.
    #[must_use]
    pub fn actions(&self) -> Vec<LinkAction<'_>> {
        if !self.links.is_empty() {
            return self
                .links
                .iter()
                .map(|link| LinkAction::Labeled {
                    href: &link.href,
                    label: &link.label,
                })
                .collect();
        }
        match self.link.as_deref() {
            Some(href) => vec![LinkAction::Generic { href }],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(src: &str) -> MediaEntry {
        MediaEntry::Image {
            src: src.into(),
            alt: None,
        }
    }

    fn item_with_links(links: Vec<Link>, link: Option<String>) -> ContentItem {
        ContentItem {
            id: "it".into(),
            title: "Item".into(),
            description: String::new(),
            tech: Vec::new(),
            media: vec![image("a.png")],
            links,
            link,
        }
    }

    #[test]
    fn video_without_thumb_derives_youtube_address() {
        let entry = MediaEntry::Video {
            youtube_id: "dQw4w9WgXcQ".into(),
            thumb: None,
            caption: None,
            alt: None,
        };
        assert_eq!(
            entry.thumbnail_address(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[test]
    fn video_with_explicit_thumb_keeps_it() {
        let entry = MediaEntry::Video {
            youtube_id: "abc".into(),
            thumb: Some("custom.jpg".into()),
            caption: None,
            alt: None,
        };
        assert_eq!(entry.thumbnail_address(), "custom.jpg");
    }

    #[test]
    fn image_thumbnail_is_its_source() {
        assert_eq!(image("shot.png").thumbnail_address(), "shot.png");
    }

    #[test]
    fn caption_prefers_explicit_caption_over_alt() {
        let entry = MediaEntry::Video {
            youtube_id: "abc".into(),
            thumb: None,
            caption: Some("Demo reel".into()),
            alt: Some("Video".into()),
        };
        assert_eq!(entry.caption(), Some("Demo reel"));

        let entry = MediaEntry::Video {
            youtube_id: "abc".into(),
            thumb: None,
            caption: None,
            alt: Some("Video".into()),
        };
        assert_eq!(entry.caption(), Some("Video"));

        assert_eq!(image("x.png").caption(), None);
    }

    #[test]
    fn watch_url_only_for_videos() {
        let entry = MediaEntry::Video {
            youtube_id: "abc".into(),
            thumb: None,
            caption: None,
            alt: None,
        };
        assert_eq!(
            entry.watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc")
        );
        assert_eq!(image("x.png").watch_url(), None);
    }

    #[test]
    fn links_list_yields_one_action_per_entry_in_order() {
        let item = item_with_links(
            vec![
                Link {
                    href: "https://a.example".into(),
                    label: "Live".into(),
                },
                Link {
                    href: "https://b.example".into(),
                    label: "Source".into(),
                },
            ],
            Some("https://legacy.example".into()),
        );
        let actions = item.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(
            actions[0],
            LinkAction::Labeled {
                href: "https://a.example",
                label: "Live"
            }
        );
        assert_eq!(
            actions[1],
            LinkAction::Labeled {
                href: "https://b.example",
                label: "Source"
            }
        );
    }

    #[test]
    fn legacy_link_yields_single_generic_action() {
        let item = item_with_links(Vec::new(), Some("https://legacy.example".into()));
        assert_eq!(
            item.actions(),
            vec![LinkAction::Generic {
                href: "https://legacy.example"
            }]
        );
    }

    #[test]
    fn no_links_yields_no_actions() {
        let item = item_with_links(Vec::new(), None);
        assert!(item.actions().is_empty());
    }

    #[test]
    fn media_entry_deserializes_tagged_variants() {
        let entry: MediaEntry =
            serde_json::from_str(r#"{ "type": "image", "src": "shot.png", "alt": "Screenshot" }"#)
                .expect("image entry should parse");
        assert!(!entry.is_video());

        let entry: MediaEntry = serde_json::from_str(
            r#"{ "type": "youtube", "youtubeId": "abc123", "caption": "Walkthrough" }"#,
        )
        .expect("video entry should parse");
        assert!(entry.is_video());
        assert_eq!(entry.caption(), Some("Walkthrough"));
    }
}
