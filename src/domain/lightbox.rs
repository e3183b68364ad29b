// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! Two states: closed, or open on a specific media entry of a specific item.
//! Re-opening on a different item or index is allowed from any state without
//! a guard. An out-of-range index is rejected and the previous state kept,
//! so the open invariant (index always addresses a valid media entry) holds
//! by construction.

/// Modal media-viewer state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        /// Identity of the content item being viewed.
        item: String,
        /// Index into the item's media sequence.
        index: usize,
    },
}

impl Lightbox {
    /// Opens the lightbox on `item.media[index]`.
    ///
    /// `media_len` is the length of the target item's media sequence.
    /// Returns `false` and leaves the state unchanged when `index` is out
    /// of range.
    pub fn open(&mut self, item: &str, index: usize, media_len: usize) -> bool {
        if index >= media_len {
            return false;
        }
        *self = Lightbox::Open {
            item: item.to_owned(),
            index,
        };
        true
    }

    /// Closes the lightbox from any state.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(Lightbox::default(), Lightbox::Closed);
    }

    #[test]
    fn open_with_valid_index_transitions() {
        let mut lightbox = Lightbox::default();
        assert!(lightbox.open("proj-1", 2, 3));
        assert_eq!(
            lightbox,
            Lightbox::Open {
                item: "proj-1".into(),
                index: 2
            }
        );
    }

    #[test]
    fn open_accepts_every_valid_index() {
        for index in 0..4 {
            let mut lightbox = Lightbox::default();
            assert!(lightbox.open("item", index, 4));
            assert!(lightbox.is_open());
        }
    }

    #[test]
    fn open_rejects_out_of_range_index() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.open("proj-1", 3, 3));
        assert_eq!(lightbox, Lightbox::Closed);

        // The previous open state survives a rejected transition.
        assert!(lightbox.open("proj-1", 0, 3));
        assert!(!lightbox.open("proj-2", 9, 2));
        assert_eq!(
            lightbox,
            Lightbox::Open {
                item: "proj-1".into(),
                index: 0
            }
        );
    }

    #[test]
    fn reopening_on_another_item_needs_no_close() {
        let mut lightbox = Lightbox::default();
        assert!(lightbox.open("proj-1", 1, 2));
        assert!(lightbox.open("lab-1", 0, 1));
        assert_eq!(
            lightbox,
            Lightbox::Open {
                item: "lab-1".into(),
                index: 0
            }
        );
    }

    #[test]
    fn close_always_yields_closed() {
        let mut lightbox = Lightbox::default();
        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);

        assert!(lightbox.open("proj-1", 0, 1));
        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);
    }
}
