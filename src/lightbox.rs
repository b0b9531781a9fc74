//! Lightbox viewer state machine.
//!
//! The lightbox is pure presentation over a caller-owned ordered image
//! list: it never copies the catalog, it only tracks which position in the
//! supplied list is showing. Two states — closed and open — with the open
//! state carrying a [`Cursor`].
//!
//! Navigation wraps at both ends by modular arithmetic, so the index is
//! never out of range. A zero-length list refuses to open at all (the
//! viewer renders nothing and performs no index math), and a one-element
//! list wraps onto itself — next and previous are no-ops.

use serde::{Deserialize, Serialize};

/// Position within a non-empty ordered image list.
///
/// Invariant: `len > 0` and `index < len`, guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    len: usize,
    index: usize,
}

impl Cursor {
    /// Build a cursor over a list of `len` images starting at `start`.
    ///
    /// Returns `None` for an empty list. An out-of-range start falls back
    /// to 0 (a thumbnail that cannot be located in the active list).
    pub fn new(len: usize, start: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let index = if start < len { start } else { 0 };
        Some(Self { len, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Advance one position, wrapping from the end to the start.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Step back one position, wrapping from the start to the end.
    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// The index `next` would land on, without moving.
    pub fn peek_next(&self) -> usize {
        (self.index + 1) % self.len
    }

    /// The index `prev` would land on, without moving.
    pub fn peek_prev(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }
}

/// The viewer itself: closed, or open over a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(Cursor),
}

impl Lightbox {
    /// Transition closed → open with a list length and start index.
    /// Opening over an empty list stays closed.
    pub fn open(len: usize, start: usize) -> Self {
        match Cursor::new(len, start) {
            Some(cursor) => Lightbox::Open(cursor),
            None => Lightbox::Closed,
        }
    }

    /// Explicit close action (background click or close control).
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        match self {
            Lightbox::Open(cursor) => Some(cursor),
            Lightbox::Closed => None,
        }
    }

    /// Navigate forward; no-op while closed.
    pub fn next(&mut self) {
        if let Lightbox::Open(cursor) = self {
            cursor.next();
        }
    }

    /// Navigate backward; no-op while closed.
    pub fn prev(&mut self) {
        if let Lightbox::Open(cursor) = self {
            cursor.prev();
        }
    }
}

/// Presentation affordances supplied by the embedding view.
///
/// Captions render only when the active item has one; the add-to-cart
/// control renders only when the embedding gallery grants the capability —
/// omitted entirely (not disabled) otherwise, since read-only galleries
/// intentionally exclude purchase affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub captions: bool,
    pub cart: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            captions: true,
            cart: false,
        }
    }
}
