use crate::catalog::Catalog;
use crate::model::{ProgressDocument, WordEntry};

/// Cyclic successor of `index` over a catalog of length `len`.
///
/// Defined for any `len >= 1`; callers keep `index < len`.
#[must_use]
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Cyclic predecessor of `index` over a catalog of length `len`.
///
/// Defined for any `len >= 1`; callers keep `index < len`.
#[must_use]
pub fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Flashcard cursor over a catalog: wraps in both directions and tracks
/// whether the current card has been flipped to its back side.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    catalog: &'a Catalog,
    index: usize,
    revealed: bool,
}

impl<'a> Navigator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            index: 0,
            revealed: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &'a WordEntry {
        &self.catalog.entries()[self.index]
    }

    /// Advance to the next card, wrapping at the end. Resets the flip state.
    pub fn next(&mut self) -> &'a WordEntry {
        self.index = next_index(self.index, self.catalog.len());
        self.revealed = false;
        self.current()
    }

    /// Step back to the previous card, wrapping at the start. Resets the flip
    /// state.
    pub fn prev(&mut self) -> &'a WordEntry {
        self.index = prev_index(self.index, self.catalog.len());
        self.revealed = false;
        self.current()
    }

    /// Toggle between the front (source text) and back (target text) of the
    /// current card.
    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the current card is in the known set.
    #[must_use]
    pub fn is_known(&self, progress: &ProgressDocument) -> bool {
        progress.is_known(self.current().id())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
