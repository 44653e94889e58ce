//! Saved-color palette.
//!
//! An ordered list of uppercase `#RRGGBB` strings. Mutations write through
//! to the store under [`PALETTE_KEY`](crate::store::PALETTE_KEY); the list is
//! read once at startup and corrupt data degrades to an empty palette at the
//! store boundary.

use serde::Serialize;

use crate::convert::hex_to_rgb;
use crate::error::StoreError;
use crate::notify::{NoticeSink, Severity};
use crate::store::{KvStore, PALETTE_KEY, load_or_default, save_json};

/// Outcome of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// The color was appended.
    Saved,
    /// The color was already present (case-insensitive); palette unchanged.
    Duplicate,
    /// The string did not parse as a hex color; palette unchanged.
    Invalid,
}

/// Outcome of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearOutcome {
    /// Entries were removed.
    Cleared,
    /// The palette was already empty; nothing to do.
    AlreadyEmpty,
}

/// The user's saved palette, insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Load the palette from the store, or empty if absent/corrupt.
    #[must_use]
    pub fn load(store: &dyn KvStore) -> Self {
        Self {
            colors: load_or_default(store, PALETTE_KEY),
        }
    }

    /// Saved colors, oldest first.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Append `hex` unless an equal color (case-insensitive) is saved
    /// already. Entries are normalized to uppercase `#RRGGBB` form.
    pub fn save(&mut self, hex: &str) -> SaveOutcome {
        let Some(rgb) = hex_to_rgb(hex) else {
            return SaveOutcome::Invalid;
        };
        let normalized = crate::convert::rgb_to_hex(rgb.r, rgb.g, rgb.b);

        if self.colors.iter().any(|c| c.eq_ignore_ascii_case(&normalized)) {
            return SaveOutcome::Duplicate;
        }
        self.colors.push(normalized);
        SaveOutcome::Saved
    }

    /// Remove the entry at `index`. Out-of-range indices are a silent no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.colors.len() {
            Some(self.colors.remove(index))
        } else {
            None
        }
    }

    /// Empty the palette. Confirmation is the caller's job.
    pub fn clear(&mut self) -> ClearOutcome {
        if self.colors.is_empty() {
            ClearOutcome::AlreadyEmpty
        } else {
            self.colors.clear();
            ClearOutcome::Cleared
        }
    }

    /// Write the palette through to the store.
    pub fn persist(&self, store: &dyn KvStore) -> Result<(), StoreError> {
        save_json(store, PALETTE_KEY, &self.colors)
    }
}

/// Save `hex`, persist on success, and raise the matching notice.
pub fn save_and_notify(
    palette: &mut Palette,
    store: &dyn KvStore,
    notices: &mut dyn NoticeSink,
    hex: &str,
) -> Result<SaveOutcome, StoreError> {
    let outcome = palette.save(hex);
    match outcome {
        SaveOutcome::Saved => {
            palette.persist(store)?;
            notices.notify(Severity::Success, &format!("Saved {}", hex.to_uppercase()));
        }
        SaveOutcome::Duplicate => {
            notices.notify(Severity::Warning, "Color already in palette");
        }
        SaveOutcome::Invalid => {
            notices.notify(Severity::Warning, &format!("Not a hex color: {hex}"));
        }
    }
    Ok(outcome)
}

/// Clear the palette, persist if anything changed, and raise a notice.
pub fn clear_and_notify(
    palette: &mut Palette,
    store: &dyn KvStore,
    notices: &mut dyn NoticeSink,
) -> Result<ClearOutcome, StoreError> {
    let outcome = palette.clear();
    match outcome {
        ClearOutcome::Cleared => {
            palette.persist(store)?;
            notices.notify(Severity::Success, "Palette cleared");
        }
        ClearOutcome::AlreadyEmpty => {
            notices.notify(Severity::Warning, "Palette is already empty");
        }
    }
    Ok(outcome)
}
