//! Preset swatches.
//!
//! A built-in table of named colors (the classic 16 web colors) plus
//! user-added presets persisted under their own store key. Lookup is
//! case-insensitive; user presets shadow built-ins of the same name.

use serde::{Deserialize, Serialize};

use crate::convert::hex_to_rgb;
use crate::error::StoreError;
use crate::store::{KvStore, PRESETS_KEY, load_or_default, save_json};

/// Built-in swatch table.
pub const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("silver", "#C0C0C0"),
    ("gray", "#808080"),
    ("white", "#FFFFFF"),
    ("maroon", "#800000"),
    ("red", "#FF0000"),
    ("purple", "#800080"),
    ("fuchsia", "#FF00FF"),
    ("green", "#008000"),
    ("lime", "#00FF00"),
    ("olive", "#808000"),
    ("yellow", "#FFFF00"),
    ("navy", "#000080"),
    ("blue", "#0000FF"),
    ("teal", "#008080"),
    ("aqua", "#00FFFF"),
];

/// A user-added preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetEntry {
    pub name: String,
    pub hex: String,
}

/// Outcome of adding a user preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    /// A preset with that name already exists (case-insensitive).
    DuplicateName,
    /// The hex string did not parse.
    InvalidColor,
}

/// Built-in plus user-added presets.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    user: Vec<PresetEntry>,
}

impl Presets {
    /// Load user presets from the store, or empty if absent/corrupt.
    #[must_use]
    pub fn load(store: &dyn KvStore) -> Self {
        Self {
            user: load_or_default(store, PRESETS_KEY),
        }
    }

    /// User-added presets, oldest first.
    #[must_use]
    pub fn user(&self) -> &[PresetEntry] {
        &self.user
    }

    /// Resolve a preset name to its hex value. User presets win over
    /// built-ins of the same name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        if let Some(entry) = self
            .user
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
        {
            return Some(&entry.hex);
        }
        BUILTIN_PRESETS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, hex)| *hex)
    }

    /// Add a named preset, normalizing the hex value to uppercase.
    pub fn add(&mut self, name: &str, hex: &str) -> AddOutcome {
        let Some(rgb) = hex_to_rgb(hex) else {
            return AddOutcome::InvalidColor;
        };
        let taken = self.lookup(name).is_some();
        if taken {
            return AddOutcome::DuplicateName;
        }
        self.user.push(PresetEntry {
            name: name.to_string(),
            hex: crate::convert::rgb_to_hex(rgb.r, rgb.g, rgb.b),
        });
        AddOutcome::Added
    }

    /// Write user presets through to the store.
    pub fn persist(&self, store: &dyn KvStore) -> Result<(), StoreError> {
        save_json(store, PRESETS_KEY, &self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        let p = Presets::default();
        assert_eq!(p.lookup("Red"), Some("#FF0000"));
        assert_eq!(p.lookup("LIME"), Some("#00FF00"));
    }

    #[test]
    fn unknown_name_is_none() {
        let p = Presets::default();
        assert_eq!(p.lookup("notacolor"), None);
    }

    #[test]
    fn user_preset_shadows_builtin() {
        let mut p = Presets::default();
        // "red" is taken by a built-in, so adding it is rejected
        assert_eq!(p.add("red", "#AA0000"), AddOutcome::DuplicateName);
        assert_eq!(p.add("brand", "#aa00ff"), AddOutcome::Added);
        assert_eq!(p.lookup("BRAND"), Some("#AA00FF"));
    }

    #[test]
    fn invalid_hex_is_rejected() {
        let mut p = Presets::default();
        assert_eq!(p.add("brand", "#zzz"), AddOutcome::InvalidColor);
        assert!(p.user().is_empty());
    }

    #[test]
    fn user_presets_persist_and_reload() {
        let store = MemStore::new();
        let mut p = Presets::default();
        p.add("brand", "#112233");
        p.persist(&store).unwrap();

        let reloaded = Presets::load(&store);
        assert_eq!(reloaded.lookup("brand"), Some("#112233"));
    }
}
