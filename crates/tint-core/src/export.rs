//! Palette export documents.
//!
//! Serializes the saved palette plus a timestamp into a standalone JSON
//! document the user can share or re-import elsewhere.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Downloadable palette document: `{ name, colors, exported }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaletteExport {
    /// User-chosen palette name.
    pub name: String,
    /// Saved colors, insertion order preserved.
    pub colors: Vec<String>,
    /// ISO-8601 export timestamp.
    pub exported: String,
}

impl PaletteExport {
    /// Build a document with an explicit timestamp (injectable for tests).
    #[must_use]
    pub fn at(name: impl Into<String>, colors: Vec<String>, exported_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            colors,
            exported: exported_at.to_rfc3339(),
        }
    }

    /// Build a document timestamped now.
    #[must_use]
    pub fn now(name: impl Into<String>, colors: Vec<String>) -> Self {
        Self::at(name, colors, Utc::now())
    }
}

/// Write the document as pretty JSON to `path`.
pub fn write_export(path: &Path, doc: &PaletteExport) -> Result<(), ExportError> {
    let content = serde_json::to_string_pretty(doc)
        .map_err(|e| ExportError::SerializeFailed(e.to_string()))?;
    std::fs::write(path, content)
        .map_err(|e| ExportError::WriteFailed(path.display().to_string(), e.to_string()))?;
    tracing::info!(path = %path.display(), colors = doc.colors.len(), "palette exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn document_shape() {
        let doc = PaletteExport::at("My Palette", vec!["#FF0000".into()], fixed_time());
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["name"], "My Palette");
        assert_eq!(parsed["colors"][0], "#FF0000");
        assert_eq!(parsed["exported"], "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn document_round_trips_through_serde() {
        let doc = PaletteExport::at("p", vec!["#112233".into(), "#445566".into()], fixed_time());
        let json = serde_json::to_string(&doc).unwrap();
        let back: PaletteExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn exported_field_is_rfc3339() {
        let doc = PaletteExport::now("p", vec![]);
        assert!(DateTime::parse_from_rfc3339(&doc.exported).is_ok());
    }

    #[test]
    fn write_export_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("palette.json");
        let doc = PaletteExport::at("p", vec!["#FF0000".into()], fixed_time());
        write_export(&path, &doc).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let back: PaletteExport = serde_json::from_str(&content).unwrap();
        assert_eq!(back.colors, vec!["#FF0000".to_string()]);
    }
}
