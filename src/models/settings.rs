use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the persisted settings, relative to the working directory
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write settings '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Values remembered between runs.
///
/// Both keys are required and no others are accepted, so a file written by
/// a different layout fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Folder scanned (recursively) for decklist PDFs
    pub pdfs_folder_path: String,

    /// Spreadsheet the decklists are uploaded to
    pub google_sheet_url: String,
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file, unparsable content, or a key set other than exactly
    /// `pdfs_folder_path` + `google_sheet_url` all yield default settings: an
    /// old file left behind by a different layout is ignored, not an error.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_json(&content).unwrap_or_else(|| {
            warn!(path = %path.display(), "ignoring incompatible settings file");
            Self::default()
        }))
    }

    /// Parse settings, returning `None` when the document shape doesn't match
    pub fn from_json(content: &str) -> Option<Self> {
        // Going through a map keeps serde from accepting the array form of the struct
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content).ok()?;
        serde_json::from_value(serde_json::Value::Object(object)).ok()
    }

    /// Write settings to `path` as an indented JSON object
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;

        std::fs::write(path, buf).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn has_folder(&self) -> bool {
        !self.pdfs_folder_path.trim().is_empty()
    }

    pub fn has_sheet_url(&self) -> bool {
        !self.google_sheet_url.trim().is_empty()
    }
}
