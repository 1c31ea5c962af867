use crate::week::current_week_id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

pub const STORE_FILE: &str = "usage_data.json";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but is not valid store JSON. Fatal at startup.
    #[error("shortcut store '{path}' is corrupt: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },
    #[error("unknown shortcut '{0}'")]
    UnknownShortcut(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub path: String,
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub weekly_clicks: BTreeMap<String, u64>,
}

/// The full persisted mapping of shortcut name to entry.
///
/// Names iterate in lexicographic order; that order is also the tie-break
/// used by the weekly report for equal counts.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShortcutStore {
    pub shortcuts: BTreeMap<String, Shortcut>,
}

impl ShortcutStore {
    /// Load the store from `path`.
    ///
    /// A missing or empty file yields an empty store. A file that exists but
    /// cannot be parsed is a [`StoreError::Corrupt`] and the caller is
    /// expected to bail rather than overwrite the user's data.
    pub fn load(path: &str) -> Result<Self, StoreError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: path.to_string(),
            source,
        })
    }

    /// Serialize the whole store and replace the backing file.
    ///
    /// Writes to a sibling temp file first and renames it into place so a
    /// crash mid-write does not leave a truncated store behind.
    pub fn save(&self, path: &str) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        let tmp = format!("{path}.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, Path::new(path))?;
        Ok(())
    }

    /// Insert (or overwrite) a shortcut with zeroed counters and persist.
    ///
    /// `target` is not validated; a dangling path simply fails at launch
    /// time. Duplicate names are last-write-wins.
    pub fn add_shortcut(
        &mut self,
        store_path: &str,
        name: &str,
        target: &str,
    ) -> Result<(), StoreError> {
        self.shortcuts.insert(
            name.to_string(),
            Shortcut {
                path: target.to_string(),
                total_clicks: 0,
                weekly_clicks: BTreeMap::new(),
            },
        );
        tracing::debug!("added shortcut '{name}' -> {target}");
        self.save(store_path)
    }

    /// Count one successful launch of `name` against the current week and
    /// persist.
    ///
    /// `total_clicks` and the current week's bucket move together, so the
    /// total always equals the sum of the weekly counts. Unknown names leave
    /// the store untouched.
    pub fn record_launch(&mut self, store_path: &str, name: &str) -> Result<(), StoreError> {
        let entry = self
            .shortcuts
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownShortcut(name.to_string()))?;
        let week = current_week_id();
        entry.total_clicks += 1;
        *entry.weekly_clicks.entry(week).or_insert(0) += 1;
        self.save(store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_returns_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usage_data.json");
        let store = ShortcutStore::load(path.to_str().unwrap()).unwrap();
        assert!(store.shortcuts.is_empty());
    }

    #[test]
    fn load_corrupt_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usage_data.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = ShortcutStore::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn record_launch_unknown_name_leaves_store_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("usage_data.json");
        let mut store = ShortcutStore::default();
        store
            .add_shortcut(path.to_str().unwrap(), "editor", "/usr/bin/editor")
            .unwrap();
        let before = store.clone();
        let err = store
            .record_launch(path.to_str().unwrap(), "missing")
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownShortcut(ref n) if n == "missing"));
        assert_eq!(store, before);
    }
}
