use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Backing file for the shortcut store.
    #[serde(default = "default_store_file")]
    pub store_file: String,
    /// Directory that weekly report artifacts are written into.
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
    /// Number of shortcut buttons per grid row.
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
    /// Last known window size. If absent, a default size is used.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(f32, f32)>,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional log file. When `None`, logs go to stderr only.
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_store_file() -> String {
    crate::shortcuts::STORE_FILE.to_string()
}

fn default_reports_dir() -> String {
    crate::report::REPORTS_DIR.to_string()
}

fn default_grid_columns() -> usize {
    4
}

fn default_window_size() -> Option<(f32, f32)> {
    Some((800.0, 600.0))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            reports_dir: default_reports_dir(),
            grid_columns: default_grid_columns(),
            window_size: default_window_size(),
            debug_logging: false,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
