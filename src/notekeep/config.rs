use crate::error::{NotekeepError, Result};
use crate::model::SortOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILTER: &str = "all";
const DEFAULT_PREVIEW_LENGTH: usize = 200;

pub const CONFIG_KEYS: [&str; 3] = ["default-sort", "default-filter", "preview-length"];

/// Client configuration, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotekeepConfig {
    /// Order used by `sort` when no order is given
    #[serde(default)]
    pub default_sort: SortOrder,

    /// Filter used by `list` when none is given (e.g. "all", "pinned", "work")
    #[serde(default = "default_filter")]
    pub default_filter: String,

    /// Characters of plain-text content shown in list previews
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

impl Default for NotekeepConfig {
    fn default() -> Self {
        Self {
            default_sort: SortOrder::default(),
            default_filter: default_filter(),
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

impl NotekeepConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotekeepError::Io)?;
        let config: NotekeepConfig =
            serde_json::from_str(&content).map_err(NotekeepError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotekeepError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotekeepError::Serialization)?;
        fs::write(config_path, content).map_err(NotekeepError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-sort" => Some(self.default_sort.to_string()),
            "default-filter" => Some(self.default_filter.clone()),
            "preview-length" => Some(self.preview_length.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => {
                self.default_sort = value.parse().map_err(NotekeepError::Api)?;
            }
            "default-filter" => {
                let value = value.trim().to_lowercase();
                self.default_filter = if value.is_empty() {
                    default_filter()
                } else {
                    value
                };
            }
            "preview-length" => {
                self.preview_length = value.trim().parse().map_err(|_| {
                    NotekeepError::Api(format!("preview-length must be a number, got '{}'", value))
                })?;
            }
            _ => {
                return Err(NotekeepError::Api(format!(
                    "Unknown config key: {} (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotekeepConfig::default();
        assert_eq!(config.default_sort, SortOrder::Newest);
        assert_eq!(config.default_filter, "all");
        assert_eq!(config.preview_length, 200);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = NotekeepConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotekeepConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = NotekeepConfig::default();
        config.set("default-sort", "oldest").unwrap();
        config.set("preview-length", "80").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = NotekeepConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_sort, SortOrder::Oldest);
        assert_eq!(loaded.preview_length, 80);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"default_filter": "work"}"#).unwrap();

        let loaded = NotekeepConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_filter, "work");
        assert_eq!(loaded.default_sort, SortOrder::Newest);
        assert_eq!(loaded.preview_length, 200);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = NotekeepConfig::default();
        assert!(config.set("default-sort", "sideways").is_err());
        assert!(config.set("preview-length", "lots").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, NotekeepConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = NotekeepConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some());
        }
        assert_eq!(config.get("nope"), None);
    }
}
