use crate::error::{Result, RosterError};
use crate::ordering::SortKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "roster> ";

/// Configuration for the roster client, stored as `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Ordering used for listings until the session changes it
    #[serde(default)]
    pub default_order: SortKey,

    /// Prompt shown by the interactive shell
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_order: SortKey::default(),
            prompt: default_prompt(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_file(config_path)
    }

    /// Load config from an explicit file. A missing file is an error here.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }
}
