//! Optional JSON config: keybinding overrides, clipboard backend, timings
//!
//! ```json
//! {
//!   "keybindings": { "page": { "search.start": ["s"] } },
//!   "clipboard": "osc52",
//!   "timings": { "tick_ms": 100, "open_debounce_ms": 50, "copied_feedback_ms": 2000 }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use brandbook_core::Keybindings;
use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardBackend;
use crate::effect::EffectSettings;
use crate::error::ConfigError;
use crate::keymap::{KeyContext, default_keybindings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub tick_ms: u64,
    pub open_debounce_ms: u64,
    pub copied_feedback_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            open_debounce_ms: 50,
            copied_feedback_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Merged over the defaults; a listed command replaces all its keys
    pub keybindings: Keybindings<KeyContext>,
    pub clipboard: ClipboardBackend,
    pub timings: Timings,
}

impl Config {
    /// Load `path`, or the default location when `None`
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => match Self::read(path)? {
                Some(config) => Ok(config),
                None => Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                }),
            },
            None => Ok(Self::read(&default_config_path())?.unwrap_or_default()),
        }
    }

    fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(Some(config))
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Defaults with the user's overrides applied
    pub fn keybindings(&self) -> Keybindings<KeyContext> {
        Keybindings::merge(default_keybindings(), self.keybindings.clone())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.timings.tick_ms.max(1))
    }

    pub fn to_effect_settings(&self) -> EffectSettings {
        EffectSettings {
            open_debounce: Duration::from_millis(self.timings.open_debounce_ms),
            copied_feedback: Duration::from_millis(self.timings.copied_feedback_ms),
            clipboard: self.clipboard,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("winmix-brandbook")
        .join("config.json")
}
