use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use beerdice_types::ui::UiOptions;

use crate::animator::{
    DEFAULT_FRAME_INTERVAL, DEFAULT_ROLL_FRAMES, DEFAULT_SETTLE_DELAY, DEFAULT_SHAKE_DURATION,
    RollTiming,
};
use crate::presenter::Presenter;

/// Contents of `~/.beerdice/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
///
/// [timing]
/// roll_frames = 13
/// frame_interval_ms = 100
/// settle_ms = 200
/// shake_ms = 600
///
/// [messages]
/// safe = ["Safe!"]
/// penalty = ["{n} cups!"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DiceConfig {
    pub app: Option<AppConfig>,
    pub timing: Option<TimingConfig>,
    pub messages: Option<MessagesConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for pips and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Skip die tumbling and the penalty shake.
    #[serde(default)]
    pub reduced_motion: bool,
}

const fn default_roll_frames() -> u32 {
    DEFAULT_ROLL_FRAMES
}

const fn default_frame_interval_ms() -> u64 {
    DEFAULT_FRAME_INTERVAL.as_millis() as u64
}

const fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE_DELAY.as_millis() as u64
}

const fn default_shake_ms() -> u64 {
    DEFAULT_SHAKE_DURATION.as_millis() as u64
}

#[derive(Debug, Deserialize)]
pub struct TimingConfig {
    /// Tumbling frames per roll. Clamped to at least 1.
    #[serde(default = "default_roll_frames")]
    pub roll_frames: u32,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    #[serde(default = "default_shake_ms")]
    pub shake_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            roll_frames: default_roll_frames(),
            frame_interval_ms: default_frame_interval_ms(),
            settle_ms: default_settle_ms(),
            shake_ms: default_shake_ms(),
        }
    }
}

/// Replacement message pools. Empty or missing pools keep the built-ins.
#[derive(Debug, Default, Deserialize)]
pub struct MessagesConfig {
    #[serde(default)]
    pub safe: Vec<String>,
    /// Templates; `{n}` is replaced by the slot's value.
    #[serde(default)]
    pub penalty: Vec<String>,
}

impl DiceConfig {
    /// Load the user config. `Ok(None)` when there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|cfg| cfg.ascii_only),
            high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
            reduced_motion: app.is_some_and(|cfg| cfg.reduced_motion),
        }
    }

    /// Roll timing, with `reduced_motion` collapsing the tumble to one frame.
    #[must_use]
    pub fn roll_timing(&self) -> RollTiming {
        let defaults = TimingConfig::default();
        let timing = self.timing.as_ref().unwrap_or(&defaults);
        let frames = if self.ui_options().reduced_motion {
            1
        } else {
            timing.roll_frames.max(1)
        };
        RollTiming {
            frames,
            frame_interval: Duration::from_millis(timing.frame_interval_ms),
            settle: Duration::from_millis(timing.settle_ms),
            shake: Duration::from_millis(timing.shake_ms),
        }
    }

    #[must_use]
    pub fn presenter(&self) -> Presenter {
        match &self.messages {
            Some(messages) => Presenter::new(messages.safe.clone(), messages.penalty.clone()),
            None => Presenter::default(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".beerdice").join("config.toml"))
}
