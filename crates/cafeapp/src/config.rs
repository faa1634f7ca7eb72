//! # Configuration
//!
//! Shop settings are loaded with [`confique`] from, in priority order:
//!
//! 1. **Environment variables**: `CAFE_PASSWORD_ATTEMPTS`, `CAFE_CONFIRM_PAUSE_MS`, ...
//! 2. **Config file**: `cafe.toml` in the data directory, if present.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! A missing file is fine. An unreadable or invalid file falls back to the defaults.
//!
//! | Key | Env | Default | Description |
//! |-----|-----|---------|-------------|
//! | `password_attempts` | `CAFE_PASSWORD_ATTEMPTS` | `3` | Password tries per sign-in |
//! | `confirm_pause_ms` | `CAFE_CONFIRM_PAUSE_MS` | `3000` | Pause after an order is placed |
//! | `notice_pause_ms` | `CAFE_NOTICE_PAUSE_MS` | `2000` | Pause after account notices |
//! | `farewell_pause_ms` | `CAFE_FAREWELL_PAUSE_MS` | `1500` | Pause after the farewell banner |
//! | `clear_screen` | `CAFE_CLEAR_SCREEN` | `true` | Clear the screen between menus |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::warn;

pub const CONFIG_FILENAME: &str = "cafe.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CafeConfig {
    /// Password attempts allowed per sign-in before returning to the username prompt.
    #[config(env = "CAFE_PASSWORD_ATTEMPTS", default = 3)]
    pub password_attempts: u32,

    #[config(env = "CAFE_CONFIRM_PAUSE_MS", default = 3000)]
    pub confirm_pause_ms: u64,

    #[config(env = "CAFE_NOTICE_PAUSE_MS", default = 2000)]
    pub notice_pause_ms: u64,

    #[config(env = "CAFE_FAREWELL_PAUSE_MS", default = 1500)]
    pub farewell_pause_ms: u64,

    #[config(env = "CAFE_CLEAR_SCREEN", default = true)]
    pub clear_screen: bool,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            password_attempts: 3,
            confirm_pause_ms: 3000,
            notice_pause_ms: 2000,
            farewell_pause_ms: 1500,
            clear_screen: true,
        }
    }
}

impl CafeConfig {
    /// Loads env and `cafe.toml` from `data_dir` over the compiled defaults.
    pub fn load(data_dir: &Path) -> Self {
        match Self::builder()
            .env()
            .file(data_dir.join(CONFIG_FILENAME))
            .load()
        {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "invalid configuration, using defaults");
                Self::default()
            }
        }
    }

    /// At least one attempt, whatever the configuration says.
    pub fn password_attempts(&self) -> u32 {
        self.password_attempts.max(1)
    }

    pub fn confirm_pause(&self) -> Duration {
        Duration::from_millis(self.confirm_pause_ms)
    }

    pub fn notice_pause(&self) -> Duration {
        Duration::from_millis(self.notice_pause_ms)
    }

    pub fn farewell_pause(&self) -> Duration {
        Duration::from_millis(self.farewell_pause_ms)
    }
}
