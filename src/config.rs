//! Runtime configuration, read from the environment with sensible defaults.

use std::path::PathBuf;

/// Tables available per (date, time) slot.
pub const DEFAULT_CAPACITY: usize = 8;

/// Storage key holding the JSON list of reservations.
pub const DEFAULT_STORAGE_KEY: &str = "little-lemon-reservations";

pub const DEFAULT_DATA_DIR: &str = "little-lemon-data";

/// Little Lemon configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum reservations admitted per slot.
    pub capacity: usize,
    /// Key the reservation list is stored under.
    pub storage_key: String,
    /// Directory used by the file storage backend.
    pub data_dir: PathBuf,
    /// Bounded channel size between session clients and the session actor.
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            channel_buffer: 32,
        }
    }
}

impl Config {
    /// Reads `LITTLE_LEMON_CAPACITY`, `LITTLE_LEMON_STORAGE_KEY` and
    /// `LITTLE_LEMON_DATA_DIR`. Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            capacity: lookup("LITTLE_LEMON_CAPACITY")
                .and_then(|c| c.trim().parse().ok())
                .unwrap_or(defaults.capacity),
            storage_key: lookup("LITTLE_LEMON_STORAGE_KEY")
                .filter(|k| !k.trim().is_empty())
                .unwrap_or(defaults.storage_key),
            data_dir: lookup("LITTLE_LEMON_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            channel_buffer: defaults.channel_buffer,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
