//! Configuration type definitions
//!
//! The start-up settings the host loop applies before the first draw.
//! Where they are kept (EEPROM, flash) is up to the platform; this module
//! only defines the types and their postcard/TOML encodings.

use crate::dispatch::ClockId;
use crate::state::Palette;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magic number to identify a valid stored configuration
pub const CONFIG_MAGIC: u32 = 0x4D43_4846; // "MCHF"

/// Current configuration record version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum postcard-encoded record size
pub const MAX_CONFIG_SIZE: usize = 32;

/// Configuration encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Record magic or version does not match
    VersionMismatch,
    /// TOML parsing failed
    TomlParse,
}

/// Start-up configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Face shown after power-up; `ClockId::NONE` keeps the first entry
    pub initial_clock: ClockId,
    /// Start-up palette
    pub palette: Palette,
    /// Alarm hour (0-23)
    pub alarm_hour: u8,
    /// Alarm minute (0-59)
    pub alarm_minute: u8,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            initial_clock: ClockId::NONE,
            palette: Palette::Normal,
            alarm_hour: 7,
            alarm_minute: 0,
        }
    }
}

/// Versioned envelope around a stored configuration
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct ConfigRecord {
    magic: u32,
    version: u8,
    config: ClockConfig,
}

#[cfg(feature = "serde")]
impl ClockConfig {
    /// Encode as a versioned postcard record into `buffer`
    ///
    /// Returns the used part of the buffer.
    pub fn to_bytes<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        let record = ConfigRecord {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            config: *self,
        };
        postcard::to_slice(&record, buffer).map_err(|_| ConfigError::Serialize)
    }

    /// Decode a versioned postcard record
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let record: ConfigRecord =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        if record.magic != CONFIG_MAGIC || record.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch);
        }
        Ok(record.config)
    }
}

#[cfg(feature = "std")]
impl ClockConfig {
    /// Parse a TOML document; missing keys keep their defaults
    ///
    /// ```toml
    /// initial_clock = 3
    /// palette = "Inverted"
    /// alarm_hour = 6
    /// alarm_minute = 45
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|_| ConfigError::TomlParse)
    }
}
