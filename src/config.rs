use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color tokens offered by the edit form. The tokens are opaque to the
/// core; each theme stylesheet decides how a token looks.
const DEFAULT_PALETTE: [&str; 15] = [
    "red", "orange", "amber", "green", "emerald", "teal", "cyan", "blue", "indigo", "violet",
    "purple", "fuchsia", "pink", "rose", "gray",
];

const DEFAULT_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Grid configuration: the inclusive hour range, the reserved break hour,
/// the color palette, and the initial day columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub start_hour: u8,
    pub end_hour: u8,
    pub break_hour: u8,
    pub palette: Vec<String>,
    pub day_names: Vec<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 17,
            break_hour: 12,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            day_names: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("start_hour {start} is after end_hour {end}")]
    HoursReversed { start: u8, end: u8 },
    #[error("end_hour {0} is past 23")]
    EndHourPastMidnight(u8),
    #[error("break_hour {brk} is outside {start}..={end}")]
    BreakOutOfRange { brk: u8, start: u8, end: u8 },
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("day list is empty")]
    NoDays,
    #[error("too many days: {0} (day ids are u8)")]
    TooManyDays(usize),
}

impl GridConfig {
    /// Checks the invariants the editor relies on: an ordered in-day hour
    /// range, a break hour inside it, and non-empty palette and day lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_hour > self.end_hour {
            return Err(ConfigError::HoursReversed {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.end_hour > 23 {
            return Err(ConfigError::EndHourPastMidnight(self.end_hour));
        }
        if self.break_hour < self.start_hour || self.break_hour > self.end_hour {
            return Err(ConfigError::BreakOutOfRange {
                brk: self.break_hour,
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.day_names.is_empty() {
            return Err(ConfigError::NoDays);
        }
        if self.day_names.len() > u8::MAX as usize + 1 {
            return Err(ConfigError::TooManyDays(self.day_names.len()));
        }
        Ok(())
    }

    /// Parses and validates a configuration from a JSON document. Missing
    /// fields fall back to the defaults.
    pub fn from_json(raw: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: GridConfig = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Loads the grid configuration from a JSON file. A missing file yields the
/// built-in defaults; a file that exists but cannot be read or parsed is an
/// error.
pub fn load<P: AsRef<Path>>(path: P) -> Result<GridConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(GridConfig::default());
    }
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    GridConfig::from_json(&raw, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 15);
        assert_eq!(config.day_names.len(), 5);
    }

    #[test]
    fn rejects_reversed_hours() {
        let config = GridConfig {
            start_hour: 18,
            end_hour: 8,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HoursReversed { start: 18, end: 8 })
        ));
    }

    #[test]
    fn rejects_end_hour_past_midnight() {
        let config = GridConfig {
            end_hour: 24,
            break_hour: 12,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EndHourPastMidnight(24))
        ));
    }

    #[test]
    fn rejects_break_outside_range() {
        let config = GridConfig {
            break_hour: 7,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BreakOutOfRange { brk: 7, .. })
        ));
    }

    #[test]
    fn rejects_empty_palette_and_days() {
        let config = GridConfig {
            palette: Vec::new(),
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyPalette)));

        let config = GridConfig {
            day_names: Vec::new(),
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoDays)));
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let config = GridConfig::from_json(r#"{ "break_hour": 13 }"#, "inline").unwrap();
        assert_eq!(config.break_hour, 13);
        assert_eq!(config.start_hour, 8);
        assert_eq!(config.day_names.len(), 5);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            GridConfig::from_json("not json", "inline"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn load_without_file_gives_defaults() {
        let config = load("does-not-exist.json").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn load_validates_file_contents() {
        let path = std::env::temp_dir().join("timegrid_config_invalid_test.json");
        fs::write(&path, r#"{ "break_hour": 3 }"#).unwrap();
        let result = load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(
            result,
            Err(ConfigError::BreakOutOfRange { brk: 3, .. })
        ));
    }
}
