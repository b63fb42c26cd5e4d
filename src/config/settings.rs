use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::scoring::DEFAULT_SUGGESTION_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub suggestions: SuggestionSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSettings {
    pub default_limit: usize,
}

/// Knobs for the in-progress shortlist printed after an evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Unearned badges at or below this progress are left off the shortlist.
    pub min_progress_shown: f64,
    /// At most this many in-progress badges are printed.
    pub max_progress_entries: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Rift Badges".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            suggestions: SuggestionSettings {
                default_limit: DEFAULT_SUGGESTION_LIMIT,
            },
            display: DisplaySettings {
                min_progress_shown: 25.0,
                max_progress_entries: 6,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RIFT_BADGES"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.suggestions.default_limit == 0 {
            return Err("Suggestion limit must be at least 1".to_string());
        }

        if self.display.min_progress_shown < 0.0 || self.display.min_progress_shown > 100.0 {
            return Err(format!(
                "Minimum progress shown must be between 0 and 100, got {}",
                self.display.min_progress_shown
            ));
        }

        if self.display.max_progress_entries == 0 {
            return Err("Progress list length must be at least 1".to_string());
        }

        Ok(())
    }
}
