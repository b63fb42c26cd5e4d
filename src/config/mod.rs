pub mod settings;

pub use settings::{AppSettings, DisplaySettings, Settings, SuggestionSettings};
