pub mod models;
pub mod config;
pub mod catalog;
pub mod scoring;
pub mod sources;

pub use models::{
    BadgeCategory, BadgeDefinition, BadgeEngineError, BadgeTier, EarnedBadge, EvaluationResult,
    Metric, Result, Role, StatsSnapshot,
};
pub use catalog::BadgeCatalog;
pub use config::Settings;
pub use scoring::BadgeCalculator;
pub use sources::{evaluate_source, StatsSource};
