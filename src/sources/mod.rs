pub mod file;
pub mod mock;

use tracing::info;

use crate::models::{EvaluationResult, Result, StatsSnapshot};
use crate::scoring::BadgeCalculator;

pub use file::SnapshotFileSource;
pub use mock::MockStatsSource;

/// Anything that can produce a stats snapshot. The engine only requires the
/// metric-to-number mapping; whether it comes from a mock generator, a file,
/// or a real aggregation pipeline is the source's business.
pub trait StatsSource: Send + Sync {
    /// Human-readable description of where snapshots come from, for logs and
    /// CLI output.
    fn describe(&self) -> String;

    /// Produce one snapshot.
    fn fetch_snapshot(&self) -> Result<StatsSnapshot>;
}

/// Fetches a snapshot from a source and runs the full evaluation on it.
pub fn evaluate_source(
    source: &dyn StatsSource,
    calculator: &BadgeCalculator,
) -> Result<EvaluationResult> {
    info!("Fetching stats from {}", source.describe());
    let stats = source.fetch_snapshot()?;
    info!("Snapshot carries {} metrics", stats.len());
    Ok(calculator.evaluate_player(&stats))
}
