use std::path::{Path, PathBuf};

use tracing::info;

use crate::models::{Result, StatsSnapshot};
use crate::sources::StatsSource;

/// Reads a snapshot from a JSON file holding one flat object of camelCase
/// metric names to numbers, the shape the dashboard frontend exchanges.
/// Stands in for a real match-history aggregation pipeline.
pub struct SnapshotFileSource {
    path: PathBuf,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsSource for SnapshotFileSource {
    fn describe(&self) -> String {
        format!("snapshot file {}", self.path.display())
    }

    fn fetch_snapshot(&self) -> Result<StatsSnapshot> {
        let raw = std::fs::read_to_string(&self.path)?;
        let stats: StatsSnapshot = serde_json::from_str(&raw)?;
        info!("Loaded {} metrics from {}", stats.len(), self.path.display());
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BadgeEngineError, Metric};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_snapshot(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_a_flat_metric_object() {
        let file = write_snapshot(r#"{"csPerMinute": 7.5, "goldPerMinute": 412.0}"#);
        let source = SnapshotFileSource::new(file.path());

        let stats = source.fetch_snapshot().unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get(Metric::CsPerMinute), Some(7.5));
        assert_eq!(stats.get(Metric::GoldPerMinute), Some(412.0));
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let source = SnapshotFileSource::new("/no/such/snapshot.json");
        let err = source.fetch_snapshot().unwrap_err();
        assert!(matches!(err, BadgeEngineError::SnapshotIo(_)));
    }

    #[test]
    fn unknown_metric_names_are_rejected() {
        let file = write_snapshot(r#"{"notAMetric": 1.0}"#);
        let source = SnapshotFileSource::new(file.path());
        let err = source.fetch_snapshot().unwrap_err();
        assert!(matches!(err, BadgeEngineError::SerializationError(_)));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let file = write_snapshot(r#"{"csPerMinute": "plenty"}"#);
        let source = SnapshotFileSource::new(file.path());
        let err = source.fetch_snapshot().unwrap_err();
        assert!(matches!(err, BadgeEngineError::SerializationError(_)));
    }
}
