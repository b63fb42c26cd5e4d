use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{BadgeDefinition, BadgeRequirement, StatsSnapshot};

/// Verdict for a single requirement: met or not, plus 0-100 progress toward
/// the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequirementOutcome {
    pub is_met: bool,
    pub progress: f64,
}

/// Verdict for a whole badge: earned only when every requirement is met,
/// progress is the mean of the per-requirement progresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BadgeOutcome {
    pub is_earned: bool,
    pub progress: f64,
}

/// A badge the player holds as of one evaluation run. Recomputed from
/// scratch every run; `achieved_at` is the run's wall-clock time, not a
/// persisted first-earned date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedBadge {
    pub badge: BadgeDefinition,
    pub achieved_at: DateTime<Utc>,
    pub progress: f64,
}

/// Full outcome of evaluating one player against a catalog. Every catalog
/// badge appears in exactly one of `earned_badges` and `badge_progress`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub earned_badges: Vec<EarnedBadge>,
    pub badge_progress: HashMap<String, f64>,
    pub source_stats: StatsSnapshot,
}

impl EvaluationResult {
    /// Size of the catalog this result was computed against. Follows from
    /// the partition invariant: earned and in-progress badges are disjoint
    /// and together cover the catalog.
    pub fn total_badges(&self) -> usize {
        self.earned_badges.len() + self.badge_progress.len()
    }

    pub fn is_earned(&self, badge_id: &str) -> bool {
        self.earned_badges.iter().any(|e| e.badge.id == badge_id)
    }

    /// Progress for any catalog badge: 100 when earned, otherwise the value
    /// recorded in the progress map.
    pub fn progress_for(&self, badge_id: &str) -> Option<f64> {
        if self.is_earned(badge_id) {
            Some(100.0)
        } else {
            self.badge_progress.get(badge_id).copied()
        }
    }
}

/// A near-miss badge proposed to the player, with the requirements still
/// standing in the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeSuggestion {
    pub badge: BadgeDefinition,
    pub missing_requirements: Vec<BadgeRequirement>,
    pub progress: f64,
}
