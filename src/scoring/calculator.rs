use std::collections::HashMap;

use chrono::Utc;
use tracing::info;

use crate::catalog::BadgeCatalog;
use crate::models::{BadgeSuggestion, BadgeTier, EarnedBadge, EvaluationResult, StatsSnapshot};
use crate::scoring::evaluator::evaluate_badge;
use crate::scoring::{suggestions, tiers};

/// Evaluates players against a badge catalog. Holds no cache and no prior
/// state: every call recomputes the full result from the snapshot it is
/// given.
pub struct BadgeCalculator {
    catalog: BadgeCatalog,
}

impl BadgeCalculator {
    pub fn new(catalog: BadgeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    /// Evaluates every catalog badge against one snapshot.
    ///
    /// Earned badges are recorded at progress 100 with the run's wall-clock
    /// time; the rest land in the id -> progress map. Together the two
    /// collections cover the catalog exactly.
    pub fn evaluate_player(&self, stats: &StatsSnapshot) -> EvaluationResult {
        // One timestamp per run, shared by every badge earned in it.
        let achieved_at = Utc::now();

        let mut earned_badges = Vec::new();
        let mut badge_progress = HashMap::new();

        for badge in self.catalog.iter() {
            let outcome = evaluate_badge(badge, stats);
            if outcome.is_earned {
                earned_badges.push(EarnedBadge {
                    badge: badge.clone(),
                    achieved_at,
                    progress: 100.0,
                });
            } else {
                badge_progress.insert(badge.id.clone(), outcome.progress);
            }
        }

        info!(
            "Evaluated {} badges: {} earned, {} in progress",
            self.catalog.len(),
            earned_badges.len(),
            badge_progress.len()
        );

        EvaluationResult {
            earned_badges,
            badge_progress,
            source_stats: stats.clone(),
        }
    }

    /// Near-miss badges worth chasing next, best first. See
    /// [`suggestions::suggest_badges`].
    pub fn suggest_badges(&self, stats: &StatsSnapshot, limit: usize) -> Vec<BadgeSuggestion> {
        suggestions::suggest_badges(&self.catalog, stats, limit)
    }

    /// Highest projected tier of a base badge the snapshot earns, if any.
    pub fn highest_earned_tier(
        &self,
        base_badge_id: &str,
        stats: &StatsSnapshot,
    ) -> Option<BadgeTier> {
        tiers::highest_earned_tier(&self.catalog, base_badge_id, stats)
    }
}
