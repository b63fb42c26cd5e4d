use std::cmp::Ordering;

use crate::catalog::BadgeCatalog;
use crate::models::{BadgeSuggestion, StatsSnapshot};
use crate::scoring::evaluator::{evaluate_badge, evaluate_requirement};

/// Suggestion count used when the caller does not pick one.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Ranks near-miss badges: not earned, overall progress strictly above 50,
/// best first, at most `limit` entries. Each suggestion lists the
/// requirements still unmet.
pub fn suggest_badges(
    catalog: &BadgeCatalog,
    stats: &StatsSnapshot,
    limit: usize,
) -> Vec<BadgeSuggestion> {
    let mut suggestions: Vec<BadgeSuggestion> = catalog
        .iter()
        .filter_map(|badge| {
            let outcome = evaluate_badge(badge, stats);
            if outcome.is_earned || outcome.progress <= 50.0 {
                return None;
            }

            let missing_requirements = badge
                .requirements
                .iter()
                .filter(|requirement| !evaluate_requirement(requirement, stats).is_met)
                .cloned()
                .collect();

            Some(BadgeSuggestion {
                badge: badge.clone(),
                missing_requirements,
                progress: outcome.progress,
            })
        })
        .collect();

    // Stable sort: equal progress keeps catalog order.
    suggestions.sort_by(|a, b| b.progress.partial_cmp(&a.progress).unwrap_or(Ordering::Equal));
    suggestions.truncate(limit);
    suggestions
}
