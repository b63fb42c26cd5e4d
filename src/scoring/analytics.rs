use std::collections::HashMap;

use crate::models::{BadgeCategory, EvaluationResult};

/// Earned-badge counts per category. Categories with nothing earned are
/// absent from the map, not present at zero.
pub fn category_distribution(result: &EvaluationResult) -> HashMap<BadgeCategory, usize> {
    let mut distribution = HashMap::new();
    for earned in &result.earned_badges {
        *distribution.entry(earned.badge.category).or_insert(0) += 1;
    }
    distribution
}

/// Share of the catalog earned, rounded to a whole percent.
pub fn completion_percentage(result: &EvaluationResult) -> u32 {
    let total = result.total_badges();
    if total == 0 {
        return 0;
    }
    (result.earned_badges.len() as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BadgeDefinition, BadgeRequirement, BadgeTier, ComparisonOp, EarnedBadge, Metric,
        StatsSnapshot,
    };
    use chrono::Utc;

    fn earned_in(category: BadgeCategory, id: &str) -> EarnedBadge {
        EarnedBadge {
            badge: BadgeDefinition {
                id: id.to_string(),
                name: id.to_string(),
                description: String::new(),
                category,
                tier: BadgeTier::Gold,
                requirements: vec![BadgeRequirement {
                    metric: Metric::Kda,
                    threshold: 2.0,
                    operator: ComparisonOp::Gte,
                    period: None,
                    role: None,
                    champion: None,
                }],
            },
            achieved_at: Utc::now(),
            progress: 100.0,
        }
    }

    fn result_with(
        earned_badges: Vec<EarnedBadge>,
        in_progress: &[(&str, f64)],
    ) -> EvaluationResult {
        EvaluationResult {
            earned_badges,
            badge_progress: in_progress
                .iter()
                .map(|(id, p)| (id.to_string(), *p))
                .collect(),
            source_stats: StatsSnapshot::new(),
        }
    }

    #[test]
    fn distribution_counts_earned_badges_only() {
        let result = result_with(
            vec![
                earned_in(BadgeCategory::ResourceManagement, "farm"),
                earned_in(BadgeCategory::ResourceManagement, "gold"),
                earned_in(BadgeCategory::EarlyGameLaning, "lane"),
            ],
            &[("vision", 80.0)],
        );

        let distribution = category_distribution(&result);
        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution[&BadgeCategory::ResourceManagement], 2);
        assert_eq!(distribution[&BadgeCategory::EarlyGameLaning], 1);
        assert!(!distribution.contains_key(&BadgeCategory::StrategicMacro));
    }

    #[test]
    fn distribution_of_nothing_earned_is_empty() {
        let result = result_with(vec![], &[("vision", 80.0), ("farm", 20.0)]);
        assert!(category_distribution(&result).is_empty());
    }

    #[test]
    fn completion_rounds_to_whole_percent() {
        let one_of_three = result_with(
            vec![earned_in(BadgeCategory::TeamplaySupport, "peel")],
            &[("a", 10.0), ("b", 20.0)],
        );
        assert_eq!(completion_percentage(&one_of_three), 33);

        let two_of_three = result_with(
            vec![
                earned_in(BadgeCategory::TeamplaySupport, "peel"),
                earned_in(BadgeCategory::StrategicMacro, "vision"),
            ],
            &[("a", 10.0)],
        );
        assert_eq!(completion_percentage(&two_of_three), 67);
    }

    #[test]
    fn completion_of_an_empty_result_is_zero() {
        assert_eq!(completion_percentage(&result_with(vec![], &[])), 0);
    }
}
