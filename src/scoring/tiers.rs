use crate::catalog::BadgeCatalog;
use crate::models::{BadgeDefinition, BadgeRequirement, BadgeTier, StatsSnapshot};
use crate::scoring::evaluator::evaluate_badge;

/// Projects a base definition onto all five tiers, bronze through diamond.
/// Each projection keeps the badge's identity except for its id
/// (`{base_id}_{tier}`), its tier, and its thresholds, which are scaled by
/// the tier multiplier.
// TODO: threshold scaling is not polarity-aware. Multiplying an upper-bound
// (lte/lt) threshold by 1.5 makes the diamond tier easier, not harder. The
// shipped catalog is all lower-bound requirements, so nothing hits this yet;
// revisit the scaling rule before a lower-is-better requirement lands.
pub fn project_tiers(base: &BadgeDefinition) -> Vec<BadgeDefinition> {
    BadgeTier::ASCENDING
        .iter()
        .map(|&tier| {
            let multiplier = tier.threshold_multiplier();
            let requirements = base
                .requirements
                .iter()
                .map(|requirement| BadgeRequirement {
                    threshold: requirement.threshold * multiplier,
                    ..requirement.clone()
                })
                .collect();

            BadgeDefinition {
                id: format!("{}_{}", base.id, tier),
                tier,
                requirements,
                ..base.clone()
            }
        })
        .collect()
}

/// Highest tier of `base_badge_id` the snapshot earns, checking diamond
/// downward. Answers none when no tier is earned or the id is not in the
/// catalog.
pub fn highest_earned_tier(
    catalog: &BadgeCatalog,
    base_badge_id: &str,
    stats: &StatsSnapshot,
) -> Option<BadgeTier> {
    let base = catalog.get(base_badge_id)?;
    project_tiers(base)
        .iter()
        .rev()
        .find(|tiered| evaluate_badge(tiered, stats).is_earned)
        .map(|tiered| tiered.tier)
}
