use crate::models::{
    BadgeDefinition, BadgeOutcome, BadgeRequirement, ComparisonOp, RequirementOutcome,
    StatsSnapshot,
};

/// Evaluates one requirement against a snapshot.
///
/// A metric absent from the snapshot is unknown: the requirement is not met
/// and contributes zero progress. Otherwise progress estimates how close the
/// value is to the threshold, capped at 100 for `>=`/`>` and floored at 0 for
/// the remaining operators.
pub fn evaluate_requirement(
    requirement: &BadgeRequirement,
    stats: &StatsSnapshot,
) -> RequirementOutcome {
    let Some(value) = stats.get(requirement.metric) else {
        return RequirementOutcome {
            is_met: false,
            progress: 0.0,
        };
    };

    let threshold = requirement.threshold;
    let is_met = requirement.operator.holds(value, threshold);

    // The ratio formulas below divide by the threshold; at zero the policy is
    // met-or-nothing instead of an infinity leaking into progress numbers.
    if threshold == 0.0 {
        return RequirementOutcome {
            is_met,
            progress: if is_met { 100.0 } else { 0.0 },
        };
    }

    let progress = match requirement.operator {
        ComparisonOp::Gte | ComparisonOp::Gt => (value / threshold * 100.0).min(100.0),
        ComparisonOp::Lte | ComparisonOp::Lt => {
            if is_met {
                100.0
            } else {
                (100.0 - (value - threshold) / threshold * 100.0).max(0.0)
            }
        }
        ComparisonOp::Eq => {
            if is_met {
                100.0
            } else {
                (100.0 - (value - threshold).abs() / threshold * 100.0).max(0.0)
            }
        }
    };

    RequirementOutcome { is_met, progress }
}

/// Evaluates a badge: earned only when every requirement is met, with
/// progress as the mean of all per-requirement progresses. Every requirement
/// is always evaluated; there is no short-circuit on the first miss.
pub fn evaluate_badge(badge: &BadgeDefinition, stats: &StatsSnapshot) -> BadgeOutcome {
    // Empty requirement lists are rejected at catalog construction.
    debug_assert!(!badge.requirements.is_empty());

    let mut met_count = 0usize;
    let mut total_progress = 0.0;

    for requirement in &badge.requirements {
        let outcome = evaluate_requirement(requirement, stats);
        if outcome.is_met {
            met_count += 1;
        }
        total_progress += outcome.progress;
    }

    let progress = (total_progress / badge.requirements.len() as f64).min(100.0);

    BadgeOutcome {
        is_earned: met_count == badge.requirements.len(),
        progress,
    }
}
