use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Metric, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    StrategicMacro,
    ResourceManagement,
    TeamplaySupport,
    AdaptabilityResilience,
    EarlyGameLaning,
    LateGameScaling,
    AntiCarryDisruption,
}

impl BadgeCategory {
    pub const ALL: [BadgeCategory; 7] = [
        BadgeCategory::StrategicMacro,
        BadgeCategory::ResourceManagement,
        BadgeCategory::TeamplaySupport,
        BadgeCategory::AdaptabilityResilience,
        BadgeCategory::EarlyGameLaning,
        BadgeCategory::LateGameScaling,
        BadgeCategory::AntiCarryDisruption,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeCategory::StrategicMacro => "strategic_macro",
            BadgeCategory::ResourceManagement => "resource_management",
            BadgeCategory::TeamplaySupport => "teamplay_support",
            BadgeCategory::AdaptabilityResilience => "adaptability_resilience",
            BadgeCategory::EarlyGameLaning => "early_game_laning",
            BadgeCategory::LateGameScaling => "late_game_scaling",
            BadgeCategory::AntiCarryDisruption => "anti_carry_disruption",
        }
    }

    /// Human-readable name as shown on the dashboard.
    pub fn display_name(&self) -> &'static str {
        match self {
            BadgeCategory::StrategicMacro => "Strategic & Macro Play",
            BadgeCategory::ResourceManagement => "Resource Management",
            BadgeCategory::TeamplaySupport => "Teamplay & Support",
            BadgeCategory::AdaptabilityResilience => "Adaptability & Resilience",
            BadgeCategory::EarlyGameLaning => "Early Game & Laning",
            BadgeCategory::LateGameScaling => "Late Game & Scaling",
            BadgeCategory::AntiCarryDisruption => "Anti-Carry & Disruption",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strategic_macro" | "macro" => Some(BadgeCategory::StrategicMacro),
            "resource_management" | "resources" => Some(BadgeCategory::ResourceManagement),
            "teamplay_support" | "teamplay" => Some(BadgeCategory::TeamplaySupport),
            "adaptability_resilience" | "adaptability" => Some(BadgeCategory::AdaptabilityResilience),
            "early_game_laning" | "laning" => Some(BadgeCategory::EarlyGameLaning),
            "late_game_scaling" | "scaling" => Some(BadgeCategory::LateGameScaling),
            "anti_carry_disruption" | "disruption" => Some(BadgeCategory::AntiCarryDisruption),
            _ => None,
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Difficulty tiers, ordered bronze < silver < gold < platinum < diamond.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl BadgeTier {
    pub const ASCENDING: [BadgeTier; 5] = [
        BadgeTier::Bronze,
        BadgeTier::Silver,
        BadgeTier::Gold,
        BadgeTier::Platinum,
        BadgeTier::Diamond,
    ];

    /// Factor applied to a base (gold) requirement threshold when deriving
    /// this tier's variant of a badge.
    pub fn threshold_multiplier(&self) -> f64 {
        match self {
            BadgeTier::Bronze => 0.6,
            BadgeTier::Silver => 0.8,
            BadgeTier::Gold => 1.0,
            BadgeTier::Platinum => 1.2,
            BadgeTier::Diamond => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::Bronze => "bronze",
            BadgeTier::Silver => "silver",
            BadgeTier::Gold => "gold",
            BadgeTier::Platinum => "platinum",
            BadgeTier::Diamond => "diamond",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bronze" => Some(BadgeTier::Bronze),
            "silver" => Some(BadgeTier::Silver),
            "gold" => Some(BadgeTier::Gold),
            "platinum" => Some(BadgeTier::Platinum),
            "diamond" => Some(BadgeTier::Diamond),
            _ => None,
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Threshold comparison operator. Serialized codes match the snapshot wire
/// vocabulary (`gte`, `gt`, `lte`, `lt`, `eq`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    Gte,
    Gt,
    Lte,
    Lt,
    Eq,
}

impl ComparisonOp {
    /// Whether `value` satisfies this comparison against `threshold`.
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            ComparisonOp::Gte => value >= threshold,
            ComparisonOp::Gt => value > threshold,
            ComparisonOp::Lte => value <= threshold,
            ComparisonOp::Lt => value < threshold,
            ComparisonOp::Eq => value == threshold,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Gte => ">=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Eq => "==",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Aggregation window a requirement's metric is understood to cover. Carried
/// for display and filtering; the evaluator itself assumes the snapshot is
/// already aggregated to the right window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatPeriod {
    Game,
    #[serde(rename = "last_10_games")]
    Last10Games,
    #[serde(rename = "last_30_days")]
    Last30Days,
    AllTime,
}

impl StatPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            StatPeriod::Game => "per game",
            StatPeriod::Last10Games => "last 10 games",
            StatPeriod::Last30Days => "last 30 days",
            StatPeriod::AllTime => "all time",
        }
    }
}

impl fmt::Display for StatPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One threshold condition of a badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeRequirement {
    pub metric: Metric,
    pub threshold: f64,
    pub operator: ComparisonOp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<StatPeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub champion: Option<String>,
}

impl fmt::Display for BadgeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metric, self.operator, self.threshold)?;
        if let Some(period) = self.period {
            write!(f, " ({})", period)?;
        }
        Ok(())
    }
}

/// A badge definition. Earned when every requirement holds against a stats
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: BadgeCategory,
    pub tier: BadgeTier,
    pub requirements: Vec<BadgeRequirement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_by_difficulty() {
        assert!(BadgeTier::Bronze < BadgeTier::Silver);
        assert!(BadgeTier::Gold < BadgeTier::Platinum);
        assert!(BadgeTier::Platinum < BadgeTier::Diamond);

        let mut sorted = BadgeTier::ASCENDING;
        sorted.sort();
        assert_eq!(sorted, BadgeTier::ASCENDING);
    }

    #[test]
    fn tier_multipliers_scale_upward() {
        let multipliers: Vec<f64> = BadgeTier::ASCENDING
            .iter()
            .map(|t| t.threshold_multiplier())
            .collect();
        assert_eq!(multipliers, vec![0.6, 0.8, 1.0, 1.2, 1.5]);
        assert_eq!(BadgeTier::Gold.threshold_multiplier(), 1.0);
    }

    #[test]
    fn operator_codes_serialize_like_the_frontend() {
        assert_eq!(serde_json::to_string(&ComparisonOp::Gte).unwrap(), "\"gte\"");
        assert_eq!(serde_json::to_string(&ComparisonOp::Eq).unwrap(), "\"eq\"");
        let parsed: ComparisonOp = serde_json::from_str("\"lte\"").unwrap();
        assert_eq!(parsed, ComparisonOp::Lte);
    }

    #[test]
    fn period_codes_keep_their_underscored_names() {
        assert_eq!(
            serde_json::to_string(&StatPeriod::Last10Games).unwrap(),
            "\"last_10_games\""
        );
        assert_eq!(
            serde_json::to_string(&StatPeriod::Last30Days).unwrap(),
            "\"last_30_days\""
        );
        assert_eq!(serde_json::to_string(&StatPeriod::Game).unwrap(), "\"game\"");
        assert_eq!(
            serde_json::to_string(&StatPeriod::AllTime).unwrap(),
            "\"all_time\""
        );
    }

    #[test]
    fn operator_comparisons() {
        assert!(ComparisonOp::Gte.holds(7.5, 7.5));
        assert!(!ComparisonOp::Gt.holds(7.5, 7.5));
        assert!(ComparisonOp::Lte.holds(3.0, 7.5));
        assert!(!ComparisonOp::Lt.holds(7.5, 7.5));
        assert!(ComparisonOp::Eq.holds(7.5, 7.5));
    }

    #[test]
    fn requirement_displays_with_period() {
        let req = BadgeRequirement {
            metric: Metric::CsPerMinute,
            threshold: 7.5,
            operator: ComparisonOp::Gte,
            period: Some(StatPeriod::Last10Games),
            role: None,
            champion: None,
        };
        assert_eq!(req.to_string(), "csPerMinute >= 7.5 (last 10 games)");
    }

    #[test]
    fn category_parsing_accepts_short_names() {
        assert_eq!(
            BadgeCategory::from_str("macro"),
            Some(BadgeCategory::StrategicMacro)
        );
        assert_eq!(
            BadgeCategory::from_str("anti_carry_disruption"),
            Some(BadgeCategory::AntiCarryDisruption)
        );
        assert_eq!(BadgeCategory::from_str("nope"), None);
    }
}
