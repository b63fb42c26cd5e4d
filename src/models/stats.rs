use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::BadgeCategory;

/// The closed vocabulary of numeric performance metrics a requirement can
/// reference. Serialized names are the camelCase keys used by snapshot files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    // Strategic & Macro Play
    ObjectiveDamageShare,
    ObjectiveKillParticipation,
    ObjectiveSecureRate,
    VisionScorePerMinute,
    ControlWardEfficiency,
    VisionDenial,
    TeleportEffectivenessRate,

    // Resource Management
    GoldPerMinute,
    GoldToDamageConversion,
    ItemCompletionSpeed,
    CsPerMinute,
    CsDifferentialAt10,
    CsDifferentialAt20,

    // Teamplay & Support
    EngagementSuccessRate,
    CcScoreContribution,
    DamageShieldedHealed,
    CcOnEnemiesAttackingAllies,
    NumberOfSaves,
    RoamSuccessRate,
    RoamGoldXpSwing,

    // Adaptability & Resilience
    WinRateFromGoldDeficit,
    KdaWhenBehind,
    ObjectiveSecuresWhenBehind,
    ChampionPoolSize,
    RoleFlexibility,
    MetaAdaptationScore,

    // Early Game & Laning
    GoldDifferentialAt10,
    KillParticipationInLane,
    SoloKillRate,
    PressureScore,
    FirstBloodParticipationRate,

    // Late Game & Scaling
    LateGameDamageDealt,
    LateGameDamageTaken,
    LateGameObjectiveSecureRate,
    WinRateGames30Plus,
    LateGameGoldToDamageConversion,

    // Anti-Carry & Disruption
    DamageToEnemyCarries,
    CcOnEnemyCarries,
    KillParticipationOnCarries,
    TotalCcDuration,
    MultiTargetCcHits,
    CcFollowUpRate,

    // General
    Kda,
    WinRate,
    GamesPlayed,
}

impl Metric {
    /// Every metric in the vocabulary, in declaration order.
    pub const ALL: [Metric; 45] = [
        Metric::ObjectiveDamageShare,
        Metric::ObjectiveKillParticipation,
        Metric::ObjectiveSecureRate,
        Metric::VisionScorePerMinute,
        Metric::ControlWardEfficiency,
        Metric::VisionDenial,
        Metric::TeleportEffectivenessRate,
        Metric::GoldPerMinute,
        Metric::GoldToDamageConversion,
        Metric::ItemCompletionSpeed,
        Metric::CsPerMinute,
        Metric::CsDifferentialAt10,
        Metric::CsDifferentialAt20,
        Metric::EngagementSuccessRate,
        Metric::CcScoreContribution,
        Metric::DamageShieldedHealed,
        Metric::CcOnEnemiesAttackingAllies,
        Metric::NumberOfSaves,
        Metric::RoamSuccessRate,
        Metric::RoamGoldXpSwing,
        Metric::WinRateFromGoldDeficit,
        Metric::KdaWhenBehind,
        Metric::ObjectiveSecuresWhenBehind,
        Metric::ChampionPoolSize,
        Metric::RoleFlexibility,
        Metric::MetaAdaptationScore,
        Metric::GoldDifferentialAt10,
        Metric::KillParticipationInLane,
        Metric::SoloKillRate,
        Metric::PressureScore,
        Metric::FirstBloodParticipationRate,
        Metric::LateGameDamageDealt,
        Metric::LateGameDamageTaken,
        Metric::LateGameObjectiveSecureRate,
        Metric::WinRateGames30Plus,
        Metric::LateGameGoldToDamageConversion,
        Metric::DamageToEnemyCarries,
        Metric::CcOnEnemyCarries,
        Metric::KillParticipationOnCarries,
        Metric::TotalCcDuration,
        Metric::MultiTargetCcHits,
        Metric::CcFollowUpRate,
        Metric::Kda,
        Metric::WinRate,
        Metric::GamesPlayed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::ObjectiveDamageShare => "objectiveDamageShare",
            Metric::ObjectiveKillParticipation => "objectiveKillParticipation",
            Metric::ObjectiveSecureRate => "objectiveSecureRate",
            Metric::VisionScorePerMinute => "visionScorePerMinute",
            Metric::ControlWardEfficiency => "controlWardEfficiency",
            Metric::VisionDenial => "visionDenial",
            Metric::TeleportEffectivenessRate => "teleportEffectivenessRate",
            Metric::GoldPerMinute => "goldPerMinute",
            Metric::GoldToDamageConversion => "goldToDamageConversion",
            Metric::ItemCompletionSpeed => "itemCompletionSpeed",
            Metric::CsPerMinute => "csPerMinute",
            Metric::CsDifferentialAt10 => "csDifferentialAt10",
            Metric::CsDifferentialAt20 => "csDifferentialAt20",
            Metric::EngagementSuccessRate => "engagementSuccessRate",
            Metric::CcScoreContribution => "ccScoreContribution",
            Metric::DamageShieldedHealed => "damageShieldedHealed",
            Metric::CcOnEnemiesAttackingAllies => "ccOnEnemiesAttackingAllies",
            Metric::NumberOfSaves => "numberOfSaves",
            Metric::RoamSuccessRate => "roamSuccessRate",
            Metric::RoamGoldXpSwing => "roamGoldXpSwing",
            Metric::WinRateFromGoldDeficit => "winRateFromGoldDeficit",
            Metric::KdaWhenBehind => "kdaWhenBehind",
            Metric::ObjectiveSecuresWhenBehind => "objectiveSecuresWhenBehind",
            Metric::ChampionPoolSize => "championPoolSize",
            Metric::RoleFlexibility => "roleFlexibility",
            Metric::MetaAdaptationScore => "metaAdaptationScore",
            Metric::GoldDifferentialAt10 => "goldDifferentialAt10",
            Metric::KillParticipationInLane => "killParticipationInLane",
            Metric::SoloKillRate => "soloKillRate",
            Metric::PressureScore => "pressureScore",
            Metric::FirstBloodParticipationRate => "firstBloodParticipationRate",
            Metric::LateGameDamageDealt => "lateGameDamageDealt",
            Metric::LateGameDamageTaken => "lateGameDamageTaken",
            Metric::LateGameObjectiveSecureRate => "lateGameObjectiveSecureRate",
            Metric::WinRateGames30Plus => "winRateGames30Plus",
            Metric::LateGameGoldToDamageConversion => "lateGameGoldToDamageConversion",
            Metric::DamageToEnemyCarries => "damageToEnemyCarries",
            Metric::CcOnEnemyCarries => "ccOnEnemyCarries",
            Metric::KillParticipationOnCarries => "killParticipationOnCarries",
            Metric::TotalCcDuration => "totalCcDuration",
            Metric::MultiTargetCcHits => "multiTargetCcHits",
            Metric::CcFollowUpRate => "ccFollowUpRate",
            Metric::Kda => "kda",
            Metric::WinRate => "winRate",
            Metric::GamesPlayed => "gamesPlayed",
        }
    }

    /// The badge category this metric belongs to, or `None` for the general
    /// stats (`kda`, `winRate`, `gamesPlayed`) that no category claims.
    pub fn category(&self) -> Option<BadgeCategory> {
        use Metric::*;
        match self {
            ObjectiveDamageShare | ObjectiveKillParticipation | ObjectiveSecureRate
            | VisionScorePerMinute | ControlWardEfficiency | VisionDenial
            | TeleportEffectivenessRate => Some(BadgeCategory::StrategicMacro),
            GoldPerMinute | GoldToDamageConversion | ItemCompletionSpeed | CsPerMinute
            | CsDifferentialAt10 | CsDifferentialAt20 => Some(BadgeCategory::ResourceManagement),
            EngagementSuccessRate | CcScoreContribution | DamageShieldedHealed
            | CcOnEnemiesAttackingAllies | NumberOfSaves | RoamSuccessRate
            | RoamGoldXpSwing => Some(BadgeCategory::TeamplaySupport),
            WinRateFromGoldDeficit | KdaWhenBehind | ObjectiveSecuresWhenBehind
            | ChampionPoolSize | RoleFlexibility | MetaAdaptationScore => {
                Some(BadgeCategory::AdaptabilityResilience)
            }
            GoldDifferentialAt10 | KillParticipationInLane | SoloKillRate | PressureScore
            | FirstBloodParticipationRate => Some(BadgeCategory::EarlyGameLaning),
            LateGameDamageDealt | LateGameDamageTaken | LateGameObjectiveSecureRate
            | WinRateGames30Plus | LateGameGoldToDamageConversion => {
                Some(BadgeCategory::LateGameScaling)
            }
            DamageToEnemyCarries | CcOnEnemyCarries | KillParticipationOnCarries
            | TotalCcDuration | MultiTargetCcHits | CcFollowUpRate => {
                Some(BadgeCategory::AntiCarryDisruption)
            }
            Kda | WinRate | GamesPlayed => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "top" => Some(Role::Top),
            "jungle" | "jg" => Some(Role::Jungle),
            "mid" | "middle" => Some(Role::Mid),
            "adc" | "bot" | "bottom" => Some(Role::Adc),
            "support" | "sup" => Some(Role::Support),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One player's pre-aggregated performance numbers, keyed by metric. A metric
/// absent from the snapshot is unknown: requirements referencing it evaluate
/// as not met with zero progress rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsSnapshot {
    values: HashMap<Metric, f64>,
}

impl StatsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        self.values.insert(metric, value);
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.values.contains_key(&metric)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }
}

impl FromIterator<(Metric, f64)> for StatsSnapshot {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<Metric, f64>> for StatsSnapshot {
    fn from(values: HashMap<Metric, f64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_names_match_serde_representation() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.as_str()));
        }
    }

    #[test]
    fn metric_vocabulary_is_complete() {
        assert_eq!(Metric::ALL.len(), 45);
        let categorized = Metric::ALL.iter().filter(|m| m.category().is_some()).count();
        // kda, winRate and gamesPlayed stay uncategorized
        assert_eq!(categorized, 42);
    }

    #[test]
    fn snapshot_round_trips_as_flat_json_object() {
        let snapshot: StatsSnapshot = [
            (Metric::CsPerMinute, 7.5),
            (Metric::GoldDifferentialAt10, -150.0),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["csPerMinute"], 7.5);
        assert_eq!(json["goldDifferentialAt10"], -150.0);

        let parsed: StatsSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn missing_metric_reads_as_none() {
        let snapshot = StatsSnapshot::new();
        assert_eq!(snapshot.get(Metric::VisionScorePerMinute), None);
        assert!(!snapshot.contains(Metric::VisionScorePerMinute));
    }

    #[test]
    fn role_parsing_accepts_aliases() {
        assert_eq!(Role::from_str("ADC"), Some(Role::Adc));
        assert_eq!(Role::from_str("bot"), Some(Role::Adc));
        assert_eq!(Role::from_str("jg"), Some(Role::Jungle));
        assert_eq!(Role::from_str("sup"), Some(Role::Support));
        assert_eq!(Role::from_str("invalid"), None);
    }
}
