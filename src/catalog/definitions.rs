use crate::models::{
    BadgeCategory, BadgeDefinition, BadgeRequirement, BadgeTier, ComparisonOp, Metric, Role,
    StatPeriod,
};

fn req(metric: Metric, operator: ComparisonOp, threshold: f64, period: StatPeriod) -> BadgeRequirement {
    BadgeRequirement {
        metric,
        threshold,
        operator,
        period: Some(period),
        role: None,
        champion: None,
    }
}

fn badge(
    id: &str,
    name: &str,
    description: &str,
    category: BadgeCategory,
    requirements: Vec<BadgeRequirement>,
) -> BadgeDefinition {
    BadgeDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        tier: BadgeTier::Gold,
        requirements,
    }
}

/// The shipped badge catalog. Base definitions sit at the gold tier; the
/// other tiers are derived by projection.
pub fn builtin_badges() -> Vec<BadgeDefinition> {
    use BadgeCategory::*;
    use ComparisonOp::Gte;
    use Metric::*;
    use StatPeriod::{Game, Last10Games, Last30Days};

    vec![
        // Strategic & Macro Play
        badge(
            "objective_seizer",
            "Objective Seizer",
            "Recognizes players who consistently contribute significantly to securing major objectives.",
            StrategicMacro,
            vec![
                req(ObjectiveDamageShare, Gte, 15.0, Last10Games),
                req(ObjectiveKillParticipation, Gte, 70.0, Last10Games),
                req(ObjectiveSecureRate, Gte, 60.0, Last10Games),
            ],
        ),
        badge(
            "visionary_architect",
            "Visionary Architect",
            "Awards players for superior vision control that directly leads to advantages or prevents disadvantages.",
            StrategicMacro,
            vec![
                req(VisionScorePerMinute, Gte, 2.5, Last10Games),
                req(ControlWardEfficiency, Gte, 80.0, Last10Games),
                req(VisionDenial, Gte, 15.0, Last10Games),
            ],
        ),
        badge(
            "teleport_master",
            "Teleport Master",
            "Recognizes optimal and impactful teleport usage (Top Lane Specific).",
            StrategicMacro,
            vec![BadgeRequirement {
                role: Some(Role::Top),
                ..req(TeleportEffectivenessRate, Gte, 70.0, Last10Games)
            }],
        ),
        // Resource Management
        badge(
            "gold_efficiency_expert",
            "Gold Efficiency Expert",
            "Rewards players who maximize their gold income and convert it effectively into power.",
            ResourceManagement,
            vec![
                req(GoldPerMinute, Gte, 400.0, Last10Games),
                req(GoldToDamageConversion, Gte, 1.2, Last10Games),
                req(ItemCompletionSpeed, Gte, 85.0, Last10Games),
            ],
        ),
        badge(
            "cs_dominator",
            "CS Dominator",
            "Recognizes players with exceptional farming mechanics and lane pressure through minion control.",
            ResourceManagement,
            vec![
                req(CsPerMinute, Gte, 7.5, Last10Games),
                req(CsDifferentialAt10, Gte, 10.0, Last10Games),
                req(CsDifferentialAt20, Gte, 15.0, Last10Games),
            ],
        ),
        // Teamplay & Support
        badge(
            "teamfight_initiator",
            "Teamfight Initiator",
            "Awards players who consistently make impactful engagements that lead to successful teamfights.",
            TeamplaySupport,
            vec![
                req(EngagementSuccessRate, Gte, 65.0, Last10Games),
                req(CcScoreContribution, Gte, 80.0, Last10Games),
            ],
        ),
        badge(
            "peel_specialist",
            "Peel Specialist",
            "Recognizes players who effectively protect their carries from enemy threats (Support/Tank Specific).",
            TeamplaySupport,
            vec![
                req(DamageShieldedHealed, Gte, 5000.0, Game),
                req(CcOnEnemiesAttackingAllies, Gte, 10.0, Game),
                req(NumberOfSaves, Gte, 2.0, Game),
            ],
        ),
        badge(
            "roam_impact",
            "Roam Impact",
            "Awards players whose map movements outside their lane/jungle consistently create advantages for other lanes.",
            TeamplaySupport,
            vec![
                req(RoamSuccessRate, Gte, 60.0, Last10Games),
                req(RoamGoldXpSwing, Gte, 1500.0, Game),
            ],
        ),
        // Adaptability & Resilience
        badge(
            "comeback_king_queen",
            "Comeback King/Queen",
            "Recognizes players who consistently perform well and contribute to victories in games where their team was significantly behind.",
            AdaptabilityResilience,
            vec![
                req(WinRateFromGoldDeficit, Gte, 40.0, Last30Days),
                req(KdaWhenBehind, Gte, 1.5, Last30Days),
                req(ObjectiveSecuresWhenBehind, Gte, 30.0, Last30Days),
            ],
        ),
        badge(
            "meta_flexer",
            "Meta Flexer",
            "Awards players who demonstrate proficiency across a wide range of champions and roles, adapting to meta shifts.",
            AdaptabilityResilience,
            vec![
                req(ChampionPoolSize, Gte, 8.0, Last30Days),
                req(RoleFlexibility, Gte, 2.0, Last30Days),
                req(MetaAdaptationScore, Gte, 75.0, Last30Days),
            ],
        ),
        // Early Game & Laning
        badge(
            "lane_bully",
            "Lane Bully",
            "Recognizes players who consistently dominate their laning phase.",
            EarlyGameLaning,
            vec![
                req(GoldDifferentialAt10, Gte, 300.0, Last10Games),
                req(KillParticipationInLane, Gte, 60.0, Last10Games),
                req(SoloKillRate, Gte, 20.0, Last10Games),
                req(PressureScore, Gte, 75.0, Last10Games),
            ],
        ),
        badge(
            "first_blood_contributor",
            "First Blood Contributor",
            "Awards players who are consistently involved in securing the first kill of the game.",
            EarlyGameLaning,
            vec![req(FirstBloodParticipationRate, Gte, 40.0, Last10Games)],
        ),
        // Late Game & Scaling
        badge(
            "late_game_powerhouse",
            "Late Game Powerhouse",
            "Recognizes players who consistently scale effectively into the late game and have high impact in decisive late-game teamfights.",
            LateGameScaling,
            vec![
                req(LateGameDamageDealt, Gte, 20000.0, Game),
                req(LateGameObjectiveSecureRate, Gte, 70.0, Last10Games),
                req(WinRateGames30Plus, Gte, 65.0, Last30Days),
                req(LateGameGoldToDamageConversion, Gte, 1.5, Last10Games),
            ],
        ),
        // Anti-Carry & Disruption
        badge(
            "threat_neutralizer",
            "Threat Neutralizer",
            "Awards players who consistently shut down high-priority enemy carries (Tank/Support/Assassin Specific).",
            AntiCarryDisruption,
            vec![
                req(DamageToEnemyCarries, Gte, 8000.0, Game),
                req(CcOnEnemyCarries, Gte, 5.0, Game),
                req(KillParticipationOnCarries, Gte, 70.0, Last10Games),
            ],
        ),
        badge(
            "cc_chain_master",
            "CC Chain Master",
            "Recognizes players who consistently land effective crowd control abilities, enabling team plays.",
            AntiCarryDisruption,
            vec![
                req(TotalCcDuration, Gte, 15.0, Game),
                req(MultiTargetCcHits, Gte, 3.0, Game),
                req(CcFollowUpRate, Gte, 75.0, Last10Games),
            ],
        ),
    ]
}
