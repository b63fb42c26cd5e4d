use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Metric, Result, Role, StatsSnapshot};
use crate::sources::StatsSource;

/// Generates randomized but plausible snapshots, standing in for the real
/// aggregation pipeline. Values are drawn per metric and then adjusted for
/// the player's role. Only top laners get a teleport effectiveness stat, so
/// every other role exercises the missing-metric path downstream.
pub struct MockStatsSource {
    role: Role,
    seed: Option<u64>,
}

impl MockStatsSource {
    pub fn new(role: Role) -> Self {
        Self { role, seed: None }
    }

    /// Deterministic variant for demos and tests.
    pub fn seeded(role: Role, seed: u64) -> Self {
        Self {
            role,
            seed: Some(seed),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl StatsSource for MockStatsSource {
    fn describe(&self) -> String {
        match self.seed {
            Some(seed) => format!("mock generator ({} lane, seed {})", self.role.as_str(), seed),
            None => format!("mock generator ({} lane)", self.role.as_str()),
        }
    }

    fn fetch_snapshot(&self) -> Result<StatsSnapshot> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(generate_stats(&mut rng, self.role))
    }
}

fn generate_stats<R: Rng>(rng: &mut R, role: Role) -> StatsSnapshot {
    let mut stats = StatsSnapshot::new();

    // Strategic & macro play
    stats.set(Metric::ObjectiveDamageShare, rng.gen_range(5.0..30.0));
    stats.set(Metric::ObjectiveKillParticipation, rng.gen_range(40.0..80.0));
    stats.set(Metric::ObjectiveSecureRate, rng.gen_range(40.0..80.0));
    stats.set(Metric::VisionScorePerMinute, rng.gen_range(1.0..3.0));
    stats.set(Metric::ControlWardEfficiency, rng.gen_range(40.0..80.0));
    stats.set(Metric::VisionDenial, rng.gen_range(5.0..25.0));

    // Resource management
    stats.set(Metric::GoldPerMinute, rng.gen_range(300.0..500.0));
    stats.set(Metric::GoldToDamageConversion, rng.gen_range(0.8..1.6));
    stats.set(Metric::ItemCompletionSpeed, rng.gen_range(70.0..100.0));
    stats.set(Metric::CsPerMinute, rng.gen_range(5.0..8.0));
    stats.set(Metric::CsDifferentialAt10, rng.gen_range(-10.0..10.0));
    stats.set(Metric::CsDifferentialAt20, rng.gen_range(-15.0..15.0));

    // Teamplay & support
    stats.set(Metric::EngagementSuccessRate, rng.gen_range(40.0..80.0));
    stats.set(Metric::CcScoreContribution, rng.gen_range(40.0..80.0));
    stats.set(Metric::DamageShieldedHealed, rng.gen_range(2000.0..10000.0));
    stats.set(Metric::CcOnEnemiesAttackingAllies, rng.gen_range(5.0..20.0));
    stats.set(Metric::NumberOfSaves, rng.gen_range(1.0..5.0));
    stats.set(Metric::RoamSuccessRate, rng.gen_range(40.0..80.0));
    stats.set(Metric::RoamGoldXpSwing, rng.gen_range(1000.0..3000.0));

    // Adaptability & resilience
    stats.set(Metric::WinRateFromGoldDeficit, rng.gen_range(20.0..50.0));
    stats.set(Metric::KdaWhenBehind, rng.gen_range(1.0..2.0));
    stats.set(Metric::ObjectiveSecuresWhenBehind, rng.gen_range(20.0..60.0));
    stats.set(Metric::ChampionPoolSize, rng.gen_range(3..13) as f64);
    stats.set(Metric::RoleFlexibility, rng.gen_range(1..4) as f64);
    stats.set(Metric::MetaAdaptationScore, rng.gen_range(50.0..90.0));

    // Early game & laning
    stats.set(Metric::GoldDifferentialAt10, rng.gen_range(-300.0..300.0));
    stats.set(Metric::KillParticipationInLane, rng.gen_range(40.0..80.0));
    stats.set(Metric::SoloKillRate, rng.gen_range(10.0..40.0));
    stats.set(Metric::PressureScore, rng.gen_range(40.0..80.0));
    stats.set(Metric::FirstBloodParticipationRate, rng.gen_range(20.0..60.0));

    // Late game & scaling
    stats.set(Metric::LateGameDamageDealt, rng.gen_range(15000.0..30000.0));
    stats.set(Metric::LateGameDamageTaken, rng.gen_range(10000.0..25000.0));
    stats.set(Metric::LateGameObjectiveSecureRate, rng.gen_range(40.0..80.0));
    stats.set(Metric::WinRateGames30Plus, rng.gen_range(40.0..80.0));
    stats.set(Metric::LateGameGoldToDamageConversion, rng.gen_range(1.0..1.8));

    // Anti-carry & disruption
    stats.set(Metric::DamageToEnemyCarries, rng.gen_range(5000.0..15000.0));
    stats.set(Metric::CcOnEnemyCarries, rng.gen_range(2.0..10.0));
    stats.set(Metric::KillParticipationOnCarries, rng.gen_range(40.0..80.0));
    stats.set(Metric::TotalCcDuration, rng.gen_range(5.0..25.0));
    stats.set(Metric::MultiTargetCcHits, rng.gen_range(1.0..6.0));
    stats.set(Metric::CcFollowUpRate, rng.gen_range(50.0..90.0));

    // General
    stats.set(Metric::Kda, rng.gen_range(1.0..3.0));
    stats.set(Metric::WinRate, rng.gen_range(40.0..80.0));
    stats.set(Metric::GamesPlayed, rng.gen_range(50..250) as f64);

    match role {
        Role::Support => {
            scale(&mut stats, Metric::VisionScorePerMinute, 1.5);
            scale(&mut stats, Metric::DamageShieldedHealed, 1.5);
            scale(&mut stats, Metric::CcScoreContribution, 1.2);
            scale(&mut stats, Metric::GoldPerMinute, 0.7);
            scale(&mut stats, Metric::CsPerMinute, 0.3);
        }
        Role::Jungle => {
            scale(&mut stats, Metric::ObjectiveDamageShare, 1.3);
            scale(&mut stats, Metric::RoamSuccessRate, 1.2);
            scale(&mut stats, Metric::FirstBloodParticipationRate, 1.2);
            scale(&mut stats, Metric::CsPerMinute, 0.8);
        }
        Role::Adc => {
            scale(&mut stats, Metric::LateGameDamageDealt, 1.4);
            scale(&mut stats, Metric::GoldToDamageConversion, 1.2);
            scale(&mut stats, Metric::CsPerMinute, 1.2);
        }
        Role::Top => {
            stats.set(Metric::TeleportEffectivenessRate, rng.gen_range(40.0..80.0));
            scale(&mut stats, Metric::SoloKillRate, 1.3);
            scale(&mut stats, Metric::PressureScore, 1.1);
        }
        Role::Mid => {}
    }

    stats
}

fn scale(stats: &mut StatsSnapshot, metric: Metric, factor: f64) {
    if let Some(value) = stats.get(metric) {
        stats.set(metric, value * factor);
    }
}
