use clap::{Parser, Subcommand};
use rift_badges::{
    catalog::BadgeCatalog,
    config::Settings,
    models::{BadgeCategory, Role},
    scoring::{self, BadgeCalculator},
    sources::{evaluate_source, MockStatsSource, SnapshotFileSource, StatsSource},
};
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "rift-badges")]
#[clap(about = "Evaluate League performance badges from stats snapshots", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a snapshot against the full badge catalog
    Evaluate {
        /// Role profile for the mock stats source (top, jungle, mid, adc, support)
        #[clap(short, long, default_value = "mid")]
        role: String,

        /// Seed for the mock stats source, for reproducible runs
        #[clap(short, long)]
        seed: Option<u64>,

        /// Read the snapshot from a JSON file instead of generating one
        #[clap(short = 'f', long)]
        stats_file: Option<String>,

        /// Emit the full evaluation result as JSON
        #[clap(long)]
        json: bool,
    },

    /// Suggest near-miss badges worth chasing next
    Suggest {
        /// Role profile for the mock stats source
        #[clap(short, long, default_value = "mid")]
        role: String,

        /// Seed for the mock stats source
        #[clap(short, long)]
        seed: Option<u64>,

        /// Read the snapshot from a JSON file instead of generating one
        #[clap(short = 'f', long)]
        stats_file: Option<String>,

        /// Maximum number of suggestions
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Show the projected tier ladder for one badge
    Tiers {
        /// Base badge id, e.g. cs_dominator
        badge_id: String,

        /// Role profile for the mock stats source
        #[clap(short, long, default_value = "mid")]
        role: String,

        /// Seed for the mock stats source
        #[clap(short, long)]
        seed: Option<u64>,

        /// Read the snapshot from a JSON file instead of generating one
        #[clap(short = 'f', long)]
        stats_file: Option<String>,
    },

    /// List the badge catalog
    Catalog {
        /// Only show one category (e.g. strategic_macro, teamplay_support)
        #[clap(short, long)]
        category: Option<String>,

        /// Emit the definitions as JSON
        #[clap(long)]
        json: bool,
    },
}

fn build_source(
    role: &str,
    seed: Option<u64>,
    stats_file: Option<String>,
) -> anyhow::Result<Box<dyn StatsSource>> {
    if let Some(path) = stats_file {
        return Ok(Box::new(SnapshotFileSource::new(path)));
    }

    let role = Role::from_str(role).ok_or_else(|| anyhow::anyhow!("Unknown role: {}", role))?;
    Ok(match seed {
        Some(seed) => Box::new(MockStatsSource::seeded(role, seed)),
        None => Box::new(MockStatsSource::new(role)),
    })
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let calculator = BadgeCalculator::new(BadgeCatalog::builtin());

    match cli.command {
        Commands::Evaluate {
            role,
            seed,
            stats_file,
            json,
        } => {
            let source = build_source(&role, seed, stats_file)?;
            let result = evaluate_source(source.as_ref(), &calculator)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            println!("\n=== Badge Evaluation ===");
            println!("Source: {}", source.describe());
            println!(
                "Earned: {}/{} badges ({}% complete)",
                result.earned_badges.len(),
                result.total_badges(),
                scoring::completion_percentage(&result)
            );

            if !result.earned_badges.is_empty() {
                println!("\nEarned badges:");
                for earned in &result.earned_badges {
                    println!(
                        "  🏅 {} [{}] - {}",
                        earned.badge.name,
                        earned.badge.tier.as_str(),
                        earned.badge.category.display_name()
                    );
                }
            }

            let mut in_progress: Vec<(&str, f64)> = result
                .badge_progress
                .iter()
                .filter(|(_, progress)| **progress > settings.display.min_progress_shown)
                .map(|(id, progress)| (id.as_str(), *progress))
                .collect();
            in_progress
                .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            in_progress.truncate(settings.display.max_progress_entries);

            if !in_progress.is_empty() {
                println!("\nClosest unearned badges:");
                for (id, progress) in in_progress {
                    let name = calculator
                        .catalog()
                        .get(id)
                        .map(|b| b.name.as_str())
                        .unwrap_or(id);
                    println!("  {:<28} {:>5.1}%", name, progress);
                }
            }

            let distribution = scoring::category_distribution(&result);
            if !distribution.is_empty() {
                println!("\nEarned by category:");
                for category in BadgeCategory::ALL {
                    if let Some(count) = distribution.get(&category) {
                        println!("  {}: {}", category.display_name(), count);
                    }
                }
            }
        }

        Commands::Suggest {
            role,
            seed,
            stats_file,
            limit,
        } => {
            let source = build_source(&role, seed, stats_file)?;
            let stats = source.fetch_snapshot()?;
            let limit = limit.unwrap_or(settings.suggestions.default_limit);
            let suggestions = calculator.suggest_badges(&stats, limit);

            println!("\n=== Badge Suggestions ===");
            println!("Source: {}", source.describe());

            if suggestions.is_empty() {
                println!("\nNothing above 50% progress yet - keep playing!");
            }

            for (index, suggestion) in suggestions.iter().enumerate() {
                println!(
                    "\n{}. {} ({:.1}% there)",
                    index + 1,
                    suggestion.badge.name,
                    suggestion.progress
                );
                for requirement in &suggestion.missing_requirements {
                    match stats.get(requirement.metric) {
                        Some(value) => println!("   needs {} (now {:.1})", requirement, value),
                        None => println!("   needs {} (no data)", requirement),
                    }
                }
            }
        }

        Commands::Tiers {
            badge_id,
            role,
            seed,
            stats_file,
        } => {
            let base = calculator.catalog().require(&badge_id)?.clone();
            let source = build_source(&role, seed, stats_file)?;
            let stats = source.fetch_snapshot()?;

            println!("\n=== Tier Ladder: {} ===", base.name);
            println!("Source: {}", source.describe());
            println!();

            for tiered in scoring::project_tiers(&base) {
                let outcome = scoring::evaluate_badge(&tiered, &stats);
                let marker = if outcome.is_earned { "earned" } else { "------" };
                println!(
                    "  {:<9} {} {:>6.1}%",
                    tiered.tier.as_str(),
                    marker,
                    outcome.progress
                );
            }

            match calculator.highest_earned_tier(&badge_id, &stats) {
                Some(tier) => println!("\nHighest earned tier: {}", tier.as_str()),
                None => println!("\nNo tier earned yet"),
            }
        }

        Commands::Catalog { category, json } => {
            let filter = match category.as_deref() {
                Some(raw) => Some(
                    BadgeCategory::from_str(raw)
                        .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", raw))?,
                ),
                None => None,
            };

            let badges: Vec<_> = match filter {
                Some(category) => calculator.catalog().by_category(category),
                None => calculator.catalog().iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&badges)?);
                return Ok(());
            }

            println!("\n=== Badge Catalog ({} badges) ===", badges.len());
            for badge in badges {
                println!(
                    "\n{} - {} [{}]",
                    badge.id,
                    badge.name,
                    badge.category.display_name()
                );
                println!("   {}", badge.description);
                for requirement in &badge.requirements {
                    println!("   • {}", requirement);
                }
            }
        }
    }

    Ok(())
}
