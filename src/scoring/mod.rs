pub mod analytics;
pub mod calculator;
pub mod evaluator;
pub mod suggestions;
pub mod tiers;

pub use analytics::{category_distribution, completion_percentage};
pub use calculator::BadgeCalculator;
pub use evaluator::{evaluate_badge, evaluate_requirement};
pub use suggestions::{suggest_badges, DEFAULT_SUGGESTION_LIMIT};
pub use tiers::{highest_earned_tier, project_tiers};
