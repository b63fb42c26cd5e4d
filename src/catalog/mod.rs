pub mod definitions;

use std::collections::HashSet;

use crate::models::{BadgeCategory, BadgeDefinition, BadgeEngineError, Result};

pub use definitions::builtin_badges;

/// An ordered, validated collection of badge definitions. Construction
/// rejects duplicate ids and empty requirement lists so evaluation never has
/// to handle a malformed badge.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<BadgeDefinition>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(badges.len());
        for badge in &badges {
            if badge.requirements.is_empty() {
                return Err(BadgeEngineError::EmptyRequirements(badge.id.clone()));
            }
            if !seen.insert(badge.id.as_str()) {
                return Err(BadgeEngineError::DuplicateBadgeId(badge.id.clone()));
            }
        }
        Ok(Self { badges })
    }

    /// The catalog shipped with the engine.
    pub fn builtin() -> Self {
        Self::new(definitions::builtin_badges()).expect("builtin badge catalog is valid")
    }

    pub fn badges(&self) -> &[BadgeDefinition] {
        &self.badges
    }

    pub fn iter(&self) -> impl Iterator<Item = &BadgeDefinition> {
        self.badges.iter()
    }

    pub fn get(&self, badge_id: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|b| b.id == badge_id)
    }

    pub fn require(&self, badge_id: &str) -> Result<&BadgeDefinition> {
        self.get(badge_id)
            .ok_or_else(|| BadgeEngineError::UnknownBadgeId(badge_id.to_string()))
    }

    pub fn by_category(&self, category: BadgeCategory) -> Vec<&BadgeDefinition> {
        self.badges.iter().filter(|b| b.category == category).collect()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
