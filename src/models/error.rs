use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeEngineError {
    #[error("Badge '{0}' has an empty requirement list")]
    EmptyRequirements(String),

    #[error("Duplicate badge id '{0}' in catalog")]
    DuplicateBadgeId(String),

    #[error("Unknown badge id: {0}")]
    UnknownBadgeId(String),

    #[error("Failed to read stats snapshot: {0}")]
    SnapshotIo(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BadgeEngineError>;
