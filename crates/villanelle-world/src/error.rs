use thiserror::Error;

/// Pathfinding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("no path from {start} to {destination}")]
    Unreachable { start: String, destination: String },
}

pub type Result<T> = std::result::Result<T, NavError>;
