use thiserror::Error;

/// Errors surfaced to driver code. Ordinary tree failure is a [`BtStatus`](crate::BtStatus),
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no user action labelled {0:?} is currently available")]
    UnknownUserAction(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
