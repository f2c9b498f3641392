use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised at the crate boundary.
///
/// Board operations themselves never fail: a lookup that misses is a no-op.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid event payload: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error("Board runtime has shut down")]
    RuntimeClosed,
}
