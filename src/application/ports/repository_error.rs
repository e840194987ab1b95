/// Failure of a document or category repository, independent of the backend.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database unavailable: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// A stored row could not be mapped back to a domain value.
    #[error("invalid stored row: {0}")]
    InvalidRow(String),
}
