//! Errors from circulation operations

use uuid::Uuid;

/// Error from a circulation operation.
///
/// Everything here is local and recoverable; catalog and search calls never
/// fail, they only return empty results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CircError {
    #[error("copy not found: {0}")]
    CopyNotFound(String),

    #[error("book not found: {0}")]
    BookNotFound(String),

    #[error("member not found: {0}")]
    MemberNotFound(String),

    #[error("reservation not found: {0}")]
    ReservationNotFound(Uuid),

    /// An operation precondition was violated; no state was changed.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The member's account standing forbids the operation.
    #[error("not permitted: {0}")]
    NotPermitted(String),
}
