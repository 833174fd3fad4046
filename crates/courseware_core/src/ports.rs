//! crates/courseware_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases.

use async_trait::async_trait;

use crate::domain::{Course, Purchase, VisitorSession};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolves a session token (taken from the visitor's cookie) to a live
    /// session, or `None` when the token is unknown or expired.
    async fn resolve(&self, token: &str) -> PortResult<Option<VisitorSession>>;
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetches a course with its published chapters in ascending position
    /// order, each annotated with the progress of `user_id`. The empty
    /// string is a valid key that matches no progress rows.
    ///
    /// A missing course is a normal outcome, not an error.
    async fn find_course_with_chapters(
        &self,
        course_id: &str,
        user_id: &str,
    ) -> PortResult<Option<Course>>;

    /// Fetches the purchase keyed by (`user_id`, `course_id`), if any.
    async fn find_purchase(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> PortResult<Option<Purchase>>;
}
