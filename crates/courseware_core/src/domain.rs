//! crates/courseware_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or serialization format.

/// The resolved identity of the visitor for one request.
///
/// The auth backend can mint sessions that carry no user identifier, and
/// those still count as signed in.
#[derive(Debug, Clone)]
pub struct VisitorSession {
    pub user_id: Option<String>,
}

impl VisitorSession {
    /// The key used to scope purchase and progress lookups.
    ///
    /// Sessions without a user identifier fall back to the empty string,
    /// which matches no stored row.
    pub fn lookup_key(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }
}

/// A course as shown on its info page, together with its published chapters.
#[derive(Debug, Clone, Default)]
pub struct Course {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Extended marketing copy ("What will I build?").
    pub description_long: Option<String>,
    pub learning_outcome: Option<String>,
    pub included: Option<String>,
    pub difficulty: Option<String>,
    pub intro_video: Option<String>,
    /// Absent or zero means the course is free.
    pub price: Option<f64>,
    /// Published chapters only, ordered by position ascending.
    pub chapters: Vec<Chapter>,
}

/// A single chapter of a course, annotated with the visitor's progress.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub position: i32,
    pub progress: Option<ChapterProgress>,
}

/// One user's progress through one chapter.
#[derive(Debug, Clone)]
pub struct ChapterProgress {
    pub is_completed: bool,
}

// A purchase is keyed by (user, course); its existence alone signals
// entitlement.
#[derive(Debug, Clone)]
pub struct Purchase {
    pub user_id: String,
    pub course_id: String,
}
