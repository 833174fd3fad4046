//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `CatalogStore` and `SessionProvider` ports from the `core` crate. It
//! handles all interactions with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use courseware_core::domain::{Chapter, ChapterProgress, Course, Purchase, VisitorSession};
use courseware_core::ports::{CatalogStore, PortError, PortResult, SessionProvider};
use sqlx::{FromRow, PgPool};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the catalog and session ports.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct CourseRecord {
    id: String,
    title: Option<String>,
    description: Option<String>,
    description_long: Option<String>,
    learning_outcome: Option<String>,
    included: Option<String>,
    difficulty: Option<String>,
    intro_video: Option<String>,
    price: Option<f64>,
}
impl CourseRecord {
    fn to_domain(self, chapters: Vec<Chapter>) -> Course {
        Course {
            id: self.id,
            title: self.title,
            description: self.description,
            description_long: self.description_long,
            learning_outcome: self.learning_outcome,
            included: self.included,
            difficulty: self.difficulty,
            intro_video: self.intro_video,
            price: self.price,
            chapters,
        }
    }
}

#[derive(FromRow)]
struct ChapterRecord {
    id: String,
    title: String,
    description: Option<String>,
    position: i32,
    // NULL when the joined progress row does not exist for this user.
    is_completed: Option<bool>,
}
impl ChapterRecord {
    fn to_domain(self) -> Chapter {
        Chapter {
            id: self.id,
            title: self.title,
            description: self.description,
            position: self.position,
            progress: self
                .is_completed
                .map(|is_completed| ChapterProgress { is_completed }),
        }
    }
}

#[derive(FromRow)]
struct PurchaseRecord {
    user_id: String,
    course_id: String,
}
impl PurchaseRecord {
    fn to_domain(self) -> Purchase {
        Purchase {
            user_id: self.user_id,
            course_id: self.course_id,
        }
    }
}

#[derive(FromRow)]
struct AuthSessionRecord {
    user_id: Option<String>,
    expires_at: DateTime<Utc>,
}

//=========================================================================================
// `CatalogStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl CatalogStore for DbAdapter {
    async fn find_course_with_chapters(
        &self,
        course_id: &str,
        user_id: &str,
    ) -> PortResult<Option<Course>> {
        let course = sqlx::query_as::<_, CourseRecord>(
            "SELECT id, title, description, description_long, learning_outcome, \
             included, difficulty, intro_video, price \
             FROM courses WHERE id = $1",
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let Some(course) = course else {
            return Ok(None);
        };

        // The renderer relies on this query doing the filtering and the
        // ordering: published chapters only, position ascending.
        let chapters = sqlx::query_as::<_, ChapterRecord>(
            "SELECT c.id, c.title, c.description, c.position, p.is_completed \
             FROM chapters c \
             LEFT JOIN user_progress p ON p.chapter_id = c.id AND p.user_id = $2 \
             WHERE c.course_id = $1 AND c.is_published = TRUE \
             ORDER BY c.position ASC",
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(Some(
            course.to_domain(chapters.into_iter().map(|r| r.to_domain()).collect()),
        ))
    }

    async fn find_purchase(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> PortResult<Option<Purchase>> {
        let record = sqlx::query_as::<_, PurchaseRecord>(
            "SELECT user_id, course_id FROM purchases WHERE user_id = $1 AND course_id = $2",
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        Ok(record.map(|r| r.to_domain()))
    }
}

//=========================================================================================
// `SessionProvider` Trait Implementation
//=========================================================================================

#[async_trait]
impl SessionProvider for DbAdapter {
    async fn resolve(&self, token: &str) -> PortResult<Option<VisitorSession>> {
        let record = sqlx::query_as::<_, AuthSessionRecord>(
            "SELECT user_id, expires_at FROM auth_sessions WHERE id = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let Some(record) = record else {
            return Ok(None);
        };
        if record.expires_at <= Utc::now() {
            return Ok(None);
        }

        Ok(Some(VisitorSession {
            user_id: record.user_id,
        }))
    }
}
