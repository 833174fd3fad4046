//! services/api/src/web/pages.rs
//!
//! Contains the Axum handler for the course info page and the master
//! definition for the OpenAPI specification.

use crate::web::render::render_course_info;
use crate::web::session::resolve_visitor;
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use courseware_core::domain::Course;
use courseware_core::ports::PortResult;
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        course_info_handler,
    ),
    tags(
        (name = "Courseware", description = "Server-rendered course pages.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Page View Model
//=========================================================================================

/// Everything the renderer needs for one course info page.
///
/// Both fetches may come back empty: a missing course renders the page
/// skeleton with empty fields, and a missing purchase means the viewer has
/// not bought the course yet.
#[derive(Debug, Clone)]
pub struct CourseInfoView {
    pub course: Option<Course>,
    pub purchased: bool,
}

/// The controller's decision for one request.
#[derive(Debug)]
pub enum PageOutcome {
    /// The visitor has no session; send them to the site root.
    RedirectToRoot,
    /// Render the info page from the fetched data.
    Page(CourseInfoView),
}

//=========================================================================================
// Page Controller
//=========================================================================================

/// Loads everything the course info page needs.
///
/// The session gate runs first and short-circuits: an unauthenticated
/// request performs no catalog reads. Both catalog lookups are scoped by
/// the session's user key (the empty string for sessions without a user
/// identifier). Missing rows are normal outcomes; only infrastructure
/// failures surface as `Err`.
pub async fn load_course_info(
    state: &AppState,
    course_id: &str,
    headers: &HeaderMap,
) -> PortResult<PageOutcome> {
    let Some(session) = resolve_visitor(state.sessions.as_ref(), headers).await? else {
        return Ok(PageOutcome::RedirectToRoot);
    };

    let course = state
        .catalog
        .find_course_with_chapters(course_id, session.lookup_key())
        .await?;
    let purchase = state
        .catalog
        .find_purchase(session.lookup_key(), course_id)
        .await?;

    Ok(PageOutcome::Page(CourseInfoView {
        course,
        purchased: purchase.is_some(),
    }))
}

/// GET /courses/{course_id}/info - The course landing page.
#[utoipa::path(
    get,
    path = "/courses/{course_id}/info",
    responses(
        (status = 200, description = "The rendered course info page", body = String, content_type = "text/html"),
        (status = 303, description = "Unauthenticated visitors are redirected to the site root"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("course_id" = String, Path, description = "The course identifier from the route.")
    )
)]
pub async fn course_info_handler(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let outcome = load_course_info(&state, &course_id, &headers)
        .await
        .map_err(|e| {
            error!("Failed to load course info page: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load page".to_string(),
            )
        })?;

    match outcome {
        PageOutcome::RedirectToRoot => Ok(Redirect::to("/").into_response()),
        PageOutcome::Page(view) => Ok(Html(render_course_info(&view)).into_response()),
    }
}

#[cfg(test)]
#[path = "tests/pages_tests.rs"]
mod tests;
