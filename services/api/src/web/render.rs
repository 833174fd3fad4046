//! services/api/src/web/render.rs
//!
//! Pure HTML rendering for the course info page. No I/O happens here:
//! everything the page needs arrives in the assembled view, and absent
//! fields render as empty text.

use crate::web::pages::CourseInfoView;
use courseware_core::domain::Chapter;

/// Escapes text for interpolation into HTML body or attribute positions.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes an optional field, rendering missing text as empty.
fn text(field: Option<&str>) -> String {
    escape_html(field.unwrap_or(""))
}

/// Formats a 1-based chapter index, zero-padded to two digits below ten
/// ("01", "02", ..., "09", "10", "11", ...).
pub fn chapter_index_label(index: usize) -> String {
    format!("{:02}", index)
}

fn info_section(heading: &str, body: &str) -> String {
    format!(
        "<section class=\"info-section\">\n<h2>{}</h2>\n<p>{}</p>\n</section>\n",
        heading, body
    )
}

/// The purchase call-to-action. An absent or zero price means the course
/// is free.
fn purchase_section(price: Option<f64>) -> String {
    match price.filter(|p| *p != 0.0) {
        None => "<p>This course is free!</p>\n".to_string(),
        Some(price) => format!(
            "<button class=\"purchase-button\">Purchase course for ${}</button>\n",
            price
        ),
    }
}

fn chapter_card(course_id: &str, index: usize, chapter: &Chapter) -> String {
    format!(
        "<a class=\"chapter-card\" href=\"/course/{}/chapter/{}\">\n\
         <h3><span class=\"chapter-index\">{}</span> {}</h3>\n<p>{}</p>\n</a>\n",
        escape_html(course_id),
        escape_html(&chapter.id),
        chapter_index_label(index),
        escape_html(&chapter.title),
        text(chapter.description.as_deref()),
    )
}

/// Renders the complete course info page.
pub fn render_course_info(view: &CourseInfoView) -> String {
    let course = view.course.as_ref();
    let course_id = course.map_or("", |c| c.id.as_str());

    let title = text(course.and_then(|c| c.title.as_deref()));
    let description = text(course.and_then(|c| c.description.as_deref()));
    let intro_video = text(course.and_then(|c| c.intro_video.as_deref()));

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n</head>\n<body class=\"landing\">\n", title));

    // Header: title, short description, intro video, primary navigation.
    page.push_str("<header>\n");
    page.push_str(&format!("<h1>{}</h1>\n", title));
    page.push_str(&format!("<p class=\"description\">{}</p>\n", description));
    page.push_str(&format!(
        "<iframe src=\"{}\" title=\"Video\" \
         allow=\"autoplay; fullscreen; picture-in-picture; clipboard-write\"></iframe>\n",
        intro_video
    ));
    page.push_str(&format!(
        "<a class=\"go-to-course\" href=\"/course/{}\">Go To Course</a>\n",
        escape_html(course_id)
    ));
    page.push_str("</header>\n");

    page.push_str(&info_section(
        "What will I build?",
        &text(course.and_then(|c| c.description_long.as_deref())),
    ));
    page.push_str(&info_section(
        "What will I learn?",
        &text(course.and_then(|c| c.learning_outcome.as_deref())),
    ));
    page.push_str(&info_section(
        "What's included?",
        &text(course.and_then(|c| c.included.as_deref())),
    ));
    page.push_str(&info_section(
        "Difficulty level",
        &text(course.and_then(|c| c.difficulty.as_deref())),
    ));

    page.push_str("<section class=\"purchase\">\n<h2>Purchase course</h2>\n");
    page.push_str(&purchase_section(course.and_then(|c| c.price)));
    page.push_str("</section>\n");

    // Chapters arrive pre-filtered to published and pre-sorted by position;
    // render them exactly in stored order.
    page.push_str("<section class=\"chapters\">\n<h2>Chapters</h2>\n<div class=\"chapters-grid\">\n");
    if let Some(course) = course {
        for (i, chapter) in course.chapters.iter().enumerate() {
            page.push_str(&chapter_card(course_id, i + 1, chapter));
        }
    }
    page.push_str("</div>\n</section>\n</body>\n</html>\n");

    page
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
