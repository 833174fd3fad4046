use super::*;

use crate::web::pages::CourseInfoView;
use courseware_core::domain::{Chapter, Course};

fn chapter(id: &str, title: &str, position: i32) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(format!("About {}", title)),
        position,
        progress: None,
    }
}

fn course_with(price: Option<f64>, chapters: Vec<Chapter>) -> Course {
    Course {
        id: "crs_1".to_string(),
        title: Some("Systems Programming".to_string()),
        description: Some("Learn to build real systems.".to_string()),
        description_long: Some("A storage engine, from scratch.".to_string()),
        learning_outcome: Some("Memory, concurrency, tooling.".to_string()),
        included: Some("Source code and exercises.".to_string()),
        difficulty: Some("Intermediate".to_string()),
        intro_video: Some("https://player.example.com/v/abc".to_string()),
        price,
        chapters,
    }
}

fn page(course: Option<Course>) -> String {
    render_course_info(&CourseInfoView {
        course,
        purchased: false,
    })
}

#[test]
fn free_message_when_price_is_absent() {
    let html = page(Some(course_with(None, vec![])));
    assert!(html.contains("This course is free!"));
    assert!(!html.contains("Purchase course for $"));
}

#[test]
fn free_message_when_price_is_zero() {
    let html = page(Some(course_with(Some(0.0), vec![])));
    assert!(html.contains("This course is free!"));
    assert!(!html.contains("Purchase course for $"));
}

#[test]
fn priced_course_shows_the_literal_price() {
    let html = page(Some(course_with(Some(25.0), vec![])));
    assert!(html.contains("Purchase course for $25<"));
    assert!(!html.contains("This course is free!"));
}

#[test]
fn fractional_price_keeps_its_fraction() {
    let html = page(Some(course_with(Some(19.5), vec![])));
    assert!(html.contains("Purchase course for $19.5<"));
}

#[test]
fn chapter_labels_zero_pad_below_ten() {
    assert_eq!(chapter_index_label(1), "01");
    assert_eq!(chapter_index_label(9), "09");
    assert_eq!(chapter_index_label(10), "10");
    assert_eq!(chapter_index_label(11), "11");
}

#[test]
fn chapters_render_in_stored_order_with_padded_labels() {
    let chapters = (1..=10)
        .map(|i| chapter(&format!("ch_{}", i), &format!("Part {}", i), i))
        .collect();
    let html = page(Some(course_with(None, chapters)));

    assert!(html.contains("<span class=\"chapter-index\">01</span> Part 1<"));
    assert!(html.contains("<span class=\"chapter-index\">09</span> Part 9<"));
    assert!(html.contains("<span class=\"chapter-index\">10</span> Part 10<"));

    let first = html.find("Part 1<").expect("first chapter");
    let fifth = html.find("Part 5<").expect("fifth chapter");
    let tenth = html.find("Part 10<").expect("tenth chapter");
    assert!(first < fifth && fifth < tenth);
}

#[test]
fn chapter_links_compose_course_and_chapter_ids() {
    let html = page(Some(course_with(None, vec![chapter("ch_2", "Allocators", 1)])));
    assert!(html.contains("href=\"/course/crs_1/chapter/ch_2\""));
}

#[test]
fn header_renders_title_video_and_course_link() {
    let html = page(Some(course_with(None, vec![])));
    assert!(html.contains("<h1>Systems Programming</h1>"));
    assert!(html.contains("<p class=\"description\">Learn to build real systems.</p>"));
    assert!(html.contains("src=\"https://player.example.com/v/abc\""));
    assert!(html.contains("href=\"/course/crs_1\">Go To Course</a>"));
}

#[test]
fn renders_all_info_sections() {
    let html = page(Some(course_with(None, vec![])));
    assert!(html.contains("What will I build?"));
    assert!(html.contains("A storage engine, from scratch."));
    assert!(html.contains("What will I learn?"));
    assert!(html.contains("Memory, concurrency, tooling."));
    assert!(html.contains("What's included?"));
    assert!(html.contains("Source code and exercises."));
    assert!(html.contains("Difficulty level"));
    assert!(html.contains("Intermediate"));
}

#[test]
fn escapes_untrusted_field_text() {
    let mut course = course_with(None, vec![]);
    course.title = Some("Rust <Fast & Furious>".to_string());
    let html = page(Some(course));

    assert!(html.contains("Rust &lt;Fast &amp; Furious&gt;"));
    assert!(!html.contains("<Fast"));
}

#[test]
fn missing_course_renders_an_empty_skeleton() {
    let html = page(None);
    assert!(html.contains("<h1></h1>"));
    assert!(html.contains("href=\"/course/\""));
    // No price means the free message, matching the source page.
    assert!(html.contains("This course is free!"));
    assert!(!html.contains("chapter-card"));
}
