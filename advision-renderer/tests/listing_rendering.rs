//! Listing rendering: card structure, ordering, escaping and empty state.

use chrono::NaiveDate;
use rstest::rstest;

use advision_core::{sample::seed_projects, Project, ProjectId, ProjectRegistry, ProjectStatus};
use advision_renderer::{ListingContext, ListingFormat, Renderer};

fn renderer() -> Renderer {
    Renderer::new().expect("renderer")
}

fn hostile_project() -> Project {
    Project {
        id: ProjectId(42),
        name: "<script>alert('x')</script>".to_string(),
        client: "Tom & Jerry".to_string(),
        budget: "$1".to_string(),
        duration: "1 day".to_string(),
        status: ProjectStatus::Active,
        progress: 50,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        description: String::new(),
    }
}

#[test]
fn html_has_one_card_per_project() {
    let html = renderer()
        .render(&seed_projects(), ListingFormat::Html)
        .expect("render");
    assert_eq!(html.matches("class=\"project-card\"").count(), 4);
    assert!(html.contains("data-project-id=\"3\""));
    assert!(html.contains("<span class=\"project-status completed\">Completed</span>"));
    assert!(html.contains("style=\"width: 65%\""), "progress bar width from progress");
}

#[test]
fn html_keeps_snapshot_order() {
    let reg = ProjectRegistry::seeded();
    let active = reg.query("", Some(ProjectStatus::Active));
    let html = renderer().render(&active, ListingFormat::Html).expect("render");
    let summer = html.find("Summer Fashion Campaign").expect("summer");
    let brand = html.find("Brand Awareness Drive").expect("brand");
    assert!(summer < brand);
    assert!(!html.contains("Tech Product Launch"));
}

#[test]
fn html_escapes_user_text() {
    let html = renderer()
        .render(&[hostile_project()], ListingFormat::Html)
        .expect("render");
    assert!(!html.contains("<script>"), "markup must be escaped: {html}");
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Tom &amp; Jerry"));
}

#[rstest]
#[case(ListingFormat::Html, "No projects match the current filters.")]
#[case(ListingFormat::Markdown, "_No projects match the current filters._")]
#[case(ListingFormat::Json, "[]")]
fn empty_listing_renders_empty_state(#[case] format: ListingFormat, #[case] expected: &str) {
    let out = renderer().render(&[], format).expect("render");
    assert!(out.contains(expected), "{format} got: {out}");
}

#[test]
fn markdown_has_header_and_rows() {
    let md = renderer()
        .render(&seed_projects(), ListingFormat::Markdown)
        .expect("render");
    assert!(md.starts_with("# Projects (4)"));
    assert!(md.contains("| 2 | Tech Product Launch | InnovateTech | Planning | $50,000 | 4 months | 25% |"));
    assert!(md.contains("2024-11-01 → 2024-12-31"));
}

#[test]
fn markdown_cells_escape_pipes_and_newlines() {
    let mut project = hostile_project();
    project.name = "A | B".to_string();
    project.client = "Line one\nline two".to_string();
    let md = renderer()
        .render(&[project], ListingFormat::Markdown)
        .expect("render");
    let row = md
        .lines()
        .find(|line| line.starts_with("| 42 |"))
        .expect("project row");
    assert!(row.contains(r"| A \| B | Line one line two |"), "row: {row}");
    assert_eq!(row.matches(" | ").count() + 2, 10, "row keeps nine cells: {row}");
}

#[test]
fn json_is_valid_and_ordered() {
    let json = renderer()
        .render(&seed_projects(), ListingFormat::Json)
        .expect("render");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let names: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(
        names,
        ["Summer Fashion Campaign", "Tech Product Launch", "Holiday Sale Promotion", "Brand Awareness Drive"]
    );
}

#[test]
fn render_with_context_matches_render() {
    let r = renderer();
    let projects = seed_projects();
    let ctx = ListingContext::from_projects(&projects);
    assert_eq!(
        r.render_with_context(&ctx, ListingFormat::Markdown).unwrap(),
        r.render(&projects, ListingFormat::Markdown).unwrap()
    );
}
