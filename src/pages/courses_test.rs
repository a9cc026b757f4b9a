use super::*;

fn course(title: &str, description: &str) -> Course {
    Course {
        id: "c-1".to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        course_type: "certification".to_owned(),
        thumbnail: None,
        price: 499.0,
        credit_hours: 12,
        duration_months: 3,
        instructor_id: None,
        is_published: true,
        modules: Vec::new(),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        enrolled_count: 0,
    }
}

// =============================================================
// Endpoint path building
// =============================================================

#[test]
fn catalog_path_without_filters() {
    assert_eq!(catalog_path("all", ""), "/courses");
    assert_eq!(catalog_path("", "   "), "/courses");
}

#[test]
fn catalog_path_with_type_filter() {
    assert_eq!(catalog_path("diploma", ""), "/courses?course_type=diploma");
}

#[test]
fn catalog_path_with_both_filters_encodes_search() {
    assert_eq!(
        catalog_path("bachelor", "data engineering"),
        "/courses?course_type=bachelor&search=data%20engineering"
    );
}

#[test]
fn encode_component_keeps_unreserved_bytes() {
    assert_eq!(encode_component("rust-1.0_x~y"), "rust-1.0_x~y");
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
}

// =============================================================
// Client-side narrowing
// =============================================================

#[test]
fn matches_search_is_case_insensitive() {
    let c = course("Rust Foundations", "Ownership and onward");
    assert!(matches_search(&c, "rust"));
    assert!(matches_search(&c, "OWNERSHIP"));
}

#[test]
fn matches_search_empty_query_matches_all() {
    let c = course("Rust Foundations", "Ownership and onward");
    assert!(matches_search(&c, ""));
    assert!(matches_search(&c, "   "));
}

#[test]
fn matches_search_misses_unrelated_query() {
    let c = course("Rust Foundations", "Ownership and onward");
    assert!(!matches_search(&c, "kubernetes"));
}
