use super::*;

#[test]
fn markdown_renders_basic_formatting() {
    let out = render_markdown_html("**bold** and `code`");
    assert!(out.contains("<strong>bold</strong>"));
    assert!(out.contains("<code>code</code>"));
}

#[test]
fn markdown_strips_raw_html() {
    let out = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hello"));
}

#[test]
fn markdown_renders_tables() {
    let out = render_markdown_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(out.contains("<table>"));
}

#[test]
fn apology_matches_displayed_copy() {
    assert_eq!(APOLOGY, "Sorry, I encountered an error. Please try again.");
}
