use super::*;

#[test]
fn renders_bold_and_emphasis() {
    let html = render_markdown_html("**brave** and *kind*");
    assert!(html.contains("<strong>brave</strong>"));
    assert!(html.contains("<em>kind</em>"));
}

#[test]
fn single_newlines_become_line_breaks() {
    let html = render_markdown_html("first\nsecond");
    assert!(html.contains("<br />"));
}

#[test]
fn raw_html_is_stripped() {
    let html = render_markdown_html("hi <script>alert(1)</script>");
    assert!(!html.contains("<script>"));
}
