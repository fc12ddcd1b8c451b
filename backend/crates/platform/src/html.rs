//! HTML Rendering
//!
//! Views are askama templates; `.html` templates escape every interpolated
//! value unless a template explicitly opts out with `|safe`.

use askama::Template;
use axum::response::Html;

/// Render a template into an HTML response body
pub fn render<T: Template>(template: &T) -> Result<Html<String>, askama::Error> {
    template.render().map(Html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Template)]
    #[template(source = "<li>{{ text }}</li>", ext = "html")]
    struct ItemTemplate {
        text: String,
    }

    #[test]
    fn test_render_escapes_markup() {
        let html = render(&ItemTemplate {
            text: "<script>alert('x')</script>".to_string(),
        })
        .unwrap();

        assert!(!html.0.contains("<script>"));
        assert!(html.0.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_plain_text_unchanged() {
        let html = render(&ItemTemplate {
            text: "hello".to_string(),
        })
        .unwrap();

        assert_eq!(html.0, "<li>hello</li>");
    }
}
