//! Post body rendering.

use comrak::{Options, markdown_to_html as render};

/// Render a post body to HTML safe for `inner_html`.
///
/// GFM strikethrough, tables and footnotes are enabled; the result is
/// passed through `ammonia`, which drops scripts, event handlers and other
/// active content.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.footnotes = true;

    ammonia::clean(&render(markdown, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_tables() {
        let html = markdown_to_html("# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("hello"));
    }
}
