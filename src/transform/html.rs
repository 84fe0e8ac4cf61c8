use crate::models::Span;

pub const STYLE_OPEN: &str = "<style>";
pub const STYLE_CLOSE: &str = "</style>";
pub const SCRIPT_OPEN: &str = "<script>";
pub const SCRIPT_CLOSE: &str = "</script>";
pub const HEAD_CLOSE: &str = "</head>";
pub const BODY_OPEN: &str = "<body>";

/// Replacement for the inline `<style>` block, and the marker the cleaner looks for.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="/css/styles.css">"#;
/// Replacement for the inline main `<script>` block.
pub const APP_SCRIPT: &str = r#"<script src="/js/app.js"></script>"#;

/// First occurrence of `needle` at or after byte `from`.
pub(super) fn find_from(html: &str, needle: &str, from: usize) -> Option<usize> {
    html.get(from..)?.find(needle).map(|i| from + i)
}

/// Span of the first `open` and the nearest `close` after it, tags included.
pub(super) fn first_block(html: &str, open: &str, close: &str) -> Option<Span> {
    let start = html.find(open)?;
    let end = find_from(html, close, start + open.len())?;
    Some(Span::new(start, end + close.len()))
}

/// Span from the first `<script>` at or after `origin` through the *last*
/// `</script>` in the document. Everything in between collapses into one block.
pub(super) fn main_script(html: &str, origin: usize) -> Option<Span> {
    let start = find_from(html, SCRIPT_OPEN, origin)?;
    let end = html.rfind(SCRIPT_CLOSE)?;
    if end < start + SCRIPT_OPEN.len() {
        return None;
    }
    Some(Span::new(start, end + SCRIPT_CLOSE.len()))
}

/// Text strictly between the delimiters of `span`.
pub(super) fn inner<'a>(html: &'a str, span: Span, open: &str, close: &str) -> &'a str {
    &html[span.start + open.len()..span.end - close.len()]
}

/// Apply non-overlapping replacements, back to front so earlier offsets stay valid.
pub(super) fn splice(html: &str, mut edits: Vec<(Span, &str)>) -> String {
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    let mut out = html.to_string();
    for (span, replacement) in edits {
        out.replace_range(span.start..span.end, replacement);
    }
    out
}
