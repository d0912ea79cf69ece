//! HTML renderer.
//!
//! Maps each block to a markup fragment and wraps the concatenation in a
//! minimal page shell with inlined CSS. Content is emitted verbatim: hypa
//! performs no HTML escaping, so feeding it untrusted input is on the caller.

use crate::types::{Block, HypaDoc};

/// Title used when the caller supplies none.
pub const DEFAULT_TITLE: &str = "Some hypertext";

/// Configuration for full-page HTML rendering.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    /// Page title. Falls back to [`DEFAULT_TITLE`].
    pub title: Option<String>,
    /// Language code for the `<html>` element (default: "en").
    pub lang: Option<String>,
}

/// Render a [`HypaDoc`] as an HTML fragment.
///
/// Fragments are concatenated with no separator; no `<html>`, `<head>`, or
/// `<body>` wrapper is added.
pub fn to_html(doc: &HypaDoc) -> String {
    doc.blocks.iter().map(render_block).collect()
}

/// Render a [`HypaDoc`] as a complete HTML page.
///
/// Produces a full `<!DOCTYPE html>` document with charset and viewport meta
/// tags, the configured title, and the embedded stylesheet inlined in a
/// `<style>` element. The rendered blocks land inside `<main>`.
pub fn to_html_page(doc: &HypaDoc, config: &PageConfig) -> String {
    let body = to_html(doc);
    let lang = config.lang.as_deref().unwrap_or("en");
    let title = config.title.as_deref().unwrap_or(DEFAULT_TITLE);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
<main>{body}</main>
</body>
</html>"#,
        css = HYPA_CSS,
    )
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Link { url, label } => {
            // An absent label and an empty one both fall back to the url.
            let visible = match label.as_deref() {
                Some(l) if !l.is_empty() => l,
                _ => url.as_str(),
            };
            format!("<div><a href=\"{url}\">{visible}</a></div>")
        }
        Block::Text { content } => format!("<p>{content}</p>"),
    }
}

/// Embedded CSS for standalone hypa pages.
const HYPA_CSS: &str = r#"
:root {
    --bg: #fdfdfb;
    --text: #1c1c1c;
    --accent: #0b57d0;
}

*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { background: var(--bg); color: var(--text); font-family: Georgia, "Times New Roman", serif; }

main { max-width: 38rem; margin: 0 auto; padding: 2.5rem 1.25rem 4rem; line-height: 1.6; }
main p { margin: 0.75rem 0; }
main div { margin: 0.75rem 0; }
main a { color: var(--accent); text-decoration: none; border-bottom: 1px solid currentColor; }
main a:hover { border-bottom-width: 2px; }
"#;
