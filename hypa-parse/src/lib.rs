//! `hypa-parse` — parser for the hypa plaintext hypertext format.
//!
//! hypa is a line-oriented markup: every line is classified on its own as a
//! link (`@ url`, optionally labeled by a `? label` line immediately after),
//! a comment (`# ...` for one line, `###` fencing a multi-line block), a
//! blank separator, or plain text. This crate turns hypa source into an
//! ordered [`HypaDoc`] block sequence and renders it as HTML.
//!
//! # Quick start
//!
//! ```
//! let doc = hypa_parse::parse("@ https://example.com\n? Example\n").unwrap();
//! assert_eq!(doc.blocks.len(), 1);
//! let html = doc.to_html();
//! assert!(html.contains("<a href=\"https://example.com\">Example</a>"));
//! ```

pub mod error;
pub mod parse;
pub mod render_html;
pub mod types;

pub use error::*;
pub use parse::parse;
pub use types::*;

pub use render_html::PageConfig;

impl HypaDoc {
    /// Render this document as an HTML fragment (no page shell).
    pub fn to_html(&self) -> String {
        render_html::to_html(self)
    }

    /// Render this document as a complete HTML page with inlined CSS.
    pub fn to_html_page(&self, config: &PageConfig) -> String {
        render_html::to_html_page(self, config)
    }

    /// Serialize the block sequence as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.blocks)
    }
}
