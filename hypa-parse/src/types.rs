use serde::{Deserialize, Serialize};

/// A parsed hypa document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypaDoc {
    /// Ordered sequence of blocks, in input line order.
    pub blocks: Vec<Block>,
}

/// A single content block.
///
/// Blocks are append-only: once parsing completes the sequence is immutable.
/// The only in-place update the parser ever performs is setting a `Link`
/// label on the most recently pushed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// A `@ url` line, optionally labeled by a following `? label` line.
    Link {
        url: String,
        /// Visible text for the anchor. `None` and `Some("")` both render
        /// as the url.
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// A plain paragraph: the trimmed line, verbatim.
    Text { content: String },
}
