//! The line classifier.
//!
//! hypa is classified one line at a time by a three-state machine:
//!
//! - `Normal` — `@ url` opens a link, `#` discards a comment line, `###`
//!   opens a comment fence, a blank line is a separator, anything else is a
//!   text paragraph.
//! - `AwaitingLabel` — the previous line opened a link; a `? label` line
//!   labels it, any other line falls back to `Normal` classification.
//! - `InComment` — every line is discarded until a closing `###`.
//!
//! Exactly one state holds at a time, and the machine never looks further
//! ahead than the next line.

use crate::error::ParseError;
use crate::types::{Block, HypaDoc};

enum State {
    Normal,
    AwaitingLabel,
    InComment,
}

/// Parse hypa source into a [`HypaDoc`].
///
/// Single pass over the input, split on `'\n'` (CRLF is normalised first),
/// each line trimmed of surrounding whitespace before classification. There
/// is no error recovery because there is almost nothing to recover from:
/// unknown line shapes are text, and an unterminated comment fence or a link
/// still awaiting its label at end of input are both fine. The only error is
/// the defensive [`ParseError::MalformedState`] guard.
pub fn parse(input: &str) -> Result<HypaDoc, ParseError> {
    let normalised = input.replace("\r\n", "\n");

    let mut blocks: Vec<Block> = Vec::new();
    let mut state = State::Normal;

    for (idx, raw) in normalised.split('\n').enumerate() {
        let line = raw.trim();
        match state {
            State::InComment => {
                if line.starts_with("###") {
                    state = State::Normal;
                }
            }
            State::AwaitingLabel => {
                state = State::Normal;
                if line.starts_with('?') {
                    match blocks.last_mut() {
                        Some(Block::Link { label, .. }) => {
                            *label = Some(payload(line).to_string());
                        }
                        _ => return Err(ParseError::MalformedState { line: idx }),
                    }
                } else {
                    // Not a label; the line still counts on its own.
                    classify_normal(line, &mut blocks, &mut state);
                }
            }
            State::Normal => classify_normal(line, &mut blocks, &mut state),
        }
    }

    Ok(HypaDoc { blocks })
}

/// `Normal`-state classification, also reached as the fallback when an
/// awaited label line turns out to be something else.
fn classify_normal(line: &str, blocks: &mut Vec<Block>, state: &mut State) {
    if line.starts_with('@') {
        blocks.push(Block::Link {
            url: payload(line).to_string(),
            label: None,
        });
        *state = State::AwaitingLabel;
    } else if line.starts_with("###") {
        *state = State::InComment;
    } else if line.starts_with('#') {
        // single-line comment
    } else if !line.is_empty() {
        blocks.push(Block::Text {
            content: line.to_string(),
        });
    }
}

/// Everything after the marker and its single separator character, i.e. the
/// line from its third character on. Char-boundary safe.
fn payload(line: &str) -> &str {
    line.char_indices()
        .nth(2)
        .map(|(i, _)| &line[i..])
        .unwrap_or("")
}
