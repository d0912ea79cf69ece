/// Errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A label line was found while the most recent block is not a link.
    ///
    /// The state machine only awaits a label right after pushing a link, so
    /// this is structurally unreachable; the parser guards it anyway rather
    /// than panic on a broken invariant. `line` is the 0-based line index.
    #[error("label with no preceding link at line {line}")]
    MalformedState { line: usize },
}
