use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("cannot step back from {0}")]
    InvalidPosition(Position),
}

/// An internal consistency violation raised while parsing.
///
/// Malformed markdown never produces one of these; it degrades to text. A
/// fault means a matcher (usually an extension) broke the parser's contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFault {
    #[error("{matcher} matched at {at} without advancing")]
    NoProgress { matcher: String, at: Position },

    #[error("{matcher} ended mid-line at {at}")]
    BlockEndsMidLine { matcher: String, at: Position },

    #[error("empty or inverted text run from {start} to {end}")]
    EmptyTextRun { start: Position, end: Position },

    #[error("text span at {at} consumed {consumed} of {expected} bytes")]
    SpanLengthMismatch {
        at: Position,
        consumed: usize,
        expected: usize,
    },

    #[error("fence matched away from a line start at {at}")]
    FenceNotAtLineStart { at: Position },

    #[error("node {node} violates tree invariant: {reason}")]
    TreeInvariant { node: usize, reason: String },

    #[error(transparent)]
    Position(#[from] PositionError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown {stage} syntax: {name}")]
    UnknownSyntax { stage: &'static str, name: String },
}
