use crate::ast::Node;
use crate::error::ParseFault;
use crate::position::Position;

use super::MarkdownParser;

/// What every matcher receives alongside the remaining input.
///
/// Carries the position of the first byte of that input and gives access to
/// the inline engine, so block matchers can parse the text they contain.
#[derive(Clone, Copy)]
pub struct ParseContext<'p> {
    pos: Position,
    parser: &'p MarkdownParser,
    depth: usize,
}

impl<'p> ParseContext<'p> {
    pub(crate) fn new(parser: &'p MarkdownParser, pos: Position) -> Self {
        Self::at_depth(parser, pos, 0)
    }

    pub(crate) fn at_depth(parser: &'p MarkdownParser, pos: Position, depth: usize) -> Self {
        Self { pos, parser, depth }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// How many text spans enclose the current match.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Parses `s`, which begins at `at`, as a text span nested one level
    /// below the current match.
    ///
    /// Returns `None` if `s` holds nothing but newlines.
    pub fn parse_text(&self, at: Position, s: &str) -> Result<Option<Node>, ParseFault> {
        self.parser.parse_text(at, s, self.depth + 1)
    }

    /// Like [`ParseContext::parse_text`], but empty input yields an empty
    /// Text node at `at`.
    pub fn text_or_empty(&self, at: Position, s: &str) -> Result<Node, ParseFault> {
        if s.is_empty() {
            return Ok(Node::text(at, at));
        }
        self.parse_text(at, s)?
            .ok_or_else(|| ParseFault::EmptyTextRun {
                start: at,
                end: at.advanced(s),
            })
    }
}
