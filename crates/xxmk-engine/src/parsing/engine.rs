use crate::ast::{Ast, Node, NodeType};
use crate::error::ParseFault;
use crate::position::Position;

use super::{MarkdownParser, ParseContext, Registered};

const ESCAPE: char = '\\';

/// Text spans nested deeper than this are not searched for inline
/// constructs, so `[[[...](u)](u)](u)` cannot exhaust the stack.
pub const MAX_INLINE_DEPTH: usize = 64;

impl MarkdownParser {
    /// Parses a whole document.
    ///
    /// Block matchers are tried only at line starts; everything between
    /// block matches is handed to the inline engine as text spans.
    pub fn parse(&self, text: &str) -> Result<Ast, ParseFault> {
        log::debug!("parsing document of {} bytes", text.len());
        let ast = self
            .parse_document(text)
            .inspect_err(|e| log::error!("parse fault: {e}"))?;
        log::debug!("parsed document into {} nodes", ast.len());
        Ok(ast)
    }

    fn parse_document(&self, text: &str) -> Result<Ast, ParseFault> {
        let mut children = vec![];
        let mut pos = Position::default();
        let mut pending = pos;
        let mut at_line_start = true;

        while pos.offset < text.len() {
            let rest = &text[pos.offset..];
            let matched = if at_line_start {
                self.try_block(pos, rest)?
            } else {
                None
            };

            if let Some(node) = matched {
                self.flush_text(text, pending, pos, &mut children)?;
                pos = node.end;
                pending = pos;
                if pos.offset < text.len() && !pos.is_line_start() {
                    return Err(ParseFault::BlockEndsMidLine {
                        matcher: node.kind.name().to_string(),
                        at: pos,
                    });
                }
                children.push(node);
                at_line_start = true;
                continue;
            }

            let Some(c) = rest.chars().next() else { break };
            pos.consume(c);
            at_line_start = c == '\n';
        }
        self.flush_text(text, pending, pos, &mut children)?;

        let root = Node::with_children(NodeType::Document, Position::default(), pos, children);
        Ast::from_node(root)
    }

    /// Parses the run `[from, to)` of `text` into consecutive text spans.
    fn flush_text(
        &self,
        text: &str,
        from: Position,
        to: Position,
        out: &mut Vec<Node>,
    ) -> Result<(), ParseFault> {
        if from.offset > to.offset {
            return Err(ParseFault::EmptyTextRun {
                start: from,
                end: to,
            });
        }
        let mut at = from;
        while at.offset < to.offset {
            match self.parse_text(at, &text[at.offset..to.offset], 0)? {
                Some(node) => {
                    if node.end.offset <= at.offset {
                        return Err(ParseFault::NoProgress {
                            matcher: "Text".to_string(),
                            at,
                        });
                    }
                    at = node.end;
                    out.push(node);
                }
                // only newlines remain
                None => break,
            }
        }
        Ok(())
    }

    /// Parses one text span of `s`, which begins at `at`.
    ///
    /// Leading newlines are skipped. The span ends at the end of `s` or at a
    /// blank line, in which case the first newline is included and the
    /// second is left for the caller. Returns `None` if `s` is only newlines.
    ///
    /// Past [`MAX_INLINE_DEPTH`] the span is plain text.
    pub(crate) fn parse_text(
        &self,
        at: Position,
        s: &str,
        depth: usize,
    ) -> Result<Option<Node>, ParseFault> {
        let body = s.trim_start_matches('\n');
        let mut pos = at;
        for _ in 0..s.len() - body.len() {
            pos.consume('\n');
        }
        if body.is_empty() {
            return Ok(None);
        }

        let start = pos;
        let limit = at.offset + s.len();
        let mut children = vec![];
        let mut text_start = pos;
        let mut escaped = false;
        let mut after_newline = false;
        let mut blank_line = false;

        while pos.offset < limit {
            let rest = &s[pos.offset - at.offset..];
            let Some(c) = rest.chars().next() else { break };

            let mut matched = None;
            if c == '\n' {
                if after_newline {
                    blank_line = true;
                    break;
                }
                escaped = false;
                after_newline = true;
            } else if c == ESCAPE {
                after_newline = false;
                escaped = !escaped;
            } else {
                after_newline = false;
                if escaped {
                    escaped = false;
                } else if depth < MAX_INLINE_DEPTH
                    && let Some(seq) = self.inline.get(&c)
                {
                    matched = try_matchers(self, seq, pos, rest, limit, depth)?;
                }
            }

            match matched {
                Some(node) => {
                    if text_start.offset < pos.offset {
                        children.push(Node::text(text_start, pos));
                    }
                    pos = node.end;
                    text_start = pos;
                    escaped = false;
                    after_newline = false;
                    children.push(node);
                }
                None => pos.consume(c),
            }
        }
        if text_start.offset < pos.offset {
            children.push(Node::text(text_start, pos));
        }

        if !blank_line && pos.offset != limit {
            return Err(ParseFault::SpanLengthMismatch {
                at,
                consumed: pos.offset - at.offset,
                expected: s.len(),
            });
        }

        if let [only] = children.as_slice()
            && only.kind.is_text()
            && only.start == start
            && only.end == pos
        {
            return Ok(children.pop());
        }
        Ok(Some(Node::with_children(NodeType::Text, start, pos, children)))
    }

    fn try_block(&self, pos: Position, rest: &str) -> Result<Option<Node>, ParseFault> {
        try_matchers(self, &self.block, pos, rest, pos.offset + rest.len(), 0)
    }
}

/// Tries `seq` from the most recently registered matcher down; the first
/// match wins.
fn try_matchers(
    parser: &MarkdownParser,
    seq: &[Registered],
    pos: Position,
    rest: &str,
    limit: usize,
    depth: usize,
) -> Result<Option<Node>, ParseFault> {
    let ctx = ParseContext::at_depth(parser, pos, depth);
    for r in seq.iter().rev() {
        let Some(node) = (r.matcher)(&ctx, rest)? else {
            continue;
        };
        if node.end.offset <= pos.offset {
            return Err(ParseFault::NoProgress {
                matcher: r.name.clone(),
                at: pos,
            });
        }
        let consumed = node.end.offset - pos.offset;
        if node.end.offset > limit || !rest.is_char_boundary(consumed) {
            return Err(ParseFault::SpanLengthMismatch {
                at: pos,
                consumed,
                expected: rest.len(),
            });
        }
        log::trace!("{} matched {}..{}", r.name, pos, node.end);
        return Ok(Some(node));
    }
    Ok(None)
}
