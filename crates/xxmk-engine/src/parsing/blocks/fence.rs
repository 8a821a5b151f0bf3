use crate::ast::{Node, NodeType};
use crate::error::ParseFault;
use crate::parsing::scan::split_line;
use crate::parsing::{MatchResult, ParseContext};
use crate::position::Position;

/// Fenced block delimiters.
pub struct Fence;

impl Fence {
    pub const CODE: &'static str = "```";
    pub const MATH: &'static str = "$$";
}

struct Fenced<'a> {
    suffix: &'a str,
    end: Position,
}

/// Matches a block opened by `fence` at a line start and closed by a later
/// line that is exactly `fence`.
///
/// The rest of the opening line is returned as the suffix. An unterminated
/// fence is not a match.
fn scan_fenced<'a>(
    ctx: &ParseContext<'_>,
    s: &'a str,
    fence: &str,
) -> Result<Option<Fenced<'a>>, ParseFault> {
    let start = ctx.position();
    if !start.is_line_start() {
        return Err(ParseFault::FenceNotAtLineStart { at: start });
    }
    if s.len() < fence.len() * 2 + 1 || !s.starts_with(fence) {
        return Ok(None);
    }
    let (opening, opening_len) = split_line(s);
    if opening_len == opening.len() {
        return Ok(None);
    }
    let suffix = &opening[fence.len()..];

    let mut at = opening_len;
    while at < s.len() {
        let (line, len) = split_line(&s[at..]);
        at += len;
        if line == fence {
            return Ok(Some(Fenced {
                suffix,
                end: start.advanced(&s[..at]),
            }));
        }
    }
    Ok(None)
}

/// ```` ```lang ```` ... ```` ``` ````; the suffix after the opening fence is kept verbatim.
pub fn try_parse_code_block(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    Ok(scan_fenced(ctx, s, Fence::CODE)?.map(|f| {
        Node::new(
            NodeType::CodeBlock {
                suffix: f.suffix.to_string(),
            },
            ctx.position(),
            f.end,
        )
    }))
}

pub fn try_parse_math_block(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    Ok(scan_fenced(ctx, s, Fence::MATH)?
        .map(|f| Node::new(NodeType::MathBlock, ctx.position(), f.end)))
}
