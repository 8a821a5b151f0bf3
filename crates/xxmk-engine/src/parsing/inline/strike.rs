use crate::ast::{Node, NodeType};
use crate::parsing::{MatchResult, ParseContext};

const TILDES: &str = "~~";

/// `~~text~~` on one line. The content between the tildes is parsed as a
/// nested text span and must not be empty.
pub fn try_parse_strike_through(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    if s.len() < 4 || !s.starts_with(TILDES) {
        return Ok(None);
    }

    let mut last_tilde = false;
    let mut close = None;
    for (i, &b) in s.as_bytes().iter().enumerate().skip(2) {
        match b {
            b'\n' => return Ok(None),
            b'~' if last_tilde => {
                close = Some(i - 1);
                break;
            }
            b'~' => last_tilde = true,
            _ => last_tilde = false,
        }
    }
    let Some(close) = close else {
        return Ok(None);
    };
    if close == 2 {
        return Ok(None);
    }

    let start = ctx.position();
    let text = ctx.text_or_empty(start.advanced(TILDES), &s[2..close])?;
    Ok(Some(Node::with_children(
        NodeType::StrikeThrough,
        start,
        start.advanced(&s[..close + 2]),
        vec![text],
    )))
}
