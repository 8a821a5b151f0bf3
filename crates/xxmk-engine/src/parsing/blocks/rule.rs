use crate::ast::{Node, NodeType};
use crate::parsing::scan::split_line;
use crate::parsing::{MatchResult, ParseContext};

const MIN_LEN: usize = 3;

/// A line made only of three or more `*` or of three or more `-`.
pub fn try_parse_horizontal_rule(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let (line, consumed) = split_line(s);
    let Some(&symbol) = line.as_bytes().first() else {
        return Ok(None);
    };
    if !matches!(symbol, b'*' | b'-') || line.len() < MIN_LEN {
        return Ok(None);
    }
    if !line.bytes().all(|b| b == symbol) {
        return Ok(None);
    }
    let start = ctx.position();
    Ok(Some(Node::new(
        NodeType::HorizontalRule,
        start,
        start.advanced(&s[..consumed]),
    )))
}
