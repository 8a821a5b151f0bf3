use crate::ast::{Node, NodeType};
use crate::parsing::scan::{count_leading, split_line};
use crate::parsing::{MatchResult, ParseContext};

const MARKER: u8 = b'>';

/// `>> text`: the number of leading `>` is the level. Spaces after the
/// markers are skipped and the rest of the line is the text child.
pub fn try_parse_quote_block(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let level = count_leading(s, MARKER);
    if level == 0 {
        return Ok(None);
    }
    let start = ctx.position();
    let (line, consumed) = split_line(s);
    let indent = level + count_leading(&line[level..], b' ');
    let text = ctx.text_or_empty(start.advanced(&line[..indent]), &line[indent..])?;

    Ok(Some(Node::with_children(
        NodeType::QuoteBlock {
            level: level as u32,
        },
        start,
        start.advanced(&s[..consumed]),
        vec![text],
    )))
}
