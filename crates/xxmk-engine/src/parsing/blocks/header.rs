use crate::ast::{Node, NodeType};
use crate::parsing::scan::{count_leading, split_line};
use crate::parsing::{MatchResult, ParseContext};

const HASH: u8 = b'#';

/// `# Title`: one or more `#` followed by a space, newline or end of input.
///
/// The rest of the line (leading space included) becomes the single text
/// child. The node runs through the line's newline.
pub fn try_parse_header(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let level = count_leading(s, HASH);
    if level == 0 {
        return Ok(None);
    }
    if !matches!(s.as_bytes().get(level), None | Some(b' ') | Some(b'\n')) {
        return Ok(None);
    }

    let start = ctx.position();
    let (line, consumed) = split_line(s);
    let text_at = start.advanced(&s[..level]);
    let text = ctx.text_or_empty(text_at, &line[level..])?;

    Ok(Some(Node::with_children(
        NodeType::Header {
            level: level as u32,
        },
        start,
        start.advanced(&s[..consumed]),
        vec![text],
    )))
}
