use crate::ast::{Node, NodeType};
use crate::parsing::scan::find_unescaped_in_line;
use crate::parsing::{MatchResult, ParseContext};

/// `<tag attrs>` or `</tag>` on a single line.
///
/// The tag name runs to the first unescaped space; whatever follows is kept
/// verbatim as the start tag's content. End tags take no content.
pub fn try_parse_html(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'<' {
        return Ok(None);
    }
    let is_end = bytes[1] == b'/';
    let open = if is_end { 2 } else { 1 };
    let Some(close) = find_unescaped_in_line(s, 1, b'>') else {
        return Ok(None);
    };
    if close < open {
        return Ok(None);
    }

    let inside = &s[open..close];
    let (tag, content) = match find_unescaped_in_line(inside, 0, b' ') {
        Some(space) => (&inside[..space], &inside[space + 1..]),
        None => (inside, ""),
    };
    if tag.is_empty() {
        return Ok(None);
    }

    let kind = if is_end {
        if !content.is_empty() {
            return Ok(None);
        }
        NodeType::HtmlEndTag {
            tag: tag.to_string(),
        }
    } else {
        NodeType::HtmlStartTag {
            tag: tag.to_string(),
            content: content.to_string(),
        }
    };
    let start = ctx.position();
    Ok(Some(Node::new(kind, start, start.advanced(&s[..close + 1]))))
}
