use crate::ast::{Node, NodeType};
use crate::parsing::inline::links::{LinkDelims, parse_link_title};
use crate::parsing::scan::{find_unescaped_in_line, split_line};
use crate::parsing::{MatchResult, ParseContext};

/// `[^index]: body` on a single line. The body after the colon is the text
/// child. The footnote is not linked to its references.
pub fn try_parse_footnote_index(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let (line, len) = split_line(s);
    if !line.starts_with(LinkDelims::FOOTNOTE_OPEN) {
        return Ok(None);
    }
    let Some(close) = find_unescaped_in_line(line, 2, LinkDelims::CLOSE_BRACKET) else {
        return Ok(None);
    };
    if close == 2 || line.as_bytes().get(close + 1) != Some(&LinkDelims::DEFINITION) {
        return Ok(None);
    }

    let start = ctx.position();
    let body = close + 2;
    let text = ctx.text_or_empty(start.advanced(&line[..body]), &line[body..])?;
    Ok(Some(Node::with_children(
        NodeType::FootNoteIndex {
            index: line[2..close].to_string(),
        },
        start,
        start.advanced(&s[..len]),
        vec![text],
    )))
}

/// `[index]: url "title"` on a single line.
pub fn try_parse_reference_link_index(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let (line, len) = split_line(s);
    if line.as_bytes().first() != Some(&LinkDelims::OPEN_BRACKET) {
        return Ok(None);
    }
    let Some(close) = find_unescaped_in_line(line, 1, LinkDelims::CLOSE_BRACKET) else {
        return Ok(None);
    };
    if line.as_bytes().get(close + 1) != Some(&LinkDelims::DEFINITION) {
        return Ok(None);
    }
    let Some(target) = parse_link_title(&line[close + 2..]) else {
        return Ok(None);
    };

    let start = ctx.position();
    Ok(Some(Node::new(
        NodeType::ReferenceLinkIndex {
            index: line[1..close].to_string(),
            link: target.link.to_string(),
            title: target.title.to_string(),
        },
        start,
        start.advanced(&s[..len]),
    )))
}
