use crate::ast::{Node, NodeType};
use crate::parsing::scan::{find_unescaped_in_line, matching_bracket};
use crate::parsing::{MatchResult, ParseContext};

/// Delimiters shared by links, images, footnotes and their definitions.
pub struct LinkDelims;

impl LinkDelims {
    pub const OPEN_BRACKET: u8 = b'[';
    pub const CLOSE_BRACKET: u8 = b']';
    pub const OPEN_PAREN: u8 = b'(';
    pub const CLOSE_PAREN: u8 = b')';
    pub const IMAGE_BANG: u8 = b'!';
    pub const FOOTNOTE_OPEN: &'static str = "[^";
    pub const DEFINITION: u8 = b':';
    pub const QUOTE: char = '"';
}

/// The `url "title"` part of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget<'a> {
    pub link: &'a str,
    pub title: &'a str,
}

/// Parses `url "title"` with optional surrounding spaces. The title is
/// optional; anything else after the url is rejected.
pub fn parse_link_title(s: &str) -> Option<LinkTarget<'_>> {
    let body = s.trim_start_matches(' ');
    let link_len = body.find(' ').unwrap_or(body.len());
    if link_len == 0 {
        return None;
    }
    let link = &body[..link_len];

    let after = body[link_len..].trim_start_matches(' ');
    if after.is_empty() {
        return Some(LinkTarget { link, title: "" });
    }
    let quoted = after.strip_prefix(LinkDelims::QUOTE)?;
    let close = quoted.find(LinkDelims::QUOTE)?;
    if !quoted[close + 1..].bytes().all(|b| b == b' ') {
        return None;
    }
    Some(LinkTarget {
        link,
        title: &quoted[..close],
    })
}

/// `[text](target)` found at the start of `s`.
struct LinkLike<'a> {
    text: &'a str,
    target: LinkTarget<'a>,
    len: usize,
}

fn scan_link_like(s: &str) -> Option<LinkLike<'_>> {
    let close = matching_bracket(s)?;
    if s.as_bytes().get(close + 1) != Some(&LinkDelims::OPEN_PAREN) {
        return None;
    }
    let paren = find_unescaped_in_line(s, close + 2, LinkDelims::CLOSE_PAREN)?;
    let target = parse_link_title(&s[close + 2..paren])?;
    Some(LinkLike {
        text: &s[1..close],
        target,
        len: paren + 1,
    })
}

/// `[text](url "title")`; the bracketed text is parsed recursively.
pub fn try_parse_link(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let Some(found) = scan_link_like(s) else {
        return Ok(None);
    };
    let start = ctx.position();
    let text = ctx.text_or_empty(start.advanced("["), found.text)?;
    Ok(Some(Node::with_children(
        NodeType::Link {
            link: found.target.link.to_string(),
            title: found.target.title.to_string(),
        },
        start,
        start.advanced(&s[..found.len]),
        vec![text],
    )))
}

/// `![alt](url "title")`; the node covers the leading `!`.
pub fn try_parse_image(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    if s.as_bytes().first() != Some(&LinkDelims::IMAGE_BANG) {
        return Ok(None);
    }
    let Some(found) = scan_link_like(&s[1..]) else {
        return Ok(None);
    };
    let start = ctx.position();
    let text = ctx.text_or_empty(start.advanced("!["), found.text)?;
    Ok(Some(Node::with_children(
        NodeType::Image {
            link: found.target.link.to_string(),
            title: found.target.title.to_string(),
        },
        start,
        start.advanced(&s[..found.len + 1]),
        vec![text],
    )))
}

/// `[^index]` with a non-empty index.
pub fn try_parse_footnote(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    if !s.starts_with(LinkDelims::FOOTNOTE_OPEN) {
        return Ok(None);
    }
    let Some(close) = find_unescaped_in_line(s, 2, LinkDelims::CLOSE_BRACKET) else {
        return Ok(None);
    };
    if close == 2 {
        return Ok(None);
    }
    let start = ctx.position();
    Ok(Some(Node::new(
        NodeType::FootNote {
            index: s[2..close].to_string(),
        },
        start,
        start.advanced(&s[..close + 1]),
    )))
}

/// `[text][index]` or `[text] [index]`. The text must not be empty; the
/// index may be.
pub fn try_parse_reference_link(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let Some(close) = matching_bracket(s) else {
        return Ok(None);
    };
    if close == 1 {
        return Ok(None);
    }
    let bytes = s.as_bytes();
    let mut open = close + 1;
    if bytes.get(open) == Some(&b' ') {
        open += 1;
    }
    if bytes.get(open) != Some(&LinkDelims::OPEN_BRACKET) {
        return Ok(None);
    }
    let Some(index_close) = find_unescaped_in_line(s, open + 1, LinkDelims::CLOSE_BRACKET) else {
        return Ok(None);
    };

    let start = ctx.position();
    let text = ctx.text_or_empty(start.advanced("["), &s[1..close])?;
    Ok(Some(Node::with_children(
        NodeType::ReferenceLink {
            index: s[open + 1..index_close].to_string(),
        },
        start,
        start.advanced(&s[..index_close + 1]),
        vec![text],
    )))
}
