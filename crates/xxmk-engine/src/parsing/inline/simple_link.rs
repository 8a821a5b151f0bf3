use std::sync::OnceLock;

use regex::Regex;

use crate::ast::{Node, NodeType};
use crate::parsing::scan::find_unescaped_in_line;
use crate::parsing::{MatchResult, ParseContext};

fn url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[[:word:]]+://[[:word:].]+(:[0-9]+)?(/[[:word:]]+)*(\?([[:word:]]+=[[:word:]]+&)*[[:word:]]+=[[:word:]]+)?(#[[:word:]]+)?$",
        )
        .expect("Invalid URL regex")
    })
}

/// An RFC 5322 addr-spec with RFC 6532 UTF-8 atoms: a dot-atom or quoted
/// local part, then a dot-atom domain or a `[...]` domain literal.
///
/// Display names (`Name <a@b>`) and `(comments)` are not accepted.
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        let atom = r#"[^\x00-\x20\x7f()<>\[\]:;@\\,."]+"#;
        let dot_atom = format!(r"{atom}(?:\.{atom})*");
        let quoted = r#""(?:[^"\\\n]|\\[^\n])*""#;
        let literal = r"\[[^\[\]\\\s]*\]";
        Regex::new(&format!(
            r"^(?:{dot_atom}|{quoted})@(?:{dot_atom}|{literal})$"
        ))
        .expect("Invalid email regex")
    })
}

/// Whether `s` is something an autolink may point at.
pub fn is_autolink_target(s: &str) -> bool {
    url_regex().is_match(s) || email_regex().is_match(s)
}

/// `<scheme://host/path>` or `<user@host>`.
pub fn try_parse_simple_link(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    if s.len() <= 2 || !s.starts_with('<') {
        return Ok(None);
    }
    let Some(close) = find_unescaped_in_line(s, 1, b'>') else {
        return Ok(None);
    };
    let link = &s[1..close];
    if !is_autolink_target(link) {
        return Ok(None);
    }
    let start = ctx.position();
    Ok(Some(Node::new(
        NodeType::SimpleLink {
            link: link.to_string(),
        },
        start,
        start.advanced(&s[..close + 1]),
    )))
}
