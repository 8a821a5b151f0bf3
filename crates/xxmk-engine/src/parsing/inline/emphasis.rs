use crate::ast::{Node, NodeType};
use crate::parsing::{MatchResult, ParseContext};

fn is_delimiter(b: u8) -> bool {
    matches!(b, b'*' | b'_')
}

/// `**strong**` or `__strong__`, closed by the first doubled delimiter.
///
/// A delimiter followed by a space, or any newline, abandons the match.
/// The node is a leaf.
pub fn try_parse_emphasis(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let bytes = s.as_bytes();
    if bytes.len() < 4 || !is_delimiter(bytes[0]) || bytes[1] != bytes[0] {
        return Ok(None);
    }
    let symbol = bytes[0];

    let mut last_symbol = false;
    for (i, &b) in bytes.iter().enumerate().skip(2) {
        if b == symbol && last_symbol {
            let start = ctx.position();
            return Ok(Some(Node::new(
                NodeType::Emphasis,
                start,
                start.advanced(&s[..i + 1]),
            )));
        }
        if (last_symbol && b == b' ') || b == b'\n' {
            return Ok(None);
        }
        last_symbol = b == symbol;
    }
    Ok(None)
}

/// `*italic*` or `_italic_`, closed by the next delimiter on the same line.
/// Empty content is rejected. The node is a leaf.
pub fn try_parse_italic(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let bytes = s.as_bytes();
    if bytes.len() <= 2 || !is_delimiter(bytes[0]) {
        return Ok(None);
    }
    let symbol = bytes[0];

    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if b == symbol {
            if i == 1 {
                return Ok(None);
            }
            let start = ctx.position();
            return Ok(Some(Node::new(
                NodeType::Italic,
                start,
                start.advanced(&s[..i + 1]),
            )));
        }
        if b == b'\n' {
            return Ok(None);
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use crate::ast::NodeType;
    use crate::parsing::tests::{inline_children, parse_full};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("**hello*world**", "Emphasis", "**hello*world**")]
    #[case("__a__ tail", "Emphasis", "__a__")]
    #[case("**a**b", "Emphasis", "**a**")]
    #[case("*it* tail", "Italic", "*it*")]
    #[case("_x_", "Italic", "_x_")]
    #[case("*a**", "Italic", "*a*")]
    fn first_span(#[case] src: &str, #[case] kind: &str, #[case] text: &str) {
        let ast = parse_full(src);
        let first = inline_children(&ast)[0];
        assert_eq!(first.kind().name(), kind);
        assert_eq!(first.text(src), text);
        assert_eq!(first.child_count(), 0);
    }

    #[rstest]
    #[case("**a b")]
    #[case("**a\nb**")]
    #[case("**")]
    #[case("*\n*")]
    #[case("a * b")]
    fn stays_text(#[case] src: &str) {
        let ast = parse_full(src);
        assert!(
            inline_children(&ast)
                .iter()
                .all(|n| !matches!(n.kind(), NodeType::Emphasis | NodeType::Italic)),
            "{src}"
        );
    }
}
