use crate::ast::{Node, NodeType};
use crate::parsing::{MatchResult, ParseContext};

const DOLLAR: u8 = b'$';

/// `$x^2$`. A `$$` at either end rejects the span, and it cannot cross a
/// blank line. `\$` does not close the span. The node is a leaf.
pub fn try_parse_math(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let bytes = s.as_bytes();
    if bytes.len() <= 2 || bytes[0] != DOLLAR || bytes[1] == DOLLAR {
        return Ok(None);
    }
    let mut escaped = false;
    for i in 1..bytes.len() {
        if std::mem::take(&mut escaped) && bytes[i] != b'\n' {
            continue;
        }
        match bytes[i] {
            b'\\' => escaped = true,
            DOLLAR if bytes.get(i + 1) == Some(&DOLLAR) => return Ok(None),
            DOLLAR => {
                let start = ctx.position();
                return Ok(Some(Node::new(
                    NodeType::Math,
                    start,
                    start.advanced(&s[..i + 1]),
                )));
            }
            b'\n' if bytes.get(i + 1) == Some(&b'\n') => return Ok(None),
            _ => {}
        }
    }
    Ok(None)
}
