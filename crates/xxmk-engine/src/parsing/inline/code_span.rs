use crate::ast::{Node, NodeType};
use crate::parsing::scan::count_leading;
use crate::parsing::{MatchResult, ParseContext};

/// Code span inline type with owned delimiter constant.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

/// A run of N backticks closed by a run of exactly N backticks.
///
/// The content is raw: no escapes and no nested spans. It may cross single
/// newlines but not a blank line. The node is a leaf.
pub fn try_parse_code(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let ticks = count_leading(s, CodeSpan::TICK);
    if ticks == 0 || s.len() < 2 {
        return Ok(None);
    }

    let bytes = s.as_bytes();
    let mut run = 0;
    for i in ticks..bytes.len() {
        if bytes[i] == CodeSpan::TICK {
            run += 1;
            if run == ticks && bytes.get(i + 1) != Some(&CodeSpan::TICK) {
                let start = ctx.position();
                return Ok(Some(Node::new(
                    NodeType::Code,
                    start,
                    start.advanced(&s[..i + 1]),
                )));
            }
        } else {
            run = 0;
            if bytes[i] == b'\n' && bytes.get(i + 1) == Some(&b'\n') {
                return Ok(None);
            }
        }
    }
    Ok(None)
}
