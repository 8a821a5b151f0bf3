use crate::ast::{Node, NodeType};
use crate::error::ParseFault;
use crate::parsing::scan::{find_unescaped_in_line, split_line};
use crate::parsing::{MatchResult, ParseContext};
use crate::position::Position;

/// List item markers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: u8 = b'-';
    pub const TASK_OPEN: &'static str = "- [ ]";
    pub const TASK_DONE: &'static str = "- [x]";
    pub const ORDER_DOT: u8 = b'.';
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ItemKind {
    is_ordered: bool,
    is_task: bool,
    is_finished: bool,
    order: u32,
}

/// Recognises the marker at the start of `line`, returning the item kind and
/// the marker length in bytes.
fn parse_marker(line: &str) -> Option<(ItemKind, usize)> {
    let plain = ItemKind {
        is_ordered: false,
        is_task: false,
        is_finished: false,
        order: 0,
    };
    if line.starts_with(ListMarker::TASK_OPEN) {
        return Some((
            ItemKind {
                is_task: true,
                ..plain
            },
            ListMarker::TASK_OPEN.len(),
        ));
    }
    if line.starts_with(ListMarker::TASK_DONE) {
        return Some((
            ItemKind {
                is_task: true,
                is_finished: true,
                ..plain
            },
            ListMarker::TASK_DONE.len(),
        ));
    }
    if line.as_bytes().first() == Some(&ListMarker::BULLET) {
        return Some((plain, 1));
    }

    let dot = find_unescaped_in_line(line, 0, ListMarker::ORDER_DOT)?;
    let digits = &line[..dot];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let order = digits.parse::<u32>().ok()?;
    Some((
        ItemKind {
            is_ordered: true,
            order,
            ..plain
        },
        dot + 1,
    ))
}

/// One list line: marker, then a space, newline or end of input. The rest of
/// the line (leading space included) is the text child.
fn parse_item(
    ctx: &ParseContext<'_>,
    at: Position,
    s: &str,
) -> Result<Option<(ItemKind, Node, usize)>, ParseFault> {
    let (line, len) = split_line(s);
    let Some((kind, marker)) = parse_marker(line) else {
        return Ok(None);
    };
    if !matches!(line.as_bytes().get(marker), None | Some(b' ')) {
        return Ok(None);
    }
    let text = ctx.text_or_empty(at.advanced(&line[..marker]), &line[marker..])?;
    let node = Node::with_children(
        NodeType::ListItem {
            is_ordered: kind.is_ordered,
            is_task: kind.is_task,
            is_finished: kind.is_finished,
            order: kind.order,
        },
        at,
        at.advanced(&s[..len]),
        vec![text],
    );
    Ok(Some((kind, node, len)))
}

/// Consecutive list lines. The first item decides whether the list is
/// ordered and whether it is a task list; the list ends at the first line
/// that disagrees. Ordered items after the first are renumbered to follow
/// the first item's number.
pub fn try_parse_list(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let start = ctx.position();
    let Some((first, first_node, mut rest)) = parse_item(ctx, start, s)? else {
        return Ok(None);
    };

    let mut end = first_node.end;
    let mut items = vec![first_node];
    let mut next_order = first.order;
    while rest < s.len() {
        let Some((kind, mut node, len)) = parse_item(ctx, end, &s[rest..])? else {
            break;
        };
        if kind.is_ordered != first.is_ordered || kind.is_task != first.is_task {
            break;
        }
        if let NodeType::ListItem {
            is_ordered: true,
            order,
            ..
        } = &mut node.kind
        {
            next_order = next_order.saturating_add(1);
            *order = next_order;
        }
        end = node.end;
        items.push(node);
        rest += len;
    }

    Ok(Some(Node::with_children(
        NodeType::List {
            is_ordered: first.is_ordered,
            is_task: first.is_task,
        },
        start,
        end,
        items,
    )))
}
