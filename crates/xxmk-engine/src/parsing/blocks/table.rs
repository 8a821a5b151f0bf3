use crate::ast::{Align, Node, NodeType};
use crate::error::ParseFault;
use crate::parsing::scan::{count_leading, find_unescaped_in_line, split_line};
use crate::parsing::{MatchResult, ParseContext};
use crate::position::Position;

const PIPE: u8 = b'|';
const COLON: char = ':';

/// One table line split into cells.
struct Row {
    cells: Vec<Node>,
    has_pipe: bool,
    end: Position,
    len: usize,
}

/// Splits the first line of `s` on unescaped pipes. A leading pipe opens the
/// first cell and a trailing pipe closes the last one. Cells are trimmed of
/// spaces and parsed as text; an empty cell yields an empty Text node.
fn parse_row(ctx: &ParseContext<'_>, at: Position, s: &str) -> Result<Option<Row>, ParseFault> {
    let (line, len) = split_line(s);
    if line.is_empty() {
        return Ok(None);
    }

    let mut has_pipe = false;
    let mut cur = 0;
    if line.as_bytes()[0] == PIPE {
        has_pipe = true;
        cur = 1;
    }

    let mut cells = vec![];
    let mut cell_pos = at.advanced(&line[..cur]);
    while cur < line.len() {
        let sep = find_unescaped_in_line(line, cur, PIPE);
        has_pipe |= sep.is_some();
        let cell_end = sep.unwrap_or(line.len());
        let raw = &line[cur..cell_end];
        let lead = count_leading(raw, b' ');
        let trimmed = raw.trim_matches(' ');

        cells.push(ctx.text_or_empty(cell_pos.advanced(&raw[..lead]), trimmed)?);

        cell_pos = cell_pos.advanced(raw);
        if sep.is_some() {
            cell_pos.consume('|');
        }
        cur = cell_end + 1;
    }

    Ok(Some(Row {
        cells,
        has_pipe,
        end: at.advanced(&s[..len]),
        len,
    }))
}

/// Alignment cell: optional `:`, one or more `-`, optional `:`.
fn parse_align(cell: &str) -> Option<Align> {
    let (left, rest) = match cell.strip_prefix(COLON) {
        Some(rest) => (true, rest),
        None => (false, cell),
    };
    let (right, dashes) = match rest.strip_suffix(COLON) {
        Some(dashes) => (true, dashes),
        None => (false, rest),
    };
    if dashes.is_empty() || !dashes.bytes().all(|b| b == b'-') {
        return None;
    }
    Some(match (left, right) {
        (true, true) => Align::Middle,
        (false, true) => Align::Right,
        _ => Align::Left,
    })
}

/// A header line containing a pipe, an alignment line with the same number
/// of cells, then body lines up to a blank line (which the table consumes)
/// or the end of input.
pub fn try_parse_table(ctx: &ParseContext<'_>, s: &str) -> MatchResult {
    let start = ctx.position();
    let Some(head) = parse_row(ctx, start, s)? else {
        return Ok(None);
    };
    if !head.has_pipe || head.len >= s.len() {
        return Ok(None);
    }

    let mut rest = head.len;
    let Some(align_row) = parse_row(ctx, head.end, &s[rest..])? else {
        return Ok(None);
    };
    if align_row.cells.len() != head.cells.len() {
        return Ok(None);
    }
    let aligns = align_row
        .cells
        .iter()
        .map(|cell| parse_align(&s[cell.start.offset - start.offset..cell.end.offset - start.offset]))
        .collect::<Option<Vec<_>>>();
    let Some(aligns) = aligns else {
        return Ok(None);
    };
    rest += align_row.len;

    let mut children = vec![
        Node::with_children(NodeType::TableHead, start, head.end, head.cells),
        Node::new(NodeType::TableAlign { aligns }, head.end, align_row.end),
    ];

    let mut end = align_row.end;
    while rest < s.len() {
        if s.as_bytes()[rest] == b'\n' {
            end.consume('\n');
            break;
        }
        let Some(row) = parse_row(ctx, end, &s[rest..])? else {
            break;
        };
        children.push(Node::with_children(
            NodeType::TableLine,
            end,
            row.end,
            row.cells,
        ));
        end = row.end;
        rest += row.len;
    }

    Ok(Some(Node::with_children(NodeType::Table, start, end, children)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tests::{parse_full, root_children};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TABLE: &str = "|  hello |  world| |\n|:--: | --: | -- |\nabc\n|d | e   | f|\n| g |  |  i";

    #[test]
    fn header_alignment_and_body() {
        let ast = parse_full(TABLE);
        let kids = root_children(&ast);
        assert_eq!(kids.len(), 1);
        let table = kids[0];
        assert_eq!(table.kind(), &NodeType::Table);
        assert_eq!(table.child_count(), 5);

        let head = table.child(0).unwrap();
        assert_eq!(head.kind(), &NodeType::TableHead);
        let head_texts: Vec<_> = head.children().map(|c| c.text(TABLE)).collect();
        assert_eq!(head_texts, vec!["hello", "world", ""]);

        let align = table.child(1).unwrap();
        assert_eq!(
            align.kind(),
            &NodeType::TableAlign {
                aligns: vec![Align::Middle, Align::Right, Align::Left]
            }
        );
        assert_eq!(align.child_count(), 0);

        let rows: Vec<Vec<&str>> = table
            .children()
            .skip(2)
            .map(|line| line.children().map(|c| c.text(TABLE)).collect())
            .collect();
        assert_eq!(
            rows,
            vec![vec!["abc"], vec!["d", "e", "f"], vec!["g", "", "i"]]
        );
    }

    #[test]
    fn blank_line_ends_table() {
        let src = "a|b\n-|-\n1|2\n\nafter";
        let ast = parse_full(src);
        let kids = root_children(&ast);
        assert_eq!(kids.len(), 2);
        assert_eq!(kids[0].text(src), "a|b\n-|-\n1|2\n\n");
        assert_eq!(kids[1].text(src), "after");
    }

    #[test]
    fn mismatched_align_row_is_text() {
        let src = "| a | b |\n| --- |\n";
        let ast = parse_full(src);
        assert!(
            root_children(&ast)
                .iter()
                .all(|n| n.kind() != &NodeType::Table)
        );
    }

    #[test]
    fn header_without_pipe_is_not_a_table() {
        let src = "title\n---\n";
        let ast = parse_full(src);
        assert!(
            root_children(&ast)
                .iter()
                .all(|n| n.kind() != &NodeType::Table)
        );
    }

    #[test]
    fn escaped_pipe_stays_in_cell() {
        let src = r"a \| b | c
--|--";
        let ast = parse_full(src);
        let head = ast.root().child(0).unwrap().child(0).unwrap();
        assert_eq!(head.child(0).unwrap().text(src), r"a \| b");
    }

    #[rstest]
    #[case("---", Some(Align::Left))]
    #[case(":--", Some(Align::Left))]
    #[case("--:", Some(Align::Right))]
    #[case(":-:", Some(Align::Middle))]
    #[case(":", None)]
    #[case("::", None)]
    #[case("-x-", None)]
    #[case("", None)]
    fn align_cells(#[case] cell: &str, #[case] expected: Option<Align>) {
        assert_eq!(parse_align(cell), expected);
    }
}
