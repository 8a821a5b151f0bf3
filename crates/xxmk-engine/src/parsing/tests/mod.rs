//! Engine tests and helpers shared by the matcher unit tests.
//!
//! Every tree built through [`parse_full`] is run through
//! [`invariants::check`] before a test sees it.


use pretty_assertions::assert_eq;
use rstest::rstest;
use xxmk_config::{Config, ParserSettings};

use crate::ast::{Ast, Node, NodeRef, NodeType};
use crate::error::{ParseFault, RegistryError};
use crate::parsing::engine::MAX_INLINE_DEPTH;
use crate::parsing::scan::split_line;
use crate::parsing::{MarkdownParser, ParseContext};
use crate::position::Position;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses `src` with every built-in matcher and checks the tree invariants.
pub fn parse_full(src: &str) -> Ast {
    parse_with(&MarkdownParser::full(), src)
}

pub fn parse_with(parser: &MarkdownParser, src: &str) -> Ast {
    init_logger();
    let ast = parser.parse(src).unwrap();
    invariants::check(src, &ast);
    ast
}

pub fn root_children(ast: &Ast) -> Vec<NodeRef<'_>> {
    ast.root().children().collect()
}

/// The inline nodes of the first top-level span. A lone text leaf is its
/// own only inline node.
pub fn inline_children(ast: &Ast) -> Vec<NodeRef<'_>> {
    let Some(first) = ast.root().child(0) else {
        return vec![];
    };
    if first.child_count() == 0 {
        vec![first]
    } else {
        first.children().collect()
    }
}

fn kinds(nodes: &[NodeRef<'_>]) -> Vec<String> {
    nodes.iter().map(|n| n.kind().name().to_string()).collect()
}

// Text spans

#[test]
fn blank_line_splits_text() {
    let src = "Part1\n\nPart2";
    let ast = parse_full(src);
    let kids = root_children(&ast);
    assert_eq!(kinds(&kids), vec!["Text", "Text"]);
    assert_eq!(kids[0].text(src), "Part1\n");
    assert_eq!(kids[1].text(src), "Part2");
    assert_eq!(kids[1].start(), Position::new(2, 0, 7));
}

#[test]
fn single_newline_keeps_one_span() {
    let src = "line one\nline two\n";
    let ast = parse_full(src);
    let kids = root_children(&ast);
    assert_eq!(kids.len(), 1);
    assert_eq!(kids[0].text(src), src);
    assert_eq!(kids[0].child_count(), 0);
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("\n\n\n")]
fn empty_or_blank_document_has_no_children(#[case] src: &str) {
    let ast = parse_full(src);
    assert_eq!(ast.len(), 1);
    assert_eq!(ast.root().end().offset, src.len());
}

#[test]
fn lone_text_is_collapsed_into_a_leaf() {
    let src = "just words";
    let ast = parse_full(src);
    insta::assert_snapshot!(ast.to_string(), @r"
    Document[Line 0, Col 0, Offset 0]
      |-Text[Line 0, Col 0, Offset 0]
    ");
}

#[test]
fn mixed_span_is_a_text_container() {
    let src = "a *b* c";
    let ast = parse_full(src);
    let span = ast.root().child(0).unwrap();
    assert_eq!(span.kind(), &NodeType::Text);
    assert_eq!(kinds(&inline_children(&ast)), vec!["Text", "Italic", "Text"]);
    assert_eq!(span.text(src), src);
}

#[rstest]
#[case(r"\*not italic\*", 0)]
#[case(r"\\*italic*", 1)]
#[case(r"\`x` and `y`", 1)]
fn backslash_escapes_the_next_character(#[case] src: &str, #[case] spans: usize) {
    let ast = parse_full(src);
    let found = ast
        .iter()
        .filter(|n| matches!(n.kind(), NodeType::Italic | NodeType::Code))
        .count();
    assert_eq!(found, spans, "{src}");
}

#[test]
fn positions_track_multibyte_characters() {
    let src = "héllo *wörld*";
    let ast = parse_full(src);
    let italic = inline_children(&ast)[1];
    assert_eq!(italic.start(), Position::new(0, 6, 7));
    assert_eq!(italic.text(src), "*wörld*");
}

// Block loop

#[test]
fn blocks_only_match_at_line_start() {
    let src = "text # not a header\n# header";
    let ast = parse_full(src);
    assert_eq!(kinds(&root_children(&ast)), vec!["Text", "Header"]);
}

#[test]
fn text_between_blocks() {
    let src = "# A\nbody\n---\ntail";
    let ast = parse_full(src);
    let kids = root_children(&ast);
    assert_eq!(
        kinds(&kids),
        vec!["Header", "Text", "HorizontalRule", "Text"]
    );
    assert_eq!(kids[1].text(src), "body\n");
    assert_eq!(kids[3].text(src), "tail");
}

#[test]
fn block_only_parser_leaves_inline_markup_as_text() {
    let src = "# **bold**";
    let ast = parse_with(&MarkdownParser::block_only(), src);
    let header = ast.root().child(0).unwrap();
    let text = header.child(0).unwrap();
    assert_eq!(text.kind(), &NodeType::Text);
    assert_eq!(text.child_count(), 0);
}

#[test]
fn inline_only_parser_ignores_blocks() {
    let src = "# *a*";
    let ast = parse_with(&MarkdownParser::inline_only(), src);
    assert_eq!(kinds(&inline_children(&ast)), vec!["Text", "Italic"]);
}

#[test]
fn base_parser_yields_plain_text() {
    let src = "# *a*\n- b";
    let ast = parse_with(&MarkdownParser::base(), src);
    let kids = root_children(&ast);
    assert_eq!(kids.len(), 1);
    assert_eq!(kids[0].child_count(), 0);
}

// Extensions

fn comment_block(ctx: &ParseContext<'_>, s: &str) -> Result<Option<Node>, ParseFault> {
    if !s.starts_with("%%") {
        return Ok(None);
    }
    let (line, len) = split_line(s);
    let start = ctx.position();
    Ok(Some(Node::new(
        NodeType::custom("Comment", &line[2..]),
        start,
        start.advanced(&s[..len]),
    )))
}

#[test]
fn extension_block_parser() {
    let mut parser = MarkdownParser::full();
    parser.add_extension_block_parser("Comment", comment_block);
    let src = "%% hidden\ntext";
    let ast = parse_with(&parser, src);
    let kids = root_children(&ast);
    assert_eq!(kids[0].kind(), &NodeType::custom("Comment", " hidden"));
    assert_eq!(kids[0].text(src), "%% hidden\n");
    assert_eq!(kids[1].kind(), &NodeType::Text);
}

#[test]
fn extension_inline_parser_with_nested_text() {
    let mut parser = MarkdownParser::full();
    parser.add_extension_inline_parser('=', "Highlight", |ctx, s| {
        let Some(body) = s.strip_prefix("==") else {
            return Ok(None);
        };
        let Some(close) = body.find("==") else {
            return Ok(None);
        };
        let start = ctx.position();
        let text = ctx.text_or_empty(start.advanced("=="), &body[..close])?;
        Ok(Some(Node::with_children(
            NodeType::custom("Highlight", ""),
            start,
            start.advanced(&s[..close + 4]),
            vec![text],
        )))
    });
    let src = "x ==a *b*== y";
    let ast = parse_with(&parser, src);
    let kids = inline_children(&ast);
    assert_eq!(kinds(&kids), vec!["Text", "Highlight", "Text"]);
    let inner = kids[1].child(0).unwrap();
    assert_eq!(
        inner.children().map(|n| n.kind().name()).collect::<Vec<_>>(),
        vec!["Text", "Italic"]
    );
}

#[test]
fn later_registration_wins() {
    let mut parser = MarkdownParser::full();
    parser.add_extension_block_parser("Shout", |ctx, s| {
        if !s.starts_with('#') {
            return Ok(None);
        }
        let (_, len) = split_line(s);
        let start = ctx.position();
        Ok(Some(Node::new(
            NodeType::custom("Shout", ""),
            start,
            start.advanced(&s[..len]),
        )))
    });
    assert_eq!(parser.block_parser_names()[0], "Shout");
    let ast = parse_with(&parser, "# title");
    assert_eq!(root_children(&ast)[0].kind().name(), "Shout");
}

#[test]
fn matcher_that_does_not_advance_is_a_fault() {
    let mut parser = MarkdownParser::full();
    parser.add_extension_inline_parser('@', "Stuck", |ctx, _| {
        let at = ctx.position();
        Ok(Some(Node::text(at, at)))
    });
    assert_eq!(
        parser.parse("hi @there"),
        Err(ParseFault::NoProgress {
            matcher: "Stuck".to_string(),
            at: Position::new(0, 3, 3),
        })
    );
}

#[test]
fn block_ending_mid_line_is_a_fault() {
    let mut parser = MarkdownParser::full();
    parser.add_extension_block_parser("Half", |ctx, s| {
        if !s.starts_with("ab") {
            return Ok(None);
        }
        let start = ctx.position();
        Ok(Some(Node::new(
            NodeType::custom("Half", ""),
            start,
            start.advanced("a"),
        )))
    });
    assert_eq!(
        parser.parse("abc"),
        Err(ParseFault::BlockEndsMidLine {
            matcher: "Half".to_string(),
            at: Position::new(0, 1, 1),
        })
    );
}

#[test]
fn matcher_overrunning_its_input_is_a_fault() {
    let mut parser = MarkdownParser::base();
    parser.add_extension_inline_parser('!', "Greedy", |ctx, s| {
        let start = ctx.position();
        Ok(Some(Node::new(
            NodeType::custom("Greedy", ""),
            start,
            start.advanced(s).advanced("more"),
        )))
    });
    assert!(matches!(
        parser.parse("a!"),
        Err(ParseFault::SpanLengthMismatch { .. })
    ));
}

// Registration

#[test]
fn default_priority_order() {
    let parser = MarkdownParser::full();
    assert_eq!(
        parser.block_parser_names(),
        xxmk_config::DEFAULT_BLOCK_SYNTAX
    );
    assert_eq!(
        parser.inline_parser_names('['),
        vec!["Link", "FootNote", "ReferenceLink"]
    );
    assert_eq!(parser.inline_parser_names('<'), vec!["SimpleLink", "Html"]);
    assert!(parser.inline_parser_names('z').is_empty());
}

#[test]
fn from_config_respects_listed_order() {
    let settings = ParserSettings {
        block: vec!["List".into(), "Header".into()],
        inline: vec!["Italic".into()],
    };
    let parser = MarkdownParser::from_config(&settings).unwrap();
    assert_eq!(parser.block_parser_names(), vec!["List", "Header"]);
    assert_eq!(parser.inline_parser_names('*'), vec!["Italic"]);
    assert!(parser.inline_parser_names('`').is_empty());

    let ast = parse_with(&parser, "**a**");
    assert_eq!(kinds(&inline_children(&ast)), vec!["Text", "Italic", "Text"]);
}

#[test]
fn from_config_defaults_match_full() {
    let parser = MarkdownParser::from_config(&ParserSettings::default()).unwrap();
    let full = MarkdownParser::full();
    assert_eq!(parser.block_parser_names(), full.block_parser_names());
    for c in ['*', '_', '~', '`', '$', '[', '<', '!'] {
        assert_eq!(parser.inline_parser_names(c), full.inline_parser_names(c));
    }
}

#[test]
fn from_config_reads_toml_settings() {
    let config = Config::from_toml_str(
        r#"
[parser]
block = ["Header"]
inline = ["Code", "Emphasis"]
"#,
    )
    .unwrap();
    let parser = MarkdownParser::from_config(&config.parser).unwrap();
    assert_eq!(parser.block_parser_names(), vec!["Header"]);

    let src = "# **b** `c`\n- item";
    let ast = parse_with(&parser, src);
    assert_eq!(kinds(&root_children(&ast)), vec!["Header", "Text"]);
    let header_text = ast.root().child(0).unwrap().child(0).unwrap();
    let inline: Vec<_> = header_text.children().collect();
    assert_eq!(kinds(&inline), vec!["Text", "Emphasis", "Text", "Code"]);
}

#[test]
fn from_config_rejects_unknown_names() {
    let settings = ParserSettings {
        block: vec!["Header".into()],
        inline: vec!["Blink".into()],
    };
    assert_eq!(
        MarkdownParser::from_config(&settings).unwrap_err(),
        RegistryError::UnknownSyntax {
            stage: "inline",
            name: "Blink".to_string(),
        }
    );
}

#[test]
fn debug_lists_matchers() {
    let parser = MarkdownParser::block_only();
    let shown = format!("{parser:?}");
    assert!(shown.starts_with("MarkdownParser { block: [\"HorizontalRule\""));
    assert!(shown.contains("inline_lookaheads: []"));
}

// Nesting

fn nested_links(levels: usize) -> String {
    format!("{}a{}", "[".repeat(levels), "](u)".repeat(levels))
}

fn links<'a>(ast: &'a Ast) -> Vec<NodeRef<'a>> {
    ast.iter().filter(|n| n.kind().name() == "Link").collect()
}

#[test]
fn shallow_nesting_is_fully_parsed() {
    let src = nested_links(3);
    let ast = parse_full(&src);
    assert_eq!(links(&ast).len(), 3);
}

#[test]
fn deep_nesting_degrades_to_text() {
    let src = nested_links(3000);
    let ast = parse_full(&src);
    let links = links(&ast);
    assert_eq!(links.len(), MAX_INLINE_DEPTH);

    let innermost = links.last().unwrap();
    let body = innermost.child(0).unwrap();
    assert_eq!(body.kind(), &NodeType::Text);
    assert_eq!(body.child_count(), 0);
    let rest = 3000 - links.len();
    assert_eq!(
        body.text(&src),
        format!("{}a{}", "[".repeat(rest), "](u)".repeat(rest))
    );
}
