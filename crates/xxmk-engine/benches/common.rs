// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **strong**, *italic* and `code`.\n\n- Bullet point\n- Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {section}\n\n"));
        content.push_str(&generate_nested_content(depth, 2));
        content.push('\n');
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let header_prefix = "#".repeat(current_level);

    content.push_str(&format!("{header_prefix} Subsection Level {current_level}\n\n"));
    content.push_str("Some paragraph with a [link](http://example.com \"title\"), a footnote[^1] and $x^2$ math.\n\n");

    for i in 0..3 {
        content.push_str(&format!("{}. Item {i} at level {current_level}\n", i + 1));
    }
    content.push('\n');

    if current_level % 3 == 0 {
        content.push_str("| a | b |\n|:-:|--:|\n| 1 | 2 |\n\n");
        content.push_str("> quoted <span class=\"x\">html</span> ~~gone~~\n\n");
    }

    if remaining_depth > 1 && current_level < 6 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_complex_markdown(50, 4)
}
