//! Tests for the parser state machine.
//!
//! Structure is asserted through the indented outline produced by
//! `snapshot::normalize`, with inline `insta` snapshots.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    error::ParseError,
    parsing::{
        blocks::{Block, HeadingLevel, ListKind},
        parse_document, parse_lines,
        snapshot::{invariants, normalize},
        try_parse_lines,
    },
};

fn outline(lines: &[&str]) -> String {
    let doc = parse_document(lines);
    invariants(&doc);
    normalize(&doc)
}

// Blank input

#[rstest]
#[case(&[])]
#[case(&[""])]
#[case(&["", "   ", "\t"])]
fn blank_input_has_no_blocks(#[case] lines: &[&str]) {
    assert!(parse_document(lines).is_empty());
}

// Headings

#[test]
fn atx_heading_alone() {
    let doc = parse_document(&["# Title"]);
    let [Block::Heading(h)] = doc.blocks.as_slice() else {
        panic!("expected one heading, got {doc:?}");
    };
    assert_eq!(h.level, HeadingLevel::H1);
    assert_eq!(h.content, "Title");
}

#[rstest]
#[case("===", 1)]
#[case("---", 2)]
#[case("  =", 1)]
#[case("-- ", 2)]
fn setext_underline_converts_paragraph(#[case] underline: &str, #[case] level: u8) {
    let doc = parse_document(&["Title", underline]);
    let [Block::Heading(h)] = doc.blocks.as_slice() else {
        panic!("expected one heading, got {doc:?}");
    };
    assert_eq!(h.level.get(), level);
    assert_eq!(h.content, "Title");
}

#[test]
fn other_line_after_paragraph_starts_new_block() {
    assert_snapshot!(outline(&["Title", "more text"]), @r#"
    Paragraph "Title"
    Paragraph "more text"
    "#);
}

#[test]
fn underline_after_blank_is_plain_text() {
    assert_snapshot!(outline(&["Title", "", "==="]), @r#"
    Paragraph "Title"
    Paragraph "==="
    "#);
}

#[test]
fn underline_only_converts_the_paragraph_directly_above() {
    assert_snapshot!(outline(&["a", "b", "---"]), @r#"
    Paragraph "a"
    Heading(2) "b"
    "#);
}

#[test]
fn heading_after_paragraph() {
    assert_snapshot!(outline(&["text", "## Next"]), @r#"
    Paragraph "text"
    Heading(2) "Next"
    "#);
}

// Fenced code

#[test]
fn fenced_code_block() {
    let doc = parse_document(&["```", "code line", "```"]);
    assert_eq!(normalize(&doc).trim_end(), r#"Code(fence) ["code line"]"#);
    assert_eq!(doc.render_html(), ["<code>code line<\\code>"]);
}

#[test]
fn nothing_is_classified_inside_a_fence() {
    assert_snapshot!(outline(&["```rust", "# not a heading", "- not a list", "    not code", "```", "# heading"]), @r##"
    Code(fence) ["# not a heading", "- not a list", "    not code"]
    Heading(1) "heading"
    "##);
}

#[test]
fn fence_close_must_be_bare() {
    assert_snapshot!(outline(&["```", "```rust", "``` ", "```"]), @r#"
    Code(fence) ["```rust", "``` "]
    "#);
}

#[test]
fn unterminated_fence_keeps_trailing_blank_lines() {
    assert_snapshot!(outline(&["```", "a", "", ""]), @r#"
    Code(fence) ["a", "", ""]
    "#);
}

// Indented code

#[test]
fn blank_lines_inside_indented_code_are_skipped() {
    assert_snapshot!(outline(&["    let x = 1;", "", "    ", "    let y = 2;", "", "after"]), @r#"
    Code(indent) ["let x = 1;", "let y = 2;"]
    Paragraph "after"
    "#);
}

#[test]
fn indented_code_strips_exactly_four_spaces() {
    assert_snapshot!(outline(&["    fn f() {", "        body", "    }"]), @r#"
    Code(indent) ["fn f() {", "    body", "}"]
    "#);
}

#[test]
fn indented_code_ending_in_blank_lines_is_trimmed() {
    assert_snapshot!(outline(&["    a", "", "   "]), @r#"
    Code(indent) ["a"]
    "#);
}

#[test]
fn indented_code_opened_on_last_line_is_closed() {
    assert_snapshot!(outline(&["text", "", "    code"]), @r#"
    Paragraph "text"
    Code(indent) ["code"]
    "#);
}

#[test]
fn finished_indented_code_reroutes_line() {
    assert_snapshot!(outline(&["    code", "- item"]), @r#"
    Code(indent) ["code"]
    List(unordered '-')
      Item
        Paragraph "item"
    "#);
}

// Lists

#[test]
fn nested_unordered_list() {
    assert_snapshot!(outline(&["- a", "  - b", "- c"]), @r#"
    List(unordered '-')
      Item
        Paragraph "a"
        List(unordered '-')
          Item
            Paragraph "b"
      Item
        Paragraph "c"
    "#);
}

#[test]
fn ordered_list_start_comes_from_first_marker() {
    let doc = parse_document(&["99998. hola", "2. mundo"]);
    let [Block::List(list)] = doc.blocks.as_slice() else {
        panic!("expected one list, got {doc:?}");
    };
    assert_eq!(list.kind(), ListKind::Ordered { start: 99998 });
    assert_eq!(list.items().len(), 2);
    assert_eq!(doc.render_text(), ["    99998. hola", "    99999. mundo"]);
}

#[test]
fn two_blank_lines_are_tolerated_inside_a_list() {
    assert_snapshot!(outline(&["- a", "", "", "- b"]), @r#"
    List(unordered '-')
      Item
        Paragraph "a"
      Item
        Paragraph "b"
    "#);
}

#[test]
fn third_blank_line_closes_the_list() {
    assert_snapshot!(outline(&["- a", "", "", "", "- b"]), @r#"
    List(unordered '-')
      Item
        Paragraph "a"
    List(unordered '-')
      Item
        Paragraph "b"
    "#);
}

#[test]
fn absorbed_blank_lines_do_not_reach_the_item_body() {
    assert_snapshot!(outline(&["- a", "", "  ---"]), @r#"
    List(unordered '-')
      Item
        Heading(2) "a"
    "#);
}

#[test]
fn setext_underline_after_blank_inside_item() {
    assert_snapshot!(outline(&["- Title", "", "  ==="]), @r#"
    List(unordered '-')
      Item
        Heading(1) "Title"
    "#);
}

#[test]
fn indented_whitespace_lines_do_not_close_the_list() {
    assert_snapshot!(outline(&["- a", "  ", "  ", "  ", "  b"]), @r#"
    List(unordered '-')
      Item
        Paragraph "a"
        Paragraph "b"
    "#);
}

#[test]
fn blank_run_survives_indented_whitespace() {
    // the whitespace line neither counts nor ends the run
    assert_snapshot!(outline(&["- a", "", "  ", "", "", "- b"]), @r#"
    List(unordered '-')
      Item
        Paragraph "a"
    List(unordered '-')
      Item
        Paragraph "b"
    "#);
}

#[test]
fn trailing_blank_line_closes_the_list() {
    let doc = parse_document(&["- a", ""]);
    invariants(&doc);
    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn different_bullet_starts_a_new_list() {
    assert_snapshot!(outline(&["- a", "* b"]), @r#"
    List(unordered '-')
      Item
        Paragraph "a"
    List(unordered '*')
      Item
        Paragraph "b"
    "#);
}

#[test]
fn ordered_then_bullet_are_separate_lists() {
    assert_snapshot!(outline(&["1. a", "- b"]), @r#"
    List(ordered 1)
      Item
        Paragraph "a"
    List(unordered '-')
      Item
        Paragraph "b"
    "#);
}

#[test]
fn unindented_text_ends_the_list() {
    assert_snapshot!(outline(&["- a", "plain"]), @r#"
    List(unordered '-')
      Item
        Paragraph "a"
    Paragraph "plain"
    "#);
}

#[test]
fn empty_items_identify_to_empty_documents() {
    assert_snapshot!(outline(&["-", "-", "- x"]), @r#"
    List(unordered '-')
      Item
      Item
      Item
        Paragraph "x"
    "#);
}

#[test]
fn item_body_is_parsed_like_a_document() {
    assert_snapshot!(outline(&["- Title", "  ===", "- ```", "  # raw", "  ```", "-     code"]), @r##"
    List(unordered '-')
      Item
        Heading(1) "Title"
      Item
        Code(fence) ["# raw"]
      Item
        Code(indent) ["code"]
    "##);
}

#[test]
fn three_levels_of_nesting() {
    assert_snapshot!(outline(&["- one", "  - two", "    - three", "- four"]), @r#"
    List(unordered '-')
      Item
        Paragraph "one"
        List(unordered '-')
          Item
            Paragraph "two"
            List(unordered '-')
              Item
                Paragraph "three"
      Item
        Paragraph "four"
    "#);
}

// Issues

#[test]
fn unrepresentable_list_start_becomes_paragraph() {
    let parsed = parse_lines(&["99999999999999999999999. x"]);
    assert_snapshot!(normalize(&parsed.document), @r#"
    Paragraph "99999999999999999999999. x"
    "#);
    assert_eq!(
        parsed.issues,
        vec![ParseError::InvalidListStart {
            numeral: "99999999999999999999999".into(),
            line: 1,
        }]
    );
}

#[test]
fn nested_issues_reach_the_caller() {
    let parsed = parse_lines(&["- a", "  99999999999999999999999. x"]);
    assert_eq!(parsed.issues.len(), 1);
    assert!(matches!(
        &parsed.issues[0],
        ParseError::InvalidListStart { line: 2, .. }
    ));
}

#[test]
fn strict_parse_fails_on_first_issue() {
    assert!(try_parse_lines(&["1. ok"]).is_ok());
    let err = try_parse_lines(&["text", "18446744073709551616. x"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "ordered list start `18446744073709551616` on line 2 is out of range"
    );
}

#[test]
fn largest_representable_start_is_accepted() {
    let doc = parse_document(&["18446744073709551615. x"]);
    let [Block::List(list)] = doc.blocks.as_slice() else {
        panic!("expected one list, got {doc:?}");
    };
    assert_eq!(list.start(), Some(u64::MAX));
}

// Rendering properties

#[test]
fn rendering_twice_is_identical() {
    let doc = parse_document(&["# T", "p", "- a", "  ```", "  x", "  ```", "1. n"]);
    assert_eq!(doc.render_text(), doc.render_text());
    assert_eq!(doc.render_html(), doc.render_html());
}

#[rstest]
#[case(&["```", "a", "  b", "", "```"])]
#[case(&["    a", "      b", "    c"])]
fn code_text_is_lines_with_four_spaces(#[case] lines: &[&str]) {
    let doc = parse_document(lines);
    let [Block::Code(code)] = doc.blocks.as_slice() else {
        panic!("expected one code block, got {doc:?}");
    };
    let rendered = code.render_text();
    let inner = &rendered[1..rendered.len() - 1];
    assert_eq!(inner.len(), code.lines().len());
    for (out, line) in inner.iter().zip(code.lines()) {
        assert_eq!(out, &format!("    {line}"));
    }
}
