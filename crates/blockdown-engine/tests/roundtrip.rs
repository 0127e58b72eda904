use blockdown_engine::{Block, BlockKind, parse_markdown, serialize_blocks};
use pretty_assertions::assert_eq;
use rstest::rstest;

const CANONICAL_DOCUMENT: &str = "# Notes\n\nIntro paragraph with **bold** text.\n\n- [ ] task one\n- [ ] task two\n\n```py\nprint(1)\n```\n\n> somebody said this\n\n---\n\n| key | value |\n| --- | ---: |\n| a | 1 |";

/// Documents already in canonical form survive a parse/serialize cycle
/// byte for byte.
#[rstest]
#[case("# Title\n\nbody text")]
#[case("a paragraph\nspanning two lines")]
#[case("```rust\nfn main() {}\n```")]
#[case("> a\n> b")]
#[case(">> nested quote")]
#[case("- one\n- two\n- three")]
#[case("1. first\n2. second")]
#[case("  - nested item")]
#[case("- [ ] milk\n- [x] bread")]
#[case("---")]
#[case("![alt](https://example.com/p.png \"Caption\")")]
#[case("![](img.png)")]
#[case("| h1 | h2 |\n| --- | ---: |\n| a | b |")]
#[case("| h |\n| --- |")]
#[case(CANONICAL_DOCUMENT)]
fn canonical_documents_round_trip_byte_exact(#[case] input: &str) {
    assert_eq!(serialize_blocks(&parse_markdown(input)), input);
}

/// Non-canonical input normalizes in one pass: parsing the serializer's
/// output and serializing again changes nothing, and the block sequence
/// (kind and content) is the same both times.
#[rstest]
#[case("one\n\ntwo\n\nthree")]
#[case("hello\n")]
#[case("#not a heading")]
#[case("####### seven hashes")]
#[case("***")]
#[case("___")]
#[case("1. a\n1. b\n1. c")]
#[case("```\ncode\n```")]
#[case("```rust\nlet x = 1;")]
#[case("> a\n>> b\n> c")]
#[case("- a\n  - b\n    - c\n- d")]
#[case("- [ ] a\n- [x] b\n- [ ] c")]
#[case("- plain\n- [ ] task")]
#[case("| a | b |\n| --- | --- |\n| 1 | 2 |\nafter")]
#[case("| not | a table |")]
#[case("a\n\n\n\n\nb")]
#[case("```\n# heading\n- list\n> quote\n```")]
#[case("   \n\t\n")]
#[case(CANONICAL_DOCUMENT)]
fn serialization_stabilizes_after_one_pass(#[case] input: &str) {
    let first = parse_markdown(input);
    let once = serialize_blocks(&first);

    let second = parse_markdown(&once);
    let twice = serialize_blocks(&second);

    assert_eq!(twice, once);
    assert_eq!(shapes(&second), shapes(&first));
}

#[test]
fn mixed_document_parses_in_document_order() {
    let blocks = parse_markdown(CANONICAL_DOCUMENT);
    let kinds: Vec<&str> = blocks.iter().map(|b| b.kind.name()).collect();
    assert_eq!(
        kinds,
        vec![
            "heading",
            "paragraph",
            "checklist",
            "code",
            "quote",
            "divider",
            "table"
        ]
    );
}

/// Markers live in block metadata, never in content.
#[test]
fn parsed_content_carries_no_structural_syntax() {
    let blocks = parse_markdown(CANONICAL_DOCUMENT);
    assert_eq!(blocks[0].content, "Notes");
    assert_eq!(blocks[2].content, "task one\ntask two");
    assert_eq!(blocks[3].content, "print(1)");
    assert_eq!(blocks[4].content, "somebody said this");
    assert_eq!(blocks[5].content, "");
}

#[test]
fn blank_input_round_trips_through_the_empty_paragraph() {
    let blocks = parse_markdown("");
    assert_eq!(shapes(&blocks), vec![("paragraph", String::new())]);
    assert_eq!(serialize_blocks(&blocks), "");
}

/// Divider variants normalize to the canonical dash form.
#[test]
fn divider_forms_normalize_to_dashes() {
    assert_eq!(serialize_blocks(&parse_markdown("***")), "---");
    assert_eq!(serialize_blocks(&parse_markdown("___")), "---");
}

/// An unterminated fence gains its closing fence on the way out.
#[test]
fn unterminated_fence_is_closed_by_serialization() {
    let out = serialize_blocks(&parse_markdown("```sh\necho hi"));
    assert_eq!(out, "```sh\necho hi\n```");
}

/// Ordered lists renumber from one regardless of the input numbering.
#[test]
fn ordered_lists_renumber_sequentially() {
    let out = serialize_blocks(&parse_markdown("7. a\n7. b\n7. c"));
    assert_eq!(out, "1. a\n2. b\n3. c");
}

#[test]
fn every_block_kind_survives_reparsing() {
    let blocks = parse_markdown(CANONICAL_DOCUMENT);
    let reparsed = parse_markdown(&serialize_blocks(&blocks));
    assert_eq!(reparsed.len(), blocks.len());
    for (before, after) in blocks.iter().zip(&reparsed) {
        assert_eq!(after.kind, before.kind);
        assert_eq!(after.content, before.content);
    }
}

fn shapes(blocks: &[Block]) -> Vec<(&'static str, String)> {
    blocks
        .iter()
        .map(|b| (b.kind.name(), b.content.clone()))
        .collect()
}
