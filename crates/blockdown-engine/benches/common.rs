// Each bench file compiles on its own, so rustc flags helpers only used
// by a sibling bench as dead code.
#[allow(dead_code)]
pub fn generate_note_content(size: usize) -> String {
    let base = "# Meeting notes\n\nDecisions and follow-ups from the weekly sync.\n\n- [ ] send the summary\n- [ ] book the room\n- [x] close old tickets\n\n## Details\n\n> longer discussion captured verbatim\n\n- first point\n  - supporting detail\n- second point\n\n```rust\nfn follow_up() -> bool {\n    true\n}\n```\n\n| owner | task |\n| --- | --- |\n| ana | summary |\n| ben | room |\n\n---\n\n";
    base.repeat(size)
}

/// Prefixes of a checklist line, one per typed character, the way the
/// live classifier sees text arrive.
#[allow(dead_code)]
pub fn keystroke_sequence() -> Vec<String> {
    let line = "- [x] pick up the laundry";
    line.char_indices()
        .map(|(i, c)| line[..i + c.len_utf8()].to_string())
        .collect()
}
