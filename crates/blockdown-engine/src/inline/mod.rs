//! Inline formatting of one rendered line into flat styled segments.
//!
//! No nesting and no AST: a line becomes a list of segments a text
//! renderer can style directly. Code spans are checked first and act as
//! raw zones, so emphasis markers inside backticks stay literal. Unclosed
//! delimiters are plain text.

use serde::Serialize;

/// One styled run of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Text(String),
    Bold(String),
    Italic(String),
    BoldItalic(String),
    Code(String),
}

/// Splits a line into styled segments.
///
/// `***x***` and `___x___` are bold-italic, `**x**` and `__x__` bold,
/// `*x*` and `_x_` italic, backticks code. Delimiters must match in
/// character and closing runs must be at least as long as the opener
/// demanded; anything that never closes is emitted as literal text.
pub fn format_line(text: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => {
                if let Some((segment, next)) = try_code_span(&chars, i) {
                    flush_text(&mut out, &mut plain);
                    out.push(segment);
                    i = next;
                    continue;
                }
                plain.push('`');
                i += 1;
            }
            c @ ('*' | '_') => {
                if let Some((segment, next)) = try_emphasis(&chars, i, c) {
                    flush_text(&mut out, &mut plain);
                    out.push(segment);
                    i = next;
                    continue;
                }
                plain.push(c);
                i += 1;
            }
            c => {
                plain.push(c);
                i += 1;
            }
        }
    }

    flush_text(&mut out, &mut plain);
    out
}

fn flush_text(out: &mut Vec<Segment>, plain: &mut String) {
    if !plain.is_empty() {
        out.push(Segment::Text(std::mem::take(plain)));
    }
}

/// Code span at `start`: the next backtick closes it. Empty spans stay
/// literal.
fn try_code_span(chars: &[char], start: usize) -> Option<(Segment, usize)> {
    let inner_start = start + 1;
    let close = find_char(chars, inner_start, '`')?;
    if close == inner_start {
        return None;
    }
    let inner: String = chars[inner_start..close].iter().collect();
    Some((Segment::Code(inner), close + 1))
}

/// Emphasis run at `start`: one, two or three delimiters map to italic,
/// bold and bold-italic. Returns `None` when no matching closer exists.
fn try_emphasis(chars: &[char], start: usize, delim: char) -> Option<(Segment, usize)> {
    let run = run_len(chars, start, delim).min(3);
    let inner_start = start + run;
    let close = find_run(chars, inner_start, delim, run)?;
    if close == inner_start {
        return None;
    }
    let inner: String = chars[inner_start..close].iter().collect();
    let segment = match run {
        3 => Segment::BoldItalic(inner),
        2 => Segment::Bold(inner),
        _ => Segment::Italic(inner),
    };
    Some((segment, close + run))
}

fn run_len(chars: &[char], from: usize, c: char) -> usize {
    chars[from..].iter().take_while(|&&x| x == c).count()
}

fn find_char(chars: &[char], from: usize, c: char) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i] == c)
}

/// First index at or after `from` where `len` consecutive `c`s begin.
fn find_run(chars: &[char], from: usize, c: char, len: usize) -> Option<usize> {
    let mut i = from;
    while i + len <= chars.len() {
        if chars[i..i + len].iter().all(|&x| x == c) {
            return Some(i);
        }
        i += 1;
    }
    None
}
