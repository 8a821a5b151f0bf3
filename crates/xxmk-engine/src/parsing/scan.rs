//! Byte-level scanning helpers shared by the matchers.
//!
//! All delimiters are ASCII, so byte indices returned here always fall on
//! character boundaries and can be used to slice the input directly.

const ESCAPE: u8 = b'\\';

/// Splits off the first line of `s`.
///
/// Returns the line without its newline and the number of bytes the line
/// occupies including the newline, if any.
pub fn split_line(s: &str) -> (&str, usize) {
    match s.find('\n') {
        Some(i) => (&s[..i], i + 1),
        None => (s, s.len()),
    }
}

/// Finds the first `target` at or after `from` that is not escaped by a
/// backslash, without crossing a newline.
pub fn find_unescaped_in_line(s: &str, from: usize, target: u8) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        if b == b'\n' {
            return None;
        }
        if b == target && !escaped {
            return Some(i);
        }
        escaped = b == ESCAPE && !escaped;
    }
    None
}

/// Given `s` starting with `[`, finds the `]` closing it on the same line.
/// Nested unescaped brackets must balance.
pub fn matching_bracket(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'[') {
        return None;
    }
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        match b {
            b'\n' => return None,
            b'[' if !escaped => depth += 1,
            b']' if !escaped => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
        escaped = b == ESCAPE && !escaped;
    }
    None
}

/// Number of leading bytes of `s` equal to `b`.
pub fn count_leading(s: &str, b: u8) -> usize {
    s.bytes().take_while(|&x| x == b).count()
}
