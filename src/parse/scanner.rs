//! Depth-tracking helpers over raw condition text.
//!
//! All tokens searched for are ASCII, so byte offsets returned here are always
//! valid char boundaries.

/// Whether `text` is one parenthesized group: it starts with `(` and the
/// matching `)` of that first paren is the final character.
///
/// `((a) and (b))` is one group; `(a) and (b)` is two.
#[must_use]
pub fn has_matching_outer_parens(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return false;
    }
    let mut depth = 0_usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
                if depth == 0 {
                    return i == bytes.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Every `)` closes an earlier `(` and nothing is left open.
pub(crate) fn is_balanced(text: &str) -> bool {
    let mut depth = 0_usize;
    for b in text.bytes() {
        match b {
            b'(' => depth += 1,
            b')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

/// Byte offset of the first occurrence of `token` outside any parentheses.
pub(crate) fn find_top_level(text: &str, token: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let needle = token.as_bytes();
    let mut depth = 0_usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && bytes[i..].starts_with(needle) => return Some(i),
            _ => {}
        }
    }
    None
}
