// crates/core/src/tokenizer.rs

/// Split an in-memory buffer into whitespace-delimited tokens.
///
/// Any run of whitespace separates two tokens; there is no quoting or escaping.
/// The iterator is lazy and borrows from `text`.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Strip non-alphabetic characters from the start and end of a token.
///
/// Only ASCII letters count as alphabetic. Interior characters are kept
/// verbatim, so `"don't!"` becomes `"don't"` and `"123abc456"` becomes `"abc"`.
/// A token without any letter scrubs to the empty string.
///
/// ASCII bytes never occur inside a multi-byte UTF-8 sequence, so the
/// returned slice always falls on character boundaries.
#[must_use]
pub fn scrub_word(token: &str) -> &str {
    let bytes = token.as_bytes();
    let Some(first) = bytes.iter().position(u8::is_ascii_alphabetic) else {
        return "";
    };
    // A first letter exists, so a last one does too.
    let last = bytes.iter().rposition(u8::is_ascii_alphabetic).unwrap_or(first);
    &token[first..=last]
}
