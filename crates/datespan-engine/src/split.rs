//! Tokenization of an expression into signed fragments.

/// Characters that separate tokens. `+` and `-` stay attached to the token
/// that follows them; spaces are discarded.
pub(crate) const SPLITTERS: [char; 3] = [' ', '+', '-'];

/// Splits an expression into ordered signed tokens.
///
/// `"1D -2h 30m"` and `"+1D-2h+30m"` both normalize to
/// `["+1D", "-2h", "+30m"]`, so later stages never see separator style. A
/// fragment that does not already carry a sign (and is not the literal `Z`)
/// receives an implicit leading `+`. Empty fragments are dropped. Malformed
/// fragments pass through unchecked; validation belongs to the modifier and
/// offset parsers.
pub(crate) fn split_tokens(s: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (idx, ch) in s.char_indices() {
        if SPLITTERS.contains(&ch) {
            push_fragment(&mut tokens, &s[start..idx]);
            // A sign begins the next fragment; a space is consumed.
            start = if ch == ' ' { idx + 1 } else { idx };
        }
    }
    push_fragment(&mut tokens, &s[start..]);
    tokens
}

fn push_fragment(tokens: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    if fragment == "Z" || fragment.starts_with(['+', '-']) {
        tokens.push(fragment.to_string());
    } else {
        tokens.push(format!("+{fragment}"));
    }
}
