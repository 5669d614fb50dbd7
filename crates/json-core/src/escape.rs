//! Escape codec for JSON string literals.
//!
//! [`decode`] turns the contents of a string literal (without the enclosing
//! quotes) into raw text; [`encode`] goes the other way. Both return the
//! input borrowed when there is nothing to rewrite.

use std::borrow::Cow;

/// Decode the escape sequences in the contents of a JSON string literal.
///
/// Recognises `\\`, `\"`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t` and `\uXXXX`.
/// A `\uXXXX` high surrogate followed by a `\uXXXX` low surrogate combines
/// into one character; a lone surrogate becomes U+FFFD. Any other backslash
/// sequence is copied through unchanged.
///
/// ```
/// use json_core::escape::decode;
///
/// assert_eq!(decode(r"aap\u0026noot"), "aap&noot");
/// assert_eq!(decode(r"tab\there"), "tab\there");
/// ```
pub fn decode(s: &str) -> Cow<'_, str> {
    if !s.contains('\\') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let consumed = decode_sequence(rest, &mut out);
        rest = &rest[consumed..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode the escape sequence at the start of `s` (which begins with a
/// backslash) into `out`, returning the number of bytes consumed.
fn decode_sequence(s: &str, out: &mut String) -> usize {
    let bytes = s.as_bytes();
    let Some(&marker) = bytes.get(1) else {
        out.push('\\');
        return 1;
    };
    let simple = match marker {
        b'\\' => Some('\\'),
        b'"' => Some('"'),
        b'/' => Some('/'),
        b'b' => Some('\u{0008}'),
        b'f' => Some('\u{000C}'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        _ => None,
    };
    if let Some(c) = simple {
        out.push(c);
        return 2;
    }

    if marker == b'u' {
        if let Some(unit) = hex_unit(s, 2) {
            if (0xD800..0xDC00).contains(&unit) {
                // High surrogate: only meaningful together with a following low one.
                let low = match bytes.get(6..8) {
                    Some(b"\\u") => hex_unit(s, 8).filter(|u| (0xDC00..0xE000).contains(u)),
                    _ => None,
                };
                if let Some(low) = low {
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                    return 12;
                }
            }
            out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
            return 6;
        }
    }

    // Unrecognised: keep the backslash and let the next character be copied as text.
    out.push('\\');
    1
}

/// Parse four hex digits at `s[at..at + 4]` as a UTF-16 code unit.
fn hex_unit(s: &str, at: usize) -> Option<u32> {
    let digits = s.get(at..at + 4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Escape raw text for use inside a JSON string literal.
///
/// `\`, `"`, backspace, form feed, newline, carriage return and tab use their
/// short escapes; every other character below U+0020 becomes `\u00XX`.
/// Everything else, including `/` and non-ASCII text, passes through.
///
/// ```
/// use json_core::escape::encode;
///
/// assert_eq!(encode("say \"hi\"\n"), r#"say \"hi\"\n"#);
/// assert_eq!(encode("\u{1f}"), r"\u001f");
/// ```
pub fn encode(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(needs_escape) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 8);
    out.push_str(&s[..first]);
    for ch in s[first..].chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < ' ' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    c == '\\' || c == '"' || c < ' '
}

/// Render `s` as a complete JSON string literal, quotes included.
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "\"\"".to_string();
    }
    let escaped = encode(s);
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push('"');
    out.push_str(&escaped);
    out.push('"');
    out
}
