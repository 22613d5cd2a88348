//! Code point level encoding of the HTML and escape representations.
//!
//! The HTML form is a run of `&#x<hex>;` entities, the escape form a run of
//! `\UXXXXXXXX` or `\uXXXX` escapes. Both encode one code point per unit.

/// Emoji presentation selector
pub const VARIATION_SELECTOR: char = '\u{fe0f}';

/// HTML entity encoding of the variation selector
pub const VARIATION_SELECTOR_HTML: &str = "&#xfe0f;";

/// Escape encoding of the variation selector
pub const VARIATION_SELECTOR_ESCAPE: &str = "\\uFE0F";

/// Decode a complete run of HTML hex entities.
///
/// Returns `None` unless the whole input is one or more well-formed entities.
pub fn codepoints_of_html(html: &str) -> Option<Vec<char>> {
    let mut rest = html;
    let mut chars = Vec::new();
    while !rest.is_empty() {
        let body = rest.strip_prefix("&#x").or_else(|| rest.strip_prefix("&#X"))?;
        let end = body.find(';')?;
        chars.push(parse_hex_char(&body[..end])?);
        rest = &body[end + 1..];
    }
    if chars.is_empty() {
        None
    } else {
        Some(chars)
    }
}

/// Decode a complete run of `\U` / `\u` escapes.
pub fn codepoints_of_escape(escape: &str) -> Option<Vec<char>> {
    let mut rest = escape;
    let mut chars = Vec::new();
    while !rest.is_empty() {
        let (digits, tail) = if let Some(body) = rest.strip_prefix("\\U") {
            split_checked(body, 8)?
        } else if let Some(body) = rest.strip_prefix("\\u") {
            split_checked(body, 4)?
        } else {
            return None;
        };
        chars.push(parse_hex_char(digits)?);
        rest = tail;
    }
    if chars.is_empty() {
        None
    } else {
        Some(chars)
    }
}

/// Encode code points as lowercase HTML hex entities
pub fn html_entity_for(chars: &[char]) -> String {
    chars.iter().map(|&c| format!("&#x{:x};", u32::from(c))).collect()
}

/// Encode code points as escapes: `\uFE0F` for the variation selector,
/// `\U` with eight upper-case digits for everything else.
pub fn escape_sequence_for(chars: &[char]) -> String {
    chars
        .iter()
        .map(|&c| {
            if c == VARIATION_SELECTOR {
                VARIATION_SELECTOR_ESCAPE.to_string()
            } else {
                format!("\\U{:08X}", u32::from(c))
            }
        })
        .collect()
}

fn split_checked(s: &str, len: usize) -> Option<(&str, &str)> {
    if s.len() < len || !s.is_char_boundary(len) {
        return None;
    }
    Some(s.split_at(len))
}

fn parse_hex_char(digits: &str) -> Option<char> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_decoding() {
        assert_eq!(codepoints_of_html("&#x1f604;"), Some(vec!['\u{1f604}']));
        assert_eq!(
            codepoints_of_html("&#x1f399;&#xfe0f;"),
            Some(vec!['\u{1f399}', VARIATION_SELECTOR])
        );
        assert_eq!(codepoints_of_html("&#x1F604;"), Some(vec!['\u{1f604}']));
    }

    #[test]
    fn test_html_decoding_rejects_garbage() {
        assert_eq!(codepoints_of_html(""), None);
        assert_eq!(codepoints_of_html("&#x1f604"), None);
        assert_eq!(codepoints_of_html("&#x;"), None);
        assert_eq!(codepoints_of_html("&#xzz;"), None);
        assert_eq!(codepoints_of_html("&#x1f604; "), None);
        // surrogate
        assert_eq!(codepoints_of_html("&#xd800;"), None);
    }

    #[test]
    fn test_escape_decoding() {
        assert_eq!(codepoints_of_escape("\\U0001F604"), Some(vec!['\u{1f604}']));
        assert_eq!(
            codepoints_of_escape("\\U00002764\\uFE0F"),
            Some(vec!['\u{2764}', VARIATION_SELECTOR])
        );
        assert_eq!(codepoints_of_escape("\\U0001F60"), None);
        assert_eq!(codepoints_of_escape("U0001F604"), None);
        assert_eq!(codepoints_of_escape(""), None);
    }

    #[test]
    fn test_encoding() {
        let chars = ['\u{1f399}', VARIATION_SELECTOR];
        assert_eq!(html_entity_for(&chars), "&#x1f399;&#xfe0f;");
        assert_eq!(escape_sequence_for(&chars), "\\U0001F399\\uFE0F");
        assert_eq!(escape_sequence_for(&['\u{a9}']), "\\U000000A9");
    }
}
