//! Placeholder parsing used by the lexer.

use crate::errors::{PatternError, placeholder_error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceholderSpec {
    pub name: String,
    pub hint: Option<String>,
    pub start: usize,
    /// Byte offset just past the closing brace.
    pub end: usize,
}

fn find_closing_brace(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &b) in bytes.get(from..)?.iter().enumerate() {
        match b {
            b'{' => depth = depth.saturating_add(1),
            b'}' if depth == 0 => return Some(from + offset),
            b'}' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn skip_whitespace(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_whitespace) {
        index += 1;
    }
    index
}

/// Parse the placeholder opening at byte `start` of `pattern`.
///
/// Placeholder names are ASCII identifiers. Braces are ASCII, so byte offsets
/// returned here always fall on character boundaries.
pub(crate) fn parse_placeholder(pattern: &str, start: usize) -> Result<PlaceholderSpec, PatternError> {
    let bytes = pattern.as_bytes();
    let invalid = |name: &str| {
        placeholder_error(
            "invalid placeholder in step pattern",
            start,
            Some(name.to_string()),
        )
    };
    let unclosed = |name: &str| {
        placeholder_error(
            "missing closing '}' for placeholder",
            start,
            Some(name.to_string()),
        )
    };

    let name_start = start + 1;
    let mut index = name_start;
    while bytes
        .get(index)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    {
        index += 1;
    }
    let name = pattern.get(name_start..index).unwrap_or_default().to_string();

    if bytes.get(index).is_some_and(u8::is_ascii_whitespace) {
        let after = skip_whitespace(bytes, index);
        if matches!(bytes.get(after), Some(b':' | b'}')) {
            return Err(invalid(&name));
        }
        index = after;
    }

    let mut hint = None;
    if bytes.get(index) == Some(&b':') {
        let hint_start = index + 1;
        let hint_end = find_closing_brace(bytes, hint_start).ok_or_else(|| unclosed(&name))?;
        let raw = pattern.get(hint_start..hint_end).ok_or_else(|| invalid(&name))?;
        if raw.is_empty() || raw.contains(|c: char| c.is_whitespace() || c == '{' || c == '}') {
            return Err(invalid(&name));
        }
        hint = Some(raw.to_string());
        index = hint_end;
    } else {
        index = find_closing_brace(bytes, index).ok_or_else(|| unclosed(&name))?;
    }

    Ok(PlaceholderSpec {
        name,
        hint,
        start,
        end: index + 1,
    })
}
