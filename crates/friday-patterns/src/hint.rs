//! Placeholder type hints and the regex fragments they expand to.

/// Hint naming a quoted string argument whose quotes are stripped on capture.
pub(crate) const STRING_HINT: &str = "string";

/// Translate a placeholder type hint into a regular-expression fragment.
///
/// Unknown hints fall back to a lazy match so patterns stay usable with
/// descriptive hints such as `{day:Weekday}`.
///
/// # Examples
/// ```
/// use friday_patterns::get_type_pattern;
/// assert_eq!(get_type_pattern(Some("u32")), r"\d+");
/// assert_eq!(get_type_pattern(Some("string")), r#""[^"]*"|'[^']*'"#);
/// assert_eq!(get_type_pattern(None), ".+?");
/// ```
#[must_use]
pub fn get_type_pattern(type_hint: Option<&str>) -> &'static str {
    match type_hint {
        Some("u8" | "u16" | "u32" | "u64" | "u128" | "usize") => r"\d+",
        Some("i8" | "i16" | "i32" | "i64" | "i128" | "isize") => r"[+-]?\d+",
        Some("f32" | "f64") => {
            r"(?i:(?:[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?|nan|inf|infinity))"
        }
        Some(STRING_HINT) => r#""[^"]*"|'[^']*'"#,
        _ => r".+?",
    }
}

/// Whether the hint captures a quoted string.
#[must_use]
pub fn is_string_hint(type_hint: Option<&str>) -> bool {
    type_hint == Some(STRING_HINT)
}
