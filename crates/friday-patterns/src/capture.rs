//! Regex capture helpers used when binding step text to a pattern.

use regex::Regex;

use crate::hint::is_string_hint;

/// Strip one matching pair of surrounding single or double quotes.
///
/// Text without a matching pair is returned unchanged.
///
/// # Examples
/// ```
/// use friday_patterns::unquote;
/// assert_eq!(unquote("\"TGIF\""), "TGIF");
/// assert_eq!(unquote("'Nope'"), "Nope");
/// assert_eq!(unquote("\"mismatched'"), "\"mismatched'");
/// ```
#[must_use]
pub fn unquote(value: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(value)
}

/// Extract the placeholder captures when `text` matches `re`, returning
/// `None` otherwise.
///
/// Group 0 (the whole match) is skipped. Groups that did not participate
/// yield empty strings so positions stay aligned with `hints`, which gives
/// the type hint for each group in order; `string`-hinted values are
/// unquoted.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use friday_patterns::extract_captured_values;
/// let regex = Regex::new(r#"^today is (.+?) and I hear ("[^"]*")$"#)
///     .expect("example regex is valid");
/// let values = extract_captured_values(
///     &regex,
///     "today is Friday and I hear \"TGIF\"",
///     &[None, Some("string")],
/// );
/// assert_eq!(values, Some(vec!["Friday".to_string(), "TGIF".to_string()]));
/// ```
#[must_use]
pub fn extract_captured_values(
    re: &Regex,
    text: &str,
    hints: &[Option<&str>],
) -> Option<Vec<String>> {
    let caps = re.captures(text)?;
    let values = caps
        .iter()
        .skip(1)
        .enumerate()
        .map(|(position, capture)| {
            let raw = capture.map_or("", |m| m.as_str());
            let hint = hints.get(position).copied().flatten();
            if is_string_hint(hint) {
                unquote(raw).to_string()
            } else {
                raw.to_string()
            }
        })
        .collect();
    Some(values)
}
