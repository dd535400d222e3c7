//! Convert lexed tokens into anchored regular-expression sources.

use crate::errors::{PatternError, placeholder_error};
use crate::hint::get_type_pattern;

use super::Placeholder;
use super::lexer::{Token, lex_pattern};

/// Regex source plus the placeholders it captures, in capture-group order.
pub(crate) struct RegexSource {
    pub source: String,
    pub placeholders: Vec<Placeholder>,
}

pub(crate) fn build_regex_source(pat: &str) -> Result<RegexSource, PatternError> {
    let tokens = lex_pattern(pat)?;
    let mut source = String::with_capacity(pat.len().saturating_mul(2) + 2);
    let mut placeholders = Vec::new();
    source.push('^');
    let mut stray_depth = 0usize;

    for token in tokens {
        match token {
            Token::Literal(text) => source.push_str(&regex::escape(&text)),
            Token::Placeholder { name, hint, .. } => {
                source.push('(');
                source.push_str(get_type_pattern(hint.as_deref()));
                source.push(')');
                placeholders.push(Placeholder { name, hint });
            }
            Token::OpenBrace { .. } => {
                stray_depth = stray_depth.saturating_add(1);
                source.push_str(&regex::escape("{"));
            }
            Token::CloseBrace { index } => {
                if stray_depth == 0 {
                    return Err(placeholder_error(
                        "unmatched closing brace '}' in step pattern",
                        index,
                        None,
                    ));
                }
                stray_depth -= 1;
                source.push_str(&regex::escape("}"));
            }
        }
    }

    if stray_depth != 0 {
        return Err(placeholder_error(
            "unbalanced braces in step pattern",
            pat.len(),
            None,
        ));
    }

    source.push('$');
    Ok(RegexSource {
        source,
        placeholders,
    })
}

/// Build an anchored regular-expression source from a step pattern.
///
/// # Errors
/// Returns [`PatternError`] when the pattern has malformed placeholders or
/// unbalanced braces.
///
/// # Examples
/// ```
/// use friday_patterns::build_regex_from_pattern;
/// let regex = build_regex_from_pattern("today is {day}")
///     .expect("example pattern is valid");
/// assert_eq!(regex, r"^today is (.+?)$");
/// ```
pub fn build_regex_from_pattern(pat: &str) -> Result<String, PatternError> {
    build_regex_source(pat).map(|built| built.source)
}
