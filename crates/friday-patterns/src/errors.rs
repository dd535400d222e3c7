//! Error types raised while lexing and compiling step patterns.

use std::fmt;
use thiserror::Error;

/// Where and why a placeholder failed to parse.
///
/// # Examples
/// ```
/// use friday_patterns::PlaceholderErrorInfo;
/// let info = PlaceholderErrorInfo::new("invalid placeholder", 14, Some("expected".into()));
/// assert_eq!(info.placeholder.as_deref(), Some("expected"));
/// assert_eq!(info.position, 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderErrorInfo {
    /// Short description of the failure.
    pub message: &'static str,
    /// Zero-based byte offset of the offending placeholder.
    pub position: usize,
    /// Placeholder name, when the lexer got far enough to read it.
    pub placeholder: Option<String>,
}

impl PlaceholderErrorInfo {
    /// Describe a placeholder failure.
    #[must_use]
    pub fn new(message: &'static str, position: usize, placeholder: Option<String>) -> Self {
        Self {
            message,
            position,
            placeholder,
        }
    }
}

impl fmt::Display for PlaceholderErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.placeholder {
            Some(name) => write!(
                f,
                "{} for placeholder `{}` at byte {} (zero-based)",
                self.message, name, self.position
            ),
            None => write!(f, "{} at byte {} (zero-based)", self.message, self.position),
        }
    }
}

/// Errors surfaced while turning a step pattern into a regular expression.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A placeholder or brace in the pattern is malformed.
    #[error("{0}")]
    Placeholder(PlaceholderErrorInfo),
    /// The generated regular expression was rejected by the regex engine.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub(crate) fn placeholder_error(
    message: &'static str,
    position: usize,
    placeholder: Option<String>,
) -> PatternError {
    PatternError::Placeholder(PlaceholderErrorInfo::new(message, position, placeholder))
}
