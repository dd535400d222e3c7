//! Step-pattern lexing and compilation.

mod compiler;
mod lexer;
mod placeholder;

use crate::capture::extract_captured_values;
use crate::errors::PatternError;
use crate::specificity::SpecificityScore;
use regex::Regex;

pub(crate) use lexer::{Token, lex_pattern};

pub use compiler::build_regex_from_pattern;

/// Placeholder declared in a step pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Name written between the braces.
    pub name: String,
    /// Optional type hint following the colon.
    pub hint: Option<String>,
}

/// A step pattern with its regex compiled and its placeholders recorded.
///
/// # Examples
/// ```
/// use friday_patterns::compile_pattern;
///
/// let pattern = compile_pattern("I should be told {expected:string}")
///     .expect("example pattern is valid");
/// assert_eq!(
///     pattern.captures("I should be told \"TGIF\""),
///     Some(vec!["TGIF".to_string()])
/// );
/// assert!(pattern.captures("I should be told TGIF").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    text: String,
    regex: Regex,
    placeholders: Vec<Placeholder>,
    specificity: SpecificityScore,
}

impl CompiledPattern {
    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Placeholders in capture order.
    #[must_use]
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Whether the pattern contains no placeholders.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Specificity used to rank this pattern against other matches.
    #[must_use]
    pub fn specificity(&self) -> SpecificityScore {
        self.specificity
    }

    /// Whether `text` matches the pattern.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Extract placeholder values from `text`, or `None` when it does not
    /// match. Values for `string`-hinted placeholders have their quotes
    /// removed.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        let hints: Vec<Option<&str>> = self
            .placeholders
            .iter()
            .map(|p| p.hint.as_deref())
            .collect();
        extract_captured_values(&self.regex, text, &hints)
    }
}

/// Compile a step pattern into a [`CompiledPattern`].
///
/// # Errors
/// Returns [`PatternError`] when placeholder parsing fails or the generated
/// regex source cannot be compiled.
pub fn compile_pattern(pat: &str) -> Result<CompiledPattern, PatternError> {
    let built = compiler::build_regex_source(pat)?;
    let regex = Regex::new(&built.source)?;
    let specificity = SpecificityScore::calculate(pat)?;
    Ok(CompiledPattern {
        text: pat.to_string(),
        regex,
        placeholders: built.placeholders,
        specificity,
    })
}

/// Build and compile a regular expression from a step pattern.
///
/// # Errors
/// Returns [`PatternError`] when placeholder parsing fails or the generated
/// regex source cannot be compiled.
pub fn compile_regex_from_pattern(pat: &str) -> Result<Regex, PatternError> {
    let source = build_regex_from_pattern(pat)?;
    Regex::new(&source).map_err(PatternError::from)
}
