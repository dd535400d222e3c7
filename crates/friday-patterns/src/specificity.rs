//! Specificity scores used to choose between overlapping step patterns.
//!
//! A literal binding such as `today is Friday` and a parameterised one such
//! as `today is {day}` can both match the same step text. The registry keeps
//! the match with the highest score.

use crate::PatternError;
use crate::pattern::{Token, lex_pattern};
use std::cmp::Ordering;

/// Specificity score for a step pattern.
///
/// Patterns compare by literal character count (more wins), then placeholder
/// count (fewer wins), then typed placeholder count (more wins).
///
/// # Examples
///
/// ```
/// use friday_patterns::SpecificityScore;
///
/// let literal = SpecificityScore::calculate("today is Friday").expect("valid pattern");
/// let generic = SpecificityScore::calculate("today is {day}").expect("valid pattern");
/// assert!(literal > generic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecificityScore {
    /// Literal characters in the pattern; stray braces count as literals.
    pub literal_chars: usize,
    /// Number of placeholders.
    pub placeholder_count: usize,
    /// Number of placeholders carrying a type hint.
    pub typed_placeholder_count: usize,
}

impl SpecificityScore {
    /// Calculate the specificity score for a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the pattern contains invalid syntax.
    pub fn calculate(pattern: &str) -> Result<Self, PatternError> {
        let score = lex_pattern(pattern)?
            .into_iter()
            .fold(Self::default(), |mut score, token| {
                match token {
                    Token::Literal(text) => score.literal_chars += text.chars().count(),
                    Token::Placeholder { hint, .. } => {
                        score.placeholder_count += 1;
                        if hint.is_some() {
                            score.typed_placeholder_count += 1;
                        }
                    }
                    Token::OpenBrace { .. } | Token::CloseBrace { .. } => score.literal_chars += 1,
                }
                score
            });
        Ok(score)
    }
}

impl Ord for SpecificityScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.literal_chars
            .cmp(&other.literal_chars)
            .then_with(|| other.placeholder_count.cmp(&self.placeholder_count))
            .then_with(|| {
                self.typed_placeholder_count
                    .cmp(&other.typed_placeholder_count)
            })
    }
}

impl PartialOrd for SpecificityScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(pattern: &str) -> SpecificityScore {
        match SpecificityScore::calculate(pattern) {
            Ok(s) => s,
            Err(e) => panic!("pattern {pattern:?} should score: {e}"),
        }
    }

    #[test]
    fn literal_binding_beats_parameterised_binding() {
        let literal = score("today is Friday");
        let generic = score("today is {day}");
        assert!(literal > generic);
        assert_eq!(literal.placeholder_count, 0);
        assert_eq!(generic.placeholder_count, 1);
    }

    #[test]
    fn fewer_placeholders_win_with_equal_literals() {
        let a = score("ab {x}");
        let b = score("a {x} {y}");
        assert_eq!(a.literal_chars, b.literal_chars);
        assert!(a > b);
    }

    #[test]
    fn typed_placeholder_breaks_ties() {
        let typed = score("I should be told {expected:string}");
        let untyped = score("I should be told {expected}");
        assert!(typed > untyped);
    }

    #[test]
    fn braces_count_as_literal_characters() {
        assert_eq!(score("{ literal }").literal_chars, 11);
        assert_eq!(score("value is {{x}}").literal_chars, 12);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(score("café {value}").literal_chars, 5);
    }

    #[test]
    fn empty_pattern_scores_zero() {
        assert_eq!(score(""), SpecificityScore::default());
    }
}
