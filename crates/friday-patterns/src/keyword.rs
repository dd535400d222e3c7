//! Step keywords shared by the registry, the feature loader and the runner.

use gherkin::StepType;
use std::fmt;
use std::str::FromStr;

/// Keyword used to categorise a step definition or a scenario step.
///
/// `And` and `But` only appear in feature text; they are resolved against the
/// preceding primary keyword with [`resolve`](Self::resolve) before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Establishes the scenario's starting state.
    Given,
    /// Performs the action under test.
    When,
    /// Checks the observable outcome.
    Then,
    /// Continues the previous keyword.
    And,
    /// Continues the previous keyword with a contrasting condition.
    But,
}

impl StepKeyword {
    /// Return the keyword as written in feature files.
    ///
    /// # Examples
    ///
    /// ```
    /// use friday_patterns::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::But.as_str(), "But");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Whether the keyword is a conjunction (`And`/`But`).
    #[must_use]
    pub const fn is_conjunction(&self) -> bool {
        matches!(self, Self::And | Self::But)
    }

    /// Resolve conjunctions to the keyword of the previous primary step.
    ///
    /// Primary keywords update `prev` and are returned unchanged. A
    /// conjunction with no previous step resolves to `Given`.
    ///
    /// # Examples
    ///
    /// ```
    /// use friday_patterns::StepKeyword;
    ///
    /// let mut prev = None;
    /// assert_eq!(StepKeyword::When.resolve(&mut prev), StepKeyword::When);
    /// assert_eq!(StepKeyword::And.resolve(&mut prev), StepKeyword::When);
    /// ```
    #[must_use]
    pub fn resolve(self, prev: &mut Option<Self>) -> Self {
        if self.is_conjunction() {
            prev.unwrap_or(Self::Given)
        } else {
            *prev = Some(self);
            self
        }
    }

    /// Map a parsed Gherkin step to a keyword.
    ///
    /// The textual keyword is checked first so `And`/`But` survive parsing;
    /// otherwise the typed [`StepType`] decides.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedStepType`] when the parser reports a step type
    /// this crate does not know.
    pub fn from_gherkin(keyword: &str, ty: StepType) -> Result<Self, UnsupportedStepType> {
        match keyword.parse::<Self>() {
            Ok(kw) if kw.is_conjunction() => Ok(kw),
            _ => Self::try_from(ty),
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a step keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        [Self::Given, Self::When, Self::Then, Self::And, Self::But]
            .into_iter()
            .find(|kw| trimmed.eq_ignore_ascii_case(kw.as_str()))
            .ok_or_else(|| StepKeywordParseError(trimmed.to_string()))
    }
}

/// Error raised when a Gherkin [`StepType`] has no matching [`StepKeyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedStepType(pub StepType);

impl fmt::Display for UnsupportedStepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported step type: {:?}", self.0)
    }
}

impl std::error::Error for UnsupportedStepType {}

impl TryFrom<StepType> for StepKeyword {
    type Error = UnsupportedStepType;

    fn try_from(ty: StepType) -> Result<Self, Self::Error> {
        match ty {
            StepType::Given => Ok(Self::Given),
            StepType::When => Ok(Self::When),
            StepType::Then => Ok(Self::Then),
            #[expect(unreachable_patterns, reason = "guard future StepType variants")]
            other => Err(UnsupportedStepType(other)),
        }
    }
}
