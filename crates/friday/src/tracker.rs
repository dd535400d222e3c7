//! The day tracker: the answer to "is it Friday yet?" and the per-scenario
//! state the step bindings read and write.

use crate::error::StepError;

/// The only day that earns a cheerful answer.
pub const FRIDAY: &str = "Friday";
/// Answer given on Fridays.
pub const TGIF: &str = "TGIF";
/// Answer given on every other day.
pub const NOPE: &str = "Nope";

/// Answer whether `day` is Friday.
///
/// The comparison is exact and case-sensitive; every other input, including
/// the empty string, is answered with [`NOPE`].
///
/// # Examples
///
/// ```
/// use friday::evaluate;
///
/// assert_eq!(evaluate("Friday"), "TGIF");
/// assert_eq!(evaluate("friday"), "Nope");
/// ```
#[must_use]
pub fn evaluate(day: &str) -> &'static str {
    if day == FRIDAY { TGIF } else { NOPE }
}

/// State shared by the steps of one scenario.
///
/// A fresh context is created for every scenario run and dropped when the
/// scenario finishes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DayContext {
    current_day: Option<String>,
    last_answer: Option<String>,
}

impl DayContext {
    /// Create a context with neither a day nor an answer recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record today's day name.
    pub fn set_day(&mut self, day: impl Into<String>) {
        self.current_day = Some(day.into());
    }

    /// Today's day name, if a step has set it.
    #[must_use]
    pub fn current_day(&self) -> Option<&str> {
        self.current_day.as_deref()
    }

    /// The answer computed by the last [`ask`](Self::ask), if any.
    #[must_use]
    pub fn last_answer(&self) -> Option<&str> {
        self.last_answer.as_deref()
    }

    /// Evaluate the current day and remember the answer.
    ///
    /// An unset day is evaluated as the empty string.
    pub fn ask(&mut self) -> &str {
        let answer = evaluate(self.current_day().unwrap_or_default());
        log::debug!("asked about {:?}, answered {answer}", self.current_day);
        self.last_answer.insert(answer.to_string())
    }

    /// Check the remembered answer against `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::AssertionMismatch`] when no answer has been
    /// computed or the answer differs from `expected`.
    pub fn expect_answer(&self, expected: &str) -> Result<(), StepError> {
        match self.last_answer() {
            Some(actual) if actual == expected => Ok(()),
            actual => Err(StepError::AssertionMismatch {
                expected: expected.to_string(),
                actual: actual.map(str::to_string),
            }),
        }
    }
}
