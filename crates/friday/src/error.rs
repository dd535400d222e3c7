//! Errors returned by step handlers.

use thiserror::Error;

/// Failure raised inside a step binding.
///
/// The runner maps [`NotImplemented`](Self::NotImplemented) to a pending
/// scenario and every other variant to a failed one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StepError {
    /// The answer recorded for the scenario differs from the expected one.
    #[error("expected answer {expected:?} but got {}", display_actual(.actual.as_deref()))]
    AssertionMismatch {
        /// Answer the step expected.
        expected: String,
        /// Answer recorded by the scenario, `None` when nothing was asked.
        actual: Option<String>,
    },
    /// The step body is a placeholder.
    #[error("step not yet implemented: {step}")]
    NotImplemented {
        /// Text of the step that has no behaviour yet.
        step: String,
    },
    /// The matched pattern did not capture an argument the handler needs.
    #[error("step argument `{name}` was not captured")]
    MissingArgument {
        /// Placeholder name the handler asked for.
        name: String,
    },
}

impl StepError {
    /// Build a [`NotImplemented`](Self::NotImplemented) error for `step`.
    #[must_use]
    pub fn not_implemented(step: impl Into<String>) -> Self {
        Self::NotImplemented { step: step.into() }
    }

    /// Whether the error marks the step as pending rather than failed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

fn display_actual(actual: Option<&str>) -> String {
    actual.map_or_else(|| String::from("no answer"), |value| format!("{value:?}"))
}
