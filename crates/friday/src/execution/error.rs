//! Error type for step execution failures.

use std::fmt;

use friday_patterns::StepKeyword;

use crate::error::StepError;

/// Why a scenario stopped before running all of its steps.
///
/// [`Pending`](Self::Pending) is a control flow signal, not a failure: the
/// step exists but its behaviour has not been written yet. The other
/// variants fail the scenario.
///
/// # Examples
///
/// ```
/// use friday::ExecutionError;
/// use friday::StepKeyword;
///
/// let error = ExecutionError::Pending {
///     index: 0,
///     keyword: StepKeyword::Given,
///     text: "today is Tuesday".into(),
///     feature_path: "friday.feature".into(),
///     scenario_name: "Tuesday".into(),
/// };
/// assert!(error.is_pending());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExecutionError {
    /// The matched step is a placeholder.
    Pending {
        /// Zero-based step index.
        index: usize,
        /// Resolved keyword of the step.
        keyword: StepKeyword,
        /// The step text.
        text: String,
        /// Path to the feature file.
        feature_path: String,
        /// Name of the scenario.
        scenario_name: String,
    },
    /// No binding matched the step.
    StepNotFound {
        /// Zero-based step index.
        index: usize,
        /// Resolved keyword of the step.
        keyword: StepKeyword,
        /// The step text that was not found.
        text: String,
        /// Path to the feature file.
        feature_path: String,
        /// Name of the scenario.
        scenario_name: String,
    },
    /// The step handler returned an error.
    HandlerFailed {
        /// Zero-based step index.
        index: usize,
        /// Resolved keyword of the step.
        keyword: StepKeyword,
        /// The step text.
        text: String,
        /// The error returned by the handler.
        error: StepError,
        /// Path to the feature file.
        feature_path: String,
        /// Name of the scenario.
        scenario_name: String,
    },
}

impl ExecutionError {
    /// Returns `true` if the scenario stopped at a pending step.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Zero-based index of the step that stopped the scenario.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::Pending { index, .. }
            | Self::StepNotFound { index, .. }
            | Self::HandlerFailed { index, .. } => *index,
        }
    }

    /// Text of the step that stopped the scenario.
    #[must_use]
    pub fn step_text(&self) -> &str {
        match self {
            Self::Pending { text, .. }
            | Self::StepNotFound { text, .. }
            | Self::HandlerFailed { text, .. } => text,
        }
    }

    /// The handler's error, when one was returned.
    #[must_use]
    pub fn step_error(&self) -> Option<&StepError> {
        match self {
            Self::HandlerFailed { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending {
                index,
                keyword,
                text,
                feature_path,
                scenario_name,
            } => write!(
                f,
                "Step {index} '{keyword} {text}' is pending in scenario '{scenario_name}' ({feature_path})"
            ),
            Self::StepNotFound {
                index,
                keyword,
                text,
                feature_path,
                scenario_name,
            } => write!(
                f,
                "Step not found at index {index}: {keyword} {text} (feature: {feature_path}, scenario: {scenario_name})"
            ),
            Self::HandlerFailed {
                index,
                keyword,
                text,
                error,
                feature_path,
                scenario_name,
            } => write!(
                f,
                "Step failed at index {index}: {keyword} {text} - {error} (feature: {feature_path}, scenario: {scenario_name})"
            ),
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HandlerFailed { error, .. } => Some(error),
            _ => None,
        }
    }
}
