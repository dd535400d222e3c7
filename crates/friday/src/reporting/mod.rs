//! Scenario outcome records and report writers.
//!
//! The runner returns one [`ScenarioRecord`] per scenario. The writers in
//! the submodules render a slice of records as plain text, JSON or `JUnit`
//! XML, and [`RunSummary`] folds the records into pass/fail/pending counts.

/// JSON report writer for scenario outcomes.
#[cfg(feature = "json")]
pub mod json;
/// `JUnit` XML writer for scenario outcomes.
pub mod junit;
/// Human-readable report writer.
pub mod text;

use crate::error::StepError;
use crate::execution::ExecutionError;

/// Outcome recorded for a single scenario execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioRecord {
    feature_path: String,
    scenario_name: String,
    line: u32,
    tags: Vec<String>,
    status: ScenarioStatus,
}

impl ScenarioRecord {
    /// Construct a new record for the provided scenario metadata.
    ///
    /// # Examples
    /// ```
    /// use friday::reporting::{ScenarioRecord, ScenarioStatus};
    ///
    /// let record = ScenarioRecord::new(
    ///     "features/friday.feature",
    ///     "Friday is Friday",
    ///     7,
    ///     vec!["smoke".into()],
    ///     ScenarioStatus::Passed,
    /// );
    /// assert_eq!(record.feature_path(), "features/friday.feature");
    /// assert_eq!(record.line(), 7);
    /// assert!(record.status().is_passed());
    /// ```
    #[must_use]
    pub fn new(
        feature_path: impl Into<String>,
        scenario_name: impl Into<String>,
        line: u32,
        tags: Vec<String>,
        status: ScenarioStatus,
    ) -> Self {
        Self {
            feature_path: feature_path.into(),
            scenario_name: scenario_name.into(),
            line,
            tags,
            status,
        }
    }

    /// Access the recorded feature path.
    #[must_use]
    pub fn feature_path(&self) -> &str {
        &self.feature_path
    }

    /// Access the recorded scenario name.
    #[must_use]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Line of the scenario in its feature file.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Tags attached to the scenario.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Access the stored status value.
    #[must_use]
    pub fn status(&self) -> &ScenarioStatus {
        &self.status
    }
}

/// Status of a scenario execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// Every step ran without errors.
    Passed,
    /// A step failed or had no binding.
    Failed(FailedScenario),
    /// A step is not implemented yet.
    Pending(PendingScenario),
}

impl ScenarioStatus {
    /// Retrieve the lowercase label for the stored status.
    ///
    /// # Examples
    /// ```
    /// use friday::reporting::{PendingScenario, ScenarioStatus};
    ///
    /// assert_eq!(ScenarioStatus::Passed.label(), "passed");
    /// let pending = PendingScenario::new(0, "today is Tuesday");
    /// assert_eq!(ScenarioStatus::Pending(pending).label(), "pending");
    /// ```
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed(_) => "failed",
            Self::Pending(_) => "pending",
        }
    }

    /// Whether the scenario passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Whether the scenario failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether the scenario stopped at a pending step.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// Details captured when a scenario fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedScenario {
    step_index: usize,
    step: String,
    message: String,
    expected: Option<String>,
    actual: Option<String>,
}

impl FailedScenario {
    /// Record a failure at `step_index` with a free-form message.
    #[must_use]
    pub fn new(step_index: usize, step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step_index,
            step: step.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Attach the expected and actual answers of an assertion mismatch.
    #[must_use]
    pub fn with_answers(mut self, expected: impl Into<String>, actual: Option<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = actual;
        self
    }

    /// Build the record for a failed execution.
    ///
    /// Assertion mismatches keep their expected and actual answers.
    #[must_use]
    pub fn from_error(error: &ExecutionError) -> Self {
        let failed = Self::new(error.index(), error.step_text(), error.to_string());
        match error.step_error() {
            Some(StepError::AssertionMismatch { expected, actual }) => {
                failed.with_answers(expected.clone(), actual.clone())
            }
            _ => failed,
        }
    }

    /// Zero-based index of the failing step.
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Text of the failing step.
    #[must_use]
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Expected answer, for assertion mismatches.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Actual answer, for assertion mismatches where one was computed.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }
}

/// Details captured when a scenario stops at a pending step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingScenario {
    step_index: usize,
    step: String,
}

impl PendingScenario {
    /// Record the pending step.
    #[must_use]
    pub fn new(step_index: usize, step: impl Into<String>) -> Self {
        Self {
            step_index,
            step: step.into(),
        }
    }

    /// Zero-based index of the pending step.
    #[must_use]
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Text of the pending step.
    #[must_use]
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Message shown in reports.
    #[must_use]
    pub fn message(&self) -> String {
        format!("step not yet implemented: {}", self.step)
    }
}

/// Counts of scenario outcomes across a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Scenarios that passed.
    pub passed: usize,
    /// Scenarios that failed.
    pub failed: usize,
    /// Scenarios that stopped at a pending step.
    pub pending: usize,
}

impl RunSummary {
    /// Tally the outcomes in `records`.
    ///
    /// # Examples
    /// ```
    /// use friday::reporting::{RunSummary, ScenarioRecord, ScenarioStatus};
    ///
    /// let records = [ScenarioRecord::new("f", "s", 1, Vec::new(), ScenarioStatus::Passed)];
    /// let summary = RunSummary::from_records(&records);
    /// assert_eq!(summary.total(), 1);
    /// assert!(summary.is_success(true));
    /// ```
    #[must_use]
    pub fn from_records(records: &[ScenarioRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                match record.status() {
                    ScenarioStatus::Passed => summary.passed += 1,
                    ScenarioStatus::Failed(_) => summary.failed += 1,
                    ScenarioStatus::Pending(_) => summary.pending += 1,
                }
                summary
            })
    }

    /// Number of scenarios run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.pending
    }

    /// Whether the run succeeded. Pending scenarios only count against the
    /// run when `fail_on_pending` is set.
    #[must_use]
    pub fn is_success(&self, fail_on_pending: bool) -> bool {
        self.failed == 0 && !(fail_on_pending && self.pending > 0)
    }
}
