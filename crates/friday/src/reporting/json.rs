//! JSON writer for scenario outcome records.
//!
//! Status labels are lowercase. Failed scenarios carry a `failure` object
//! and pending scenarios a `pending` object naming the step that stopped
//! them.

use std::io::Write;

use serde::Serialize;

use super::{RunSummary, ScenarioRecord, ScenarioStatus};

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: JsonSummary,
    scenarios: Vec<JsonScenario<'a>>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    failed: usize,
    pending: usize,
}

#[derive(Serialize)]
struct JsonScenario<'a> {
    feature_path: &'a str,
    scenario_name: &'a str,
    status: &'static str,
    line: u32,
    tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<JsonFailure<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending: Option<JsonPending<'a>>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    step_index: usize,
    step: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonPending<'a> {
    step_index: usize,
    step: &'a str,
}

impl<'a> From<&'a [ScenarioRecord]> for JsonReport<'a> {
    fn from(records: &'a [ScenarioRecord]) -> Self {
        let summary = RunSummary::from_records(records);
        Self {
            summary: JsonSummary {
                total: summary.total(),
                passed: summary.passed,
                failed: summary.failed,
                pending: summary.pending,
            },
            scenarios: records.iter().map(JsonScenario::from).collect(),
        }
    }
}

impl<'a> From<&'a ScenarioRecord> for JsonScenario<'a> {
    fn from(record: &'a ScenarioRecord) -> Self {
        let (failure, pending) = match record.status() {
            ScenarioStatus::Passed => (None, None),
            ScenarioStatus::Failed(details) => (
                Some(JsonFailure {
                    step_index: details.step_index(),
                    step: details.step(),
                    message: details.message(),
                    expected: details.expected(),
                    actual: details.actual(),
                }),
                None,
            ),
            ScenarioStatus::Pending(details) => (
                None,
                Some(JsonPending {
                    step_index: details.step_index(),
                    step: details.step(),
                }),
            ),
        };
        Self {
            feature_path: record.feature_path(),
            scenario_name: record.scenario_name(),
            status: record.status().label(),
            line: record.line(),
            tags: record.tags(),
            failure,
            pending,
        }
    }
}

/// Serialize the provided scenario records into the supplied writer.
///
/// # Examples
/// ```rust
/// use friday::reporting::{json, ScenarioRecord, ScenarioStatus};
///
/// let records = vec![ScenarioRecord::new(
///     "feature",
///     "scenario",
///     1,
///     Vec::new(),
///     ScenarioStatus::Passed,
/// )];
/// let mut buffer = Vec::new();
/// json::write(&mut buffer, &records).unwrap();
/// let output = String::from_utf8(buffer).unwrap();
/// assert!(output.contains("\"status\":\"passed\""));
/// ```
///
/// # Errors
/// Returns an error when serialization or writing fails.
pub fn write<W: Write>(writer: &mut W, records: &[ScenarioRecord]) -> serde_json::Result<()> {
    serde_json::to_writer(writer, &JsonReport::from(records))
}

/// Produce a JSON string representation of the provided scenario records.
///
/// # Examples
/// ```rust
/// use friday::reporting::{json, ScenarioRecord, ScenarioStatus};
///
/// let records = vec![ScenarioRecord::new(
///     "feature",
///     "scenario",
///     1,
///     Vec::new(),
///     ScenarioStatus::Passed,
/// )];
/// let json = json::to_string(&records).unwrap();
/// assert!(json.contains("\"scenario_name\":\"scenario\""));
/// ```
///
/// # Errors
/// Returns an error when serializing the provided records fails.
pub fn to_string(records: &[ScenarioRecord]) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport::from(records))
}
