//! Plain-text writer: one line per scenario and a summary line.

use std::fmt::{self, Write};

use super::{RunSummary, ScenarioRecord, ScenarioStatus};

/// Render `records` for a terminal.
///
/// ```text
/// passed  features/friday.feature:3 Sunday isn't Friday
/// failed  features/friday.feature:9 Monday isn't Friday
///         expected "TGIF", got "Nope"
/// 3 scenarios (1 passed, 1 failed, 1 pending)
/// ```
///
/// # Errors
/// Returns an error if writing to the provided formatter fails.
pub fn write<W: Write>(writer: &mut W, records: &[ScenarioRecord]) -> fmt::Result {
    for record in records {
        writeln!(
            writer,
            "{:<7} {}:{} {}",
            record.status().label(),
            record.feature_path(),
            record.line(),
            record.scenario_name()
        )?;
        match record.status() {
            ScenarioStatus::Passed => {}
            ScenarioStatus::Failed(details) => match details.expected() {
                Some(expected) => {
                    let actual = details
                        .actual()
                        .map_or_else(|| "no answer".to_string(), |a| format!("{a:?}"));
                    writeln!(writer, "        expected {expected:?}, got {actual}")?;
                }
                None => writeln!(writer, "        {}", details.message())?,
            },
            ScenarioStatus::Pending(details) => {
                writeln!(writer, "        {}", details.message())?;
            }
        }
    }
    let summary = RunSummary::from_records(records);
    writeln!(
        writer,
        "{} scenarios ({} passed, {} failed, {} pending)",
        summary.total(),
        summary.passed,
        summary.failed,
        summary.pending
    )
}

/// Render `records` into a new string.
#[must_use]
pub fn to_string(records: &[ScenarioRecord]) -> String {
    let mut output = String::new();
    // Writing into a `String` cannot fail.
    let _ = write(&mut output, records);
    output
}
