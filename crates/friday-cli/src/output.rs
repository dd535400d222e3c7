//! Helpers for rendering command output.

use std::io::Write;

use eyre::{Context, Result};
use friday::reporting::{json, junit, text};
use friday::{DayContext, ScenarioRecord, StepDefinition};

use crate::config::ReportFormat;

pub(crate) fn write_step(writer: &mut dyn Write, step: &StepDefinition<DayContext>) -> Result<()> {
    writeln!(
        writer,
        "{} '{}' ({}:{})",
        step.keyword(),
        step.pattern().as_str(),
        step.location().file(),
        step.location().line()
    )
    .wrap_err_with(|| {
        format!(
            "failed to write step {} '{}'",
            step.keyword(),
            step.pattern().as_str()
        )
    })
}

pub(crate) fn write_report(
    writer: &mut dyn Write,
    format: ReportFormat,
    records: &[ScenarioRecord],
) -> Result<()> {
    match format {
        ReportFormat::Text => writer
            .write_all(text::to_string(records).as_bytes())
            .wrap_err("failed to write text report"),
        ReportFormat::Json => {
            let report = json::to_string(records).wrap_err("failed to serialise JSON report")?;
            writeln!(writer, "{report}").wrap_err("failed to write JSON report")
        }
        ReportFormat::Junit => {
            let mut xml = String::new();
            junit::write(&mut xml, records).wrap_err("failed to render JUnit report")?;
            writer
                .write_all(xml.as_bytes())
                .wrap_err("failed to write JUnit report")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friday::ScenarioStatus;
    use rstest::rstest;

    fn rendered(format: ReportFormat) -> String {
        let records = [ScenarioRecord::new(
            "friday.feature",
            "Friday is Friday",
            3,
            Vec::new(),
            ScenarioStatus::Passed,
        )];
        let mut buffer = Vec::new();
        write_report(&mut buffer, format, &records)
            .unwrap_or_else(|err| panic!("report should render: {err}"));
        String::from_utf8(buffer).unwrap_or_else(|err| panic!("report should be UTF-8: {err}"))
    }

    #[rstest]
    #[case(ReportFormat::Text, "passed  friday.feature:3 Friday is Friday")]
    #[case(ReportFormat::Json, "\"status\":\"passed\"")]
    #[case(ReportFormat::Junit, "<testcase name=\"Friday is Friday\"")]
    fn renders_each_format(#[case] format: ReportFormat, #[case] needle: &str) {
        let output = rendered(format);
        assert!(output.contains(needle), "{output}");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn steps_show_keyword_and_pattern() {
        let registry = friday::friday_steps()
            .unwrap_or_else(|err| panic!("bindings should register: {err}"));
        let mut buffer = Vec::new();
        for step in registry.definitions() {
            write_step(&mut buffer, step).unwrap_or_else(|err| panic!("write step: {err}"));
        }
        let output = String::from_utf8_lossy(&buffer);
        let first = output.lines().next().unwrap_or_default();
        assert!(first.starts_with("Given 'today is Sunday' ("), "{first}");
        assert_eq!(output.lines().count(), friday::BINDING_COUNT);
    }
}
