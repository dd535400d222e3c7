//! JUnit XML writer for scenario outcome records.
//!
//! The writer produces a single `<testsuite>` document. Failed scenarios get
//! a `<failure>` child and pending scenarios a `<skipped>` child, each with a
//! `message` attribute.

use std::fmt::{self, Write};

use super::{RunSummary, ScenarioRecord, ScenarioStatus};

/// Render the supplied scenario records as a `JUnit` XML document.
///
/// # Examples
/// ```
/// use friday::reporting::{junit, ScenarioRecord, ScenarioStatus};
///
/// let records = vec![ScenarioRecord::new(
///     "feature",
///     "scenario",
///     1,
///     Vec::new(),
///     ScenarioStatus::Passed,
/// )];
/// let mut output = String::new();
/// junit::write(&mut output, &records).unwrap();
/// assert!(output.contains("<testsuite"));
/// ```
///
/// # Errors
/// Returns an error if writing to the provided formatter fails.
pub fn write<W: Write>(writer: &mut W, records: &[ScenarioRecord]) -> fmt::Result {
    let summary = RunSummary::from_records(records);
    writer.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    writeln!(
        writer,
        "<testsuite name=\"is-it-friday\" tests=\"{}\" failures=\"{}\" skipped=\"{}\">",
        summary.total(),
        summary.failed,
        summary.pending,
    )?;
    for record in records {
        writer.write_str("  <testcase name=\"")?;
        write_escaped(writer, record.scenario_name())?;
        writer.write_str("\" classname=\"")?;
        write_escaped(writer, record.feature_path())?;
        writer.write_char('"')?;
        match record.status() {
            ScenarioStatus::Passed => {
                writer.write_str(" />\n")?;
            }
            ScenarioStatus::Failed(details) => {
                writer.write_str(">\n    <failure message=\"")?;
                write_escaped(writer, details.message())?;
                writer.write_str("\" type=\"")?;
                writer.write_str(if details.expected().is_some() {
                    "assertion_mismatch"
                } else {
                    "step_failed"
                })?;
                writer.write_str("\" />\n  </testcase>\n")?;
            }
            ScenarioStatus::Pending(details) => {
                writer.write_str(">\n    <skipped message=\"")?;
                write_escaped(writer, &details.message())?;
                writer.write_str("\" />\n  </testcase>\n")?;
            }
        }
    }
    writer.write_str("</testsuite>\n")
}

fn write_escaped<W: Write>(writer: &mut W, value: &str) -> fmt::Result {
    const INVALID_REPLACEMENT: &str = "&#xFFFD;";
    for character in value.chars() {
        if !is_valid_xml_character(character) {
            writer.write_str(INVALID_REPLACEMENT)?;
            continue;
        }
        match character {
            '&' => writer.write_str("&amp;")?,
            '<' => writer.write_str("&lt;")?,
            '>' => writer.write_str("&gt;")?,
            '"' => writer.write_str("&quot;")?,
            '\'' => writer.write_str("&apos;")?,
            other => writer.write_char(other)?,
        }
    }
    Ok(())
}

fn is_valid_xml_character(character: char) -> bool {
    matches!(
        u32::from(character),
        0x09 | 0x0A | 0x0D
            | 0x20..=0xD7FF
            | 0xE000..=0xFFFD
            | 0x1_0000..=0x10_FFFF
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_control_characters() {
        let mut output = String::new();
        write_escaped(&mut output, "it's <Friday> & \"TGIF\"\u{1}")
            .unwrap_or_else(|err| panic!("escape should succeed: {err}"));
        assert_eq!(
            output,
            "it&apos;s &lt;Friday&gt; &amp; &quot;TGIF&quot;&#xFFFD;"
        );
    }
}
