//! Loading scenarios from Gherkin feature files.
//!
//! Parsing is delegated to the `gherkin` crate. This module flattens the
//! parsed tree into runnable [`Scenario`] values: background steps are
//! prepended, scenarios nested in `Rule` blocks are included and every
//! `Scenario Outline` is expanded once per examples row.

use std::path::Path;

use friday_patterns::{StepKeyword, UnsupportedStepType};
use gherkin::GherkinEnv;
use thiserror::Error;

/// Errors raised while loading a feature file.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// The file could not be read.
    #[error("failed to read feature file {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid Gherkin.
    #[error("failed to parse feature file {path}: {source}")]
    Parse {
        /// Path of the feature.
        path: String,
        /// Parser diagnostic.
        #[source]
        source: gherkin::ParseError,
    },
    /// A scenario outline declares no examples rows.
    #[error("Scenario Outline '{scenario}' in {path} is missing an Examples table")]
    MissingExamples {
        /// Path of the feature.
        path: String,
        /// Name of the outline.
        scenario: String,
    },
    /// The parser produced a step type with no matching keyword.
    #[error("{path}:{line}: {source}")]
    UnsupportedStepType {
        /// Path of the feature.
        path: String,
        /// Line of the offending step.
        line: u32,
        /// The unsupported step type.
        #[source]
        source: UnsupportedStepType,
    },
}

/// A single step as written in a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioStep {
    /// Keyword as written, conjunctions included.
    pub keyword: StepKeyword,
    /// Step text without the keyword.
    pub text: String,
}

impl ScenarioStep {
    /// Create a step.
    #[must_use]
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
        }
    }
}

/// A runnable scenario: a name and an ordered list of steps.
///
/// Scenarios are usually loaded from feature files but can be assembled in
/// code:
///
/// ```
/// use friday::Scenario;
///
/// let scenario = Scenario::new("Sunday isn't Friday")
///     .given("today is Sunday")
///     .when("I ask whether it's Friday yet")
///     .then("I should be told \"Nope\"");
/// assert_eq!(scenario.steps().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    name: String,
    line: u32,
    tags: Vec<String>,
    steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Create an empty scenario named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: 0,
            tags: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Set the source line.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Add a tag; a leading `@` is dropped and duplicates are ignored.
    #[must_use]
    pub fn tagged(mut self, tag: &str) -> Self {
        push_tag(&mut self.tags, tag);
        self
    }

    /// Append a step.
    #[must_use]
    pub fn step(mut self, keyword: StepKeyword, text: impl Into<String>) -> Self {
        self.steps.push(ScenarioStep::new(keyword, text));
        self
    }

    /// Append a `Given` step.
    #[must_use]
    pub fn given(self, text: impl Into<String>) -> Self {
        self.step(StepKeyword::Given, text)
    }

    /// Append a `When` step.
    #[must_use]
    pub fn when(self, text: impl Into<String>) -> Self {
        self.step(StepKeyword::When, text)
    }

    /// Append a `Then` step.
    #[must_use]
    pub fn then(self, text: impl Into<String>) -> Self {
        self.step(StepKeyword::Then, text)
    }

    /// Append an `And` step.
    #[must_use]
    pub fn and(self, text: impl Into<String>) -> Self {
        self.step(StepKeyword::And, text)
    }

    /// Scenario name; outline rows carry their values in parentheses.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-based source line, `0` when built in code.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Tags without their `@` prefix.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[ScenarioStep] {
        &self.steps
    }
}

/// A parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    path: String,
    name: String,
    scenarios: Vec<Scenario>,
}

impl Feature {
    /// Path the feature was loaded from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The `Feature:` title.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every runnable scenario, outlines expanded.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}

/// Read and parse the feature file at `path`.
///
/// # Errors
///
/// Returns [`FeatureError`] when the file cannot be read, does not parse or
/// contains outlines without examples.
pub fn load_feature(path: impl AsRef<Path>) -> Result<Feature, FeatureError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| FeatureError::Io {
        path: display.clone(),
        source,
    })?;
    parse_feature(&text, display)
}

/// Parse Gherkin `text` as if it had been read from `path`.
///
/// # Errors
///
/// Returns [`FeatureError`] when the text does not parse or contains
/// outlines without examples.
pub fn parse_feature(text: &str, path: impl Into<String>) -> Result<Feature, FeatureError> {
    let path = path.into();
    let mut source = text.to_string();
    // The parser rejects a final step line without a newline.
    if !source.ends_with('\n') {
        source.push('\n');
    }
    let parsed = gherkin::Feature::parse(source.as_str(), GherkinEnv::default()).map_err(
        |source| FeatureError::Parse {
            path: path.clone(),
            source,
        },
    )?;

    let builder = FeatureBuilder { path: &path };
    let mut scenarios = Vec::new();
    let background = parsed.background.as_ref().map(|bg| bg.steps.as_slice());
    for scenario in &parsed.scenarios {
        builder.expand(&mut scenarios, &parsed.tags, background, None, scenario)?;
    }
    for rule in &parsed.rules {
        let rule_background = rule.background.as_ref().map(|bg| bg.steps.as_slice());
        let tags = merge_tags(&parsed.tags, &rule.tags);
        for scenario in &rule.scenarios {
            builder.expand(&mut scenarios, &tags, background, rule_background, scenario)?;
        }
    }
    log::debug!("loaded {} scenarios from {path}", scenarios.len());
    Ok(Feature {
        name: parsed.name,
        path,
        scenarios,
    })
}

struct FeatureBuilder<'a> {
    path: &'a str,
}

impl FeatureBuilder<'_> {
    fn expand(
        &self,
        out: &mut Vec<Scenario>,
        inherited_tags: &[String],
        background: Option<&[gherkin::Step]>,
        rule_background: Option<&[gherkin::Step]>,
        scenario: &gherkin::Scenario,
    ) -> Result<(), FeatureError> {
        let mut steps = Vec::new();
        for step in background
            .into_iter()
            .chain(rule_background)
            .flatten()
            .chain(&scenario.steps)
        {
            steps.push(self.convert_step(step)?);
        }
        let tags = merge_tags(inherited_tags, &scenario.tags);
        let line = to_line(scenario.position.line);

        if !is_outline(scenario) {
            out.push(Scenario {
                name: scenario.name.clone(),
                line,
                tags,
                steps,
            });
            return Ok(());
        }

        let mut expanded = 0usize;
        for examples in &scenario.examples {
            let Some(table) = examples.table.as_ref() else {
                continue;
            };
            let Some((header, rows)) = table.rows.split_first() else {
                continue;
            };
            let row_tags = merge_tags(&tags, &examples.tags);
            for row in rows {
                out.push(Scenario {
                    name: outline_name(&scenario.name, header, row),
                    line,
                    tags: row_tags.clone(),
                    steps: steps
                        .iter()
                        .map(|step| ScenarioStep {
                            keyword: step.keyword,
                            text: substitute(&step.text, header, row),
                        })
                        .collect(),
                });
                expanded += 1;
            }
        }
        if expanded == 0 {
            return Err(FeatureError::MissingExamples {
                path: self.path.to_string(),
                scenario: scenario.name.clone(),
            });
        }
        Ok(())
    }

    fn convert_step(&self, step: &gherkin::Step) -> Result<ScenarioStep, FeatureError> {
        let keyword = StepKeyword::from_gherkin(&step.keyword, step.ty).map_err(|source| {
            FeatureError::UnsupportedStepType {
                path: self.path.to_string(),
                line: to_line(step.position.line),
                source,
            }
        })?;
        Ok(ScenarioStep::new(keyword, step.value.clone()))
    }
}

fn is_outline(scenario: &gherkin::Scenario) -> bool {
    matches!(
        scenario.keyword.trim(),
        "Scenario Outline" | "Scenario Template"
    ) || !scenario.examples.is_empty()
}

fn to_line(line: usize) -> u32 {
    u32::try_from(line).unwrap_or(u32::MAX)
}

/// Replace `<column>` tokens in one pass; substituted values are not rescanned.
fn substitute(text: &str, header: &[String], row: &[String]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((before, after)) = rest.split_once('<') {
        output.push_str(before);
        let token = after.split_once('>').and_then(|(name, tail)| {
            header
                .iter()
                .position(|column| column == name)
                .and_then(|index| row.get(index))
                .map(|value| (value, tail))
        });
        match token {
            Some((value, tail)) => {
                output.push_str(value);
                rest = tail;
            }
            None => {
                output.push('<');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

fn outline_name(name: &str, header: &[String], row: &[String]) -> String {
    let values = header
        .iter()
        .zip(row)
        .map(|(column, value)| format!("{column}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name} ({values})")
}

fn push_tag(tags: &mut Vec<String>, tag: &str) {
    let tag = tag.trim();
    let tag = tag.strip_prefix('@').unwrap_or(tag);
    if !tag.is_empty() && !tags.iter().any(|existing| existing == tag) {
        tags.push(tag.to_string());
    }
}

fn merge_tags(base: &[String], additions: &[String]) -> Vec<String> {
    let mut merged = Vec::with_capacity(base.len() + additions.len());
    for tag in base.iter().chain(additions) {
        push_tag(&mut merged, tag);
    }
    merged
}
