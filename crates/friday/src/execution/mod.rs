//! Scenario execution against a step registry.
//!
//! Every scenario gets a fresh context built with `C::default()`. Steps run
//! in order and execution stops at the first step that is pending, has no
//! binding or returns an error.

mod error;

use friday_patterns::StepKeyword;

use crate::error::StepError;
use crate::feature::{Feature, Scenario};
use crate::registry::StepRegistry;
use crate::reporting::{FailedScenario, PendingScenario, ScenarioRecord, ScenarioStatus};

pub use error::ExecutionError;

/// Run every step of `scenario` and hand back the final context.
///
/// # Errors
///
/// Returns [`ExecutionError::Pending`] when a step is not implemented yet,
/// [`ExecutionError::StepNotFound`] when no binding matches and
/// [`ExecutionError::HandlerFailed`] when a handler returns any other error.
pub fn execute_scenario<C: Default>(
    registry: &StepRegistry<C>,
    feature_path: &str,
    scenario: &Scenario,
) -> Result<C, ExecutionError> {
    let mut ctx = C::default();
    let mut prev = None;
    for (index, step) in scenario.steps().iter().enumerate() {
        let keyword = step.keyword.resolve(&mut prev);
        let text = step.text.as_str();
        log::debug!("step {index}: {keyword} {text}");
        let Some(found) = registry.find(keyword, text) else {
            return Err(ExecutionError::StepNotFound {
                index,
                keyword,
                text: text.to_string(),
                feature_path: feature_path.to_string(),
                scenario_name: scenario.name().to_string(),
            });
        };
        if let Err(error) = found.definition.run(&mut ctx, &found.args) {
            return Err(step_failure(error, index, keyword, text, feature_path, scenario));
        }
    }
    Ok(ctx)
}

fn step_failure(
    error: StepError,
    index: usize,
    keyword: StepKeyword,
    text: &str,
    feature_path: &str,
    scenario: &Scenario,
) -> ExecutionError {
    if error.is_pending() {
        ExecutionError::Pending {
            index,
            keyword,
            text: text.to_string(),
            feature_path: feature_path.to_string(),
            scenario_name: scenario.name().to_string(),
        }
    } else {
        ExecutionError::HandlerFailed {
            index,
            keyword,
            text: text.to_string(),
            error,
            feature_path: feature_path.to_string(),
            scenario_name: scenario.name().to_string(),
        }
    }
}

/// Run `scenario` and record its outcome.
#[must_use]
pub fn run_scenario<C: Default>(
    registry: &StepRegistry<C>,
    feature_path: &str,
    scenario: &Scenario,
) -> ScenarioRecord {
    let status = match execute_scenario(registry, feature_path, scenario) {
        Ok(_) => ScenarioStatus::Passed,
        Err(err) if err.is_pending() => {
            ScenarioStatus::Pending(PendingScenario::new(err.index(), err.step_text()))
        }
        Err(err) => ScenarioStatus::Failed(FailedScenario::from_error(&err)),
    };
    log::info!(
        "{feature_path}: scenario '{}' {}",
        scenario.name(),
        status.label()
    );
    ScenarioRecord::new(
        feature_path,
        scenario.name(),
        scenario.line(),
        scenario.tags().to_vec(),
        status,
    )
}

/// Run every scenario of `feature` in order.
#[must_use]
pub fn run_feature<C: Default>(registry: &StepRegistry<C>, feature: &Feature) -> Vec<ScenarioRecord> {
    feature
        .scenarios()
        .iter()
        .map(|scenario| run_scenario(registry, feature.path(), scenario))
        .collect()
}

#[cfg(test)]
mod tests;
