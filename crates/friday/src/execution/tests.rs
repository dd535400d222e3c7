//! Unit tests for scenario execution.

use super::*;
use crate::registry::StepArgs;
use rstest::{fixture, rstest};

#[derive(Debug, Default)]
struct Trace {
    seen: Vec<String>,
}

fn record(ctx: &mut Trace, args: &StepArgs) -> Result<(), StepError> {
    ctx.seen.push(args.required("word")?.to_string());
    Ok(())
}

fn placeholder(_: &mut Trace, args: &StepArgs) -> Result<(), StepError> {
    Err(StepError::not_implemented(args.text()))
}

fn refuse(_: &mut Trace, _: &StepArgs) -> Result<(), StepError> {
    Err(StepError::AssertionMismatch {
        expected: "yes".into(),
        actual: None,
    })
}

fn expect_one(ctx: &mut Trace, _: &StepArgs) -> Result<(), StepError> {
    if ctx.seen.len() == 1 {
        Ok(())
    } else {
        Err(StepError::AssertionMismatch {
            expected: "one word".into(),
            actual: Some(ctx.seen.join(",")),
        })
    }
}

#[fixture]
fn registry() -> StepRegistry<Trace> {
    let mut registry = StepRegistry::new();
    registry
        .register(StepKeyword::Given, "the word {word}", record)
        .and_then(|r| r.register(StepKeyword::When, "the word {word} is spoken", record))
        .and_then(|r| r.register(StepKeyword::Given, "something unfinished", placeholder))
        .and_then(|r| r.register(StepKeyword::Then, "it is refused", refuse))
        .and_then(|r| r.register(StepKeyword::Then, "one word was heard", expect_one))
        .unwrap_or_else(|err| panic!("test registry should build: {err}"));
    registry
}

#[rstest]
fn steps_run_in_order(registry: StepRegistry<Trace>) {
    let scenario = Scenario::new("order")
        .given("the word alpha")
        .and("the word beta")
        .when("the word gamma is spoken");
    let trace = execute_scenario(&registry, "order.feature", &scenario)
        .unwrap_or_else(|err| panic!("scenario should pass: {err}"));
    assert_eq!(trace.seen, ["alpha", "beta", "gamma"]);
}

#[rstest]
fn conjunctions_follow_the_previous_keyword(registry: StepRegistry<Trace>) {
    let scenario = Scenario::new("conjunction")
        .when("the word alpha is spoken")
        .and("the word beta is spoken");
    let trace = execute_scenario(&registry, "order.feature", &scenario)
        .unwrap_or_else(|err| panic!("scenario should pass: {err}"));
    assert_eq!(trace.seen, ["alpha", "beta"]);
}

#[rstest]
fn each_scenario_starts_from_a_fresh_context(registry: StepRegistry<Trace>) {
    let first = Scenario::new("first")
        .given("the word alpha")
        .then("one word was heard");
    let second = Scenario::new("second")
        .given("the word beta")
        .then("one word was heard");
    let feature_path = "fresh.feature";
    assert!(run_scenario(&registry, feature_path, &first).status().is_passed());
    assert!(run_scenario(&registry, feature_path, &second).status().is_passed());
}

#[rstest]
fn not_implemented_steps_are_pending(registry: StepRegistry<Trace>) {
    let scenario = Scenario::new("unfinished")
        .given("the word alpha")
        .and("something unfinished")
        .then("it is refused");
    let Err(err) = execute_scenario(&registry, "pending.feature", &scenario) else {
        panic!("scenario should stop at the pending step");
    };
    assert!(err.is_pending());
    assert_eq!(err.index(), 1);
    assert_eq!(err.step_text(), "something unfinished");
    assert!(err.step_error().is_none());
}

#[rstest]
fn handler_errors_are_failures(registry: StepRegistry<Trace>) {
    let scenario = Scenario::new("refused").then("it is refused");
    let Err(err) = execute_scenario(&registry, "refused.feature", &scenario) else {
        panic!("scenario should fail");
    };
    assert!(!err.is_pending());
    assert!(matches!(
        err.step_error(),
        Some(StepError::AssertionMismatch { expected, actual: None }) if expected == "yes"
    ));
    assert!(err.to_string().contains("scenario: refused"), "{err}");
}

#[rstest]
fn unbound_steps_are_not_found(registry: StepRegistry<Trace>) {
    let scenario = Scenario::new("unknown")
        .given("the word alpha")
        .when("nobody listens");
    let Err(err) = execute_scenario(&registry, "unknown.feature", &scenario) else {
        panic!("scenario should fail");
    };
    assert!(matches!(err, ExecutionError::StepNotFound { index: 1, .. }));
    assert_eq!(err.step_text(), "nobody listens");
}

#[rstest]
fn records_carry_scenario_metadata(registry: StepRegistry<Trace>) {
    let scenario = Scenario::new("tagged")
        .at_line(7)
        .tagged("@slow")
        .given("something unfinished");
    let record = run_scenario(&registry, "meta.feature", &scenario);
    assert_eq!(record.feature_path(), "meta.feature");
    assert_eq!(record.scenario_name(), "tagged");
    assert_eq!(record.line(), 7);
    assert_eq!(record.tags(), ["slow"]);
    let ScenarioStatus::Pending(pending) = record.status() else {
        panic!("expected a pending record");
    };
    assert_eq!(pending.step_index(), 0);
    assert_eq!(pending.step(), "something unfinished");
}
