//! End-to-end runs of the Friday bindings against feature files.

use std::path::PathBuf;

use friday::reporting::ScenarioStatus;
use friday::{
    DayContext, ExecutionError, Scenario, ScenarioRecord, StepKeyword, StepRegistry,
    execute_scenario, friday_steps, load_feature, run_feature, run_scenario,
};
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> StepRegistry<DayContext> {
    friday_steps().unwrap_or_else(|err| panic!("bindings should register: {err}"))
}

fn feature_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/features")
        .join(name)
}

fn run_friday_feature(registry: &StepRegistry<DayContext>) -> Vec<ScenarioRecord> {
    let feature = load_feature(feature_path("is_it_friday.feature"))
        .unwrap_or_else(|err| panic!("feature should load: {err}"));
    run_feature(registry, &feature)
}

fn status_of<'a>(records: &'a [ScenarioRecord], name: &str) -> &'a ScenarioStatus {
    records
        .iter()
        .find(|record| record.scenario_name() == name)
        .map(ScenarioRecord::status)
        .unwrap_or_else(|| panic!("no record named {name}"))
}

#[rstest]
fn labels_follow_the_answer(registry: StepRegistry<DayContext>) {
    let records = run_friday_feature(&registry);
    let labels: Vec<_> = records
        .iter()
        .map(|record| (record.scenario_name(), record.status().label()))
        .collect();
    assert_eq!(
        labels,
        [
            ("Sunday isn't Friday", "passed"),
            ("Friday is Friday", "passed"),
            ("Monday isn't Friday", "failed"),
            ("Tuesday is still to come", "pending"),
            ("Asking on <day> (day: Friday, answer: TGIF)", "passed"),
            ("Asking on <day> (day: Sunday, answer: Nope)", "passed"),
            ("Asking on <day> (day: Wednesday, answer: Nope)", "pending"),
        ]
    );
}

#[rstest]
fn monday_failure_shows_expected_and_actual(registry: StepRegistry<DayContext>) {
    let records = run_friday_feature(&registry);
    let ScenarioStatus::Failed(failure) = status_of(&records, "Monday isn't Friday") else {
        panic!("Monday should fail");
    };
    assert_eq!(failure.step_index(), 2);
    assert_eq!(failure.expected(), Some("TGIF"));
    assert_eq!(failure.actual(), Some("Nope"));
}

#[rstest]
fn tuesday_stops_at_the_first_step(registry: StepRegistry<DayContext>) {
    let records = run_friday_feature(&registry);
    let ScenarioStatus::Pending(pending) = status_of(&records, "Tuesday is still to come") else {
        panic!("Tuesday should be pending");
    };
    assert_eq!(pending.step_index(), 0);
    assert_eq!(pending.step(), "today is Tuesday");
    let tuesday = records
        .iter()
        .find(|record| record.scenario_name() == "Tuesday is still to come")
        .unwrap_or_else(|| panic!("Tuesday record missing"));
    assert_eq!(tuesday.tags(), ["midweek"]);
}

#[rstest]
fn pending_steps_skip_the_rest_of_the_scenario(registry: StepRegistry<DayContext>) {
    let scenario = Scenario::new("Wednesday then Friday")
        .given("today is Wednesday")
        .and("today is Friday");
    let Err(err) = execute_scenario(&registry, "inline", &scenario) else {
        panic!("Wednesday should be pending");
    };
    assert!(err.is_pending());
    assert_eq!(err.index(), 0);
}

#[rstest]
fn each_scenario_starts_with_a_fresh_context(registry: StepRegistry<DayContext>) {
    let friday = Scenario::new("Friday")
        .given("today is Friday")
        .when("I ask whether it's Friday yet");
    let ctx = execute_scenario(&registry, "inline", &friday)
        .unwrap_or_else(|err| panic!("Friday should pass: {err}"));
    assert_eq!(ctx.last_answer(), Some("TGIF"));

    let no_day = Scenario::new("no day")
        .when("I ask whether it's Friday yet")
        .then("I should be told \"Nope\"");
    let record = run_scenario(&registry, "inline", &no_day);
    assert!(record.status().is_passed());
}

#[rstest]
fn conjunctions_resolve_to_the_previous_keyword(registry: StepRegistry<DayContext>) {
    let scenario = Scenario::new("changed my mind")
        .given("today is Monday")
        .and("today is Friday")
        .when("I ask whether it's Friday yet")
        .then("I should be told \"TGIF\"");
    assert!(run_scenario(&registry, "inline", &scenario).status().is_passed());
}

#[rstest]
fn undefined_steps_fail_the_scenario(registry: StepRegistry<DayContext>) {
    let scenario = Scenario::new("Thursday").given("today is Thursday");
    let Err(err) = execute_scenario(&registry, "inline", &scenario) else {
        panic!("Thursday has no binding");
    };
    assert_eq!(
        err,
        ExecutionError::StepNotFound {
            index: 0,
            keyword: StepKeyword::Given,
            text: "today is Thursday".into(),
            feature_path: "inline".into(),
            scenario_name: "Thursday".into(),
        }
    );
    assert!(run_scenario(&registry, "inline", &scenario).status().is_failed());
}

#[rstest]
fn keyword_mismatch_is_not_found(registry: StepRegistry<DayContext>) {
    let scenario = Scenario::new("wrong keyword").when("today is Friday");
    let record = run_scenario(&registry, "inline", &scenario);
    assert!(record.status().is_failed());
}

#[rstest]
fn loads_files_without_a_trailing_newline(registry: StepRegistry<DayContext>) {
    let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let path = dir.path().join("short.feature");
    std::fs::write(
        &path,
        "Feature: Short\n  Scenario: Friday\n    Given today is Friday",
    )
    .unwrap_or_else(|err| panic!("write feature: {err}"));
    let feature = load_feature(&path).unwrap_or_else(|err| panic!("feature should load: {err}"));
    let records = run_feature(&registry, &feature);
    assert_eq!(records.len(), 1);
    assert!(records.iter().all(|record| record.status().is_passed()));
}
