//! Core library for `is-it-friday`.
//!
//! The crate answers one question, whether today is Friday, and carries the
//! machinery to check that answer with behaviour scenarios: an explicit
//! step registry, the Friday step bindings, a scenario runner, a Gherkin
//! feature loader and report writers.
//!
//! ```
//! use friday::{Scenario, friday_steps, run_scenario};
//!
//! let registry = friday_steps().expect("bindings are valid");
//! let scenario = Scenario::new("Friday is Friday")
//!     .given("today is Friday")
//!     .when("I ask whether it's Friday yet")
//!     .then("I should be told \"TGIF\"");
//! let record = run_scenario(&registry, "inline", &scenario);
//! assert!(record.status().is_passed());
//! ```

pub mod config;
mod error;
pub mod execution;
pub mod feature;
pub mod registry;
pub mod reporting;
mod steps;
mod tracker;

pub use error::StepError;
pub use execution::{ExecutionError, execute_scenario, run_feature, run_scenario};
pub use feature::{Feature, FeatureError, Scenario, ScenarioStep, load_feature, parse_feature};
pub use friday_patterns::StepKeyword;
pub use registry::{RegistryError, StepArgs, StepDefinition, StepHandler, StepMatch, StepRegistry};
pub use reporting::{RunSummary, ScenarioRecord, ScenarioStatus};
pub use steps::{BINDING_COUNT, friday_steps};
pub use tracker::{DayContext, FRIDAY, NOPE, TGIF, evaluate};
