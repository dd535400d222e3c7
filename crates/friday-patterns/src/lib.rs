//! Step-pattern parsing and matching for is-it-friday.
//!
//! Patterns are plain sentences with optional `{name}` or `{name:hint}`
//! placeholders. The crate lexes them, compiles anchored regular expressions,
//! extracts placeholder values from step text, and ranks overlapping patterns
//! by specificity so the step registry can pick the best binding.

mod capture;
mod errors;
mod hint;
mod keyword;
mod pattern;
mod specificity;

pub use capture::{extract_captured_values, unquote};
pub use errors::{PatternError, PlaceholderErrorInfo};
pub use hint::{get_type_pattern, is_string_hint};
pub use keyword::{StepKeyword, StepKeywordParseError, UnsupportedStepType};
pub use pattern::{
    CompiledPattern, Placeholder, build_regex_from_pattern, compile_pattern,
    compile_regex_from_pattern,
};
pub use specificity::SpecificityScore;
