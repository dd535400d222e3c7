//! Step registration and lookup.
//!
//! A [`StepRegistry`] is an explicit table mapping a keyword and a step
//! pattern to a handler function. Lookup tries an exact pattern match first
//! and then falls back to the most specific parameterised pattern.

use std::collections::HashMap;
use std::fmt;
use std::panic::Location;

use friday_patterns::{CompiledPattern, PatternError, StepKeyword, compile_pattern};
use thiserror::Error;

use crate::error::StepError;

/// Handler executed when a step matches.
pub type StepHandler<C> = fn(&mut C, &StepArgs) -> Result<(), StepError>;

/// Step text and placeholder values captured for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepArgs {
    text: String,
    values: Vec<(String, String)>,
}

impl StepArgs {
    /// Bundle the step text with named captured values.
    #[must_use]
    pub fn new(text: impl Into<String>, values: Vec<(String, String)>) -> Self {
        Self {
            text: text.into(),
            values,
        }
    }

    /// The step text as written in the scenario.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The value captured for placeholder `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The value captured for placeholder `name`, or an error for handlers
    /// to propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::MissingArgument`] when nothing was captured.
    pub fn required(&self, name: &str) -> Result<&str, StepError> {
        self.get(name).ok_or_else(|| StepError::MissingArgument {
            name: name.to_string(),
        })
    }
}

/// A single registered binding.
pub struct StepDefinition<C> {
    keyword: StepKeyword,
    pattern: CompiledPattern,
    handler: StepHandler<C>,
    location: &'static Location<'static>,
}

impl<C> StepDefinition<C> {
    /// Keyword the binding answers to.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// The compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Source location of the registration call.
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Invoke the handler against `ctx`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the handler returns.
    pub fn run(&self, ctx: &mut C, args: &StepArgs) -> Result<(), StepError> {
        (self.handler)(ctx, args)
    }

    fn args_for(&self, text: &str) -> Option<StepArgs> {
        let values = self.pattern.captures(text)?;
        let named = self
            .pattern
            .placeholders()
            .iter()
            .map(|p| p.name.clone())
            .zip(values)
            .collect();
        Some(StepArgs::new(text, named))
    }
}

impl<C> fmt::Debug for StepDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("keyword", &self.keyword)
            .field("pattern", &self.pattern.as_str())
            .field("location", &format_args!("{}", self.location))
            .finish_non_exhaustive()
    }
}

/// A binding matched against step text, ready to run.
#[derive(Debug)]
pub struct StepMatch<'r, C> {
    /// The binding that matched.
    pub definition: &'r StepDefinition<C>,
    /// Values captured from the step text.
    pub args: StepArgs,
}

/// Errors raised while building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The pattern could not be compiled.
    #[error("invalid step pattern '{pattern}' at {location}: {source}")]
    InvalidPattern {
        /// Pattern text as supplied.
        pattern: String,
        /// Where the registration was attempted.
        location: String,
        /// Underlying compilation failure.
        #[source]
        source: PatternError,
    },
    /// A binding with the same keyword and pattern already exists.
    #[error("duplicate step for '{keyword}' + '{pattern}' defined at {location}, first defined at {first}")]
    Duplicate {
        /// Keyword of the clashing binding.
        keyword: StepKeyword,
        /// Pattern text of the clashing binding.
        pattern: String,
        /// Location of the rejected registration.
        location: String,
        /// Location of the binding already registered.
        first: String,
    },
}

/// Ordered table of step bindings for context type `C`.
pub struct StepRegistry<C> {
    definitions: Vec<StepDefinition<C>>,
    by_pattern: HashMap<(StepKeyword, String), usize>,
}

impl<C> Default for StepRegistry<C> {
    fn default() -> Self {
        Self {
            definitions: Vec::new(),
            by_pattern: HashMap::new(),
        }
    }
}

impl<C> fmt::Debug for StepRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.definitions).finish()
    }
}

impl<C> StepRegistry<C> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `keyword` steps matching `pattern`.
    ///
    /// Conjunction keywords are stored as given; feature steps are resolved
    /// to `Given`/`When`/`Then` before lookup, so bindings should use those.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPattern`] when the pattern does not
    /// compile and [`RegistryError::Duplicate`] when the keyword and pattern
    /// are already bound.
    #[track_caller]
    pub fn register(
        &mut self,
        keyword: StepKeyword,
        pattern: &str,
        handler: StepHandler<C>,
    ) -> Result<&mut Self, RegistryError> {
        let location = Location::caller();
        let key = (keyword, pattern.to_string());
        if let Some(first) = self
            .by_pattern
            .get(&key)
            .and_then(|&index| self.definitions.get(index))
        {
            return Err(RegistryError::Duplicate {
                keyword,
                pattern: key.1,
                location: location.to_string(),
                first: first.location.to_string(),
            });
        }
        let compiled = compile_pattern(pattern).map_err(|source| RegistryError::InvalidPattern {
            pattern: pattern.to_string(),
            location: location.to_string(),
            source,
        })?;
        self.by_pattern.insert(key, self.definitions.len());
        self.definitions.push(StepDefinition {
            keyword,
            pattern: compiled,
            handler,
            location,
        });
        Ok(self)
    }

    /// Registered bindings in registration order.
    #[must_use]
    pub fn definitions(&self) -> &[StepDefinition<C>] {
        &self.definitions
    }

    /// Number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no bindings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Find the binding for a step and capture its arguments.
    ///
    /// A binding whose pattern text equals `text` wins outright. Otherwise
    /// the matching pattern with the highest specificity is chosen; ties go
    /// to the earliest registration.
    #[must_use]
    pub fn find(&self, keyword: StepKeyword, text: &str) -> Option<StepMatch<'_, C>> {
        if let Some(found) = self.find_exact(keyword, text) {
            return Some(found);
        }
        self.definitions
            .iter()
            .filter(|def| def.keyword == keyword)
            .filter_map(|def| def.args_for(text).map(|args| StepMatch { definition: def, args }))
            .rev()
            .max_by_key(|found| found.definition.pattern.specificity())
    }

    fn find_exact(&self, keyword: StepKeyword, text: &str) -> Option<StepMatch<'_, C>> {
        let index = *self.by_pattern.get(&(keyword, text.to_string()))?;
        let definition = self.definitions.get(index)?;
        // `{{` escapes mean a pattern's text is not always the text it matches.
        let args = definition.args_for(text)?;
        Some(StepMatch { definition, args })
    }
}
