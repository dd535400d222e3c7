//! The "Is it Friday yet?" step bindings.

use friday_patterns::StepKeyword;

use crate::error::StepError;
use crate::registry::{RegistryError, StepArgs, StepRegistry};
use crate::tracker::DayContext;

/// Number of Friday step bindings.
pub const BINDING_COUNT: usize = 7;

/// Build a registry holding every Friday step binding.
///
/// Each binding's recorded location is the line of its `register` call.
///
/// # Errors
///
/// Returns [`RegistryError`] if a binding pattern fails to compile or is
/// registered twice.
///
/// # Examples
///
/// ```
/// use friday::{DayContext, StepKeyword, friday_steps};
///
/// let registry = friday_steps().expect("bindings are valid");
/// let found = registry
///     .find(StepKeyword::Given, "today is Friday")
///     .expect("Friday is bound");
/// let mut ctx = DayContext::new();
/// found.definition.run(&mut ctx, &found.args).expect("step runs");
/// assert_eq!(ctx.current_day(), Some("Friday"));
/// ```
pub fn friday_steps() -> Result<StepRegistry<DayContext>, RegistryError> {
    let mut registry = StepRegistry::new();
    registry.register(StepKeyword::Given, "today is Sunday", today_is_sunday)?;
    registry.register(StepKeyword::Given, "today is Monday", today_is_monday)?;
    registry.register(StepKeyword::Given, "today is Tuesday", today_is_tuesday)?;
    registry.register(StepKeyword::Given, "today is Wednesday", today_is_wednesday)?;
    registry.register(StepKeyword::Given, "today is Friday", today_is_friday)?;
    registry.register(StepKeyword::When, "I ask whether it's Friday yet", ask_whether_friday)?;
    registry.register(StepKeyword::Then, "I should be told {expected:string}", should_be_told)?;
    Ok(registry)
}

fn today_is_sunday(ctx: &mut DayContext, _: &StepArgs) -> Result<(), StepError> {
    ctx.set_day("Sunday");
    Ok(())
}

fn today_is_monday(ctx: &mut DayContext, _: &StepArgs) -> Result<(), StepError> {
    ctx.set_day("Monday");
    Ok(())
}

// Tuesday and Wednesday stay unwritten.
fn today_is_tuesday(_: &mut DayContext, args: &StepArgs) -> Result<(), StepError> {
    Err(StepError::not_implemented(args.text()))
}

fn today_is_wednesday(_: &mut DayContext, args: &StepArgs) -> Result<(), StepError> {
    Err(StepError::not_implemented(args.text()))
}

fn today_is_friday(ctx: &mut DayContext, _: &StepArgs) -> Result<(), StepError> {
    ctx.set_day("Friday");
    Ok(())
}

fn ask_whether_friday(ctx: &mut DayContext, _: &StepArgs) -> Result<(), StepError> {
    ctx.ask();
    Ok(())
}

fn should_be_told(ctx: &mut DayContext, args: &StepArgs) -> Result<(), StepError> {
    ctx.expect_answer(args.required("expected")?)
}
