//! Pipeline evaluators and composition of function values.

use std::sync::Arc;

use crate::error::Result;
use crate::function::{Arguments, Function};
use crate::value::Value;

/// Applies `stages` to `seed` from first to last.
///
/// `pipe(x, [f, g, h])` evaluates `h(g(f(x)))`. An empty stage list returns
/// the seed unchanged. Evaluation stops at the first stage that fails, and
/// at the first stage that produces [`Value::Absent`], which becomes the
/// result.
///
/// # Errors
///
/// Returns the first error raised by a stage.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::pipe;
/// use pointfree::{numbers, Value};
///
/// let result = pipe(5, &[
///     numbers::mul().bind([Value::from(2)]),
///     numbers::add().bind([Value::from(1)]),
/// ]);
/// assert_eq!(result.unwrap(), Value::from(11));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(stages = stages.len()))]
pub fn pipe(seed: impl Into<Value>, stages: &[Function]) -> Result<Value> {
    run_stages(seed.into(), stages.iter())
}

/// Applies `stages` to `seed` from last to first.
///
/// `pipe_right([f, g, h], x)` evaluates `f(g(h(x)))`: the list is written
/// left to right but the last element runs first. Short-circuits exactly
/// like [`pipe`].
///
/// # Errors
///
/// Returns the first error raised by a stage.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::pipe_right;
/// use pointfree::{numbers, Value};
///
/// let result = pipe_right(&[
///     numbers::mul().bind([Value::from(2)]),
///     numbers::add().bind([Value::from(1)]),
/// ], 5);
/// assert_eq!(result.unwrap(), Value::from(12));
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(stages = stages.len()))]
pub fn pipe_right(stages: &[Function], seed: impl Into<Value>) -> Result<Value> {
    run_stages(seed.into(), stages.iter().rev())
}

fn run_stages<'a, I>(seed: Value, stages: I) -> Result<Value>
where
    I: Iterator<Item = &'a Function>,
{
    let mut accumulator = seed;
    for (index, stage) in stages.enumerate() {
        tracing::trace!(index, function = stage.name(), "applying stage");
        accumulator = stage.call(accumulator)?;
        if accumulator.is_absent() {
            tracing::trace!(index, function = stage.name(), "stage produced absent");
            break;
        }
    }
    Ok(accumulator)
}

/// Runs the stage receiving the full argument list, then threads its
/// result through the remaining stages.
fn run_composed<'a, I>(first: Option<&Function>, rest: I, arguments: Arguments) -> Result<Value>
where
    I: Iterator<Item = &'a Function>,
{
    let Some(first) = first else {
        return Ok(arguments.get(0).clone());
    };
    let seed = first.invoke(arguments)?;
    if seed.is_absent() {
        return Ok(seed);
    }
    run_stages(seed, rest)
}

/// Composes function values right to left.
///
/// `compose([f, g, h])` behaves like `|x| f(g(h(x)))`. The last stage
/// receives every argument the composed function is called with, so the
/// result stays bindable like any function value. Composing nothing yields
/// the identity.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::compose;
/// use pointfree::function::call2;
/// use pointfree::{numbers, Value};
///
/// // negate(a - b)
/// let composed = compose([numbers::negate(), numbers::sub()]);
/// assert_eq!(call2(&composed, 10, 3).unwrap(), Value::from(-7));
/// ```
pub fn compose<I>(stages: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let stages: Arc<[Function]> = stages.into_iter().collect();
    Function::from_fn("Compose", move |arguments| {
        let mut remaining = stages.iter().rev();
        run_composed(remaining.next(), remaining, arguments)
    })
}

/// Composes function values left to right.
///
/// `compose_left([f, g, h])` behaves like `|x| h(g(f(x)))`; the first
/// stage receives every argument.
///
/// # Examples
///
/// ```rust
/// use pointfree::compose::compose_left;
/// use pointfree::function::call;
/// use pointfree::{numbers, Value};
///
/// let composed = compose_left([
///     numbers::add().bind([Value::from(1)]),
///     numbers::mul().bind([Value::from(10)]),
/// ]);
/// assert_eq!(call(&composed, 2).unwrap(), Value::from(30));
/// ```
pub fn compose_left<I>(stages: I) -> Function
where
    I: IntoIterator<Item = Function>,
{
    let stages: Arc<[Function]> = stages.into_iter().collect();
    Function::from_fn("ComposeLeft", move |arguments| {
        let mut remaining = stages.iter();
        run_composed(remaining.next(), remaining, arguments)
    })
}
