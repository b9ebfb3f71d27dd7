//! Function values: the uniform contract every combinator implements.
//!
//! A [`Function`] pairs an evaluation rule (a [`Combinator`]) with the
//! partial arguments it has been bound with. Invoking it merges the bound
//! arguments with the call-site arguments (see [`merge_arguments`]) and
//! evaluates the rule on the result.
//!
//! # Overview
//!
//! - [`Combinator`]: the evaluation rule trait, the library's extension point
//! - [`Function`]: an immutable, shareable function value
//! - [`Function::bind`]: partial application with [`__`] placeholders
//! - [`eval`], [`call`], [`call2`], [`call3`], [`apply`]: evaluators for
//!   0, 1, 2, 3 and N call-site arguments
//!
//! # Examples
//!
//! ```rust
//! use pointfree::function::{apply, call, call2, eval, Function, __};
//! use pointfree::{numbers, Value};
//!
//! let sub = numbers::sub();
//! assert_eq!(call2(&sub, 10, 3).unwrap(), Value::from(7));
//!
//! // Fix the first argument
//! let ten_minus = sub.bind([10.into(), __]);
//! assert_eq!(call(&ten_minus, 3).unwrap(), Value::from(7));
//!
//! // A single bound argument fills the second slot
//! let minus_three = sub.bind([Value::from(3)]);
//! assert_eq!(call(&minus_three, 10).unwrap(), Value::from(7));
//!
//! // Fully bound: a thunk
//! let seven = sub.bind([Value::from(10), Value::from(3)]);
//! assert_eq!(eval(&seven).unwrap(), Value::from(7));
//!
//! // Ad hoc function values
//! let count = Function::from_fn("Count", |arguments| Ok(Value::from(arguments.len())));
//! assert_eq!(apply(&count, [Value::Null, Value::Null]).unwrap(), Value::from(2));
//! ```

mod arguments;
mod merge;

pub use arguments::{__, Argument, Arguments};
pub use merge::merge_arguments;

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value::Value;

/// An evaluation rule: maps a complete argument list to a result.
///
/// Implementations must be pure. Evaluating the same rule on the same
/// arguments always yields the same result, and the arguments are never
/// mutated (they are owned values, and [`Value`] is immutable).
///
/// # Examples
///
/// ```rust
/// use pointfree::function::{call, Arguments, Combinator, Function};
/// use pointfree::{Result, Value};
///
/// #[derive(Debug)]
/// struct Describe;
///
/// impl Combinator for Describe {
///     fn name(&self) -> &'static str {
///         "Describe"
///     }
///
///     fn evaluate(&self, arguments: Arguments) -> Result<Value> {
///         Ok(Value::from(arguments.get(0).kind()))
///     }
/// }
///
/// let describe = Function::new(Describe);
/// assert_eq!(call(&describe, 1).unwrap(), Value::from("number"));
/// ```
pub trait Combinator: Send + Sync + fmt::Debug {
    /// Name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Evaluates the rule on fully merged arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when an argument has a shape the rule cannot handle.
    fn evaluate(&self, arguments: Arguments) -> Result<Value>;
}

/// A [`Combinator`] backed by a closure.
struct FnCombinator<F> {
    name: &'static str,
    function: F,
}

impl<F> fmt::Debug for FnCombinator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FnCombinator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> Combinator for FnCombinator<F>
where
    F: Fn(Arguments) -> Result<Value> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, arguments: Arguments) -> Result<Value> {
        (self.function)(arguments)
    }
}

/// An immutable function value with optional bound arguments.
///
/// Cloning is cheap: the rule and the bound arguments are shared.
#[derive(Clone)]
pub struct Function {
    combinator: Arc<dyn Combinator>,
    partial: Arc<[Argument]>,
}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

impl Function {
    /// Wraps an evaluation rule into an unbound function value.
    pub fn new<C>(combinator: C) -> Self
    where
        C: Combinator + 'static,
    {
        Self {
            combinator: Arc::new(combinator),
            partial: Arc::from(Vec::new()),
        }
    }

    /// Creates a function value from a closure over the merged arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::function::{call2, Function};
    /// use pointfree::Value;
    ///
    /// let first = Function::from_fn("First", |arguments| Ok(arguments.get(0).clone()));
    /// assert_eq!(call2(&first, "a", "b").unwrap(), Value::from("a"));
    /// ```
    pub fn from_fn<F>(name: &'static str, function: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(FnCombinator { name, function })
    }

    /// Name of the underlying evaluation rule.
    pub fn name(&self) -> &'static str {
        self.combinator.name()
    }

    /// The bound partial arguments, in binding order.
    pub fn partial_arguments(&self) -> &[Argument] {
        &self.partial
    }

    /// Partially applies the function value.
    ///
    /// The new arguments are appended after any already bound ones. Use
    /// [`__`] to leave a slot open for the call site. A function value
    /// bound with exactly one concrete argument receives it in the
    /// **second** slot; see [`merge_arguments`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointfree::function::call;
    /// use pointfree::{numbers, Value};
    ///
    /// let greater_than_five = numbers::greater_than().bind([Value::from(5)]);
    /// assert_eq!(call(&greater_than_five, 10).unwrap(), Value::Bool(true));
    /// ```
    #[must_use]
    pub fn bind<I>(&self, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        let partial: Vec<Argument> = self
            .partial
            .iter()
            .cloned()
            .chain(arguments.into_iter().map(Into::into))
            .collect();
        Self {
            combinator: Arc::clone(&self.combinator),
            partial: Arc::from(partial),
        }
    }

    /// Merges `input` with the bound arguments and evaluates the rule.
    ///
    /// # Errors
    ///
    /// Propagates the error raised by the evaluation rule.
    #[tracing::instrument(level = "trace", skip_all, fields(function = self.name()))]
    pub fn invoke<I>(&self, input: I) -> Result<Value>
    where
        I: IntoIterator<Item = Value>,
    {
        let arguments = merge_arguments(input, &self.partial);
        tracing::trace!(arity = arguments.len(), "merged arguments");
        self.combinator.evaluate(arguments)
    }

    /// Evaluates with no call-site argument.
    ///
    /// # Errors
    ///
    /// Propagates the error raised by the evaluation rule.
    pub fn eval(&self) -> Result<Value> {
        self.invoke([])
    }

    /// Evaluates with one call-site argument.
    ///
    /// # Errors
    ///
    /// Propagates the error raised by the evaluation rule.
    pub fn call(&self, first: impl Into<Value>) -> Result<Value> {
        self.invoke([first.into()])
    }

    /// Evaluates with two call-site arguments.
    ///
    /// # Errors
    ///
    /// Propagates the error raised by the evaluation rule.
    pub fn call2(&self, first: impl Into<Value>, second: impl Into<Value>) -> Result<Value> {
        self.invoke([first.into(), second.into()])
    }

    /// Evaluates with three call-site arguments.
    ///
    /// # Errors
    ///
    /// Propagates the error raised by the evaluation rule.
    pub fn call3(
        &self,
        first: impl Into<Value>,
        second: impl Into<Value>,
        third: impl Into<Value>,
    ) -> Result<Value> {
        self.invoke([first.into(), second.into(), third.into()])
    }

    /// Returns `true` if both handles share the same rule and bound arguments.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.combinator, &other.combinator) && Arc::ptr_eq(&self.partial, &other.partial)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name())
            .field("partial", &self.partial)
            .finish()
    }
}

/// Evaluates `function` with no call-site argument.
///
/// # Errors
///
/// Propagates the error raised by the evaluation rule.
pub fn eval(function: &Function) -> Result<Value> {
    function.eval()
}

/// Evaluates `function` with one call-site argument.
///
/// # Errors
///
/// Propagates the error raised by the evaluation rule.
pub fn call(function: &Function, first: impl Into<Value>) -> Result<Value> {
    function.call(first)
}

/// Evaluates `function` with two call-site arguments.
///
/// # Errors
///
/// Propagates the error raised by the evaluation rule.
pub fn call2(function: &Function, first: impl Into<Value>, second: impl Into<Value>) -> Result<Value> {
    function.call2(first, second)
}

/// Evaluates `function` with three call-site arguments.
///
/// # Errors
///
/// Propagates the error raised by the evaluation rule.
pub fn call3(
    function: &Function,
    first: impl Into<Value>,
    second: impl Into<Value>,
    third: impl Into<Value>,
) -> Result<Value> {
    function.call3(first, second, third)
}

/// Evaluates `function` with any number of call-site arguments.
///
/// # Errors
///
/// Propagates the error raised by the evaluation rule.
pub fn apply<I>(function: &Function, arguments: I) -> Result<Value>
where
    I: IntoIterator<Item = Value>,
{
    function.invoke(arguments)
}
