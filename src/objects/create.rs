//! Building new values from a template and the call arguments.

use std::sync::Arc;

use crate::error::Result;
use crate::function::{Arguments, Function};
use crate::value::{Fields, Value};

/// The shape of a value to build.
///
/// A template is instantiated against the arguments of a call: positional
/// slots read an argument, function values receive every argument, and
/// sequences and records are instantiated element by element.
#[derive(Clone, Debug)]
pub enum Template {
    /// Copied into the output as is.
    Literal(Value),
    /// The argument at this position, or absent.
    Arg(usize),
    /// The function applied to all arguments.
    Call(Function),
    /// A sequence of instantiated templates.
    Sequence(Vec<Template>),
    /// A record of instantiated templates, keeping the key order.
    Record(Vec<(Arc<str>, Template)>),
}

impl Template {
    /// A literal value.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// The argument at `index`.
    pub const fn arg(index: usize) -> Self {
        Self::Arg(index)
    }

    /// A sequence template.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// A record template.
    pub fn record<I, K, T>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Arc<str>>,
        T: Into<Self>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(key, template)| (key.into(), template.into()))
                .collect(),
        )
    }

    /// Builds the value described by this template.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by an embedded function.
    pub fn instantiate(&self, arguments: &Arguments) -> Result<Value> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Arg(index) => Ok(arguments.get(*index).clone()),
            Self::Call(function) => function.invoke(arguments.iter().cloned()),
            Self::Sequence(items) => items
                .iter()
                .map(|item| item.instantiate(arguments))
                .collect::<Result<Vec<_>>>()
                .map(Value::from),
            Self::Record(fields) => fields
                .iter()
                .map(|(key, template)| Ok((Arc::clone(key), template.instantiate(arguments)?)))
                .collect::<Result<Fields>>()
                .map(Value::from),
        }
    }
}

impl From<Value> for Template {
    /// Reads a value as a template: function values become calls, sequences
    /// and records are read recursively and everything else is literal.
    fn from(value: Value) -> Self {
        match value {
            Value::Function(function) => Self::Call(function),
            Value::Sequence(items) => Self::Sequence(items.iter().cloned().map(Self::from).collect()),
            Value::Record(fields) => Self::Record(
                fields
                    .iter()
                    .map(|(key, child)| (Arc::clone(key), Self::from(child.clone())))
                    .collect(),
            ),
            other => Self::Literal(other),
        }
    }
}

impl From<Function> for Template {
    fn from(function: Function) -> Self {
        Self::Call(function)
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::Literal(Value::from(text))
    }
}

/// `(...arguments) -> template instantiated with the arguments`
///
/// # Examples
///
/// ```rust
/// use pointfree::function::{apply, call};
/// use pointfree::objects::{self, Template};
/// use pointfree::{numbers, Value};
///
/// let pair = objects::create(Template::record([
///     ("first", Template::arg(0)),
///     ("rest", Template::sequence([Template::arg(1), Template::arg(2)])),
/// ]));
/// assert_eq!(
///     apply(&pair, [Value::from(1), Value::from(2), Value::from(3)]).unwrap(),
///     Value::record([("first", Value::from(1)), ("rest", Value::sequence([2, 3]))])
/// );
///
/// let doubled = objects::create(Template::record([
///     ("value", Template::arg(0)),
///     ("double", numbers::mul().bind([Value::from(2)]).into()),
/// ]));
/// assert_eq!(
///     call(&doubled, 4).unwrap(),
///     Value::record([("value", 4), ("double", 8)])
/// );
/// ```
pub fn create(template: impl Into<Template>) -> Function {
    let template = template.into();
    Function::from_fn("Create", move |arguments| template.instantiate(&arguments))
}

/// `(template, ...arguments) -> template instantiated with the arguments`
///
/// The first argument is read as a [`Template`]: its function values are
/// applied to the remaining arguments, and a plain data value comes back as
/// is.
pub fn create_from_argument() -> Function {
    Function::from_fn("Create", |arguments| {
        let template = Template::from(arguments.get(0).clone());
        let rest: Arguments = arguments.iter().skip(1).cloned().collect();
        template.instantiate(&rest)
    })
}
