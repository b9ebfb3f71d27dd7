//! The `compose!` macro for function composition.

/// Composes function values from right to left.
///
/// `compose!(f, g, h)` builds a [`Function`](crate::function::Function)
/// that behaves like `|x| f(g(h(x)))`. The rightmost stage receives every
/// argument of the composed function. See
/// [`compose::compose`](crate::compose::compose).
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` behaves like `compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity(), f)` behaves like `f`
/// - **Right Identity**: `compose!(f, identity())` behaves like `f`
///
/// # Syntax
///
/// - `compose!(f)` - Behaves like `f`
/// - `compose!(f, g)` - Behaves like `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of function values
///
/// # Examples
///
/// ```
/// use pointfree::function::call;
/// use pointfree::{compose, numbers, Value};
///
/// let add_one = numbers::add().bind([Value::from(1)]);
/// let double = numbers::mul().bind([Value::from(2)]);
///
/// // add_one(double(5)) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(call(&composed, 5).unwrap(), Value::from(11));
/// ```
#[macro_export]
macro_rules! compose {
    ($($stage:expr),+ $(,)?) => {
        $crate::compose::compose([$(::core::clone::Clone::clone(&$stage)),+])
    };
}
