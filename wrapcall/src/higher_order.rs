//! Functions that take or return other functions.

use crate::Callback;

/// Calls `f` with `1`.
pub fn apply_to_one<F: Fn(i32) -> String>(f: F) -> String {
    f(1)
}

pub fn calculate(x: i32, y: i32, operation: impl FnOnce(i32, i32) -> i32) -> i32 {
    operation(x, y)
}

pub fn sum(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}

pub fn multiply(x: i32, y: i32) -> i32 {
    x.wrapping_mul(y)
}

pub fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

/// Returns [`square`] as a value.
pub fn operation() -> Callback<i32, i32> {
    Callback::new(square)
}
