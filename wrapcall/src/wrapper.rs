/// A zero-argument computation producing an `i32`, passed around as a value.
///
/// This is the single-method capability a caller hands to the dispatcher in
/// place of a function. Any `Fn() -> i32` already is one, so closures and
/// function items can be passed without declaring a type:
///
/// ```
/// use wrapcall::{apply_callback, Wrapper};
///
/// let captured = 41;
/// let answer = move || captured;
/// assert_eq!(answer.method(), 41);
/// assert_eq!(apply_callback(Some(&answer)).unwrap(), 42);
/// ```
///
/// Named implementors can be generated from a function with
/// [`#[wrapper]`](macro@crate::wrapper).
pub trait Wrapper {
    fn method(&self) -> i32;
}

impl<F: Fn() -> i32> Wrapper for F {
    fn method(&self) -> i32 {
        self()
    }
}
