use std::fmt;

use crate::Wrapper;

/// An owned unary function value.
///
/// Unlike a borrowed [`Wrapper`], a `Callback` can be stored, returned from a
/// function, or shared across threads.
pub struct Callback<I, O>(Box<dyn Call<I, O> + Send + Sync>);

impl<I, O> Callback<I, O> {
    pub fn new(call: impl Call<I, O> + Send + Sync + 'static) -> Self {
        Self(Box::new(call))
    }

    pub fn call(&self, input: I) -> O {
        self.0.call(input)
    }
}

impl<I, O> fmt::Debug for Callback<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback")
            .field(&std::any::type_name::<fn(I) -> O>())
            .finish()
    }
}

pub trait Call<I, O> {
    fn call(&self, input: I) -> O;
}

impl<I, O, F: Fn(I) -> O> Call<I, O> for F {
    fn call(&self, input: I) -> O {
        self(input)
    }
}

impl Wrapper for Callback<(), i32> {
    fn method(&self) -> i32 {
        self.call(())
    }
}
