use log::{debug, trace};

use crate::{DispatchConfig, DispatchError, Result, Wrapper};

/// The fixed base computation behind [`apply_direct`].
///
/// Always returns `1` whatever `num` is. This looks like a placeholder, but
/// callers may rely on it, so it stays constant until a real formula exists.
pub fn compute_base(_num: i32) -> i32 {
    1
}

/// `compute_base(param) + 1`, which is always `2`.
pub fn apply_direct(param: i32) -> i32 {
    compute_base(param).wrapping_add(1)
}

/// `wrapper.method() + 1`, wrapping at `i32::MAX`.
///
/// An absent wrapper is rejected with [`DispatchError::InvalidArgument`].
///
/// ```
/// use wrapcall::{apply_callback, DispatchError};
///
/// assert_eq!(apply_callback(Some(&|| 41)), Ok(42));
/// assert_eq!(
///     apply_callback(None),
///     Err(DispatchError::InvalidArgument("wrapper"))
/// );
/// ```
pub fn apply_callback(wrapper: Option<&dyn Wrapper>) -> Result<i32> {
    Dispatcher::default().apply_callback(wrapper)
}

/// Computes "one plus a supplied computation" under a [`DispatchConfig`].
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn apply_direct(&self, param: i32) -> Result<i32> {
        self.increment(compute_base(param))
    }

    pub fn apply_callback(&self, wrapper: Option<&dyn Wrapper>) -> Result<i32> {
        match wrapper {
            Some(wrapper) => self.apply(wrapper),
            None => {
                debug!("rejected dispatch without a wrapper");
                Err(DispatchError::InvalidArgument("wrapper"))
            }
        }
    }

    /// Invokes `wrapper.method()` exactly once and adds one.
    pub fn apply<W: Wrapper + ?Sized>(&self, wrapper: &W) -> Result<i32> {
        self.increment(wrapper.method())
    }

    /// Like [`Dispatcher::apply`], taking the computation as a plain closure.
    pub fn apply_fn(&self, f: impl FnOnce() -> i32) -> Result<i32> {
        self.increment(f())
    }

    fn increment(&self, value: i32) -> Result<i32> {
        let result = self.config.overflow.increment(value);
        trace!("dispatch: {value} -> {result:?}");
        result
    }
}
