use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A required argument was absent.
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// `value + 1` does not fit in an `i32`.
    #[error("overflow: {value} + 1 does not fit in i32")]
    Overflow { value: i32 },
}
