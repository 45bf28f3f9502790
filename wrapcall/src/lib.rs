mod callback;
mod config;
mod dispatcher;
mod error;
pub mod higher_order;
mod wrapper;

pub use crate::wrapper::*;
pub use callback::*;
pub use config::*;
pub use dispatcher::*;
pub use error::*;
pub use wrapcall_macros::*;
