mod error;
pub use error::Error;

pub mod catalog;
pub use catalog::{FieldNode, FieldRecord};

pub mod store;
pub use store::{FieldObserver, FieldStore};

/// A Result type alias that uses fieldglass's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
