pub mod error;
pub mod types;
pub mod value;

pub use error::{DialectError, Result};
pub use types::{DataType, NestedField, SqlFragment};
pub use value::Value;
