// ============================================================================
// mysql_dialect
// ============================================================================

pub mod config;
pub mod converter;
pub mod core;
pub mod dialect;

// Re-export main types for convenience
pub use config::DatabaseConfig;
pub use converter::{SqlConverter, generic_data_type};
pub use crate::core::{DataType, DialectError, NestedField, Result, SqlFragment, Value};
pub use dialect::{DialectKind, GenericDialect, MySqlDialect, SqlDialect, mysql::PathPolicy};
