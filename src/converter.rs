use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::core::{DataType, NestedField, Result, SqlFragment, Value};
use crate::dialect::{DialectKind, SqlDialect};

/// Column type used when the active dialect has no override.
pub fn generic_data_type(data_type: &DataType) -> SqlFragment {
    let sql = match data_type {
        DataType::Int8 | DataType::UInt8 => "TINYINT",
        DataType::Int16 | DataType::UInt16 => "SMALLINT",
        DataType::Int32 | DataType::UInt32 => "INT",
        DataType::Int64 | DataType::UInt64 => "BIGINT",
        DataType::Bool => "BOOLEAN",
        DataType::Float => "FLOAT",
        DataType::Double => "DOUBLE",
        DataType::String | DataType::Text => "TEXT",
        DataType::Date => "DATE",
        DataType::Datetime => "TIMESTAMP",
        DataType::Uuid => "CHAR(36)",
        DataType::Json | DataType::Array(_) => "JSON",
        DataType::Data => "BLOB",
        DataType::Custom(name) => return SqlFragment::raw(name.clone()),
    };

    if data_type.is_unsigned() {
        SqlFragment::raw(format!("{} UNSIGNED", sql))
    } else {
        SqlFragment::raw(sql)
    }
}

/// The seam between a SQL generation pipeline and the active dialect.
///
/// Holds exactly one dialect for its whole lifetime. Column types go through
/// the dialect's overrides first and fall back to [`generic_data_type`].
#[derive(Debug, Clone)]
pub struct SqlConverter {
    dialect: Arc<dyn SqlDialect>,
}

impl SqlConverter {
    pub fn new(dialect: Arc<dyn SqlDialect>) -> Self {
        tracing::debug!(dialect = dialect.name(), "SQL converter created");
        Self { dialect }
    }

    pub fn for_kind(kind: DialectKind) -> Self {
        Self::new(kind.build())
    }

    /// Converter for the dialect a database configuration targets.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        tracing::debug!(url = %config.to_url(), "Selecting SQL dialect from config");
        Self::for_kind(config.dialect)
    }

    pub fn dialect(&self) -> &dyn SqlDialect {
        self.dialect.as_ref()
    }

    pub fn data_type(&self, data_type: &DataType) -> SqlFragment {
        match self.dialect.custom_data_type(data_type) {
            Some(sql) => {
                tracing::trace!(
                    dialect = self.dialect.name(),
                    %data_type,
                    sql = %sql,
                    "Dialect column type override"
                );
                sql
            }
            None => generic_data_type(data_type),
        }
    }

    pub fn nested_field(&self, field: &NestedField) -> Result<SqlFragment> {
        self.dialect.nested_field(field).inspect_err(|err| {
            tracing::debug!(
                dialect = self.dialect.name(),
                field = %field,
                error = %err,
                "Rejected nested field reference"
            );
        })
    }

    pub fn identifier(&self, ident: &str) -> Result<SqlFragment> {
        self.dialect.quote_identifier(ident)
    }

    pub fn literal(&self, value: &Value) -> SqlFragment {
        self.dialect.literal(value)
    }
}

impl Default for SqlConverter {
    fn default() -> Self {
        Self::for_kind(DialectKind::default())
    }
}
