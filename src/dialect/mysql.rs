use regex::Regex;

use super::{SqlDialect, float_literal, hex_literal, quote_string, quote_with};
use crate::core::{DataType, DialectError, NestedField, Result, SqlFragment, Value};

lazy_static::lazy_static! {
    // A single JSON path leg: an unquoted key (ECMAScript identifier) or the
    // `*` wildcard, optionally followed by array subscripts
    static ref PATH_LEG: Regex = Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*|\*)(\[(\d+|\*)\])*$")
        .expect("valid JSON path leg pattern");
}

/// How path segments are checked before they are spliced into the
/// `'$.<path>'` string literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathPolicy {
    /// Segments are embedded verbatim. Callers must not pass segments
    /// containing quotes or backslashes.
    #[default]
    Verbatim,
    /// Segments must be plain JSON path legs; anything else is rejected.
    Strict,
}

/// MySQL (and MariaDB) dialect.
///
/// ```
/// use mysql_dialect::{DataType, MySqlDialect, SqlDialect};
///
/// let mysql = MySqlDialect::new();
/// let expr = mysql
///     .nested_field_expression("data", &["address".to_string(), "city".to_string()])
///     .unwrap();
/// assert_eq!(expr.as_str(), "JSON_EXTRACT(data, '$.address.city')");
/// assert_eq!(mysql.custom_data_type(&DataType::Uuid).unwrap().as_str(), "VARBINARY(16)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySqlDialect {
    path_policy: PathPolicy,
}

impl MySqlDialect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dialect that refuses path segments which could break out of the
    /// JSON path string literal.
    pub fn strict() -> Self {
        Self::with_path_policy(PathPolicy::Strict)
    }

    pub fn with_path_policy(path_policy: PathPolicy) -> Self {
        Self { path_policy }
    }

    pub fn path_policy(&self) -> PathPolicy {
        self.path_policy
    }

    fn check_segments(&self, path: &[String]) -> Result<()> {
        if self.path_policy == PathPolicy::Verbatim {
            return Ok(());
        }

        match path.iter().find(|segment| !PATH_LEG.is_match(segment)) {
            Some(segment) => Err(DialectError::InvalidNestedField(format!(
                "path segment '{}' is not a plain JSON path key",
                segment
            ))),
            None => Ok(()),
        }
    }
}

impl SqlDialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn nested_field_expression(&self, column: &str, path: &[String]) -> Result<SqlFragment> {
        let field = NestedField::new(column, path.iter().cloned());
        field.validate()?;
        self.check_segments(&field.path)?;

        let path = field.dotted_path();
        Ok(SqlFragment::raw(format!(
            "JSON_EXTRACT({}, '$.{}')",
            column, path
        )))
    }

    fn custom_data_type(&self, data_type: &DataType) -> Option<SqlFragment> {
        let sql = match data_type {
            DataType::String => "VARCHAR(255)",
            DataType::Datetime => "DATETIME(6)",
            DataType::Uuid => "VARBINARY(16)",
            DataType::Bool => "BOOL",
            DataType::Array(_) => "JSON",
            _ => return None,
        };
        Some(SqlFragment::raw(sql))
    }

    fn quote_identifier(&self, ident: &str) -> Result<SqlFragment> {
        quote_with(ident, '`')
    }

    fn literal(&self, value: &Value) -> SqlFragment {
        let sql = match value {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => float_literal(*f),
            Value::Text(s) => quote_string(s, true),
            Value::Boolean(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
            Value::Bytes(bytes) => hex_literal(bytes),
            // VARBINARY(16) columns hold the raw bytes
            Value::Uuid(u) => hex_literal(u.as_bytes()),
            Value::Timestamp(ts) => format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S%.6f")),
            Value::Json(j) => quote_string(&j.to_string(), true),
        };
        SqlFragment::raw(sql)
    }
}
