pub mod generic;
pub mod mysql;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{DataType, DialectError, NestedField, Result, SqlFragment, Value};

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;

/// Dialect-specific pieces of SQL generation.
///
/// A SQL generation pipeline holds one implementation and asks it for the
/// fragments whose syntax differs between database engines. Implementations
/// are stateless, so one instance can be shared across any number of
/// compilation contexts.
pub trait SqlDialect: Send + Sync + fmt::Debug {
    /// Short name used in logs and dialect lookups
    fn name(&self) -> &'static str;

    /// Expression extracting the value at `path` inside a JSON `column`.
    ///
    /// Fails with [`DialectError::InvalidNestedField`] when the column is
    /// blank, the path is empty or contains an empty segment.
    fn nested_field_expression(&self, column: &str, path: &[String]) -> Result<SqlFragment>;

    /// Column type override for `data_type`.
    ///
    /// `None` means the dialect has no specific representation and the
    /// caller should use its generic mapping.
    fn custom_data_type(&self, data_type: &DataType) -> Option<SqlFragment>;

    fn nested_field(&self, field: &NestedField) -> Result<SqlFragment> {
        self.nested_field_expression(&field.column, &field.path)
    }

    /// Quotes an identifier with the SQL-standard double quotes.
    fn quote_identifier(&self, ident: &str) -> Result<SqlFragment> {
        quote_with(ident, '"')
    }

    /// Renders `value` as an inline SQL literal.
    fn literal(&self, value: &Value) -> SqlFragment {
        SqlFragment::raw(standard_literal(value))
    }
}

/// Available dialect variants, selected once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectKind {
    #[default]
    MySql,
    Generic,
}

impl DialectKind {
    /// Looks a dialect up by the names used in connection URLs and
    /// configuration files.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "generic" | "sql" | "ansi" => Ok(Self::Generic),
            _ => {
                tracing::warn!(dialect = %name, "Unknown SQL dialect requested");
                Err(DialectError::UnsupportedDialect(name.to_string()))
            }
        }
    }

    pub fn build(self) -> Arc<dyn SqlDialect> {
        match self {
            Self::MySql => Arc::new(MySqlDialect::new()),
            Self::Generic => Arc::new(GenericDialect),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MySql => write!(f, "mysql"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

impl std::str::FromStr for DialectKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Wraps `ident` in `quote`, doubling any embedded quote character.
pub(crate) fn quote_with(ident: &str, quote: char) -> Result<SqlFragment> {
    if ident.is_empty() {
        return Err(DialectError::InvalidIdentifier(
            "identifier is empty".to_string(),
        ));
    }

    let mut quoted = String::with_capacity(ident.len() + 2);
    quoted.push(quote);
    for ch in ident.chars() {
        if ch == quote {
            quoted.push(quote);
        }
        quoted.push(ch);
    }
    quoted.push(quote);
    Ok(SqlFragment::raw(quoted))
}

/// Single-quoted string literal. Quotes are doubled; backslashes are
/// doubled too when the target treats them as escape characters.
pub(crate) fn quote_string(value: &str, escape_backslash: bool) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => quoted.push_str("''"),
            '\\' if escape_backslash => quoted.push_str("\\\\"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

pub(crate) fn hex_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 3);
    out.push_str("X'");
    for byte in bytes {
        out.push_str(&format!("{:02X}", byte));
    }
    out.push('\'');
    out
}

pub(crate) fn float_literal(f: f64) -> String {
    // No SQL dialect has a portable NaN/Infinity literal
    if f.is_finite() {
        format!("{:?}", f)
    } else {
        "NULL".to_string()
    }
}

fn standard_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => float_literal(*f),
        Value::Text(s) => quote_string(s, false),
        Value::Boolean(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Value::Bytes(bytes) => hex_literal(bytes),
        Value::Uuid(u) => quote_string(&u.hyphenated().to_string(), false),
        Value::Timestamp(ts) => format!(
            "TIMESTAMP '{}'",
            ts.format("%Y-%m-%d %H:%M:%S%.6f")
        ),
        Value::Json(j) => quote_string(&j.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(DialectKind::from_name("MySQL").unwrap(), DialectKind::MySql);
        assert_eq!(DialectKind::from_name("mariadb").unwrap(), DialectKind::MySql);
        assert_eq!(
            "generic".parse::<DialectKind>().unwrap(),
            DialectKind::Generic
        );
        assert!(matches!(
            DialectKind::from_name("oracle"),
            Err(DialectError::UnsupportedDialect(_))
        ));
    }

    #[test]
    fn test_kind_build() {
        assert_eq!(DialectKind::MySql.build().name(), "mysql");
        assert_eq!(DialectKind::Generic.build().name(), "generic");
        assert_eq!(DialectKind::default(), DialectKind::MySql);
    }

    #[test]
    fn test_quote_with() {
        assert_eq!(quote_with("users", '`').unwrap(), "`users`");
        assert_eq!(quote_with("we`ird", '`').unwrap(), "`we``ird`");
        assert!(quote_with("", '"').is_err());
    }

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("it's", false), "'it''s'");
        assert_eq!(quote_string("a\\b", false), "'a\\b'");
        assert_eq!(quote_string("a\\b", true), "'a\\\\b'");
    }

    #[test]
    fn test_hex_and_float_literals() {
        assert_eq!(hex_literal(&[0x00, 0xAB, 0x10]), "X'00AB10'");
        assert_eq!(hex_literal(&[]), "X''");
        assert_eq!(float_literal(1.5), "1.5");
        assert_eq!(float_literal(2.0), "2.0");
        assert_eq!(float_literal(f64::NAN), "NULL");
    }
}
