use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DialectError, Result};

/// Database-agnostic column type, as declared by the host schema layer.
///
/// Dialects translate these into concrete column types; the ones a dialect
/// does not override fall back to the generic mapping in
/// [`crate::converter::generic_data_type`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Bool,
    Float,
    Double,
    String,
    Text,
    Date,
    Datetime,
    Uuid,
    Json,
    /// Raw bytes
    Data,
    Array(Box<DataType>),
    /// Type name passed through verbatim
    Custom(String),
}

impl DataType {
    pub fn array_of(element: DataType) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
        )
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64
        )
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int8 => write!(f, "int8"),
            Self::Int16 => write!(f, "int16"),
            Self::Int32 => write!(f, "int32"),
            Self::Int64 => write!(f, "int64"),
            Self::UInt8 => write!(f, "uint8"),
            Self::UInt16 => write!(f, "uint16"),
            Self::UInt32 => write!(f, "uint32"),
            Self::UInt64 => write!(f, "uint64"),
            Self::Bool => write!(f, "bool"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::String => write!(f, "string"),
            Self::Text => write!(f, "text"),
            Self::Date => write!(f, "date"),
            Self::Datetime => write!(f, "datetime"),
            Self::Uuid => write!(f, "uuid"),
            Self::Json => write!(f, "json"),
            Self::Data => write!(f, "data"),
            Self::Array(inner) => write!(f, "array<{}>", inner),
            Self::Custom(name) => write!(f, "custom({})", name),
        }
    }
}

/// Raw SQL text embedded verbatim into a generated statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SqlFragment(String);

impl SqlFragment {
    pub fn raw(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SqlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SqlFragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SqlFragment> for String {
    fn from(fragment: SqlFragment) -> Self {
        fragment.0
    }
}

impl PartialEq<str> for SqlFragment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SqlFragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A reference into a structured (JSON) column: the column plus the path
/// of keys leading to the addressed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NestedField {
    pub column: String,
    pub path: Vec<String>,
}

impl NestedField {
    pub fn new<I, S>(column: impl Into<String>, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column: column.into(),
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Path segments joined with `.`, e.g. `address.city`.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// Checks the caller contract: a non-blank column and a non-empty path
    /// made of non-empty segments.
    pub fn validate(&self) -> Result<()> {
        if self.column.trim().is_empty() {
            return Err(DialectError::InvalidNestedField(
                "column identifier is empty".to_string(),
            ));
        }

        if self.path.is_empty() {
            return Err(DialectError::InvalidNestedField(format!(
                "path for column '{}' is empty",
                self.column
            )));
        }

        if let Some(idx) = self.path.iter().position(|segment| segment.is_empty()) {
            return Err(DialectError::InvalidNestedField(format!(
                "segment {} of path for column '{}' is empty",
                idx, self.column
            )));
        }

        Ok(())
    }
}

impl fmt::Display for NestedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.column, self.dotted_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_path() {
        let field = NestedField::new("data", ["address", "city"]);
        assert_eq!(field.dotted_path(), "address.city");

        let single = NestedField::new("data", ["name"]);
        assert_eq!(single.dotted_path(), "name");
    }

    #[test]
    fn test_validate_rejects_empty_column() {
        let field = NestedField::new("  ", ["a"]);
        assert!(matches!(
            field.validate(),
            Err(DialectError::InvalidNestedField(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let field = NestedField::new("data", Vec::<String>::new());
        assert!(field.validate().is_err());

        let field = NestedField::new("data", ["a", "", "b"]);
        let err = field.validate().unwrap_err();
        assert!(err.to_string().contains("segment 1"));
    }

    #[test]
    fn test_data_type_helpers() {
        assert!(DataType::UInt32.is_integer());
        assert!(DataType::UInt32.is_unsigned());
        assert!(DataType::Int64.is_integer());
        assert!(!DataType::Int64.is_unsigned());
        assert!(!DataType::Double.is_integer());
        assert_eq!(
            DataType::array_of(DataType::String).to_string(),
            "array<string>"
        );
    }

    #[test]
    fn test_data_type_serde() {
        let json = serde_json::to_string(&DataType::Datetime).unwrap();
        assert_eq!(json, "\"datetime\"");

        let parsed: DataType = serde_json::from_str("{\"array\":\"uuid\"}").unwrap();
        assert_eq!(parsed, DataType::array_of(DataType::Uuid));
    }

    #[test]
    fn test_fragment_display() {
        let fragment = SqlFragment::raw("BOOL");
        assert_eq!(fragment.to_string(), "BOOL");
        assert_eq!(fragment, "BOOL");
        assert_eq!(String::from(fragment), "BOOL");
    }
}
