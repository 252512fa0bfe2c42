use super::SqlDialect;
use crate::core::{DataType, NestedField, Result, SqlFragment};

/// SQL:2016 dialect with no column type overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericDialect;

impl SqlDialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn nested_field_expression(&self, column: &str, path: &[String]) -> Result<SqlFragment> {
        let field = NestedField::new(column, path.iter().cloned());
        field.validate()?;
        Ok(SqlFragment::raw(format!(
            "JSON_VALUE({}, '$.{}')",
            column,
            field.dotted_path()
        )))
    }

    fn custom_data_type(&self, _data_type: &DataType) -> Option<SqlFragment> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    #[test]
    fn test_generic_nested_field() {
        let expr = GenericDialect
            .nested_field(&NestedField::new("doc", ["a", "b"]))
            .unwrap();
        assert_eq!(expr, "JSON_VALUE(doc, '$.a.b')");
        assert!(GenericDialect.nested_field(&NestedField::new("doc", Vec::<String>::new())).is_err());
    }

    #[test]
    fn test_generic_has_no_overrides() {
        assert!(GenericDialect.custom_data_type(&DataType::String).is_none());
        assert!(GenericDialect.custom_data_type(&DataType::Uuid).is_none());
    }

    #[test]
    fn test_generic_quoting_and_literals() {
        assert_eq!(GenericDialect.quote_identifier("order").unwrap(), "\"order\"");
        assert_eq!(GenericDialect.literal(&Value::from("a\\b")), "'a\\b'");
        assert_eq!(
            GenericDialect.literal(&Value::Uuid(uuid::Uuid::nil())),
            "'00000000-0000-0000-0000-000000000000'"
        );
    }

    #[test]
    fn test_generic_literal_variants() {
        let ts = chrono::NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_micro_opt(23, 59, 58, 123456)
            .unwrap();
        assert_eq!(
            GenericDialect.literal(&Value::Timestamp(ts)),
            "TIMESTAMP '2023-12-31 23:59:58.123456'"
        );

        assert_eq!(GenericDialect.literal(&Value::Bytes(vec![0x0F, 0xF0])), "X'0FF0'");
        assert_eq!(GenericDialect.literal(&Value::Boolean(true)), "TRUE");
        assert_eq!(GenericDialect.literal(&Value::Boolean(false)), "FALSE");
        assert_eq!(
            GenericDialect.literal(&Value::Json(serde_json::json!(["it's", 1]))),
            "'[\"it''s\",1]'"
        );
        assert_eq!(GenericDialect.literal(&Value::Float(0.5)), "0.5");
        assert_eq!(GenericDialect.literal(&Value::Float(f64::NEG_INFINITY)), "NULL");
        assert_eq!(GenericDialect.literal(&Value::Float(f64::NAN)), "NULL");
        assert_eq!(GenericDialect.literal(&Value::Null), "NULL");
        assert_eq!(GenericDialect.literal(&Value::Integer(42)), "42");
    }
}
