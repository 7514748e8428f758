//! Test utilities for row-map-core

#[cfg(test)]
pub mod test {
    use crate::{FieldType, Record, Schema, SchemaBuilder, Value};
    use ordered_float::OrderedFloat;
    use std::sync::Arc;

    /// Create a simple schema for testing
    pub fn sample_schema() -> Schema {
        SchemaBuilder::new()
            .add_field("id", FieldType::Int64)
            .add_field("name", FieldType::String)
            .add_field("age", FieldType::Int32)
            .add_field("salary", FieldType::Double)
            .build()
            .unwrap()
    }

    /// A record over `sample_schema` with a null `age`
    pub fn sample_record() -> Record {
        Record::new(
            sample_schema(),
            vec![
                Value::Int64(1),
                Value::String(Arc::from("Alice")),
                Value::Null,
                Value::Double(OrderedFloat(75000.0)),
            ],
        )
        .unwrap()
    }

    /// Create a schema with a nested row and a repeated field
    pub fn complex_schema() -> Schema {
        let person = SchemaBuilder::new()
            .add_field("name", FieldType::String)
            .add_field("age", FieldType::Int32)
            .build()
            .unwrap();

        SchemaBuilder::new()
            .add_field("id", FieldType::Int64)
            .add_field("person", FieldType::row(person))
            .add_field("scores", FieldType::array(FieldType::Float))
            .add_field("attributes", FieldType::map(FieldType::String, FieldType::String))
            .build()
            .unwrap()
    }
}

#[cfg(test)]
mod test_utils_tests {
    use super::test::*;
    use crate::traits::SchemaInspector;

    #[test]
    fn test_sample_schema() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.field_names().collect();
        assert_eq!(names, vec!["id", "name", "age", "salary"]);
    }

    #[test]
    fn test_sample_record() {
        let record = sample_record();
        assert!(record.value("age").unwrap().is_null());
        assert!(matches!(record.value("id"), Some(crate::Value::Int64(1))));
    }

    #[test]
    fn test_complex_schema() {
        let schema = complex_schema();
        assert!(schema.has_field("person.name"));
        assert!(schema.has_field("scores.item"));
    }
}
