#![allow(dead_code)]

use row_map_core::*;
use std::sync::Arc;

/// Schema with one field of every pass-through primitive type
pub fn primitive_schema() -> Schema {
    SchemaBuilder::new()
        .add_field("byte", FieldType::Byte)
        .add_field("int16", FieldType::Int16)
        .add_field("int32", FieldType::Int32)
        .add_field("int64", FieldType::Int64)
        .add_field("boolean", FieldType::Boolean)
        .add_field("float", FieldType::Float)
        .add_field("double", FieldType::Double)
        .add_field("string", FieldType::String)
        .add_field("decimal", FieldType::Decimal)
        .build()
        .unwrap()
}

/// Schema for a two-field point `{x: Int32, y: String}`
pub fn point_schema() -> Arc<Schema> {
    Arc::new(
        SchemaBuilder::new()
            .add_field("x", FieldType::Int32)
            .add_field("y", FieldType::String)
            .build()
            .unwrap(),
    )
}

pub fn point(x: i32, y: &str) -> Record {
    Record::new(point_schema(), vec![Value::Int32(x), Value::from(y)]).unwrap()
}

/// Expected flattened form of `point(x, y)`
pub fn point_map(x: i32, y: &str) -> GenericValue {
    let mut map = GenericMap::new();
    map.insert(Arc::from("x"), GenericValue::Int32(x));
    map.insert(Arc::from("y"), GenericValue::from(y));
    GenericValue::Map(map)
}

/// Build a single-field record and flatten it
pub fn flatten_single(field_type: FieldType, value: Value) -> Result<GenericValue> {
    let schema = SchemaBuilder::new()
        .add_field("field", field_type)
        .build()?;
    let record = Record::new(schema, vec![value])?;
    let mut map = flatten_all(Some(&record))?;
    Ok(map.shift_remove("field").unwrap_or(GenericValue::Null))
}

/// Generate records over `point_schema` with sequential data
pub fn generate_points(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| point(i as i32, &format!("name_{}", i)))
        .collect()
}
