use crate::{Field, Result, RowMapError, Schema};
use bytes::Bytes;
use num::BigInt;
use ordered_float::OrderedFloat;
use std::sync::Arc;

/// Raw representation a record holds for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    // Numeric types
    Byte(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float(OrderedFloat<f32>),
    Double(OrderedFloat<f64>),
    Decimal128(i128, i8),   // unscaled value, scale
    Decimal256(BigInt, i8), // unscaled value, scale

    // Basic types
    Boolean(bool),
    String(Arc<str>),
    Bytes(Bytes),

    // Date/Time types
    DateTime(jiff::Zoned),
    Timestamp(jiff::Timestamp),
    Date(jiff::civil::Date),
    Time(jiff::civil::Time),

    /// Ordinal into the field's enumeration
    Enum(EnumValue),

    // Complex types
    Row(Record),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>), // Vec of tuples keeps entry order

    // Null value
    Null,
}

/// Enumeration member, encoded as its ordinal in the declaring type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue(usize);

impl EnumValue {
    pub fn new(ordinal: usize) -> Self {
        EnumValue(ordinal)
    }

    pub fn ordinal(&self) -> usize {
        self.0
    }
}

impl Value {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name of the value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Byte(_) => "Byte",
            Value::Int16(_) => "Int16",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Float(_) => "Float",
            Value::Double(_) => "Double",
            Value::Decimal128(_, _) => "Decimal128",
            Value::Decimal256(_, _) => "Decimal256",
            Value::Boolean(_) => "Boolean",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::DateTime(_) => "DateTime",
            Value::Timestamp(_) => "Timestamp",
            Value::Date(_) => "Date",
            Value::Time(_) => "Time",
            Value::Enum(_) => "Enum",
            Value::Row(_) => "Row",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Null => "Null",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Arc::from(s))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int32(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int64(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(OrderedFloat(f))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Row(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A concrete value conforming to a schema: one `Value` per schema field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Record {
    /// Create a record from values given in schema order
    pub fn new<S: Into<Arc<Schema>>>(schema: S, values: Vec<Value>) -> Result<Self> {
        let schema = schema.into();
        if values.len() != schema.len() {
            return Err(RowMapError::invalid_argument(format!(
                "Record has {} values but schema declares {} fields",
                values.len(),
                schema.len()
            )));
        }
        Ok(Self { schema, values })
    }

    pub fn builder<S: Into<Arc<Schema>>>(schema: S) -> RecordBuilder {
        RecordBuilder::new(schema)
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Value of the named field, `None` if the schema has no such field
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.schema.index_of(name).map(|i| &self.values[i])
    }

    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Field/value pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&Field, &Value)> {
        self.schema.fields().iter().zip(self.values.iter())
    }
}

/// Builder that fills a record by field name; unset fields stay null
pub struct RecordBuilder {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl RecordBuilder {
    pub fn new<S: Into<Arc<Schema>>>(schema: S) -> Self {
        let schema = schema.into();
        let values = vec![Value::Null; schema.len()];
        Self { schema, values }
    }

    pub fn set<V: Into<Value>>(mut self, name: &str, value: V) -> Result<Self> {
        let index = self
            .schema
            .index_of(name)
            .ok_or_else(|| RowMapError::invalid_argument(format!("Unknown field: {}", name)))?;
        self.values[index] = value.into();
        Ok(self)
    }

    pub fn build(self) -> Record {
        Record {
            schema: self.schema,
            values: self.values,
        }
    }
}
