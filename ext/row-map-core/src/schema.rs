use crate::{EnumValue, Result, RowMapError};
use std::sync::Arc;

/// Ordered list of named, typed fields describing a record's shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<Field>,
}

/// A single named field of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    /// Informational only; conversion accepts null for every field
    pub nullable: bool,
}

/// Declared type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    // Pass-through primitives
    Byte,
    Int16,
    Int32,
    Int64,
    Boolean,
    Float,
    Double,
    String,
    Decimal,

    /// Binary blob
    Bytes,
    /// Instant with millisecond precision
    DateTime,

    /// Nested record
    Row(Arc<Schema>),
    /// Ordered sequence of a single element type
    Array(Box<FieldType>),
    /// Same as `Array`, produced by sources that stream their elements
    Iterable(Box<FieldType>),
    Map {
        key: Box<FieldType>,
        value: Box<FieldType>,
    },

    /// Named refinement layered over a physical type
    Logical(LogicalType),
}

/// Logical sub-kinds of a field type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalType {
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Instant, same canonical form as `FieldType::DateTime`
    Timestamp,
    Enumeration(EnumerationType),
    /// Any other named logical type. The converter rejects these.
    Other {
        identifier: String,
        base: Box<FieldType>,
    },
}

/// Ordered member names of an enumeration; a member's ordinal is its index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationType {
    values: Vec<Arc<str>>,
}

impl Field {
    pub fn new<S: Into<String>>(name: S, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            nullable: true,
        }
    }

    /// Mark the field as required. Not enforced during conversion.
    pub fn required(mut self) -> Self {
        self.nullable = false;
        self
    }
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of the named field in schema order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldType {
    pub fn row(schema: Schema) -> Self {
        FieldType::Row(Arc::new(schema))
    }

    pub fn array(element: FieldType) -> Self {
        FieldType::Array(Box::new(element))
    }

    pub fn iterable(element: FieldType) -> Self {
        FieldType::Iterable(Box::new(element))
    }

    pub fn map(key: FieldType, value: FieldType) -> Self {
        FieldType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn date() -> Self {
        FieldType::Logical(LogicalType::Date)
    }

    pub fn time() -> Self {
        FieldType::Logical(LogicalType::Time)
    }

    pub fn timestamp() -> Self {
        FieldType::Logical(LogicalType::Timestamp)
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FieldType::Logical(LogicalType::Enumeration(EnumerationType::new(values)))
    }

    /// Get the type name for display
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Byte => "Byte",
            FieldType::Int16 => "Int16",
            FieldType::Int32 => "Int32",
            FieldType::Int64 => "Int64",
            FieldType::Boolean => "Boolean",
            FieldType::Float => "Float",
            FieldType::Double => "Double",
            FieldType::String => "String",
            FieldType::Decimal => "Decimal",
            FieldType::Bytes => "Bytes",
            FieldType::DateTime => "DateTime",
            FieldType::Row(_) => "Row",
            FieldType::Array(_) => "Array",
            FieldType::Iterable(_) => "Iterable",
            FieldType::Map { .. } => "Map",
            FieldType::Logical(_) => "Logical",
        }
    }

    /// Check if values of this type pass through conversion unchanged
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            FieldType::Byte
                | FieldType::Int16
                | FieldType::Int32
                | FieldType::Int64
                | FieldType::Boolean
                | FieldType::Float
                | FieldType::Double
                | FieldType::String
                | FieldType::Decimal
        )
    }

    /// Element type of an array or iterable
    pub fn collection_element_type(&self) -> Option<&FieldType> {
        match self {
            FieldType::Array(element) | FieldType::Iterable(element) => Some(element),
            _ => None,
        }
    }
}

impl LogicalType {
    pub fn other<S: Into<String>>(identifier: S, base: FieldType) -> Self {
        LogicalType::Other {
            identifier: identifier.into(),
            base: Box::new(base),
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            LogicalType::Date => "date",
            LogicalType::Time => "time",
            LogicalType::Timestamp => "timestamp",
            LogicalType::Enumeration(_) => "enum",
            LogicalType::Other { identifier, .. } => identifier,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, LogicalType::Date)
    }

    pub fn is_time(&self) -> bool {
        matches!(self, LogicalType::Time)
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, LogicalType::Timestamp)
    }

    pub fn is_enumeration(&self) -> bool {
        matches!(self, LogicalType::Enumeration(_))
    }
}

impl EnumerationType {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            values: values.into_iter().map(|s| Arc::from(s.as_ref())).collect(),
        }
    }

    pub fn values(&self) -> &[Arc<str>] {
        &self.values
    }

    /// Member name declared at `ordinal`
    pub fn name_of(&self, ordinal: usize) -> Option<&Arc<str>> {
        self.values.get(ordinal)
    }

    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.values.iter().position(|v| v.as_ref() == name)
    }

    /// Look up the member called `name`
    pub fn value_of(&self, name: &str) -> Result<EnumValue> {
        self.ordinal_of(name).map(EnumValue::new).ok_or_else(|| {
            RowMapError::conversion(format!(
                "'{}' is not a member of enumeration {:?}",
                name, self.values
            ))
        })
    }
}

/// Builder for creating schemas
pub struct SchemaBuilder {
    fields: Vec<Field>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Shorthand for a nullable field
    pub fn add_field<S: Into<String>>(self, name: S, field_type: FieldType) -> Self {
        self.with_field(Field::new(name, field_type))
    }

    pub fn build(self) -> Result<Schema> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(RowMapError::schema(format!(
                    "Duplicate field name: {}",
                    field.name
                )));
            }
        }
        Ok(Schema {
            fields: self.fields,
        })
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
