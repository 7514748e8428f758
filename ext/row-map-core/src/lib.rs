//! Flatten schema-typed records into schema-less key/value mappings
//!
//! `row-map-core` turns a [`Record`] (an ordered set of values described by a
//! [`Schema`]) into a [`GenericMap`]: a mapping from field name to
//! [`GenericValue`] that holds only scalars, strings, nested mappings and
//! ordered sequences. The result carries no type tags and serializes directly
//! through serde, typically to JSON.
//!
//! # Key Components
//!
//! - **Schema**: ordered, uniquely named fields with a closed [`FieldType`]
//!   - Nested rows, arrays and iterables, map types
//!   - Logical types (date, time of day, timestamp, enumeration) as
//!     [`LogicalType`]
//!   - Introspection through the [`traits::SchemaInspector`] trait
//!
//! - **Values**: [`Value`] is what a record stores per field; [`Record`] pairs
//!   a schema with one value per field
//!
//! - **Conversion**: [`flatten`] and [`convert`]
//!   - Bytes become standard base64 text
//!   - Datetimes and timestamps become millisecond UTC instants
//!   - Times of day become `HH:MM:SS`, enum values their member name
//!   - Nested rows become nested mappings, sequences drop null elements
//!   - Map-typed fields become null
//!   - Any other logical type fails with
//!     [`RowMapError::UnsupportedLogicalType`]
//!
//! - **Configuration**: [`ConverterBuilder`] sets a field filter and a
//!   nesting bound once for many records
//!
//! # Example Usage
//!
//! ```
//! use row_map_core::{flatten_all, to_json, FieldType, Record, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new()
//!     .add_field("id", FieldType::Int64)
//!     .add_field("payload", FieldType::Bytes)
//!     .build()?;
//! let record = Record::builder(schema)
//!     .set("id", 7i64)?
//!     .set("payload", row_map_core::Value::Bytes(bytes::Bytes::from_static(b"hi")))?
//!     .build();
//!
//! let map = flatten_all(Some(&record))?;
//! assert_eq!(to_json(&map)?, serde_json::json!({"id": 7, "payload": "aGk="}));
//! # Ok::<(), row_map_core::RowMapError>(())
//! ```

pub mod convert;
pub mod error;
pub mod generic;
pub mod schema;
pub mod traits;
pub mod value;

#[cfg(test)]
pub mod test_utils;

pub use convert::{convert, flatten, flatten_all, Converter, ConverterBuilder, FieldFilter};
pub use error::{Result, RowMapError};
pub use generic::{to_json, to_json_string, GenericMap, GenericValue};
pub use schema::{EnumerationType, Field, FieldType, LogicalType, Schema, SchemaBuilder};
pub use value::{EnumValue, Record, RecordBuilder, Value};
