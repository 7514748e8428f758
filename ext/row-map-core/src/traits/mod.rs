//! Traits for working with row-map schemas

mod schema;

pub use schema::SchemaInspector;
