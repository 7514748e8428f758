use crate::{FieldType, Schema};

/// Trait for schema introspection
///
/// Paths are dotted field names. `item` steps into the element type of an
/// array or iterable, `key` and `value` into the parts of a map type.
pub trait SchemaInspector {
    /// Get the total number of fields (including nested)
    fn field_count(&self) -> usize;

    /// Get a field's type by path (e.g., "address.city")
    fn get_field_by_path(&self, path: &str) -> Option<&FieldType>;

    /// Check if schema contains a specific field path
    fn has_field(&self, path: &str) -> bool;

    /// Get all field paths in the schema
    fn all_field_paths(&self) -> Vec<String>;
}

impl SchemaInspector for Schema {
    fn field_count(&self) -> usize {
        self.fields()
            .iter()
            .map(|f| 1 + count_nested(&f.field_type))
            .sum()
    }

    fn get_field_by_path(&self, path: &str) -> Option<&FieldType> {
        let mut parts = path.split('.');
        let first = parts.next()?;
        let field = self.field(first)?;
        let rest: Vec<&str> = parts.collect();
        get_by_parts(&field.field_type, &rest)
    }

    fn has_field(&self, path: &str) -> bool {
        self.get_field_by_path(path).is_some()
    }

    fn all_field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for field in self.fields() {
            collect_paths(&field.field_type, field.name.clone(), &mut paths);
        }
        paths
    }
}

// Helper functions for schema inspection
fn count_nested(field_type: &FieldType) -> usize {
    match field_type {
        FieldType::Row(schema) => schema.field_count(),
        FieldType::Array(item) | FieldType::Iterable(item) => 1 + count_nested(item),
        FieldType::Map { key, value } => 2 + count_nested(key) + count_nested(value),
        _ => 0,
    }
}

fn get_by_parts<'a>(field_type: &'a FieldType, parts: &[&str]) -> Option<&'a FieldType> {
    let Some((first, rest)) = parts.split_first() else {
        return Some(field_type);
    };

    match field_type {
        FieldType::Row(schema) => schema
            .field(first)
            .and_then(|f| get_by_parts(&f.field_type, rest)),
        FieldType::Array(item) | FieldType::Iterable(item) if *first == "item" => {
            get_by_parts(item, rest)
        }
        FieldType::Map { key, value } => match *first {
            "key" => get_by_parts(key, rest),
            "value" => get_by_parts(value, rest),
            _ => None,
        },
        _ => None,
    }
}

fn collect_paths(field_type: &FieldType, current_path: String, paths: &mut Vec<String>) {
    paths.push(current_path.clone());

    match field_type {
        FieldType::Row(schema) => {
            for field in schema.fields() {
                collect_paths(
                    &field.field_type,
                    format!("{}.{}", current_path, field.name),
                    paths,
                );
            }
        }
        FieldType::Array(item) | FieldType::Iterable(item) => {
            collect_paths(item, format!("{}.item", current_path), paths);
        }
        FieldType::Map { key, value } => {
            collect_paths(key, format!("{}.key", current_path), paths);
            collect_paths(value, format!("{}.value", current_path), paths);
        }
        _ => {}
    }
}
