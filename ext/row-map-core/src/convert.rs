//! Record flattening and per-type value conversion
//!
//! [`flatten`] walks a record's schema and produces a [`GenericMap`];
//! [`convert`] canonicalizes a single value according to its declared
//! [`FieldType`]. The two recurse into each other for nested rows and
//! sequences.

use crate::{
    EnumerationType, FieldType, GenericMap, GenericValue, LogicalType, Record, Result,
    RowMapError, Value,
};
use base64::Engine;
use jiff::tz::TimeZone;
use std::collections::HashSet;
use std::sync::Arc;

/// 24-hour wall clock, no sub-second component
const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Restricts which top-level fields are flattened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldFilter {
    #[default]
    All,
    Only(HashSet<String>),
}

impl FieldFilter {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldFilter::Only(names.into_iter().map(Into::into).collect())
    }

    pub fn includes(&self, name: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Only(names) => names.contains(name),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FieldFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldFilter::only(iter)
    }
}

/// Flatten `record` into a mapping from field name to generic value.
///
/// An absent record yields an empty mapping. Every schema field accepted by
/// `filter` gets exactly one entry, `GenericValue::Null` when its value is
/// absent.
pub fn flatten(record: Option<&Record>, filter: &FieldFilter) -> Result<GenericMap> {
    Walker::UNBOUNDED.flatten_record(record, filter, 0)
}

/// Flatten every field of `record`
pub fn flatten_all(record: Option<&Record>) -> Result<GenericMap> {
    flatten(record, &FieldFilter::All)
}

/// Convert one value according to its declared field type
pub fn convert(field_type: &FieldType, value: &Value) -> Result<GenericValue> {
    Walker::UNBOUNDED.convert_value(field_type, value, 0)
}

/// Builder for creating a configured Converter
#[derive(Debug, Default)]
pub struct ConverterBuilder {
    filter: FieldFilter,
    max_depth: Option<usize>,
}

impl ConverterBuilder {
    /// Create a new ConverterBuilder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Only flatten the named top-level fields
    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = FieldFilter::only(names);
        self
    }

    /// Use a prepared filter; `FieldFilter::All` clears an earlier `with_fields`
    pub fn with_filter(mut self, filter: FieldFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Fail once rows and sequences nest more than `depth` levels below the
    /// top-level record
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            filter: self.filter,
            walker: Walker {
                max_depth: self.max_depth,
            },
        }
    }
}

/// Reusable conversion settings
#[derive(Debug, Clone, Default)]
pub struct Converter {
    filter: FieldFilter,
    walker: Walker,
}

impl Converter {
    /// Create a converter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    pub fn filter(&self) -> &FieldFilter {
        &self.filter
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.walker.max_depth
    }

    pub fn flatten(&self, record: Option<&Record>) -> Result<GenericMap> {
        self.walker.flatten_record(record, &self.filter, 0)
    }

    pub fn convert(&self, field_type: &FieldType, value: &Value) -> Result<GenericValue> {
        self.walker.convert_value(field_type, value, 0)
    }

    /// Flatten each record in order, stopping at the first failure
    pub fn flatten_batch(&self, records: &[Record]) -> Result<Vec<GenericMap>> {
        records
            .iter()
            .map(|record| self.flatten(Some(record)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Walker {
    max_depth: Option<usize>,
}

impl Walker {
    const UNBOUNDED: Walker = Walker { max_depth: None };

    fn descend(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        match self.max_depth {
            Some(max_depth) if next > max_depth => Err(RowMapError::NestingTooDeep { max_depth }),
            _ => Ok(next),
        }
    }

    fn flatten_record(
        &self,
        record: Option<&Record>,
        filter: &FieldFilter,
        depth: usize,
    ) -> Result<GenericMap> {
        let mut map = GenericMap::new();
        let Some(record) = record else {
            return Ok(map);
        };

        for (field, value) in record.iter() {
            if filter.includes(&field.name) {
                let converted = self.convert_value(&field.field_type, value, depth)?;
                map.insert(Arc::from(field.name.as_str()), converted);
            }
        }
        Ok(map)
    }

    fn convert_value(
        &self,
        field_type: &FieldType,
        value: &Value,
        depth: usize,
    ) -> Result<GenericValue> {
        if value.is_null() {
            return Ok(GenericValue::Null);
        }

        match field_type {
            FieldType::Byte
            | FieldType::Int16
            | FieldType::Int32
            | FieldType::Int64
            | FieldType::Boolean
            | FieldType::Float
            | FieldType::Double
            | FieldType::String
            | FieldType::Decimal => pass_through(field_type, value),
            FieldType::Bytes => encode_bytes(value),
            FieldType::DateTime => to_instant(value).map(GenericValue::Instant),
            FieldType::Logical(logical) => convert_logical(logical, value),
            FieldType::Row(_) => match value {
                Value::Row(record) => {
                    let depth = self.descend(depth)?;
                    let nested = self.flatten_record(Some(record), &FieldFilter::All, depth)?;
                    Ok(GenericValue::Map(nested))
                }
                other => Err(RowMapError::mismatch("Row", other.type_name())),
            },
            FieldType::Array(element) | FieldType::Iterable(element) => match value {
                Value::List(items) => {
                    let depth = self.descend(depth)?;
                    let mut converted = Vec::with_capacity(items.len());
                    for item in items {
                        let v = self.convert_value(element, item, depth)?;
                        if !v.is_null() {
                            converted.push(v);
                        }
                    }
                    let dropped = items.len() - converted.len();
                    if dropped > 0 {
                        tracing::trace!(dropped, "elided null sequence elements");
                    }
                    Ok(GenericValue::List(converted))
                }
                other => Err(RowMapError::mismatch(field_type.type_name(), other.type_name())),
            },
            FieldType::Map { key, .. } => {
                tracing::trace!(key_type = key.type_name(), "map field not converted");
                Ok(GenericValue::Null)
            }
        }
    }
}

fn pass_through(field_type: &FieldType, value: &Value) -> Result<GenericValue> {
    match value {
        Value::Byte(i) => Ok(GenericValue::Byte(*i)),
        Value::Int16(i) => Ok(GenericValue::Int16(*i)),
        Value::Int32(i) => Ok(GenericValue::Int32(*i)),
        Value::Int64(i) => Ok(GenericValue::Int64(*i)),
        Value::Float(f) => Ok(GenericValue::Float(*f)),
        Value::Double(f) => Ok(GenericValue::Double(*f)),
        Value::Decimal128(d, scale) => Ok(GenericValue::Decimal128(*d, *scale)),
        Value::Decimal256(d, scale) => Ok(GenericValue::Decimal256(d.clone(), *scale)),
        Value::Boolean(b) => Ok(GenericValue::Boolean(*b)),
        Value::String(s) => Ok(GenericValue::String(s.clone())),
        other => Err(RowMapError::mismatch(field_type.type_name(), other.type_name())),
    }
}

fn encode_bytes(value: &Value) -> Result<GenericValue> {
    let bytes: &[u8] = match value {
        Value::Bytes(b) => b,
        Value::String(s) => s.as_bytes(),
        other => return Err(RowMapError::mismatch("Bytes", other.type_name())),
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(GenericValue::String(Arc::from(encoded)))
}

/// Timezone-agnostic instant floored to millisecond precision
fn to_instant(value: &Value) -> Result<jiff::Timestamp> {
    let ts = match value {
        Value::DateTime(zoned) => zoned.timestamp(),
        Value::Timestamp(ts) => *ts,
        other => return Err(RowMapError::mismatch("DateTime", other.type_name())),
    };
    // Floor so sub-millisecond instants before the epoch stay before it
    let millis = ts.as_nanosecond().div_euclid(1_000_000) as i64;
    jiff::Timestamp::from_millisecond(millis)
        .map_err(|e| RowMapError::conversion(format!("Instant out of range: {}", e)))
}

fn convert_logical(logical: &LogicalType, value: &Value) -> Result<GenericValue> {
    match logical {
        LogicalType::Date => match value {
            Value::Date(date) => Ok(GenericValue::Date(*date)),
            Value::DateTime(zoned) => Ok(GenericValue::Date(zoned.date())),
            other => Err(RowMapError::mismatch("Date", other.type_name())),
        },
        LogicalType::Time => {
            let time = match value {
                Value::Time(time) => *time,
                Value::DateTime(zoned) => zoned.time(),
                Value::Timestamp(ts) => ts.to_zoned(TimeZone::UTC).time(),
                other => return Err(RowMapError::mismatch("Time", other.type_name())),
            };
            Ok(GenericValue::String(Arc::from(
                time.strftime(TIME_OF_DAY_FORMAT).to_string(),
            )))
        }
        LogicalType::Timestamp => to_instant(value).map(GenericValue::Instant),
        LogicalType::Enumeration(enum_type) => enum_name(enum_type, value),
        LogicalType::Other { identifier, .. } => {
            tracing::debug!(identifier = %identifier, "rejecting unsupported logical type");
            Err(RowMapError::unsupported_logical_type(identifier.as_str()))
        }
    }
}

fn enum_name(enum_type: &EnumerationType, value: &Value) -> Result<GenericValue> {
    let ordinal = match value {
        Value::Enum(v) => v.ordinal(),
        Value::String(name) => enum_type.value_of(name)?.ordinal(),
        other => return Err(RowMapError::mismatch("Enum", other.type_name())),
    };
    enum_type
        .name_of(ordinal)
        .map(|name| GenericValue::String(name.clone()))
        .ok_or_else(|| {
            RowMapError::conversion(format!(
                "Enum ordinal {} out of range for {} members",
                ordinal,
                enum_type.values().len()
            ))
        })
}
