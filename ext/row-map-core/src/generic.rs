//! Schema-less output model
//!
//! [`GenericValue`] is the only shape the converter produces: scalars,
//! strings, ordered sequences and string-keyed mappings. It carries no type
//! tags and no schema, and serializes through serde into any self-describing
//! format.

use crate::Result;
use indexmap::IndexMap;
use num::BigInt;
use ordered_float::OrderedFloat;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::sync::Arc;

/// Mapping from field name to converted value
pub type GenericMap = IndexMap<Arc<str>, GenericValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenericValue {
    // Pass-through scalars
    Byte(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float(OrderedFloat<f32>),
    Double(OrderedFloat<f64>),
    Decimal128(i128, i8),
    Decimal256(BigInt, i8),
    Boolean(bool),
    String(Arc<str>),

    /// UTC instant, millisecond precision
    Instant(jiff::Timestamp),
    Date(jiff::civil::Date),

    List(Vec<GenericValue>),
    Map(GenericMap),

    Null,
}

impl GenericValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GenericValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            GenericValue::Byte(_) => "Byte",
            GenericValue::Int16(_) => "Int16",
            GenericValue::Int32(_) => "Int32",
            GenericValue::Int64(_) => "Int64",
            GenericValue::Float(_) => "Float",
            GenericValue::Double(_) => "Double",
            GenericValue::Decimal128(_, _) => "Decimal128",
            GenericValue::Decimal256(_, _) => "Decimal256",
            GenericValue::Boolean(_) => "Boolean",
            GenericValue::String(_) => "String",
            GenericValue::Instant(_) => "Instant",
            GenericValue::Date(_) => "Date",
            GenericValue::List(_) => "List",
            GenericValue::Map(_) => "Map",
            GenericValue::Null => "Null",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GenericValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&GenericMap> {
        match self {
            GenericValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[GenericValue]> {
        match self {
            GenericValue::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<&str> for GenericValue {
    fn from(s: &str) -> Self {
        GenericValue::String(Arc::from(s))
    }
}

impl From<String> for GenericValue {
    fn from(s: String) -> Self {
        GenericValue::String(Arc::from(s))
    }
}

impl Serialize for GenericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GenericValue::Byte(i) => serializer.serialize_i8(*i),
            GenericValue::Int16(i) => serializer.serialize_i16(*i),
            GenericValue::Int32(i) => serializer.serialize_i32(*i),
            GenericValue::Int64(i) => serializer.serialize_i64(*i),
            GenericValue::Float(OrderedFloat(f)) => serializer.serialize_f32(*f),
            GenericValue::Double(OrderedFloat(f)) => serializer.serialize_f64(*f),
            // Decimals go out as strings so no precision is lost
            GenericValue::Decimal128(unscaled, scale) => {
                serializer.serialize_str(&format_decimal(&unscaled.to_string(), *scale))
            }
            GenericValue::Decimal256(unscaled, scale) => {
                serializer.serialize_str(&format_decimal(&unscaled.to_string(), *scale))
            }
            GenericValue::Boolean(b) => serializer.serialize_bool(*b),
            GenericValue::String(s) => serializer.serialize_str(s),
            GenericValue::Instant(ts) => serializer.serialize_str(&format!("{:.3}", ts)),
            GenericValue::Date(d) => serializer.collect_str(d),
            GenericValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            GenericValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k.as_ref(), v)?;
                }
                map.end()
            }
            GenericValue::Null => serializer.serialize_unit(),
        }
    }
}

/// Render an unscaled integer with `scale` digits after the decimal point
fn format_decimal(unscaled: &str, scale: i8) -> String {
    let (sign, digits) = match unscaled.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", unscaled),
    };

    if scale <= 0 {
        if digits == "0" {
            return "0".to_string();
        }
        return format!("{}{}{}", sign, digits, "0".repeat(scale.unsigned_abs() as usize));
    }

    let scale = scale as usize;
    let padded = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
    } else {
        digits.to_string()
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    format!("{}{}.{}", sign, int_part, frac_part)
}

/// Hand a flattened record to serde_json
pub fn to_json(map: &GenericMap) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(map)?)
}

/// Serialize a flattened record as a compact JSON string
pub fn to_json_string(map: &GenericMap) -> Result<String> {
    Ok(serde_json::to_string(map)?)
}
