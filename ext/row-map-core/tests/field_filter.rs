use row_map_core::traits::SchemaInspector;
use row_map_core::*;
use std::collections::HashSet;

mod test_helpers;
use test_helpers::*;

fn abc_record() -> Record {
    let schema = SchemaBuilder::new()
        .add_field("a", FieldType::Int32)
        .add_field("b", FieldType::String)
        .add_field("c", FieldType::Boolean)
        .build()
        .unwrap();
    Record::new(
        schema,
        vec![Value::Int32(1), Value::from("two"), Value::Boolean(true)],
    )
    .unwrap()
}

fn keys(map: &GenericMap) -> HashSet<&str> {
    map.keys().map(|k| k.as_ref()).collect()
}

#[test]
fn test_filter_selects_exact_key_set() {
    let record = abc_record();
    let map = flatten(Some(&record), &FieldFilter::only(["a", "c"])).unwrap();

    assert_eq!(keys(&map), HashSet::from(["a", "c"]));
    assert_eq!(map["a"], GenericValue::Int32(1));
    assert_eq!(map["c"], GenericValue::Boolean(true));
}

#[test]
fn test_unset_filter_includes_every_field() {
    let record = abc_record();
    let map = flatten(Some(&record), &FieldFilter::All).unwrap();
    assert_eq!(keys(&map), HashSet::from(["a", "b", "c"]));
}

#[test]
fn test_empty_filter_yields_empty_map() {
    let record = abc_record();
    let map = flatten(Some(&record), &FieldFilter::only(Vec::<String>::new())).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_filter_names_missing_from_schema_are_ignored() {
    let record = abc_record();
    let filter: FieldFilter = ["b", "zzz"].into_iter().collect();
    let map = flatten(Some(&record), &filter).unwrap();
    assert_eq!(keys(&map), HashSet::from(["b"]));
}

#[test]
fn test_filtered_null_field_keeps_key() {
    let record = Record::builder(point_schema()).set("x", 1).unwrap().build();
    let map = flatten(Some(&record), &FieldFilter::only(["y"])).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map["y"], GenericValue::Null);
}

#[test]
fn test_filter_applies_to_top_level_only() {
    let schema = SchemaBuilder::new()
        .add_field("x", FieldType::Int32)
        .add_field("nested", FieldType::Row(point_schema()))
        .build()
        .unwrap();
    let record = Record::new(schema, vec![Value::Int32(9), Value::Row(point(1, "s"))]).unwrap();

    // "x" also names a nested field, but nested rows are always flattened whole
    let map = flatten(Some(&record), &FieldFilter::only(["nested"])).unwrap();
    assert_eq!(keys(&map), HashSet::from(["nested"]));
    assert_eq!(map["nested"], point_map(1, "s"));
}

#[test]
fn test_absent_record_with_any_filter() {
    assert!(flatten(None, &FieldFilter::All).unwrap().is_empty());
    assert!(flatten(None, &FieldFilter::only(["a"])).unwrap().is_empty());
    assert!(Converter::new().flatten(None).unwrap().is_empty());
}

#[test]
fn test_converter_with_fields() {
    let converter = Converter::builder().with_fields(["a", "b"]).build();
    let map = converter.flatten(Some(&abc_record())).unwrap();
    assert_eq!(keys(&map), HashSet::from(["a", "b"]));
}

#[test]
fn test_filter_checked_against_schema_paths() {
    let record = abc_record();
    let requested = ["a", "missing"];
    let known: Vec<&str> = requested
        .iter()
        .copied()
        .filter(|name| record.schema().has_field(name))
        .collect();

    assert_eq!(known, vec!["a"]);
}

#[test]
fn test_flatten_batch_applies_filter_to_each_record() {
    let converter = Converter::builder().with_fields(["y"]).build();
    let records = generate_points(5);
    let maps = converter.flatten_batch(&records).unwrap();

    assert_eq!(maps.len(), 5);
    for (i, map) in maps.iter().enumerate() {
        assert_eq!(map.len(), 1);
        assert_eq!(map["y"], GenericValue::from(format!("name_{}", i)));
    }
}
