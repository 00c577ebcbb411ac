use brickset_core::{Dimension, Dimensions, LegoSet, SetNumber};
use serde_json::json;

#[test]
fn new_sets_required_fields_and_leaves_optionals_empty() {
    let set = LegoSet::new("21020-1", "Trevi Fountain", 731, "Architecture");

    assert_eq!(set.number, SetNumber::Text("21020-1".to_string()));
    assert_eq!(set.name, "Trevi Fountain");
    assert_eq!(set.pieces, 731);
    assert_eq!(set.theme, "Architecture");
    assert_eq!(set.tags, None);
    assert_eq!(set.dimensions, None);
    assert_eq!(set.url, None);
    assert_eq!(set.year, None);
}

#[test]
fn set_number_accepts_text_and_integer_forms() {
    let text: LegoSet = serde_json::from_value(json!({
        "number": "75192-1", "name": "Millennium Falcon", "pieces": 7541, "theme": "Star Wars"
    }))
    .expect("fixture should deserialize");
    let numeric: LegoSet = serde_json::from_value(json!({
        "number": 40220, "name": "London Bus", "pieces": 118, "theme": "Creator Expert"
    }))
    .expect("fixture should deserialize");

    assert_eq!(text.number, SetNumber::Text("75192-1".to_string()));
    assert_eq!(numeric.number, SetNumber::Numeric(40220));
    assert_eq!(numeric.number.to_string(), "40220");
}

#[test]
fn missing_and_null_optionals_both_read_as_absent() {
    let missing: LegoSet = serde_json::from_value(json!({
        "number": "1-1", "name": "a", "pieces": 1, "theme": "City"
    }))
    .expect("fixture should deserialize");
    let nulls: LegoSet = serde_json::from_value(json!({
        "number": "1-1", "name": "a", "pieces": 1, "theme": "City",
        "tags": null, "dimensions": null, "url": null, "year": null, "subtheme": null
    }))
    .expect("fixture should deserialize");

    assert_eq!(missing, nulls);
    assert_eq!(missing.tags, None);
    assert_eq!(missing.dimensions, None);
}

#[test]
fn empty_tags_stay_distinct_from_absent_tags() {
    let empty: LegoSet = serde_json::from_value(json!({
        "number": "1-1", "name": "a", "pieces": 1, "theme": "Duplo", "tags": []
    }))
    .expect("fixture should deserialize");

    assert_eq!(empty.tags, Some(Vec::new()));
    assert!(!empty.has_tag("Microscale"));
}

#[test]
fn partial_dimensions_keep_present_axes() {
    let set: LegoSet = serde_json::from_value(json!({
        "number": "60198-1", "name": "Cargo Train", "pieces": 1226, "theme": "City",
        "dimensions": { "width": 58.0, "height": null }
    }))
    .expect("fixture should deserialize");

    assert_eq!(
        set.dimensions,
        Some(Dimensions {
            width: Some(58.0),
            height: None,
            depth: None,
        })
    );
    assert_eq!(set.dimension(Dimension::Width), Some(58.0));
    assert_eq!(set.dimension(Dimension::Height), None);
    assert_eq!(set.dimension(Dimension::Depth), None);
}

#[test]
fn piece_count_alias_and_unknown_keys_are_accepted() {
    let set: LegoSet = serde_json::from_value(json!({
        "number": "8099-1", "name": "Midi-Scale Imperial Star Destroyer",
        "pieceCount": 423, "theme": "Star Wars",
        "packagingType": "Box", "minifigs": 0
    }))
    .expect("fixture should deserialize");

    assert_eq!(set.pieces, 423);
}

#[test]
fn missing_theme_reads_as_empty_label() {
    let set: LegoSet = serde_json::from_value(json!({
        "number": "1-1", "name": "Loose parts", "pieces": 12
    }))
    .expect("fixture should deserialize");

    assert_eq!(set.theme, "");
}

#[test]
fn negative_piece_count_is_rejected() {
    let err = serde_json::from_value::<LegoSet>(json!({
        "number": "1-1", "name": "bad", "pieces": -4, "theme": "City"
    }))
    .unwrap_err();

    assert!(err.to_string().contains("-4"), "unexpected error: {err}");
}

#[test]
fn equality_compares_all_fields() {
    let first = LegoSet::new("1-1", "Set", 10, "City");
    let mut second = first.clone();
    assert_eq!(first, second);

    second.url = Some("https://brickset.com/sets/1-1".to_string());
    assert_ne!(first, second);
}

#[test]
fn serialization_uses_source_wire_fields() {
    let mut set = LegoSet::new(40220_u64, "London Bus", 118, "Creator Expert");
    set.tags = Some(vec!["Bus".to_string(), "Microscale".to_string()]);
    set.dimensions = Some(Dimensions {
        width: Some(26.2),
        height: None,
        depth: Some(7.0),
    });

    let value = serde_json::to_value(&set).expect("set should serialize");
    assert_eq!(value["number"], 40220);
    assert_eq!(value["pieces"], 118);
    assert_eq!(value["theme"], "Creator Expert");
    assert_eq!(value["tags"], json!(["Bus", "Microscale"]));
    assert_eq!(value["dimensions"]["width"], 26.2);
    assert_eq!(value["dimensions"]["height"], serde_json::Value::Null);
    assert_eq!(value["url"], serde_json::Value::Null);
    assert!(value.get("pieceCount").is_none());

    let decoded: LegoSet = serde_json::from_value(value).expect("serialized set should decode");
    assert_eq!(decoded, set);
}

#[test]
fn text_set_number_serializes_as_string() {
    let set = LegoSet::new("10179-1", "Ultimate Collector's Millennium Falcon", 5195, "Star Wars");

    let value = serde_json::to_value(&set).expect("set should serialize");
    assert_eq!(value["number"], "10179-1");
}
