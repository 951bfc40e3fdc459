//! Property codec: translation between native row records and the wire
//! property encoding, plus equality-filter construction.
//!
//! Dispatch is a single `match` over [`PropertyType`] per direction, so a
//! schema tag outside the supported set is one failure path
//! ([`NotebaseLinkError::UnsupportedType`]) in every direction — decode,
//! encode, and filter alike. The two server timestamps are readable but
//! silently skipped on write.

use serde_json::{json, Map, Value as JsonValue};

use crate::error::{NotebaseLinkError, Result};
use crate::models::{
    FilterExpression, PropertyType, PropertyValue, RemoteRow, RowRecord, Schema, SchemaEntry,
};

/// Decode the properties of one remote row into a [`RowRecord`].
///
/// Properties absent from the schema are ignored; a schema tag outside
/// the supported set fails with [`NotebaseLinkError::UnsupportedType`].
pub fn decode_row(row: &RemoteRow, schema: &Schema) -> Result<RowRecord> {
    let mut record = RowRecord::new();
    for (name, value) in &row.properties {
        let entry = match schema.get(name) {
            Some(entry) => entry,
            None => continue,
        };
        let property_type = supported_type(entry)?;
        record.set(name.clone(), decode_value(property_type, value));
    }
    Ok(record)
}

/// Like [`decode_row`], but always includes the row's identifier under
/// the key `id`.
pub fn decode_row_with_id(row: &RemoteRow, schema: &Schema) -> Result<RowRecord> {
    let mut record = decode_row(row, schema)?;
    record.set("id", PropertyValue::Text(row.id.clone()));
    Ok(record)
}

/// Encode a [`RowRecord`] into the wire property map for create/update.
///
/// Fails with [`NotebaseLinkError::UnknownProperty`] for keys absent from
/// the schema, [`NotebaseLinkError::UnsupportedType`] for schema tags
/// outside the supported set, and [`NotebaseLinkError::InvalidValue`]
/// when a value does not fit its property's shape. Server-managed
/// timestamp properties are skipped without error.
pub fn encode_row(record: &RowRecord, schema: &Schema) -> Result<Map<String, JsonValue>> {
    let mut properties = Map::new();
    for (name, value) in record.iter() {
        let entry = schema
            .get(name)
            .ok_or_else(|| NotebaseLinkError::UnknownProperty(name.clone()))?;
        let property_type = supported_type(entry)?;
        if property_type.is_read_only() {
            continue;
        }
        properties.insert(name.clone(), encode_value(name, property_type, value)?);
    }
    Ok(properties)
}

/// Build a filter requiring every `(name, value)` pair of the predicate.
///
/// Scalar properties use `equals`; multi-selects use `contains` (a list
/// value produces one containment condition per item). All conditions
/// are combined with logical AND.
pub fn build_equality_filter(schema: &Schema, predicate: &RowRecord) -> Result<FilterExpression> {
    let mut conditions = Vec::new();
    for (name, value) in predicate.iter() {
        let entry = schema
            .get(name)
            .ok_or_else(|| NotebaseLinkError::UnknownProperty(name.clone()))?;
        let property_type = supported_type(entry)?;
        match (property_type, value) {
            (PropertyType::MultiSelect, PropertyValue::List(items)) => {
                for item in items {
                    conditions.push(json!({
                        "property": name,
                        "multi_select": {"contains": item}
                    }));
                }
            }
            _ => conditions.push(filter_condition(name, property_type, value)?),
        }
    }
    Ok(FilterExpression::and(conditions))
}

fn supported_type(entry: &SchemaEntry) -> Result<PropertyType> {
    entry
        .property_type()
        .ok_or_else(|| NotebaseLinkError::UnsupportedType {
            property: entry.name.clone(),
            kind: entry.kind.clone(),
        })
}

fn decode_value(property_type: PropertyType, value: &JsonValue) -> PropertyValue {
    match property_type {
        PropertyType::Title => PropertyValue::Text(first_segment_text(value.get("title"))),
        PropertyType::RichText => PropertyValue::Text(first_segment_text(value.get("rich_text"))),
        PropertyType::Number => value
            .get("number")
            .and_then(JsonValue::as_f64)
            .map(PropertyValue::Number)
            .unwrap_or(PropertyValue::Null),
        PropertyType::Checkbox => value
            .get("checkbox")
            .and_then(JsonValue::as_bool)
            .map(PropertyValue::Boolean)
            .unwrap_or(PropertyValue::Null),
        PropertyType::Url => text_or_null(value.get("url")),
        PropertyType::Email => text_or_null(value.get("email")),
        PropertyType::PhoneNumber => text_or_null(value.get("phone_number")),
        PropertyType::CreatedTime => text_or_null(value.get("created_time")),
        PropertyType::LastEditedTime => text_or_null(value.get("last_edited_time")),
        PropertyType::Select => value
            .get("select")
            .and_then(|select| select.get("name"))
            .and_then(JsonValue::as_str)
            .map(|name| PropertyValue::Text(name.to_string()))
            .unwrap_or(PropertyValue::Null),
        PropertyType::MultiSelect => {
            let names = value
                .get("multi_select")
                .and_then(JsonValue::as_array)
                .map(|options| {
                    options
                        .iter()
                        .filter_map(|option| option.get("name").and_then(JsonValue::as_str))
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            PropertyValue::List(names)
        }
        PropertyType::Date => value
            .get("date")
            .and_then(|date| date.get("start"))
            .and_then(JsonValue::as_str)
            .map(|start| PropertyValue::Date(start.to_string()))
            .unwrap_or(PropertyValue::Null),
    }
}

fn encode_value(
    property: &str,
    property_type: PropertyType,
    value: &PropertyValue,
) -> Result<JsonValue> {
    let mismatch = |expected: &'static str| NotebaseLinkError::InvalidValue {
        property: property.to_string(),
        expected,
        actual: value.type_name(),
    };
    match property_type {
        PropertyType::Title => match value {
            PropertyValue::Text(text) => Ok(json!({ "title": text_segments(text) })),
            PropertyValue::Null => Ok(json!({ "title": [] })),
            _ => Err(mismatch("text")),
        },
        PropertyType::RichText => match value {
            PropertyValue::Text(text) => Ok(json!({ "rich_text": text_segments(text) })),
            PropertyValue::Null => Ok(json!({ "rich_text": [] })),
            _ => Err(mismatch("text")),
        },
        PropertyType::Number => match value {
            PropertyValue::Number(n) => Ok(json!({ "number": n })),
            PropertyValue::Null => Ok(json!({ "number": null })),
            _ => Err(mismatch("number")),
        },
        PropertyType::Checkbox => match value {
            PropertyValue::Boolean(b) => Ok(json!({ "checkbox": b })),
            _ => Err(mismatch("boolean")),
        },
        PropertyType::Url => match value {
            PropertyValue::Text(s) => Ok(json!({ "url": s })),
            PropertyValue::Null => Ok(json!({ "url": null })),
            _ => Err(mismatch("text")),
        },
        PropertyType::Email => match value {
            PropertyValue::Text(s) => Ok(json!({ "email": s })),
            PropertyValue::Null => Ok(json!({ "email": null })),
            _ => Err(mismatch("text")),
        },
        PropertyType::PhoneNumber => match value {
            PropertyValue::Text(s) => Ok(json!({ "phone_number": s })),
            PropertyValue::Null => Ok(json!({ "phone_number": null })),
            _ => Err(mismatch("text")),
        },
        PropertyType::Select => match value {
            PropertyValue::Text(name) => Ok(json!({ "select": {"name": name} })),
            PropertyValue::Null => Ok(json!({ "select": null })),
            _ => Err(mismatch("text")),
        },
        PropertyType::MultiSelect => match value {
            PropertyValue::List(items) => {
                let options: Vec<JsonValue> =
                    items.iter().map(|name| json!({ "name": name })).collect();
                Ok(json!({ "multi_select": options }))
            }
            _ => Err(mismatch("list")),
        },
        PropertyType::Date => match value {
            PropertyValue::Date(start) | PropertyValue::Text(start) => {
                Ok(json!({ "date": {"start": start} }))
            }
            PropertyValue::Null => Ok(json!({ "date": null })),
            _ => Err(mismatch("date")),
        },
        // Server-managed; encode_row filters these out before dispatch.
        PropertyType::CreatedTime | PropertyType::LastEditedTime => Ok(JsonValue::Null),
    }
}

fn filter_condition(
    property: &str,
    property_type: PropertyType,
    value: &PropertyValue,
) -> Result<JsonValue> {
    let mismatch = |expected: &'static str| NotebaseLinkError::InvalidValue {
        property: property.to_string(),
        expected,
        actual: value.type_name(),
    };
    let equals = |payload: JsonValue| {
        json!({ "property": property, (property_type.as_str()): {"equals": payload} })
    };
    match property_type {
        PropertyType::Title | PropertyType::RichText | PropertyType::Select => match value {
            PropertyValue::Text(s) => Ok(equals(json!(s))),
            _ => Err(mismatch("text")),
        },
        PropertyType::Url | PropertyType::Email | PropertyType::PhoneNumber => match value {
            PropertyValue::Text(s) => Ok(equals(json!(s))),
            _ => Err(mismatch("text")),
        },
        PropertyType::Number => match value {
            PropertyValue::Number(n) => Ok(equals(json!(n))),
            _ => Err(mismatch("number")),
        },
        PropertyType::Checkbox => match value {
            PropertyValue::Boolean(b) => Ok(equals(json!(b))),
            _ => Err(mismatch("boolean")),
        },
        PropertyType::Date => match value {
            PropertyValue::Date(s) | PropertyValue::Text(s) => Ok(equals(json!(s))),
            _ => Err(mismatch("date")),
        },
        PropertyType::MultiSelect => match value {
            PropertyValue::Text(item) => Ok(json!({
                "property": property,
                "multi_select": {"contains": item}
            })),
            _ => Err(mismatch("text or list")),
        },
        // The server timestamps are not filterable through the equality
        // builder.
        PropertyType::CreatedTime | PropertyType::LastEditedTime => {
            Err(NotebaseLinkError::InvalidValue {
                property: property.to_string(),
                expected: "a filterable property",
                actual: property_type.as_str(),
            })
        }
    }
}

fn text_segments(text: &str) -> JsonValue {
    json!([{ "type": "text", "text": {"content": text} }])
}

fn first_segment_text(segments: Option<&JsonValue>) -> String {
    segments
        .and_then(JsonValue::as_array)
        .and_then(|segments| segments.first())
        .and_then(|segment| segment.get("text"))
        .and_then(|text| text.get("content"))
        .and_then(JsonValue::as_str)
        .unwrap_or("")
        .to_string()
}

fn text_or_null(value: Option<&JsonValue>) -> PropertyValue {
    value
        .and_then(JsonValue::as_str)
        .map(|s| PropertyValue::Text(s.to_string()))
        .unwrap_or(PropertyValue::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_schema() -> Schema {
        let properties = match json!({
            "Name": {"id": "title", "type": "title", "title": {}},
            "Notes": {"id": "n1", "type": "rich_text", "rich_text": {}},
            "Score": {"id": "s1", "type": "number", "number": {}},
            "Status": {"id": "st", "type": "select", "select": {}},
            "Tags": {"id": "t1", "type": "multi_select", "multi_select": {}},
            "When": {"id": "w1", "type": "date", "date": {}},
            "Done": {"id": "d1", "type": "checkbox", "checkbox": {}},
            "Link": {"id": "l1", "type": "url", "url": {}},
            "Email": {"id": "e1", "type": "email", "email": {}},
            "Phone": {"id": "p1", "type": "phone_number", "phone_number": {}},
            "Created": {"id": "c1", "type": "created_time", "created_time": {}},
            "Edited": {"id": "le", "type": "last_edited_time", "last_edited_time": {}},
            "Derived": {"id": "f1", "type": "formula", "formula": {}}
        }) {
            JsonValue::Object(map) => map,
            _ => unreachable!(),
        };
        Schema::from_properties(&properties)
    }

    fn remote_row(properties: JsonValue) -> RemoteRow {
        serde_json::from_value(json!({
            "id": "row_1",
            "properties": properties
        }))
        .unwrap()
    }

    fn writable_record() -> RowRecord {
        RowRecord::new()
            .with("Name", "run 14")
            .with("Notes", "warm restart")
            .with("Score", 0.873)
            .with("Status", "Done")
            .with("Tags", vec!["baseline", "augmented"])
            .with("When", PropertyValue::Date("2024-05-01".into()))
            .with("Done", true)
            .with("Link", "https://runs.example/14")
            .with("Email", "a@x.com")
            .with("Phone", "+1-555-0100")
    }

    #[test]
    fn test_round_trip_every_writable_type() {
        let schema = test_schema();
        let record = writable_record();

        let encoded = encode_row(&record, &schema).unwrap();
        let decoded = decode_row(&remote_row(JsonValue::Object(encoded)), &schema).unwrap();

        assert_eq!(decoded, record);
    }

    #[test]
    fn test_round_trip_null_values() {
        let schema = test_schema();
        let record = RowRecord::new()
            .with("Score", PropertyValue::Null)
            .with("Status", PropertyValue::Null)
            .with("When", PropertyValue::Null)
            .with("Link", PropertyValue::Null);

        let encoded = encode_row(&record, &schema).unwrap();
        let decoded = decode_row(&remote_row(JsonValue::Object(encoded)), &schema).unwrap();

        assert_eq!(decoded, record);
    }

    #[test]
    fn test_encode_unknown_property_fails() {
        let schema = test_schema();
        let record = RowRecord::new().with("Nonexistent", "x");
        assert!(matches!(
            encode_row(&record, &schema),
            Err(NotebaseLinkError::UnknownProperty(name)) if name == "Nonexistent"
        ));
    }

    #[test]
    fn test_encode_skips_server_timestamps() {
        let schema = test_schema();
        let record = RowRecord::new()
            .with("Name", "run")
            .with("Created", "2024-05-01T00:00:00.000Z")
            .with("Edited", "2024-05-02T00:00:00.000Z");

        let encoded = encode_row(&record, &schema).unwrap();
        assert!(encoded.contains_key("Name"));
        assert!(!encoded.contains_key("Created"));
        assert!(!encoded.contains_key("Edited"));
    }

    #[test]
    fn test_encode_multi_select_preserves_order() {
        let schema = test_schema();
        let record = RowRecord::new().with("Tags", vec!["a", "b"]);
        let encoded = encode_row(&record, &schema).unwrap();
        assert_eq!(
            encoded["Tags"],
            json!({"multi_select": [{"name": "a"}, {"name": "b"}]})
        );
    }

    #[test]
    fn test_encode_title_wraps_single_segment() {
        let schema = test_schema();
        let record = RowRecord::new().with("Name", "run 14");
        let encoded = encode_row(&record, &schema).unwrap();
        assert_eq!(
            encoded["Name"],
            json!({"title": [{"type": "text", "text": {"content": "run 14"}}]})
        );
    }

    #[test]
    fn test_encode_value_mismatch_fails() {
        let schema = test_schema();
        let record = RowRecord::new().with("Score", "not a number");
        assert!(matches!(
            encode_row(&record, &schema),
            Err(NotebaseLinkError::InvalidValue { property, expected, .. })
                if property == "Score" && expected == "number"
        ));
    }

    #[test]
    fn test_unsupported_type_is_strict_in_every_direction() {
        let schema = test_schema();

        let record = RowRecord::new().with("Derived", "x");
        assert!(matches!(
            encode_row(&record, &schema),
            Err(NotebaseLinkError::UnsupportedType { kind, .. }) if kind == "formula"
        ));
        assert!(matches!(
            build_equality_filter(&schema, &record),
            Err(NotebaseLinkError::UnsupportedType { .. })
        ));

        let row = remote_row(json!({"Derived": {"type": "formula", "formula": {"number": 2.0}}}));
        assert!(matches!(
            decode_row(&row, &schema),
            Err(NotebaseLinkError::UnsupportedType { property, .. }) if property == "Derived"
        ));
    }

    #[test]
    fn test_decode_empty_title_and_unset_values() {
        let schema = test_schema();
        let row = remote_row(json!({
            "Name": {"type": "title", "title": []},
            "Status": {"type": "select", "select": null},
            "When": {"type": "date", "date": null},
            "Score": {"type": "number", "number": null},
            "Tags": {"type": "multi_select", "multi_select": []}
        }));
        let decoded = decode_row(&row, &schema).unwrap();

        assert_eq!(decoded.get("Name"), Some(&PropertyValue::Text("".into())));
        assert_eq!(decoded.get("Status"), Some(&PropertyValue::Null));
        assert_eq!(decoded.get("When"), Some(&PropertyValue::Null));
        assert_eq!(decoded.get("Score"), Some(&PropertyValue::Null));
        assert_eq!(decoded.get("Tags"), Some(&PropertyValue::List(vec![])));
    }

    #[test]
    fn test_decode_takes_first_rich_text_segment() {
        let schema = test_schema();
        let row = remote_row(json!({
            "Notes": {"type": "rich_text", "rich_text": [
                {"type": "text", "text": {"content": "first"}},
                {"type": "text", "text": {"content": " second"}}
            ]}
        }));
        let decoded = decode_row(&row, &schema).unwrap();
        assert_eq!(decoded.get("Notes"), Some(&PropertyValue::Text("first".into())));
    }

    #[test]
    fn test_decode_ignores_properties_outside_schema() {
        let schema = test_schema();
        let row = remote_row(json!({
            "Name": {"type": "title", "title": [{"type": "text", "text": {"content": "x"}}]},
            "Ghost": {"type": "select", "select": {"name": "?"}}
        }));
        let decoded = decode_row(&row, &schema).unwrap();
        assert_eq!(decoded.len(), 1);
        assert!(!decoded.contains("Ghost"));
    }

    #[test]
    fn test_decode_server_timestamps_pass_through() {
        let schema = test_schema();
        let row = remote_row(json!({
            "Created": {"type": "created_time", "created_time": "2024-05-01T10:00:00.000Z"}
        }));
        let decoded = decode_row(&row, &schema).unwrap();
        assert_eq!(
            decoded.get("Created"),
            Some(&PropertyValue::Text("2024-05-01T10:00:00.000Z".into()))
        );
    }

    #[test]
    fn test_decode_row_with_id_injects_identifier() {
        let schema = test_schema();
        let row = remote_row(json!({
            "Done": {"type": "checkbox", "checkbox": true}
        }));
        let decoded = decode_row_with_id(&row, &schema).unwrap();
        assert_eq!(decoded.get("id"), Some(&PropertyValue::Text("row_1".into())));
        assert_eq!(decoded.get("Done"), Some(&PropertyValue::Boolean(true)));
    }

    #[test]
    fn test_select_equality_filter_shape() {
        let schema = test_schema();
        let predicate = RowRecord::new().with("Status", "Done");
        let filter = build_equality_filter(&schema, &predicate).unwrap();
        assert_eq!(
            *filter.as_json(),
            json!({"and": [{"property": "Status", "select": {"equals": "Done"}}]})
        );
    }

    #[test]
    fn test_filter_combines_conditions_with_and() {
        let schema = test_schema();
        let predicate = RowRecord::new()
            .with("Done", true)
            .with("Score", 1.0)
            .with("Tags", vec!["a", "b"]);
        let filter = build_equality_filter(&schema, &predicate).unwrap();

        let conditions = filter.as_json()["and"].as_array().unwrap();
        // Done, Score, and one containment condition per tag
        assert_eq!(conditions.len(), 4);
        assert!(conditions.contains(&json!({"property": "Done", "checkbox": {"equals": true}})));
        assert!(conditions.contains(&json!({"property": "Score", "number": {"equals": 1.0}})));
        assert!(conditions.contains(&json!({"property": "Tags", "multi_select": {"contains": "a"}})));
        assert!(conditions.contains(&json!({"property": "Tags", "multi_select": {"contains": "b"}})));
    }

    #[test]
    fn test_filter_unknown_property_fails() {
        let schema = test_schema();
        let predicate = RowRecord::new().with("Nope", "x");
        assert!(matches!(
            build_equality_filter(&schema, &predicate),
            Err(NotebaseLinkError::UnknownProperty(_))
        ));
    }

    #[test]
    fn test_filter_rejects_server_timestamps() {
        let schema = test_schema();
        let predicate = RowRecord::new().with("Created", "2024-05-01");
        assert!(matches!(
            build_equality_filter(&schema, &predicate),
            Err(NotebaseLinkError::InvalidValue { property, .. }) if property == "Created"
        ));
    }
}
