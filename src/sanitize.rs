use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

/// Normalize a JSON-like value for transport: rebuild sequences and mappings
/// recursively, pass scalars (including null) through untouched. Records read
/// back from the players table go through here before they hit the wire, so
/// nothing store-specific ever leaks into a response body.
pub fn sanitize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(sanitize).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), sanitize(field)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// Convert a raw table item into a plain JSON mapping.
pub fn item_to_map(item: HashMap<String, AttributeValue>) -> Map<String, Value> {
    item.into_iter()
        .map(|(key, attr)| (key, attr_to_value(attr)))
        .collect()
}

/// Convert a plain JSON mapping into a table item for a put.
pub fn map_to_item(fields: &Map<String, Value>) -> HashMap<String, AttributeValue> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), value_to_attr(value)))
        .collect()
}

fn attr_to_value(attr: AttributeValue) -> Value {
    match attr {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => parse_number(&n),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(items) => Value::Array(items.into_iter().map(attr_to_value).collect()),
        AttributeValue::M(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, attr)| (key, attr_to_value(attr)))
                .collect(),
        ),
        AttributeValue::Ss(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(items) => Value::Array(items.iter().map(|n| parse_number(n)).collect()),
        // Binary payloads never appear in player records
        _ => Value::Null,
    }
}

fn value_to_attr(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(value_to_attr).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), value_to_attr(field)))
                .collect(),
        ),
    }
}

fn parse_number(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        // A numeric attribute the wire format can't represent stays a string
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
