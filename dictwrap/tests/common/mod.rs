//! Shared fixtures for dictwrap integration tests

#![allow(dead_code)]

use dictwrap::Value;
use serde_json::ser::PrettyFormatter;
use serde_json::json;

/// The person record most behaviour tests run against
pub fn test_dict() -> Value {
    Value::from(json!({
        "first_name": "Joe",
        "last_name": "Exotic",
        "address": {
            "street": "13455 Highway 69 N",
            "city": "Adair",
            "state": "OK",
            "zip": "74330-2821"
        },
        "skills": ["Magician", "Tiger training", "Murder-for-hire Project Manager"],
        "friends": [
            {"name": "Carol Baskins", "title": "That B!tch"},
            {"name": "Doc Antle", "title": "Lady's Man"}
        ]
    }))
}

/// Look up a nested value in the plain data by JSON Pointer
pub fn plain_at(data: &Value, pointer: &str) -> serde_json::Value {
    data.to_json()
        .pointer(pointer)
        .cloned()
        .unwrap_or(serde_json::Value::Null)
}

/// Render with serde_json directly, using 4-space indentation when pretty
pub fn reference_text(plain: &serde_json::Value, pretty: bool) -> String {
    if !pretty {
        return serde_json::to_string(plain).expect("compact render");
    }
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    serde::Serialize::serialize(plain, &mut serializer).expect("pretty render");
    String::from_utf8(buffer).expect("utf-8")
}
