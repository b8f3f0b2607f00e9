//! JSON documents shaped like the remote service's responses.

use crate::model::ObjectRecord;
use serde_json::{json, Value};

/// An existing object with a small primary image.
pub fn imaged_object_json(id: u64) -> Value {
    json!({
        "objectID": id,
        "isHighlight": true,
        "primaryImage": format!("https://images.example/original/{}.jpg", id),
        "primaryImageSmall": format!("https://images.example/web-large/{}.jpg", id),
        "department": "European Paintings",
        "title": format!("Object {}", id),
        "artistDisplayName": "Unknown",
    })
}

/// An existing object whose image fields are empty strings.
pub fn imageless_object_json(id: u64) -> Value {
    json!({
        "objectID": id,
        "isHighlight": false,
        "primaryImage": "",
        "primaryImageSmall": "",
        "department": "Arms and Armor",
        "title": format!("Object {}", id),
    })
}

pub fn imaged_record(id: u64) -> ObjectRecord {
    serde_json::from_value(imaged_object_json(id)).unwrap()
}

pub fn imageless_record(id: u64) -> ObjectRecord {
    serde_json::from_value(imageless_object_json(id)).unwrap()
}

pub fn departments_json() -> Value {
    json!({
        "departments": [
            { "departmentId": 1, "displayName": "American Decorative Arts" },
            { "departmentId": 3, "displayName": "Ancient Near Eastern Art" },
            { "departmentId": 4, "displayName": "Arms and Armor" },
        ]
    })
}
