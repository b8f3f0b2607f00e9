use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single object record as returned by `/objects/{id}`.
///
/// Only `objectID` and `primaryImageSmall` are interpreted. Every other field
/// is kept verbatim in `fields` and written back out on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Present only for objects that exist in the catalog
    #[serde(rename = "objectID", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<u64>,
    /// URL of the small primary image; empty when the object has no image
    #[serde(
        rename = "primaryImageSmall",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_image_small: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ObjectRecord {
    pub fn exists(&self) -> bool {
        self.object_id.is_some()
    }

    /// Whether the record carries a renderable image.
    pub fn has_image(&self) -> bool {
        self.primary_image_small
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }

    /// Looks up any pass-through field by its remote name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A catalog department as returned by `/departments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "departmentId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Envelope of `/search`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    // the service sends `null` rather than `[]` when nothing matches
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
}

/// Envelope of `/objects`. The accompanying id list is not needed and skipped.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectsResponse {
    pub total: u64,
}

/// Envelope of `/departments`.
#[derive(Debug, Deserialize)]
pub(crate) struct DepartmentsResponse {
    pub departments: Vec<Department>,
}
