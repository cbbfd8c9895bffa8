#![deny(missing_docs)]

//! # Document Model
//!
//! Intermediate deserialization layer over the subset of an OpenAPI 3 document
//! that the renderers consume.
//!
//! Every mapping is an `IndexMap` so iteration follows document order. Every field
//! is optional; `null` and absence are indistinguishable. Defaults for rendering
//! live in the accessor methods, not in the data.

use crate::oas::lenient;
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Title used when `info.title` is absent.
pub const DEFAULT_TITLE: &str = "API Documentation";

/// Description used when `info.description` is absent.
pub const DEFAULT_DESCRIPTION: &str = "No description provided.";

/// Label used for an operation without tags.
pub const NO_TAGS: &str = "none";

/// Type label used for a property without a declared `type`.
pub const DEFAULT_PROPERTY_TYPE: &str = "object";

/// Path item keys that denote operations.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

static EMPTY_INFO: Info = Info {
    title: None,
    version: None,
    description: None,
};

/// Root of a parsed API description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiDocument {
    /// The `info` object.
    pub info: Option<Info>,
    /// The `paths` object.
    pub paths: Option<Paths>,
    /// The `components` object.
    pub components: Option<Components>,
}

impl ApiDocument {
    /// The `info` object, or an empty one when the document has none.
    pub fn info(&self) -> &Info {
        self.info.as_ref().unwrap_or(&EMPTY_INFO)
    }

    /// Every `(path, method, operation)` triple in document order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Operation)> {
        self.paths.iter().flat_map(|paths| {
            paths.items.iter().flat_map(|(path, item)| {
                item.operations
                    .iter()
                    .map(move |(method, op)| (path.as_str(), method.as_str(), op))
            })
        })
    }

    /// Named schemas under `components.schemas`, in document order.
    pub fn schemas(&self) -> impl Iterator<Item = (&String, &Schema)> {
        self.components
            .iter()
            .flat_map(|c| c.schemas.iter().flatten())
    }

    /// Named schemes under `components.securitySchemes`, in document order.
    pub fn security_schemes(&self) -> impl Iterator<Item = (&String, &SecurityScheme)> {
        self.components
            .iter()
            .flat_map(|c| c.security_schemes.iter().flatten())
    }
}

/// The `info` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Info {
    /// API title.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub title: Option<String>,
    /// API version.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub version: Option<String>,
    /// Free-form description.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

impl Info {
    /// Title, falling back to [`DEFAULT_TITLE`].
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Description, falling back to [`DEFAULT_DESCRIPTION`].
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// The Paths Object, keyed by path template.
///
/// Specification extensions (`x-...`) are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    /// Path items in document order.
    pub items: IndexMap<String, PathItem>,
}

impl<'de> Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut items = IndexMap::with_capacity(raw.len());

        for (path, value) in raw {
            if path.starts_with("x-") {
                continue;
            }
            let item = PathItem::from_value(&path, value).map_err(D::Error::custom)?;
            items.insert(path, item);
        }

        Ok(Self { items })
    }
}

/// A Path Item Object reduced to its operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// Operations keyed by the method as written in the document.
    pub operations: IndexMap<String, Operation>,
}

impl PathItem {
    fn from_value(path: &str, value: Value) -> Result<Self, String> {
        let raw = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            _ => return Err(format!("Path item '{}' is not an object", path)),
        };

        let mut operations = IndexMap::new();
        for (method, op) in raw {
            if !is_http_method(&method) {
                continue;
            }
            let operation = serde_json::from_value::<Operation>(op).map_err(|e| {
                format!(
                    "Failed to parse operation '{} {}': {}",
                    method.to_uppercase(),
                    path,
                    e
                )
            })?;
            operations.insert(method, operation);
        }

        Ok(Self { operations })
    }
}

fn is_http_method(key: &str) -> bool {
    HTTP_METHODS.iter().any(|m| m.eq_ignore_ascii_case(key))
}

/// An Operation Object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Operation {
    /// Unique operation identifier.
    #[serde(rename = "operationId", deserialize_with = "lenient::opt_string")]
    pub operation_id: Option<String>,
    /// Short summary. Parsed but not rendered.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub summary: Option<String>,
    /// Long description.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Grouping tags.
    #[serde(deserialize_with = "lenient::opt_string_list")]
    pub tags: Option<Vec<String>>,
    /// Request body.
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBody>,
    /// Responses keyed by status code.
    pub responses: Option<IndexMap<String, Response>>,
}

impl Operation {
    /// Heading for the operation: the `operationId`, or `"<METHOD> <path>"`.
    pub fn heading(&self, method: &str, path: &str) -> String {
        match &self.operation_id {
            Some(id) => id.clone(),
            None => format!("{} {}", method.to_uppercase(), path),
        }
    }

    /// Comma-joined tags, or [`NO_TAGS`] when there are none.
    pub fn tags_label(&self) -> String {
        match self.tags.as_deref() {
            Some(tags) if !tags.is_empty() => tags.join(", "),
            _ => NO_TAGS.to_string(),
        }
    }

    /// Description, or the empty string.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Media types accepted by the request body, in document order.
    pub fn consumes(&self) -> impl Iterator<Item = &str> {
        self.request_body
            .iter()
            .flat_map(|body| body.content.iter().flatten())
            .map(|(mime, _)| mime.as_str())
    }

    /// Responses keyed by status code, in document order.
    pub fn responses(&self) -> impl Iterator<Item = (&String, &Response)> {
        self.responses.iter().flatten()
    }
}

/// A Request Body Object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequestBody {
    /// Content keyed by media type. A `null` media type still counts as accepted.
    pub content: Option<IndexMap<String, Option<MediaType>>>,
}

/// A Response Object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Response {
    /// Response description.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Content keyed by media type.
    pub content: Option<IndexMap<String, Option<MediaType>>>,
}

impl Response {
    /// Description, or the empty string.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// The first content entry in document order, unless it is `null`.
    pub fn first_content(&self) -> Option<&MediaType> {
        self.content
            .as_ref()
            .and_then(|c| c.values().next())
            .and_then(Option::as_ref)
    }
}

/// A Media Type Object, reduced to its example payloads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MediaType {
    /// Singular example payload.
    pub example: Option<Value>,
    /// Named examples.
    pub examples: Option<IndexMap<String, Option<ExampleObject>>>,
}

/// An Example Object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExampleObject {
    /// Embedded literal example.
    pub value: Option<Value>,
}

/// The `components` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Named schemas.
    pub schemas: Option<IndexMap<String, Schema>>,
    /// Named security schemes.
    #[serde(rename = "securitySchemes")]
    pub security_schemes: Option<IndexMap<String, SecurityScheme>>,
}

/// A Schema Object, reduced to what the definitions table needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Schema description.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Declared properties.
    pub properties: Option<IndexMap<String, PropertySchema>>,
}

impl Schema {
    /// Description, or the empty string.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// The part of a property schema that is rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PropertySchema {
    /// Declared `type`.
    #[serde(rename = "type", deserialize_with = "lenient::opt_string")]
    pub kind: Option<String>,
}

impl PropertySchema {
    /// Declared type, or [`DEFAULT_PROPERTY_TYPE`].
    pub fn type_label(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_PROPERTY_TYPE)
    }
}

/// A Security Scheme Object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SecurityScheme {
    /// Scheme type (`apiKey`, `http`, `oauth2`, ...).
    #[serde(rename = "type", deserialize_with = "lenient::opt_string")]
    pub kind: Option<String>,
    /// Scheme description.
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
}

impl SecurityScheme {
    /// Type, or the empty string.
    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    /// Description, or the empty string.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ApiDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_document_defaults() {
        let doc = parse("{}");
        assert_eq!(doc.info().title(), DEFAULT_TITLE);
        assert_eq!(doc.info().description(), DEFAULT_DESCRIPTION);
        assert!(doc.info().version.is_none());
        assert_eq!(doc.operations().count(), 0);
        assert_eq!(doc.schemas().count(), 0);
        assert_eq!(doc.security_schemes().count(), 0);
    }

    #[test]
    fn test_null_sections_are_absent() {
        let doc = parse(r#"{"info": null, "paths": null, "components": {"schemas": null}}"#);
        assert_eq!(doc.info().title(), DEFAULT_TITLE);
        assert_eq!(doc.operations().count(), 0);
        assert_eq!(doc.schemas().count(), 0);
    }

    #[test]
    fn test_operations_keep_document_order() {
        let doc = parse(
            r#"{"paths": {
                "/z": {"post": {}, "get": {}},
                "/a": {"delete": {}}
            }}"#,
        );
        let order: Vec<_> = doc.operations().map(|(p, m, _)| (p, m)).collect();
        assert_eq!(order, vec![("/z", "post"), ("/z", "get"), ("/a", "delete")]);
    }

    #[test]
    fn test_path_item_skips_non_operations() {
        let doc = parse(
            r#"{"paths": {
                "x-internal": {"foo": 1},
                "/pets/{id}": {
                    "summary": "Pet",
                    "parameters": [{"name": "id", "in": "path"}],
                    "GET": {"operationId": "getPet"},
                    "x-extra": true
                },
                "/empty": null
            }}"#,
        );
        let ops: Vec<_> = doc.operations().map(|(p, m, o)| (p, m, o.heading(m, p))).collect();
        assert_eq!(ops, vec![("/pets/{id}", "GET", "getPet".to_string())]);
    }

    #[test]
    fn test_malformed_operation_names_location() {
        let err = serde_json::from_str::<ApiDocument>(r#"{"paths": {"/x": {"get": {"tags": 5}}}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("GET /x"));
    }

    #[test]
    fn test_operation_defaults() {
        let op = Operation::default();
        assert_eq!(op.heading("patch", "/things"), "PATCH /things");
        assert_eq!(op.tags_label(), NO_TAGS);
        assert_eq!(op.description(), "");
        assert_eq!(op.consumes().count(), 0);
        assert_eq!(op.responses().count(), 0);

        let tagged = Operation {
            tags: Some(vec!["pets".into(), "store".into()]),
            ..Default::default()
        };
        assert_eq!(tagged.tags_label(), "pets, store");

        let empty_tags = Operation {
            tags: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(empty_tags.tags_label(), NO_TAGS);
    }

    #[test]
    fn test_ref_markers_are_opaque() {
        let doc = parse(
            r##"{
                "paths": {"/x": {"get": {"responses": {"200": {"$ref": "#/components/responses/Ok"}}}}},
                "components": {"schemas": {"Pet": {"properties": {"owner": {"$ref": "#/components/schemas/Owner"}}}}}
            }"##,
        );
        let (_, _, op) = doc.operations().next().unwrap();
        let (_, resp) = op.responses().next().unwrap();
        assert_eq!(resp.description(), "");
        assert!(resp.first_content().is_none());

        let (_, pet) = doc.schemas().next().unwrap();
        let owner = &pet.properties.as_ref().unwrap()["owner"];
        assert_eq!(owner.type_label(), DEFAULT_PROPERTY_TYPE);
    }

    #[test]
    fn test_null_media_type_still_consumed() {
        let doc = parse(
            r#"{"paths": {"/x": {"post": {"requestBody": {"content": {
                "application/json": null,
                "text/plain": {}
            }}}}}}"#,
        );
        let (_, _, op) = doc.operations().next().unwrap();
        let mimes: Vec<_> = op.consumes().collect();
        assert_eq!(mimes, vec!["application/json", "text/plain"]);
    }

    #[test]
    fn test_null_first_content_has_no_media() {
        let doc = parse(
            r#"{"paths": {"/x": {"get": {"responses": {"200": {"content": {
                "application/json": null,
                "text/plain": {"example": "later"}
            }}}}}}}"#,
        );
        let (_, _, op) = doc.operations().next().unwrap();
        let (_, resp) = op.responses().next().unwrap();
        assert!(resp.first_content().is_none());
    }

    #[test]
    fn test_non_string_tags_are_text() {
        let doc = parse(r#"{"paths": {"/x": {"get": {"tags": ["v1", 2]}}}}"#);
        let (_, _, op) = doc.operations().next().unwrap();
        assert_eq!(op.tags_label(), "v1, 2");
    }
}
