#![deny(missing_docs)]

//! # API Description Model
//!
//! Generic structures acting as an Intermediate Deserialization Layer.
//! These structs map directly to OpenAPI YAML/JSON objects, keeping only the
//! fields the document generator renders. Unknown fields are ignored, matching
//! the tolerant mapping of typical OpenAPI readers.
//!
//! Maps whose declaration order is meaningful (schema properties, media-type
//! content) use `IndexMap` so iteration preserves the source order; the
//! generator sorts explicitly wherever lexicographic order is required.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Top-level parsed API description.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDescription {
    /// Document metadata. Required by the traversal; absence is fatal.
    pub info: Option<Info>,

    /// Path templates mapped to their operations.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable component schemas ("Models"), absent when the document
    /// declares none.
    pub components: Option<Components>,
}

/// The `info` object: document title, description and version.
#[derive(Debug, Clone, Deserialize)]
pub struct Info {
    /// API title, rendered as the document title.
    pub title: Option<String>,
    /// Free-form API description.
    pub description: Option<String>,
    /// Version string, rendered as "Version ...".
    pub version: Option<String>,
}

/// The `components` object. Only schemas are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct Components {
    /// Named reusable schemas.
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
}

/// One path template's operations, one optional slot per HTTP method.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// GET operation.
    pub get: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// TRACE operation.
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Returns the defined operations paired with their method name, in the
    /// fixed rendering order: delete, get, head, options, patch, post, put,
    /// trace. This is a literal priority list, never sorted.
    pub fn methods(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("delete", self.delete.as_ref()),
            ("get", self.get.as_ref()),
            ("head", self.head.as_ref()),
            ("options", self.options.as_ref()),
            ("patch", self.patch.as_ref()),
            ("post", self.post.as_ref()),
            ("put", self.put.as_ref()),
            ("trace", self.trace.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, op)| op.map(|op| (name, op)))
    }
}

/// One HTTP method's behavior on a path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Free-form operation description.
    pub description: Option<String>,

    /// Request body definition.
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBody>,

    /// Declared parameters, in declaration order (order is semantically
    /// meaningful to callers and must be preserved).
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Responses keyed by status-code string.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// One operation parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Parameter location: path, query, header or cookie.
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// Parameter name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Example value, any JSON scalar or structure.
    pub example: Option<Value>,
    /// Parameter schema.
    pub schema: Option<Schema>,
}

/// Request body definition.
///
/// The content map is parsed but intentionally not rendered into the
/// document; only the description appears. Rendering the media types is a
/// pending extension.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestBody {
    /// Free-form description.
    pub description: Option<String>,
    /// Media-type map, parsed for future use.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// One media-type entry of a content map.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaType {
    /// Schema of the payload for this media type.
    pub schema: Option<Schema>,
}

/// One response of an operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// Free-form description.
    pub description: Option<String>,
    /// Media-type map for the response payload.
    pub content: Option<IndexMap<String, MediaType>>,
}

/// A data-shape definition.
///
/// Type and `$ref` may coexist; the generator's schema-value rule handles all
/// four presence combinations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Type name, e.g. "string" or "object".
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    /// Format qualifier, e.g. "int64" or "date-time".
    pub format: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Default value.
    pub default: Option<Value>,
    /// Example value.
    pub example: Option<Value>,
    /// Reference to a named component schema, e.g.
    /// "#/components/schemas/User".
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Declared properties for object-typed schemas, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,
}
