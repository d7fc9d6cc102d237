//! Structural schemas for constrained extraction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// JSON type of a single extracted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl FieldKind {
    fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }
}

/// One named field the provider should extract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub required: bool,
}

fn default_true() -> bool {
    true
}

impl FieldSpec {
    /// A required field without description.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind, description: None, required: true }
    }
}

/// JSON Schema handed to the provider as `jsonOptions.schema`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredSchema(Value);

impl StructuredSchema {
    /// Build an object schema from a flat list of fields.
    pub fn from_fields(fields: &[FieldSpec]) -> Self {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in fields {
            let mut property = json!({ "type": field.kind.as_str() });
            if let Some(description) = &field.description {
                property["description"] = Value::String(description.clone());
            }
            properties.insert(field.name.clone(), property);

            if field.required {
                required.push(Value::String(field.name.clone()));
            }
        }

        Self(json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }))
    }

    /// Derive the schema of a Rust type.
    pub fn for_type<T: JsonSchema>() -> Self {
        Self(schemars::schema_for!(T).to_value())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
