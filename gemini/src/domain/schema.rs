use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// Subset of the OpenAPI schema object accepted as `responseSchema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub property_ordering: Vec<String>,
}

impl Schema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::of(SchemaType::Number)
    }

    pub fn array_of(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an object property. Properties keep their insertion order in
    /// `propertyOrdering` so the model emits them in that order.
    pub fn with_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.property_ordering.push(name.clone());
        self.properties.insert(name, schema);
        self
    }

    pub fn with_required_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.with_property(name, schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_schema_serializes_in_gemini_format() {
        let schema = Schema::object()
            .with_required_property("summary", Schema::string().with_description("Short text"))
            .with_required_property("risks", Schema::array_of(Schema::string()));

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "OBJECT",
                "properties": {
                    "risks": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "summary": { "type": "STRING", "description": "Short text" }
                },
                "required": ["summary", "risks"],
                "propertyOrdering": ["summary", "risks"]
            })
        );
    }

    #[test]
    fn optional_property_is_not_required() {
        let schema = Schema::object().with_property("note", Schema::string());
        assert!(schema.required.is_empty());
        assert_eq!(schema.property_ordering, vec!["note".to_string()]);
    }
}
