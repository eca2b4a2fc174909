use serde_json::{Map, Value, json};

use super::errors::ValidationError;

const ROOT: &str = "$";

/// Primitive type a declared field must carry.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    String,
    Number,
    Array(Box<FieldKind>),
    Object(Shape),
}

impl FieldKind {
    pub fn array_of(item: FieldKind) -> Self {
        FieldKind::Array(Box::new(item))
    }

    /// Checks a single value against this kind, reporting failures at `path`.
    pub fn validate(&self, value: &Value, path: &str) -> Result<(), ValidationError> {
        match (self, value) {
            (FieldKind::String, Value::String(_)) | (FieldKind::Number, Value::Number(_)) => Ok(()),
            (FieldKind::Array(item), Value::Array(values)) => {
                for (index, element) in values.iter().enumerate() {
                    item.validate(element, &format!("{path}[{index}]"))?;
                }
                Ok(())
            }
            (FieldKind::Object(shape), Value::Object(map)) => shape.validate_map(map, path),
            (kind, other) => Err(ValidationError::WrongType {
                field: path.to_string(),
                expected: kind.expected(),
                found: json_type_name(other),
            }),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Number => "a number",
            FieldKind::Array(_) => "an array",
            FieldKind::Object(_) => "an object",
        }
    }

    pub fn to_json_schema(&self) -> Value {
        match self {
            FieldKind::String => json!({ "type": "string" }),
            FieldKind::Number => json!({ "type": "number" }),
            FieldKind::Array(item) => json!({ "type": "array", "items": item.to_json_schema() }),
            FieldKind::Object(shape) => shape.to_json_schema(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub description: Option<String>,
}

/// Declared contract for a JSON object: field name to type and presence.
///
/// A shape is declared once and used twice: to validate values crossing the
/// model boundary, and to render the JSON schema handed to the model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    fields: Vec<FieldSpec>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.push(name, kind, true, description)
    }

    pub fn optional(self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.push(name, kind, false, description)
    }

    fn push(mut self, name: &str, kind: FieldKind, required: bool, description: &str) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            kind,
            required,
            description: (!description.is_empty()).then(|| description.to_string()),
        });
        self
    }

    /// Validates `value` and stops at the first offending field, in
    /// declaration order, depth first.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::Object(map) => self.validate_map(map, ""),
            other => Err(ValidationError::WrongType {
                field: ROOT.to_string(),
                expected: "an object",
                found: json_type_name(other),
            }),
        }
    }

    /// Returns `value` untouched when it conforms.
    pub fn conform(&self, value: Value) -> Result<Value, ValidationError> {
        self.validate(&value)?;
        Ok(value)
    }

    fn validate_map(&self, map: &Map<String, Value>, path: &str) -> Result<(), ValidationError> {
        for spec in &self.fields {
            let field_path = if path.is_empty() {
                spec.name.clone()
            } else {
                format!("{path}.{}", spec.name)
            };

            match map.get(&spec.name) {
                None | Some(Value::Null) if !spec.required => continue,
                None => return Err(ValidationError::MissingField { field: field_path }),
                Some(value) => spec.kind.validate(value, &field_path)?,
            }
        }
        Ok(())
    }

    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in &self.fields {
            let mut schema = spec.kind.to_json_schema();
            if let (Some(description), Value::Object(object)) = (&spec.description, &mut schema) {
                object.insert("description".to_string(), json!(description));
            }
            properties.insert(spec.name.clone(), schema);
        }

        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
