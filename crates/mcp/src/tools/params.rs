// Declarative tool parameters and argument validation

use crate::error::{McpError, McpResult};
use crate::tools::{json_schema_enum, json_schema_integer, json_schema_object, json_schema_string};
use serde_json::{Map, Value};

/// Kind of value a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    /// A non-negative integer. Integral floats such as `10.0` are accepted
    /// and stored as integers.
    Integer,
    /// A string restricted to the listed values.
    Enum(&'static [&'static str]),
}

impl ParamKind {
    /// Check `value` against the kind, normalizing it in place.
    fn accept(&self, value: &mut Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Integer => {
                if value.is_u64() {
                    return true;
                }
                match value.as_f64() {
                    Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => {
                        *value = Value::from(f as u64);
                        true
                    }
                    _ => false,
                }
            }
            ParamKind::Enum(allowed) => value
                .as_str()
                .map(|s| allowed.contains(&s))
                .unwrap_or(false),
        }
    }

    fn describe(&self) -> String {
        match self {
            ParamKind::String => "a string".to_string(),
            ParamKind::Integer => "a non-negative integer".to_string(),
            ParamKind::Enum(allowed) => format!("one of {}", allowed.join(", ")),
        }
    }
}

/// A single declared parameter.
///
/// Required parameters never carry a default; see [`ParamSpec::required`].
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<Value>,
}

impl ParamSpec {
    pub fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
            default: None,
        }
    }

    pub fn optional(
        name: &'static str,
        kind: ParamKind,
        description: &'static str,
        default: impl Into<Value>,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            default: Some(default.into()),
        }
    }

    fn to_json_schema(&self) -> Value {
        let mut schema = match self.kind {
            ParamKind::String => json_schema_string(self.description),
            ParamKind::Integer => json_schema_integer(self.description),
            ParamKind::Enum(allowed) => json_schema_enum(allowed, self.description),
        };
        if let (Some(default), Some(obj)) = (&self.default, schema.as_object_mut()) {
            obj.insert("default".to_string(), default.clone());
        }
        schema
    }
}

/// Ordered parameter declarations of one tool.
#[derive(Debug, Clone, Default)]
pub struct ParameterSchema {
    params: Vec<ParamSpec>,
}

impl ParameterSchema {
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    /// Render the JSON Schema advertised in `tools/list`.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.to_json_schema()))
            .collect();
        let required = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();

        json_schema_object(Value::Object(properties), required)
    }

    /// Check an argument bag against the declarations and fill defaults.
    ///
    /// `null` counts as absent. Undeclared keys pass through untouched.
    pub fn validate(&self, arguments: Value) -> McpResult<Map<String, Value>> {
        let mut args = match arguments {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(McpError::InvalidArguments(format!(
                    "arguments must be an object, got {}",
                    json_type_name(&other)
                )))
            }
        };

        for param in &self.params {
            match args.get_mut(param.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    if !param.kind.accept(value) {
                        return Err(McpError::InvalidArguments(format!(
                            "`{}` must be {}, got {}",
                            param.name,
                            param.kind.describe(),
                            value
                        )));
                    }
                }
                None if param.required => {
                    return Err(McpError::InvalidArguments(format!(
                        "missing required argument `{}`",
                        param.name
                    )))
                }
                None => match &param.default {
                    Some(default) => {
                        args.insert(param.name.to_string(), default.clone());
                    }
                    None => {
                        args.remove(param.name);
                    }
                },
            }
        }

        Ok(args)
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
