//! Copy-as-JSON views of serializable values.
//!
//! A value is serialized to a `serde_json::Value` and then passed through a
//! nesting guard: the root sits at depth 1, each array element or object
//! field one level below its container, and anything deeper than
//! `max_depth` is replaced by [`DEPTH_MARKER`]. `null` stays `null` at any
//! depth.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Stands in for values nested deeper than the configured limit.
pub const DEPTH_MARKER: &str = "[对象嵌套过深]";

/// Knobs shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    pub max_depth: u32,
    pub pretty: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: true,
        }
    }
}

/// JSON type of a variable in the flattened view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// One leaf of the flattened variables view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    /// Dotted path from the root, e.g. `address.city` or `numbers[0]`.
    pub path: String,
    pub kind: ValueKind,
    /// Rendered the same way [`copy_text`] renders a scalar.
    pub value: String,
}

/// Serialize `value` and apply the nesting guard.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T, max_depth: u32) -> Result<Value, CoreError> {
    check_depth(max_depth)?;
    let value = serde_json::to_value(value)?;
    Ok(limit_depth(value, 1, max_depth))
}

/// Serialize one top-level field of `value`, treating the field as the root.
pub fn field_value<T: Serialize + ?Sized>(
    value: &T,
    field: &str,
    max_depth: u32,
) -> Result<Value, CoreError> {
    check_depth(max_depth)?;
    let not_found = || CoreError::NotFound {
        owner: std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or_default()
            .to_string(),
        field: field.to_string(),
    };

    let Value::Object(mut map) = serde_json::to_value(value)? else {
        return Err(not_found());
    };
    let field_value = map.remove(field).ok_or_else(not_found)?;
    Ok(limit_depth(field_value, 1, max_depth))
}

/// Render `value` the way a "copy as JSON" action puts it on the clipboard.
///
/// Strings are quoted and escaped, numbers and booleans are copied as their
/// literal text, and composites become JSON (pretty when requested).
pub fn copy_text<T: Serialize + ?Sized>(
    value: &T,
    options: InspectOptions,
) -> Result<String, CoreError> {
    let value = to_json_value(value, options.max_depth)?;
    render_value(&value, options.pretty)
}

/// Render an already-guarded JSON value.
pub fn render_value(value: &Value, pretty: bool) -> Result<String, CoreError> {
    match value {
        Value::Array(_) | Value::Object(_) if pretty => Ok(serde_json::to_string_pretty(value)?),
        Value::Array(_) | Value::Object(_) => Ok(serde_json::to_string(value)?),
        scalar => Ok(scalar_text(scalar)),
    }
}

/// Flatten `value` into one [`Variable`] per leaf.
///
/// Object keys are visited in sorted order. Empty arrays and objects are
/// leaves rendered as `[]` and `{}`. A scalar root is reported under `$`.
pub fn variables<T: Serialize + ?Sized>(
    value: &T,
    options: InspectOptions,
) -> Result<Vec<Variable>, CoreError> {
    let value = to_json_value(value, options.max_depth)?;
    let mut out = Vec::new();
    collect_variables(&value, String::new(), &mut out);
    Ok(out)
}

const fn check_depth(max_depth: u32) -> Result<(), CoreError> {
    if max_depth == 0 {
        return Err(CoreError::InvalidDepth { max_depth });
    }
    Ok(())
}

fn limit_depth(value: Value, depth: u32, max_depth: u32) -> Value {
    if value.is_null() {
        return Value::Null;
    }
    if depth > max_depth {
        return Value::String(DEPTH_MARKER.to_string());
    }

    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| limit_depth(item, depth + 1, max_depth))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, item)| (key, limit_depth(item, depth + 1, max_depth)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar,
    }
}

fn collect_variables(value: &Value, path: String, out: &mut Vec<Variable>) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                collect_variables(item, format!("{path}[{index}]"), out);
            }
        }
        Value::Object(map) if !map.is_empty() => {
            let mut keys = map.keys().collect::<Vec<_>>();
            keys.sort();
            for key in keys {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                collect_variables(&map[key.as_str()], child, out);
            }
        }
        leaf => out.push(Variable {
            path: if path.is_empty() {
                String::from("$")
            } else {
                path
            },
            kind: ValueKind::of(leaf),
            value: scalar_text(leaf),
        }),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::Array(_) => String::from("[]"),
        Value::Object(_) => String::from("{}"),
        // Display on a string Value quotes and escapes it.
        string @ Value::String(_) => string.to_string(),
    }
}
