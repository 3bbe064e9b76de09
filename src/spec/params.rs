//! Parameter tree: the `options` mapping of an argument spec entry point.
//!
//! YAML shape (Ansible `meta/argument_specs.yml`):
//! ```yaml
//! name:
//!   description: The name        # string or list of strings, optional
//!   type: str                    # optional
//!   required: true               # optional
//!   choices: [fast, slow]        # optional
//!   options:                     # optional, same shape one level down
//!     nested: { type: int }
//! ```
//!
//! We keep two representations:
//! - RawParameter: one entry as it appears in YAML (serde-friendly)
//! - Parameter / ParameterTree: ordered, defaults filled in, ready to render

use crate::diagnostics;
use crate::error::ArgSpecError;
use crate::spec::Scalar;

use serde::Deserialize;
use serde_yaml::Value;

/// Raw parameter shape as it appears in the YAML document.
///
/// Keys we do not render (`default`, `elements`, `aliases`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawParameter {
    #[serde(default)]
    pub description: Option<RawDescription>,

    #[serde(default, rename = "type")]
    pub kind: Option<Scalar>,

    #[serde(default)]
    pub required: Option<Scalar>,

    #[serde(default)]
    pub choices: Option<Vec<Scalar>>,

    /// Kept untyped here; converted recursively by `ParameterTree::from_value`.
    #[serde(default)]
    pub options: Option<Value>,
}

/// Ansible accepts a single string or a list of lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDescription {
    Lines(Vec<Scalar>),
    Single(Scalar),
}

impl RawDescription {
    fn into_text(self) -> String {
        match self {
            RawDescription::Single(s) => s.to_string(),
            RawDescription::Lines(lines) => lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// One named parameter with every optional field already defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    /// Empty when absent.
    pub description: String,
    /// The YAML `type` tag. Empty when absent.
    pub kind: String,
    /// `Scalar::Null` (shown as empty) when absent.
    pub required: Scalar,
    /// `None` means no choices block; `Some(vec![])` still renders the header.
    pub choices: Option<Vec<Scalar>>,
    pub node: ParameterNode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterNode {
    Leaf,
    Branch(ParameterTree),
}

impl ParameterNode {
    pub fn children(&self) -> Option<&ParameterTree> {
        match self {
            ParameterNode::Leaf => None,
            ParameterNode::Branch(tree) => Some(tree),
        }
    }
}

/// Parameters in document order. Order is significant: it is the render order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTree {
    params: Vec<Parameter>,
}

impl ParameterTree {
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Total number of parameters at every depth.
    pub fn count_all(&self) -> usize {
        self.params
            .iter()
            .map(|p| 1 + p.node.children().map_or(0, ParameterTree::count_all))
            .sum()
    }

    /// Convert an untyped YAML mapping into a typed tree, validating shape once.
    ///
    /// `path` is the dotted location of `value`, used in error messages.
    pub fn from_value(value: &Value, path: &str) -> Result<Self, ArgSpecError> {
        let mapping = match value {
            Value::Mapping(m) => m,
            other => {
                return Err(ArgSpecError::Structure {
                    path: path.to_string(),
                    message: format!("expected a mapping of parameters, found {}", kind_of(other)),
                });
            }
        };

        let mut params = Vec::with_capacity(mapping.len());
        for (key, raw_value) in mapping {
            let name = key_name(key, path)?;
            let param_path = format!("{path}.{name}");
            params.push(Parameter::from_value(name, raw_value, &param_path)?);
        }

        Ok(Self { params })
    }
}

impl Parameter {
    fn from_value(name: String, value: &Value, path: &str) -> Result<Self, ArgSpecError> {
        let raw: RawParameter = match value {
            // `name:` with nothing under it renders as a bare leaf.
            Value::Null => RawParameter::default(),
            Value::Mapping(_) => {
                serde_yaml::from_value(value.clone()).map_err(|e| ArgSpecError::Structure {
                    path: path.to_string(),
                    message: e.to_string(),
                })?
            }
            other => {
                return Err(ArgSpecError::Structure {
                    path: path.to_string(),
                    message: format!("expected a mapping, found {}", kind_of(other)),
                });
            }
        };

        let required = raw.required.map(Scalar::into_flag).unwrap_or_default();
        if !matches!(required, Scalar::Bool(_) | Scalar::Null) {
            diagnostics::warn(format!(
                "`{path}.required` is {required:?}, expected a boolean"
            ));
        }

        let node = match &raw.options {
            None => ParameterNode::Leaf,
            Some(options) => {
                ParameterNode::Branch(ParameterTree::from_value(options, &format!("{path}.options"))?)
            }
        };

        Ok(Self {
            name,
            description: raw.description.map(RawDescription::into_text).unwrap_or_default(),
            kind: raw.kind.map(|k| k.to_string()).unwrap_or_default(),
            required,
            choices: raw.choices,
            node,
        })
    }
}

fn key_name(key: &Value, path: &str) -> Result<String, ArgSpecError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Null | Value::Bool(_) | Value::Number(_) => serde_yaml::from_value::<Scalar>(key.clone())
            .map(|s| s.to_string())
            .map_err(|e| ArgSpecError::Structure {
                path: path.to_string(),
                message: e.to_string(),
            }),
        other => Err(ArgSpecError::Structure {
            path: path.to_string(),
            message: format!("parameter names must be strings, numbers, booleans or null, found {}", kind_of(other)),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
