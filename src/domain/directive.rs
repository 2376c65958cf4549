//! Parser for the `x-faker` schema extension.
//!
//! A directive is either a template (`"{{name.firstName}} {{name.lastName}}"`)
//! or a single generator call (`"lorem.words(3)"`). Parsing happens before any
//! generator runs so malformed directives and unknown generators are told apart.

use serde_json::Value;

use super::error::ResolutionError;

/// A parsed `x-faker` directive
#[derive(Debug, Clone, PartialEq)]
pub enum FakerDirective {
    /// String containing `{{...}}` placeholders, each one a generator call
    Template(String),
    /// `namespace.method` with optional JSON arguments
    Call(CallDirective),
}

/// A `namespace.method(args)` generator call
#[derive(Debug, Clone, PartialEq)]
pub struct CallDirective {
    pub namespace: String,
    pub method: String,
    pub args: Vec<Value>,
}

impl FakerDirective {
    /// Parse the raw value of an `x-faker` field.
    pub fn from_value(value: &Value) -> Result<Self, ResolutionError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => Err(ResolutionError::InvalidDirectiveFormat(other.to_string())),
        }
    }

    pub fn parse(input: &str) -> Result<Self, ResolutionError> {
        if is_template(input) {
            return Ok(Self::Template(input.to_string()));
        }
        CallDirective::parse(input).map(Self::Call)
    }
}

impl CallDirective {
    /// Parse `<namespace>.<method>` or `<namespace>.<method>(<json-args>)`.
    ///
    /// Namespace and method are word tokens (`[A-Za-z0-9_]+`). The text inside
    /// the parentheses is read as the body of a JSON array, so `(1, "x")`
    /// yields `[1, "x"]`.
    pub fn parse(input: &str) -> Result<Self, ResolutionError> {
        let invalid = || ResolutionError::InvalidDirectiveFormat(input.to_string());

        let (head, fragment) = match input.find('(') {
            Some(open) => {
                let inner = input[open + 1..].strip_suffix(')').ok_or_else(invalid)?;
                (&input[..open], Some(inner))
            }
            None => (input, None),
        };

        let (namespace, method) = head.split_once('.').ok_or_else(invalid)?;
        if !is_word(namespace) || !is_word(method) {
            return Err(invalid());
        }

        let args = match fragment {
            Some(fragment) if fragment.contains('\n') => return Err(invalid()),
            Some(fragment) if !fragment.is_empty() => {
                serde_json::from_str::<Vec<Value>>(&format!("[{}]", fragment))
                    .map_err(|_| invalid())?
            }
            _ => Vec::new(),
        };

        Ok(Self {
            namespace: namespace.to_string(),
            method: method.to_string(),
            args,
        })
    }

    /// Registry key, `namespace.method`
    pub fn name(&self) -> String {
        format!("{}.{}", self.namespace, self.method)
    }
}

/// True when the string holds `{{`, at least one character, then `}}` on the same line.
pub fn is_template(input: &str) -> bool {
    input.match_indices("{{").any(|(start, _)| {
        let line = input[start + 2..].split('\n').next().unwrap_or_default();
        let mut chars = line.chars();
        chars.next().is_some() && chars.as_str().contains("}}")
    })
}

/// Replace every `{{ namespace.method(args) }}` placeholder using `resolve`.
///
/// String results are inserted as-is, anything else as JSON text. Text outside
/// placeholders, and an unterminated trailing `{{`, is copied through.
pub fn render_template<F>(template: &str, mut resolve: F) -> Result<String, ResolutionError>
where
    F: FnMut(&CallDirective) -> Result<Value, ResolutionError>,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        output.push_str(&rest[..start]);

        let token = rest[start + 2..start + 2 + len].trim();
        let call = CallDirective::parse(token)?;
        match resolve(&call)? {
            Value::String(s) => output.push_str(&s),
            other => output.push_str(&other.to_string()),
        }

        rest = &rest[start + 2 + len + 2..];
    }

    output.push_str(rest);
    Ok(output)
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
