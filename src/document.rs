//! Loading schema documents for the command line.

use anyhow::{anyhow, Context};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Parse a JSON or YAML document.
///
/// `.json` files are read as JSON and `.yaml`/`.yml` as YAML. Without a
/// recognised extension JSON is tried first, then YAML.
pub fn parse(content: &str, path: Option<&Path>) -> Result<Value, anyhow::Error> {
    let ext = path.and_then(|p| p.extension()).and_then(|e| e.to_str());

    match ext {
        Some("json") => serde_json::from_str(content).context("Failed to parse JSON schema document"),
        Some("yaml" | "yml") => serde_yaml::from_str(content).context("Failed to parse YAML schema document"),
        _ => serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .context("Schema document is neither valid JSON nor YAML"),
    }
}

/// Read and parse the document at `path`, or stdin when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Value, anyhow::Error> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema document {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read schema document from stdin")?;
            buffer
        }
    };

    parse(&content, path)
}

/// Select the node at `pointer` (RFC 6901). No pointer selects the whole document.
pub fn select<'a>(document: &'a Value, pointer: Option<&str>) -> Result<&'a Value, anyhow::Error> {
    match pointer {
        None | Some("") => Ok(document),
        Some(pointer) => document
            .pointer(pointer)
            .ok_or_else(|| anyhow!("No schema found at pointer '{}'", pointer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_by_extension() {
        let value = parse(r#"{"type": "string"}"#, Some(Path::new("schema.json"))).unwrap();
        assert_eq!(value, json!({"type": "string"}));

        let value = parse("type: integer\nx-count: 2\n", Some(Path::new("schema.yml"))).unwrap();
        assert_eq!(value, json!({"type": "integer", "x-count": 2}));
    }

    #[test]
    fn test_parse_guesses_format() {
        assert_eq!(parse(r#"{"enum": [1]}"#, None).unwrap(), json!({"enum": [1]}));
        assert_eq!(parse("enum:\n  - a\n", None).unwrap(), json!({"enum": ["a"]}));
    }

    #[test]
    fn test_parse_rejects_wrong_format() {
        assert!(parse("type: string", Some(Path::new("schema.json"))).is_err());
    }

    #[test]
    fn test_yaml_keeps_property_order() {
        let value = parse(
            "type: object\nproperties:\n  zeta: {type: string}\n  alpha: {type: string}\n",
            Some(Path::new("schema.yaml")),
        )
        .unwrap();
        let keys: Vec<&String> = value["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn test_select() {
        let document = json!({"components": {"schemas": {"Pet": {"type": "object"}}}});
        assert_eq!(select(&document, None).unwrap(), &document);
        assert_eq!(
            select(&document, Some("/components/schemas/Pet")).unwrap(),
            &json!({"type": "object"})
        );
        assert!(select(&document, Some("/components/schemas/Dog")).is_err());
    }
}
