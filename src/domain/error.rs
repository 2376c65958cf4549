//! Error types for schema resolution

use thiserror::Error;

/// Errors that can occur while generating an example value from a schema
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolutionError {
    /// The `x-faker` directive matches neither the template nor the call grammar
    #[error("Invalid faker directive '{0}': expected <namespace>.<method>, <namespace>.<method>(<json-args>) or a {{{{...}}}} template")]
    InvalidDirectiveFormat(String),

    /// The directive names a generator the provider does not know
    #[error("Faker generator '{0}' not found")]
    UnknownGenerator(String),

    /// The generator exists but rejected its arguments
    #[error("Invalid arguments for faker generator '{generator}': {reason}")]
    InvalidGeneratorArguments { generator: String, reason: String },

    /// `example`/`examples` present but none of them yields a value
    #[error("Could not find an example")]
    NoExampleFound,

    /// `type` holds something other than a supported primitive or container
    #[error("Could not generate response: unknown type {0}")]
    UnknownType(String),

    /// No strategy applies to the schema node
    #[error("Unresolvable schema")]
    UnresolvableSchema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ResolutionError::UnknownGenerator("name.nope".into()).to_string(),
            "Faker generator 'name.nope' not found"
        );
        assert_eq!(
            ResolutionError::UnknownType("\"date\"".into()).to_string(),
            "Could not generate response: unknown type \"date\""
        );
        assert!(ResolutionError::InvalidDirectiveFormat("oops".into())
            .to_string()
            .contains("{{...}}"));
    }
}
