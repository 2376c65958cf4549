use thiserror::Error;

use crate::config::{GeneratorSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_generator(&settings.generator) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_generator(generator: &GeneratorSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(locale) = &generator.locale {
            if locale.trim().is_empty() {
                errors.push(ValidationError::MissingField("generator.locale".to_string()));
            } else if !is_locale_tag(locale) {
                errors.push(ValidationError::InvalidValue {
                    field: "generator.locale".to_string(),
                    reason: format!("'{}' is not a locale tag like en, fr_FR or pt-BR", locale),
                });
            }
        }

        if let Some(example) = &generator.preferred_example {
            if example.trim().is_empty() {
                errors.push(ValidationError::MissingField(
                    "generator.preferred_example".to_string(),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `language[_-]REGION[.encoding][@modifier]` shape. Whether the provider
/// supports the locale is decided later; unsupported tags fall back to English.
fn is_locale_tag(tag: &str) -> bool {
    let base = tag.split(|c: char| c == '.' || c == '@').next().unwrap_or_default();
    let mut parts = base.split(|c: char| c == '_' || c == '-');

    let language_ok = parts
        .next()
        .map_or(false, |lang| (1..=8).contains(&lang.len()) && lang.chars().all(|c| c.is_ascii_alphabetic()));

    language_ok
        && parts.all(|part| (1..=8).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphanumeric()))
}
