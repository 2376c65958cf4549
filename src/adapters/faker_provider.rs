use crate::adapters::faker_generators;
use crate::domain::{FakeValueProvider, Locale, ResolutionError};
use serde_json::Value;
use tracing::{debug, warn};

/// Fake-value provider backed by the `fake` crate.
///
/// The locale is chosen once at construction and never changes, so a single
/// provider can be shared across threads behind an `Arc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerProvider {
    locale: Locale,
}

impl FakerProvider {
    pub fn new(locale: Locale) -> Self {
        debug!("Initialised faker provider with locale {}", locale);
        Self { locale }
    }

    /// Build a provider from a locale tag such as `pt-BR` or `fr_FR.UTF-8`.
    /// Unsupported tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match Locale::from_tag(tag) {
            Some(locale) => Self::new(locale),
            None => {
                warn!("Unsupported faker locale '{}', falling back to {}", tag, Locale::En);
                Self::new(Locale::En)
            }
        }
    }

    /// Every `namespace.method` this provider can resolve
    pub fn generator_names() -> impl Iterator<Item = &'static str> {
        faker_generators::names()
    }
}

impl FakeValueProvider for FakerProvider {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn call(&self, namespace: &str, method: &str, args: &[Value]) -> Result<Value, ResolutionError> {
        let name = format!("{}.{}", namespace, method);
        let generator = faker_generators::lookup(namespace, method)
            .ok_or_else(|| ResolutionError::UnknownGenerator(name.clone()))?;

        generator(self.locale, args).map_err(|reason| ResolutionError::InvalidGeneratorArguments {
            generator: name,
            reason,
        })
    }
}
