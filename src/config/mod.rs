use config::{Config, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::cli::Cli;

/// Environment variables consulted, in order, for the system locale
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Faker locale tag. When unset the system locale is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Example name preferred when a schema carries an `examples` mapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_example: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputSettings {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

impl Settings {
    /// Create settings from CLI arguments (config file, then CLI/env overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .set_default("output.pretty", true)?
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `exemplar.{toml,yaml,json}` from `root` if present
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("exemplar");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("output.pretty", true)?
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(locale) = &cli.locale {
            self.generator.locale = Some(locale.clone());
        }
        if let Some(example) = &cli.example {
            self.generator.preferred_example = Some(example.clone());
        }
        if cli.compact {
            self.output.pretty = false;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    /// Configured locale tag, else the system locale, else `en`
    pub fn locale_tag(&self) -> String {
        self.generator
            .locale
            .clone()
            .or_else(|| system_locale(|key| std::env::var(key).ok()))
            .unwrap_or_else(|| "en".to_string())
    }
}

/// First non-empty locale variable, ignoring the `C`/`POSIX` defaults
pub fn system_locale<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .filter(|value| !matches!(value.as_str(), "C" | "POSIX" | "C.UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_system_locale_order() {
        assert_eq!(
            system_locale(env(&[("LANG", "fr_FR.UTF-8"), ("LC_ALL", "pt_BR.UTF-8")])),
            Some("pt_BR.UTF-8".to_string())
        );
        assert_eq!(
            system_locale(env(&[("LANG", "fr_FR.UTF-8"), ("LC_ALL", "")])),
            Some("fr_FR.UTF-8".to_string())
        );
        assert_eq!(system_locale(env(&[("LANG", "C")])), None);
        assert_eq!(system_locale(env(&[])), None);
    }

    #[test]
    fn test_configured_locale_wins() {
        let settings = Settings {
            generator: GeneratorSettings {
                locale: Some("zh_TW".to_string()),
                preferred_example: None,
            },
            output: OutputSettings::default(),
        };
        assert_eq!(settings.locale_tag(), "zh_TW");
    }

    #[test]
    fn test_cli_overrides() {
        use clap::Parser;

        let mut settings = Settings::default();
        let cli = Cli::parse_from(["exemplar", "--locale", "pt-BR", "--example", "cat", "--compact"]);
        settings.apply_cli_overrides(&cli);

        assert_eq!(settings.generator.locale.as_deref(), Some("pt-BR"));
        assert_eq!(settings.generator.preferred_example.as_deref(), Some("cat"));
        assert!(!settings.output.pretty);
    }
}
