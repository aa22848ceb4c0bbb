use anyhow::Result;
use config::{builder::DefaultState, Config as ConfigLoader, ConfigBuilder, Environment, File};
use nlp_trainer_api::observability::LogFormat;
use nlp_trainer_core::Backend;
use serde::Deserialize;

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub secret_key: String,
    pub debug: bool,
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_base_url: String,
    pub llm_timeout_secs: u64,
    pub log_format: LogFormat,
    pub default_backend: Backend,
    pub max_text_length: usize,
}

impl Config {
    /// Defaults, then `config/default` and `config/local`, then
    /// `NLP_TRAINER_*` variables, then the legacy variable names.
    pub fn load() -> Result<Self> {
        let builder = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("NLP_TRAINER").try_parsing(true));
        let builder = legacy_overrides(builder, |key| std::env::var(key).ok())?;

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "nlp_trainer=debug,tower_http=debug"
        } else {
            "info"
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(ConfigLoader::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 5000)?
        .set_default("secret_key", DEFAULT_SECRET_KEY)?
        .set_default("debug", true)?
        .set_default("llm_api_key", "")?
        .set_default("llm_model", nlp_trainer_llm::client::DEFAULT_MODEL)?
        .set_default("llm_base_url", nlp_trainer_llm::client::DEFAULT_BASE_URL)?
        .set_default("llm_timeout_secs", 30)?
        .set_default("log_format", "pretty")?
        .set_default("default_backend", "nltk")?
        .set_default("max_text_length", 100_000)?)
}

/// Variable names the application has always honoured.
const LEGACY_VARIABLES: [(&str, &str); 3] = [
    ("SESSION_SECRET", "secret_key"),
    ("GEMINI_API_KEY", "llm_api_key"),
    ("GEMINI_MODEL", "llm_model"),
];

fn legacy_overrides(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ConfigBuilder<DefaultState>> {
    for (variable, key) in LEGACY_VARIABLES {
        builder = builder.set_override_option(key, lookup(variable))?;
    }
    // Anything but "1" turns debug off.
    builder = builder.set_override_option("debug", lookup("FLASK_DEBUG").map(|v| v == "1"))?;
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn from_map(vars: &HashMap<&str, &str>) -> Result<Config> {
        let builder = legacy_overrides(defaults()?, |key| vars.get(key).map(|v| v.to_string()))?;
        Ok(builder.build()?.try_deserialize()?)
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = from_map(&HashMap::new()).unwrap();
        assert_eq!(
            config,
            Config {
                host: "0.0.0.0".to_string(),
                port: 5000,
                secret_key: "dev-secret-key".to_string(),
                debug: true,
                llm_api_key: String::new(),
                llm_model: "gemini-1.5-flash".to_string(),
                llm_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                llm_timeout_secs: 30,
                log_format: LogFormat::Pretty,
                default_backend: Backend::Nltk,
                max_text_length: 100_000,
            }
        );
        assert!(config.uses_default_secret());
        assert_eq!(config.log_filter(), "nlp_trainer=debug,tower_http=debug");
    }

    #[test]
    fn legacy_variables_override_defaults() {
        let vars = HashMap::from([
            ("SESSION_SECRET", "s3cret"),
            ("GEMINI_API_KEY", "key-123"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("FLASK_DEBUG", "0"),
        ]);
        let config = from_map(&vars).unwrap();
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.llm_api_key, "key-123");
        assert_eq!(config.llm_model, "gemini-1.5-pro");
        assert!(!config.debug);
        assert!(!config.uses_default_secret());
        assert_eq!(config.log_filter(), "info");
    }
}
