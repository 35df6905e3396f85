use byda_router::GeneratorConfig;
use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    pub storage: StorageConfig,

    // Secrets (from ENV only)
    #[serde(default)]
    pub mongodb_uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Mongodb,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            cors: CorsConfig {
                enabled: false,
                origins: Vec::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
            generator: GeneratorConfig::default(),
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                database: "byda".to_string(),
            },
            mongodb_uri: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables prefixed with `BYDA_`, sections split by `__`
    ///    (e.g. `BYDA_SERVER__PORT=8080`, `BYDA_GENERATOR__MODE=live`)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("BYDA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        if cfg.storage.backend == StorageBackend::Mongodb {
            cfg.mongodb_uri = std::env::var("MONGODB_URI").map_err(|_| {
                ConfigError::Message(
                    "MONGODB_URI environment variable is required for the mongodb backend"
                        .to_string(),
                )
            })?;
        }

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ConfigLoader::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byda_router::ResponseMode;

    #[test]
    fn test_config_structure() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [cors]
            enabled = true
            origins = ["http://localhost:3000"]

            [logging]
            level = "debug"
            format = "json"

            [generator]
            mode = "live"
            openai_model = "gpt-4o-mini"

            [storage]
            backend = "mongodb"
            database = "test"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.generator.mode, ResponseMode::Live);
        assert_eq!(config.generator.openai_model, "gpt-4o-mini");
        assert_eq!(config.generator.anthropic_model, "claude-sonnet-4-20250514");
        assert_eq!(config.storage.backend, StorageBackend::Mongodb);
    }

    #[test]
    fn test_generator_section_is_optional() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [cors]
            enabled = false
            origins = []

            [logging]
            level = "info"
            format = "pretty"

            [storage]
            backend = "memory"
            database = "byda"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.generator.mode, ResponseMode::Demo);
    }

    #[test]
    fn test_default_toml_matches_default() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/default.toml");
        let config = Config::from_file(path).unwrap();

        assert_eq!(config.storage.backend, Config::default().storage.backend);
        assert_eq!(config.generator.mode, Config::default().generator.mode);
        assert_eq!(config.server.port, Config::default().server.port);
    }
}
