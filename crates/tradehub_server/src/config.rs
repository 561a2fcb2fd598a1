//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ServerError, ServerResult};

/// Environment variable that overrides the configured bind address
pub const BIND_ENV: &str = "TRADEHUB_BIND";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address (e.g., "127.0.0.1:8080")
    pub bind_address: String,

    /// Default tracing filter, used when RUST_LOG is unset
    pub log_filter: String,

    /// CORS configuration
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    /// Allowed request headers; `"*"` allows any
    pub allowed_headers: Vec<String>,
    pub max_age: u64, // seconds
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            log_filter: "tradehub_server=debug,tradehub_core=debug,tradehub_api=debug,tower_http=info"
                .to_string(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec![
                "GET".to_string(),
                "POST".to_string(),
                "PUT".to_string(),
                "DELETE".to_string(),
            ],
            allowed_headers: vec!["*".to_string()],
            max_age: 3600,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub async fn load(path: &Path) -> ServerResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            ServerError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| ServerError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(content: &str) -> ServerResult<Self> {
        toml::from_str(content).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Write the configuration as TOML, creating parent directories.
    pub async fn save(&self, path: &Path) -> ServerResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, self.to_toml()?).await?;
        Ok(())
    }

    pub fn to_toml(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Apply overrides from the environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(bind) = std::env::var(BIND_ENV) {
            if !bind.trim().is_empty() {
                self.bind_address = bind.trim().to_string();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml(
            r#"
            bind_address = "0.0.0.0:9000"

            [cors]
            allowed_origins = ["http://localhost:3000"]
            "#,
        )
        .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.cors.max_age, 3600);
        assert_eq!(config.log_filter, ServerConfig::default().log_filter);
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let err = ServerConfig::from_toml("bind_address = [").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "tradehub-config-{}",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let path = dir.join("tradehub.toml");

        let config = ServerConfig {
            bind_address: "127.0.0.1:9999".to_string(),
            ..Default::default()
        };
        config.save(&path).await.unwrap();

        let loaded = ServerConfig::load(&path).await.unwrap();
        assert_eq!(loaded, config);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = ServerConfig::load(Path::new("/definitely/not/here.toml"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not/here.toml"));
    }
}
