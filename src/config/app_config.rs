use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
    pub inference: InferenceConfig,
    pub cors: CorsConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Name reported by the health endpoint
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Shared secret guarding the admin routes.
///
/// No default token: when unset, every gated request is rejected.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    pub token: Option<String>,
}

/// Inference feature switch and artifact locations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub enabled: bool,
    pub model_path: Option<String>,
    pub preprocessor_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty or containing `*` means any origin
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            service_name: "Portfolio Website with Blog".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_path: None,
            preprocessor_path: None,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allow_credentials: true,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "/metrics".to_string(),
        }
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, then `APP_*` variables
    /// such as `APP_ADMIN__TOKEN` or `APP_CORS__ALLOWED_ORIGINS=a,b`.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name("config/local").required(false))
            .add_source(
                ::config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Copy of the configuration that is safe to print
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();

        if config.admin.token.is_some() {
            config.admin.token = Some("[REDACTED]".to_string());
        }

        config
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.service_name, "Portfolio Website with Blog");
        assert!(config.inference.enabled);
        assert!(config.admin.token.is_none());
        assert!(!config.metrics.enabled);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"server": {"port": 9000}, "admin": {"token": "s3cret"}, "inference": {"enabled": false}}"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.admin.token.as_deref(), Some("s3cret"));
        assert!(!config.inference.enabled);
    }

    #[test]
    fn test_log_format_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }

    #[test]
    fn test_redacted_hides_token() {
        let mut config = AppConfig::default();
        config.admin.token = Some("s3cret".to_string());

        let printed = serde_json::to_string(&config.redacted()).unwrap();
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("[REDACTED]"));
    }

    #[test]
    fn test_cors_any_origin() {
        let mut cors = CorsConfig::default();
        assert!(cors.allows_any_origin());

        cors.allowed_origins = vec!["https://example.com".to_string()];
        assert!(!cors.allows_any_origin());

        cors.allowed_origins.push("*".to_string());
        assert!(cors.allows_any_origin());
    }
}
