//! Application configuration

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, CorsConfig, InferenceConfig, LogFormat, LoggingConfig, MetricsConfig,
    ServerConfig,
};
