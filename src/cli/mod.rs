//! CLI module for the folio API
//!
//! - `serve`: run the HTTP server (default)
//! - `config`: print the resolved configuration

pub mod serve;
pub mod show_config;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Portfolio Website with Blog - content, admin and inference API
#[derive(Parser)]
#[command(name = "folio-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve(serve::ServeArgs),

    /// Print the resolved configuration with secrets redacted
    Config,
}

/// Load `.env` and the layered configuration.
///
/// Falls back to defaults on error; the error is returned so the caller can
/// report it once logging is up.
pub fn load_config() -> (AppConfig, Option<::config::ConfigError>) {
    dotenvy::dotenv().ok();

    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
