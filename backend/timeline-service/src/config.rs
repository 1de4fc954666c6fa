/// Configuration management for Timeline Service
///
/// Loads configuration from environment variables. Secrets (database URL,
/// provider API key) are always injected through the environment and never
/// embedded in the binary.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Generation provider (Gemini) configuration
    pub gemini: GeminiConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Generation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key, injected via GEMINI_API_KEY
    pub api_key: String,
    /// Model identifier
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// Base endpoint for the generateContent call
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,
    /// Outbound call timeout in seconds
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: u64,
}

// Default values
fn default_max_connections() -> u32 {
    20
}

fn default_gemini_model() -> String {
    "gemini-pro".to_string()
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_timeout_secs() -> u64 {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        };

        let cors = CorsConfig {
            allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        };

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL environment variable not set")?,
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_connections),
        };

        let gemini = GeminiConfig {
            api_key: std::env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY environment variable not set")?,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| default_gemini_model()),
            endpoint: std::env::var("GEMINI_ENDPOINT")
                .unwrap_or_else(|_| default_gemini_endpoint()),
            timeout_secs: std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_gemini_timeout_secs),
        };

        Ok(Config {
            app,
            cors,
            database,
            gemini,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because from_env reads process-wide environment state.
    #[test]
    fn test_default_values() {
        std::env::set_var("DATABASE_URL", "postgres://test");
        std::env::remove_var("GEMINI_API_KEY");
        assert!(Config::from_env().is_err());

        std::env::set_var("GEMINI_API_KEY", "test-key");
        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.cors.allowed_origins, "http://localhost:3000");
    }
}
