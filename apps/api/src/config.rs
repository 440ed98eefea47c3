use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare checkout starts without a `.env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote AI/ATS/interview service.
    pub backend_url: String,
    /// Directory holding the persisted résumé record.
    pub data_dir: PathBuf,
    /// Extra font directory loaded on top of the system fonts.
    pub fonts_dir: Option<PathBuf>,
    /// Directory relative image paths (logos) resolve against.
    pub resources_dir: Option<PathBuf>,
    /// Browser origins allowed to call the API cross-origin.
    pub allowed_origins: Vec<String>,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// The local editor UI.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_url: env_or("BACKEND_URL", "http://localhost:5000"),
            data_dir: PathBuf::from(env_or("DATA_DIR", ".vitae")),
            fonts_dir: optional_env("FONTS_DIR").map(PathBuf::from),
            resources_dir: optional_env("RESOURCES_DIR").map(PathBuf::from),
            allowed_origins: split_origins(&env_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)),
            host: env_or("HOST", "127.0.0.1"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Comma-separated origins, trimmed, without trailing slashes.
fn split_origins(list: &str) -> Vec<String> {
    list.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_ignores_blank() {
        std::env::set_var("VITAE_TEST_BLANK_DIR", "  ");
        assert_eq!(optional_env("VITAE_TEST_BLANK_DIR"), None);
        std::env::set_var("VITAE_TEST_FONT_DIR", "/usr/share/fonts");
        assert_eq!(
            optional_env("VITAE_TEST_FONT_DIR").as_deref(),
            Some("/usr/share/fonts")
        );
    }

    #[test]
    fn test_split_origins() {
        assert_eq!(
            split_origins(" http://localhost:3000/ ,, https://cv.example.com"),
            vec!["http://localhost:3000", "https://cv.example.com"]
        );
        assert!(split_origins("").is_empty());
    }

    #[test]
    fn test_env_or_default() {
        assert_eq!(env_or("VITAE_TEST_UNSET_KEY", "fallback"), "fallback");
    }
}
