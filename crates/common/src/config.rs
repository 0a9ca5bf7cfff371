//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Site metadata is not
//! secret, so every field carries a sensible default; the struct is
//! constructed once at startup and injected into consuming components.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site metadata
    pub site_title: String,
    pub site_description: String,
    pub site_url: String,
    pub author: String,
    pub contact_email: String,

    /// Social links
    pub social_github: String,
    pub social_linkedin: String,

    /// Directory holding the static project/skill catalogs
    pub data_dir: String,

    /// Runtime configuration
    pub log_level: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            site_title: env::var("SITE_TITLE").unwrap_or_else(|_| "Folio | Portfolio".to_string()),
            site_description: env::var("SITE_DESCRIPTION")
                .unwrap_or_else(|_| "Personal portfolio and project showcase".to_string()),
            site_url: env::var("SITE_URL").unwrap_or_else(|_| "https://folio.dev".to_string()),
            author: env::var("SITE_AUTHOR").unwrap_or_else(|_| "Folio".to_string()),
            contact_email: env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "hello@folio.dev".to_string()),

            social_github: env::var("SOCIAL_GITHUB")
                .unwrap_or_else(|_| "https://github.com/folio-dev".to_string()),
            social_linkedin: env::var("SOCIAL_LINKEDIN")
                .unwrap_or_else(|_| "https://www.linkedin.com/company/folio-dev".to_string()),

            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
