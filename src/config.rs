use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage_path: String,
    pub default_campus: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            storage_path: env::var("STORAGE_PATH")
                .unwrap_or_else(|_| "leave-planner.json".to_string()),
            default_campus: env::var("DEFAULT_CAMPUS")
                .unwrap_or_else(|_| "Melbourne".to_string()),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
