use notes_core::ValidationStrategy;

use crate::errors::ApplicationError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub validation: ValidationStrategy,
}

impl ServerConfig {
    /// Read configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self, ApplicationError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApplicationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ApplicationError::InvalidConfig("PORT".to_string(), e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let validation = match lookup("NOTES_VALIDATION") {
            Some(value) => value.parse::<ValidationStrategy>().map_err(|e| {
                ApplicationError::InvalidConfig("NOTES_VALIDATION".to_string(), e.to_string())
            })?,
            None => ValidationStrategy::default(),
        };

        Ok(Self {
            host,
            port,
            validation,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
