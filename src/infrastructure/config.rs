use serde::Deserialize;
use std::fmt;
use thiserror::Error;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ConfigError: Unknown environment '{0}', expected development or production")]
    UnknownEnvironment(String),

    #[error("ConfigError: Invalid configuration document: {0}")]
    InvalidDocument(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl TryFrom<&str> for Environment {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Raw, unvalidated configuration as it arrives from a document.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfigDto {
    #[serde(default)]
    pub environment: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    environment: Environment,
}

impl AppConfig {
    pub fn new(dto: AppConfigDto) -> Result<Self, ConfigError> {
        let environment = match dto.environment {
            Some(raw) => Environment::try_from(raw)?,
            None => Environment::default(),
        };
        Ok(Self { environment })
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let dto: AppConfigDto = serde_json::from_str(document)
            .map_err(|err| ConfigError::InvalidDocument(err.to_string()))?;
        Self::new(dto)
    }

    /// Reads [`ENVIRONMENT_VAR`]; unset means development.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(ENVIRONMENT_VAR).ok())
    }

    fn from_env_value(environment: Option<String>) -> Result<Self, ConfigError> {
        Self::new(AppConfigDto { environment })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}
