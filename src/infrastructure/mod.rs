pub mod composition;
pub mod config;
pub mod email;
pub mod initialization;
pub mod memory_repository;

pub use composition::{Application, ServiceBindings};
pub use config::{AppConfig, AppConfigDto, ConfigError, Environment};
