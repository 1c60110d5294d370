use crate::core::error_bus::BusError;
use crate::infrastructure::composition::Application;
use crate::infrastructure::config::AppConfig;
use once_cell::sync::OnceCell;

const COMPONENT: &str = "Application";

static APPLICATION: OnceCell<Application> = OnceCell::new();

/// Builds the process-wide [`Application`]. Only the first call succeeds.
pub fn init(config: &AppConfig) -> Result<&'static Application, BusError> {
    if APPLICATION.get().is_some() {
        return Err(BusError::AlreadyInitialized(COMPONENT.to_string()));
    }

    let application = Application::build(config)?;
    APPLICATION
        .set(application)
        .map_err(|_| BusError::AlreadyInitialized(COMPONENT.to_string()))?;

    app()
}

pub fn app() -> Result<&'static Application, BusError> {
    APPLICATION
        .get()
        .ok_or_else(|| BusError::NotInitialized(COMPONENT.to_string()))
}
