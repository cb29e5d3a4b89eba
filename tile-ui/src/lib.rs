pub mod app;
pub mod config;
pub mod logging;
pub mod session;
pub mod utils;
pub mod wizard;

pub use config::{AppConfig, ConfigError};
pub use session::{SessionError, WizardSession, WizardStep};
pub use wizard::Wizard;
