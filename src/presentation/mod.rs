pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings, SettingsError, SttProviderSetting};
pub use router::create_router;
pub use state::AppState;
