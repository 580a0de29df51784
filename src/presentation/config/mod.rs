mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ServerSettings, Settings, SettingsError, StorageSettings, SttProviderSetting, SttSettings,
    TranscriptionSettings,
};
