use std::str::FromStr;

use crate::domain::LanguageTag;

use super::environment::Environment;

/// Runtime configuration, read from the environment with defaults that
/// mirror the reference deployment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub stt: SttSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub language: LanguageTag,
    pub chunk_duration_ms: u64,
    pub max_concurrency: usize,
    pub recognition_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SttSettings {
    pub provider: SttProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SttProviderSetting {
    Google,
    Mock,
}

impl FromStr for SttProviderSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "mock" => Ok(Self::Mock),
            other => Err(format!(
                "Invalid STT provider: {}. Expected: google or mock",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub staging_dir: String,
    pub max_upload_mb: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let environment = Environment::try_from(
            std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
        )
        .map_err(|message| SettingsError::Invalid {
            variable: "APP_ENV",
            message,
        })?;

        let language = LanguageTag::new(
            std::env::var("LANGUAGE_TAG").unwrap_or_else(|_| "bn-BD".to_string()),
        )
        .map_err(|e| SettingsError::Invalid {
            variable: "LANGUAGE_TAG",
            message: e.to_string(),
        })?;

        let chunk_duration_ms = parse_env("CHUNK_DURATION_MS", 60_000u64)?;
        if chunk_duration_ms == 0 {
            return Err(SettingsError::Invalid {
                variable: "CHUNK_DURATION_MS",
                message: "must be greater than zero".to_string(),
            });
        }

        let max_concurrency = parse_env("MAX_CONCURRENCY", 4usize)?;
        if max_concurrency == 0 {
            return Err(SettingsError::Invalid {
                variable: "MAX_CONCURRENCY",
                message: "must be greater than zero".to_string(),
            });
        }

        let provider = match std::env::var("STT_PROVIDER") {
            Ok(raw) => raw
                .parse()
                .map_err(|message| SettingsError::Invalid {
                    variable: "STT_PROVIDER",
                    message,
                })?,
            Err(_) => SttProviderSetting::Google,
        };

        Ok(Self {
            environment,
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env("SERVER_PORT", 3000u16)?,
            },
            transcription: TranscriptionSettings {
                language,
                chunk_duration_ms,
                max_concurrency,
                recognition_timeout_secs: parse_env("RECOGNITION_TIMEOUT_SECS", 30u64)?,
            },
            stt: SttSettings {
                provider,
                api_key: std::env::var("GOOGLE_SPEECH_API_KEY").ok(),
                base_url: std::env::var("GOOGLE_SPEECH_BASE_URL").ok(),
            },
            storage: StorageSettings {
                staging_dir: std::env::var("STAGING_DIR")
                    .unwrap_or_else(|_| "uploads/audio".to_string()),
                max_upload_mb: parse_env("MAX_UPLOAD_MB", 50usize)?,
            },
        })
    }
}

fn parse_env<T: FromStr>(variable: &'static str, default: T) -> Result<T, SettingsError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(variable) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| SettingsError::Invalid {
            variable,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {variable}: {message}")]
    Invalid {
        variable: &'static str,
        message: String,
    },
}
