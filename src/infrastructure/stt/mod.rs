mod client_factory;
mod google_speech_client;
mod mock_client;

pub use client_factory::{ClientFactoryError, TranscriptionClientFactory};
pub use google_speech_client::GoogleSpeechClient;
pub use mock_client::MockTranscriptionClient;
