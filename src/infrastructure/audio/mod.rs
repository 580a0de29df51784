mod symphonia_decoder;
mod wav_chunk_encoder;

pub use symphonia_decoder::SymphoniaAudioDecoder;
pub use wav_chunk_encoder::WavChunkEncoder;
