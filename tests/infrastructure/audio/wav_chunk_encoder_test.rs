use std::io::Cursor;

use shruti::application::ports::{ChunkEncoder, ChunkEncoderError};
use shruti::domain::AudioChunk;
use shruti::infrastructure::audio::WavChunkEncoder;

fn chunk_of(samples: Vec<f32>, sample_rate: u32) -> AudioChunk {
    let duration_ms = samples.len() as u64 * 1000 / sample_rate.max(1) as u64;
    AudioChunk::new(1, samples, sample_rate, 0, duration_ms)
}

#[test]
fn given_chunk_when_encoding_then_output_is_mono_16bit_wav_at_chunk_rate() {
    let chunk = chunk_of(vec![0.0; 160], 16_000);
    let encoder = WavChunkEncoder;

    let buffer = encoder.encode(&chunk).unwrap();

    let reader = hound::WavReader::new(Cursor::new(buffer)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.len(), 160);
}

#[test]
fn given_full_scale_samples_when_encoding_then_values_round_trip() {
    let chunk = chunk_of(vec![0.0, 0.5, -0.5, 1.0, -1.0], 16_000);
    let encoder = WavChunkEncoder;

    let buffer = encoder.encode(&chunk).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(buffer)).unwrap();
    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded[0], 0);
    assert!((decoded[1] - i16::MAX / 2).abs() <= 1);
    assert_eq!(decoded[3], i16::MAX);
}

#[test]
fn given_out_of_range_samples_when_encoding_then_values_are_clamped() {
    let chunk = chunk_of(vec![2.0, -3.5], 16_000);
    let encoder = WavChunkEncoder;

    let buffer = encoder.encode(&chunk).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(buffer)).unwrap();
    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded[0], i16::MAX);
    assert_eq!(decoded[1], -i16::MAX);
}

#[test]
fn given_empty_chunk_when_encoding_then_unsupported_layout_error() {
    let chunk = chunk_of(Vec::new(), 16_000);
    let encoder = WavChunkEncoder;

    let result = encoder.encode(&chunk);

    assert!(matches!(
        result,
        Err(ChunkEncoderError::UnsupportedLayout(_))
    ));
}

#[test]
fn given_zero_sample_rate_when_encoding_then_unsupported_layout_error() {
    let chunk = chunk_of(vec![0.0; 16], 0);
    let encoder = WavChunkEncoder;

    let result = encoder.encode(&chunk);

    assert!(matches!(
        result,
        Err(ChunkEncoderError::UnsupportedLayout(_))
    ));
}
