mod wav_chunk_encoder_test;
