mod fisher;
mod transcription_normalizer;

pub use fisher::{FisherNormalizer, LAUGHTER, NOISE, SILENCE};
pub use transcription_normalizer::TranscriptionNormalizer;
