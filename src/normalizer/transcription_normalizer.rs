/// Trait for cleaning raw corpus transcripts into the label alphabet
pub trait TranscriptionNormalizer: Send + Sync {
    /// Normalize one lowercased transcript
    fn normalize(&self, raw_transcript: &str) -> String;

    /// Get the name of this normalizer for logging
    fn name(&self) -> &'static str;
}
