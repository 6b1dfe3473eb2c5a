/// Everything that can go wrong during an equity evaluation.
///
/// Every variant is a precondition violation or an unrecoverable execution
/// fault. Nothing here is transient; the engine never retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad player count, hole-count mismatch, malformed or duplicate card,
    /// or an oversized board. Surfaced to the caller immediately.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A draw was requested that exceeds the live deck. Cannot occur under
    /// valid inputs, checked defensively anyway.
    #[error("insufficient cards: need {need}, have {have}")]
    InsufficientCards { need: usize, have: usize },

    /// A parallel batch failed. Fatal to the whole evaluation, since
    /// partial counts would produce a plausible-looking but wrong result.
    #[error("batch failure: {reason}")]
    BatchFailure { reason: String },
}

impl Error {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
