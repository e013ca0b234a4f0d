/// Errors from the generation adapter.
///
/// Service failures and parse failures are kept apart so callers can tell
/// "service unavailable" from "the model answered with something unusable".
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The topic was empty or whitespace.
    #[error("Topic must not be empty")]
    EmptyTopic,

    /// The generation service could not be reached or rejected the call.
    #[error("Generation service error: {0}")]
    Service(String),

    /// The model's reply could not be turned into cards.
    #[error("Could not parse generated flashcards: {reason}")]
    Parse {
        /// What was wrong with the reply.
        reason: String,
        /// The reply exactly as received, for server-side diagnostics.
        raw: String,
    },
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Service(format!("request timed out: {err}"))
        } else {
            GenerationError::Service(err.to_string())
        }
    }
}
