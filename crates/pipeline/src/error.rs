use medibot_llm::GenerationError;

/// The text-generation service could not produce a reply.
///
/// Always non-fatal: callers show it to the operator and keep going.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    #[error("Assistant unavailable: {0}")]
    Generation(#[from] GenerationError),
}
