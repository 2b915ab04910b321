use copyforge_llm::LlmError;

/// Failure of a single generation step.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// The model answered with something that is not a valid draft.
    #[error("Invalid draft from language model: {0}")]
    InvalidDraft(String),
}
