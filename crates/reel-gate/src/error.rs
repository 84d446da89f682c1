/// Errors raised while running the gate, as opposed to verdicts it reaches.
///
/// A payload that fails validation is not an error; it comes back as
/// [`Verdict::Reject`](crate::Verdict::Reject) and the caller answers 400.
/// A `GateError` means the gate could not decide at all, and the caller
/// answers 500.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// A stage could not reach a decision.
    ///
    /// The built-in stages always decide. This variant is the escape hatch
    /// for custom stages added through
    /// [`ValidationGate::add_stage`](crate::ValidationGate::add_stage) that
    /// depend on something that can fail.
    #[error("stage '{stage}' could not decide: {message}")]
    StageError { stage: String, message: String },

    /// The gate configuration is inconsistent, e.g. `min_year > max_year`.
    #[error("invalid gate configuration: {0}")]
    Config(String),
}

impl GateError {
    /// Shorthand for a custom stage reporting that it could not decide.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StageError {
            stage: stage.into(),
            message: message.into(),
        }
    }
}
