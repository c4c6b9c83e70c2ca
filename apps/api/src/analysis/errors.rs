use thiserror::Error;

/// Failures raised by the matching engine itself.
///
/// `InvalidInput` is the caller's problem and is surfaced as-is.
/// `Computation` means a defect in the engine; it never happens for well-formed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation error: {0}")]
    Computation(String),
}
