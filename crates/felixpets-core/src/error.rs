//! Error Taxonomy
//!
//! Every error here is recoverable; none of them is fatal to the page.

use thiserror::Error;

/// Rejected form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or whitespace-only (carries its label)
    #[error("Por favor preencha o campo obrigatório: {0}.")]
    MissingField(&'static str),
    #[error("E-mail inválido.")]
    InvalidEmail,
}

/// Transient (simulated) backend failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Não foi possível enviar sua solicitação. Tente novamente.")]
pub struct SubmissionError;

/// Local storage failure; logged only, never shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("record encoding failed: {0}")]
    Encode(String),
}

/// Failure of a workflow run, as surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl WorkflowError {
    /// Message for the error notification
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = WorkflowError::from(ValidationError::MissingField("Nome do pet"));
        assert!(err.user_message().contains("Nome do pet"));
    }

    #[test]
    fn test_submission_message() {
        let err = WorkflowError::from(SubmissionError);
        assert_eq!(err.user_message(), SubmissionError.to_string());
    }
}
