//! Submission Capability
//!
//! There is no backend: the browser build plugs in a simulated submitter
//! (delay + random failure) while tests script each outcome.

use async_trait::async_trait;

use crate::error::SubmissionError;

/// Which form is being sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Appointment,
    Contact,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Appointment => "appointment",
            FormKind::Contact => "contact",
        }
    }
}

/// Sends a validated form somewhere; resolves exactly once
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, kind: FormKind) -> Result<(), SubmissionError>;
}

#[async_trait(?Send)]
impl<T: Submitter + ?Sized> Submitter for std::rc::Rc<T> {
    async fn submit(&self, kind: FormKind) -> Result<(), SubmissionError> {
        (**self).submit(kind).await
    }
}

/// Outcome of a simulated submission given a uniform roll in `[0, 1)`
pub fn simulated_outcome(roll: f64, failure_rate: f64) -> Result<(), SubmissionError> {
    if roll < failure_rate {
        Err(SubmissionError)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_outcome_threshold() {
        assert_eq!(simulated_outcome(0.05, 0.1), Err(SubmissionError));
        assert_eq!(simulated_outcome(0.1, 0.1), Ok(()));
        assert_eq!(simulated_outcome(0.99, 0.1), Ok(()));
        assert_eq!(simulated_outcome(0.0, 0.0), Ok(()));
        assert_eq!(simulated_outcome(0.999, 1.0), Err(SubmissionError));
    }
}
