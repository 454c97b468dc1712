//! Simulated Submission
//!
//! Stands in for a backend: waits a fixed delay, then fails at random with
//! the configured probability.

use async_trait::async_trait;
use felixpets_core::submit::simulated_outcome;
use felixpets_core::{FormKind, SubmissionError, Submitter};
use gloo_timers::future::TimeoutFuture;

pub struct SimulatedSubmitter {
    delay_ms: u32,
    failure_rate: f64,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32, failure_rate: f64) -> Self {
        Self {
            delay_ms,
            failure_rate,
        }
    }
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, kind: FormKind) -> Result<(), SubmissionError> {
        log::debug!("[SUBMIT] Sending {} form ({} ms)", kind.as_str(), self.delay_ms);
        TimeoutFuture::new(self.delay_ms).await;
        simulated_outcome(js_sys::Math::random(), self.failure_rate)
    }
}
