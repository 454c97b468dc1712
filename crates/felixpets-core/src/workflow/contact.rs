//! Contact Workflow

use std::cell::Cell;

use chrono::Utc;

use super::{persist, Phase};
use crate::error::WorkflowError;
use crate::records::ContactForm;
use crate::storage::KeyValueStore;
use crate::submit::{FormKind, Submitter};

/// Contact message flow; no modal, ends back on `Idle`
pub struct ContactWorkflow<S, B> {
    store: S,
    submitter: B,
    key: String,
    phase: Cell<Phase>,
}

impl<S: KeyValueStore, B: Submitter> ContactWorkflow<S, B> {
    pub fn new(store: S, submitter: B, key: impl Into<String>) -> Self {
        Self {
            store,
            submitter,
            key: key.into(),
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    fn enter(&self, phase: Phase) {
        log::debug!("[CONTACT] {:?} -> {:?}", self.phase.get(), phase);
        self.phase.set(phase);
    }

    pub async fn submit(&self, form: ContactForm) -> Result<(), WorkflowError> {
        self.enter(Phase::Validating);
        if let Err(e) = form.validate() {
            log::info!("[CONTACT] Rejected: {}", e);
            self.enter(Phase::Idle);
            return Err(e.into());
        }

        self.enter(Phase::Submitting);
        let sent = self.submitter.submit(FormKind::Contact).await;
        self.enter(Phase::Idle);
        if let Err(e) = sent {
            log::info!("[CONTACT] Submission failed: {}", e);
            return Err(e.into());
        }

        let record = form.into_record(Utc::now());
        persist(&self.store, &self.key, &record, "CONTACT");
        log::info!("[CONTACT] Message sent");
        Ok(())
    }
}
