//! Appointment Workflow

use std::cell::Cell;

use chrono::Utc;

use super::{persist, Phase};
use crate::error::WorkflowError;
use crate::records::{localized_date, service_label, AppointmentForm};
use crate::storage::KeyValueStore;
use crate::submit::{FormKind, Submitter};

/// Human-readable summary shown in the confirmation modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub pet_name: String,
    pub owner_name: String,
    /// Date as `DD/MM/YYYY`
    pub date: String,
    pub time: String,
    /// Service label, or the raw code when unmapped
    pub service: String,
}

impl Confirmation {
    pub fn from_form(form: &AppointmentForm) -> Self {
        Self {
            pet_name: form.pet_name.trim().to_string(),
            owner_name: form.owner_name.trim().to_string(),
            date: localized_date(&form.date),
            time: form.time.trim().to_string(),
            service: service_label(form.service.trim()).to_string(),
        }
    }

    /// `(label, value)` rows in display order
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Pet", self.pet_name.clone()),
            ("Tutor", self.owner_name.clone()),
            ("Data", format!("{} às {}", self.date, self.time)),
            ("Serviço", self.service.clone()),
        ]
    }
}

/// Appointment request flow
pub struct AppointmentWorkflow<S, B> {
    store: S,
    submitter: B,
    key: String,
    phase: Cell<Phase>,
}

impl<S: KeyValueStore, B: Submitter> AppointmentWorkflow<S, B> {
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
        log::debug!("[APPOINTMENT] {:?} -> {:?}", self.phase.get(), phase);
        self.phase.set(phase);
    }

    /// Run one submission
    ///
    /// Nothing is submitted or stored unless validation passes, and nothing
    /// is stored unless the submitter succeeds.
    pub async fn submit(&self, form: AppointmentForm) -> Result<Confirmation, WorkflowError> {
        self.enter(Phase::Validating);
        if let Err(e) = form.validate() {
            log::info!("[APPOINTMENT] Rejected: {}", e);
            self.enter(Phase::Idle);
            return Err(e.into());
        }

        self.enter(Phase::Submitting);
        if let Err(e) = self.submitter.submit(FormKind::Appointment).await {
            log::info!("[APPOINTMENT] Submission failed: {}", e);
            self.enter(Phase::Idle);
            return Err(e.into());
        }

        let confirmation = Confirmation::from_form(&form);
        let record = form.into_record(Utc::now());
        persist(&self.store, &self.key, &record, "APPOINTMENT");

        log::info!(
            "[APPOINTMENT] Confirmed {} for {}",
            confirmation.service,
            confirmation.pet_name
        );
        self.enter(Phase::Confirmed);
        Ok(confirmation)
    }

    /// Confirmation dismissed
    pub fn acknowledge(&self) {
        if self.phase.get() == Phase::Confirmed {
            self.enter(Phase::Idle);
        }
    }
}
