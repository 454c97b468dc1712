//! Submission Workflows
//!
//! validate → submit → persist → present, for each site form.
//! Each run walks `Idle → Validating → (rejected | Submitting → ...)` and
//! always lands back on an idle-or-confirmed phase with the form usable.

mod appointment;
mod contact;


pub use appointment::{AppointmentWorkflow, Confirmation};
pub use contact::ContactWorkflow;

use serde::Serialize;

use crate::storage::{append_record, KeyValueStore};

/// Workflow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    /// Appointment accepted and confirmation shown
    Confirmed,
}

/// Best-effort append; failures are logged and swallowed
fn persist<T: Serialize>(store: &impl KeyValueStore, key: &str, record: &T, tag: &str) {
    match append_record(store, key, record) {
        Ok(count) => log::debug!("[{}] Stored record #{} under '{}'", tag, count, key),
        Err(e) => log::warn!("[{}] Failed to store record: {}", tag, e),
    }
}
