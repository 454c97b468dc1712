//! FelixPets Core
//!
//! Browser-independent behavior of the clinic site:
//! - records: typed form payloads and persisted records
//! - validation / phone: input rules and the phone mask
//! - storage / submit: capabilities injected by the frontend
//! - workflow: appointment and contact submission flows
//! - nav / modal / notify / theme: explicit UI state machines

pub mod config;
pub mod error;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod phone;
pub mod records;
pub mod storage;
pub mod submit;
pub mod theme;
pub mod validation;
pub mod whatsapp;
pub mod workflow;

pub use config::SiteConfig;
pub use error::{PersistenceError, SubmissionError, ValidationError, WorkflowError};
pub use records::{AppointmentForm, AppointmentRecord, ContactForm, ContactRecord};
pub use storage::{KeyValueStore, MemoryStore};
pub use submit::{FormKind, Submitter};
pub use workflow::{AppointmentWorkflow, Confirmation, ContactWorkflow, Phase};
