//! Application Context
//!
//! Workflows, storage and shared element refs provided via Leptos Context API.

use std::rc::Rc;

use felixpets_core::{AppointmentWorkflow, ContactWorkflow, SiteConfig};
use leptos::prelude::*;

use crate::services::{BrowserStorage, SimulatedSubmitter};

pub type AppointmentFlow = AppointmentWorkflow<Rc<BrowserStorage>, Rc<SimulatedSubmitter>>;
pub type ContactFlow = ContactWorkflow<Rc<BrowserStorage>, Rc<SimulatedSubmitter>>;

/// App-wide services and refs provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<SiteConfig>,
    storage: StoredValue<Rc<BrowserStorage>, LocalStorage>,
    appointment: StoredValue<Rc<AppointmentFlow>, LocalStorage>,
    contact: StoredValue<Rc<ContactFlow>, LocalStorage>,
    /// Submit button of the appointment form (focus target on modal close)
    pub appointment_submit: NodeRef<leptos::html::Button>,
    /// Bumped to clear the appointment form
    appointment_reset: RwSignal<u32>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        let storage = Rc::new(BrowserStorage::new());
        let submitter = Rc::new(SimulatedSubmitter::new(
            config.submit_delay_ms,
            config.failure_rate,
        ));
        let appointment = AppointmentWorkflow::new(
            storage.clone(),
            submitter.clone(),
            config.appointments_key.clone(),
        );
        let contact = ContactWorkflow::new(storage.clone(), submitter, config.contacts_key.clone());

        Self {
            config: StoredValue::new(config),
            storage: StoredValue::new_local(storage),
            appointment: StoredValue::new_local(Rc::new(appointment)),
            contact: StoredValue::new_local(Rc::new(contact)),
            appointment_submit: NodeRef::new(),
            appointment_reset: RwSignal::new(0),
        }
    }

    pub fn storage(&self) -> Rc<BrowserStorage> {
        self.storage.get_value()
    }

    pub fn appointment(&self) -> Rc<AppointmentFlow> {
        self.appointment.get_value()
    }

    pub fn contact(&self) -> Rc<ContactFlow> {
        self.contact.get_value()
    }

    /// Clear the appointment form
    pub fn reset_appointment_form(&self) {
        self.appointment_reset.update(|v| *v += 1);
    }

    /// Tracked read of the reset counter
    pub fn appointment_reset(&self) -> u32 {
        self.appointment_reset.get()
    }

    /// Move focus back to the appointment form's submit button
    ///
    /// With `prevent_scroll` the viewport stays put, so a running smooth
    /// scroll is not cut short.
    pub fn focus_appointment_submit(&self, prevent_scroll: bool) {
        let Some(button) = self.appointment_submit.get_untracked() else {
            return;
        };
        if prevent_scroll {
            let options = web_sys::FocusOptions::new();
            options.set_prevent_scroll(true);
            let _ = button.focus_with_options(&options);
        } else {
            let _ = button.focus();
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
