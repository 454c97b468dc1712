//! Appointment Form Component
//!
//! Collects the appointment request, runs the workflow and hands the
//! confirmation to the modal.

use felixpets_core::notify::ToastKind;
use felixpets_core::records::{AppointmentForm as AppointmentPayload, PET_TYPES, SERVICES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PhoneInput;
use crate::context::use_app_context;
use crate::store::{store_open_confirmation, store_show_toast, use_ui_store};

/// One signal per form field
#[derive(Clone, Copy)]
struct Fields {
    pet_name: RwSignal<String>,
    pet_type: RwSignal<String>,
    owner_name: RwSignal<String>,
    phone: RwSignal<String>,
    email: RwSignal<String>,
    date: RwSignal<String>,
    time: RwSignal<String>,
    service: RwSignal<String>,
}

impl Fields {
    fn new() -> Self {
        Self {
            pet_name: RwSignal::new(String::new()),
            pet_type: RwSignal::new(String::new()),
            owner_name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            time: RwSignal::new(String::new()),
            service: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> AppointmentPayload {
        AppointmentPayload {
            pet_name: self.pet_name.get_untracked(),
            pet_type: self.pet_type.get_untracked(),
            owner_name: self.owner_name.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            date: self.date.get_untracked(),
            time: self.time.get_untracked(),
            service: self.service.get_untracked(),
        }
    }

    fn clear(&self) {
        for field in [
            self.pet_name,
            self.pet_type,
            self.owner_name,
            self.phone,
            self.email,
            self.date,
            self.time,
            self.service,
        ] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn AppointmentForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let fields = Fields::new();
    let (busy, set_busy) = signal(false);

    // "New appointment" from the modal clears the form again
    Effect::new(move |prev: Option<u32>| {
        let current = ctx.appointment_reset();
        if prev.is_some() {
            fields.clear();
        }
        current
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = fields.snapshot();
        let workflow = ctx.appointment();
        set_busy.set(true);

        spawn_local(async move {
            match workflow.submit(payload).await {
                Ok(confirmation) => {
                    store_open_confirmation(&store, confirmation);
                    fields.clear();
                    store_show_toast(&store, "Consulta agendada com sucesso!", ToastKind::Success);
                }
                Err(e) => {
                    store_show_toast(&store, e.user_message(), ToastKind::Error);
                }
            }
            set_busy.set(false);
        });
    };

    let text_input = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    name=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    let select_input = move |id: &'static str, label: &'static str, options: &'static [(&'static str, &'static str)], value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <select
                    id=id
                    name=id
                    prop:value=move || value.get()
                    on:change=move |ev| value.set(event_target_value(&ev))
                >
                    <option value="">"Selecione..."</option>
                    {options.iter().map(|(code, text)| view! {
                        <option value=*code>{*text}</option>
                    }).collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <form id="appointment-form" class="appointment-form" novalidate=true on:submit=on_submit
            aria-busy=move || busy.get().to_string()
        >
            {text_input("pet-name", "Nome do pet", "text", fields.pet_name)}
            {select_input("pet-type", "Tipo de pet", PET_TYPES, fields.pet_type)}
            {text_input("owner-name", "Nome do tutor", "text", fields.owner_name)}
            <div class="form-group">
                <label for="phone">"Telefone"</label>
                <PhoneInput name="phone" id="phone" value=fields.phone />
            </div>
            {text_input("email", "E-mail", "email", fields.email)}
            {text_input("appointment-date", "Data", "date", fields.date)}
            {text_input("appointment-time", "Horário", "time", fields.time)}
            {select_input("service", "Serviço", SERVICES, fields.service)}

            <button
                node_ref=ctx.appointment_submit
                type="submit"
                class="btn btn-primary"
                disabled=move || busy.get()
            >
                {move || if busy.get() { "Enviando..." } else { "Agendar" }}
            </button>
        </form>
    }
}
