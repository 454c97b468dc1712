//! Contact Form Component

use felixpets_core::notify::ToastKind;
use felixpets_core::records::ContactForm as ContactPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PhoneInput;
use crate::context::use_app_context;
use crate::store::{store_show_toast, use_ui_store};

/// Contact form with optional subject
#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = ContactPayload {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            subject: Some(subject.get_untracked()),
            message: message.get_untracked(),
        };
        let workflow = ctx.contact();
        set_busy.set(true);

        spawn_local(async move {
            match workflow.submit(payload).await {
                Ok(()) => {
                    for field in [name, email, phone, subject, message] {
                        field.set(String::new());
                    }
                    store_show_toast(
                        &store,
                        "Mensagem enviada com sucesso! Em breve entraremos em contato.",
                        ToastKind::Success,
                    );
                }
                Err(e) => store_show_toast(&store, e.user_message(), ToastKind::Error),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit
            aria-busy=move || busy.get().to_string()
        >
            <div class="form-group">
                <label for="nomesobrenome">"Nome e sobrenome"</label>
                <input
                    type="text"
                    id="nomesobrenome"
                    name="nomesobrenome"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="contact-email">"E-mail"</label>
                <input
                    type="email"
                    id="contact-email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="telefone">"Telefone"</label>
                <PhoneInput name="telefone" id="telefone" value=phone />
            </div>
            <div class="form-group">
                <label for="assunto">"Assunto (opcional)"</label>
                <input
                    type="text"
                    id="assunto"
                    name="assunto"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="mensagem">"Mensagem"</label>
                <textarea
                    id="mensagem"
                    name="mensagem"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() { "Enviando..." } else { "Enviar mensagem" }}
            </button>
        </form>
    }
}
