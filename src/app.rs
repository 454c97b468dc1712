//! FelixPets App
//!
//! Single-page clinic site: header, hero, services, appointment and contact
//! sections, plus the confirmation dialog, toasts and WhatsApp button.

use felixpets_core::records::SERVICES;
use felixpets_core::theme::load_theme;
use leptos::prelude::*;
use leptos_reveal::{use_scroll_affordances, RevealOptions};
use reactive_stores::Store;

use crate::components::{
    AppointmentForm, ConfirmationModal, ContactForm, SiteHeader, ToastHost, WhatsAppButton,
};
use crate::context::AppContext;
use crate::services::load_site_config;
use crate::store::{UiState, UiStateStoreFields};

fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w as u32)
        .unwrap_or(0)
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    let ctx = AppContext::new(config.clone());
    let theme = load_theme(&ctx.storage(), &config.theme_key);
    let store = Store::new(UiState::new(&config, viewport_width(), theme));
    log::info!("[APP] Started with {} theme", theme.as_str());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Body class follows the theme
    Effect::new(move |_| {
        let dark = store.theme().get().is_dark();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.class_list().toggle_with_force("theme-dark", dark);
        }
    });

    use_scroll_affordances(RevealOptions {
        threshold: config.reveal_threshold,
        ..RevealOptions::default()
    });

    view! {
        <SiteHeader />

        <main>
            <section id="inicio" class="hero animate-on-scroll">
                <h1>"FelixPets"</h1>
                <p>"Cuidado veterinário com carinho para quem você ama."</p>
                <a href="#agendamento" class="btn btn-primary">"Agendar Consulta"</a>
            </section>

            <section id="servicos" class="services">
                <h2 class="animate-on-scroll">"Nossos Serviços"</h2>
                <ul class="services-grid">
                    {SERVICES.iter().map(|(code, label)| view! {
                        <li class="service-card animate-on-scroll" data-service=*code>{*label}</li>
                    }).collect_view()}
                </ul>
            </section>

            <section id="agendamento" class="appointment animate-on-scroll">
                <h2>"Agende uma Consulta"</h2>
                <AppointmentForm />
            </section>

            <section id="contato" class="contact animate-on-scroll">
                <h2>"Fale Conosco"</h2>
                <ContactForm />
            </section>
        </main>

        <footer class="site-footer">
            <p>"© FelixPets - Clínica Veterinária"</p>
        </footer>

        <ConfirmationModal />
        <ToastHost />
        <WhatsAppButton />
    }
}
