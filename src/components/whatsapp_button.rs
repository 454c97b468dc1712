//! Floating WhatsApp Button

use felixpets_core::whatsapp::whatsapp_link;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let ctx = use_app_context();
    let href = ctx
        .config
        .with_value(|c| whatsapp_link(&c.whatsapp_phone, &c.whatsapp_message));

    view! {
        <a
            id="vc-wa-button"
            class="vc-wa-button"
            href=href
            target="_blank"
            rel="noopener noreferrer"
            title="Fale conosco pelo WhatsApp"
        >
            <span class="vc-wa-badge" aria-hidden="true"></span>
            <i class="fab fa-whatsapp" aria-hidden="true"></i>
            <span class="vc-wa-label">"WhatsApp"</span>
        </a>
    }
}
