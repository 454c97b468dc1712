//! Confirmation Modal Component
//!
//! Accessible dialog summarizing a confirmed appointment. Traps Tab focus
//! while open and closes on backdrop click, close button or Escape.

use std::time::Duration;

use felixpets_core::modal::{trap_tab, ModalEffect, ModalEvent};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_app_context, AppContext};
use crate::store::{store_modal_event, use_ui_store, UiStateStoreFields};

const FOCUSABLE: &str = "a[href], button, textarea, input, select";

/// Delay before focusing inside a freshly opened dialog
const OPEN_FOCUS_DELAY_MS: u64 = 50;

/// Enabled focusable controls inside `container`, in document order
fn focusable_within(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|el| !el.has_attribute("disabled"))
        .collect()
}

fn apply_effect(ctx: AppContext, effect: Option<ModalEffect>) {
    match effect {
        Some(effect @ ModalEffect::FocusSubmit) => {
            ctx.focus_appointment_submit(effect.focus_without_scroll())
        }
        Some(effect @ ModalEffect::StartNewAppointment) => {
            ctx.reset_appointment_form();
            leptos_reveal::scroll_to_id("agendamento");
            ctx.focus_appointment_submit(effect.focus_without_scroll());
        }
        // Opening focus is driven by the open-state effect below
        Some(ModalEffect::FocusFirstControl) | None => {}
    }
}

#[component]
pub fn ConfirmationModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    let send = move |event: ModalEvent| {
        let effect = store_modal_event(&store, event);
        if !store.modal().get_untracked().is_open() {
            ctx.appointment().acknowledge();
        }
        apply_effect(ctx, effect);
    };

    // Focus the first control shortly after opening
    Effect::new(move |_| {
        if store.modal().get().is_open() {
            set_timeout(
                move || {
                    let first = modal_ref
                        .get_untracked()
                        .and_then(|m| focusable_within(&m).into_iter().next());
                    if let Some(el) = first {
                        let _ = el.focus();
                    }
                },
                Duration::from_millis(OPEN_FOCUS_DELAY_MS),
            );
        }
    });

    // Escape and Tab trap while open
    let _ = window_event_listener(ev::keydown, move |ev| {
        if !store.modal().get_untracked().is_open() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => send(ModalEvent::EscapePressed),
            "Tab" => {
                let Some(modal) = modal_ref.get_untracked() else { return };
                let controls = focusable_within(&modal);
                let active = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.active_element());
                let index = active.and_then(|a| {
                    controls
                        .iter()
                        .position(|c| c.unchecked_ref::<web_sys::Element>() == &a)
                });
                if let Some(target) = trap_tab(controls.len(), index, ev.shift_key()) {
                    ev.prevent_default();
                    let _ = controls[target].focus();
                }
            }
            _ => {}
        }
    });

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        let on_self = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if on_self {
            send(ModalEvent::BackdropClicked);
        }
    };

    let is_open = move || store.modal().get().is_open();

    view! {
        <div
            node_ref=modal_ref
            id="confirmation-modal"
            class=move || if is_open() { "modal open" } else { "modal" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="confirmation-title"
            aria-hidden=move || (!is_open()).to_string()
            on:click=on_backdrop
        >
            <div class="modal-content">
                <h2 id="confirmation-title">"Consulta agendada!"</h2>
                <div id="confirmation-message">
                    {move || store.confirmation().get().map(|confirmation| {
                        confirmation.rows().into_iter().map(|(label, value)| view! {
                            <p><strong>{label}":"</strong>" "{value}</p>
                        }).collect_view()
                    })}
                </div>
                <div class="modal-actions">
                    <button
                        id="close-modal"
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| send(ModalEvent::CloseClicked)
                    >
                        "Fechar"
                    </button>
                    <button
                        id="new-appointment-btn"
                        type="button"
                        class="btn btn-primary"
                        on:click=move |_| send(ModalEvent::NewAppointment)
                    >
                        "Novo agendamento"
                    </button>
                </div>
            </div>
        </div>
    }
}
