//! Site Header Component
//!
//! Logo, hamburger trigger, collapsible menu and dimming backdrop. The menu
//! state lives in the store; this component renders it and applies focus.

use std::time::Duration;

use felixpets_core::nav::{current_page, is_active_link, FocusRequest, NavEvent};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::ThemeToggle;
use crate::context::use_app_context;
use crate::store::{store_nav_event, use_ui_store, UiStateStoreFields};

/// Menu links as `(href, label)`
const NAV_LINKS: &[(&str, &str)] = &[
    ("index.html", "Início"),
    ("#servicos", "Serviços"),
    ("#agendamento", "Agendar Consulta"),
    ("#contato", "Contato"),
];

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let trigger_ref = NodeRef::<leptos::html::Button>::new();
    let menu_ref = NodeRef::<leptos::html::Nav>::new();
    let resize_timer = StoredValue::new(None::<TimeoutHandle>);

    // Focus moves once the new menu state has been painted
    let apply_focus = move |request: Option<FocusRequest>| {
        let Some(request) = request else { return };
        request_animation_frame(move || match request {
            FocusRequest::FirstLink => {
                let first = menu_ref
                    .get_untracked()
                    .and_then(|menu| menu.query_selector("a").ok().flatten())
                    .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
                if let Some(link) = first {
                    let _ = link.focus();
                }
            }
            FocusRequest::Trigger => {
                if let Some(button) = trigger_ref.get_untracked() {
                    let _ = button.focus();
                }
            }
        });
    };
    let send = move |event: NavEvent| apply_focus(store_nav_event(&store, event));

    let on_trigger_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            send(NavEvent::TriggerActivated);
        }
    };

    // Escape closes the menu unless the confirmation dialog is up
    let _ = window_event_listener(ev::keydown, move |ev| {
        let dialog_open = store.modal().get_untracked().is_open();
        if ev.key() == "Escape" && store.nav().get_untracked().takes_escape(dialog_open) {
            send(NavEvent::EscapePressed);
        }
    });

    // Debounced resize
    let debounce = Duration::from_millis(ctx.config.with_value(|c| c.resize_debounce_ms).into());
    let _ = window_event_listener(ev::resize, move |_| {
        if let Some(handle) = resize_timer.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|w| w.as_f64())
                    .map(|w| w as u32)
                    .unwrap_or(0);
                send(NavEvent::Resized { width });
            },
            debounce,
        )
        .ok();
        resize_timer.set_value(handle);
    });

    let page = current_page(&current_path()).to_string();
    let nav = move || store.nav().get();

    view! {
        <header class="site-header">
            <a href="index.html" class="logo">
                <i class="fas fa-paw" aria-hidden="true"></i>
                " FelixPets"
            </a>

            <button
                node_ref=trigger_ref
                type="button"
                class=move || if nav().is_expanded() { "hamburger-menu open" } else { "hamburger-menu" }
                aria-expanded=move || nav().is_expanded().to_string()
                aria-controls="main-nav"
                aria-label=move || nav().trigger_label()
                on:click=move |_| send(NavEvent::TriggerActivated)
                on:keydown=on_trigger_keydown
            >
                <i class=move || format!("fas {}", nav().trigger_icon()) aria-hidden="true"></i>
            </button>

            <nav
                node_ref=menu_ref
                id="main-nav"
                role="navigation"
                class=move || if nav().is_expanded() { "menu open" } else { "menu" }
                aria-hidden=move || nav().menu_hidden().to_string()
            >
                <ul>
                    {NAV_LINKS.iter().map(|(href, label)| {
                        let active = is_active_link(href, &page);
                        let link = view! {
                            <li>
                                <a
                                    href=*href
                                    class=if active { "active" } else { "" }
                                    on:click=move |_| send(NavEvent::LinkClicked)
                                >
                                    {*label}
                                </a>
                            </li>
                        };
                        // Theme toggle sits right after the appointment link
                        if href.contains("agendamento") {
                            view! { {link} <ThemeToggle /> }.into_any()
                        } else {
                            link.into_any()
                        }
                    }).collect_view()}
                </ul>
            </nav>

            <div
                id="vc-menu-backdrop"
                class=move || if nav().backdrop_active() { "menu-backdrop active" } else { "menu-backdrop" }
                on:click=move |_| send(NavEvent::BackdropClicked)
            ></div>
        </header>
    }
}
