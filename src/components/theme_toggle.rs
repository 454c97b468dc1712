//! Theme Toggle Component
//!
//! Menu item that flips between light and dark mode.

use felixpets_core::notify::ToastKind;
use felixpets_core::theme::toggle_theme;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_show_toast, use_ui_store, UiStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();

    let on_click = move |_| {
        let key = ctx.config.with_value(|c| c.theme_key.clone());
        let next = toggle_theme(&ctx.storage(), &key, store.theme().get_untracked());
        store.theme().set(next);
        store_show_toast(&store, next.toggle_message(), ToastKind::Info);
    };

    view! {
        <li class="theme-toggle-item">
            <button
                type="button"
                class="theme-toggle"
                aria-label="Alternar tema"
                title="Alternar tema"
                on:click=on_click
            >
                <i class=move || format!("fas {}", store.theme().get().icon()) aria-hidden="true"></i>
            </button>
        </li>
    }
}
