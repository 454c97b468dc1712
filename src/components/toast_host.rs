//! Toast Host Component
//!
//! Fixed bottom-right region where notifications stack.

use felixpets_core::notify::ToastKind;
use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_ui_store, UiStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div id="vc-toast-container" class="vc-toast-container" aria-live="polite">
            {move || {
                store.toasts().with(|queue| {
                    queue.toasts().iter().map(|toast| {
                        let id = toast.id;
                        let role = if toast.kind == ToastKind::Error {
                            "alert"
                        } else {
                            "status"
                        };
                        view! {
                            <div
                                class=toast.class()
                                role=role
                                title="Fechar"
                                on:click=move |_| store_dismiss_toast(&store, id)
                            >
                                {toast.message.clone()}
                            </div>
                        }
                    }).collect_view()
                })
            }}
        </div>
    }
}
