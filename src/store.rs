//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every piece of
//! transient UI state lives here; components render it and send events.

use std::time::Duration;

use felixpets_core::modal::{ConfirmationModal, ModalEffect, ModalEvent};
use felixpets_core::nav::{FocusRequest, NavEvent, NavMenu};
use felixpets_core::notify::{ToastKind, ToastQueue};
use felixpets_core::theme::Theme;
use felixpets_core::{Confirmation, SiteConfig};
use leptos::prelude::*;
use reactive_stores::Store;

/// Transient UI state, reset on reload
#[derive(Clone, Debug, Store)]
pub struct UiState {
    /// Collapsible navigation menu
    pub nav: NavMenu,
    /// Appointment confirmation dialog
    pub modal: ConfirmationModal,
    /// Summary shown inside the dialog
    pub confirmation: Option<Confirmation>,
    /// Active notifications
    pub toasts: ToastQueue,
    pub theme: Theme,
}

impl UiState {
    pub fn new(config: &SiteConfig, viewport_width: u32, theme: Theme) -> Self {
        Self {
            nav: NavMenu::new(config.menu_breakpoint_px, viewport_width),
            modal: ConfirmationModal::default(),
            confirmation: None,
            toasts: ToastQueue::new(config.toast_duration_ms, config.toast_fade_ms),
            theme,
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a toast with the default duration and arm its fade/remove timers
pub fn store_show_toast(store: &UiStore, message: impl Into<String>, kind: ToastKind) {
    let timers = store.toasts().write().show(message, kind, None);
    let store = *store;
    set_timeout(
        move || store.toasts().write().begin_hide(timers.id),
        Duration::from_millis(timers.hide_after_ms.into()),
    );
    set_timeout(
        move || store.toasts().write().dismiss(timers.id),
        Duration::from_millis(timers.remove_after_ms.into()),
    );
}

/// Dismiss a toast early
pub fn store_dismiss_toast(store: &UiStore, id: u64) {
    store.toasts().write().dismiss(id);
}

/// Feed an event to the menu
pub fn store_nav_event(store: &UiStore, event: NavEvent) -> Option<FocusRequest> {
    store.nav().write().handle(event)
}

/// Feed an event to the confirmation dialog
pub fn store_modal_event(store: &UiStore, event: ModalEvent) -> Option<ModalEffect> {
    store.modal().write().handle(event)
}

/// Open the dialog with a fresh summary
pub fn store_open_confirmation(store: &UiStore, confirmation: Confirmation) {
    store.confirmation().set(Some(confirmation));
    let _ = store_modal_event(store, ModalEvent::Open);
}
