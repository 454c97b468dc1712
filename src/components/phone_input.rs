//! Phone Input Component
//!
//! Telephone field that reformats its text on every keystroke.

use felixpets_core::phone::format_phone;
use leptos::prelude::*;

/// `<input type="tel">` bound to `value`, masked as the user types
#[component]
pub fn PhoneInput(
    #[prop(into)] name: String,
    #[prop(into)] id: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let formatted = format_phone(&input.value());
        // Write back even when the signal value is unchanged (e.g. a letter typed)
        input.set_value(&formatted);
        value.set(formatted);
    };

    view! {
        <input
            type="tel"
            id=id
            name=name
            inputmode="numeric"
            autocomplete="tel"
            placeholder="(11) 99999-8888"
            prop:value=move || value.get()
            on:input=on_input
        />
    }
}
