//! UI Components
//!
//! Leptos components for the clinic site.

mod appointment_form;
mod confirmation_modal;
mod contact_form;
mod phone_input;
mod site_header;
mod theme_toggle;
mod toast_host;
mod whatsapp_button;

pub use appointment_form::AppointmentForm;
pub use confirmation_modal::ConfirmationModal;
pub use contact_form::ContactForm;
pub use phone_input::PhoneInput;
pub use site_header::SiteHeader;
pub use theme_toggle::ThemeToggle;
pub use toast_host::ToastHost;
pub use whatsapp_button::WhatsAppButton;
