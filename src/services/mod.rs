//! Browser Services
//!
//! Capabilities the core workflows need, backed by browser APIs.

mod local_storage;
mod simulated;
mod site_config;

pub use local_storage::BrowserStorage;
pub use simulated::SimulatedSubmitter;
pub use site_config::load_site_config;
