//! Shared frontend helpers for the wallet unlock panel.
//!
//! A browser with the Elrond or Dharitri wallet extension installed sees a
//! marker object injected on `window`; the unlock panel checks for those
//! markers to decide whether extension-based login can be offered.

pub mod host;
pub mod services;

pub use host::{DetachedHost, ExtensionMarker, HostEnvironment};
pub use services::extension::{
    detected_wallets, get_is_extension_available, is_extension_available_in,
};
