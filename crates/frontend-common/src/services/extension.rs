//! Wallet browser-extension detection.

#[cfg(not(target_arch = "wasm32"))]
use crate::host::DetachedHost;
use crate::host::{ExtensionMarker, HostEnvironment};

/// Markers currently present on `host`, in declaration order.
///
/// The unlock panel only needs the boolean answer today, but downstream
/// flows that must distinguish which wallet injected itself can start here.
#[must_use]
pub fn detected_wallets(host: &dyn HostEnvironment) -> Vec<ExtensionMarker> {
    ExtensionMarker::ALL
        .into_iter()
        .filter(|marker| host.has_injected(*marker))
        .collect()
}

/// Whether any known wallet extension has injected its marker into `host`.
#[must_use]
pub fn is_extension_available_in(host: &dyn HostEnvironment) -> bool {
    ExtensionMarker::ALL
        .into_iter()
        .any(|marker| host.has_injected(marker))
}

/// Whether a wallet browser-extension is available in the ambient
/// environment this code is running in.
///
/// Recomputed on every call, so an extension installed mid-session is
/// picked up by the next invocation. Outside a browser there is no window
/// to inspect and the answer is always `false`.
#[must_use]
pub fn get_is_extension_available() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        is_extension_available_in(&BrowserHost::ambient())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        is_extension_available_in(&DetachedHost)
    }
}

/// [`HostEnvironment`] backed by the real browser window.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct BrowserHost {
    window: Option<web_sys::Window>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserHost {
    /// Capture the ambient window, if the code is running in one.
    #[must_use]
    pub fn ambient() -> Self {
        Self {
            window: web_sys::window(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl HostEnvironment for BrowserHost {
    fn has_injected(&self, marker: ExtensionMarker) -> bool {
        use wasm_bindgen::JsValue;

        let Some(window) = &self.window else {
            return false;
        };
        js_sys::Reflect::get(window, &JsValue::from_str(marker.property_name()))
            .map(|value| value.is_truthy())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        Host {}

        impl HostEnvironment for Host {
            fn has_injected(&self, marker: ExtensionMarker) -> bool;
        }
    }

    fn host_with(present: &'static [ExtensionMarker]) -> MockHost {
        let mut host = MockHost::new();
        host.expect_has_injected()
            .returning(move |marker| present.contains(&marker));
        host
    }

    #[test]
    fn test_no_markers_means_unavailable() {
        let host = host_with(&[]);
        assert!(!is_extension_available_in(&host));
        assert!(detected_wallets(&host).is_empty());
    }

    #[test]
    fn test_elrond_marker_alone_is_enough() {
        let host = host_with(&[ExtensionMarker::ElrondWallet]);
        assert!(is_extension_available_in(&host));
        assert_eq!(detected_wallets(&host), vec![ExtensionMarker::ElrondWallet]);
    }

    #[test]
    fn test_dharitri_marker_alone_is_enough() {
        let host = host_with(&[ExtensionMarker::DharitriWallet]);
        assert!(is_extension_available_in(&host));
        assert_eq!(
            detected_wallets(&host),
            vec![ExtensionMarker::DharitriWallet]
        );
    }

    #[test]
    fn test_both_markers_reported_in_declaration_order() {
        let host = host_with(&ExtensionMarker::ALL);
        assert!(is_extension_available_in(&host));
        assert_eq!(detected_wallets(&host), ExtensionMarker::ALL.to_vec());
    }

    #[test]
    fn test_repeated_calls_agree() {
        let host = host_with(&[ExtensionMarker::DharitriWallet]);
        assert_eq!(
            is_extension_available_in(&host),
            is_extension_available_in(&host)
        );
    }

    #[test]
    fn test_ambient_check_without_a_browser() {
        // Native test runs have no window, matching the detached case.
        assert!(!get_is_extension_available());
    }
}
