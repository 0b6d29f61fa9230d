//! Host-environment abstraction over the ambient browser context.

/// Marker properties that wallet browser-extensions inject on the host
/// environment to advertise their presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionMarker {
    /// Legacy marker injected by the Elrond wallet extension.
    ElrondWallet,
    /// Marker injected by the Dharitri wallet extension.
    DharitriWallet,
}

impl ExtensionMarker {
    /// Every marker the unlock panel knows how to detect.
    pub const ALL: [Self; 2] = [Self::ElrondWallet, Self::DharitriWallet];

    /// The property name the extension sets on the global window object.
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::ElrondWallet => "elrondWallet",
            Self::DharitriWallet => "dharitriWallet",
        }
    }
}

/// A browser-like execution context that extensions may have injected
/// markers into.
///
/// The ambient window is externally owned; implementations only read from
/// it and must never panic when it is missing or incomplete.
pub trait HostEnvironment {
    /// Whether `marker` is present on the host with a truthy value.
    ///
    /// `null` and `undefined` count as absent.
    fn has_injected(&self, marker: ExtensionMarker) -> bool;
}

/// Stand-in host for contexts with no browser window at all (server-side
/// rendering, native test runs). Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHost;

impl HostEnvironment for DetachedHost {
    fn has_injected(&self, _marker: ExtensionMarker) -> bool {
        false
    }
}
