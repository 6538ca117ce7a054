//! USB link state shared between the device stack and the serial channel.

use portable_atomic::{AtomicBool, Ordering};

/// Whether the host currently has the device configured and awake.
///
/// The USB stack reports configuration and suspend as separate events, and a
/// resume is not followed by a fresh configuration, so the two are tracked
/// apart and combined on read.
///
/// # Example
///
/// ```
/// use prom_core::LinkState;
///
/// let link = LinkState::new();
/// link.set_configured(true);
/// link.set_suspended(true);
/// assert!(!link.is_connected());
/// link.set_suspended(false);
/// assert!(link.is_connected());
/// ```
#[derive(Debug, Default)]
pub struct LinkState {
    configured: AtomicBool,
    suspended: AtomicBool,
}

impl LinkState {
    /// Unconfigured and awake.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            configured: AtomicBool::new(false),
            suspended: AtomicBool::new(false),
        }
    }

    /// Bus reset: the host has to enumerate the device again.
    pub fn reset(&self) {
        self.configured.store(false, Ordering::Relaxed);
        self.suspended.store(false, Ordering::Relaxed);
    }

    /// The host selected or cleared the device configuration.
    pub fn set_configured(&self, configured: bool) {
        self.configured.store(configured, Ordering::Relaxed);
    }

    /// The bus was suspended or resumed.
    pub fn set_suspended(&self, suspended: bool) {
        self.suspended.store(suspended, Ordering::Relaxed);
    }

    /// Configured and not suspended.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.configured.load(Ordering::Relaxed) && !self.suspended.load(Ordering::Relaxed)
    }
}
