//! Scan loop configuration.

use crate::bus::DEFAULT_SETTLE_US;

/// Tunables for [`Scanner`](crate::Scanner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// Report 0x00 bytes instead of treating them as unprogrammed cells.
    pub emit_zero_bytes: bool,
    /// Wait after the host configures the device, before DTR is polled.
    pub host_settle_ms: u32,
    /// Interval between connection and DTR polls.
    pub poll_ms: u32,
    /// Address-to-data settling time, in microseconds.
    pub settle_us: u32,
}

impl ScanConfig {
    /// Zero bytes suppressed, 1 s host settle, 1 ms polling and settling.
    pub const DEFAULT: Self = Self {
        emit_zero_bytes: false,
        host_settle_ms: 1_000,
        poll_ms: 1,
        settle_us: DEFAULT_SETTLE_US,
    };
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
