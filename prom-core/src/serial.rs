//! Serial channel trait and error types.

use core::future::Future;

/// Error type for serial operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// The host went away (USB reset, cable pulled, port closed).
    Disconnected,
    /// Any other transmit failure.
    Io,
}

/// Async trait for the host-facing serial channel.
///
/// This mirrors the services a USB virtual serial port offers: byte output,
/// input draining, and the connection and DTR status lines.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait SerialPort {
    /// Send `bytes` to the host.
    ///
    /// May block until the host has room for the data.
    fn write(&mut self, bytes: &[u8]) -> impl Future<Output = Result<(), SerialError>>;

    /// Throw away anything the host sent before the session started.
    fn discard_input(&mut self) -> impl Future<Output = ()>;

    /// Whether the device is configured by a host.
    fn is_connected(&self) -> bool;

    /// Whether the host terminal asserts DTR.
    fn dtr_asserted(&self) -> bool;
}
