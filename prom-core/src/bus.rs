//! PROM bus trait and the GPIO parallel bus binding.

use core::future::Future;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;

use crate::address::Address;
use crate::pins::{ADDRESS_PINS, DATA_BITS};

/// Time the PROM outputs need to become valid after an address change.
pub const DEFAULT_SETTLE_US: u32 = 1_000;

/// Error type for bus operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// A GPIO could not be driven or sampled.
    Pin,
}

/// Async trait for something that returns the byte stored at an address.
///
/// This abstracts the wiring between the reader and the chip, so the scan
/// loop can run against real GPIO or an in-memory image.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait PromBus {
    /// Put `address` on the bus, wait for the outputs to settle and sample
    /// the data lines.
    fn read(&mut self, address: Address) -> impl Future<Output = Result<u8, BusError>>;
}

/// Parallel PROM bus driven by individual GPIOs.
///
/// `address[i]` drives A*i* and `data[i]` is sampled as D*i*, matching the
/// order of [`PinMap`](crate::PinMap).
pub struct ParallelBus<A, D, T> {
    address: [A; ADDRESS_PINS],
    data: [D; DATA_BITS],
    delay: T,
    settle_us: u32,
}

impl<A, D, T> ParallelBus<A, D, T>
where
    A: OutputPin,
    D: InputPin,
    T: DelayNs,
{
    /// Create a bus with the default 1 ms settling delay.
    pub fn new(address: [A; ADDRESS_PINS], data: [D; DATA_BITS], delay: T) -> Self {
        Self::with_settle_time(address, data, delay, DEFAULT_SETTLE_US)
    }

    /// Create a bus with a custom settling delay in microseconds.
    pub fn with_settle_time(
        address: [A; ADDRESS_PINS],
        data: [D; DATA_BITS],
        delay: T,
        settle_us: u32,
    ) -> Self {
        Self {
            address,
            data,
            delay,
            settle_us,
        }
    }

    /// Drive every address line to the matching bit of `address`.
    pub fn set_address(&mut self, address: Address) -> Result<(), BusError> {
        for (bit, pin) in self.address.iter_mut().enumerate() {
            pin.set_state(PinState::from(address.bit(bit)))
                .map_err(|_| BusError::Pin)?;
        }
        Ok(())
    }

    /// Sample the data lines, D0 as the least significant bit.
    pub fn read_data(&mut self) -> Result<u8, BusError> {
        let mut byte = 0u8;
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if pin.is_high().map_err(|_| BusError::Pin)? {
                byte |= 1 << bit;
            }
        }
        Ok(byte)
    }

    /// Decompose the bus into its pins and delay provider.
    pub fn into_parts(self) -> ([A; ADDRESS_PINS], [D; DATA_BITS], T) {
        (self.address, self.data, self.delay)
    }
}

impl<A, D, T> PromBus for ParallelBus<A, D, T>
where
    A: OutputPin,
    D: InputPin,
    T: DelayNs,
{
    async fn read(&mut self, address: Address) -> Result<u8, BusError> {
        self.set_address(address)?;
        self.delay.delay_us(self.settle_us).await;
        self.read_data()
    }
}
