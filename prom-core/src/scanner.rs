//! Scanner: walks the PROM address space and streams the dump to the host.

use embedded_hal_async::delay::DelayNs;

use crate::address::Address;
use crate::bus::{BusError, PromBus};
use crate::config::ScanConfig;
use crate::line::{Line, BANNER, WRAP_NOTICE};
use crate::serial::{SerialError, SerialPort};

/// Where the scanner is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanState {
    /// Bus and serial channel handed over, no host seen yet.
    Init,
    /// Waiting for the host to configure the device and assert DTR.
    AwaitHost,
    /// Streaming the dump.
    Scanning,
}

/// Outcome of one scan iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Address that was read.
    pub address: Address,
    /// Byte sampled at `address`.
    pub byte: u8,
    /// The counter wrapped to zero on this step.
    pub wrapped: bool,
    /// A dump line was sent for this byte.
    pub emitted: bool,
}

/// Error type for scanner operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// Error from the PROM bus.
    Bus(BusError),
    /// Error from the serial channel.
    Serial(SerialError),
}

impl From<BusError> for ScanError {
    fn from(e: BusError) -> Self {
        ScanError::Bus(e)
    }
}

impl From<SerialError> for ScanError {
    fn from(e: SerialError) -> Self {
        ScanError::Serial(e)
    }
}

/// Reads a PROM one address at a time and reports every non-empty byte.
///
/// The scanner owns the only piece of mutable state in the reader, the
/// address counter. It starts at zero and is advanced before each read, so
/// the first address sampled is 1 and address 0 follows the first wrap.
///
/// # Blocking
///
/// Waiting for the host has no timeout: without a terminal there is nowhere
/// to send the dump, so [`Scanner::await_host`] blocks until one appears.
/// A write that fails because the host went away re-enters that wait and
/// then re-sends the same line.
pub struct Scanner<B, S, T> {
    bus: B,
    serial: S,
    delay: T,
    config: ScanConfig,
    address: Address,
    state: ScanState,
}

impl<B: PromBus, S: SerialPort, T: DelayNs> Scanner<B, S, T> {
    /// Create a scanner from a configured bus and serial channel.
    pub fn new(bus: B, serial: S, delay: T, config: ScanConfig) -> Self {
        Self {
            bus,
            serial,
            delay,
            config,
            address: Address::ZERO,
            state: ScanState::Init,
        }
    }

    /// Run the reader: wait for a host, then scan forever.
    ///
    /// This method never returns.
    pub async fn run(&mut self) -> ! {
        self.open_session().await;
        loop {
            if let Err(_e) = self.step().await {
                #[cfg(feature = "defmt")]
                defmt::error!("Scan error at {:?}: {:?}", self.address, _e);
            }
        }
    }

    /// Block until the host has configured the device and asserts DTR.
    ///
    /// Polls with no timeout. If the device is unconfigured again while
    /// waiting for DTR, the wait starts over.
    pub async fn await_host(&mut self) {
        self.state = ScanState::AwaitHost;
        loop {
            while !self.serial.is_connected() {
                self.delay.delay_ms(self.config.poll_ms).await;
            }

            // Give the host driver time to finish setting up the port
            self.delay.delay_ms(self.config.host_settle_ms).await;

            while self.serial.is_connected() && !self.serial.dtr_asserted() {
                self.delay.delay_ms(self.config.poll_ms).await;
            }

            if self.serial.is_connected() {
                return;
            }
        }
    }

    /// Wait for a host, drop stale input and greet it.
    ///
    /// Leaves the scanner in [`ScanState::Scanning`].
    pub async fn open_session(&mut self) {
        loop {
            self.await_host().await;
            self.serial.discard_input().await;
            if self.serial.write(BANNER).await.is_ok() {
                break;
            }
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Host connected, scanning from {:?}", self.address);
        self.state = ScanState::Scanning;
    }

    /// Perform one scan iteration.
    ///
    /// Advances the counter, reads the byte at the new address, sends the
    /// wrap notice on wraparound and then the dump line, unless the byte is
    /// zero and zero bytes are suppressed.
    ///
    /// The byte is always read and reported, even when the wrap notice
    /// could not be sent; that error is returned afterwards.
    pub async fn step(&mut self) -> Result<Step, ScanError> {
        let wrapped = self.address.advance();
        let address = self.address;
        let read = self.bus.read(address).await;

        let notice = if wrapped {
            #[cfg(feature = "defmt")]
            defmt::debug!("Address counter wrapped");
            self.send(WRAP_NOTICE).await
        } else {
            Ok(())
        };

        let byte = read?;
        let emitted = byte != 0 || self.config.emit_zero_bytes;
        if emitted {
            let line = Line::new(address, byte);
            self.send(line.as_bytes()).await?;
        }
        notice?;

        Ok(Step {
            address,
            byte,
            wrapped,
            emitted,
        })
    }

    /// Write to the host, waiting out disconnects.
    async fn send(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        loop {
            match self.serial.write(bytes).await {
                Ok(()) => return Ok(()),
                Err(SerialError::Disconnected) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Host disconnected, waiting for it to return");
                    self.open_session().await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Current value of the address counter.
    #[inline]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Get a reference to the PROM bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Get a reference to the serial channel.
    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// Get a mutable reference to the serial channel.
    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Decompose the scanner into its bus and serial channel.
    pub fn into_parts(self) -> (B, S) {
        (self.bus, self.serial)
    }
}
