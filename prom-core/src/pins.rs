//! Static board wiring: which GPIO carries which bus signal.

use crate::address::ADDRESS_BITS;

/// Number of data lines sampled per read.
pub const DATA_BITS: usize = 8;

/// Number of address lines, as an array length.
pub const ADDRESS_PINS: usize = ADDRESS_BITS as usize;

/// Error returned by [`PinMap::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMapError {
    /// The GPIO is assigned to more than one signal.
    Duplicate(u8),
    /// The GPIO does not exist on the chip.
    OutOfRange(u8),
}

/// Pin index to logical signal table.
///
/// `address[i]` is the GPIO driving address line A*i*; `data[i]` is the GPIO
/// sampled for data line D*i*. The firmware builds its bus pins in the same
/// order, so bit *i* of an address always lands on `address[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// GPIO numbers for A0..A12.
    pub address: [u8; ADDRESS_PINS],
    /// GPIO numbers for D0..D7.
    pub data: [u8; DATA_BITS],
}

impl PinMap {
    /// Check that every signal has its own GPIO below `gpio_count`.
    ///
    /// Usable in `const` context so a board table can be checked at compile
    /// time.
    pub const fn validate(&self, gpio_count: u8) -> Result<(), PinMapError> {
        // Bitset of seen GPIOs; RP-series and AVR parts stay well below 64.
        let mut seen: u64 = 0;
        let mut i = 0;
        while i < ADDRESS_PINS + DATA_BITS {
            let gpio = if i < ADDRESS_PINS {
                self.address[i]
            } else {
                self.data[i - ADDRESS_PINS]
            };
            if gpio >= gpio_count || gpio >= 64 {
                return Err(PinMapError::OutOfRange(gpio));
            }
            if seen & (1 << gpio) != 0 {
                return Err(PinMapError::Duplicate(gpio));
            }
            seen |= 1 << gpio;
            i += 1;
        }
        Ok(())
    }

    /// Whether the table passes [`PinMap::validate`].
    #[inline]
    #[must_use]
    pub const fn is_valid(&self, gpio_count: u8) -> bool {
        self.validate(gpio_count).is_ok()
    }
}
