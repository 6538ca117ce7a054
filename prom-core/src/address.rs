//! The 13-bit PROM address counter.

/// Number of address lines driven by the reader.
pub const ADDRESS_BITS: u32 = 13;

/// Number of addressable bytes (8 KiB).
pub const ADDRESS_SPACE: u16 = 1 << ADDRESS_BITS;

/// Mask selecting the valid address bits.
pub const ADDRESS_MASK: u16 = ADDRESS_SPACE - 1;

/// A PROM address in the range `0..=0x1FFF`.
///
/// The wrapped value is always masked to [`ADDRESS_BITS`], so an `Address`
/// can be put on the bus without further checks.
///
/// # Example
///
/// ```
/// use prom_core::Address;
///
/// let mut addr = Address::new(0x1FFF);
/// assert!(addr.advance());
/// assert_eq!(addr, Address::ZERO);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u16);

impl Address {
    /// The first address.
    pub const ZERO: Self = Self(0);

    /// The last address before the counter wraps.
    pub const MAX: Self = Self(ADDRESS_MASK);

    /// Create an address, discarding bits above [`ADDRESS_BITS`].
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value & ADDRESS_MASK)
    }

    /// Get the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Level of address line `bit` (0 = A0).
    ///
    /// Lines at or above [`ADDRESS_BITS`] are always low.
    #[inline]
    #[must_use]
    pub const fn bit(self, bit: usize) -> bool {
        if bit >= ADDRESS_BITS as usize {
            return false;
        }
        (self.0 >> bit) & 1 != 0
    }

    /// Step to the next address.
    ///
    /// Returns `true` when the counter wrapped from [`Address::MAX`] back to
    /// zero.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.0 = (self.0 + 1) & ADDRESS_MASK;
        self.0 == 0
    }
}

impl From<Address> for u16 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_masks_high_bits() {
        assert_eq!(Address::new(0x2001).raw(), 0x0001);
        assert_eq!(Address::new(0xFFFF), Address::MAX);
    }

    #[test]
    fn test_advance_without_wrap() {
        let mut addr = Address::ZERO;
        assert!(!addr.advance());
        assert_eq!(addr.raw(), 1);
    }

    #[test]
    fn test_advance_wraps_once_per_cycle() {
        let mut addr = Address::ZERO;
        let mut wraps = 0;
        for _ in 0..ADDRESS_SPACE {
            if addr.advance() {
                wraps += 1;
                assert_eq!(addr, Address::ZERO);
            }
        }
        assert_eq!(wraps, 1);
        assert_eq!(addr, Address::ZERO);
    }

    #[test]
    fn test_bit_levels() {
        let addr = Address::new(0b1_0000_0000_0101);
        assert!(addr.bit(0));
        assert!(!addr.bit(1));
        assert!(addr.bit(2));
        assert!(addr.bit(12));
        assert!(!addr.bit(11));
    }

    #[test]
    fn test_bit_beyond_bus_is_low() {
        let addr = Address::MAX;
        assert!(addr.bit(12));
        assert!(!addr.bit(13));
        assert!(!addr.bit(16));
        assert!(!addr.bit(usize::MAX));
    }
}
