//! Dump line formatting.
//!
//! Each non-empty byte is reported as one fixed-width ASCII record:
//!
//! ```text
//! AAAA=BB C\r\n
//! ```
//!
//! - `AAAA` - address as 4 uppercase hex digits
//! - `BB` - byte as 2 uppercase hex digits
//! - `C` - the byte itself if it is a letter, digit or space, else `.`

use crate::address::Address;

/// Hex digits lookup table for fast conversion.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Length of a formatted dump line, including `\r\n`.
pub const LINE_LEN: usize = 11;

/// Line sent once per address space cycle, when the counter wraps to zero.
pub const WRAP_NOTICE: &[u8] = b"wrap\r\n";

/// Greeting sent once the host terminal asserts DTR.
pub const BANNER: &[u8] = b"\r\nPROM reader\r\n";

/// Substitute for bytes that are not shown as themselves.
pub const PLACEHOLDER: u8 = b'.';

/// Convert the low nibble of `x` to an uppercase hex digit.
///
/// ```
/// use prom_core::hex_digit;
///
/// assert_eq!(hex_digit(0x0A), b'A');
/// assert_eq!(hex_digit(0x37), b'7');
/// ```
#[inline]
#[must_use]
pub const fn hex_digit(x: u8) -> u8 {
    HEX_DIGITS[(x & 0xF) as usize]
}

/// Whether a byte is echoed verbatim in the character column.
#[inline]
#[must_use]
pub const fn is_printable(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b' '
}

/// Character shown for `byte` in the last column of a dump line.
#[inline]
#[must_use]
pub const fn display_char(byte: u8) -> u8 {
    if is_printable(byte) {
        byte
    } else {
        PLACEHOLDER
    }
}

/// One formatted dump line.
///
/// # Example
///
/// ```
/// use prom_core::{Address, Line};
///
/// let line = Line::new(Address::new(0x0001), 0x41);
/// assert_eq!(line.as_bytes(), b"0001=41 A\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line([u8; LINE_LEN]);

impl Line {
    /// Format the record for `byte` read at `address`.
    #[must_use]
    pub const fn new(address: Address, byte: u8) -> Self {
        let a = address.raw();
        Self([
            hex_digit((a >> 12) as u8),
            hex_digit((a >> 8) as u8),
            hex_digit((a >> 4) as u8),
            hex_digit(a as u8),
            b'=',
            hex_digit(byte >> 4),
            hex_digit(byte),
            b' ',
            display_char(byte),
            b'\r',
            b'\n',
        ])
    }

    /// The line as it goes on the wire.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
