//! Platform-agnostic PROM reading: address counter, dump format and traits.
//!
//! This crate provides the scan logic of the PROM reader without any
//! chip-specific dependencies. It can be used both in embedded `no_std`
//! environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`address`]: The 13-bit address counter ([`Address`])
//! - [`line`]: Dump line formatting ([`Line`], [`hex_digit`], [`display_char`])
//! - [`pins`]: Board wiring table ([`PinMap`])
//! - [`bus`]: PROM bus trait and GPIO binding ([`PromBus`], [`ParallelBus`])
//! - [`serial`]: Host serial channel trait ([`SerialPort`])
//! - [`link`]: USB configured/suspended tracking ([`LinkState`])
//! - [`scanner`]: The scan loop and its state machine ([`Scanner`])
//!
//! # Output Format
//!
//! One line per non-empty byte, plus a notice each time the counter wraps:
//!
//! ```text
//! 0001=41 A\r\n
//! 0002=FF .\r\n
//! wrap\r\n
//! ```
//!
//! # Example
//!
//! ```rust
//! use prom_core::{Address, Line};
//!
//! let mut addr = Address::ZERO;
//! addr.advance();
//! assert_eq!(Line::new(addr, b'A').as_bytes(), b"0001=41 A\r\n");
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and scan loop logging
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod address;
pub mod bus;
pub mod config;
pub mod line;
pub mod link;
pub mod pins;
pub mod scanner;
pub mod serial;

#[cfg(test)]
mod test_util;

// Re-export main types at crate root
pub use address::{Address, ADDRESS_BITS, ADDRESS_MASK, ADDRESS_SPACE};
pub use bus::{BusError, ParallelBus, PromBus, DEFAULT_SETTLE_US};
pub use config::ScanConfig;
pub use line::{display_char, hex_digit, is_printable, Line, BANNER, LINE_LEN, WRAP_NOTICE};
pub use link::LinkState;
pub use pins::{PinMap, PinMapError, ADDRESS_PINS, DATA_BITS};
pub use scanner::{ScanError, ScanState, Scanner, Step};
pub use serial::{SerialError, SerialPort};
