//! Error types for the TC74 driver.

use core::fmt;

/// Errors that can occur when talking to the TC74.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tc74Error<E> {
    /// Error reported by the bound transfer primitive.
    Bus(E),

    /// A register write was requested but no write primitive is bound.
    /// No transfer was attempted.
    WriterUnbound,
}

// Allow ergonomic `?` propagation from raw transfer errors.
impl<E> From<E> for Tc74Error<E> {
    fn from(error: E) -> Self {
        Tc74Error::Bus(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Tc74Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tc74Error::Bus(e) => write!(f, "Bus error: {:?}", e),
            Tc74Error::WriterUnbound => write!(f, "No write primitive bound"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Tc74Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Tc74Error::Bus(e) => defmt::write!(f, "Bus error: {}", e),
            Tc74Error::WriterUnbound => defmt::write!(f, "No write primitive bound"),
        }
    }
}

/// A 7-bit address outside the TC74 range `0x48..=0x4F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAddress(pub u8);

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid TC74 address 0x{:02X} (must be 0x48-0x4F)", self.0)
    }
}
