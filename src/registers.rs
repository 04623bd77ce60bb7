//! TC74 register map, control bits and device addresses.
//!
//! The TC74 exposes two single-byte registers selected by a command byte:
//! - `0x00` TEMP: read-only, signed Celsius value
//! - `0x01` CONFIG: bit 7 standby (read/write), bit 6 data-ready (read-only)

use crate::error::InvalidAddress;

// ---------------------------------------------------------------------------
// Register selectors
// ---------------------------------------------------------------------------

/// Temperature register (read-only, two's-complement Celsius).
pub const REG_TEMP: u8 = 0x00;

/// Configuration register (read/write).
pub const REG_CONFIG: u8 = 0x01;

/// Register targeted by a single transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// TEMP register.
    Temperature = REG_TEMP,
    /// CONFIG register.
    Control = REG_CONFIG,
}

impl Register {
    /// Command byte sent on the wire to select this register.
    pub const fn selector(self) -> u8 {
        self as u8
    }
}

// ---------------------------------------------------------------------------
// Control register bits
// ---------------------------------------------------------------------------

/// CONFIG bit 7: 1 = standby, 0 = normal.
pub const CONFIG_STANDBY: u8 = 0x80;

/// CONFIG bit 6: 1 = conversion complete. Cleared at power-up and whenever
/// standby is entered.
pub const CONFIG_DATA_READY: u8 = 0x40;

/// Operating mode selected by CONFIG bit 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Normal,
    Standby,
}

/// Raw view of the CONFIG register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Control(pub u8);

impl Control {
    /// Byte written for a mode transition.
    ///
    /// Only bit 7 is ever set; every other bit is written as zero.
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Standby => Control(CONFIG_STANDBY),
            Mode::Normal => Control(0x00),
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_standby(self) -> bool {
        self.0 & CONFIG_STANDBY != 0
    }

    pub const fn is_data_ready(self) -> bool {
        self.0 & CONFIG_DATA_READY != 0
    }

    pub const fn mode(self) -> Mode {
        if self.is_standby() {
            Mode::Standby
        } else {
            Mode::Normal
        }
    }
}

// ---------------------------------------------------------------------------
// Device addresses
// ---------------------------------------------------------------------------

/// Factory default 7-bit address (TC74A5).
pub const DEFAULT_ADDRESS: u8 = 0x4D;

/// 7-bit bus address, fixed per part number (TC74A0 .. TC74A7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Address {
    A0 = 0x48,
    A1 = 0x49,
    A2 = 0x4A,
    A3 = 0x4B,
    A4 = 0x4C,
    #[default]
    A5 = DEFAULT_ADDRESS,
    A6 = 0x4E,
    A7 = 0x4F,
}

impl Address {
    /// Every valid address, in ascending order.
    pub const ALL: [Address; 8] = [
        Address::A0,
        Address::A1,
        Address::A2,
        Address::A3,
        Address::A4,
        Address::A5,
        Address::A6,
        Address::A7,
    ];

    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address.bits()
    }
}

impl TryFrom<u8> for Address {
    type Error = InvalidAddress;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Address::ALL
            .into_iter()
            .find(|a| a.bits() == value)
            .ok_or(InvalidAddress(value))
    }
}

// ---------------------------------------------------------------------------
// Temperature decoding
// ---------------------------------------------------------------------------

/// Decode a raw TEMP byte to degrees Celsius.
///
/// The register is an 8-bit two's-complement value with 1 °C resolution:
/// `0x00..=0x7F` map to 0..=127 and `0x80..=0xFF` to -128..=-1. The part is
/// only specified for -40..=+125 °C but out-of-range bytes are decoded
/// arithmetically rather than rejected.
pub const fn decode_temperature(raw: u8) -> i8 {
    raw as i8
}
