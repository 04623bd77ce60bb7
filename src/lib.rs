//! Blocking driver for the Microchip TC74 serial digital thermal sensor.
//!
//! The TC74 reports temperature as a single signed byte in degrees Celsius
//! and exposes one control register for standby and data-ready status.
//!
//! # Architecture
//!
//! - **[`transport`]** — the two byte-transfer capabilities the driver is
//!   bound to ([`WriteBytes`], [`ReadBytes`]), implemented for plain
//!   closures and for any `embedded-hal` I2C bus through [`I2cBus`].
//! - **`driver`** (crate-private) — the register write/read protocol.
//! - **[`Tc74`]** (public) — initialisation, standby control, data-ready
//!   polling and temperature reads.
//!
//! # Quick start
//!
//! ```no_run
//! use core::cell::RefCell;
//! use tc74_driver::{Address, Tc74};
//!
//! # fn example<I: embedded_hal::i2c::I2c>(i2c: I) -> Result<(), tc74_driver::Tc74Error<I::Error>> {
//! let bus = RefCell::new(i2c);
//! let mut sensor = Tc74::with_i2c(&bus, Address::default());
//!
//! sensor.set_standby(false)?;
//! if sensor.is_data_ready()? {
//!     let celsius = sensor.read_temperature()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   and log the driver's no-op paths.

#![cfg_attr(not(test), no_std)]

pub use error::{InvalidAddress, Tc74Error};
pub use registers::{
    decode_temperature, Address, Control, Mode, Register, CONFIG_DATA_READY, CONFIG_STANDBY,
    DEFAULT_ADDRESS, REG_CONFIG, REG_TEMP,
};
pub use sensor::Tc74;
pub use transport::{I2cBus, ReadBytes, WriteBytes};

mod driver;
mod error;
mod registers;
mod sensor;
pub mod transport;
