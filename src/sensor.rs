//! High-level interface for the TC74 thermal sensor.
//!
//! [`Tc74`] wraps the register protocol with standby control, data-ready
//! polling and temperature decoding.

use core::cell::RefCell;

use embedded_hal::i2c::I2c;

use crate::driver::RegisterDriver;
use crate::error::Tc74Error;
use crate::registers::{decode_temperature, Address, Control, Mode, Register};
use crate::transport::{I2cBus, ReadBytes, WriteBytes};

/// Handle for one TC74 on the bus.
///
/// Bound once to a device address and two transfer primitives. Every method
/// is a blocking call that returns only after the primitive it uses has
/// returned. The handle holds no lock; callers sharing it between execution
/// contexts must serialise access themselves, in particular around
/// [`set_standby`](Self::set_standby), which reads and then writes.
///
/// # Example
///
/// ```no_run
/// use tc74_driver::{Address, Tc74};
///
/// fn i2c_write(_address: u8, _bytes: &[u8]) { /* platform write */ }
/// fn i2c_read(_address: u8, _buffer: &mut [u8]) { /* platform read */ }
///
/// let mut sensor = Tc74::new(Address::A5, i2c_write, i2c_read);
/// let celsius = sensor.read_temperature().unwrap();
/// ```
pub struct Tc74<W, R> {
    driver: RegisterDriver<W, R>,
}

impl<'a, I: I2c> Tc74<I2cBus<'a, I>, I2cBus<'a, I>> {
    /// Bind an `embedded-hal` I2C bus as both transfer primitives.
    ///
    /// No I2C traffic is generated.
    pub fn with_i2c(bus: &'a RefCell<I>, address: Address) -> Self {
        let bus = I2cBus::new(bus);
        Self::new(address, bus, bus)
    }
}

impl<W, R, E> Tc74<W, R>
where
    W: WriteBytes<Error = E>,
    R: ReadBytes<Error = E>,
{
    /// Create a handle with both primitives bound.
    ///
    /// No bus activity occurs.
    pub fn new(address: Address, writer: W, reader: R) -> Self {
        Self::from_parts(address, Some(writer), Some(reader))
    }

    /// Create a handle where either primitive may be left unbound.
    ///
    /// An unbound writer makes every write fail with
    /// [`Tc74Error::WriterUnbound`]. An unbound reader makes every read
    /// return the register selector unchanged.
    pub fn from_parts(address: Address, writer: Option<W>, reader: Option<R>) -> Self {
        Self {
            driver: RegisterDriver::new(address, writer, reader),
        }
    }

    pub fn address(&self) -> Address {
        self.driver.address()
    }

    /// Consume the handle and hand back the transfer primitives.
    pub fn release(self) -> (Option<W>, Option<R>) {
        self.driver.release()
    }

    // -----------------------------------------------------------------------
    // Register access
    // -----------------------------------------------------------------------

    /// Write `value` to `register` in one two-byte transfer.
    ///
    /// # Errors
    /// * [`Tc74Error::WriterUnbound`] if no write primitive is bound; no
    ///   transfer is attempted
    /// * [`Tc74Error::Bus`] if the write primitive fails
    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), Tc74Error<E>> {
        self.driver.write_register(register, value)
    }

    /// Read the current value of `register`.
    ///
    /// With no read primitive bound this returns the selector byte itself
    /// (`0x00` or `0x01`) rather than an error.
    ///
    /// # Errors
    /// * [`Tc74Error::Bus`] if the read primitive fails
    pub fn read_register(&mut self, register: Register) -> Result<u8, Tc74Error<E>> {
        self.driver.read_register(register)
    }

    /// Read the CONFIG register.
    pub fn read_control(&mut self) -> Result<Control, Tc74Error<E>> {
        self.read_register(Register::Control).map(Control)
    }

    // -----------------------------------------------------------------------
    // Mode control
    // -----------------------------------------------------------------------

    /// Enter (`true`) or leave (`false`) standby.
    ///
    /// CONFIG is read first and the value discarded, then `0x80` or `0x00`
    /// is written. All other CONFIG bits are cleared by the write.
    ///
    /// # Errors
    /// * [`Tc74Error::Bus`] if either transfer fails
    /// * [`Tc74Error::WriterUnbound`] if no write primitive is bound
    pub fn set_standby(&mut self, enable: bool) -> Result<(), Tc74Error<E>> {
        let mode = if enable { Mode::Standby } else { Mode::Normal };

        // Read is not merged into the new value.
        let _ = self.read_register(Register::Control)?;
        self.write_register(Register::Control, Control::for_mode(mode).bits())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("TC74 {:#x}: mode -> {}", self.address().bits(), mode);

        Ok(())
    }

    /// Same as [`set_standby`](Self::set_standby) with `mode == Mode::Standby`.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Tc74Error<E>> {
        self.set_standby(mode == Mode::Standby)
    }

    // -----------------------------------------------------------------------
    // Measurement
    // -----------------------------------------------------------------------

    /// Whether a completed conversion is available (CONFIG bit 6).
    ///
    /// The bit is clear at power-up and after entering standby, and sets
    /// once a conversion completes in normal mode.
    pub fn is_data_ready(&mut self) -> Result<bool, Tc74Error<E>> {
        self.read_control().map(Control::is_data_ready)
    }

    /// Read the temperature in whole degrees Celsius.
    ///
    /// If no conversion is ready the TEMP register is not read and `0` is
    /// returned. There is no retry; poll [`is_data_ready`](Self::is_data_ready)
    /// first to tell a real 0 °C apart from "not ready".
    pub fn read_temperature(&mut self) -> Result<i8, Tc74Error<E>> {
        let raw = if self.is_data_ready()? {
            self.read_register(Register::Temperature)?
        } else {
            0
        };

        Ok(decode_temperature(raw))
    }
}
