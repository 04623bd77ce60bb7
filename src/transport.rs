//! Byte-transfer capabilities the driver is bound to.
//!
//! [`Tc74`](crate::Tc74) never touches a bus directly. It is handed one
//! [`WriteBytes`] and one [`ReadBytes`] implementation at construction and
//! performs every transfer through them, so any hardware back-end can be
//! swapped in without changing the driver.
//!
//! Two back-ends are provided:
//! - closures / `fn` pointers with the shape `(address, bytes)`, which never
//!   fail (`Error = Infallible`)
//! - [`I2cBus`], an adapter over any blocking `embedded-hal` I2C bus

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::i2c::I2c;

/// Performs a complete bus write of `bytes` to `address`.
///
/// `bytes[0]` is always the register selector.
pub trait WriteBytes {
    type Error;

    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Performs a complete bus read from `address` into `buffer`.
///
/// On entry `buffer[0]` holds the register selector. Implementations must
/// overwrite the buffer in place, starting at `buffer[0]`, with the bytes
/// read from the device.
pub trait ReadBytes {
    type Error;

    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<F> WriteBytes for F
where
    F: FnMut(u8, &[u8]),
{
    type Error = Infallible;

    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self(address, bytes);
        Ok(())
    }
}

impl<F> ReadBytes for F
where
    F: FnMut(u8, &mut [u8]),
{
    type Error = Infallible;

    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self(address, buffer);
        Ok(())
    }
}

/// Binds an `embedded-hal` I2C bus as both transfer primitives.
///
/// The bus lives in a [`RefCell`] so the same peripheral can back the write
/// and the read side at once; `I2cBus` itself is `Copy`. The driver never
/// holds a borrow across calls.
pub struct I2cBus<'a, I> {
    bus: &'a RefCell<I>,
}

impl<'a, I> I2cBus<'a, I> {
    pub const fn new(bus: &'a RefCell<I>) -> Self {
        Self { bus }
    }
}

impl<I> Clone for I2cBus<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for I2cBus<'_, I> {}

impl<I: I2c> WriteBytes for I2cBus<'_, I> {
    type Error = I::Error;

    /// START - ADDR(W) - SELECTOR - DATA - STOP
    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.bus.borrow_mut().write(address, bytes)
    }
}

impl<I: I2c> ReadBytes for I2cBus<'_, I> {
    type Error = I::Error;

    /// START - ADDR(W) - SELECTOR - RESTART - ADDR(R) - DATA - STOP
    ///
    /// The selector is taken from `buffer[0]` before the buffer is
    /// overwritten with the response. An empty buffer performs no transfer.
    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let Some(&selector) = buffer.first() else {
            return Ok(());
        };
        self.bus.borrow_mut().write_read(address, &[selector], buffer)
    }
}
