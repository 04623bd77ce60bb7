//! Low-level TC74 register protocol.
//!
//! Every TC74 transfer is a single byte: a write is `[selector, value]` and
//! a read places the selector in a one-byte buffer which the read primitive
//! overwrites with the register value.
//!
//! This module is crate-private — consumers interact with [`Tc74`] in
//! `sensor.rs` instead.
//!
//! [`Tc74`]: crate::Tc74

use crate::error::Tc74Error;
use crate::registers::{Address, Register};
use crate::transport::{ReadBytes, WriteBytes};

/// Number of data bytes moved per register access.
const DATA_LEN: usize = 1;

/// Device address plus the two (optionally bound) transfer primitives.
pub(crate) struct RegisterDriver<W, R> {
    address: Address,
    writer: Option<W>,
    reader: Option<R>,
}

impl<W, R, E> RegisterDriver<W, R>
where
    W: WriteBytes<Error = E>,
    R: ReadBytes<Error = E>,
{
    pub const fn new(address: Address, writer: Option<W>, reader: Option<R>) -> Self {
        Self {
            address,
            writer,
            reader,
        }
    }

    pub const fn address(&self) -> Address {
        self.address
    }

    pub fn release(self) -> (Option<W>, Option<R>) {
        (self.writer, self.reader)
    }

    /// Write one data byte to `register`.
    ///
    /// Sends `[selector, value]` (register + one data byte) in a single
    /// write. Without a bound writer nothing is sent and
    /// [`Tc74Error::WriterUnbound`] is returned.
    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), Tc74Error<E>> {
        let Some(writer) = self.writer.as_mut() else {
            #[cfg(feature = "defmt")]
            defmt::warn!("write_register({}): no write primitive bound", register);
            return Err(Tc74Error::WriterUnbound);
        };

        let buf = [register.selector(), value];
        writer.write_bytes(self.address.bits(), &buf[..DATA_LEN + 1])?;
        Ok(())
    }

    /// Read the current value of `register`.
    ///
    /// Without a bound reader the selector byte is returned unchanged; the
    /// caller cannot tell that apart from a device echoing the selector.
    pub fn read_register(&mut self, register: Register) -> Result<u8, Tc74Error<E>> {
        let mut buf = [register.selector(); DATA_LEN];

        match self.reader.as_mut() {
            Some(reader) => reader.read_bytes(self.address.bits(), &mut buf)?,
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("read_register({}): no read primitive bound", register);
            }
        }

        Ok(buf[0])
    }
}
