//! I2C interface implementation built on top of `embedded-hal` `I2c`.
//!
//! Use this when the host has a hardware I2C peripheral; the peripheral then
//! owns start/stop framing and acknowledge handling and reports a missing
//! acknowledge through its own error type.

use embedded_hal::i2c::I2c;

use super::RegisterInterface;
use crate::error::Result;
use crate::params::SlaveAddress;

/// I2C-based interface implementation for the MPU-6050 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I2C bus abstraction.
    pub const fn new(i2c: I2C, address: SlaveAddress) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])?;
        Ok(())
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.write_read(self.address, &[register], buf)?;
        Ok(())
    }
}
