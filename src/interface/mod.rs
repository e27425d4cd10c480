//! Bus interface abstraction for the MPU-6050 driver.

pub mod i2c;
pub mod soft_i2c;

use crate::error::Result;

/// Register-level access required by the bit-field helpers and the driver.
///
/// Failures come back as [`Error`](crate::Error) so a transport can report
/// unacknowledged bytes separately from its own errors.
pub trait RegisterInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error>;

    /// Reads consecutive registers starting at `register` into `buf`.
    ///
    /// An empty buffer is a no-op and produces no bus traffic.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}
