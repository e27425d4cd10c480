//! Register transactions composed from primitive two-wire bus signals.
//!
//! The host supplies a [`BusTransport`] that can frame the bus and move single
//! bytes. [`SoftI2cInterface`] builds the two transaction shapes the sensor
//! needs on top of it:
//!
//! ```text
//! write:  S  addr|W  A  reg  A  data  A  P
//! read:   S  addr|W  A  reg  A  Sr  addr|R  A  d0 ACK  d1 ACK ... dn NAK  P
//! ```
//!
//! Any byte the device does not acknowledge aborts the transaction with a stop
//! condition and [`Error::UnexpectedAcknowledgment`]. There is no retry.
//!
//! A transport error before the closing stop is followed by a best-effort
//! stop; a failed receive is first answered with a best-effort NAK. A failing
//! closing stop is reported without a second attempt.

use crate::error::{Error, Nack, NackPhase, Result};
use crate::interface::RegisterInterface;
use crate::params::SlaveAddress;

/// Acknowledge bit returned by the receiver after a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Acknowledge {
    /// The receiver pulled the line low.
    Ack,
    /// The receiver left the line high.
    Nack,
}

/// Transfer direction encoded in the low bit of the address byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    /// Master writes to the device.
    Write = 0,
    /// Master reads from the device.
    Read = 1,
}

/// Primitive bus signalling supplied by the host platform.
///
/// Every primitive is fallible so that an implementation can bound how long it
/// waits on the bus (clock stretching, a stuck line) and report a timeout
/// through its own error type instead of blocking forever.
pub trait BusTransport {
    /// Error type produced by the concrete transport.
    type Error;

    /// Generates a start condition.
    fn start(&mut self) -> core::result::Result<(), Self::Error>;

    /// Generates a repeated start condition.
    fn restart(&mut self) -> core::result::Result<(), Self::Error>;

    /// Generates a stop condition, releasing the bus.
    fn stop(&mut self) -> core::result::Result<(), Self::Error>;

    /// Clocks out one byte and samples the receiver's acknowledge bit.
    fn send(&mut self, byte: u8) -> core::result::Result<Acknowledge, Self::Error>;

    /// Clocks in one byte from the device.
    fn receive(&mut self) -> core::result::Result<u8, Self::Error>;

    /// Acknowledges the byte just received, requesting another.
    fn ack(&mut self) -> core::result::Result<(), Self::Error>;

    /// Declines the byte just received, ending the device's stream.
    fn nak(&mut self) -> core::result::Result<(), Self::Error>;
}

/// Transaction engine over a primitive [`BusTransport`].
pub struct SoftI2cInterface<BUS> {
    bus: BUS,
    address: u8,
}

impl<BUS> SoftI2cInterface<BUS> {
    /// Creates a new interface talking to the device at `address`.
    pub const fn new(bus: BUS, address: SlaveAddress) -> Self {
        Self {
            bus,
            address: address.addr(),
        }
    }

    /// Seven-bit address of the device this interface talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Builds the address byte sent after a (repeated) start.
    fn address_byte(&self, direction: Direction) -> u8 {
        (self.address << 1) | direction as u8
    }

    /// Provides mutable access to the wrapped transport.
    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// Consumes the interface and returns the owned transport.
    pub fn release(self) -> BUS {
        self.bus
    }
}

impl<BUS> SoftI2cInterface<BUS>
where
    BUS: BusTransport,
{
    fn send_expecting_ack(
        &mut self,
        byte: u8,
        phase: NackPhase,
        register: u8,
    ) -> Result<(), BUS::Error> {
        match self.bus.send(byte)? {
            Acknowledge::Ack => Ok(()),
            Acknowledge::Nack => {
                warn!("NACK during {} (register {=u8:#x})", phase, register);
                Err(Error::UnexpectedAcknowledgment(Nack { phase, register }))
            }
        }
    }

    /// Sends the device address and register index of either transaction shape.
    fn address_register(&mut self, register: u8) -> Result<(), BUS::Error> {
        let address = self.address_byte(Direction::Write);
        self.bus.start()?;
        self.send_expecting_ack(address, NackPhase::DeviceAddressWrite, register)?;
        self.send_expecting_ack(register, NackPhase::RegisterIndex, register)
    }

    /// Everything of a write up to, but not including, the closing stop.
    fn write_transaction(&mut self, register: u8, value: u8) -> Result<(), BUS::Error> {
        self.address_register(register)?;
        self.send_expecting_ack(value, NackPhase::Data, register)
    }

    /// Everything of a block read up to, but not including, the closing stop.
    fn read_transaction(&mut self, register: u8, buf: &mut [u8]) -> Result<(), BUS::Error> {
        let address = self.address_byte(Direction::Read);
        self.address_register(register)?;
        self.bus.restart()?;
        self.send_expecting_ack(address, NackPhase::DeviceAddressRead, register)?;

        let last = buf.len() - 1;
        for (index, byte) in buf.iter_mut().enumerate() {
            *byte = match self.bus.receive() {
                Ok(value) => value,
                Err(err) => {
                    // The device may still be driving data until it sees a NAK.
                    if self.bus.nak().is_err() {
                        debug!("nak after failed receive failed");
                    }
                    return Err(Error::Bus(err));
                }
            };
            if index == last {
                self.bus.nak()?;
            } else {
                self.bus.ack()?;
            }
        }

        Ok(())
    }

    /// Issues a best-effort stop when a transaction fails before its closing stop.
    ///
    /// A failure of the closing stop itself is returned as is and never retried.
    fn release_on_error<T>(&mut self, result: Result<T, BUS::Error>) -> Result<T, BUS::Error> {
        if result.is_err() && self.bus.stop().is_err() {
            debug!("stop after aborted transaction failed");
        }
        result
    }
}

impl<BUS> RegisterInterface for SoftI2cInterface<BUS>
where
    BUS: BusTransport,
{
    type Error = BUS::Error;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        let result = self.write_transaction(register, value);
        self.release_on_error(result)?;
        self.bus.stop()?;
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

        let result = self.read_transaction(register, buf);
        self.release_on_error(result)?;
        self.bus.stop()?;
        Ok(())
    }
}
