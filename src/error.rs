//! Error handling primitives for the MPU-6050 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus transport.
    Bus(E),
    /// The device did not acknowledge a byte sent during a transaction.
    UnexpectedAcknowledgment(Nack),
    /// A bit number or bit-field descriptor does not fit inside one register byte.
    InvalidBitField,
    /// The provided configuration parameters are invalid.
    InvalidConfig,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Bus(err)
    }
}

/// Context attached to an aborted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Nack {
    /// Byte of the transaction that was not acknowledged.
    pub phase: NackPhase,
    /// Register index the transaction targeted.
    pub register: u8,
}

/// Position of the unacknowledged byte within a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NackPhase {
    /// Device address with the write direction bit.
    DeviceAddressWrite,
    /// Register index following the device address.
    RegisterIndex,
    /// Device address with the read direction bit, after the repeated start.
    DeviceAddressRead,
    /// Data byte of a register write.
    Data,
}
