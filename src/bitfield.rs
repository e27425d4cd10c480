//! Read-modify-write access to bit runs inside a single register byte.
//!
//! Fields are addressed MSB-first: a [`BitField`] names its most significant
//! bit and its length, and values are always right-aligned on the way in and
//! out. The helpers fetch the register, operate on the byte, and (for writes)
//! send it back. The two transactions are not atomic with respect to any other
//! bus master touching the same register.
//!
//! ```text
//!      010   value
//! 76543210   bit numbers
//!    xxx     msb = 4, length = 3
//! 00011100   mask
//! 10101111   current byte
//! 10100011   current & !mask
//! 10101011   combined
//! ```

use crate::error::{Error, Result};
use crate::interface::RegisterInterface;

/// A contiguous run of bits within one register byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    msb: u8,
    length: u8,
}

impl BitField {
    /// Creates a descriptor, panicking if it does not fit in a byte.
    ///
    /// Intended for constants, where the check happens at compile time. Use
    /// [`BitField::try_new`] for values computed at runtime.
    pub const fn new(msb: u8, length: u8) -> Self {
        match Self::try_new(msb, length) {
            Some(field) => field,
            None => panic!("bit field does not fit in one register byte"),
        }
    }

    /// Creates a descriptor if `msb <= 7`, `length >= 1` and the run ends at or above bit 0.
    pub const fn try_new(msb: u8, length: u8) -> Option<Self> {
        if msb > 7 || length == 0 || length > msb + 1 {
            return None;
        }

        Some(Self { msb, length })
    }

    /// Single-bit descriptor for bit `bit`.
    pub const fn bit(bit: u8) -> Option<Self> {
        Self::try_new(bit, 1)
    }

    /// Most significant bit of the run.
    pub const fn msb(self) -> u8 {
        self.msb
    }

    /// Number of bits in the run.
    pub const fn length(self) -> u8 {
        self.length
    }

    /// Position of the least significant bit of the run.
    pub const fn shift(self) -> u8 {
        self.msb + 1 - self.length
    }

    /// Mask selecting the run in place.
    pub const fn mask(self) -> u8 {
        // u16 so that an eight bit run does not overflow the shift.
        ((((1u16 << self.length) - 1) << self.shift()) & 0xFF) as u8
    }

    /// Returns the run from `byte`, right-aligned.
    pub const fn extract(self, byte: u8) -> u8 {
        (byte & self.mask()) >> self.shift()
    }

    /// Returns `byte` with the run replaced by `value`.
    ///
    /// Bits of `value` that do not fit in the run are discarded.
    pub const fn inject(self, byte: u8, value: u8) -> u8 {
        let mask = self.mask();
        let field = (((value as u16) << self.shift()) as u8) & mask;
        (byte & !mask) | field
    }
}

/// Reads a right-aligned bit field from `register`.
pub fn read_bits<IFACE>(
    interface: &mut IFACE,
    register: u8,
    field: BitField,
) -> Result<u8, IFACE::Error>
where
    IFACE: RegisterInterface,
{
    let byte = interface.read_register(register)?;
    Ok(field.extract(byte))
}

/// Replaces a bit field in `register`, leaving every other bit as read.
pub fn write_bits<IFACE>(
    interface: &mut IFACE,
    register: u8,
    field: BitField,
    value: u8,
) -> Result<(), IFACE::Error>
where
    IFACE: RegisterInterface,
{
    let current = interface.read_register(register)?;
    interface.write_register(register, field.inject(current, value))
}

/// Reads bit `bit` of `register`.
pub fn read_bit<IFACE>(interface: &mut IFACE, register: u8, bit: u8) -> Result<bool, IFACE::Error>
where
    IFACE: RegisterInterface,
{
    let field = BitField::bit(bit).ok_or(Error::InvalidBitField)?;
    Ok(read_bits(interface, register, field)? != 0)
}

/// Sets or clears bit `bit` of `register`.
pub fn write_bit<IFACE>(
    interface: &mut IFACE,
    register: u8,
    bit: u8,
    enabled: bool,
) -> Result<(), IFACE::Error>
where
    IFACE: RegisterInterface,
{
    let field = BitField::bit(bit).ok_or(Error::InvalidBitField)?;
    write_bits(interface, register, field, enabled as u8)
}
