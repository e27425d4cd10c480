//! Strongly typed parameter enumerations for the MPU-6050 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use mpu6050_soft_i2c::params::{AccelRange, ClockSource, GyroRange};
//!
//! let clock = ClockSource::PllXGyro;
//! let gyro = GyroRange::Dps250;
//! let accel = AccelRange::G2;
//! assert_eq!(gyro.lsb_per_dps(), 131.0);
//! let _ = (clock, accel);
//! ```

use modular_bitfield::prelude::Specifier;

/// Seven-bit bus address selected by the AD0 pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SlaveAddress {
    /// AD0 tied low.
    #[default]
    Ad0Low = 0x68,
    /// AD0 tied high.
    Ad0High = 0x69,
}

impl SlaveAddress {
    /// Returns the seven-bit address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<SlaveAddress> for u8 {
    fn from(value: SlaveAddress) -> Self {
        value.addr()
    }
}

/// Clock source selection (`PWR_MGMT_1.CLKSEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum ClockSource {
    /// Internal 8 MHz oscillator.
    Internal = 0b000,
    /// PLL with X axis gyroscope reference.
    PllXGyro = 0b001,
    /// PLL with Y axis gyroscope reference.
    PllYGyro = 0b010,
    /// PLL with Z axis gyroscope reference.
    PllZGyro = 0b011,
    /// PLL with external 32.768 kHz reference.
    PllExternal32k = 0b100,
    /// PLL with external 19.2 MHz reference.
    PllExternal19M = 0b101,
    /// Reserved encoding.
    Reserved = 0b110,
    /// Stops the clock and keeps the timing generator in reset.
    Stopped = 0b111,
}

impl ClockSource {
    /// Returns the raw `CLKSEL` field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a right-aligned `CLKSEL` field value. Only the low three bits are used.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Internal,
            0b001 => Self::PllXGyro,
            0b010 => Self::PllYGyro,
            0b011 => Self::PllZGyro,
            0b100 => Self::PllExternal32k,
            0b101 => Self::PllExternal19M,
            0b110 => Self::Reserved,
            _ => Self::Stopped,
        }
    }
}

/// Gyroscope full-scale range (`GYRO_CONFIG.FS_SEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum GyroRange {
    /// ±250 °/s.
    Dps250 = 0b00,
    /// ±500 °/s.
    Dps500 = 0b01,
    /// ±1000 °/s.
    Dps1000 = 0b10,
    /// ±2000 °/s.
    Dps2000 = 0b11,
}

impl GyroRange {
    /// Returns the raw `FS_SEL` field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a right-aligned `FS_SEL` field value. Only the low two bits are used.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Dps250,
            0b01 => Self::Dps500,
            0b10 => Self::Dps1000,
            _ => Self::Dps2000,
        }
    }

    /// Sensitivity scale factor in LSB per °/s.
    pub const fn lsb_per_dps(self) -> f32 {
        match self {
            Self::Dps250 => 131.0,
            Self::Dps500 => 65.5,
            Self::Dps1000 => 32.8,
            Self::Dps2000 => 16.4,
        }
    }
}

/// Accelerometer full-scale range (`ACCEL_CONFIG.AFS_SEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum AccelRange {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

impl AccelRange {
    /// Returns the raw `AFS_SEL` field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a right-aligned `AFS_SEL` field value. Only the low two bits are used.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::G2,
            0b01 => Self::G4,
            0b10 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Sensitivity scale factor in LSB per g.
    pub const fn lsb_per_g(self) -> f32 {
        match self {
            Self::G2 => 16_384.0,
            Self::G4 => 8_192.0,
            Self::G8 => 4_096.0,
            Self::G16 => 2_048.0,
        }
    }
}
