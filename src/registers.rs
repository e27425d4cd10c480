//! Register map definitions for the MPU-6050.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::bitfield::BitField;
use crate::params::{AccelRange, ClockSource, GyroRange};

/// Register address of `GYRO_CONFIG`.
pub const REG_GYRO_CONFIG: u8 = 0x1B;
/// Register address of `ACCEL_CONFIG`.
pub const REG_ACCEL_CONFIG: u8 = 0x1C;
/// Register address of `ACCEL_XOUT_H`, first byte of the motion block.
pub const REG_ACCEL_XOUT_H: u8 = 0x3B;
/// Register address of `TEMP_OUT_H`.
pub const REG_TEMP_OUT_H: u8 = 0x41;
/// Register address of `GYRO_XOUT_H`.
pub const REG_GYRO_XOUT_H: u8 = 0x43;
/// Register address of `PWR_MGMT_1`.
pub const REG_PWR_MGMT_1: u8 = 0x6B;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x75;

/// Length of the accel/temp/gyro burst starting at `ACCEL_XOUT_H`.
pub const MOTION_BLOCK_LEN: usize = 14;

/// `PWR_MGMT_1.CLKSEL` (bits 2:0).
pub const PWR1_CLKSEL: BitField = BitField::new(2, 3);
/// `PWR_MGMT_1.SLEEP` (bit 6).
pub const PWR1_SLEEP_BIT: u8 = 6;
/// `PWR_MGMT_1.DEVICE_RESET` (bit 7).
pub const PWR1_DEVICE_RESET_BIT: u8 = 7;
/// `GYRO_CONFIG.FS_SEL` (bits 4:3).
pub const GCONFIG_FS_SEL: BitField = BitField::new(4, 2);
/// `ACCEL_CONFIG.AFS_SEL` (bits 4:3).
pub const ACONFIG_AFS_SEL: BitField = BitField::new(4, 2);
/// `WHO_AM_I` identity bits (6:1).
pub const WHO_AM_I_ID: BitField = BitField::new(6, 6);

/// Value of the `WHO_AM_I` identity field once extracted and right-aligned.
///
/// The full register reads `0x68`; the six identity bits alone are `0b110100`.
pub const EXPECTED_DEVICE_ID: u8 = 0x34;

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `PWR_MGMT_1` register (address `0x6B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerManagement1 {
    // Clock source selection (bits 2:0).
    pub clock_source: ClockSource,
    // Temperature sensor disable (bit 3).
    pub temp_disable: bool,
    #[skip]
    __: B1,
    // Cycle between sleep and single samples (bit 5).
    pub cycle: bool,
    // Low power sleep mode (bit 6).
    pub sleep: bool,
    // Resets all internal registers, self clearing (bit 7).
    pub device_reset: bool,
}

impl From<u8> for PowerManagement1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PowerManagement1> for u8 {
    fn from(value: PowerManagement1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `GYRO_CONFIG` register (address `0x1B`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GyroConfig {
    #[skip]
    __: B3,
    // Full-scale range selection (bits 4:3).
    pub range: GyroRange,
    // Z axis self-test (bit 5).
    pub z_self_test: bool,
    // Y axis self-test (bit 6).
    pub y_self_test: bool,
    // X axis self-test (bit 7).
    pub x_self_test: bool,
}

impl From<u8> for GyroConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<GyroConfig> for u8 {
    fn from(value: GyroConfig) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `ACCEL_CONFIG` register (address `0x1C`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelConfig {
    #[skip]
    __: B3,
    // Full-scale range selection (bits 4:3).
    pub range: AccelRange,
    // Z axis self-test (bit 5).
    pub z_self_test: bool,
    // Y axis self-test (bit 6).
    pub y_self_test: bool,
    // X axis self-test (bit 7).
    pub x_self_test: bool,
}

impl From<u8> for AccelConfig {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<AccelConfig> for u8 {
    fn from(value: AccelConfig) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for PowerManagement1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_PWR_MGMT_1;
    const RESET_VALUE: Option<Self::Raw> = Some(0x40);
}

impl Register for GyroConfig {
    type Raw = u8;
    const ADDRESS: u8 = REG_GYRO_CONFIG;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for AccelConfig {
    type Raw = u8;
    const ADDRESS: u8 = REG_ACCEL_CONFIG;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}
