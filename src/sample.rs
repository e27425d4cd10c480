//! Motion sample decoding.

use crate::error::Result;
use crate::interface::RegisterInterface;
use crate::registers::{MOTION_BLOCK_LEN, REG_ACCEL_XOUT_H};

/// One burst of raw sensor output registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// X, Y, Z acceleration in LSB.
    pub accel: [i16; 3],
    /// Die temperature in LSB.
    pub temperature: i16,
    /// X, Y, Z angular rate in LSB.
    pub gyro: [i16; 3],
}

impl RawSample {
    /// Decodes the big-endian `ACCEL_XOUT_H..=GYRO_ZOUT_L` register block.
    pub fn from_block(block: &[u8; MOTION_BLOCK_LEN]) -> Self {
        let word = |index: usize| i16::from_be_bytes([block[2 * index], block[2 * index + 1]]);

        Self {
            accel: [word(0), word(1), word(2)],
            temperature: word(3),
            gyro: [word(4), word(5), word(6)],
        }
    }

    /// Returns `[accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z]`.
    pub fn to_array(&self) -> [i16; 6] {
        let [ax, ay, az] = self.accel;
        let [gx, gy, gz] = self.gyro;
        [ax, ay, az, gx, gy, gz]
    }

    /// Die temperature in degrees Celsius.
    pub fn temperature_celsius(&self) -> f32 {
        // Register map, TEMP_OUT.
        self.temperature as f32 / 340.0 + 36.53
    }
}

/// Reads and decodes the motion register block in one transaction.
pub fn read_sample<IFACE>(interface: &mut IFACE) -> Result<RawSample, IFACE::Error>
where
    IFACE: RegisterInterface,
{
    let mut block = [0u8; MOTION_BLOCK_LEN];
    interface.read_many(REG_ACCEL_XOUT_H, &mut block)?;
    Ok(RawSample::from_block(&block))
}
