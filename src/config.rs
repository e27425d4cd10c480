//! Configuration primitives for the MPU-6050 driver.

use crate::params::{AccelRange, ClockSource, GyroRange};

/// User-facing configuration for the MPU-6050 sensor.
///
/// The default is the power-on setup applied by
/// [`Mpu6050::init`](crate::device::Mpu6050::init): PLL referenced to the X
/// gyroscope, the most sensitive ranges, and sleep cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Clock source selection.
    pub clock_source: ClockSource,
    /// Gyroscope full-scale range.
    pub gyro_range: GyroRange,
    /// Accelerometer full-scale range.
    pub accel_range: AccelRange,
    /// Low power sleep mode.
    pub sleep: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid according to datasheet rules.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.clock_source == ClockSource::Reserved {
            return Err(ConfigError::ReservedClockSource);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the clock source.
    pub fn clock_source(mut self, clock_source: ClockSource) -> Self {
        self.config.clock_source = clock_source;
        self
    }

    /// Overrides the gyroscope full-scale range.
    pub fn gyro_range(mut self, gyro_range: GyroRange) -> Self {
        self.config.gyro_range = gyro_range;
        self
    }

    /// Overrides the accelerometer full-scale range.
    pub fn accel_range(mut self, accel_range: AccelRange) -> Self {
        self.config.accel_range = accel_range;
        self
    }

    /// Leaves the device in sleep mode after configuration.
    pub fn sleep(mut self, sleep: bool) -> Self {
        self.config.sleep = sleep;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_source: ClockSource::PllXGyro,
            gyro_range: GyroRange::Dps250,
            accel_range: AccelRange::G2,
            sleep: false,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `CLKSEL = 6` is reserved by the datasheet.
    ReservedClockSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::new()
            .gyro_range(GyroRange::Dps2000)
            .accel_range(AccelRange::G16)
            .sleep(true)
            .build();

        assert_eq!(config.clock_source, ClockSource::PllXGyro);
        assert_eq!(config.gyro_range, GyroRange::Dps2000);
        assert_eq!(config.accel_range, AccelRange::G16);
        assert!(config.sleep);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn reserved_clock_source_is_rejected() {
        let config = Config::new().clock_source(ClockSource::Reserved).build();
        assert_eq!(config.validate(), Err(ConfigError::ReservedClockSource));
    }
}
