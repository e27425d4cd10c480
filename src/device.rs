//! High-level MPU-6050 device driver implementation.

use crate::bitfield::{read_bit, read_bits, write_bit, write_bits};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::RegisterInterface;
use crate::interface::i2c::I2cInterface;
use crate::interface::soft_i2c::{BusTransport, SoftI2cInterface};
use crate::params::{AccelRange, ClockSource, GyroRange, SlaveAddress};
use crate::registers::{
    ACONFIG_AFS_SEL,
    AccelConfig,
    EXPECTED_DEVICE_ID,
    GCONFIG_FS_SEL,
    GyroConfig,
    PWR1_CLKSEL,
    PWR1_DEVICE_RESET_BIT,
    PWR1_SLEEP_BIT,
    PowerManagement1,
    REG_ACCEL_CONFIG,
    REG_GYRO_CONFIG,
    REG_PWR_MGMT_1,
    REG_WHO_AM_I,
    Register,
    WHO_AM_I_ID,
};
use crate::sample::{RawSample, read_sample};
use embedded_hal::i2c::I2c;

/// High-level synchronous driver for the MPU-6050.
pub struct Mpu6050<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Mpu6050<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// Nothing is sent to the device until [`init`](Self::init) or another
    /// operation is called.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<BUS> Mpu6050<SoftI2cInterface<BUS>>
where
    BUS: BusTransport,
{
    // ==================================================================
    // == Primitive Bus Convenience Constructors ========================
    // ==================================================================
    /// Convenience constructor for a host-supplied primitive bus transport.
    pub fn new_soft_i2c(bus: BUS, address: SlaveAddress, config: Config) -> Self {
        Self::new(SoftI2cInterface::new(bus, address), config)
    }

    /// Releases the driver, returning the transport and configuration.
    pub fn release_soft_i2c(self) -> (BUS, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<I2C> Mpu6050<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Peripheral Convenience Constructors =======================
    // ==================================================================
    /// Convenience constructor for `embedded-hal` I2C peripherals.
    pub fn new_i2c(i2c: I2C, address: SlaveAddress, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Mpu6050<IFACE>
where
    IFACE: RegisterInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration ==========================
    // ==================================================================
    /// Powers on and prepares the device for general use.
    ///
    /// Applies the current configuration: clock source, gyroscope range,
    /// accelerometer range and finally the sleep bit, in that order. With the
    /// default configuration this selects the X gyroscope PLL, ±250 °/s, ±2 g
    /// and wakes the device.
    pub fn init(&mut self) -> Result<(), CommE> {
        let config = self.config;
        self.configure(config)
    }

    /// Applies a new configuration to the device.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        config.validate().map_err(|_| Error::InvalidConfig)?;

        self.set_clock_source(config.clock_source)?;
        self.set_gyro_range(config.gyro_range)?;
        self.set_accel_range(config.accel_range)?;
        self.set_sleep_enabled(config.sleep)?;
        Ok(())
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sets `PWR_MGMT_1.DEVICE_RESET`, returning every register to its reset value.
    ///
    /// The device comes back asleep on its internal oscillator; call
    /// [`init`](Self::init) afterwards to restore the configuration.
    ///
    /// [`config`](Self::config) is left untouched and keeps describing the last
    /// configuration written, not the reset state the device is now in.
    pub fn reset(&mut self) -> Result<(), CommE> {
        write_bit(&mut self.interface, REG_PWR_MGMT_1, PWR1_DEVICE_RESET_BIT, true)
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Reads the six identity bits of `WHO_AM_I`.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        read_bits(&mut self.interface, REG_WHO_AM_I, WHO_AM_I_ID)
    }

    /// Returns `true` when the device answers with the expected identity.
    ///
    /// A failed read is reported as `false` rather than as an error.
    pub fn test_connection(&mut self) -> bool {
        match self.device_id() {
            Ok(id) if id == EXPECTED_DEVICE_ID => true,
            Ok(id) => {
                debug!("unexpected device id {=u8:#x}", id);
                false
            }
            Err(_) => {
                debug!("device id read failed");
                false
            }
        }
    }

    // ==================================================================
    // == Power & Measurement Configuration =============================
    // ==================================================================
    /// Reads the selected clock source.
    pub fn clock_source(&mut self) -> Result<ClockSource, CommE> {
        let bits = read_bits(&mut self.interface, REG_PWR_MGMT_1, PWR1_CLKSEL)?;
        Ok(ClockSource::from_bits(bits))
    }

    /// Selects the clock source.
    ///
    /// Upon power up the device runs from its internal oscillator; a gyroscope
    /// referenced PLL is recommended for stability.
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), CommE> {
        if source == ClockSource::Reserved {
            return Err(Error::InvalidConfig);
        }

        write_bits(&mut self.interface, REG_PWR_MGMT_1, PWR1_CLKSEL, source.bits())?;
        self.config.clock_source = source;
        Ok(())
    }

    /// Reads the gyroscope full-scale range.
    pub fn gyro_range(&mut self) -> Result<GyroRange, CommE> {
        let bits = read_bits(&mut self.interface, REG_GYRO_CONFIG, GCONFIG_FS_SEL)?;
        Ok(GyroRange::from_bits(bits))
    }

    /// Sets the gyroscope full-scale range.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), CommE> {
        write_bits(&mut self.interface, REG_GYRO_CONFIG, GCONFIG_FS_SEL, range.bits())?;
        self.config.gyro_range = range;
        Ok(())
    }

    /// Reads the accelerometer full-scale range.
    pub fn accel_range(&mut self) -> Result<AccelRange, CommE> {
        let bits = read_bits(&mut self.interface, REG_ACCEL_CONFIG, ACONFIG_AFS_SEL)?;
        Ok(AccelRange::from_bits(bits))
    }

    /// Sets the accelerometer full-scale range.
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), CommE> {
        write_bits(&mut self.interface, REG_ACCEL_CONFIG, ACONFIG_AFS_SEL, range.bits())?;
        self.config.accel_range = range;
        Ok(())
    }

    /// Returns whether the device is in low power sleep mode.
    pub fn sleep_enabled(&mut self) -> Result<bool, CommE> {
        read_bit(&mut self.interface, REG_PWR_MGMT_1, PWR1_SLEEP_BIT)
    }

    /// Enters or leaves low power sleep mode.
    ///
    /// In sleep only the serial interface and the registers stay active.
    pub fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), CommE> {
        write_bit(&mut self.interface, REG_PWR_MGMT_1, PWR1_SLEEP_BIT, enabled)?;
        self.config.sleep = enabled;
        Ok(())
    }

    // ==================================================================
    // == Register Snapshots ============================================
    // ==================================================================
    /// Reads the whole `PWR_MGMT_1` register.
    pub fn power_management(&mut self) -> Result<PowerManagement1, CommE> {
        self.read_snapshot()
    }

    /// Reads the whole `GYRO_CONFIG` register.
    pub fn gyro_config(&mut self) -> Result<GyroConfig, CommE> {
        self.read_snapshot()
    }

    /// Reads the whole `ACCEL_CONFIG` register.
    pub fn accel_config(&mut self) -> Result<AccelConfig, CommE> {
        self.read_snapshot()
    }

    fn read_snapshot<R>(&mut self) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8>,
    {
        let raw = self.interface.read_register(R::ADDRESS)?;
        Ok(R::from(raw))
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads accelerometer, temperature and gyroscope outputs in one burst.
    pub fn read_sample(&mut self) -> Result<RawSample, CommE> {
        read_sample(&mut self.interface)
    }

    /// Reads `[accel_x, accel_y, accel_z, gyro_x, gyro_y, gyro_z]` in LSB.
    pub fn read_raw_sample(&mut self) -> Result<[i16; 6], CommE> {
        Ok(self.read_sample()?.to_array())
    }
}
