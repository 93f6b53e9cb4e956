pub mod calibration;
pub mod command;
pub mod error;
pub mod humidity;
pub mod timing;
pub mod tolerance;
pub mod units;

use calibration::CalibrationFactors;
use command::{Command, Repeatability, MPS};
use crc::{Algorithm, Crc};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use error::{Result, SHTError};
use tolerance::SensorVariant;
use units::{PressureUnit, TemperatureScale};

pub mod prelude {
    pub use super::{
        calibration::CalibrationFactors, command::Repeatability, command::MPS,
        tolerance::SensorVariant, units::PressureUnit, units::TemperatureScale, DeviceAddr, SHT3x,
    };
}

const CRC_ALGORITHM: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0x00,
    residue: 0x00,
};

/// Settling time after a soft reset, the sensor ignores commands until
/// it has elapsed
const SOFT_RESET_DELAY_MS: u32 = 2;

/// The temperature and humidity sensor
#[derive(Clone, Debug)]
pub struct SHT3x<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    variant: SensorVariant,
    repeatability: Repeatability,
    rate: MPS,
    temperature: f32,
    rel_humidity: f32,
    temperature_calibration: CalibrationFactors,
    rel_humidity_calibration: CalibrationFactors,
}

/// The two supported I2C addresses
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum DeviceAddr {
    #[default]
    AD0 = 0x44,
    AD1 = 0x45,
}

fn merge_bytes(a: u8, b: u8) -> u16 {
    ((a as u16) << 8) | b as u16
}

fn verify_data(buffer: [u8; 6]) -> Result<()> {
    let crc = Crc::<u8>::new(&CRC_ALGORITHM);

    let mut temp_digest = crc.digest();
    temp_digest.update(&[buffer[0], buffer[1]]);
    let temp_result = temp_digest.finalize();
    if temp_result != buffer[2] {
        return Err(SHTError::InvalidTemperatureChecksumError {
            bytes_start: buffer[0],
            bytes_end: buffer[1],
            expected_checksum: buffer[2],
            calculated_checksum: temp_result,
        });
    }

    let mut humidity_digest = crc.digest();
    humidity_digest.update(&[buffer[3], buffer[4]]);
    let humidity_result = humidity_digest.finalize();
    if humidity_result != buffer[5] {
        return Err(SHTError::InvalidHumidityChecksumError {
            bytes_start: buffer[3],
            bytes_end: buffer[4],
            expected_checksum: buffer[5],
            calculated_checksum: humidity_result,
        });
    }

    Ok(())
}

impl<I2C, D> SHT3x<I2C, D> {
    /// Merges two bytes so the result is both, ex merge_bytes(0x20, 0x33) = 0x2033
    fn merge_bytes(a: u8, b: u8) -> u16 {
        merge_bytes(a, b)
    }

    /// Verifies both data words of a frame against their checksums
    fn verify_data(buffer: [u8; 6]) -> Result<()> {
        verify_data(buffer)
    }
}

#[allow(dead_code)]
impl<I2C, D> SHT3x<I2C, D>
where
    I2C: i2c::WriteRead + i2c::Write,
    D: DelayMs<u32>,
{
    /// Create a new sensor driver over the given bus and delay provider.
    /// I2C clock frequency must be between 0 and 1000 kHz
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            address: DeviceAddr::default() as u8,
            variant: SensorVariant::default(),
            repeatability: Repeatability::default(),
            rate: MPS::default(),
            temperature: 0f32,
            rel_humidity: 0f32,
            temperature_calibration: CalibrationFactors::default(),
            rel_humidity_calibration: CalibrationFactors::default(),
        }
    }

    /// Change the sensor's I2C address
    pub fn with_address(mut self, address: DeviceAddr) -> Self {
        self.address = address as u8;
        self
    }

    /// Select which member of the sensor family is attached, this only
    /// influences the tolerance queries
    pub fn with_variant(mut self, variant: SensorVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Change the repeatability, which also influences how long a
    /// measurement takes
    pub fn with_repeatability(mut self, repeatability: Repeatability) -> Self {
        self.set_repeatability(repeatability);
        self
    }

    /// Change the repeatability, which also influences how long a
    /// measurement takes
    pub fn set_repeatability(&mut self, repeatability: Repeatability) {
        self.repeatability = repeatability;
    }

    /// Change how often the sensor self-triggers in periodic mode
    pub fn with_rate(mut self, rate: MPS) -> Self {
        self.set_rate(rate);
        self
    }

    /// Change how often the sensor self-triggers in periodic mode
    pub fn set_rate(&mut self, rate: MPS) {
        self.rate = rate;
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    fn command(&mut self, command: Command) -> Result<()> {
        match self.i2c.write(self.address, &command.to_be_bytes()) {
            Ok(res) => Ok(res),
            Err(_) => Err(SHTError::WriteI2CError),
        }
    }

    fn command_read(&mut self, command: Command, buffer: &mut [u8]) -> Result<()> {
        match self
            .i2c
            .write_read(self.address, &command.to_be_bytes(), buffer)
        {
            Ok(res) => Ok(res),
            Err(_) => Err(SHTError::WriteReadI2CError),
        }
    }

    /// Resets the sensor and blocks through its settling time, after which
    /// it is back in single shot mode with default settings
    pub fn soft_reset(&mut self) -> Result<()> {
        self.command(Command::SoftReset)?;
        self.delay.delay_ms(SOFT_RESET_DELAY_MS);
        Ok(())
    }

    /// Puts the sensor into periodic mode at the configured repeatability
    /// and rate. An error means the transport rejected the command and
    /// further reads are pointless
    pub fn initialise(&mut self) -> Result<()> {
        self.command(Command::periodic(self.repeatability, self.rate))
    }

    /// Runs one read cycle: fetches the latest periodic measurement,
    /// validates both checksums and replaces the cached pair. On any error
    /// the cached values stay exactly as they were, so a caller that
    /// ignores the returned status keeps serving the last good reading
    pub fn update_data(&mut self) -> Result<()> {
        let mut buffer = [0; 6];
        self.command_read(Command::FetchData, &mut buffer)?;
        Self::verify_data(buffer)?;

        let raw_temperature = Self::merge_bytes(buffer[0], buffer[1]);
        let raw_rel_humidity = Self::merge_bytes(buffer[3], buffer[4]);

        // Calibration applies once, after conversion; both channels commit
        // together from the same frame
        self.temperature = self
            .temperature_calibration
            .apply(units::raw_to_celsius(raw_temperature));
        self.rel_humidity = self
            .rel_humidity_calibration
            .apply(units::raw_to_rel_humidity(raw_rel_humidity));

        Ok(())
    }

    /// The last valid temperature reading in the requested scale
    pub fn temperature(&self, scale: TemperatureScale) -> f32 {
        units::celsius_to(self.temperature, scale)
    }

    /// The last valid relative humidity reading in percent
    pub fn rel_humidity(&self) -> f32 {
        self.rel_humidity
    }

    /// Replace the temperature calibration, effective from the next read cycle
    pub fn set_temperature_calibration(&mut self, factors: CalibrationFactors) {
        self.temperature_calibration = factors;
    }

    /// Replace the humidity calibration, effective from the next read cycle
    pub fn set_rel_humidity_calibration(&mut self, factors: CalibrationFactors) {
        self.rel_humidity_calibration = factors;
    }

    /// Estimated absolute humidity in the requested pressure unit,
    /// derived from the cached readings
    pub fn abs_humidity(&self, unit: PressureUnit) -> f32 {
        humidity::vapor_pressure_mm_hg(self.temperature, self.rel_humidity)
            * unit.factor_from_mm_hg()
    }

    /// Manufacturer accuracy band around the cached temperature reading
    pub fn temp_tolerance(&self, scale: TemperatureScale) -> f32 {
        tolerance::temperature(self.variant, scale, self.temperature)
    }

    /// Manufacturer accuracy band around the cached humidity reading
    pub fn rel_hum_tolerance(&self) -> f32 {
        tolerance::rel_humidity(self.variant, self.rel_humidity)
    }
}
