//! Manufacturer accuracy bands for the supported sensor variants.
//!
//! Both models are piecewise linear in the current reading, taken from the
//! accuracy plots in the SHT3x datasheet. They answer "how far off can this
//! reading be", they never trigger a measurement themselves.

use crate::units::TemperatureScale;

/// The supported members of the sensor family, each with its own
/// accuracy bands
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum SensorVariant {
    #[default]
    Sht30,
    Sht31,
    Sht35,
}

/// Temperature tolerance for the given variant at the given Celsius reading.
///
/// The band is derived in Celsius; for Fahrenheit only the slope is
/// rescaled by 1.8, matching the datasheet's treatment.
pub fn temperature(variant: SensorVariant, scale: TemperatureScale, celsius: f32) -> f32 {
    let tolerance = match variant {
        SensorVariant::Sht30 => {
            if (0.0..=65.0).contains(&celsius) {
                0.2
            } else if celsius > 65.0 {
                // Linear from 0.2 at 65 C to 0.6 at 125 C
                0.0067 * celsius - 0.2333
            } else {
                // Linear from 0.6 at -40 C to 0.2 at 0 C
                -0.01 * celsius + 0.2
            }
        }
        SensorVariant::Sht31 => {
            if (0.0..=90.0).contains(&celsius) {
                0.2
            } else if celsius > 90.0 {
                // Linear from 0.2 at 90 C to 0.5 at 125 C
                0.0086 * celsius - 0.5714
            } else {
                // Linear from 0.3 at -40 C to 0.2 at 0 C
                -0.0025 * celsius + 0.2
            }
        }
        SensorVariant::Sht35 => {
            if celsius <= 0.0 {
                0.2
            } else if celsius <= 20.0 {
                // Linear from 0.2 at 0 C to 0.1 at 20 C
                -0.005 * celsius + 0.2
            } else if celsius <= 60.0 {
                0.1
            } else if celsius <= 90.0 {
                -0.0033 * celsius - 0.1
            } else {
                // Linear from 0.2 at 90 C to 0.4 at 125 C
                0.0057 * celsius - 0.3143
            }
        }
    };

    match scale {
        TemperatureScale::Fahrenheit => tolerance * 1.8,
        _ => tolerance,
    }
}

/// Relative humidity tolerance for the given variant at the given
/// percentage reading
pub fn rel_humidity(variant: SensorVariant, rel_humidity: f32) -> f32 {
    match variant {
        SensorVariant::Sht30 => {
            if (10.0..=90.0).contains(&rel_humidity) {
                2.0
            } else if rel_humidity < 10.0 {
                // Linear from 4 at 0% to 2 at 10%
                -0.2 * rel_humidity + 4.0
            } else {
                // Linear from 2 at 90% to 4 at 100%
                0.2 * rel_humidity - 16.0
            }
        }
        SensorVariant::Sht31 => 2.0,
        SensorVariant::Sht35 => {
            if rel_humidity <= 80.0 {
                1.5
            } else {
                // Linear from 1.5 at 80% to 2 at 100%
                0.025 * rel_humidity - 0.5
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    // The segments are fitted independently, so the joints only agree to a
    // couple of millikelvin
    const JOINT_EPSILON: f32 = 5e-3;

    #[rstest]
    #[case(0.0)]
    #[case(65.0)]
    fn sht30_temperature_segments_meet_at_breakpoints(#[case] celsius: f32) {
        let below = temperature(SensorVariant::Sht30, TemperatureScale::Celsius, celsius - 1e-3);
        let above = temperature(SensorVariant::Sht30, TemperatureScale::Celsius, celsius + 1e-3);
        assert!((below - above).abs() < JOINT_EPSILON);
    }

    #[rstest]
    #[case(SensorVariant::Sht30, -40.0, 0.6)]
    #[case(SensorVariant::Sht30, 30.0, 0.2)]
    #[case(SensorVariant::Sht31, -40.0, 0.3)]
    #[case(SensorVariant::Sht31, 90.0, 0.2)]
    #[case(SensorVariant::Sht35, 40.0, 0.1)]
    #[case(SensorVariant::Sht35, 125.0, 0.4)]
    fn temperature_band_values(
        #[case] variant: SensorVariant,
        #[case] celsius: f32,
        #[case] expected: f32,
    ) {
        let tolerance = temperature(variant, TemperatureScale::Celsius, celsius);
        assert!((tolerance - expected).abs() < JOINT_EPSILON);
    }

    #[test]
    fn fahrenheit_rescales_the_slope() {
        let celsius = temperature(SensorVariant::Sht30, TemperatureScale::Celsius, 25.0);
        let fahrenheit = temperature(SensorVariant::Sht30, TemperatureScale::Fahrenheit, 25.0);
        assert_eq!(fahrenheit, celsius * 1.8);
    }

    #[rstest]
    #[case(SensorVariant::Sht30, 0.0, 4.0)]
    #[case(SensorVariant::Sht30, 50.0, 2.0)]
    #[case(SensorVariant::Sht30, 100.0, 4.0)]
    #[case(SensorVariant::Sht31, 5.0, 2.0)]
    #[case(SensorVariant::Sht31, 95.0, 2.0)]
    #[case(SensorVariant::Sht35, 80.0, 1.5)]
    #[case(SensorVariant::Sht35, 100.0, 2.0)]
    fn humidity_band_values(
        #[case] variant: SensorVariant,
        #[case] rh: f32,
        #[case] expected: f32,
    ) {
        assert!((rel_humidity(variant, rh) - expected).abs() < 1e-5);
    }
}
