//! Raw count conversion and unit selectors.

// Constants used to convert raw counts into physical values
const CELSIUS_SLOPE: f32 = 0.00267033;
const CELSIUS_OFFSET: f32 = 45f32;
const HUMIDITY_SLOPE: f32 = 0.0015259;

/// Influences what the reported temperature numbers are
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum TemperatureScale {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Pressure units the absolute humidity estimate can be reported in
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum PressureUnit {
    #[default]
    MmHg,
    /// Same as mm Hg
    Torr,
    Pa,
    Bar,
    /// Technical atmosphere
    At,
    /// Standard atmosphere
    Atm,
    MH2O,
    Psi,
}

impl PressureUnit {
    /// Multiplier taking a pressure in mm Hg into this unit
    pub fn factor_from_mm_hg(self) -> f32 {
        match self {
            PressureUnit::MmHg | PressureUnit::Torr => 1f32,
            PressureUnit::Pa => 133.322,
            PressureUnit::Bar => 0.0013332,
            PressureUnit::At => 0.0013595,
            PressureUnit::Atm => 0.0013158,
            PressureUnit::MH2O => 0.013595,
            PressureUnit::Psi => 0.019337,
        }
    }
}

/// Converts a raw 16-bit count into degrees Celsius
pub fn raw_to_celsius(raw: u16) -> f32 {
    raw as f32 * CELSIUS_SLOPE - CELSIUS_OFFSET
}

/// Converts a raw 16-bit count into percent relative humidity
pub fn raw_to_rel_humidity(raw: u16) -> f32 {
    raw as f32 * HUMIDITY_SLOPE
}

/// Converts a Celsius temperature into the requested scale
pub fn celsius_to(celsius: f32, scale: TemperatureScale) -> f32 {
    match scale {
        TemperatureScale::Celsius => celsius,
        TemperatureScale::Fahrenheit => celsius * 1.8 + 32f32,
        TemperatureScale::Kelvin => celsius + 273.15,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, -45.0)]
    #[case(65535, 130.0)]
    fn raw_temperature_endpoints(#[case] raw: u16, #[case] expected: f32) {
        assert!((raw_to_celsius(raw) - expected).abs() < 1e-3);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(65535, 100.0)]
    fn raw_humidity_endpoints(#[case] raw: u16, #[case] expected: f32) {
        assert!((raw_to_rel_humidity(raw) - expected).abs() < 1e-3);
    }

    #[rstest]
    #[case(TemperatureScale::Celsius, 0.0)]
    #[case(TemperatureScale::Fahrenheit, 32.0)]
    #[case(TemperatureScale::Kelvin, 273.15)]
    fn scale_conversion_of_freezing_point(#[case] scale: TemperatureScale, #[case] expected: f32) {
        assert_eq!(celsius_to(0f32, scale), expected);
    }

    #[test]
    fn torr_is_an_alias_for_mm_hg() {
        assert_eq!(
            PressureUnit::Torr.factor_from_mm_hg(),
            PressureUnit::MmHg.factor_from_mm_hg()
        );
    }
}
