//! Absolute humidity estimation from temperature and relative humidity.

use crate::units::{celsius_to, TemperatureScale};

/*
 *  Factors for the poly used to estimate absolute humidity (in Torr):
 *  P = RelativeHumidity * sum(ABS_HUMIDITY_POLY[i] * T^i)
 *  where P is absolute humidity (Torr / mm Hg),
 *  T is temperature (Kelvin) / 1000.
 *  For more data, check the NIST chemistry webbook:
 *  http://webbook.nist.gov/cgi/cbook.cgi?ID=C7732185&Units=SI&Mask=4&Type=ANTOINE&Plot=on#ANTOINE
 */
const ABS_HUMIDITY_POLY: [f32; 6] = [
    -157.004,
    3158.0474,
    -25482.532,
    103180.197,
    -209805.497,
    171539.883,
];

/// Estimates the water vapor pressure in mm Hg from the current temperature
/// and relative humidity. Only valid over the poly's fitted temperature
/// range, roughly indoor conditions; out of range inputs are not rejected.
pub fn vapor_pressure_mm_hg(celsius: f32, rel_humidity: f32) -> f32 {
    let scaled_kelvin = celsius_to(celsius, TemperatureScale::Kelvin) / 1000f32;

    let pressure: f32 = ABS_HUMIDITY_POLY
        .iter()
        .enumerate()
        .map(|(power, factor)| factor * scaled_kelvin.powi(power as i32))
        .sum();

    pressure * rel_humidity
}
