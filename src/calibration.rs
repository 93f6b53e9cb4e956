//! Per-channel affine correction applied after raw conversion.

/// Linear correction for one physical channel, `value * factor + shift`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalibrationFactors {
    pub factor: f32,
    pub shift: f32,
}

impl Default for CalibrationFactors {
    /// The identity correction
    fn default() -> Self {
        Self {
            factor: 1f32,
            shift: 0f32,
        }
    }
}

impl CalibrationFactors {
    pub fn new(factor: f32, shift: f32) -> Self {
        Self { factor, shift }
    }

    /// Applies the correction to an already converted physical value
    pub fn apply(&self, value: f32) -> f32 {
        value * self.factor + self.shift
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-45.0)]
    #[case(0.0)]
    #[case(23.47)]
    #[case(130.0)]
    fn default_factors_are_identity(#[case] value: f32) {
        assert_eq!(CalibrationFactors::default().apply(value), value);
    }

    #[test]
    fn factors_apply_linearly() {
        let factors = CalibrationFactors::new(2.0, 5.0);
        assert_eq!(factors.apply(10.0), 25.0);
        assert_eq!(factors.apply(-1.0), 3.0);
    }
}
