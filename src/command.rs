//! Static 16-bit opcode table for the SHT3x command set.

/// Commands understood by the sensor, encoded as big-endian 16-bit opcodes
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u16)]
pub enum Command {
    SoftReset = 0x30A2,

    // Single shot, clock stretching enabled
    SingleHighStretch = 0x2C06,
    SingleMediumStretch = 0x2C0D,
    SingleLowStretch = 0x2C10,
    // Single shot, clock stretching disabled
    SingleHigh = 0x2400,
    SingleMedium = 0x240B,
    SingleLow = 0x2416,

    // Periodic, one opcode per repeatability and measurement rate pair
    PeriodicHalfHigh = 0x2032,
    PeriodicHalfMedium = 0x2024,
    PeriodicHalfLow = 0x202F,
    PeriodicNormalHigh = 0x2130,
    PeriodicNormalMedium = 0x2126,
    PeriodicNormalLow = 0x212D,
    PeriodicDoubleHigh = 0x2236,
    PeriodicDoubleMedium = 0x2220,
    PeriodicDoubleLow = 0x222B,
    PeriodicX4High = 0x2334,
    PeriodicX4Medium = 0x2322,
    PeriodicX4Low = 0x2329,
    PeriodicX10High = 0x2737,
    PeriodicX10Medium = 0x2721,
    PeriodicX10Low = 0x272A,

    /// Fetches the latest measurement while in periodic mode
    FetchData = 0xE000,
}

impl Command {
    /// The two bytes sent over the bus for this command
    pub fn to_be_bytes(self) -> [u8; 2] {
        (self as u16).to_be_bytes()
    }

    /// Opcode that enters periodic mode at the given repeatability and rate
    pub fn periodic(repeatability: Repeatability, rate: MPS) -> Self {
        use Command::*;
        match (rate, repeatability) {
            (MPS::Half, Repeatability::High) => PeriodicHalfHigh,
            (MPS::Half, Repeatability::Medium) => PeriodicHalfMedium,
            (MPS::Half, Repeatability::Low) => PeriodicHalfLow,
            (MPS::Normal, Repeatability::High) => PeriodicNormalHigh,
            (MPS::Normal, Repeatability::Medium) => PeriodicNormalMedium,
            (MPS::Normal, Repeatability::Low) => PeriodicNormalLow,
            (MPS::Double, Repeatability::High) => PeriodicDoubleHigh,
            (MPS::Double, Repeatability::Medium) => PeriodicDoubleMedium,
            (MPS::Double, Repeatability::Low) => PeriodicDoubleLow,
            (MPS::X4, Repeatability::High) => PeriodicX4High,
            (MPS::X4, Repeatability::Medium) => PeriodicX4Medium,
            (MPS::X4, Repeatability::Low) => PeriodicX4Low,
            (MPS::X10, Repeatability::High) => PeriodicX10High,
            (MPS::X10, Repeatability::Medium) => PeriodicX10Medium,
            (MPS::X10, Repeatability::Low) => PeriodicX10Low,
        }
    }

    /// Opcode that triggers a single shot measurement
    pub fn single_shot(repeatability: Repeatability, clock_stretching: bool) -> Self {
        use Command::*;
        match (repeatability, clock_stretching) {
            (Repeatability::High, true) => SingleHighStretch,
            (Repeatability::Medium, true) => SingleMediumStretch,
            (Repeatability::Low, true) => SingleLowStretch,
            (Repeatability::High, false) => SingleHigh,
            (Repeatability::Medium, false) => SingleMedium,
            (Repeatability::Low, false) => SingleLow,
        }
    }
}

/// Determines the repeatability of the sensor, the higher it is
/// the longer a measurement takes and the less noisy it will be
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum Repeatability {
    High,
    #[default]
    Medium,
    Low,
}

/// Stands for measurements per second
#[allow(dead_code)]
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum MPS {
    Half,
    #[default]
    Normal,
    Double,
    X4,
    X10,
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Repeatability::Medium, MPS::Normal, [0x21, 0x26])]
    #[case(Repeatability::High, MPS::Half, [0x20, 0x32])]
    #[case(Repeatability::Low, MPS::X10, [0x27, 0x2A])]
    fn periodic_opcodes(
        #[case] repeatability: Repeatability,
        #[case] rate: MPS,
        #[case] expected: [u8; 2],
    ) {
        assert_eq!(Command::periodic(repeatability, rate).to_be_bytes(), expected);
    }

    #[rstest]
    #[case(Repeatability::High, true, [0x2C, 0x06])]
    #[case(Repeatability::Low, false, [0x24, 0x16])]
    fn single_shot_opcodes(
        #[case] repeatability: Repeatability,
        #[case] clock_stretching: bool,
        #[case] expected: [u8; 2],
    ) {
        assert_eq!(
            Command::single_shot(repeatability, clock_stretching).to_be_bytes(),
            expected
        );
    }

    #[test]
    fn command_encoding_is_big_endian() {
        assert_eq!(Command::SoftReset.to_be_bytes(), [0x30, 0xA2]);
        assert_eq!(Command::FetchData.to_be_bytes(), [0xE0, 0x00]);
    }
}
