//! Fixed-point formats used by the device.
//!
//! Each `Qval` names a physical-quantity family and carries the number of fractional bits the
//! firmware uses for it. These numbers are part of the wire contract: changing one silently
//! corrupts every scaled read and write of the registers in that family.

use crate::{RegisterAddress, RegisterError};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Qval {
    CalibratedBatt,
    CalibratedTherm,
    CalibratedGyro,
    CalibratedAccel,
    CalibratedMag,
    Quaternion,
    BattSensitivity,
    BattBias,
    ThermSensitivity,
    ThermBias,
    GyroSensitivity,
    GyroBias,
    GyroBiasTempSens,
    AccelSensitivity,
    AccelBias,
    MagSensitivity,
    MagBias,
    MagHardIronBias,
    AlgorithmKp,
    AlgorithmKi,
    AlgorithmInitKp,
    AlgorithmInitPeriod,
    CalibratedAnalogueInput,
    CalibratedAdxl345,
}

impl Qval {
    /// Number of fractional bits in the signed 16-bit encoding.
    pub const fn fractional_bits(self) -> u8 {
        match self {
            Self::CalibratedBatt => 12,
            Self::CalibratedTherm => 8,
            Self::CalibratedGyro => 4,
            Self::CalibratedAccel => 11,
            Self::CalibratedMag => 11,
            Self::Quaternion => 15,
            Self::BattSensitivity => 5,
            Self::BattBias => 8,
            Self::ThermSensitivity => 6,
            Self::ThermBias => 0,
            Self::GyroSensitivity => 7,
            Self::GyroBias => 3,
            Self::GyroBiasTempSens => 11,
            Self::AccelSensitivity => 4,
            Self::AccelBias => 8,
            Self::MagSensitivity => 4,
            Self::MagBias => 8,
            Self::MagHardIronBias => 11,
            Self::AlgorithmKp => 11,
            Self::AlgorithmKi => 15,
            Self::AlgorithmInitKp => 11,
            Self::AlgorithmInitPeriod => 11,
            Self::CalibratedAnalogueInput => 12,
            Self::CalibratedAdxl345 => 10,
        }
    }

    /// Largest magnitude representable in this format, `i16::MAX / 2^q`.
    pub fn max_value(self) -> f64 {
        crate::fixed_to_float(i16::MAX, self.fractional_bits())
    }

    /// The format of a register, or `None` if its value is not a scaled quantity.
    pub const fn for_address(address: RegisterAddress) -> Option<Self> {
        use RegisterAddress::*;

        Some(match address {
            BattSensitivity => Self::BattSensitivity,
            BattBias => Self::BattBias,
            BattShutdownVoltage => Self::CalibratedBatt,
            ThermSensitivity => Self::ThermSensitivity,
            ThermBias => Self::ThermBias,
            GyroSample1Temp | GyroSample2Temp => Self::CalibratedTherm,
            GyroSensitivityX | GyroSensitivityY | GyroSensitivityZ => Self::GyroSensitivity,
            GyroBiasX | GyroBiasY | GyroBiasZ => Self::GyroBias,
            GyroSample1BiasX | GyroSample1BiasY | GyroSample1BiasZ => Self::GyroBias,
            GyroSample2BiasX | GyroSample2BiasY | GyroSample2BiasZ => Self::GyroBias,
            GyroBiasTempSensX | GyroBiasTempSensY | GyroBiasTempSensZ => Self::GyroBiasTempSens,
            AccelSensitivityX | AccelSensitivityY | AccelSensitivityZ => Self::AccelSensitivity,
            AccelBiasX | AccelBiasY | AccelBiasZ => Self::AccelBias,
            MagSensitivityX | MagSensitivityY | MagSensitivityZ => Self::MagSensitivity,
            MagBiasX | MagBiasY | MagBiasZ => Self::MagBias,
            MagHardIronBiasX | MagHardIronBiasY | MagHardIronBiasZ => Self::MagHardIronBias,
            AlgorithmKp => Self::AlgorithmKp,
            AlgorithmKi => Self::AlgorithmKi,
            AlgorithmInitKp => Self::AlgorithmInitKp,
            AlgorithmInitPeriod => Self::AlgorithmInitPeriod,
            AlgorithmMinValidMag | AlgorithmMaxValidMag => Self::CalibratedMag,
            TareQuat0 | TareQuat1 | TareQuat2 | TareQuat3 => Self::Quaternion,
            _ => return None,
        })
    }

    pub fn lookup(address: RegisterAddress) -> Result<Self, RegisterError> {
        Self::for_address(address).ok_or(RegisterError::UnknownScaling(address))
    }
}
