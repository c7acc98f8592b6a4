//! The device register map.
//!
//! Every configuration register is identified by a 16-bit code. The set of codes is closed:
//! anything not listed here is rejected with [`RegisterError::InvalidAddress`].

use crate::{Qval, RegisterError};
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

macro_rules! register_map {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$doc:meta])*
                $variant:ident = $code:literal
            ),*,
        }
    ) => {
        $(#[$attr])*
        #[repr(u16)]
        $vis enum $name {
            $(
                $(#[$doc])*
                $variant = $code
            ),*,
        }

        impl $name {
            /// Every register in the map, in address order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub const fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant)),*,
                    _ => None,
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*,
                }
            }
        }
    };
}

register_map! {
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
    pub enum RegisterAddress {
        /// Firmware major version number. Read only.
        FirmVersionMajorNum = 0,
        /// Firmware minor version number. Read only.
        FirmVersionMinorNum = 1,
        DeviceId = 2,
        ButtonMode = 3,
        BattSensitivity = 4,
        BattBias = 5,
        ThermSensitivity = 6,
        ThermBias = 7,
        /// Gyroscope full-scale range selector.
        GyroFullScale = 8,
        GyroSensitivityX = 9,
        GyroSensitivityY = 10,
        GyroSensitivityZ = 11,
        GyroSampledPlus200dpsX = 12,
        GyroSampledPlus200dpsY = 13,
        GyroSampledPlus200dpsZ = 14,
        GyroSampledMinus200dpsX = 15,
        GyroSampledMinus200dpsY = 16,
        GyroSampledMinus200dpsZ = 17,
        /// Gyroscope bias at 25 °C.
        GyroBiasX = 18,
        GyroBiasY = 19,
        GyroBiasZ = 20,
        /// Gyroscope bias temperature sensitivity.
        GyroBiasTempSensX = 21,
        GyroBiasTempSensY = 22,
        GyroBiasTempSensZ = 23,
        /// Temperature at which the first gyroscope bias sample was taken.
        GyroSample1Temp = 24,
        GyroSample1BiasX = 25,
        GyroSample1BiasY = 26,
        GyroSample1BiasZ = 27,
        /// Temperature at which the second gyroscope bias sample was taken.
        GyroSample2Temp = 28,
        GyroSample2BiasX = 29,
        GyroSample2BiasY = 30,
        GyroSample2BiasZ = 31,
        /// Accelerometer full-scale range selector.
        AccelFullScale = 32,
        AccelSensitivityX = 33,
        AccelSensitivityY = 34,
        AccelSensitivityZ = 35,
        AccelBiasX = 36,
        AccelBiasY = 37,
        AccelBiasZ = 38,
        AccelSampledPlus1gX = 39,
        AccelSampledPlus1gY = 40,
        AccelSampledPlus1gZ = 41,
        AccelSampledMinus1gX = 42,
        AccelSampledMinus1gY = 43,
        AccelSampledMinus1gZ = 44,
        /// Magnetometer full-scale range selector.
        MagFullScale = 45,
        MagSensitivityX = 46,
        MagSensitivityY = 47,
        MagSensitivityZ = 48,
        MagBiasX = 49,
        MagBiasY = 50,
        MagBiasZ = 51,
        MagHardIronBiasX = 52,
        MagHardIronBiasY = 53,
        MagHardIronBiasZ = 54,
        AlgorithmMode = 55,
        /// AHRS algorithm proportional gain.
        AlgorithmKp = 56,
        /// AHRS algorithm integral gain.
        AlgorithmKi = 57,
        /// AHRS proportional gain used during initialisation.
        AlgorithmInitKp = 58,
        /// Duration of the AHRS initialisation period in seconds.
        AlgorithmInitPeriod = 59,
        AlgorithmMinValidMag = 60,
        AlgorithmMaxValidMag = 61,
        /// Tare quaternion, element 0.
        TareQuat0 = 62,
        TareQuat1 = 63,
        TareQuat2 = 64,
        TareQuat3 = 65,
        SensorDataMode = 66,
        DateTimeDataRate = 67,
        BattAndThermDataRate = 68,
        InertialAndMagDataRate = 69,
        QuatDataRate = 70,
        SdCardNewFileName = 71,
        /// Battery voltage below which the device powers itself down.
        BattShutdownVoltage = 72,
        SleepTimer = 73,
        MotionTrigWakeUp = 74,
        BluetoothPower = 75,
        AuxiliaryPortMode = 76,
        DigitalIoDirection = 77,
        DigitalIoDataRate = 78,
        AnalogueInputDataMode = 79,
        AnalogueInputDataRate = 80,
        AnalogueInputSensitivity = 81,
        AnalogueInputBias = 82,
        PwmOutputFrequency = 83,
        Adxl345BusDataMode = 84,
        Adxl345BusDataRate = 85,
        UartMode = 86,
        UartBaudRate = 87,
        UartHardwareFlowControl = 88,
    }
}

impl RegisterAddress {
    /// Whether `code` names a register in the map.
    pub const fn is_valid(code: u16) -> bool {
        Self::from_code(code).is_some()
    }

    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The fixed-point format of this register, if its value is a scaled quantity.
    pub fn qval(self) -> Result<Qval, RegisterError> {
        Qval::lookup(self)
    }
}

impl Default for RegisterAddress {
    fn default() -> Self {
        Self::FirmVersionMajorNum
    }
}

impl Display for RegisterAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<RegisterAddress> for u16 {
    fn from(address: RegisterAddress) -> Self {
        address.code()
    }
}

impl TryFrom<u16> for RegisterAddress {
    type Error = RegisterError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RegisterError::InvalidAddress(code))
    }
}

impl FromStr for RegisterAddress {
    type Err = RegisterError;

    /// Parses a register name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|address| address.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RegisterError::UnknownName(s.to_owned()))
    }
}
