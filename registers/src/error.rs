use crate::RegisterAddress;

#[derive(displaydoc::Display, Debug, Clone, PartialEq)]
pub enum RegisterError {
    /// invalid register address: `{0}`
    InvalidAddress(u16),
    /// register `{0}` has no fixed-point scaling
    UnknownScaling(RegisterAddress),
    /// value {value} does not fit in a Q{qval} fixed-point register
    ValueOutOfRange { value: f64, qval: u8 },
    /// unknown register name: `{0}`
    UnknownName(String),
}

impl std::error::Error for RegisterError {}
