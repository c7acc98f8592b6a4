use crate::fixed_float::{fixed_to_float, float_to_fixed_with, OverflowPolicy};
use crate::{Qval, RegisterAddress, RegisterError};
use core::fmt::{self, Display, Formatter};
use log::trace;

/// The value of a single device register.
///
/// The raw value is the 16-bit pattern exchanged with the device. For registers holding a
/// scaled physical quantity it is a signed fixed-point number whose format is given by the
/// register's [`Qval`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RegisterData {
    address: RegisterAddress,
    value: u16,
}

impl RegisterData {
    pub fn new(address: RegisterAddress, value: u16) -> Self {
        Self { address, value }
    }

    /// Creates a register value from a numeric register code, which must be in the register map.
    pub fn from_code(code: u16, value: u16) -> Result<Self, RegisterError> {
        Ok(Self::new(RegisterAddress::try_from(code)?, value))
    }

    /// Creates a register value by encoding `scaled_value` in the register's fixed-point format.
    pub fn with_scaled_value(
        address: RegisterAddress,
        scaled_value: f64,
    ) -> Result<Self, RegisterError> {
        let value = encode(address, scaled_value, OverflowPolicy::Reject)?;
        Ok(Self::new(address, value))
    }

    pub fn from_code_with_scaled_value(
        code: u16,
        scaled_value: f64,
    ) -> Result<Self, RegisterError> {
        Self::with_scaled_value(RegisterAddress::try_from(code)?, scaled_value)
    }

    pub fn address(&self) -> RegisterAddress {
        self.address
    }

    /// Changes the register this value belongs to. The raw value is kept as it is.
    pub fn set_address(&mut self, address: RegisterAddress) {
        self.address = address;
    }

    /// Like [`set_address`](Self::set_address), but from a numeric code. On error the record is
    /// left unchanged.
    pub fn set_address_code(&mut self, code: u16) -> Result<(), RegisterError> {
        self.address = RegisterAddress::try_from(code)?;
        Ok(())
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn set_value(&mut self, value: u16) {
        self.value = value;
    }

    pub fn qval(&self) -> Result<Qval, RegisterError> {
        Qval::lookup(self.address)
    }

    /// The raw value interpreted as fixed point in the register's format.
    pub fn scaled_value(&self) -> Result<f64, RegisterError> {
        let q = self.qval()?.fractional_bits();
        // The raw value is the two's complement bit pattern of the fixed-point number.
        Ok(fixed_to_float(self.value as i16, q))
    }

    pub fn set_scaled_value(&mut self, scaled_value: f64) -> Result<(), RegisterError> {
        self.set_scaled_value_with(scaled_value, OverflowPolicy::Reject)
    }

    /// Encodes `scaled_value` into the raw value. On error the record is left unchanged.
    pub fn set_scaled_value_with(
        &mut self,
        scaled_value: f64,
        policy: OverflowPolicy,
    ) -> Result<(), RegisterError> {
        self.value = encode(self.address, scaled_value, policy)?;
        Ok(())
    }
}

fn encode(
    address: RegisterAddress,
    scaled_value: f64,
    policy: OverflowPolicy,
) -> Result<u16, RegisterError> {
    let q = Qval::lookup(address)?.fractional_bits();
    let fixed = float_to_fixed_with(scaled_value, q, policy)?;
    trace!("Encoded {} as {} for {}", scaled_value, fixed, address);
    Ok(fixed as u16)
}

impl Display for RegisterData {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({}) = {}", self.address, self.address.code(), self.value)
    }
}
