//! Register values for the x-IMU configuration interface.
//!
//! Registers are addressed by [`RegisterAddress`] and hold a raw 16-bit value. Most of them store
//! a physical quantity as signed fixed point, in the format given by [`Qval`]. [`RegisterData`]
//! ties the two together and converts between raw and scaled values.
//!
//! Framing, transport and byte order are left to the caller.

mod address;
mod error;
pub mod fixed_float;
mod qval;
mod register_data;

pub use address::RegisterAddress;
pub use error::RegisterError;
pub use fixed_float::{fixed_to_float, float_to_fixed, float_to_fixed_with, OverflowPolicy};
pub use qval::Qval;
pub use register_data::RegisterData;
