//! Interface for the precompiles. It contains the precompile result type,
//! the precompile output type, and the precompile error type.
use crate::config::PrecompileConfig;
use alloy_primitives::{Address, Bytes};
use core::fmt;

/// A precompile operation result type
///
/// Returns either `Ok((gas_used, return_bytes))` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Precompile function type. Takes input, gas limit, and configuration and
/// returns precompile result.
pub type PrecompileFn = fn(&[u8], u64, &PrecompileConfig) -> PrecompileResult;

/// Precompile with address and function.
#[derive(Clone, Debug)]
pub struct PrecompileWithAddress(pub Address, pub PrecompileFn);

impl PrecompileWithAddress {
    /// Returns reference to address.
    pub fn address(&self) -> &Address {
        &self.0
    }

    /// Returns reference to precompile function.
    pub fn precompile(&self) -> &PrecompileFn {
        &self.1
    }
}

/// Precompile error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// The gas limit handed to the precompile does not cover its cost
    OutOfGas,
    /// A decoded affine point does not satisfy the curve equation
    PointNotOnCurve,
    /// A decoded point is on the curve but outside the prime-order subgroup
    PointNotInSubgroup,
    /// Non-zero padding bytes or a non-canonical field element
    InvalidElement,
    /// Malformed output encoding
    Encoding,
    /// Input length does not match the precompile's ABI
    InvalidLength,
    /// Multiexponentiation or pairing called with empty input
    EmptyInput,
    /// Scratch buffer allocation failed
    OutOfMemory,
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OutOfGas => "out of gas",
            Self::PointNotOnCurve => "point not on curve",
            Self::PointNotInSubgroup => "point not in subgroup",
            Self::InvalidElement => "invalid field element",
            Self::Encoding => "encoding error",
            Self::InvalidLength => "invalid input length",
            Self::EmptyInput => "empty input",
            Self::OutOfMemory => "out of memory",
        };
        f.write_str(s)
    }
}

/// Const function for making an address by concatenating the bytes from two given numbers.
///
/// Note that 32 + 128 = 160 = 20 bytes (the length of an address). This function is used
/// as a convenience for specifying the addresses of the various precompiles.
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}
