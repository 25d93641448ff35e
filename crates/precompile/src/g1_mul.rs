//! BLS12-381 G1 mul precompile. More details in [`g1_mul`]
use crate::config::PrecompileConfig;
use crate::constants::{G1_MUL_ADDRESS, G1_MUL_BASE_GAS_FEE, G1_MUL_INPUT_LENGTH};
use crate::curve::{mul_point, G1};
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MUL precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(G1_MUL_ADDRESS, g1_mul);

/// G1 multiplication call expects `160` bytes as an input that is interpreted
/// as byte concatenation of encoding of G1 point (`128` bytes) and encoding of
/// a scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G1 point
/// (`128` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiplication>
pub fn g1_mul(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    if G1_MUL_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G1_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let out = mul_point::<G1>(input, config)?;
    Ok(PrecompileOutput::new(G1_MUL_BASE_GAS_FEE, out))
}
