//! BLS12-381 G2 mul precompile. More details in [`g2_mul`]
use crate::config::PrecompileConfig;
use crate::constants::{G2_MUL_ADDRESS, G2_MUL_BASE_GAS_FEE, G2_MUL_INPUT_LENGTH};
use crate::curve::{mul_point, G2};
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MUL precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(G2_MUL_ADDRESS, g2_mul);

/// G2 multiplication call expects `288` bytes as an input that is interpreted
/// as byte concatenation of encoding of G2 point (`256` bytes) and encoding of
/// a scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G2 point
/// (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiplication>
pub fn g2_mul(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    if G2_MUL_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G2_MUL_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let out = mul_point::<G2>(input, config)?;
    Ok(PrecompileOutput::new(G2_MUL_BASE_GAS_FEE, out))
}
