//! BLS12-381 G2 add precompile. More details in [`g2_add`]
use crate::config::PrecompileConfig;
use crate::constants::{G2_ADD_ADDRESS, G2_ADD_BASE_GAS_FEE, G2_ADD_INPUT_LENGTH};
use crate::curve::{add_points, G2};
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2ADD precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(G2_ADD_ADDRESS, g2_add);

/// G2 addition call expects `512` bytes as an input that is interpreted as byte
/// concatenation of two G2 points (`256` bytes each).
/// Output is an encoding of addition operation result - single G2 point (`256`
/// bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-addition>
pub fn g2_add(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    if G2_ADD_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G2_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let out = add_points::<G2>(input, config)?;
    Ok(PrecompileOutput::new(G2_ADD_BASE_GAS_FEE, out))
}
