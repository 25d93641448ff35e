//! BLS12-381 G1 add precompile. More details in [`g1_add`]
use crate::config::PrecompileConfig;
use crate::constants::{G1_ADD_ADDRESS, G1_ADD_BASE_GAS_FEE, G1_ADD_INPUT_LENGTH};
use crate::curve::{add_points, G1};
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1ADD precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(G1_ADD_ADDRESS, g1_add);

/// G1 addition call expects `256` bytes as an input that is interpreted as byte
/// concatenation of two G1 points (`128` bytes each).
/// Output is an encoding of addition operation result - single G1 point (`128`
/// bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-addition>
pub fn g1_add(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    if G1_ADD_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G1_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    // NB: under the default configuration there is no subgroup check for the
    // G1 addition precompile because the check would cost more than the
    // addition itself.
    let out = add_points::<G1>(input, config)?;
    Ok(PrecompileOutput::new(G1_ADD_BASE_GAS_FEE, out))
}
