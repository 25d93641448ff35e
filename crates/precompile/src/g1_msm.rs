//! BLS12-381 G1 msm precompile. More details in [`g1_msm`]
use crate::config::PrecompileConfig;
use crate::constants::{G1_MSM_ADDRESS, G1_MUL_INPUT_LENGTH};
use crate::curve::{mul_point, G1};
use crate::gas::g1_msm_gas;
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};
use crate::msm::{msm, msm_bos_coster, msm_naive, validate_msm_input};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MULTIEXP precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(G1_MSM_ADDRESS, g1_msm);

/// G1 multiexponentiation call expects `160*k` bytes as an input that is
/// interpreted as byte concatenation of `k` slices each of them being a byte
/// concatenation of encoding of G1 point (`128` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiexponentiation operation result - single G1
/// point (`128` bytes).
///
/// Batches of a single pair reduce to a plain multiplication, batches of up
/// to four pairs to the naive strategy, larger ones to Bos-Coster.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiexponentiation>
pub fn g1_msm(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    validate_msm_input(input, G1_MUL_INPUT_LENGTH)?;

    let required_gas = g1_msm_gas(input.len());
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let out = msm::<G1>(input, config)?;
    Ok(PrecompileOutput::new(required_gas, out))
}

/// Forces the naive strategy regardless of batch size. Same ABI and gas as
/// [`g1_msm`]; the dispatching entry point is what hosts should register.
pub fn g1_msm_naive(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    let k = validate_msm_input(input, G1_MUL_INPUT_LENGTH)?;

    let required_gas = g1_msm_gas(input.len());
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let out = if k == 1 {
        mul_point::<G1>(input, config)?
    } else {
        msm_naive::<G1>(input, config)?
    };
    Ok(PrecompileOutput::new(required_gas, out))
}

/// Forces the Bos-Coster strategy regardless of batch size. Same ABI and gas
/// as [`g1_msm`].
pub fn g1_msm_bos_coster(
    input: &[u8],
    gas_limit: u64,
    config: &PrecompileConfig,
) -> PrecompileResult {
    let k = validate_msm_input(input, G1_MUL_INPUT_LENGTH)?;

    let required_gas = g1_msm_gas(input.len());
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let out = if k == 1 {
        mul_point::<G1>(input, config)?
    } else {
        msm_bos_coster::<G1>(input, config)?
    };
    Ok(PrecompileOutput::new(required_gas, out))
}
