//! BLS12-381 G2 msm precompile. More details in [`g2_msm`]
use crate::config::PrecompileConfig;
use crate::constants::{G2_MSM_ADDRESS, G2_MUL_INPUT_LENGTH};
use crate::curve::{mul_point, G2};
use crate::gas::g2_msm_gas;
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};
use crate::msm::{msm, msm_bos_coster, msm_naive, validate_msm_input};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MULTIEXP precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(G2_MSM_ADDRESS, g2_msm);

/// G2 multiexponentiation call expects `288*k` bytes as an input that is
/// interpreted as byte concatenation of `k` slices each of them being a byte
/// concatenation of encoding of G2 point (`256` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiexponentiation operation result - single G2
/// point (`256` bytes).
///
/// Strategy dispatch is identical to the G1 variant.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiexponentiation>
pub fn g2_msm(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    validate_msm_input(input, G2_MUL_INPUT_LENGTH)?;

    let required_gas = g2_msm_gas(input.len());
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let out = msm::<G2>(input, config)?;
    Ok(PrecompileOutput::new(required_gas, out))
}

/// Forces the naive strategy regardless of batch size. Same ABI and gas as
/// [`g2_msm`]; the dispatching entry point is what hosts should register.
pub fn g2_msm_naive(input: &[u8], gas_limit: u64, config: &PrecompileConfig) -> PrecompileResult {
    let k = validate_msm_input(input, G2_MUL_INPUT_LENGTH)?;

    let required_gas = g2_msm_gas(input.len());
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let out = if k == 1 {
        mul_point::<G2>(input, config)?
    } else {
        msm_naive::<G2>(input, config)?
    };
    Ok(PrecompileOutput::new(required_gas, out))
}

/// Forces the Bos-Coster strategy regardless of batch size. Same ABI and gas
/// as [`g2_msm`].
pub fn g2_msm_bos_coster(
    input: &[u8],
    gas_limit: u64,
    config: &PrecompileConfig,
) -> PrecompileResult {
    let k = validate_msm_input(input, G2_MUL_INPUT_LENGTH)?;

    let required_gas = g2_msm_gas(input.len());
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let out = if k == 1 {
        mul_point::<G2>(input, config)?
    } else {
        msm_bos_coster::<G2>(input, config)?
    };
    Ok(PrecompileOutput::new(required_gas, out))
}
