//! BLS12-381 map fp to g1 precompile. More details in [`map_fp_to_g1`]
use crate::blst as crypto_backend;
use crate::config::PrecompileConfig;
use crate::constants::{MAP_FP_TO_G1_ADDRESS, MAP_FP_TO_G1_BASE_GAS_FEE, PADDED_FP_LENGTH};
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_MAP_FP_TO_G1 precompile.
pub const PRECOMPILE: PrecompileWithAddress =
    PrecompileWithAddress(MAP_FP_TO_G1_ADDRESS, map_fp_to_g1);

/// Field-to-curve call expects `64` bytes as an input that is interpreted as
/// an element of Fp. Output of this call is `128` bytes and is an encoded G1
/// point.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp-element-to-g1-point>
pub fn map_fp_to_g1(input: &[u8], gas_limit: u64, _config: &PrecompileConfig) -> PrecompileResult {
    if MAP_FP_TO_G1_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let fp = crypto_backend::extract_fp(input)?;
    let p_aff = crypto_backend::map_fp_to_g1(&fp);

    Ok(PrecompileOutput::new(
        MAP_FP_TO_G1_BASE_GAS_FEE,
        crypto_backend::encode_g1_point(&p_aff).into(),
    ))
}
