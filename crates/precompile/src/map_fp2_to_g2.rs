//! BLS12-381 map fp2 to g2 precompile. More details in [`map_fp2_to_g2`]
use crate::blst as crypto_backend;
use crate::config::PrecompileConfig;
use crate::constants::{MAP_FP2_TO_G2_ADDRESS, MAP_FP2_TO_G2_BASE_GAS_FEE, PADDED_FP2_LENGTH};
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_MAP_FP2_TO_G2 precompile.
pub const PRECOMPILE: PrecompileWithAddress =
    PrecompileWithAddress(MAP_FP2_TO_G2_ADDRESS, map_fp2_to_g2);

/// Field-to-curve call expects `128` bytes as an input that is interpreted as
/// an element of Fp2. Output of this call is `256` bytes and is an encoded G2
/// point.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp2-element-to-g2-point>
pub fn map_fp2_to_g2(input: &[u8], gas_limit: u64, _config: &PrecompileConfig) -> PrecompileResult {
    if MAP_FP2_TO_G2_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != PADDED_FP2_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let fp2 = crypto_backend::extract_fp2(input)?;
    let p_aff = crypto_backend::map_fp2_to_g2(&fp2);

    Ok(PrecompileOutput::new(
        MAP_FP2_TO_G2_BASE_GAS_FEE,
        crypto_backend::encode_g2_point(&p_aff).into(),
    ))
}
