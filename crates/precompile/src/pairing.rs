//! BLS12-381 pairing precompile. More details in [`pairing`]
use crate::blst as crypto_backend;
use crate::config::PrecompileConfig;
use crate::constants::{
    PADDED_G1_LENGTH, PAIRING_ADDRESS, PAIRING_INPUT_LENGTH,
};
use crate::gas::pairing_gas;
use crate::interface::{PrecompileError, PrecompileOutput, PrecompileResult, PrecompileWithAddress};
use alloy_primitives::B256;
use blst::blst_fp12;

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_PAIRING precompile.
pub const PRECOMPILE: PrecompileWithAddress = PrecompileWithAddress(PAIRING_ADDRESS, pairing);

/// Pairing call expects `384*k` (`k` being a positive integer) bytes as an
/// input that is interpreted as byte concatenation of `k` slices. Each slice
/// has the following structure:
///    * `128` bytes of G1 point encoding
///    * `256` bytes of G2 point encoding
///
/// Each point is expected to be in the subgroup of order `q`; this is the one
/// precompile where the subgroup check is unconditional.
/// Output is `32` bytes where first `31` bytes are equal to `0x00` and the
/// last byte is `0x01` if pairing result is equal to the multiplicative
/// identity in a pairing target field and `0x00` otherwise.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-pairing>
pub fn pairing(input: &[u8], gas_limit: u64, _config: &PrecompileConfig) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 {
        return Err(PrecompileError::EmptyInput);
    }
    if input_len % PAIRING_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidLength);
    }

    let required_gas = pairing_gas(input_len);
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    // Decode each slice and fold its miller loop straight into the running
    // Fp12 product; nothing is buffered. Infinity members contribute the
    // identity, so they need no special handling here. Both points of every
    // slice must pass the subgroup check, even next to an infinity partner.
    let mut product: Option<blst_fp12> = None;
    for slice in input.chunks_exact(PAIRING_INPUT_LENGTH) {
        let (g1_bytes, g2_bytes) = slice.split_at(PADDED_G1_LENGTH);
        let p1_aff = crypto_backend::extract_g1_input(g1_bytes, true)?;
        let p2_aff = crypto_backend::extract_g2_input(g2_bytes, true)?;

        let term = crypto_backend::miller_loop(&p1_aff, &p2_aff);
        product = Some(match product {
            Some(acc) => crypto_backend::fp12_accumulate(&acc, &term),
            None => term,
        });
    }

    // The length checks above guarantee at least one slice was folded.
    let paired_to_identity = product.map_or(false, |acc| crypto_backend::final_exp_is_one(&acc));

    Ok(PrecompileOutput::new(
        required_gas,
        B256::with_last_byte(paired_to_identity as u8).into(),
    ))
}
