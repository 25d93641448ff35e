//! Utilities for removing the zero padding EIP-2537 inputs carry.
use crate::constants::{FP_LENGTH, PADDED_FP_LENGTH, PADDING_LENGTH};
use crate::interface::PrecompileError;

/// Splits a padded encoding into its `N` field-element magnitudes.
///
/// Every wire object is a run of 64-byte elements, each carrying 16 zero
/// bytes of padding in front of a 48-byte magnitude: one element for an Fp,
/// two for a G1 point, four for a G2 point. Any set padding bit anywhere in
/// the run rejects the whole object.
pub(crate) fn remove_padding<const N: usize>(
    input: &[u8],
) -> Result<[&[u8; FP_LENGTH]; N], PrecompileError> {
    if input.len() != N * PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidLength);
    }

    let padding_is_zero = input
        .chunks_exact(PADDED_FP_LENGTH)
        .all(|element| element[..PADDING_LENGTH].iter().all(|&byte| byte == 0));
    if !padding_is_zero {
        return Err(PrecompileError::InvalidElement);
    }

    let mut magnitudes = [&[0u8; FP_LENGTH]; N];
    for (i, magnitude) in magnitudes.iter_mut().enumerate() {
        let start = i * PADDED_FP_LENGTH + PADDING_LENGTH;
        *magnitude = input[start..start + FP_LENGTH].try_into().unwrap();
    }
    Ok(magnitudes)
}
