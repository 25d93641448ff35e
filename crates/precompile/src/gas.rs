//! Gas schedule for the nine precompiles.
//!
//! Every function here is a pure function of the raw input length; pricing a
//! call never requires parsing its payload.
use crate::constants::{
    DISCOUNT_TABLE, G1_ADD_BASE_GAS_FEE, G1_MUL_BASE_GAS_FEE, G1_MUL_INPUT_LENGTH,
    G2_ADD_BASE_GAS_FEE, G2_MUL_BASE_GAS_FEE, G2_MUL_INPUT_LENGTH, MAP_FP2_TO_G2_BASE_GAS_FEE,
    MAP_FP_TO_G1_BASE_GAS_FEE, MSM_MULTIPLIER, PAIRING_INPUT_LENGTH, PAIRING_MULTIPLIER_BASE,
    PAIRING_OFFSET_BASE,
};

/// Implements the gas schedule for G1/G2 multiexponentiation: `k` scalar
/// multiplications priced at the group's base cost, discounted by the table
/// entry for `k` (clamped at 128 pairs).
#[inline]
pub fn msm_required_gas(k: usize, multiplication_cost: u64) -> u64 {
    if k == 0 {
        return 0;
    }

    let index = core::cmp::min(k - 1, DISCOUNT_TABLE.len() - 1);
    let discount = DISCOUNT_TABLE[index] as u64;

    (k as u64 * discount * multiplication_cost) / MSM_MULTIPLIER
}

/// G1ADD gas cost.
#[inline]
pub const fn g1_add_gas() -> u64 {
    G1_ADD_BASE_GAS_FEE
}

/// G1MUL gas cost.
#[inline]
pub const fn g1_mul_gas() -> u64 {
    G1_MUL_BASE_GAS_FEE
}

/// G1MULTIEXP gas cost for the given input length.
#[inline]
pub fn g1_msm_gas(input_len: usize) -> u64 {
    msm_required_gas(input_len / G1_MUL_INPUT_LENGTH, G1_MUL_BASE_GAS_FEE)
}

/// G2ADD gas cost.
#[inline]
pub const fn g2_add_gas() -> u64 {
    G2_ADD_BASE_GAS_FEE
}

/// G2MUL gas cost.
#[inline]
pub const fn g2_mul_gas() -> u64 {
    G2_MUL_BASE_GAS_FEE
}

/// G2MULTIEXP gas cost for the given input length.
#[inline]
pub fn g2_msm_gas(input_len: usize) -> u64 {
    msm_required_gas(input_len / G2_MUL_INPUT_LENGTH, G2_MUL_BASE_GAS_FEE)
}

/// Pairing gas cost for the given input length.
#[inline]
pub fn pairing_gas(input_len: usize) -> u64 {
    let k = (input_len / PAIRING_INPUT_LENGTH) as u64;
    if k == 0 {
        return 0;
    }
    k * PAIRING_MULTIPLIER_BASE + PAIRING_OFFSET_BASE
}

/// MAP_FP_TO_G1 gas cost.
#[inline]
pub const fn map_fp_to_g1_gas() -> u64 {
    MAP_FP_TO_G1_BASE_GAS_FEE
}

/// MAP_FP2_TO_G2 gas cost.
#[inline]
pub const fn map_fp2_to_g2_gas() -> u64 {
    MAP_FP2_TO_G2_BASE_GAS_FEE
}
