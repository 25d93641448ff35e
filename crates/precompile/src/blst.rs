//! Safe wrapper around the blst library.
//!
//! This module is the only place that talks to the external BLS12-381
//! implementation; everything above it works on wire bytes and on the opaque
//! blst point types these wrappers hand out.
use crate::constants::{
    FP_LENGTH, MODULUS_REPR, PADDED_FP_LENGTH, PADDED_G1_LENGTH, PADDED_G2_LENGTH, PADDING_LENGTH,
    SCALAR_LENGTH,
};
use crate::interface::PrecompileError;
use crate::utils::remove_padding;
use blst::{
    blst_bendian_from_fp, blst_final_exp, blst_fp, blst_fp12, blst_fp12_is_one, blst_fp12_mul,
    blst_fp2, blst_fp_from_bendian, blst_map_to_g1, blst_map_to_g2, blst_miller_loop, blst_p1,
    blst_p1_add_or_double, blst_p1_add_or_double_affine, blst_p1_affine, blst_p1_affine_in_g1,
    blst_p1_affine_on_curve, blst_p1_from_affine, blst_p1_is_inf, blst_p1_mult, blst_p1_to_affine,
    blst_p2, blst_p2_add_or_double, blst_p2_add_or_double_affine, blst_p2_affine,
    blst_p2_affine_in_g2, blst_p2_affine_on_curve, blst_p2_from_affine, blst_p2_is_inf,
    blst_p2_mult, blst_p2_to_affine,
};

/// Converts a 48-byte big-endian magnitude into a canonical field element.
///
/// Fixed-width big-endian order coincides with numeric order, so the
/// canonicity bound is a plain array comparison against the modulus.
fn fp_from_bendian(input: &[u8; FP_LENGTH]) -> Result<blst_fp, PrecompileError> {
    if *input >= MODULUS_REPR {
        return Err(PrecompileError::InvalidElement);
    }
    let mut fp = blst_fp::default();
    // SAFETY: input has fixed length, and fp is a blst value.
    unsafe {
        blst_fp_from_bendian(&mut fp, input.as_ptr());
    }
    Ok(fp)
}

/// Encodes a single finite field element into a 64-byte slot, left padding
/// included.
fn fp_to_bytes(out: &mut [u8], input: &blst_fp) {
    debug_assert_eq!(out.len(), PADDED_FP_LENGTH);
    out[..PADDING_LENGTH].fill(0);
    // SAFETY: the tail of the slot is exactly 48 bytes, input is a blst value.
    unsafe { blst_bendian_from_fp(out[PADDING_LENGTH..].as_mut_ptr(), input) };
}

/// Extracts an Fp element from a 64-byte padded slice.
pub(crate) fn extract_fp(input: &[u8]) -> Result<blst_fp, PrecompileError> {
    let [magnitude] = remove_padding::<1>(input)?;
    fp_from_bendian(magnitude)
}

/// Extracts an Fp2 element from a 128-byte padded slice.
pub(crate) fn extract_fp2(input: &[u8]) -> Result<blst_fp2, PrecompileError> {
    let c0 = extract_fp(&input[..PADDED_FP_LENGTH])?;
    let c1 = extract_fp(&input[PADDED_FP_LENGTH..])?;
    Ok(blst_fp2 { fp: [c0, c1] })
}

/// Extracts a G1 point in affine format from a 128-byte padded slice.
///
/// Both coordinate encodings all-zero decodes to the point at infinity; any
/// other decoded pair must satisfy the curve equation. Subgroup membership is
/// verified only when `subgroup_check` is set: the pairing requires it while
/// the arithmetic precompiles of the original proposal do not.
pub(crate) fn extract_g1_input(
    input: &[u8],
    subgroup_check: bool,
) -> Result<blst_p1_affine, PrecompileError> {
    let [x_bytes, y_bytes] = remove_padding::<2>(input)?;

    let x_is_zero = x_bytes.iter().all(|&b| b == 0);
    let y_is_zero = y_bytes.iter().all(|&b| b == 0);
    let x = fp_from_bendian(x_bytes)?;
    let y = fp_from_bendian(y_bytes)?;

    if x_is_zero && y_is_zero {
        return Ok(blst_p1_affine::default());
    }

    let out = blst_p1_affine { x, y };
    // SAFETY: out is a blst value.
    if unsafe { !blst_p1_affine_on_curve(&out) } {
        return Err(PrecompileError::PointNotOnCurve);
    }
    if subgroup_check {
        // SAFETY: out is a blst value.
        if unsafe { !blst_p1_affine_in_g1(&out) } {
            return Err(PrecompileError::PointNotInSubgroup);
        }
    }
    Ok(out)
}

/// Extracts a G2 point in affine format from a 256-byte padded slice.
pub(crate) fn extract_g2_input(
    input: &[u8],
    subgroup_check: bool,
) -> Result<blst_p2_affine, PrecompileError> {
    let [x0_bytes, x1_bytes, y0_bytes, y1_bytes] = remove_padding::<4>(input)?;

    let is_zero = [x0_bytes, x1_bytes, y0_bytes, y1_bytes]
        .iter()
        .all(|fp| fp.iter().all(|&b| b == 0));
    let x0 = fp_from_bendian(x0_bytes)?;
    let x1 = fp_from_bendian(x1_bytes)?;
    let y0 = fp_from_bendian(y0_bytes)?;
    let y1 = fp_from_bendian(y1_bytes)?;

    if is_zero {
        return Ok(blst_p2_affine::default());
    }

    let out = blst_p2_affine {
        x: blst_fp2 { fp: [x0, x1] },
        y: blst_fp2 { fp: [y0, y1] },
    };
    // SAFETY: out is a blst value.
    if unsafe { !blst_p2_affine_on_curve(&out) } {
        return Err(PrecompileError::PointNotOnCurve);
    }
    if subgroup_check {
        // SAFETY: out is a blst value.
        if unsafe { !blst_p2_affine_in_g2(&out) } {
            return Err(PrecompileError::PointNotInSubgroup);
        }
    }
    Ok(out)
}

/// Encodes a G1 point in affine format into a padded byte array.
pub(crate) fn encode_g1_point(input: &blst_p1_affine) -> [u8; PADDED_G1_LENGTH] {
    let mut out = [0u8; PADDED_G1_LENGTH];
    fp_to_bytes(&mut out[..PADDED_FP_LENGTH], &input.x);
    fp_to_bytes(&mut out[PADDED_FP_LENGTH..], &input.y);
    out
}

/// Encodes a G2 point in affine format into a padded byte array.
pub(crate) fn encode_g2_point(input: &blst_p2_affine) -> [u8; PADDED_G2_LENGTH] {
    let mut out = [0u8; PADDED_G2_LENGTH];
    fp_to_bytes(&mut out[..PADDED_FP_LENGTH], &input.x.fp[0]);
    fp_to_bytes(
        &mut out[PADDED_FP_LENGTH..2 * PADDED_FP_LENGTH],
        &input.x.fp[1],
    );
    fp_to_bytes(
        &mut out[2 * PADDED_FP_LENGTH..3 * PADDED_FP_LENGTH],
        &input.y.fp[0],
    );
    fp_to_bytes(&mut out[3 * PADDED_FP_LENGTH..], &input.y.fp[1]);
    out
}

pub(crate) fn p1_to_affine(p: &blst_p1) -> blst_p1_affine {
    let mut p_affine = blst_p1_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_to_affine(&mut p_affine, p) };
    p_affine
}

pub(crate) fn p1_from_affine(p_affine: &blst_p1_affine) -> blst_p1 {
    let mut p = blst_p1::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_from_affine(&mut p, p_affine) };
    p
}

pub(crate) fn p1_add_or_double(a: &blst_p1, b: &blst_p1) -> blst_p1 {
    let mut result = blst_p1::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p1_add_or_double(&mut result, a, b) };
    result
}

pub(crate) fn p1_add_or_double_affine(a: &blst_p1, b: &blst_p1_affine) -> blst_p1 {
    let mut result = blst_p1::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p1_add_or_double_affine(&mut result, a, b) };
    result
}

/// Multiplies a G1 point by a little-endian scalar, processing `nbits` bits.
pub(crate) fn p1_mult(p: &blst_p1, scalar_le: &[u8; SCALAR_LENGTH], nbits: usize) -> blst_p1 {
    let mut result = blst_p1::default();
    // SAFETY: all inputs are valid blst types, scalar_le holds at least nbits bits
    unsafe { blst_p1_mult(&mut result, p, scalar_le.as_ptr(), nbits) };
    result
}

pub(crate) fn p1_is_inf(p: &blst_p1) -> bool {
    // SAFETY: p is a valid blst type
    unsafe { blst_p1_is_inf(p) }
}

pub(crate) fn p2_to_affine(p: &blst_p2) -> blst_p2_affine {
    let mut p_affine = blst_p2_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_to_affine(&mut p_affine, p) };
    p_affine
}

pub(crate) fn p2_from_affine(p_affine: &blst_p2_affine) -> blst_p2 {
    let mut p = blst_p2::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_from_affine(&mut p, p_affine) };
    p
}

pub(crate) fn p2_add_or_double(a: &blst_p2, b: &blst_p2) -> blst_p2 {
    let mut result = blst_p2::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p2_add_or_double(&mut result, a, b) };
    result
}

pub(crate) fn p2_add_or_double_affine(a: &blst_p2, b: &blst_p2_affine) -> blst_p2 {
    let mut result = blst_p2::default();
    // SAFETY: all inputs are valid blst types
    unsafe { blst_p2_add_or_double_affine(&mut result, a, b) };
    result
}

/// Multiplies a G2 point by a little-endian scalar, processing `nbits` bits.
pub(crate) fn p2_mult(p: &blst_p2, scalar_le: &[u8; SCALAR_LENGTH], nbits: usize) -> blst_p2 {
    let mut result = blst_p2::default();
    // SAFETY: all inputs are valid blst types, scalar_le holds at least nbits bits
    unsafe { blst_p2_mult(&mut result, p, scalar_le.as_ptr(), nbits) };
    result
}

pub(crate) fn p2_is_inf(p: &blst_p2) -> bool {
    // SAFETY: p is a valid blst type
    unsafe { blst_p2_is_inf(p) }
}

/// Maps a field element to a G1 point
///
/// Takes a field element (blst_fp) and returns the corresponding G1 point in
/// affine form
pub(crate) fn map_fp_to_g1(fp: &blst_fp) -> blst_p1_affine {
    let mut p = blst_p1::default();
    // SAFETY: `p` and `fp` are blst values
    // Third argument is unused if null
    unsafe { blst_map_to_g1(&mut p, fp, core::ptr::null()) };
    p1_to_affine(&p)
}

/// Maps a field element to a G2 point
///
/// Takes a field element (blst_fp2) and returns the corresponding G2 point in
/// affine form
pub(crate) fn map_fp2_to_g2(fp2: &blst_fp2) -> blst_p2_affine {
    let mut p = blst_p2::default();
    // SAFETY: `p` and `fp2` are blst values
    // Third argument is unused if null
    unsafe { blst_map_to_g2(&mut p, fp2, core::ptr::null()) };
    p2_to_affine(&p)
}

/// Miller loop over one (G1, G2) pair.
///
/// Infinity on either side yields the Fp12 identity, so degenerate pairs
/// vanish from a product of loop results without special casing.
pub(crate) fn miller_loop(g1: &blst_p1_affine, g2: &blst_p2_affine) -> blst_fp12 {
    let mut out = blst_fp12::default();
    // SAFETY: all arguments are valid blst types
    unsafe { blst_miller_loop(&mut out, g2, g1) }
    out
}

/// Folds a further miller-loop result into a running Fp12 product.
pub(crate) fn fp12_accumulate(acc: &blst_fp12, term: &blst_fp12) -> blst_fp12 {
    let mut out = blst_fp12::default();
    // SAFETY: all arguments are valid blst types
    unsafe { blst_fp12_mul(&mut out, acc, term) }
    out
}

/// Applies the final exponentiation and reports whether the outcome is the
/// multiplicative identity, i.e. whether the paired product vanished.
pub(crate) fn final_exp_is_one(f: &blst_fp12) -> bool {
    let mut exponentiated = blst_fp12::default();
    // SAFETY: all arguments are valid blst types
    unsafe {
        blst_final_exp(&mut exponentiated, f);
        blst_fp12_is_one(&exponentiated)
    }
}

#[cfg(test)]
pub(crate) fn p1_generator() -> blst_p1 {
    // SAFETY: blst returns a pointer to its static generator value
    unsafe { *blst::blst_p1_generator() }
}

#[cfg(test)]
pub(crate) fn p2_generator() -> blst_p2 {
    // SAFETY: blst returns a pointer to its static generator value
    unsafe { *blst::blst_p2_generator() }
}
