//! Group abstraction over G1 and G2.
//!
//! The add, mul and multiexp entries are byte-for-byte identical between the
//! two groups apart from point types, wire lengths and which blst routines
//! get called. The [`Curve`] trait captures exactly that surface so each
//! operation is written once.
use crate::blst as crypto_backend;
use crate::config::PrecompileConfig;
use crate::constants::{NBITS, PADDED_G1_LENGTH, PADDED_G2_LENGTH, SCALAR_LENGTH};
use crate::interface::PrecompileError;
use crate::scalar::Scalar;
use alloy_primitives::Bytes;
use blst::{blst_p1, blst_p1_affine, blst_p2, blst_p2_affine};

/// The per-group operations the precompile envelope needs.
pub(crate) trait Curve {
    /// Canonical wire representation; the codec accepts and produces this.
    type Affine: Copy + Default;
    /// Working representation for addition chains; cheap to add, zeroed value
    /// is the point at infinity.
    type Projective: Copy + Default;

    /// Padded wire length of one encoded point.
    const POINT_LENGTH: usize;

    /// Decodes a padded point, enforcing padding, canonical coordinates and
    /// the curve equation. Subgroup membership is only verified when
    /// requested.
    fn extract(input: &[u8], subgroup_check: bool) -> Result<Self::Affine, PrecompileError>;
    /// Encodes a point into its padded wire form.
    fn encode(point: &Self::Affine) -> Bytes;

    fn from_affine(point: &Self::Affine) -> Self::Projective;
    fn to_affine(point: &Self::Projective) -> Self::Affine;
    fn add_or_double(a: &Self::Projective, b: &Self::Projective) -> Self::Projective;
    fn add_or_double_affine(a: &Self::Projective, b: &Self::Affine) -> Self::Projective;
    /// Scalar multiplication over the lowest `nbits` bits of the scalar.
    fn mult(point: &Self::Projective, scalar: &Scalar, nbits: usize) -> Self::Projective;
    fn is_inf(point: &Self::Projective) -> bool;
}

/// The BLS12-381 curve group over Fp.
#[derive(Debug)]
pub(crate) struct G1;

/// The prime-order group on the twist over Fp2.
#[derive(Debug)]
pub(crate) struct G2;

impl Curve for G1 {
    type Affine = blst_p1_affine;
    type Projective = blst_p1;

    const POINT_LENGTH: usize = PADDED_G1_LENGTH;

    fn extract(input: &[u8], subgroup_check: bool) -> Result<Self::Affine, PrecompileError> {
        crypto_backend::extract_g1_input(input, subgroup_check)
    }

    fn encode(point: &Self::Affine) -> Bytes {
        crypto_backend::encode_g1_point(point).into()
    }

    fn from_affine(point: &Self::Affine) -> Self::Projective {
        crypto_backend::p1_from_affine(point)
    }

    fn to_affine(point: &Self::Projective) -> Self::Affine {
        crypto_backend::p1_to_affine(point)
    }

    fn add_or_double(a: &Self::Projective, b: &Self::Projective) -> Self::Projective {
        crypto_backend::p1_add_or_double(a, b)
    }

    fn add_or_double_affine(a: &Self::Projective, b: &Self::Affine) -> Self::Projective {
        crypto_backend::p1_add_or_double_affine(a, b)
    }

    fn mult(point: &Self::Projective, scalar: &Scalar, nbits: usize) -> Self::Projective {
        crypto_backend::p1_mult(point, &scalar.to_le_bytes(), nbits)
    }

    fn is_inf(point: &Self::Projective) -> bool {
        crypto_backend::p1_is_inf(point)
    }
}

impl Curve for G2 {
    type Affine = blst_p2_affine;
    type Projective = blst_p2;

    const POINT_LENGTH: usize = PADDED_G2_LENGTH;

    fn extract(input: &[u8], subgroup_check: bool) -> Result<Self::Affine, PrecompileError> {
        crypto_backend::extract_g2_input(input, subgroup_check)
    }

    fn encode(point: &Self::Affine) -> Bytes {
        crypto_backend::encode_g2_point(point).into()
    }

    fn from_affine(point: &Self::Affine) -> Self::Projective {
        crypto_backend::p2_from_affine(point)
    }

    fn to_affine(point: &Self::Projective) -> Self::Affine {
        crypto_backend::p2_to_affine(point)
    }

    fn add_or_double(a: &Self::Projective, b: &Self::Projective) -> Self::Projective {
        crypto_backend::p2_add_or_double(a, b)
    }

    fn add_or_double_affine(a: &Self::Projective, b: &Self::Affine) -> Self::Projective {
        crypto_backend::p2_add_or_double_affine(a, b)
    }

    fn mult(point: &Self::Projective, scalar: &Scalar, nbits: usize) -> Self::Projective {
        crypto_backend::p2_mult(point, &scalar.to_le_bytes(), nbits)
    }

    fn is_inf(point: &Self::Projective) -> bool {
        crypto_backend::p2_is_inf(point)
    }
}

/// Shared body of the g1_add/g2_add entries: decode two points, add, encode.
///
/// The caller has already validated the total input length.
pub(crate) fn add_points<C: Curve>(
    input: &[u8],
    config: &PrecompileConfig,
) -> Result<Bytes, PrecompileError> {
    let subgroup_check = config.subgroup_check.on_arithmetic();
    let a_aff = C::extract(&input[..C::POINT_LENGTH], subgroup_check)?;
    let b_aff = C::extract(&input[C::POINT_LENGTH..], subgroup_check)?;

    // One of the inputs needs to be projective for the mixed addition.
    let b = C::from_affine(&b_aff);
    let p = C::add_or_double_affine(&b, &a_aff);

    Ok(C::encode(&C::to_affine(&p)))
}

/// Shared body of the g1_mul/g2_mul entries and of the single-pair multiexp
/// case: decode a point and a scalar, multiply over the full 256-bit width,
/// encode.
pub(crate) fn mul_point<C: Curve>(
    input: &[u8],
    config: &PrecompileConfig,
) -> Result<Bytes, PrecompileError> {
    let subgroup_check = config.subgroup_check.on_arithmetic();
    let p_aff = C::extract(&input[..C::POINT_LENGTH], subgroup_check)?;
    let scalar_bytes: &[u8; SCALAR_LENGTH] = input[C::POINT_LENGTH..].try_into().unwrap();
    let scalar = Scalar::from_be_bytes(scalar_bytes);

    // The wire scalar is unreduced, so the full width is processed even when
    // the value is small.
    let p = C::mult(&C::from_affine(&p_aff), &scalar, NBITS);

    Ok(C::encode(&C::to_affine(&p)))
}
