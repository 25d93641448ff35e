//! Multi-scalar multiplication strategies.
//!
//! Two implementations compute `sum(k_i * P_i)`: a naive loop of independent
//! multiplications used for small batches, and a Bos-Coster reduction used
//! for large ones. Bos-Coster keeps the scalars in a max-heap and repeatedly
//! rewrites the two largest entries using
//! `k1*P1 + k2*P2 = (k1 - k2)*P1 + k2*(P1 + P2)`, so the scalar magnitudes
//! collapse while only cheap point additions are performed. When the top
//! scalar dwarfs the runner-up the subtraction chain stops paying for itself
//! and the top term is multiplied out directly into a separate accumulator
//! instead.
//!
//! Both paths produce bit-identical outputs: they compute the same group
//! element and the affine encoding is canonical.
use crate::config::PrecompileConfig;
use crate::constants::{NBITS, SCALAR_LENGTH};
use crate::curve::{mul_point, Curve};
use crate::interface::PrecompileError;
use crate::scalar::Scalar;
use alloy_primitives::Bytes;

/// Largest batch handled by the naive strategy; beyond it the heap set-up
/// cost is amortized.
pub(crate) const NAIVE_MSM_MAX_PAIRS: usize = 4;

/// Validates a multiexp-style input: non-empty and a whole number of
/// point/scalar pairs. Returns the pair count.
#[inline]
pub(crate) fn validate_msm_input(input: &[u8], unit: usize) -> Result<usize, PrecompileError> {
    if input.is_empty() {
        return Err(PrecompileError::EmptyInput);
    }
    if input.len() % unit != 0 {
        return Err(PrecompileError::InvalidLength);
    }
    Ok(input.len() / unit)
}

/// A scalar paired with the index of its base point.
///
/// The heap reorders entries freely; `base_index` pins each scalar to its
/// (mutating) base in the parallel array, so
/// `sum(entries[i].k * bases[entries[i].base_index])` plus the skipped
/// accumulator stays equal to the requested sum throughout.
#[derive(Clone, Copy, Debug)]
struct MsmEntry {
    k: Scalar,
    base_index: usize,
}

/// Restores the max-heap property below `pos`.
fn sift_down(entries: &mut [MsmEntry], mut pos: usize) {
    loop {
        let left = 2 * pos + 1;
        if left >= entries.len() {
            return;
        }
        let mut child = left;
        let right = left + 1;
        if right < entries.len() && entries[child].k < entries[right].k {
            child = right;
        }
        if entries[child].k <= entries[pos].k {
            return;
        }
        entries.swap(pos, child);
        pos = child;
    }
}

/// Builds a max-heap keyed by scalar value.
fn heapify(entries: &mut [MsmEntry]) {
    for i in (0..entries.len() / 2).rev() {
        sift_down(entries, i);
    }
}

/// One Bos-Coster reduction step. Returns `false` once only a single nonzero
/// scalar remains.
fn bos_coster_round<C: Curve>(
    bases: &mut [C::Projective],
    entries: &mut [MsmEntry],
    skipped: &mut C::Projective,
    skip_threshold: u32,
) -> bool {
    // The second-largest scalar is the larger of the root's two children;
    // a missing child counts as zero.
    let mut next = 1;
    if entries.len() > 2 && entries[1].k < entries[2].k {
        next = 2;
    }

    if entries[next].k.is_zero() {
        return false;
    }
    let next_bits = entries[next].k.bits();
    let top_bits = entries[0].k.bits();

    if top_bits - next_bits > skip_threshold as usize {
        // The top scalar is at least 2^threshold times the runner-up; one
        // windowed multiplication now is cheaper than the subtraction chain
        // that would otherwise grind it down.
        let top = &entries[0];
        let term = C::mult(&bases[top.base_index], &top.k, top_bits);
        *skipped = if C::is_inf(skipped) {
            term
        } else {
            C::add_or_double(skipped, &term)
        };
        entries[0].k = Scalar::ZERO;
    } else {
        // k1 = k1 - k2
        // P2 = P1 + P2
        let top_base = entries[0].base_index;
        let next_base = entries[next].base_index;
        let next_k = entries[next].k;
        entries[0].k.sub_assign(&next_k);
        let folded = C::add_or_double(&bases[next_base], &bases[top_base]);
        bases[next_base] = folded;
    }

    sift_down(entries, 0);
    true
}

/// Naive reference strategy: each pair is decoded, multiplied over the full
/// 256-bit width and accumulated.
///
/// The caller has already validated that the input is a non-empty multiple
/// of the pair length.
pub(crate) fn msm_naive<C: Curve>(
    input: &[u8],
    config: &PrecompileConfig,
) -> Result<Bytes, PrecompileError> {
    let pair_length = C::POINT_LENGTH + SCALAR_LENGTH;
    let k = input.len() / pair_length;
    let subgroup_check = config.subgroup_check.on_arithmetic();

    let mut result = C::Projective::default();
    for i in 0..k {
        let offset = i * pair_length;
        let p_aff = C::extract(&input[offset..offset + C::POINT_LENGTH], subgroup_check)?;
        let scalar_bytes: &[u8; SCALAR_LENGTH] = input
            [offset + C::POINT_LENGTH..offset + pair_length]
            .try_into()
            .unwrap();
        let scalar = Scalar::from_be_bytes(scalar_bytes);

        let term = C::mult(&C::from_affine(&p_aff), &scalar, NBITS);
        result = C::add_or_double(&result, &term);
    }

    Ok(C::encode(&C::to_affine(&result)))
}

/// Bos-Coster strategy.
///
/// The caller has already validated that the input is a non-empty multiple
/// of the pair length; batches of one pair should take the plain
/// multiplication path instead.
pub(crate) fn msm_bos_coster<C: Curve>(
    input: &[u8],
    config: &PrecompileConfig,
) -> Result<Bytes, PrecompileError> {
    let pair_length = C::POINT_LENGTH + SCALAR_LENGTH;
    let k = input.len() / pair_length;
    debug_assert!(k >= 2);
    let subgroup_check = config.subgroup_check.on_arithmetic();

    // Scratch arrays sized by the batch; a failed reservation surfaces as an
    // error rather than an abort, and any early return below releases both.
    let mut bases: Vec<C::Projective> = Vec::new();
    bases
        .try_reserve_exact(k)
        .map_err(|_| PrecompileError::OutOfMemory)?;
    let mut entries: Vec<MsmEntry> = Vec::new();
    entries
        .try_reserve_exact(k)
        .map_err(|_| PrecompileError::OutOfMemory)?;

    for i in 0..k {
        let offset = i * pair_length;
        let p_aff = C::extract(&input[offset..offset + C::POINT_LENGTH], subgroup_check)?;
        bases.push(C::from_affine(&p_aff));

        let scalar_bytes: &[u8; SCALAR_LENGTH] = input
            [offset + C::POINT_LENGTH..offset + pair_length]
            .try_into()
            .unwrap();
        entries.push(MsmEntry {
            k: Scalar::from_be_bytes(scalar_bytes),
            base_index: i,
        });
    }

    heapify(&mut entries);

    let mut skipped = C::Projective::default();
    while bos_coster_round::<C>(&mut bases, &mut entries, &mut skipped, config.msm_skip_threshold)
    {
    }

    // Down to one nonzero scalar; multiply it out over its tight bit width
    // and fold in whatever the skip branch accumulated.
    let top = &entries[0];
    let mut result = C::mult(&bases[top.base_index], &top.k, top.k.bits());
    if !C::is_inf(&skipped) {
        result = C::add_or_double(&result, &skipped);
    }

    Ok(C::encode(&C::to_affine(&result)))
}

/// Strategy dispatch: single pairs reduce to a plain multiplication, small
/// batches to the naive loop, everything else to Bos-Coster.
pub(crate) fn msm<C: Curve>(
    input: &[u8],
    config: &PrecompileConfig,
) -> Result<Bytes, PrecompileError> {
    let pair_length = C::POINT_LENGTH + SCALAR_LENGTH;
    let k = input.len() / pair_length;

    if k == 1 {
        mul_point::<C>(input, config)
    } else if k <= NAIVE_MSM_MAX_PAIRS {
        msm_naive::<C>(input, config)
    } else {
        msm_bos_coster::<C>(input, config)
    }
}
