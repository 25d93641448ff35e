//! End-to-end tests of the nine precompile entry points, driven through the
//! public API with inputs built directly on top of blst.
use alloy_primitives::hex;
use bls12381_precompile::config::{PrecompileConfig, SubgroupCheck};
use bls12381_precompile::constants::{
    G1_ADD_INPUT_LENGTH, G1_MUL_INPUT_LENGTH, G2_MUL_INPUT_LENGTH, MODULUS_REPR, PADDED_FP_LENGTH,
    PADDED_G1_LENGTH, PADDED_G2_LENGTH, PADDING_LENGTH, PAIRING_INPUT_LENGTH, SCALAR_LENGTH,
};
use bls12381_precompile::{
    g1_add, g1_msm, g1_mul, g2_add, g2_msm, g2_mul, gas, map_fp2_to_g2, map_fp_to_g1, pairing,
    PrecompileError,
};
use blst::{
    blst_p1, blst_p1_affine, blst_p1_generator, blst_p1_mult, blst_p1_to_affine, blst_p2,
    blst_p2_affine, blst_p2_generator, blst_p2_mult, blst_p2_to_affine,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const RNG_SEED: u64 = 42;
const DEFAULT: PrecompileConfig = PrecompileConfig::DEFAULT;

// A G2 point on the twist but outside the prime-order subgroup:
// x = u, y = sqrt(4 + 3u).
const G2_NOT_IN_SUBGROUP_X_C1: [u8; 48] =
    hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001");
const G2_NOT_IN_SUBGROUP_Y_C0: [u8; 48] =
    hex!("135203e60180a68ee2e9c448d77a2cd91c3dedd930b1cf60ef396489f61eb45e304466cf3e67fa0af1ee7b04121bdea2");
const G2_NOT_IN_SUBGROUP_Y_C1: [u8; 48] =
    hex!("140d2a0ca7fdc0223895aa4843747ffad8ac19034879ca1b67e64a4501b6c551cb36cb8e58c411de58318ef3c9ab641b");

fn bendian_scalar_to_le(scalar_be: &[u8; SCALAR_LENGTH]) -> [u8; SCALAR_LENGTH] {
    let mut le = *scalar_be;
    le.reverse();
    le
}

fn g1_generator_multiple(scalar_be: &[u8; SCALAR_LENGTH]) -> blst_p1_affine {
    let le = bendian_scalar_to_le(scalar_be);
    let mut p = blst_p1::default();
    let mut p_aff = blst_p1_affine::default();
    // SAFETY: all values are valid blst types.
    unsafe {
        blst_p1_mult(&mut p, blst_p1_generator(), le.as_ptr(), 256);
        blst_p1_to_affine(&mut p_aff, &p);
    }
    p_aff
}

fn g2_generator_multiple(scalar_be: &[u8; SCALAR_LENGTH]) -> blst_p2_affine {
    let le = bendian_scalar_to_le(scalar_be);
    let mut p = blst_p2::default();
    let mut p_aff = blst_p2_affine::default();
    // SAFETY: all values are valid blst types.
    unsafe {
        blst_p2_mult(&mut p, blst_p2_generator(), le.as_ptr(), 256);
        blst_p2_to_affine(&mut p_aff, &p);
    }
    p_aff
}

fn encode_fp(out: &mut [u8], fp: &blst::blst_fp) {
    // SAFETY: the slice is 48 bytes, fp is a valid blst value.
    unsafe { blst::blst_bendian_from_fp(out.as_mut_ptr(), fp) };
}

fn encode_g1(p_aff: &blst_p1_affine) -> [u8; PADDED_G1_LENGTH] {
    let mut out = [0u8; PADDED_G1_LENGTH];
    // Infinity stays all-zero.
    // SAFETY: p_aff is a valid blst value.
    if unsafe { blst::blst_p1_affine_is_inf(p_aff) } {
        return out;
    }
    encode_fp(&mut out[PADDING_LENGTH..PADDED_FP_LENGTH], &p_aff.x);
    encode_fp(
        &mut out[PADDED_FP_LENGTH + PADDING_LENGTH..PADDED_G1_LENGTH],
        &p_aff.y,
    );
    out
}

fn encode_g2(p_aff: &blst_p2_affine) -> [u8; PADDED_G2_LENGTH] {
    let mut out = [0u8; PADDED_G2_LENGTH];
    // SAFETY: p_aff is a valid blst value.
    if unsafe { blst::blst_p2_affine_is_inf(p_aff) } {
        return out;
    }
    for (i, fp) in [&p_aff.x.fp[0], &p_aff.x.fp[1], &p_aff.y.fp[0], &p_aff.y.fp[1]]
        .into_iter()
        .enumerate()
    {
        encode_fp(
            &mut out[i * PADDED_FP_LENGTH + PADDING_LENGTH..(i + 1) * PADDED_FP_LENGTH],
            fp,
        );
    }
    out
}

fn scalar_be(low: u128) -> [u8; SCALAR_LENGTH] {
    let mut out = [0u8; SCALAR_LENGTH];
    out[16..].copy_from_slice(&low.to_be_bytes());
    out
}

fn random_scalar(rng: &mut StdRng) -> [u8; SCALAR_LENGTH] {
    let mut out = [0u8; SCALAR_LENGTH];
    rng.fill(&mut out[..]);
    out
}

/// Builds a G1 multiexp input over distinct generator multiples.
fn g1_msm_input(scalars: &[[u8; SCALAR_LENGTH]]) -> Vec<u8> {
    let mut input = Vec::new();
    for (i, scalar) in scalars.iter().enumerate() {
        let base = g1_generator_multiple(&scalar_be(i as u128 + 1));
        input.extend_from_slice(&encode_g1(&base));
        input.extend_from_slice(scalar);
    }
    input
}

fn g2_msm_input(scalars: &[[u8; SCALAR_LENGTH]]) -> Vec<u8> {
    let mut input = Vec::new();
    for (i, scalar) in scalars.iter().enumerate() {
        let base = g2_generator_multiple(&scalar_be(2 * i as u128 + 1));
        input.extend_from_slice(&encode_g2(&base));
        input.extend_from_slice(scalar);
    }
    input
}

#[test]
fn g1_add_doubles_the_generator() {
    let gen = encode_g1(&g1_generator_multiple(&scalar_be(1)));
    let mut input = [0u8; G1_ADD_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&gen);
    input[PADDED_G1_LENGTH..].copy_from_slice(&gen);

    let output = g1_add::g1_add(&input, gas::g1_add_gas(), &DEFAULT).unwrap();
    let expected = encode_g1(&g1_generator_multiple(&scalar_be(2)));
    assert_eq!(output.bytes[..], expected[..]);
    assert_eq!(output.gas_used, 600);
}

#[test]
fn g1_add_golden_vector() {
    // 2 * G1, independently computed.
    let gen = encode_g1(&g1_generator_multiple(&scalar_be(1)));
    let mut input = [0u8; G1_ADD_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&gen);
    input[PADDED_G1_LENGTH..].copy_from_slice(&gen);

    let output = g1_add::g1_add(&input, u64::MAX, &DEFAULT).unwrap();
    let expected: [u8; PADDED_G1_LENGTH] = hex!(
        "000000000000000000000000000000000572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e00000000000000000000000000000000166a9d8cabc673a322fda673779d8e3822ba3ecb8670e461f73bb9021d5fd76a4c56d9d4cd16bd1bba86881979749d28"
    );
    assert_eq!(output.bytes[..], expected[..]);
}

#[test]
fn g1_mul_by_zero_scalar_gives_infinity() {
    let mut input = [0u8; G1_MUL_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(5))));

    let output = g1_mul::g1_mul(&input, gas::g1_mul_gas(), &DEFAULT).unwrap();
    assert_eq!(output.bytes[..], [0u8; PADDED_G1_LENGTH][..]);
}

#[test]
fn g1_add_rejects_truncated_input() {
    let input = [0u8; 255];
    assert_eq!(
        g1_add::g1_add(&input, u64::MAX, &DEFAULT),
        Err(PrecompileError::InvalidLength)
    );
}

#[test]
fn g1_add_rejects_padding_violation() {
    let mut input = [0u8; G1_ADD_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(1))));
    input[PADDED_G1_LENGTH..].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(1))));
    input[15] = 0x01;
    assert_eq!(
        g1_add::g1_add(&input, u64::MAX, &DEFAULT),
        Err(PrecompileError::InvalidElement)
    );
}

#[test]
fn g1_add_rejects_point_off_curve() {
    // (0, 1) as the first operand.
    let mut input = [0u8; G1_ADD_INPUT_LENGTH];
    input[PADDED_G1_LENGTH - 1] = 0x01;
    input[PADDED_G1_LENGTH..].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(1))));
    assert_eq!(
        g1_add::g1_add(&input, u64::MAX, &DEFAULT),
        Err(PrecompileError::PointNotOnCurve)
    );
}

#[test]
fn g1_add_rejects_coordinate_at_modulus() {
    let mut input = [0u8; G1_ADD_INPUT_LENGTH];
    input[PADDING_LENGTH..PADDED_FP_LENGTH].copy_from_slice(&MODULUS_REPR);
    assert_eq!(
        g1_add::g1_add(&input, u64::MAX, &DEFAULT),
        Err(PrecompileError::InvalidElement)
    );
}

#[test]
fn msm_strategies_are_bit_identical_g1() {
    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    for k in [1usize, 2, 3, 4, 5, 6, 9, 16, 33] {
        let scalars: Vec<_> = (0..k).map(|_| random_scalar(&mut rng)).collect();
        let input = g1_msm_input(&scalars);
        let dispatched = g1_msm::g1_msm(&input, u64::MAX, &DEFAULT).unwrap();
        let naive = g1_msm::g1_msm_naive(&input, u64::MAX, &DEFAULT).unwrap();
        let bc = g1_msm::g1_msm_bos_coster(&input, u64::MAX, &DEFAULT).unwrap();
        assert_eq!(naive.bytes, bc.bytes, "k = {k}");
        assert_eq!(dispatched.bytes, naive.bytes, "k = {k}");
        assert_eq!(dispatched.bytes.len(), PADDED_G1_LENGTH);
    }
}

#[test]
fn msm_strategies_are_bit_identical_g2() {
    let mut rng = StdRng::seed_from_u64(RNG_SEED + 1);
    for k in [1usize, 2, 4, 5, 7, 12] {
        let scalars: Vec<_> = (0..k).map(|_| random_scalar(&mut rng)).collect();
        let input = g2_msm_input(&scalars);
        let dispatched = g2_msm::g2_msm(&input, u64::MAX, &DEFAULT).unwrap();
        let naive = g2_msm::g2_msm_naive(&input, u64::MAX, &DEFAULT).unwrap();
        let bc = g2_msm::g2_msm_bos_coster(&input, u64::MAX, &DEFAULT).unwrap();
        assert_eq!(naive.bytes, bc.bytes, "k = {k}");
        assert_eq!(dispatched.bytes, naive.bytes, "k = {k}");
        assert_eq!(dispatched.bytes.len(), PADDED_G2_LENGTH);
    }
}

#[test]
fn msm_with_lopsided_scalars_exercises_the_skip_branch() {
    // Mixes of tiny and 256-bit scalars drive both heap branches.
    let mut rng = StdRng::seed_from_u64(RNG_SEED + 2);
    let mut scalars = Vec::new();
    for i in 0..8usize {
        if i % 2 == 0 {
            scalars.push(scalar_be(i as u128 + 1));
        } else {
            scalars.push(random_scalar(&mut rng));
        }
    }
    let input = g1_msm_input(&scalars);
    let naive = g1_msm::g1_msm_naive(&input, u64::MAX, &DEFAULT).unwrap();
    let bc = g1_msm::g1_msm_bos_coster(&input, u64::MAX, &DEFAULT).unwrap();
    assert_eq!(naive.bytes, bc.bytes);
}

#[test]
fn msm_crossover_with_padded_infinity_pair() {
    // Four live pairs vs the same four plus (infinity, 0): identical output.
    let mut rng = StdRng::seed_from_u64(RNG_SEED + 3);
    let scalars: Vec<_> = (0..4).map(|_| random_scalar(&mut rng)).collect();
    let four = g1_msm_input(&scalars);
    let mut five = four.clone();
    five.extend_from_slice(&[0u8; G1_MUL_INPUT_LENGTH]);

    let out_four = g1_msm::g1_msm(&four, u64::MAX, &DEFAULT).unwrap();
    let out_five = g1_msm::g1_msm(&five, u64::MAX, &DEFAULT).unwrap();
    assert_eq!(out_four.bytes, out_five.bytes);
}

#[test]
fn msm_gas_depends_only_on_length() {
    let mut rng = StdRng::seed_from_u64(RNG_SEED + 4);
    let scalars: Vec<_> = (0..5).map(|_| random_scalar(&mut rng)).collect();
    let input = g1_msm_input(&scalars);
    let output = g1_msm::g1_msm(&input, u64::MAX, &DEFAULT).unwrap();
    assert_eq!(output.gas_used, gas::g1_msm_gas(input.len()));
    assert_eq!(output.gas_used, 5 * 12_000 * 594 / 1_000);
}

#[test]
fn g2_add_matches_doubling() {
    let gen = encode_g2(&g2_generator_multiple(&scalar_be(1)));
    let mut input = [0u8; 2 * PADDED_G2_LENGTH];
    input[..PADDED_G2_LENGTH].copy_from_slice(&gen);
    input[PADDED_G2_LENGTH..].copy_from_slice(&gen);

    let output = g2_add::g2_add(&input, u64::MAX, &DEFAULT).unwrap();
    let expected = encode_g2(&g2_generator_multiple(&scalar_be(2)));
    assert_eq!(output.bytes[..], expected[..]);
}

#[test]
fn g2_mul_matches_generator_multiple() {
    let mut input = [0u8; G2_MUL_INPUT_LENGTH];
    input[..PADDED_G2_LENGTH].copy_from_slice(&encode_g2(&g2_generator_multiple(&scalar_be(1))));
    input[G2_MUL_INPUT_LENGTH - 1] = 9;

    let output = g2_mul::g2_mul(&input, u64::MAX, &DEFAULT).unwrap();
    let expected = encode_g2(&g2_generator_multiple(&scalar_be(9)));
    assert_eq!(output.bytes[..], expected[..]);
}

#[test]
fn pairing_with_infinity_g2_is_identity() {
    let mut input = [0u8; PAIRING_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(1))));

    let output = pairing::pairing(&input, u64::MAX, &DEFAULT).unwrap();
    let mut expected = [0u8; 32];
    expected[31] = 1;
    assert_eq!(output.bytes[..], expected[..]);
}

#[test]
fn pairing_bilinearity_check() {
    // e(2G, H) * e(-G, 2H) = e(G, H)^2 * e(G, H)^-2 = 1.
    // SAFETY: valid blst values.
    let mut neg_g = unsafe { *blst_p1_generator() };
    let mut neg_g_aff = blst_p1_affine::default();
    // SAFETY: valid blst values.
    unsafe {
        blst::blst_p1_cneg(&mut neg_g, true);
        blst_p1_to_affine(&mut neg_g_aff, &neg_g);
    }

    let mut input = [0u8; 2 * PAIRING_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(2))));
    input[PADDED_G1_LENGTH..PAIRING_INPUT_LENGTH]
        .copy_from_slice(&encode_g2(&g2_generator_multiple(&scalar_be(1))));
    input[PAIRING_INPUT_LENGTH..PAIRING_INPUT_LENGTH + PADDED_G1_LENGTH]
        .copy_from_slice(&encode_g1(&neg_g_aff));
    input[PAIRING_INPUT_LENGTH + PADDED_G1_LENGTH..]
        .copy_from_slice(&encode_g2(&g2_generator_multiple(&scalar_be(2))));

    let output = pairing::pairing(&input, u64::MAX, &DEFAULT).unwrap();
    assert_eq!(output.bytes[31], 1);
    assert_eq!(output.gas_used, 115_000 + 2 * 23_000);
}

#[test]
fn pairing_rejects_g2_outside_subgroup() {
    let mut input = [0u8; PAIRING_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(1))));
    let g2 = &mut input[PADDED_G1_LENGTH..];
    // x = u, y = sqrt(4 + 3u): on the twist, not in the subgroup.
    g2[PADDED_FP_LENGTH + PADDING_LENGTH..2 * PADDED_FP_LENGTH]
        .copy_from_slice(&G2_NOT_IN_SUBGROUP_X_C1);
    g2[2 * PADDED_FP_LENGTH + PADDING_LENGTH..3 * PADDED_FP_LENGTH]
        .copy_from_slice(&G2_NOT_IN_SUBGROUP_Y_C0);
    g2[3 * PADDED_FP_LENGTH + PADDING_LENGTH..4 * PADDED_FP_LENGTH]
        .copy_from_slice(&G2_NOT_IN_SUBGROUP_Y_C1);

    assert_eq!(
        pairing::pairing(&input, u64::MAX, &DEFAULT),
        Err(PrecompileError::PointNotInSubgroup)
    );

    // The same coordinates pass the plain on-curve validation of g2_mul.
    let mut mul_input = [0u8; G2_MUL_INPUT_LENGTH];
    mul_input[..PADDED_G2_LENGTH].copy_from_slice(&input[PADDED_G1_LENGTH..]);
    mul_input[G2_MUL_INPUT_LENGTH - 1] = 1;
    assert!(g2_mul::g2_mul(&mul_input, u64::MAX, &DEFAULT).is_ok());

    // And fail g2_mul once universal subgroup checking is requested.
    let strict = PrecompileConfig {
        subgroup_check: SubgroupCheck::Always,
        ..PrecompileConfig::DEFAULT
    };
    assert_eq!(
        g2_mul::g2_mul(&mul_input, u64::MAX, &strict),
        Err(PrecompileError::PointNotInSubgroup)
    );
}

#[test]
fn map_fp_to_g1_output_feeds_the_arithmetic_precompiles() {
    let mut fp = [0u8; PADDED_FP_LENGTH];
    fp[PADDED_FP_LENGTH - 3] = 0x5a;
    let mapped = map_fp_to_g1::map_fp_to_g1(&fp, u64::MAX, &DEFAULT).unwrap();
    assert_eq!(mapped.gas_used, 5_500);

    // Add the mapped point to itself through g1_add.
    let mut add_input = [0u8; G1_ADD_INPUT_LENGTH];
    add_input[..PADDED_G1_LENGTH].copy_from_slice(&mapped.bytes);
    add_input[PADDED_G1_LENGTH..].copy_from_slice(&mapped.bytes);
    assert!(g1_add::g1_add(&add_input, u64::MAX, &DEFAULT).is_ok());
}

#[test]
fn map_fp2_to_g2_produces_valid_pairing_input() {
    let mut fp2 = [0u8; 2 * PADDED_FP_LENGTH];
    fp2[PADDED_FP_LENGTH - 1] = 0x11;
    fp2[2 * PADDED_FP_LENGTH - 1] = 0x13;
    let mapped = map_fp2_to_g2::map_fp2_to_g2(&fp2, u64::MAX, &DEFAULT).unwrap();
    assert_eq!(mapped.gas_used, 110_000);

    let mut input = [0u8; PAIRING_INPUT_LENGTH];
    input[..PADDED_G1_LENGTH].copy_from_slice(&encode_g1(&g1_generator_multiple(&scalar_be(3))));
    input[PADDED_G1_LENGTH..].copy_from_slice(&mapped.bytes);
    // The mapped point is in the subgroup, so the pairing accepts it.
    assert!(pairing::pairing(&input, u64::MAX, &DEFAULT).is_ok());
}

#[test]
fn every_entry_rejects_an_undersized_gas_limit() {
    let g1 = encode_g1(&g1_generator_multiple(&scalar_be(1)));
    let mut add_input = [0u8; G1_ADD_INPUT_LENGTH];
    add_input[..PADDED_G1_LENGTH].copy_from_slice(&g1);
    add_input[PADDED_G1_LENGTH..].copy_from_slice(&g1);

    assert_eq!(
        g1_add::g1_add(&add_input, gas::g1_add_gas() - 1, &DEFAULT),
        Err(PrecompileError::OutOfGas)
    );

    let msm_input = g1_msm_input(&[scalar_be(7)]);
    assert_eq!(
        g1_msm::g1_msm(&msm_input, gas::g1_msm_gas(msm_input.len()) - 1, &DEFAULT),
        Err(PrecompileError::OutOfGas)
    );

    let mut pairing_input = [0u8; PAIRING_INPUT_LENGTH];
    pairing_input[..PADDED_G1_LENGTH].copy_from_slice(&g1);
    assert_eq!(
        pairing::pairing(
            &pairing_input,
            gas::pairing_gas(pairing_input.len()) - 1,
            &DEFAULT
        ),
        Err(PrecompileError::OutOfGas)
    );
}
