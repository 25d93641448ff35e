//! BLS12-381 precompiles as specified in
//! [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537).
//!
//! Nine entry points over the BLS12-381 curve: G1/G2 addition, scalar
//! multiplication and multiexponentiation, the pairing check and the two
//! field-to-curve maps. Each one consumes a strictly validated byte buffer
//! and produces a fixed-size byte buffer or a typed error; gas is a pure
//! function of the input length.
//!
//! Curve arithmetic is delegated to [blst]; this crate owns the wire codec,
//! the multiexponentiation strategy (naive for small batches, Bos-Coster with
//! a skip heuristic for large ones) and the gas schedule.
//!
//! [blst]: https://github.com/supranational/blst

mod blst;
pub mod config;
pub mod constants;
mod curve;
pub mod g1_add;
pub mod g1_msm;
pub mod g1_mul;
pub mod g2_add;
pub mod g2_msm;
pub mod g2_mul;
pub mod gas;
mod interface;
pub mod map_fp2_to_g2;
pub mod map_fp_to_g1;
mod msm;
pub mod pairing;
mod scalar;
mod utils;

pub use config::{PrecompileConfig, SubgroupCheck};
pub use interface::{
    u64_to_address, PrecompileError, PrecompileFn, PrecompileOutput, PrecompileResult,
    PrecompileWithAddress,
};

/// Returns the BLS12-381 precompiles with their addresses.
pub fn precompiles() -> impl Iterator<Item = PrecompileWithAddress> {
    [
        g1_add::PRECOMPILE,
        g1_mul::PRECOMPILE,
        g1_msm::PRECOMPILE,
        g2_add::PRECOMPILE,
        g2_mul::PRECOMPILE,
        g2_msm::PRECOMPILE,
        pairing::PRECOMPILE,
        map_fp_to_g1::PRECOMPILE,
        map_fp2_to_g2::PRECOMPILE,
    ]
    .into_iter()
}
