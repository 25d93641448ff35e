//! Runtime configuration for the precompiles.
//!
//! The original EIP-2537 proposal requires subgroup membership checks only for
//! the pairing operation, while later variants extend them to every G1/G2
//! input. Hosts pick the variant their chain specifies via
//! [`PrecompileConfig::subgroup_check`].

/// Where subgroup membership of decoded points is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubgroupCheck {
    /// Only the pairing precompile verifies subgroup membership.
    PairingOnly,
    /// Every decoded G1/G2 point is verified, including add/mul/multiexp
    /// inputs.
    Always,
}

impl SubgroupCheck {
    /// Whether the arithmetic precompiles (add, mul, multiexp) must check
    /// subgroup membership of their inputs.
    #[inline]
    pub(crate) fn on_arithmetic(self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Tunable behaviour of the precompile entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileConfig {
    /// Subgroup-check variant, see [`SubgroupCheck`].
    pub subgroup_check: SubgroupCheck,
    /// Bit-length gap between the two largest scalars above which the
    /// multi-scalar multiplication stops subtracting and multiplies the top
    /// term out directly. The default of 6 encodes the measured ~128x
    /// cost ratio between a scalar multiplication and a point addition.
    pub msm_skip_threshold: u32,
}

impl PrecompileConfig {
    /// Original-proposal behaviour: subgroup checks on pairing only, 6-bit
    /// skip threshold.
    pub const DEFAULT: Self = Self {
        subgroup_check: SubgroupCheck::PairingOnly,
        msm_skip_threshold: 6,
    };
}

impl Default for PrecompileConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
