//! Process-wide constants of the tower that are cheaper to derive than to transcribe.
//!
//! Everything here is a pure function of the modulus, computed on first use and never
//! mutated afterwards, so every thread observes the same values.

use crate::fields::fp::Fp;
use crate::fields::fp2::{Fp2, FP2_NON_RESIDUE};
use crate::fields::utils::u256_to_u512;
use crypto_bigint::{Limb, NonZero, U256, U512};
use num_traits::One;
use std::sync::OnceLock;

/// The number of compressed squarings after which the first partial power of the
/// cyclotomic exponentiation by |u| = 2^62 + 2^55 + 1 is taken.
pub const CYCLOTOMIC_LOW_SQUARINGS: usize = 55;
/// The total number of compressed squarings for the same exponentiation.
pub const CYCLOTOMIC_HIGH_SQUARINGS: usize = 62;

/// The divisor of p - 1 in the exponent of the Frobenius coefficients, gamma = xi^((p - 1) / 6).
const FROBENIUS_DIVISOR: NonZero<Limb> = NonZero::<Limb>::new_unwrap(Limb::from_u8(6));

/// (p - 1) / 6 together with the remainder of the division, which is zero since p = 1 mod 6.
fn frobenius_exponent() -> (U256, Limb) {
    Fp::characteristic()
        .wrapping_sub(&U256::ONE)
        .div_rem_limb(FROBENIUS_DIVISOR)
}

/// Derived constants shared by every level of the tower.
#[derive(Debug, Clone)]
pub struct TowerConfig {
    pub modulus: U256,
    /// p^2, the bound under which unreduced products are kept
    pub modulus_squared: U512,
    /// 2^256 mod p, used to fold the high half of a wide value back into the field
    pub wide_fold: Fp,
    /// gamma^k = xi^(k (p - 1) / 6) for k = 0..5
    pub frobenius_coeffs: [Fp2; 6],
}

impl TowerConfig {
    fn derive() -> Self {
        let modulus = Fp::characteristic();
        let wide = u256_to_u512(&modulus);
        let (exponent, _) = frobenius_exponent();
        let gamma = FP2_NON_RESIDUE.pow(&exponent.to_words());

        let mut frobenius_coeffs = [Fp2::one(); 6];
        for k in 1..frobenius_coeffs.len() {
            frobenius_coeffs[k] = frobenius_coeffs[k - 1] * gamma;
        }
        tracing::debug!(?modulus, "derived extension tower constants");
        Self {
            modulus,
            modulus_squared: wide.wrapping_mul(&wide),
            wide_fold: Fp::new(U256::MAX) + Fp::ONE,
            frobenius_coeffs,
        }
    }
}

static BN_P254_TOWER: OnceLock<TowerConfig> = OnceLock::new();

/// This function returns the tower constants, deriving them on first use.
pub fn tower() -> &'static TowerConfig {
    BN_P254_TOWER.get_or_init(TowerConfig::derive)
}
