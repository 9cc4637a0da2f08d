//! This module implements the base field of the tower, the integers modulo the BN-P254 prime
//!
//! p = 36u^4 + 36u^3 + 24u^2 + 6u + 1, u = -(2^62 + 2^55 + 1)
//!
//! The multiprecision work itself is delegated to `crypto_bigint`. Elements are held in
//! Montgomery form through its `ConstMontyForm`, which keeps every binary operation constant
//! time for a modulus fixed at compile time. On top of that wrapper we add the two small
//! capabilities the higher levels of the tower need from the base field and that a plain
//! modular integer does not offer:
//!
//! 1. halving:
//!     a thin wrapper over `ConstMontyForm::div_by_2`, which adds the modulus to odd
//!     values before shifting, so no inversion of two is needed.
//! 2. wide products:
//!     `mul_unr` returns the full 508-bit integer product without reducing it mod p.
//!     Such values ([`FpWide`]) may be added and subtracted (mod p^2, which preserves the
//!     residue mod p) and are brought back into the field with [`FpWide::reduce`].
//!
//! References
//! ----------
//! 1. <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>
//! 2. Nogami, Akane, Sakemi, Kato, Morikawa. "Integer Variable chi-Based Ate Pairing", Pairing 2008.
//!
//! N.B.: the #[allow(unused_imports)] below is a clippy quirk. The base field is rolled out
//! through a macro, and crates only used inside the macro body are reported as unused.

use crate::fields::config::tower;
use crate::fields::error::FieldError;
use crate::fields::utils::u256_to_u512;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
#[allow(unused_imports)]
use crypto_bigint::{
    impl_modulus, modular::ConstMontyParams, rand_core::CryptoRngCore, RandomMod, U256, U512,
};
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::CtOption;

/// This defines the key properties of a level of the tower. Mathematically a finite field
/// satisfies many more properties; the list below is the part the extensions rely on.
pub trait FieldExtensionTrait:
    Sized
    + Copy
    + Clone
    + std::fmt::Debug
    + Default
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Neg<Output = Self>
    + PartialEq
    + ConstantTimeEq
    + ConditionallySelectable
    + Zero
    + One
    + From<u64>
{
    /// The non-residue used to build the next extension on top of this field,
    /// i.e. the next level is `Self[X] / (X^k - non_residue())`.
    fn non_residue() -> Self;
    /// Multiplication by [`FieldExtensionTrait::non_residue`]. Every level has a
    /// shortcut for this that is much cheaper than a general multiplication.
    fn residue_mul(&self) -> Self;
    fn square(&self) -> Self;
    /// Multiplicative inverse. Fails only for the zero element.
    fn inverse(&self) -> Result<Self, FieldError>;
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self;
    fn double(&self) -> Self {
        *self + *self
    }
}

/// Due to the fact that we use `crypto_bigint` to handle the multiprecision arithmetic
/// we must accept the fact that it requires the usage of a macro, `impl_modulus!`,
/// which generates and contains all the needed information about the modulus.
/// This means that we roll our implementation into a macro as well.
macro_rules! define_finite_prime_field {
    ($wrapper_name:ident, $uint_type:ty, $modulus:expr) => {
        impl_modulus!(ModulusStruct, $uint_type, $modulus);

        // special struct for const-time arithmetic on montgomery form integers mod p
        type Output =
            crypto_bigint::modular::ConstMontyForm<ModulusStruct, { ModulusStruct::LIMBS }>;

        #[derive(Clone, Debug, Copy)]
        pub struct $wrapper_name(Output);

        impl $wrapper_name {
            // builder structure to create elements in the base field of a given value
            pub const fn new(value: $uint_type) -> Self {
                Self(Output::new(&value))
            }
            // take the element and convert it to "normal" form from montgomery form
            pub const fn value(&self) -> $uint_type {
                self.0.retrieve()
            }
            pub const fn characteristic() -> $uint_type {
                <$uint_type>::from_be_hex($modulus)
            }
            pub const ZERO: Self = Self::new(<$uint_type>::ZERO);
            pub const ONE: Self = Self::new(<$uint_type>::ONE);
            pub const TWO: Self = Self::new(<$uint_type>::from_u64(2));
            pub const THREE: Self = Self::new(<$uint_type>::from_u64(3));
            pub const FOUR: Self = Self::new(<$uint_type>::from_u64(4));
        }

        impl FieldExtensionTrait for $wrapper_name {
            // the quadratic non-residue of the base field is -1, since p = 3 mod 4
            fn non_residue() -> Self {
                -Self::ONE
            }
            fn residue_mul(&self) -> Self {
                -*self
            }
            fn square(&self) -> Self {
                (*self) * (*self)
            }
            /// Inversion goes through the constant-time Bernstein-Yang implementation of
            /// `crypto_bigint`, <https://eprint.iacr.org/2019/266.pdf>. The library reports a
            /// zero input through a `CtOption`, which we surface as an error.
            fn inverse(&self) -> Result<Self, FieldError> {
                let inverse: Option<Output> = CtOption::from(self.0.inv()).into();
                match inverse {
                    Some(d) => Ok(Self(d)),
                    None => {
                        tracing::trace!(value = ?self.value(), "base field inversion of zero");
                        Err(FieldError::ZeroInversion)
                    }
                }
            }
            fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
                Self::new(<$uint_type>::random_mod(
                    rng,
                    ModulusStruct::MODULUS.as_nz_ref(),
                ))
            }
        }
        impl From<u64> for $wrapper_name {
            fn from(value: u64) -> Self {
                Self::new(<$uint_type>::from_u64(value))
            }
        }
        /// Binary operations on the base field just wrap the same operations on the
        /// underlying montgomery representations.
        impl Add for $wrapper_name {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self(self.0 + other.0)
            }
        }
        impl AddAssign for $wrapper_name {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }
        impl Sub for $wrapper_name {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Self(self.0 - other.0)
            }
        }
        impl SubAssign for $wrapper_name {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }
        impl Mul for $wrapper_name {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                Self(self.0 * other.0)
            }
        }
        impl MulAssign for $wrapper_name {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }
        impl Neg for $wrapper_name {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
        impl Zero for $wrapper_name {
            fn zero() -> Self {
                Self::ZERO
            }
            fn is_zero(&self) -> bool {
                bool::from(self.ct_eq(&Self::ZERO))
            }
        }
        impl One for $wrapper_name {
            fn one() -> Self {
                Self::ONE
            }
        }
        impl Default for $wrapper_name {
            fn default() -> Self {
                Self::ZERO
            }
        }
        /// Equality is checked in constant time through `subtle::ConstantTimeEq`,
        /// which returns a `Choice`; `PartialEq` unwraps it.
        impl ConstantTimeEq for $wrapper_name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0.ct_eq(&other.0)
            }
        }
        impl PartialEq for $wrapper_name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bool::from(self.ct_eq(other))
            }
        }
        impl ConditionallySelectable for $wrapper_name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self::new(<$uint_type>::conditional_select(
                    &a.value(),
                    &b.value(),
                    choice,
                ))
            }
        }
    };
}

const BN_P254_MOD_STRING: &str = "2523648240000001ba344d80000000086121000000000013a700000000000013";
define_finite_prime_field!(Fp, U256, BN_P254_MOD_STRING);

impl Fp {
    /// Computes `self / 2` without an inversion, through the Montgomery-form halving of
    /// `crypto_bigint`.
    pub fn halve(&self) -> Self {
        Self(self.0.div_by_2())
    }
    /// The integer product of the canonical representatives, with no reduction mod p.
    pub fn mul_unr(&self, rhs: &Self) -> FpWide {
        FpWide(u256_to_u512(&self.value()).wrapping_mul(&u256_to_u512(&rhs.value())))
    }
}

/// An unreduced base field value: a 512-bit integer kept in `[0, p^2)`.
///
/// Addition and subtraction are performed mod p^2, which is enough to keep the value in
/// range while preserving its class mod p. Only [`FpWide::reduce`] performs the (costly)
/// reduction mod p.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FpWide(U512);

impl FpWide {
    pub fn reduce(&self) -> Fp {
        // x = hi * 2^256 + lo = hi * (2^256 mod p) + lo  (mod p)
        let w = self.0.to_words();
        let lo = Fp::new(U256::from_words([w[0], w[1], w[2], w[3]]));
        let hi = Fp::new(U256::from_words([w[4], w[5], w[6], w[7]]));
        hi * tower().wide_fold + lo
    }
}
impl Add for FpWide {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let p2 = tower().modulus_squared;
        let sum = self.0.wrapping_add(&other.0);
        let folded = sum.wrapping_sub(&p2);
        Self(U512::conditional_select(
            &folded,
            &sum,
            Choice::from((sum < p2) as u8),
        ))
    }
}
impl Sub for FpWide {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let p2 = tower().modulus_squared;
        let diff = self.0.wrapping_sub(&other.0);
        let borrowed = diff.wrapping_add(&p2);
        Self(U512::conditional_select(
            &diff,
            &borrowed,
            Choice::from((self.0 < other.0) as u8),
        ))
    }
}
impl Neg for FpWide {
    type Output = Self;
    fn neg(self) -> Self {
        Self::default() - self
    }
}
