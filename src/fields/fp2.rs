//! The quadratic extension of the BN-P254 base field,
//! F_{p^2} = F_p[i] / (i^2 + 1), with elements written c0 + c1 i.
//!
//! Since p = 3 mod 4, -1 is a non-square and the extension is the "complex" one, which makes
//! multiplication by the base non-residue a negation. The element xi = 1 + i is neither a
//! square nor a cube in F_{p^2}; it is the non-residue on which the sextic and the dodectic
//! levels are built, and the base of the Frobenius coefficients gamma^k = xi^(k (p-1) / 6).
use crate::fields::config::tower;
use crate::fields::error::FieldError;
use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp, FpWide};
use crypto_bigint::rand_core::CryptoRngCore;
use num_traits::One;
use std::ops::{Add, Mul, Neg, Sub};

pub type Fp2 = FieldExtension<2, 2, Fp>;

/// xi = 1 + i
pub const FP2_NON_RESIDUE: Fp2 = Fp2::new(&[Fp::ONE, Fp::ONE]);

impl Fp2 {
    /// The conjugate c0 - c1 i. Restricted to the norm-one elements, this is the inverse.
    pub fn conjugate(&self) -> Self {
        Self([self.0[0], -self.0[1]])
    }
    /// The p^k-power Frobenius map. Conjugation for odd k, the identity for even k.
    pub fn frobenius(&self, exponent: usize) -> Self {
        match exponent % 2 {
            0 => *self,
            _ => self.conjugate(),
        }
    }
    /// Multiplication by gamma^k = xi^(k (p-1) / 6), the twisting constant of the Frobenius
    /// map on the sextic and dodectic levels. Only gamma^0..gamma^5 are stored; larger k
    /// picks up gamma^(6 (k / 6)), since gamma^6 = xi^(p-1) is not one.
    pub fn mul_frobenius_coeff(&self, k: usize) -> Self {
        let gamma = &tower().frobenius_coeffs;
        if k < gamma.len() {
            return *self * gamma[k];
        }
        let sixth = gamma[5] * gamma[1];
        *self * gamma[k % 6] * sixth.pow(&[(k / 6) as u64])
    }
    pub fn halve(&self) -> Self {
        Self([self.0[0].halve(), self.0[1].halve()])
    }
    /// Square and multiply, with the exponent given as little-endian 64-bit words.
    pub fn pow(&self, exponent: &[u64]) -> Self {
        let mut res = Self::one();
        for e in exponent.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= *self;
                }
            }
        }
        res
    }
    /// Karatsuba product without the final reduction mod p.
    pub fn mul_unr(&self, rhs: &Self) -> Fp2Wide {
        let t0 = self.0[0].mul_unr(&rhs.0[0]);
        let t1 = self.0[1].mul_unr(&rhs.0[1]);
        let t2 = (self.0[0] + self.0[1]).mul_unr(&(rhs.0[0] + rhs.0[1]));
        Fp2Wide([t0 - t1, t2 - t0 - t1])
    }
    /// Inverts two elements with a single field inversion,
    /// 1/a = b / (ab) and 1/b = a / (ab).
    pub fn invert_pair(a: &Self, b: &Self) -> Result<(Self, Self), FieldError> {
        let product = *a * *b;
        let inverse = product.inverse().map_err(|e| {
            tracing::trace!(?a, ?b, "simultaneous inversion with a vanishing product");
            e
        })?;
        Ok((*b * inverse, *a * inverse))
    }
}

impl FieldExtensionTrait for Fp2 {
    fn non_residue() -> Self {
        FP2_NON_RESIDUE
    }
    // (a0 + a1 i)(1 + i) = (a0 - a1) + (a0 + a1) i
    fn residue_mul(&self) -> Self {
        Self([self.0[0] - self.0[1], self.0[0] + self.0[1]])
    }
    // complex squaring: (a0 + a1 i)^2 = (a0 + a1)(a0 - a1) + 2 a0 a1 i
    fn square(&self) -> Self {
        let cross = self.0[0] * self.0[1];
        Self([
            (self.0[0] + self.0[1]) * (self.0[0] - self.0[1]),
            cross + cross,
        ])
    }
    // the norm a0^2 + a1^2 lands in the base field, where the inversion happens
    fn inverse(&self) -> Result<Self, FieldError> {
        let norm = self.0[0].square() + self.0[1].square();
        let inverse = norm.inverse()?;
        Ok(Self([self.0[0] * inverse, -(self.0[1] * inverse)]))
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self([Fp::rand(rng), Fp::rand(rng)])
    }
}

impl Mul for Fp2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        // Karatsuba, https://eprint.iacr.org/2006/471.pdf, Sec 3
        let t0 = self.0[0] * other.0[0];
        let t1 = self.0[1] * other.0[1];
        Self([
            t0 + t1.residue_mul(),
            (self.0[0] + self.0[1]) * (other.0[0] + other.0[1]) - t0 - t1,
        ])
    }
}

/// An unreduced element of F_{p^2}, both coefficients in [0, p^2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp2Wide(pub(crate) [FpWide; 2]);

impl Fp2Wide {
    pub fn reduce(&self) -> Fp2 {
        Fp2::new(&[self.0[0].reduce(), self.0[1].reduce()])
    }
    pub fn residue_mul(&self) -> Self {
        Self([self.0[0] - self.0[1], self.0[0] + self.0[1]])
    }
}
impl Add for Fp2Wide {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self([self.0[0] + other.0[0], self.0[1] + other.0[1]])
    }
}
impl Sub for Fp2Wide {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self([self.0[0] - other.0[0], self.0[1] - other.0[1]])
    }
}
impl Neg for Fp2Wide {
    type Output = Self;
    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1]])
    }
}
