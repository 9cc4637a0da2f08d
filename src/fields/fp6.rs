// we likewise define the specifics of the sextic extension of
// BN-P254 here. The sextic extension is defined by the tower
// F_{p^6} = F_{p^2}(v) / (v^3 - xi), xi = 1 + i,
// so elements are f0 + f1 v + f2 v^2 with coefficients in F_{p^2}.
// Every operation below re-expresses the cubic identity one level down.
use crate::fields::error::FieldError;
use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp};
use crate::fields::fp2::{Fp2, Fp2Wide};
use crypto_bigint::rand_core::CryptoRngCore;
use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

pub type Fp6 = FieldExtension<6, 3, Fp2>;

impl Fp6 {
    /// Karatsuba product of two elements, with the base field reductions deferred.
    /// The five additive combinations per coefficient are performed on the wide values, so
    /// only six reductions happen in [`Fp6Wide::reduce`] instead of eighteen.
    pub fn mul_unr(&self, rhs: &Self) -> Fp6Wide {
        let (a, b) = (&self.0, &rhs.0);
        let v0 = a[0].mul_unr(&b[0]);
        let v1 = a[1].mul_unr(&b[1]);
        let v2 = a[2].mul_unr(&b[2]);
        Fp6Wide([
            ((a[1] + a[2]).mul_unr(&(b[1] + b[2])) - v1 - v2).residue_mul() + v0,
            (a[0] + a[1]).mul_unr(&(b[0] + b[1])) - v0 - v1 + v2.residue_mul(),
            (a[0] + a[2]).mul_unr(&(b[0] + b[2])) - v0 + v1 - v2,
        ])
    }
    /// Multiplication by an element whose v^2 coefficient is zero, as produced by line
    /// evaluations. The third coefficient of `rhs` is never read.
    pub fn mul_sparse(&self, rhs: &Self) -> Self {
        let (a, b) = (&self.0, &rhs.0);
        let v0 = a[0] * b[0];
        let v1 = a[1] * b[1];
        Self([
            ((a[1] + a[2]) * b[1] - v1).residue_mul() + v0,
            (a[0] + a[1]) * (b[0] + b[1]) - v0 - v1,
            (a[0] + a[2]) * b[0] - v0 + v1,
        ])
    }
    /// Chung-Hasan SQR2: five squarings and multiplications, no halving.
    pub fn square2(&self) -> Self {
        let a = &self.0;
        let t0 = a[0].square();
        let cross01 = a[0] * a[1];
        let t1 = cross01 + cross01;
        let t2 = (a[0] - a[1] + a[2]).square();
        let cross12 = a[1] * a[2];
        let t3 = cross12 + cross12;
        let t4 = a[2].square();
        Self([
            t3.residue_mul() + t0,
            t4.residue_mul() + t1,
            t1 + t2 + t3 - t0 - t4,
        ])
    }
}

impl FieldExtensionTrait for Fp6 {
    /// The cubic non-residue of this level is v itself.
    fn non_residue() -> Self {
        Self::new(&[Fp2::zero(), Fp2::one(), Fp2::zero()])
    }
    /// Multiplication by v only rotates the coefficients:
    /// (f0 + f1 v + f2 v^2) v = xi f2 + f0 v + f1 v^2
    fn residue_mul(&self) -> Self {
        Self([self.0[2].residue_mul(), self.0[0], self.0[1]])
    }
    /// Chung-Hasan SQR3, which trades two of the multiplications of SQR2 for squarings at the
    /// price of an exact division by two, https://cacr.uwaterloo.ca/techreports/2006/cacr2006-24.pdf
    fn square(&self) -> Self {
        let a = &self.0;
        let t0 = a[0].square();
        let cross = a[1] * a[2];
        let t1 = cross + cross;
        let t2 = a[2].square();

        let s = a[0] + a[2];
        let mut t3 = (s + a[1]).square();
        let mut c2 = (s - a[1]).square();
        // c2 = ((a0 - a1 + a2)^2 + (a0 + a1 + a2)^2) / 2
        c2 = (c2 + t3).halve();
        t3 = t3 - c2 - t1;
        c2 = c2 - t0 - t2;

        Self([t1.residue_mul() + t0, t2.residue_mul() + t3, c2])
    }
    /// Inversion through the norm down to F_{p^2}, see Alg. 17 of
    /// https://eprint.iacr.org/2010/354.pdf
    fn inverse(&self) -> Result<Self, FieldError> {
        let a = &self.0;
        let v0 = a[0].square() - (a[1] * a[2]).residue_mul();
        let v1 = a[2].square().residue_mul() - a[0] * a[1];
        let v2 = a[1].square() - a[0] * a[2];

        let norm = (a[1] * v2).residue_mul() + a[0] * v0 + (a[2] * v1).residue_mul();
        let inverse = norm.inverse().map_err(|e| {
            tracing::trace!(element = ?self, "sextic inversion of zero");
            e
        })?;
        Ok(Self([v0 * inverse, v1 * inverse, v2 * inverse]))
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self([Fp2::rand(rng), Fp2::rand(rng), Fp2::rand(rng)])
    }
}

impl Mul for Fp6 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        // This is the exact same strategy as multiplication in Fp2, with three
        // coefficient products instead of two
        let (a, b) = (&self.0, &other.0);
        let v0 = a[0] * b[0];
        let v1 = a[1] * b[1];
        let v2 = a[2] * b[2];

        Self([
            ((a[1] + a[2]) * (b[1] + b[2]) - v1 - v2).residue_mul() + v0,
            (a[0] + a[1]) * (b[0] + b[1]) - v0 - v1 + v2.residue_mul(),
            (a[0] + a[2]) * (b[0] + b[2]) - v0 + v1 - v2,
        ])
    }
}

/// The result of [`Fp6::mul_unr`]: three unreduced F_{p^2} coefficients.
/// It has to pass through [`Fp6Wide::reduce`] before it can be used as a field element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp6Wide(pub(crate) [Fp2Wide; 3]);

impl Fp6Wide {
    pub fn reduce(&self) -> Fp6 {
        Fp6::new(&[self.0[0].reduce(), self.0[1].reduce(), self.0[2].reduce()])
    }
}
impl Add for Fp6Wide {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self([
            self.0[0] + other.0[0],
            self.0[1] + other.0[1],
            self.0[2] + other.0[2],
        ])
    }
}
impl Sub for Fp6Wide {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self([
            self.0[0] - other.0[0],
            self.0[1] - other.0[1],
            self.0[2] - other.0[2],
        ])
    }
}
impl Neg for Fp6Wide {
    type Output = Self;
    fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2]])
    }
}
