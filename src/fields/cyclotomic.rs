//! Compressed arithmetic in the cyclotomic subgroup of F_{p^{12}}.
//!
//! After the easy part of the final exponentiation an element g satisfies
//! g^(p^4 - p^2 + 1) = 1, and its six F_{p^2} slots (in Karabina's naming)
//!
//! ```text
//! g = (g0 + g4 v + g3 v^2) + (g2 + g1 v + g5 v^2) w
//! ```
//!
//! are no longer independent: g0 and g1 follow from g2, g3, g4 and g5. Karabina's squaring
//! <https://eprint.iacr.org/2010/542.pdf> works on those four slots only, which makes long
//! runs of squarings considerably cheaper than dense squaring. The price is a decompression
//! at the end, which costs an inversion in F_{p^2}; when two elements are decompressed
//! together, the two inversions are merged into one.
use crate::fields::config::{CYCLOTOMIC_HIGH_SQUARINGS, CYCLOTOMIC_LOW_SQUARINGS};
use crate::fields::error::FieldError;
use crate::fields::fp::FieldExtensionTrait;
use crate::fields::fp12::Fp12;
use crate::fields::fp2::Fp2;
use crate::fields::fp6::Fp6;
use num_traits::{One, Zero};

/// An element of the cyclotomic subgroup with only the slots g2, g3, g4, g5 kept.
///
/// Values of this type are produced by [`Fp12::compress`] and only become a usable field
/// element again through [`CompressedFp12::decompress`] or [`CompressedFp12::decompress_pair`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompressedFp12 {
    pub g2: Fp2,
    pub g3: Fp2,
    pub g4: Fp2,
    pub g5: Fp2,
}

impl Fp12 {
    /// Drops the g0 and g1 slots. Only meaningful for cyclotomic elements.
    pub fn compress(&self) -> CompressedFp12 {
        CompressedFp12 {
            g2: self.0[1].0[0],
            g3: self.0[0].0[2],
            g4: self.0[0].0[1],
            g5: self.0[1].0[2],
        }
    }
    /// Raises a cyclotomic element to |u| = 2^62 + 2^55 + 1 with compressed squarings.
    /// The BN parameter u is negative; the caller conjugates the result where u itself is
    /// needed.
    ///
    /// Fails with [`FieldError::DegenerateCompression`] when g2 vanishes on either partial
    /// power, which includes the identity.
    pub fn exp_cyclotomic(&self) -> Result<Self, FieldError> {
        let mut t = self.compress();
        for _ in 0..CYCLOTOMIC_LOW_SQUARINGS {
            t = t.square();
        }
        let low = t;
        for _ in CYCLOTOMIC_LOW_SQUARINGS..CYCLOTOMIC_HIGH_SQUARINGS {
            t = t.square();
        }
        let (t0, t1) = CompressedFp12::decompress_pair(&low, &t)?;
        Ok(t0 * t1 * *self)
    }
}

impl CompressedFp12 {
    /// Karabina's compressed squaring, Eq. (15) of the reference above.
    pub fn square(&self) -> Self {
        let (g2, g3, g4, g5) = (self.g2, self.g3, self.g4, self.g5);

        let t0 = g4.square();
        let mut t1 = g5.square();
        // 2 g4 g5 = (g4 + g5)^2 - g4^2 - g5^2
        let mut t5 = g4 + g5;
        let mut t2 = t5.square();
        let mut t3 = t0 + t1;
        t5 = t2 - t3;

        let mut t6 = g2 + g3;
        t3 = t6.square();
        t2 = g2.square();

        t6 = t5.residue_mul();
        t5 = t6 + g2;
        t5 = t5.double();
        let r2 = t5 + t6;

        let mut t4 = t1.residue_mul();
        t5 = t0 + t4;
        t6 = t5 - g3;

        t1 = g3.square();

        t6 = t6.double();
        let r3 = t5 + t6;

        t4 = t1.residue_mul();
        t5 = t2 + t4;
        t6 = t5 - g4;
        t6 = t6.double();
        let r4 = t5 + t6;

        let t0 = t2 + t1;
        t5 = t3 - t0;
        t6 = t5 + g5;
        t6 = t6.double();
        let r5 = t5 + t6;

        Self {
            g2: r2,
            g3: r3,
            g4: r4,
            g5: r5,
        }
    }
    /// g1 = (xi g5^2 + 3 g4^2 - 2 g3) / (4 g2), as a numerator and denominator pair.
    fn g1_fraction(&self) -> Result<(Fp2, Fp2), FieldError> {
        if self.g2.is_zero() {
            tracing::trace!(compressed = ?self, "decompression with a vanishing denominator");
            return Err(FieldError::DegenerateCompression);
        }
        let g4_squared = self.g4.square();
        let t1 = (g4_squared - self.g3).double() + g4_squared;
        let numerator = self.g5.square().residue_mul() + t1;
        let denominator = self.g2.double().double();
        Ok((numerator, denominator))
    }
    /// g0 = xi (2 g1^2 + g2 g5 - 3 g3 g4) + 1, then the six slots are put back in place.
    fn assemble(&self, g1: Fp2) -> Fp12 {
        let g3g4 = self.g3 * self.g4;
        let t0 = g1.square().double() + self.g2 * self.g5 - g3g4.double() - g3g4;
        let g0 = t0.residue_mul() + Fp2::one();
        Fp12::new(&[
            Fp6::new(&[g0, self.g4, self.g3]),
            Fp6::new(&[self.g2, g1, self.g5]),
        ])
    }
    pub fn decompress(&self) -> Result<Fp12, FieldError> {
        let (numerator, denominator) = self.g1_fraction()?;
        Ok(self.assemble(numerator * denominator.inverse()?))
    }
    /// Decompresses two elements at the cost of a single F_{p^2} inversion.
    /// Either element having a zero denominator fails the whole call.
    pub fn decompress_pair(a: &Self, b: &Self) -> Result<(Fp12, Fp12), FieldError> {
        let (num_a, den_a) = a.g1_fraction()?;
        let (num_b, den_b) = b.g1_fraction()?;
        let (inv_a, inv_b) = Fp2::invert_pair(&den_a, &den_b)?;
        Ok((a.assemble(num_a * inv_a), b.assemble(num_b * inv_b)))
    }
}
