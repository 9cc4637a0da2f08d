//! we likewise define the specifics of the dodectic extension of
//! BN-P254 here, defined by the tower F_{p^{12}} = F_{p^6}(w) / (w^2 - v).
//!
//! An element is a pair (f0, f1) of F_{p^6} elements standing for f0 + f1 w. It is just as
//! valid to view it as six F_{p^2} coefficients over the basis {1, w, w^2, ..., w^5}, since
//! w^2 = v:
//!
//! f = f0.f0 + f1.f0 w + f0.f1 w^2 + f1.f1 w^3 + f0.f2 w^4 + f1.f2 w^5
//!
//! The Frobenius map and the compressed cyclotomic arithmetic (see `cyclotomic.rs`) are both
//! most naturally expressed on this six-slot view, while multiplication and inversion follow
//! the quadratic structure over F_{p^6}.
use crate::fields::error::FieldError;
use crate::fields::extensions::FieldExtension;
use crate::fields::fp::FieldExtensionTrait;
use crate::fields::fp2::Fp2;
use crate::fields::fp6::Fp6;
use crypto_bigint::rand_core::CryptoRngCore;
use num_traits::{One, Zero};
use std::ops::Mul;

pub type Fp12 = FieldExtension<12, 2, Fp6>;

impl FieldExtensionTrait for Fp12 {
    /// The quadratic non-residue of this level is w itself.
    fn non_residue() -> Self {
        Self::new(&[Fp6::zero(), Fp6::one()])
    }
    /// (a0 + a1 w) w = v a1 + a0 w
    fn residue_mul(&self) -> Self {
        Self::new(&[self.0[1].residue_mul(), self.0[0]])
    }
    fn square(&self) -> Self {
        // For F_{p^{12}} = F_{p^6}(w)/(w^2-v), and A=a_0 + a_1*w \in F_{p^{12}},
        // we determine C=c_0+c_1*w = A^2\in F_{p^{12}}
        // Alg 22 from <https://eprint.iacr.org/2010/354.pdf>
        let (a0, a1) = (self.0[0], self.0[1]);
        let t0 = (a0 + a1) * (a0 + a1.residue_mul());
        let c1 = a0 * a1;
        Self::new(&[t0 - c1 - c1.residue_mul(), c1 + c1])
    }
    /// The norm a0^2 - v a1^2 lands in F_{p^6}, where the inversion happens.
    fn inverse(&self) -> Result<Self, FieldError> {
        let (a0, a1) = (self.0[0], self.0[1]);
        let norm = a0.square() - a1.square().residue_mul();
        let inverse = norm.inverse().map_err(|e| {
            tracing::trace!(element = ?self, "dodectic inversion of zero");
            e
        })?;
        Ok(Self::new(&[a0 * inverse, -a1 * inverse]))
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::new(&[Fp6::rand(rng), Fp6::rand(rng)])
    }
}

impl Mul for Fp12 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        // this is again simple Karatsuba multiplication
        // see comments in Fp2 impl of `Mul` trait
        let t0 = self.0[0] * other.0[0];
        let t1 = self.0[1] * other.0[1];

        Self::new(&[
            t1.residue_mul() + t0,
            (self.0[0] + self.0[1]) * (other.0[0] + other.0[1]) - t0 - t1,
        ])
    }
}

/// Below are additional functions needed on Fp12 for the pairing operations
impl Fp12 {
    /// Conjugation over F_{p^6}, which is the p^6-power Frobenius. In the cyclotomic subgroup
    /// this is the inverse; outside of it, it is not, and no membership check is made.
    pub fn unitary_inverse(&self) -> Self {
        Self::new(&[self.0[0], -self.0[1]])
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
    /// Multiplication by an element of the shape produced by line evaluations: the only
    /// non-zero slots of `rhs` are `f0.f0`, `f1.f0` and `f1.f1` (the coefficients of 1, w and
    /// w^3 in the six-slot view). No other slot of `rhs` is read.
    ///
    /// This is the dense Karatsuba product with every term that would multiply a known zero
    /// removed, see Algs 21-25 of <https://eprint.iacr.org/2010/354.pdf>.
    pub fn mul_sparse(&self, rhs: &Self) -> Self {
        let (a0, a1) = (self.0[0], self.0[1]);
        let b00 = rhs.0[0].0[0];
        let b1 = rhs.0[1];

        let t0 = a0.scale(b00);
        let t1 = a1.mul_sparse(&b1);
        let t2 = Fp6::new(&[b00 + b1.0[0], b1.0[1], Fp2::zero()]);
        let c1 = (a0 + a1).mul_sparse(&t2) - t0 - t1;
        Self::new(&[t1.residue_mul() + t0, c1])
    }
    /// The p-power Frobenius map. On the six-slot view this conjugates every F_{p^2}
    /// coefficient and multiplies the coefficient of w^k by gamma^k = xi^(k (p-1) / 6).
    pub fn frobenius(&self) -> Self {
        let (f0, f1) = (&self.0[0].0, &self.0[1].0);
        Self::new(&[
            Fp6::new(&[
                f0[0].conjugate(),
                f0[1].conjugate().mul_frobenius_coeff(2),
                f0[2].conjugate().mul_frobenius_coeff(4),
            ]),
            Fp6::new(&[
                f1[0].conjugate().mul_frobenius_coeff(1),
                f1[1].conjugate().mul_frobenius_coeff(3),
                f1[2].conjugate().mul_frobenius_coeff(5),
            ]),
        ])
    }
    /// The p^k-power Frobenius map. The map has order 12, so only `k mod 12` applications
    /// are performed.
    pub fn frobenius_map(&self, k: usize) -> Self {
        (0..k % 12).fold(*self, |acc, _| acc.frobenius())
    }
    /// Maps an arbitrary non-zero element into the cyclotomic subgroup, the "easy part" of
    /// the final exponentiation: a^((p^6 - 1)(p^2 + 1)).
    pub fn cyclotomic(&self) -> Result<Self, FieldError> {
        let r = self.unitary_inverse() * self.inverse()?;
        Ok(r * r.frobenius().frobenius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::fp::Fp;
    use crypto_bigint::{rand_core::OsRng, U256};

    fn create_field(value: [u64; 4]) -> Fp {
        Fp::new(U256::from_words(value))
    }
    fn create_field_extension(v: [[u64; 4]; 12]) -> Fp12 {
        Fp12::new(&[
            Fp6::new(&[
                Fp2::new(&[create_field(v[0]), create_field(v[1])]),
                Fp2::new(&[create_field(v[2]), create_field(v[3])]),
                Fp2::new(&[create_field(v[4]), create_field(v[5])]),
            ]),
            Fp6::new(&[
                Fp2::new(&[create_field(v[6]), create_field(v[7])]),
                Fp2::new(&[create_field(v[8]), create_field(v[9])]),
                Fp2::new(&[create_field(v[10]), create_field(v[11])]),
            ]),
        ])
    }
    fn reference_element() -> Fp12 {
        create_field_extension([
            [1, 0, 0, 0],
            [0, 2, 0, 0],
            [0, 0, 3, 0],
            [0, 0, 0, 4],
            [5, 0, 0, 0],
            [0, 6, 0, 0],
            [0, 6, 0, 0],
            [5, 0, 0, 0],
            [0, 0, 0, 4],
            [0, 0, 3, 0],
            [0, 2, 0, 0],
            [1, 0, 0, 0],
        ])
    }
    fn sparse_element(rng: &mut OsRng) -> Fp12 {
        Fp12::new(&[
            Fp6::new(&[Fp2::rand(rng), Fp2::zero(), Fp2::zero()]),
            Fp6::new(&[Fp2::rand(rng), Fp2::rand(rng), Fp2::zero()]),
        ])
    }

    mod addition_tests {
        use super::*;
        #[test]
        fn test_addition_closure() {
            let a = Fp12::rand(&mut OsRng);
            let b = Fp12::rand(&mut OsRng);
            assert_eq!(a + b - b, a);
            assert_eq!(a + Fp12::zero(), a);
            assert_eq!(-a + a, Fp12::zero());
        }
    }
    mod multiplication_tests {
        use super::*;

        #[test]
        fn test_multiplication_associativity_commutativity_distributivity() {
            for _ in 0..10 {
                let a = Fp12::rand(&mut OsRng);
                let b = Fp12::rand(&mut OsRng);
                let c = Fp12::rand(&mut OsRng);
                assert_eq!((a * b) * c, a * (b * c), "Multiplication is not associative");
                assert_eq!(a * b, b * a, "Multiplication is not commutative");
                assert_eq!(
                    a * (b + c),
                    a * b + a * c,
                    "Multiplication is not distributive"
                );
            }
        }
        #[test]
        fn test_multiplication_cases() {
            let a = Fp12::rand(&mut OsRng);
            assert_eq!(a * Fp12::zero(), Fp12::zero());
            assert_eq!(a * Fp12::one(), a);
            assert_eq!(a.square(), a * a);
            assert_eq!(Fp12::one().square(), Fp12::one());
        }
        #[test]
        fn test_residue_mul() {
            let a = Fp12::rand(&mut OsRng);
            assert_eq!(a.residue_mul(), a * Fp12::non_residue());
            // w^2 = v
            let v = Fp12::new(&[Fp6::non_residue(), Fp6::zero()]);
            assert_eq!(a.residue_mul().residue_mul(), a * v);
        }
        #[test]
        fn test_sparse_multiplication() {
            for _ in 0..10 {
                let a = Fp12::rand(&mut OsRng);
                let b = sparse_element(&mut OsRng);
                assert_eq!(a.mul_sparse(&b), a * b);
            }
        }
        #[test]
        fn test_aliasing() {
            let a = Fp12::rand(&mut OsRng);
            let mut x = a;
            x *= x;
            assert_eq!(x, a.square());
            let mut y = a;
            y = y.residue_mul();
            assert_eq!(y, a * Fp12::non_residue());
            let mut z = a;
            z = z.frobenius();
            assert_eq!(z, a.frobenius());
        }
    }
    mod inversion_tests {
        use super::*;

        #[test]
        fn test_inverse() {
            for _ in 0..10 {
                let a = Fp12::rand(&mut OsRng);
                assert_eq!(a * a.inverse().unwrap(), Fp12::one());
            }
        }
        #[test]
        fn test_divide_by_zero() {
            assert_eq!(Fp12::zero().inverse(), Err(FieldError::ZeroInversion));
            assert_eq!(Fp12::zero().cyclotomic(), Err(FieldError::ZeroInversion));
        }
        #[test]
        fn test_unitary_inverse_in_cyclotomic_subgroup() {
            let a = Fp12::rand(&mut OsRng).cyclotomic().unwrap();
            assert_eq!(a.unitary_inverse(), a.inverse().unwrap());
            assert_eq!(a * a.unitary_inverse(), Fp12::one());
        }
        #[test]
        fn test_cancellation_of_cyclotomic_elements() {
            let a = Fp12::rand(&mut OsRng).cyclotomic().unwrap();
            let b = Fp12::rand(&mut OsRng).cyclotomic().unwrap();
            assert_eq!(a.inverse().unwrap() * (a * b), b);
        }
    }
    mod frobenius_tests {
        use super::*;

        #[test]
        fn test_frobenius() {
            let expected = create_field_extension([
                [1, 0, 0, 0],
                [
                    0xa700000000000013,
                    0x6121000000000011,
                    0xba344d8000000008,
                    0x2523648240000001,
                ],
                [
                    0xb414b0e99601a939,
                    0xff11a2ba8aea315b,
                    0xdb7d688000000198,
                    0x126f0846c0000028,
                ],
                [
                    0x48c47711dc476f67,
                    0x7e7cfffffffffeab,
                    0x96aa677fffffff9b,
                    0x13eb0fb13ffffff5,
                ],
                [
                    0xa37ffffffffffff0,
                    0xf3f3fffffffffff1,
                    0x49b3623ffffffffc,
                    0x2523648240000000,
                ],
                [
                    0xd2ffffffffffff2f,
                    0xa494ffffffffff51,
                    0xb5f6ab7fffffffcc,
                    0x21aefbe73ffffffa,
                ],
                [
                    0x432490f2cc46e6a1,
                    0x10283b36626e799c,
                    0x4bd2e7acc5e872f7,
                    0x1946d30c00430186,
                ],
                [
                    0xccf06b88dc10cef0,
                    0x27a237129916d977,
                    0x2123c0aca755b8d9,
                    0x24cd188cf3ec210a,
                ],
                [
                    0x55340ff8945077ad,
                    0xa5b88442e61fd3d9,
                    0x6c258f97501b8159,
                    0x023fcdc08d1a6a35,
                ],
                [
                    0x9800dd3dd4bba364,
                    0x42e6c127f05284d7,
                    0x95e4e47960ddec2b,
                    0x0f332f3ac93add4f,
                ],
                [
                    0xbe618483bb8572df,
                    0x6949332b2df67d01,
                    0xac8ffade056b47e9,
                    0x206a2d327744ca7c,
                ],
                [
                    0x2b6b90259b0eae24,
                    0x23e26f9371db7a5c,
                    0xfcab42afa0f24cd6,
                    0x1b1849833f1fa100,
                ],
            ]);
            assert_eq!(reference_element().frobenius(), expected, "Frobenius failed");
        }
        #[test]
        fn test_frobenius_is_pth_power() {
            let a = Fp12::rand(&mut OsRng);
            let p = Fp::characteristic().to_words();
            assert_eq!(a.frobenius(), a.pow(&p));
        }
        #[test]
        fn test_frobenius_order() {
            let a = Fp12::rand(&mut OsRng);
            assert_eq!(a.frobenius_map(12), a);
            assert_eq!(a.frobenius_map(6), a.unitary_inverse());
            assert_eq!(a.frobenius_map(0), a);
            assert_eq!(a.frobenius_map(3), a.frobenius().frobenius().frobenius());
        }
        #[test]
        fn test_frobenius_is_a_homomorphism() {
            let a = Fp12::rand(&mut OsRng);
            let b = Fp12::rand(&mut OsRng);
            assert_eq!((a * b).frobenius(), a.frobenius() * b.frobenius());
            assert_eq!((a + b).frobenius(), a.frobenius() + b.frobenius());
        }
    }
    mod invariants {
        use super::*;
        use proptest::prelude::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        fn arbitrary_fp12() -> impl Strategy<Value = Fp12> {
            any::<[u8; 32]>().prop_map(|seed| Fp12::rand(&mut StdRng::from_seed(seed)))
        }

        proptest! {
            #[test]
            fn test_square(a in arbitrary_fp12()) {
                prop_assert_eq!(a.square(), a * a);
            }

            #[test]
            fn test_inverse(a in arbitrary_fp12()) {
                prop_assume!(!a.is_zero());
                prop_assert_eq!(a * a.inverse().unwrap(), Fp12::one());
            }

            #[test]
            fn test_cyclotomic_norm(a in arbitrary_fp12()) {
                prop_assume!(!a.is_zero());
                let c = a.cyclotomic().unwrap();
                // x^(p^4 - p^2 + 1) = 1, i.e. x^(p^4) x = x^(p^2)
                prop_assert_eq!(c.frobenius_map(4) * c, c.frobenius_map(2));
            }
        }
    }
    mod fuzz {
        use super::*;
        use quickcheck_macros::quickcheck;

        #[quickcheck]
        fn fuzz_scalar_embedding(a: u64, b: u64) -> bool {
            let x = Fp12::from(a);
            let y = Fp12::from(b);
            x * y == Fp12::from(a).scale(Fp6::from(b))
        }
        #[quickcheck]
        fn fuzz_frobenius_fixes_base_field(a: u64) -> bool {
            let x = Fp12::from(a);
            x.frobenius() == x
        }
    }
}
