//! This file dictates the implementation of the field extension struct shared by every level
//! of the tower. These are not a total list of the mathematical properties that are satisfied
//! by an extension, but is a MWE of the functionality needed herein. Because of the
//! quotienting on the polynomial ring, the functional forms of multiplication and inversion
//! are specific to each level and live next to the concrete type aliases.
//!
//! What every level shares is coefficient-wise: addition, subtraction, negation, equality,
//! constant-time selection, the zero element, and scaling by an element of the subfield.
//! `One` and `MulAssign` are also provided here, for any level that defines `Mul`.

use crate::fields::fp::FieldExtensionTrait;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// the following struct can unfortunately not have much that is const,
// since the underlying Mul, Add, etc., are not, and const traits are in the works
// https://github.com/rust-lang/rust/issues/67792
//
// `D` is the absolute degree of the extension over Fp, `N` the degree over the subfield `F`.
#[derive(Copy, Clone, Debug)]
pub struct FieldExtension<const D: usize, const N: usize, F: FieldExtensionTrait>(
    pub(crate) [F; N],
);

impl<const D: usize, const N: usize, F: FieldExtensionTrait> From<u64>
    for FieldExtension<D, N, F>
{
    fn from(value: u64) -> Self {
        let mut retval = [F::zero(); N];
        retval[0] = F::from(value);
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> FieldExtension<D, N, F> {
    pub const fn new(c: &[F; N]) -> Self {
        Self(*c)
    }
    /// The coefficients over the subfield, lowest power first.
    pub fn coefficients(&self) -> &[F; N] {
        &self.0
    }
    pub fn scale(&self, factor: F) -> Self {
        let mut retval = [F::zero(); N];
        for (r, c) in retval.iter_mut().zip(self.0.iter()) {
            *r = *c * factor;
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> ConstantTimeEq
    for FieldExtension<D, N, F>
{
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut retval = Choice::from(1u8);
        for i in 0..N {
            retval &= self.0[i].ct_eq(&other.0[i]);
        }
        retval
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> ConditionallySelectable
    for FieldExtension<D, N, F>
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut retval = [F::zero(); N];
        for (i, r) in retval.iter_mut().enumerate() {
            *r = F::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> Add for FieldExtension<D, N, F> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut retval = [F::zero(); N];
        for (i, r) in retval.iter_mut().enumerate() {
            *r = self.0[i] + other.0[i];
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> AddAssign
    for FieldExtension<D, N, F>
{
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> Sub for FieldExtension<D, N, F> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut retval = [F::zero(); N];
        for (i, r) in retval.iter_mut().enumerate() {
            *r = self.0[i] - other.0[i];
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> SubAssign
    for FieldExtension<D, N, F>
{
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> MulAssign
    for FieldExtension<D, N, F>
where
    Self: Mul<Output = Self>,
{
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> Default
    for FieldExtension<D, N, F>
{
    fn default() -> Self {
        Self::new(&[F::default(); N])
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> PartialEq
    for FieldExtension<D, N, F>
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> Neg for FieldExtension<D, N, F> {
    type Output = Self;
    fn neg(self) -> Self {
        let mut retval = [F::zero(); N];
        for (i, r) in retval.iter_mut().enumerate() {
            *r = -self.0[i];
        }
        Self::new(&retval)
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> Zero for FieldExtension<D, N, F> {
    fn zero() -> Self {
        Self::new(&[F::zero(); N])
    }
    fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_zero())
    }
}
impl<const D: usize, const N: usize, F: FieldExtensionTrait> One for FieldExtension<D, N, F>
where
    Self: Mul<Output = Self>,
{
    fn one() -> Self {
        Self::from(1u64)
    }
}
