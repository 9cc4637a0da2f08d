//! # bn-tower: the extension field tower of BN-P254
//!
//! bn-tower implements the arithmetic of the fields F_{p^2}, F_{p^6} and F_{p^{12}} over the
//! BN-P254 prime, organised as the tower
//!
//! ```text
//! F_p  ->  F_{p^2} = F_p[i] / (i^2 + 1)
//!      ->  F_{p^6} = F_{p^2}[v] / (v^3 - (1 + i))
//!      ->  F_{p^{12}} = F_{p^6}[w] / (w^2 - v)
//! ```
//!
//! which is the algebraic layer on which a pairing (Miller loop and final exponentiation) is
//! computed. The pairing itself, curve arithmetic and serialization live elsewhere and call
//! into this crate.
//!
//! ## Key Features
//!
//! - Karatsuba multiplication at every level, with a lazily reduced product on F_{p^6}
//! - Chung-Hasan squarings on F_{p^6}
//! - Sparse multiplication for line-function shaped operands
//! - Frobenius maps with the twisting constants derived once per process
//! - Karabina compressed squaring and batched decompression in the cyclotomic subgroup
//!
//! ## Basic Usage
//!
//! ```rust
//! use bn_tower::{FieldExtensionTrait, Fp12};
//! use crypto_bigint::rand_core::OsRng;
//!
//! let a = Fp12::rand(&mut OsRng);
//! // move into the cyclotomic subgroup, where compressed squaring applies
//! let g = a.cyclotomic().expect("non-zero element");
//! let h = g.exp_cyclotomic().expect("non-degenerate compression");
//! assert_eq!(h.unitary_inverse(), h.inverse().expect("non-zero element"));
//! ```
//!
//! ## Core Components
//!
//! - [`Fp`], [`Fp2`], [`Fp6`], [`Fp12`]: the levels of the tower
//! - [`FieldExtensionTrait`]: the interface shared by every level
//! - [`Fp6Wide`]: unreduced products on F_{p^6}
//! - [`CompressedFp12`]: the packed representation of cyclotomic elements
//! - [`FieldError`]: the failures of inversion and decompression
//! - [`tower()`]: the derived constants of the tower
//!
//! ## Performance and Security
//!
//! Base field arithmetic is constant time through `crypto_bigint`'s Montgomery form, and
//! equality and selection go through `subtle`. Failures are reported as values and never
//! panic.

mod fields;

pub use crate::fields::config::{
    tower, TowerConfig, CYCLOTOMIC_HIGH_SQUARINGS, CYCLOTOMIC_LOW_SQUARINGS,
};
pub use crate::fields::cyclotomic::CompressedFp12;
pub use crate::fields::error::FieldError;
pub use crate::fields::fp::{FieldExtensionTrait, Fp, FpWide};
pub use crate::fields::fp12::Fp12;
pub use crate::fields::fp2::{Fp2, Fp2Wide, FP2_NON_RESIDUE};
pub use crate::fields::fp6::{Fp6, Fp6Wide};
