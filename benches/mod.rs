use criterion::{criterion_group, criterion_main};

use field::cyclotomic::*;
use field::fp::*;
use field::fp12::*;
use field::fp2::*;
use field::fp6::*;

criterion_group!(
    fp_benches,
    test_fp_multiplication,
    test_fp_addition,
    test_fp_inversion,
    test_fp_halving,
    test_fp_random,
    test_fp_new
);
criterion_group!(
    fp2_benches,
    test_fp2_multiplication,
    test_fp2_squaring,
    test_fp2_inversion,
    test_fp2_pair_inversion,
    test_fp2_random
);
criterion_group!(
    fp6_benches,
    test_fp6_multiplication,
    test_fp6_unreduced_multiplication,
    test_fp6_sparse_multiplication,
    test_fp6_squaring,
    test_fp6_squaring2,
    test_fp6_inversion,
    test_fp6_random
);
criterion_group!(
    fp12_benches,
    test_fp12_multiplication,
    test_fp12_sparse_multiplication,
    test_fp12_squaring,
    test_fp12_inversion,
    test_fp12_frobenius,
    test_fp12_random
);
criterion_group!(
    cyclotomic_benches,
    test_cyclotomic_map,
    test_compressed_squaring,
    test_pair_decompression,
    test_cyclotomic_exponentiation
);

criterion_main!(
    fp_benches,
    fp2_benches,
    fp6_benches,
    fp12_benches,
    cyclotomic_benches
);
