#![no_main]
use bn_tower::{CompressedFp12, FieldError, FieldExtensionTrait, Fp, Fp12, Fp2, Fp6};
use crypto_bigint::U256;
use libfuzzer_sys::fuzz_target;
use num_traits::{One, Zero};

// Reads 32 bytes as a (reduced) base field element.
fn fp_from_bytes(bytes: &[u8]) -> Fp {
    let mut words = [0u64; 4];
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *w = u64::from_le_bytes(buf);
    }
    Fp::new(U256::from_words(words))
}

fn fp12_from_bytes(data: &[u8]) -> Fp12 {
    let slots: Vec<Fp2> = data
        .chunks_exact(64)
        .take(6)
        .map(|c| Fp2::new(&[fp_from_bytes(&c[..32]), fp_from_bytes(&c[32..])]))
        .collect();
    Fp12::new(&[
        Fp6::new(&[slots[0], slots[1], slots[2]]),
        Fp6::new(&[slots[3], slots[4], slots[5]]),
    ])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 * 384 {
        return;
    }
    let a = fp12_from_bytes(&data[..384]);
    let b = fp12_from_bytes(&data[384..768]);

    // Fp6 level
    let (x, y) = (a.coefficients()[0], b.coefficients()[0]);
    assert_eq!(x.square(), x * x, "Fp6 SQR3 squaring failed");
    assert_eq!(x.square2(), x * x, "Fp6 SQR2 squaring failed");
    assert_eq!(x.mul_unr(&y).reduce(), x * y, "Fp6 unreduced product failed");

    // Fp12 level
    assert_eq!(a.square(), a * a, "Fp12 squaring failed");
    assert_eq!(a * b, b * a, "Fp12 multiplication is not commutative");
    assert_eq!(a.frobenius_map(12), a, "Frobenius does not have order 12");

    match a.inverse() {
        Ok(inv) => assert!((a * inv).is_one(), "Fp12 inversion failed"),
        Err(e) => {
            assert!(a.is_zero(), "non-zero element failed to invert");
            assert_eq!(e, FieldError::ZeroInversion);
        }
    }

    // cyclotomic subgroup
    if let Ok(g) = a.cyclotomic() {
        assert_eq!(g.unitary_inverse() * g, Fp12::one(), "cyclotomic map failed");
        match g.compress().square().decompress() {
            Ok(s) => assert_eq!(s, g.square(), "compressed squaring failed"),
            Err(e) => assert_eq!(e, FieldError::DegenerateCompression),
        }
        let packed: CompressedFp12 = g.compress();
        let squared = packed.square();
        match CompressedFp12::decompress_pair(&packed, &squared) {
            Ok((x, y)) => {
                assert_eq!(x, g, "batched decompression failed");
                assert_eq!(Ok(y), squared.decompress(), "batched decompression failed");
            }
            Err(e) => assert_eq!(e, FieldError::DegenerateCompression),
        }
    }
});
