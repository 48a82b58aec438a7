use eyre::Result;
use test_case::test_case;
use zkv_algebra::{ExpBytes, Field, IntMod};
use zkv_ecc::{weierstrass::WeierstrassPoint, AffinePoint, CyclicGroup, Group};
use zkv_pairing::{
    bn254::{Bn254, Fp, Fp12, Fp2, G1Affine, G2Affine, Scalar, BN254_ORDER},
    pairing::{MultiMillerLoop, PairingCheck, PairingCheckError},
};

fn g1_mul(s: u64) -> G1Affine {
    G1Affine::GENERATOR.mul_scalar(&Scalar::from_u64(s))
}

fn g2_mul(s: u64) -> G2Affine {
    G2Affine::GENERATOR.mul_scalar(&Scalar::from_u64(s))
}

#[test_case(2, 3)]
#[test_case(7, 11)]
#[test_case(0x1bba1, 0xdeadbeef)]
fn test_bilinearity(a: u64, b: u64) -> Result<()> {
    let ab = Scalar::from_u64(a) * Scalar::from_u64(b);

    let lhs = Bn254::pairing(&g1_mul(a), &g2_mul(b));
    let rhs = Bn254::pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR)
        .exp_bytes(true, &ab.to_be_bytes());
    assert_eq!(lhs, rhs);

    let swapped = Bn254::pairing(&g1_mul(b), &g2_mul(a));
    assert_eq!(lhs, swapped);

    let moved = Bn254::pairing(&G1Affine::GENERATOR.mul_scalar(&ab), &G2Affine::GENERATOR);
    assert_eq!(lhs, moved);
    Ok(())
}

#[test]
fn test_non_degenerate() {
    let e = Bn254::pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR);
    assert_ne!(e, Fp12::ONE);
    assert_eq!(e.exp_bytes(true, &BN254_ORDER.to_bytes_be()), Fp12::ONE);
}

#[test]
fn test_multi_pairing_is_product() {
    let ps = [g1_mul(5), g1_mul(9)];
    let qs = [g2_mul(13), g2_mul(4)];
    let prod = Bn254::pairing(&ps[0], &qs[0]) * Bn254::pairing(&ps[1], &qs[1]);
    assert_eq!(Bn254::multi_pairing(&ps, &qs), prod);
}

#[test]
fn test_pairing_check_accepts_cancelling_pairs() -> Result<()> {
    let p = g1_mul(17);
    let q = g2_mul(23);
    let ps = [p.clone().into_affine(), (-p).into_affine()];
    let qs = [q.clone().into_affine(), q.into_affine()];
    Bn254::pairing_check(&ps, &qs)?;
    Bn254::pairing_check_fallback(&ps, &qs)?;
    Ok(())
}

#[test]
fn test_pairing_check_rescaled_pairs() -> Result<()> {
    // e(6 G1, G2) * e(-2 G1, 3 G2) = 1
    let ps = [g1_mul(6).into_affine(), (-g1_mul(2)).into_affine()];
    let qs = [G2Affine::GENERATOR.into_affine(), g2_mul(3).into_affine()];
    Bn254::pairing_check(&ps, &qs)?;
    Ok(())
}

#[test]
fn test_pairing_check_rejects() {
    let ps = [g1_mul(17).into_affine(), g1_mul(17).into_affine()];
    let qs = [g2_mul(23).into_affine(), g2_mul(23).into_affine()];
    assert_eq!(Bn254::pairing_check(&ps, &qs), Err(PairingCheckError));
    assert_eq!(
        Bn254::pairing_check_fallback(&ps, &qs),
        Err(PairingCheckError)
    );
    assert_eq!(
        Bn254::pairing_check(&ps, &qs).unwrap_err().to_string(),
        "Pairing check failed"
    );
}

#[test]
fn test_identity_pairs_contribute_one() -> Result<()> {
    let o1 = AffinePoint::new(Fp::ZERO, Fp::ZERO);
    let o2 = AffinePoint::new(Fp2::ZERO, Fp2::ZERO);
    let g1 = G1Affine::GENERATOR.into_affine();
    let g2 = G2Affine::GENERATOR.into_affine();

    assert_eq!(
        Bn254::multi_miller_loop(&[o1.clone(), g1.clone()], &[g2.clone(), o2.clone()]),
        Fp12::ONE
    );
    Bn254::pairing_check(&[o1.clone()], &[g2])?;
    Bn254::pairing_check(&[g1], &[o2])?;
    Bn254::pairing_check(&[], &[])?;

    let e = Bn254::pairing(&<G1Affine as Group>::IDENTITY, &G2Affine::GENERATOR);
    assert_eq!(e, Fp12::ONE);
    Ok(())
}

#[test]
fn test_pairing_matches_fallback_exponent() {
    let p = g1_mul(99).into_affine();
    let q = g2_mul(101).into_affine();
    let f = Bn254::multi_miller_loop(&[p.clone()], &[q.clone()]);
    assert_eq!(
        Bn254::multi_pairing(&[g1_mul(99)], &[g2_mul(101)]),
        f.exp_bytes(true, &Bn254::FINAL_EXPONENT)
    );
}

#[test]
fn test_g2_subgroup() {
    assert!(g2_mul(12345).is_in_subgroup());
    assert!(G2Affine::NEG_GENERATOR.is_in_subgroup());
    assert!(G1Affine::GENERATOR
        .mul_be_bytes(&BN254_ORDER.to_bytes_be())
        .is_identity());
}
