use group::{prime::PrimeCurveAffine, Curve};
use halo2curves_axiom::{
    bn256::{Fq as Halo2Fq, Fr as Halo2Fr, G1Affine as Halo2G1, G2Affine as Halo2G2},
    ff::Field as _,
};
use hex_literal::hex;
use rand::{rngs::StdRng, SeedableRng};
use zkv_algebra::{field::Complex, moduli_declare, DivUnsafe, Field, IntMod};

use crate::{impl_sw_affine, impl_sw_group_ops, msm, weierstrass::WeierstrassPoint, Group};

moduli_declare! {
    Fq { modulus = "21888242871839275222246405745257275088696311157297823662689037894645226208583" },
    Fr { modulus = "21888242871839275222246405745257275088548364400416034343698204186575808495617" },
}

type Fq2 = Complex<Fq>;

const FQ_THREE: Fq = Fq::from_const_u64(3);
impl_sw_affine!(G1, Fq, FQ_THREE, Fq::from_const_u64(3));
impl_sw_group_ops!(G1, Fq);

const FQ2_THREE: Fq2 = Fq2::new(Fq::from_const_u64(3), Fq::ZERO);
// 3 / (9 + u)
const TWIST_B: Fq2 = Fq2::new(
    Fq::from_const_bytes(hex!(
        "e538a124dce66732a3efdb59e5c5b4b5c36ae01b9918be81aeaab8ce409d142b"
    )),
    Fq::from_const_bytes(hex!(
        "d215c38506bda2e452182de584a04fa7f4fdd8eeadaf2ccdd4fef03ab0139700"
    )),
);
impl_sw_affine!(G2, Fq2, FQ2_THREE, TWIST_B);
impl_sw_group_ops!(G2, Fq2);

fn fq_from_halo2(x: Halo2Fq) -> Fq {
    Fq::from_le_bytes(&x.to_bytes()).unwrap()
}

fn g1_from_halo2(p: Halo2G1) -> G1 {
    G1::from_xy(fq_from_halo2(p.x), fq_from_halo2(p.y)).unwrap()
}

fn g2_from_halo2(p: Halo2G2) -> G2 {
    G2::from_xy(
        Fq2::new(fq_from_halo2(p.x.c0), fq_from_halo2(p.x.c1)),
        Fq2::new(fq_from_halo2(p.y.c0), fq_from_halo2(p.y.c1)),
    )
    .unwrap()
}

fn fr_from_halo2(s: Halo2Fr) -> Fr {
    Fr::from_le_bytes(&s.to_bytes()).unwrap()
}

#[test]
fn test_twist_b() {
    let b = FQ2_THREE.div_unsafe(Fq2::new(Fq::from_u8(9), Fq::ONE));
    assert_eq!(b, TWIST_B);
}

#[test]
fn test_identity_handling() {
    let g = g1_from_halo2(Halo2G1::generator());
    let id = <G1 as Group>::IDENTITY;
    assert!(id.is_identity());
    assert!(id.is_on_curve());
    assert_eq!(g.clone() + &id, g);
    assert_eq!(id.clone() + &g, g);
    assert_eq!(g.clone() - &g, id);
    assert_eq!(g.clone() + -g.clone(), id);
    assert_eq!(id.double(), id);
    assert_eq!(g.mul_be_bytes(&[]), id);
    assert_eq!(g.mul_be_bytes(&[0, 0]), id);
    assert_eq!(id.mul_be_bytes(&[5]), id);
}

#[test]
fn test_from_xy_rejects_off_curve() {
    assert!(G1::from_xy(Fq::ONE, Fq::from_u8(3)).is_none());
    assert!(G1::from_xy(Fq::ZERO, Fq::ZERO).unwrap().is_identity());
    let g = g1_from_halo2(Halo2G1::generator());
    assert!(G1::from_xy(g.x().clone(), -g.y()).is_some());
}

#[test]
fn test_g1_matches_halo2() {
    let mut rng = StdRng::seed_from_u64(2);
    let g = g1_from_halo2(Halo2G1::generator());
    for _ in 0..10 {
        let s = Halo2Fr::random(&mut rng);
        let t = Halo2Fr::random(&mut rng);
        let expected = (Halo2G1::generator() * s).to_affine();
        let p = g.mul_scalar(&fr_from_halo2(s));
        assert_eq!(p, g1_from_halo2(expected));

        let q = g.mul_scalar(&fr_from_halo2(t));
        let expected_sum = (Halo2G1::generator() * (s + t)).to_affine();
        assert_eq!(p.clone() + &q, g1_from_halo2(expected_sum));
        assert_eq!(p.double(), p.clone() + &p);
    }
}

#[test]
fn test_g2_matches_halo2() {
    let mut rng = StdRng::seed_from_u64(3);
    let g = g2_from_halo2(Halo2G2::generator());
    for _ in 0..5 {
        let s = Halo2Fr::random(&mut rng);
        let expected = (Halo2G2::generator() * s).to_affine();
        assert_eq!(g.mul_scalar(&fr_from_halo2(s)), g2_from_halo2(expected));
    }
}

#[test]
fn test_scalar_mul_unreduced() {
    // r * G = O, and (r + 1) * G = G
    let g = g1_from_halo2(Halo2G1::generator());
    let r = Fr::modulus_biguint();
    assert!(g.mul_be_bytes(&r.to_bytes_be()).is_identity());
    assert_eq!(g.mul_be_bytes(&(r + 1u32).to_bytes_be()), g);
}

#[test]
fn test_msm() {
    let mut rng = StdRng::seed_from_u64(4);
    for n in [0usize, 1, 3, 5, 40] {
        let scalars: Vec<Halo2Fr> = (0..n).map(|_| Halo2Fr::random(&mut rng)).collect();
        let bases: Vec<Halo2G1> = (0..n)
            .map(|_| (Halo2G1::generator() * Halo2Fr::random(&mut rng)).to_affine())
            .collect();
        let expected = scalars
            .iter()
            .zip(bases.iter())
            .fold(Halo2G1::identity().to_curve(), |acc, (s, b)| acc + b * s)
            .to_affine();

        let coeffs: Vec<Fr> = scalars.into_iter().map(fr_from_halo2).collect();
        let points: Vec<G1> = bases.into_iter().map(g1_from_halo2).collect();
        let result = msm(&coeffs, &points);
        if n == 0 {
            assert!(result.is_identity());
        } else {
            assert_eq!(result, g1_from_halo2(expected));
        }
    }
}

#[test]
fn test_msm_small_and_zero_scalars() {
    let g = g1_from_halo2(Halo2G1::generator());
    let bases = vec![g.clone(), g.double(), g.clone()];
    let coeffs = vec![Fr::from_u8(3), Fr::ZERO, -Fr::ONE];
    assert_eq!(msm(&coeffs, &bases), g.double());
    assert!(msm(&[Fr::ZERO, Fr::ZERO], &bases[..2]).is_identity());
}
