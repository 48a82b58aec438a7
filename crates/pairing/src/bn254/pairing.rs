use itertools::izip;
use zkv_algebra::{
    field::{ComplexConjugate, FieldExtension},
    Field,
};
use zkv_ecc::{weierstrass::WeierstrassPoint, AffinePoint};

use super::{
    Bn254, Fp, Fp12, Fp2, G1Affine, G2Affine, BN254_PSEUDO_BINARY_ENCODING, BN254_SEED,
};
use crate::pairing::{
    exp_check_fallback, Evaluatable, EvaluatedLine, FinalExp, FromLineDType, LineMulDType,
    MillerStep, MultiMillerLoop, PairingCheck, PairingCheckError, PairingIntrinsics,
};

impl FromLineDType<Fp2> for Fp12 {
    fn from_evaluated_line_d_type(line: EvaluatedLine<Fp2>) -> Fp12 {
        FieldExtension::<Fp2>::from_coeffs([
            Fp2::ONE,
            line.b,
            Fp2::ZERO,
            line.c,
            Fp2::ZERO,
            Fp2::ZERO,
        ])
    }
}

impl LineMulDType<Fp2, Fp12> for Bn254 {
    /// Multiplies two lines in 013-form to get an element in 01234-form
    fn mul_013_by_013(l0: &EvaluatedLine<Fp2>, l1: &EvaluatedLine<Fp2>) -> [Fp2; 5] {
        let b0 = &l0.b;
        let c0 = &l0.c;
        let b1 = &l1.b;
        let c1 = &l1.c;

        // where w⁶ = xi
        // l0 * l1 = 1 + (b0 + b1)w + (b0b1)w² + (c0 + c1)w³ + (b0c1 + b1c0)w⁴ + (c0c1)w⁶
        //         = (1 + c0c1 * xi) + (b0 + b1)w + (b0b1)w² + (c0 + c1)w³ + (b0c1 + b1c0)w⁴
        let x0 = Fp2::ONE + c0 * c1 * Bn254::XI;
        let x1 = b0 + b1;
        let x2 = b0 * b1;
        let x3 = c0 + c1;
        let x4 = b0 * c1 + b1 * c0;

        [x0, x1, x2, x3, x4]
    }

    /// `(f0 + f1 w)(1 + L w) = (f0 + f1 L v) + (f1 + f0 L) w` with `L = b + c v`.
    fn mul_by_013(f: &Fp12, l: &EvaluatedLine<Fp2>) -> Fp12 {
        let c0 = f.c0 + f.c1.mul_by_01(&l.b, &l.c).mul_by_nonresidue();
        let c1 = f.c1 + f.c0.mul_by_01(&l.b, &l.c);
        Fp12::new(c0, c1)
    }

    /// Multiplies a line in 01234-form with a Fp12 element to get an Fp12 element
    fn mul_by_01234(f: &Fp12, x: &[Fp2; 5]) -> Fp12 {
        // reorder the sparse coefficients into the tower layout:
        //   c0 = (x0, x2, x4), c1 = (x1, x3, 0)
        let o0 = &x[0];
        let o1 = &x[2];
        let o2 = &x[4];
        let o3 = &x[1];
        let o4 = &x[3];

        let xi = &Bn254::XI;

        let s0 = &f.c0.c0;
        let s1 = &f.c0.c1;
        let s2 = &f.c0.c2;
        let s3 = &f.c1.c0;
        let s4 = &f.c1.c1;
        let s5 = &f.c1.c2;

        // c00 = s0o0 + xi(s1o2 + s2o1 + s4o4 + s5o3)
        // c01 = s0o1 + s1o0 + s3o3 + xi(s2o2 + s5o4)
        // c02 = s0o2 + s1o1 + s2o0 + s3o4 + s4o3
        // c10 = s0o3 + s3o0 + xi(s2o4 + s4o2 + s5o1)
        // c11 = s0o4 + s1o3 + s3o1 + s4o0 + xi(s5o2)
        // c12 = s1o4 + s2o3 + s3o2 + s4o1 + s5o0
        let c00 = s0 * o0 + xi * &(s1 * o2 + s2 * o1 + s4 * o4 + s5 * o3);
        let c01 = s0 * o1 + s1 * o0 + s3 * o3 + xi * &(s2 * o2 + s5 * o4);
        let c02 = s0 * o2 + s1 * o1 + s2 * o0 + s3 * o4 + s4 * o3;
        let c10 = s0 * o3 + s3 * o0 + xi * &(s2 * o4 + s4 * o2 + s5 * o1);
        let c11 = s0 * o4 + s1 * o3 + s3 * o1 + s4 * o0 + xi * &(s5 * o2);
        let c12 = s1 * o4 + s2 * o3 + s3 * o2 + s4 * o1 + s5 * o0;

        Fp12::from_coeffs([c00, c10, c01, c11, c02, c12])
    }
}

#[allow(non_snake_case)]
impl MultiMillerLoop for Bn254 {
    type Fp = Fp;
    type Fp12 = Fp12;

    const SEED_ABS: u64 = BN254_SEED;
    const PSEUDO_BINARY_ENCODING: &'static [i8] = &BN254_PSEUDO_BINARY_ENCODING;

    fn evaluate_lines_vec(f: Fp12, lines: Vec<EvaluatedLine<Fp2>>) -> Fp12 {
        let mut f = f;
        let mut chunks = lines.chunks_exact(2);
        for chunk in chunks.by_ref() {
            let prod = Self::mul_013_by_013(&chunk[0], &chunk[1]);
            f = Self::mul_by_01234(&f, &prod);
        }
        if let [line] = chunks.remainder() {
            f = Self::mul_by_013(&f, line);
        }
        f
    }

    /// The top two digits of the encoding are `1, 0`; starting from `T = Q` and `f = 1`, the
    /// first iteration is a single doubling.
    fn pre_loop(
        Q_acc: Vec<AffinePoint<Fp2>>,
        _Q: &[AffinePoint<Fp2>],
        xy_fracs: &[(Fp, Fp)],
    ) -> (Fp12, Vec<AffinePoint<Fp2>>) {
        let (Q_out_double, lines_2S) = Q_acc
            .iter()
            .map(Self::miller_double_step)
            .unzip::<_, _, Vec<_>, Vec<_>>();

        let initial_lines = izip!(lines_2S.iter(), xy_fracs.iter())
            .map(|(line_2S, xy_frac)| line_2S.evaluate(xy_frac))
            .collect::<Vec<_>>();

        let f = Self::evaluate_lines_vec(Fp12::ONE, initial_lines);
        (f, Q_out_double)
    }

    /// Compute f_{Miller,Q}(P) from f_{6x+2,Q}(P)
    fn post_loop(
        f: &Fp12,
        Q_acc: Vec<AffinePoint<Fp2>>, // at this point, Q_acc = (6x+2)Q
        Q: &[AffinePoint<Fp2>],
        xy_fracs: &[(Fp, Fp)],
    ) -> (Fp12, Vec<AffinePoint<Fp2>>) {
        let x_to_q_minus_1_over_3 = &Self::FROBENIUS_COEFF_FQ6_C1[1];
        let x_to_q_sq_minus_1_over_3 = &Self::FROBENIUS_COEFF_FQ6_C1[2];

        // q1 = π(Q), so that `frob_p(twist(Q)) = twist(q1)`
        let q1_vec = Q
            .iter()
            .map(|Q| {
                let x = Q.x.conjugate() * x_to_q_minus_1_over_3;
                let y = Q.y.conjugate() * Self::XI_TO_Q_MINUS_1_OVER_2;
                AffinePoint { x, y }
            })
            .collect::<Vec<_>>();

        // l_{(6x+2)\Psi(Q), \phi_p(\Psi(Q))}
        let (Q_acc, lines_S_plus_Q) = Q_acc
            .iter()
            .zip(q1_vec.iter())
            .map(|(Q_acc, q1)| Self::miller_add_step(Q_acc, q1))
            .unzip::<_, _, Vec<_>, Vec<_>>();

        // q2 = -π²(Q). π² fixes Fp2 and scales y by \xi^{(p^2 - 1) / 2} = -1, so the negation
        // cancels and y is unchanged.
        let q2_vec = Q
            .iter()
            .map(|Q| {
                let x = Q.x * x_to_q_sq_minus_1_over_3;
                AffinePoint { x, y: Q.y }
            })
            .collect::<Vec<_>>();

        // l_{(6x+2)\Psi(Q) + \phi_p(\Psi(Q)), -\phi_p^2(\Psi(Q))}
        let (Q_acc, lines_S_plus_Q2) = Q_acc
            .iter()
            .zip(q2_vec.iter())
            .map(|(Q_acc, q2)| Self::miller_add_step(Q_acc, q2))
            .unzip::<_, _, Vec<_>, Vec<_>>();

        let lines = izip!(lines_S_plus_Q, lines_S_plus_Q2, xy_fracs.iter())
            .flat_map(|(l0, l1, xy_frac)| [l0.evaluate(xy_frac), l1.evaluate(xy_frac)])
            .collect::<Vec<_>>();

        (Self::evaluate_lines_vec(*f, lines), Q_acc)
    }
}

#[allow(non_snake_case)]
impl PairingCheck for Bn254 {
    type Fp = Fp;
    type Fp2 = Fp2;
    type Fp12 = Fp12;

    fn pairing_check(
        P: &[AffinePoint<Fp>],
        Q: &[AffinePoint<Fp2>],
    ) -> Result<(), PairingCheckError> {
        let f = Self::miller_loop_product(P, Q);
        if Self::final_exp(&f) == Fp12::ONE {
            Ok(())
        } else {
            tracing::debug!(pairs = P.len(), "pairing product is not one");
            Err(PairingCheckError)
        }
    }
}

#[allow(non_snake_case)]
impl Bn254 {
    /// Product of the Miller loops of all pairs. With the `parallel` feature each pair runs on a
    /// rayon worker and the partial products are multiplied together, which gives the same value
    /// as the shared multi-Miller loop.
    pub fn miller_loop_product(P: &[AffinePoint<Fp>], Q: &[AffinePoint<Fp2>]) -> Fp12 {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            assert_eq!(P.len(), Q.len());
            P.par_iter()
                .zip(Q.par_iter())
                .map(|(p, q)| {
                    Self::multi_miller_loop(core::slice::from_ref(p), core::slice::from_ref(q))
                })
                .reduce(|| Fp12::ONE, |a, b| a * b)
        }
        #[cfg(not(feature = "parallel"))]
        {
            Self::multi_miller_loop(P, Q)
        }
    }

    /// The reduced pairing `e(P, Q)`.
    pub fn pairing(P: &G1Affine, Q: &G2Affine) -> Fp12 {
        Self::multi_pairing(core::slice::from_ref(P), core::slice::from_ref(Q))
    }

    /// `prod_i e(P[i], Q[i])` with a single final exponentiation.
    pub fn multi_pairing(P: &[G1Affine], Q: &[G2Affine]) -> Fp12 {
        let P = P.iter().cloned().map(G1Affine::into_affine).collect::<Vec<_>>();
        let Q = Q.iter().cloned().map(G2Affine::into_affine).collect::<Vec<_>>();
        Self::final_exp(&Self::miller_loop_product(&P, &Q))
    }

    /// Same contract as [`PairingCheck::pairing_check`], exponentiating by the full
    /// `(p^12 - 1) / r` instead of the cyclotomic chain.
    pub fn pairing_check_fallback(
        P: &[AffinePoint<Fp>],
        Q: &[AffinePoint<Fp2>],
    ) -> Result<(), PairingCheckError> {
        let f = Self::miller_loop_product(P, Q);
        exp_check_fallback(&f, &Self::FINAL_EXPONENT)
    }
}
