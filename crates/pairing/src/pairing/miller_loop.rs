use itertools::{izip, Itertools};
use tracing::instrument;
use zkv_algebra::{field::FieldExtension, DivUnsafe, Field};
use zkv_ecc::AffinePoint;

use super::{Evaluatable, EvaluatedLine, MillerStep};

#[allow(non_snake_case)]
pub trait MultiMillerLoop: MillerStep
where
    Self::Fp2: FieldExtension<Self::Fp>,
{
    type Fp: Field;
    type Fp12: Field + FieldExtension<Self::Fp2>;

    const SEED_ABS: u64;
    /// Signed binary digits of the loop count, least significant first.
    const PSEUDO_BINARY_ENCODING: &'static [i8];

    /// Multiplies `f` by every line in `lines`.
    fn evaluate_lines_vec(f: Self::Fp12, lines: Vec<EvaluatedLine<Self::Fp2>>) -> Self::Fp12;

    /// Runs before the main loop and consumes the top two digits of the encoding.
    fn pre_loop(
        Q_acc: Vec<AffinePoint<Self::Fp2>>,
        Q: &[AffinePoint<Self::Fp2>],
        xy_fracs: &[(Self::Fp, Self::Fp)],
    ) -> (Self::Fp12, Vec<AffinePoint<Self::Fp2>>);

    /// Runs after the main loop.
    fn post_loop(
        f: &Self::Fp12,
        Q_acc: Vec<AffinePoint<Self::Fp2>>,
        Q: &[AffinePoint<Self::Fp2>],
        xy_fracs: &[(Self::Fp, Self::Fp)],
    ) -> (Self::Fp12, Vec<AffinePoint<Self::Fp2>>);

    /// Product of the Miller loops of `(P[i], Q[i])`, sharing the squarings of the accumulator.
    /// Pairs where either point is the identity contribute one; with no pairs left the result is
    /// one.
    ///
    /// Points must be on their curves. `P` and `Q` must have the same length.
    #[instrument(level = "debug", skip_all, fields(num_pairs = P.len()))]
    fn multi_miller_loop(P: &[AffinePoint<Self::Fp>], Q: &[AffinePoint<Self::Fp2>]) -> Self::Fp12 {
        assert_eq!(P.len(), Q.len());
        let (P, Q): (Vec<_>, Vec<_>) = P
            .iter()
            .zip(Q.iter())
            .filter(|(p, q)| !p.is_infinity() && !q.is_infinity())
            .map(|(p, q)| (p.clone(), q.clone()))
            .unzip();
        if P.is_empty() {
            return Self::Fp12::ONE;
        }
        tracing::trace!(pairs = P.len(), "running miller loop");
        Self::multi_miller_loop_nonidentity(&P, &Q)
    }

    /// The Miller loop body. Every `P[i]` and `Q[i]` must be a non-identity point.
    fn multi_miller_loop_nonidentity(
        P: &[AffinePoint<Self::Fp>],
        Q: &[AffinePoint<Self::Fp2>],
    ) -> Self::Fp12 {
        // y_P is never zero: G1 has no points of order two.
        let xy_fracs = P
            .iter()
            .map(|p| {
                let y_inv = Self::Fp::ONE.div_unsafe(&p.y);
                let x_over_y = p.x.clone() * &y_inv;
                (x_over_y, y_inv)
            })
            .collect::<Vec<_>>();

        let (mut f, mut Q_acc) = Self::pre_loop(Q.to_vec(), Q, &xy_fracs);

        for i in (0..Self::PSEUDO_BINARY_ENCODING.len() - 2).rev() {
            f.square_assign();

            let mut lines = Vec::<EvaluatedLine<Self::Fp2>>::with_capacity(2 * Q.len());
            let sigma_i = Self::PSEUDO_BINARY_ENCODING[i];

            if sigma_i == 0 {
                let (Q_out, lines_2S) = Q_acc
                    .iter()
                    .map(Self::miller_double_step)
                    .unzip::<_, _, Vec<_>, Vec<_>>();
                Q_acc = Q_out;

                for (line_2S, xy_frac) in izip!(lines_2S.iter(), xy_fracs.iter()) {
                    lines.push(line_2S.evaluate(xy_frac));
                }
            } else {
                let Q_signed = Q
                    .iter()
                    .map(|q| if sigma_i > 0 { q.clone() } else { -q.clone() })
                    .collect::<Vec<_>>();
                let (Q_out, lines_S_plus_Q, lines_S_plus_Q_plus_S): (Vec<_>, Vec<_>, Vec<_>) =
                    Q_acc
                        .iter()
                        .zip(Q_signed.iter())
                        .map(|(s, q)| Self::miller_double_and_add_step(s, q))
                        .multiunzip();
                Q_acc = Q_out;

                let lines_iter = izip!(
                    lines_S_plus_Q.iter(),
                    lines_S_plus_Q_plus_S.iter(),
                    xy_fracs.iter()
                );
                for (line_S_plus_Q, line_S_plus_Q_plus_S, xy_frac) in lines_iter {
                    lines.push(line_S_plus_Q.evaluate(xy_frac));
                    lines.push(line_S_plus_Q_plus_S.evaluate(xy_frac));
                }
            }

            f = Self::evaluate_lines_vec(f, lines);
        }

        let (f, _) = Self::post_loop(&f, Q_acc, Q, &xy_fracs);
        f
    }
}
