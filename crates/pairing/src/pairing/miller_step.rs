use core::ops::{Add, Mul, Neg, Sub};

use zkv_algebra::{DivUnsafe, Field};
use zkv_ecc::AffinePoint;

use super::{PairingIntrinsics, UnevaluatedLine};

/// Point steps of the Miller loop on the twist, each returning the line through the points it
/// combined.
pub trait MillerStep {
    type Fp2: Field;

    /// Miller double step
    fn miller_double_step(
        s: &AffinePoint<Self::Fp2>,
    ) -> (AffinePoint<Self::Fp2>, UnevaluatedLine<Self::Fp2>);

    /// Miller add step
    fn miller_add_step(
        s: &AffinePoint<Self::Fp2>,
        q: &AffinePoint<Self::Fp2>,
    ) -> (AffinePoint<Self::Fp2>, UnevaluatedLine<Self::Fp2>);

    /// Miller double and add step (2S + Q implemented as S + Q + S for efficiency)
    #[allow(clippy::type_complexity)]
    fn miller_double_and_add_step(
        s: &AffinePoint<Self::Fp2>,
        q: &AffinePoint<Self::Fp2>,
    ) -> (
        AffinePoint<Self::Fp2>,
        UnevaluatedLine<Self::Fp2>,
        UnevaluatedLine<Self::Fp2>,
    );
}

impl<P> MillerStep for P
where
    P: PairingIntrinsics,
    for<'a> &'a P::Fp2: Add<&'a P::Fp2, Output = P::Fp2>,
    for<'a> &'a P::Fp2: Sub<&'a P::Fp2, Output = P::Fp2>,
    for<'a> &'a P::Fp2: Mul<&'a P::Fp2, Output = P::Fp2>,
    for<'a> &'a P::Fp2: Neg<Output = P::Fp2>,
{
    type Fp2 = <P as PairingIntrinsics>::Fp2;

    /// Assumes `s` is not the identity. `y = 0` never occurs on the BN254 twist because
    /// `x^3 + b'` has no roots in Fp2.
    fn miller_double_step(
        s: &AffinePoint<Self::Fp2>,
    ) -> (AffinePoint<Self::Fp2>, UnevaluatedLine<Self::Fp2>) {
        let two = &P::FP2_TWO;
        let three = &P::FP2_THREE;

        let x = &s.x;
        let y = &s.y;
        // λ = (3x^2) / (2y)
        let lambda = &((&(three * x) * x).div_unsafe(&(two * y)));
        // x_2s = λ^2 - 2x
        let x_2s = &(lambda * lambda) - &(two * x);
        // y_2s = λ(x - x_2s) - y
        let y_2s = &(lambda * &(x - &x_2s)) - y;
        let two_s = AffinePoint { x: x_2s, y: y_2s };

        // Tangent line
        //   l_{\Psi(S),\Psi(S)}(P) = (λ x_S - y_S) (1 / y_P) - λ (x_P / y_P) w + w^3
        // scaled by y_P so that the constant coefficient is 1.
        let b = -lambda;
        let c = &(lambda * x) - y;

        (two_s, UnevaluatedLine { b, c })
    }

    /// Assumes `s != ±q`.
    fn miller_add_step(
        s: &AffinePoint<Self::Fp2>,
        q: &AffinePoint<Self::Fp2>,
    ) -> (AffinePoint<Self::Fp2>, UnevaluatedLine<Self::Fp2>) {
        let x_s = &s.x;
        let y_s = &s.y;
        let x_q = &q.x;
        let y_q = &q.y;

        // λ1 = (y_s - y_q) / (x_s - x_q)
        let x_delta = x_s - x_q;
        let lambda = &((y_s - y_q).div_unsafe(&x_delta));
        let x_s_plus_q = &(&(lambda * lambda) - x_s) - x_q;
        let y_s_plus_q = &(lambda * &(x_q - &x_s_plus_q)) - y_q;

        let s_plus_q = AffinePoint {
            x: x_s_plus_q,
            y: y_s_plus_q,
        };

        // l_{\Psi(S),\Psi(Q)}(P) = (λ_1 x_S - y_S) (1 / y_P) - λ_1 (x_P / y_P) w + w^3
        let b = -lambda;
        let c = &(lambda * x_s) - y_s;

        (s_plus_q, UnevaluatedLine { b, c })
    }

    /// Assumes `q != ±s` and `s + q != ±s`, which holds for every step of the BN254 loop.
    fn miller_double_and_add_step(
        s: &AffinePoint<Self::Fp2>,
        q: &AffinePoint<Self::Fp2>,
    ) -> (
        AffinePoint<Self::Fp2>,
        UnevaluatedLine<Self::Fp2>,
        UnevaluatedLine<Self::Fp2>,
    ) {
        let two = &P::FP2_TWO;

        let x_s = &s.x;
        let y_s = &s.y;
        let x_q = &q.x;
        let y_q = &q.y;

        // λ1 = (y_s - y_q) / (x_s - x_q)
        let lambda1 = &((y_s - y_q).div_unsafe(&(x_s - x_q)));
        let x_s_plus_q = &(&(lambda1 * lambda1) - x_s) - x_q;

        // λ2 = -λ1 - 2y_s / (x_{s+q} - x_s)
        let lambda2 = &(&(-lambda1) - &((two * y_s).div_unsafe(&(&x_s_plus_q - x_s))));
        let x_s_plus_q_plus_s = &(&(lambda2 * lambda2) - x_s) - &x_s_plus_q;
        let y_s_plus_q_plus_s = &(lambda2 * &(x_s - &x_s_plus_q_plus_s)) - y_s;

        let s_plus_q_plus_s = AffinePoint {
            x: x_s_plus_q_plus_s,
            y: y_s_plus_q_plus_s,
        };

        // Line through S and Q, then line through S + Q and S. Both are anchored at S.
        let b0 = -lambda1;
        let c0 = &(lambda1 * x_s) - y_s;

        let b1 = -lambda2;
        let c1 = &(lambda2 * x_s) - y_s;

        (
            s_plus_q_plus_s,
            UnevaluatedLine { b: b0, c: c0 },
            UnevaluatedLine { b: b1, c: c1 },
        )
    }
}
