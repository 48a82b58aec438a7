use zkv_algebra::Field;

/// Final exponentiation of a Miller loop output into the order-`r` subgroup of `Fp12^*`.
pub trait FinalExp {
    type Fp12: Field;

    /// `f^((p^12 - 1) / r)`. Zero maps to zero.
    fn final_exp(f: &Self::Fp12) -> Self::Fp12;
}
