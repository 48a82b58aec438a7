use zkv_algebra::{
    field::{ComplexConjugate, FieldExtension},
    DivUnsafe, Field,
};

use super::{Bn254, Fp12, BN254_SEED};
use crate::pairing::FinalExp;

impl FinalExp for Bn254 {
    type Fp12 = Fp12;

    /// The easy part `(p^6 - 1)(p^2 + 1)` lands in the cyclotomic subgroup, where the hard part
    /// `(p^4 - p^2 + 1) / r` is evaluated with three exponentiations by the seed. The
    /// multiplication chain matches plain exponentiation by `(p^12 - 1) / r`; see
    /// <https://eprint.iacr.org/2008/490.pdf>.
    fn final_exp(f: &Fp12) -> Fp12 {
        // easy part
        let f_inv = Fp12::ONE.div_unsafe(f);
        let mut t = f.conjugate() * f_inv;
        t *= t.frobenius_map(2);

        // hard part
        let fx = t.cyclotomic_exp(BN254_SEED);
        let fx2 = fx.cyclotomic_exp(BN254_SEED);
        let fx3 = fx2.cyclotomic_exp(BN254_SEED);

        let y0 = t.frobenius_map(1) * t.frobenius_map(2) * t.frobenius_map(3);
        let y1 = t.conjugate();
        let y2 = fx2.frobenius_map(2);
        let y3 = fx.frobenius_map(1).conjugate();
        let y4 = (fx * fx2.frobenius_map(1)).conjugate();
        let y5 = fx2.conjugate();
        let y6 = (fx3 * fx3.frobenius_map(1)).conjugate();

        let mut t0 = y6.cyclotomic_square() * y4 * y5;
        let mut t1 = y3 * y5 * t0;
        t0 *= y2;
        t1 = (t1.cyclotomic_square() * t0).cyclotomic_square();
        t0 = t1 * y1;
        t1 *= y0;
        t0.cyclotomic_square() * t1
    }
}
