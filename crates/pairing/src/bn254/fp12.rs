use core::fmt::{Debug, Formatter, Result};

use zkv_algebra::{
    field::{ComplexConjugate, FieldExtension},
    impl_field_ops, DivUnsafe, Field,
};

use super::{Bn254, Fp2, Fp6};
use crate::pairing::PairingIntrinsics;

/// Quadratic extension `Fp6[w] / (w^2 - v)`, elements `c0 + c1 w`.
///
/// As an extension of Fp2 this is `Fp2[w] / (w^6 - \xi)`; [`FieldExtension`] coefficients are
/// listed by increasing power of `w`, so `c0 = (x0, x2, x4)` and `c1 = (x1, x3, x5)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl Fp12 {
    pub const fn new(c0: Fp6, c1: Fp6) -> Self {
        Self { c0, c1 }
    }

    #[inline(always)]
    fn add_assign_impl(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
    }

    #[inline(always)]
    fn sub_assign_impl(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
    }

    /// Karatsuba: three Fp6 multiplications.
    #[inline(always)]
    fn mul_assign_impl(&mut self, other: &Self) {
        let v0 = self.c0 * other.c0;
        let v1 = self.c1 * other.c1;
        let c1 = (self.c0 + self.c1) * (other.c0 + other.c1) - v0 - v1;
        self.c0 = v0 + v1.mul_by_nonresidue();
        self.c1 = c1;
    }

    #[inline(always)]
    fn div_assign_unsafe_impl(&mut self, other: &Self) {
        let inv = other.invert_unsafe();
        self.mul_assign_impl(&inv);
    }

    #[inline(always)]
    fn neg_assign_impl(&mut self) {
        self.c0 = -self.c0;
        self.c1 = -self.c1;
    }

    /// Inverse through the norm `c0^2 - v c1^2` to Fp6. Zero maps to zero.
    fn invert_unsafe(&self) -> Self {
        let norm = self.c0.square() - self.c1.square().mul_by_nonresidue();
        let norm_inv = Fp6::ONE.div_unsafe(&norm);
        Self::new(self.c0 * norm_inv, -(self.c1 * norm_inv))
    }

    /// Granger-Scott squaring, valid only for elements of the cyclotomic subgroup
    /// `{ f : f^(p^6 + 1) = 1 }`.
    pub fn cyclotomic_square(&self) -> Self {
        let xi = &Bn254::XI;
        // Fp4 = Fp2[s] / (s^2 - \xi) squarings of (r0, r1), (r2, r3), (r4, r5)
        let fp4_square = |x: &Fp2, y: &Fp2| {
            let t = x * y;
            let c0 = (x + y) * (xi * y + x) - t - xi * &t;
            (c0, t.double())
        };

        let (r0, r4, r3) = (&self.c0.c0, &self.c0.c1, &self.c0.c2);
        let (r2, r1, r5) = (&self.c1.c0, &self.c1.c1, &self.c1.c2);

        let (t0, t1) = fp4_square(r0, r1);
        let (t2, t3) = fp4_square(r2, r3);
        let (t4, t5) = fp4_square(r4, r5);

        // 3t - 2r
        let sub_twice = |t: Fp2, r: &Fp2| {
            let d = t - r;
            d.double() + t
        };
        // 3t + 2r
        let add_twice = |t: Fp2, r: &Fp2| {
            let d = t + r;
            d.double() + t
        };

        let z0 = sub_twice(t0, r0);
        let z1 = add_twice(t1, r1);
        let z2 = add_twice(t5 * xi, r2);
        let z3 = sub_twice(t4, r3);
        let z4 = sub_twice(t2, r4);
        let z5 = add_twice(t3, r5);

        Self::new(Fp6::new(z0, z4, z3), Fp6::new(z2, z1, z5))
    }

    /// `self^exp` by cyclotomic square-and-multiply, most significant bit first. Only valid in
    /// the cyclotomic subgroup.
    pub fn cyclotomic_exp(&self, exp: u64) -> Self {
        let mut res = Self::ONE;
        for i in (0..u64::BITS - exp.leading_zeros()).rev() {
            res = res.cyclotomic_square();
            if (exp >> i) & 1 == 1 {
                res *= self;
            }
        }
        res
    }
}

impl_field_ops!([] Fp12);

impl Field for Fp12 {
    type SelfRef<'a> = &'a Self;

    const ZERO: Self = Self::new(Fp6::ZERO, Fp6::ZERO);
    const ONE: Self = Self::new(Fp6::ONE, Fp6::ZERO);

    fn double_assign(&mut self) {
        self.c0.double_assign();
        self.c1.double_assign();
    }

    /// Complex squaring: `(c0 + c1)(c0 + v c1) - (1 + v) c0 c1` and `2 c0 c1`.
    fn square_assign(&mut self) {
        let v0 = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 + self.c1.mul_by_nonresidue())
            - v0
            - v0.mul_by_nonresidue();
        self.c1 = v0.double();
        self.c0 = c0;
    }
}

impl FieldExtension<Fp2> for Fp12 {
    const D: usize = 6;
    type Coeffs = [Fp2; 6];

    fn from_coeffs([x0, x1, x2, x3, x4, x5]: Self::Coeffs) -> Self {
        Self::new(Fp6::new(x0, x2, x4), Fp6::new(x1, x3, x5))
    }

    fn to_coeffs(self) -> Self::Coeffs {
        [self.c0.c0, self.c1.c0, self.c0.c1, self.c1.c1, self.c0.c2, self.c1.c2]
    }

    fn embed(base_elem: Fp2) -> Self {
        Self::new(Fp6::new(base_elem, Fp2::ZERO, Fp2::ZERO), Fp6::ZERO)
    }

    /// Applies the Fp2 Frobenius to each coefficient of `w^j` and scales it by
    /// `\xi^{j (p^power - 1) / 6}`.
    fn frobenius_map(&self, power: usize) -> Self {
        let coeffs = &Bn254::FROBENIUS_COEFFS[power % 12];
        let mut out = self.to_coeffs().map(|c| c.frobenius_map(power));
        for (x, coeff) in out.iter_mut().skip(1).zip(coeffs.iter()) {
            *x *= coeff;
        }
        Self::from_coeffs(out)
    }

    fn mul_base(&self, rhs: &Fp2) -> Self {
        Self::new(self.c0.mul_by_fp2(rhs), self.c1.mul_by_fp2(rhs))
    }
}

impl ComplexConjugate for Fp12 {
    fn conjugate(self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    fn conjugate_assign(&mut self) {
        self.c1 = -self.c1;
    }
}

impl Debug for Fp12 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({:?}) + ({:?}) * w", self.c0, self.c1)
    }
}
