use core::fmt::{Debug, Formatter, Result};

use super::{ComplexConjugate, Field, FieldExtension};
use crate::{impl_field_ops, IntMod};

/// Quadratic extension field of `F` with irreducible polynomial `X^2 + 1`.
/// Elements are represented as `c0 + c1 * u` where `u^2 = -1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Complex<F> {
    /// Real coordinate
    pub c0: F,
    /// Imaginary coordinate
    pub c1: F,
}

impl<F> Complex<F> {
    pub const fn new(c0: F, c1: F) -> Self {
        Self { c0, c1 }
    }
}

impl<F: IntMod> Complex<F> {
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

    /// Karatsuba: three base multiplications.
    #[inline(always)]
    fn mul_assign_impl(&mut self, other: &Self) {
        let v0 = self.c0 * other.c0;
        let v1 = self.c1 * other.c1;
        let c1 = (self.c0 + self.c1) * (other.c0 + other.c1) - v0 - v1;
        self.c0 = v0 - v1;
        self.c1 = c1;
    }

    /// Divides through the norm `d0^2 + d1^2`, which is zero only for a zero denominator.
    #[inline(always)]
    fn div_assign_unsafe_impl(&mut self, other: &Self) {
        let (c0, c1) = (self.c0, self.c1);
        let (d0, d1) = (other.c0, other.c1);
        let denom = F::ONE.div_unsafe(&(d0.square() + d1.square()));
        self.c0 = denom * (c0 * d0 + c1 * d1);
        self.c1 = denom * (c1 * d0 - c0 * d1);
    }

    #[inline(always)]
    fn neg_assign_impl(&mut self) {
        self.c0 = -self.c0;
        self.c1 = -self.c1;
    }

    /// The norm `c0^2 + c1^2`, an element of the base field.
    pub fn norm(&self) -> F {
        self.c0.square() + self.c1.square()
    }
}

impl_field_ops!([F: IntMod] Complex<F>);

impl<F: IntMod> Field for Complex<F> {
    type SelfRef<'a>
        = &'a Self
    where
        Self: 'a;

    const ZERO: Self = Self::new(F::ZERO, F::ZERO);
    const ONE: Self = Self::new(F::ONE, F::ZERO);

    fn double_assign(&mut self) {
        self.c0.double_assign();
        self.c1.double_assign();
    }

    /// `(c0 + c1)(c0 - c1) + 2 c0 c1 u`
    fn square_assign(&mut self) {
        let c0 = (self.c0 + self.c1) * (self.c0 - self.c1);
        let c1 = (self.c0 * self.c1).double();
        self.c0 = c0;
        self.c1 = c1;
    }
}

impl<F: IntMod> FieldExtension<F> for Complex<F> {
    const D: usize = 2;
    type Coeffs = [F; 2];

    fn from_coeffs([c0, c1]: Self::Coeffs) -> Self {
        Self::new(c0, c1)
    }

    fn to_coeffs(self) -> Self::Coeffs {
        [self.c0, self.c1]
    }

    fn embed(c0: F) -> Self {
        Self::new(c0, F::ZERO)
    }

    /// Over a prime field `F`, the `p`-power Frobenius on `F[u]/(u^2 + 1)` is conjugation.
    fn frobenius_map(&self, power: usize) -> Self {
        if power % 2 == 0 {
            *self
        } else {
            self.conjugate()
        }
    }

    fn mul_base(&self, rhs: &F) -> Self {
        Self::new(self.c0 * rhs, self.c1 * rhs)
    }
}

impl<F: IntMod> ComplexConjugate for Complex<F> {
    fn conjugate(self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    fn conjugate_assign(&mut self) {
        self.c1 = -self.c1;
    }
}

impl<F: Debug> Debug for Complex<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:?} + {:?} * u", self.c0, self.c1)
    }
}
