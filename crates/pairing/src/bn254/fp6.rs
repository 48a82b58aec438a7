use core::fmt::{Debug, Formatter, Result};

use zkv_algebra::{field::FieldExtension, impl_field_ops, DivUnsafe, Field};

use super::{Bn254, Fp2};
use crate::pairing::PairingIntrinsics;

/// Cubic extension `Fp2[v] / (v^3 - \xi)`, elements `c0 + c1 v + c2 v^2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl Fp6 {
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline(always)]
    fn add_assign_impl(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
        self.c2 += &other.c2;
    }

    #[inline(always)]
    fn sub_assign_impl(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
        self.c2 -= &other.c2;
    }

    /// Karatsuba: six Fp2 multiplications.
    #[inline(always)]
    fn mul_assign_impl(&mut self, other: &Self) {
        let xi = &Bn254::XI;
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        let (b0, b1, b2) = (&other.c0, &other.c1, &other.c2);

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let v2 = a2 * b2;

        let c0 = xi * &(&(a1 + a2) * &(b1 + b2) - &v1 - &v2) + &v0;
        let c1 = &(a0 + a1) * &(b0 + b1) - &v0 - &v1 + xi * &v2;
        let c2 = &(a0 + a2) * &(b0 + b2) - &v0 - &v2 + &v1;

        *self = Self::new(c0, c1, c2);
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
        self.c2 = -self.c2;
    }

    /// Inverse through the norm to Fp2. Zero maps to zero.
    fn invert_unsafe(&self) -> Self {
        let xi = &Bn254::XI;
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);

        let t0 = a0.square() - xi * &(a1 * a2);
        let t1 = xi * &a2.square() - a0 * a1;
        let t2 = a1.square() - a0 * a2;

        let norm = a0 * &t0 + xi * &(a2 * &t1 + a1 * &t2);
        let norm_inv = Fp2::ONE.div_unsafe(&norm);

        Self::new(t0 * norm_inv, t1 * norm_inv, t2 * norm_inv)
    }

    /// Multiplication by `v`.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(self.c2 * Bn254::XI, self.c0, self.c1)
    }

    pub fn mul_by_fp2(&self, rhs: &Fp2) -> Self {
        Self::new(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }

    /// Multiplication by the sparse element `b0 + b1 v`.
    pub fn mul_by_01(&self, b0: &Fp2, b1: &Fp2) -> Self {
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);
        Self::new(
            a0 * b0 + Bn254::XI * (a2 * b1),
            a0 * b1 + a1 * b0,
            a1 * b1 + a2 * b0,
        )
    }

    /// `self^(p^power)`
    pub fn frobenius_map(&self, power: usize) -> Self {
        let coeffs = &Bn254::FROBENIUS_COEFFS[power % 12];
        Self::new(
            self.c0.frobenius_map(power),
            self.c1.frobenius_map(power) * coeffs[1],
            self.c2.frobenius_map(power) * coeffs[3],
        )
    }
}

impl_field_ops!([] Fp6);

impl Field for Fp6 {
    type SelfRef<'a> = &'a Self;

    const ZERO: Self = Self::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);
    const ONE: Self = Self::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);

    fn double_assign(&mut self) {
        self.c0.double_assign();
        self.c1.double_assign();
        self.c2.double_assign();
    }

    // Chung-Hasan SQR2
    fn square_assign(&mut self) {
        let xi = &Bn254::XI;
        let (a0, a1, a2) = (&self.c0, &self.c1, &self.c2);

        let s0 = a0.square();
        let s1 = (a0 * a1).double();
        let s2 = (a0 - a1 + a2).square();
        let s3 = (a1 * a2).double();
        let s4 = a2.square();

        let c0 = s0 + xi * &s3;
        let c1 = s1 + xi * &s4;
        let c2 = s1 + s2 + s3 - s0 - s4;

        *self = Self::new(c0, c1, c2);
    }
}

impl Debug for Fp6 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({:?}) + ({:?}) * v + ({:?}) * v^2", self.c0, self.c1, self.c2)
    }
}
