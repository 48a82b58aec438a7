use core::{
    fmt::Debug,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use zkv_algebra::IntMod;

pub trait Group:
    Clone
    + Debug
    + Eq
    + Sized
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + AddAssign
    + SubAssign
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    type SelfRef<'a>: Add<&'a Self, Output = Self> + Sub<&'a Self, Output = Self>
    where
        Self: 'a;

    const IDENTITY: Self;

    fn is_identity(&self) -> bool;

    fn double(&self) -> Self;
    fn double_assign(&mut self);

    /// Double-and-add over the bits of a big-endian scalar, most significant bit first. Leading
    /// zero bytes are allowed and the scalar is not reduced.
    fn mul_be_bytes(&self, scalar_be: &[u8]) -> Self {
        let mut acc = Self::IDENTITY;
        if self.is_identity() {
            return acc;
        }
        for byte in scalar_be {
            for bit in (0..8).rev() {
                acc.double_assign();
                if (byte >> bit) & 1 == 1 {
                    acc += self;
                }
            }
        }
        acc
    }

    fn mul_scalar<S: IntMod>(&self, scalar: &S) -> Self {
        self.mul_be_bytes(scalar.to_be_bytes().as_ref())
    }
}

pub trait CyclicGroup: Group {
    const GENERATOR: Self;
    const NEG_GENERATOR: Self;
}
