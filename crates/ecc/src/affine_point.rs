use core::ops::Neg;

use zkv_algebra::Field;

/// Bare affine coordinates, without a curve attached. `(0, 0)` stands for the point at infinity,
/// which lies on no curve `y^2 = x^3 + b` with `b != 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePoint<F> {
    pub x: F,
    pub y: F,
}

impl<F: Field> AffinePoint<F> {
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        self.x == F::ZERO && self.y == F::ZERO
    }
}

impl<F> Neg for AffinePoint<F>
where
    F: Neg<Output = F>,
{
    type Output = AffinePoint<F>;

    fn neg(self) -> AffinePoint<F> {
        Self {
            x: self.x,
            y: self.y.neg(),
        }
    }
}
