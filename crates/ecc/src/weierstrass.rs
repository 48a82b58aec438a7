use zkv_algebra::Field;

use crate::AffinePoint;

/// Short Weierstrass curve affine point on `y^2 = x^3 + CURVE_A * x + CURVE_B`.
///
/// The identity is represented by `(0, 0)`, which is never on the curve when `CURVE_B != 0`.
/// None of the `*_nonidentity` methods check their preconditions.
pub trait WeierstrassPoint: Clone + Sized {
    type Coordinate: Field;

    const CURVE_A: Self::Coordinate;
    const CURVE_B: Self::Coordinate;
    const IDENTITY: Self;

    fn as_x(&self) -> &Self::Coordinate;
    fn as_y(&self) -> &Self::Coordinate;

    /// Does not check that the point is on the curve.
    fn from_xy_unchecked(x: Self::Coordinate, y: Self::Coordinate) -> Self;
    fn into_coords(self) -> (Self::Coordinate, Self::Coordinate);

    /// Requires `self != ±p2` and neither point the identity.
    fn add_ne_nonidentity(&self, p2: &Self) -> Self;
    /// Requires `self` not the identity and of order greater than 2.
    fn double_nonidentity(&self) -> Self;

    /// Checks the curve equation. The identity counts as being on the curve.
    fn is_on_curve(&self) -> bool {
        let (x, y) = (self.as_x(), self.as_y());
        if x == &Self::Coordinate::ZERO && y == &Self::Coordinate::ZERO {
            return true;
        }
        let rhs = x.square() * x + Self::CURVE_A * x + &Self::CURVE_B;
        y.square() == rhs
    }

    /// Builds a point from coordinates, accepting `(0, 0)` as the identity and rejecting
    /// coordinates off the curve.
    fn from_xy(x: Self::Coordinate, y: Self::Coordinate) -> Option<Self> {
        let p = Self::from_xy_unchecked(x, y);
        p.is_on_curve().then_some(p)
    }

    fn into_affine(self) -> AffinePoint<Self::Coordinate> {
        let (x, y) = self.into_coords();
        AffinePoint::new(x, y)
    }
}

/// Declares an affine point type `$struct_name` on `y^2 = x^3 + $b` over `$field`. `$three` must
/// be the constant `3` in `$field`; it is used by the tangent slope `3x^2 / 2y`.
#[macro_export]
macro_rules! impl_sw_affine {
    ($struct_name:ident, $field:ty, $three:expr, $b:expr) => {
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $struct_name {
            x: $field,
            y: $field,
        }

        impl $struct_name {
            /// Does not check that the point is on the curve.
            pub const fn from_const_xy(x: $field, y: $field) -> Self {
                Self { x, y }
            }

            pub fn x(&self) -> &$field {
                &self.x
            }

            pub fn y(&self) -> &$field {
                &self.y
            }
        }

        impl $crate::weierstrass::WeierstrassPoint for $struct_name {
            type Coordinate = $field;

            const CURVE_A: $field = <$field as $crate::algebra::Field>::ZERO;
            const CURVE_B: $field = $b;
            const IDENTITY: Self = Self::from_const_xy(
                <$field as $crate::algebra::Field>::ZERO,
                <$field as $crate::algebra::Field>::ZERO,
            );

            fn as_x(&self) -> &$field {
                &self.x
            }

            fn as_y(&self) -> &$field {
                &self.y
            }

            fn from_xy_unchecked(x: $field, y: $field) -> Self {
                Self { x, y }
            }

            fn into_coords(self) -> ($field, $field) {
                (self.x, self.y)
            }

            fn add_ne_nonidentity(&self, p2: &Self) -> Self {
                use $crate::algebra::DivUnsafe;
                let lambda = (&p2.y - &self.y).div_unsafe(&(&p2.x - &self.x));
                let x3 = &lambda * &lambda - &self.x - &p2.x;
                let y3 = &lambda * &(&self.x - &x3) - &self.y;
                Self { x: x3, y: y3 }
            }

            fn double_nonidentity(&self) -> Self {
                use $crate::algebra::{DivUnsafe, Field};
                let lambda = (&$three * &self.x.square()).div_unsafe(&self.y.double());
                let x3 = &lambda * &lambda - &self.x.double();
                let y3 = &lambda * &(&self.x - &x3) - &self.y;
                Self { x: x3, y: y3 }
            }
        }
    };
}

/// Implements [`Group`](crate::Group) and the operator traits for a type declared with
/// [`impl_sw_affine!`]. Identity and inverse-pair cases are handled here so the
/// `*_nonidentity` formulas only ever see generic inputs.
#[macro_export]
macro_rules! impl_sw_group_ops {
    ($struct_name:ident, $field:ty) => {
        impl $struct_name {
            fn add_impl(&self, p2: &Self) -> Self {
                use $crate::{algebra::Field, weierstrass::WeierstrassPoint, Group};
                if self.is_identity() {
                    p2.clone()
                } else if p2.is_identity() {
                    self.clone()
                } else if self.as_x() == p2.as_x() {
                    if self.as_y() + p2.as_y() == <$field as Field>::ZERO {
                        <Self as WeierstrassPoint>::IDENTITY
                    } else {
                        self.double_nonidentity()
                    }
                } else {
                    self.add_ne_nonidentity(p2)
                }
            }

            fn neg_impl(&self) -> Self {
                use $crate::weierstrass::WeierstrassPoint;
                Self::from_xy_unchecked(self.as_x().clone(), -self.as_y())
            }
        }

        impl $crate::Group for $struct_name {
            type SelfRef<'a> = &'a Self;

            const IDENTITY: Self = <Self as $crate::weierstrass::WeierstrassPoint>::IDENTITY;

            fn is_identity(&self) -> bool {
                self == &<Self as $crate::Group>::IDENTITY
            }

            fn double(&self) -> Self {
                use $crate::{weierstrass::WeierstrassPoint, Group};
                // Points with y = 0 have order 2.
                if self.is_identity() || self.as_y() == &<$field as $crate::algebra::Field>::ZERO {
                    <Self as WeierstrassPoint>::IDENTITY
                } else {
                    self.double_nonidentity()
                }
            }

            fn double_assign(&mut self) {
                *self = $crate::Group::double(self);
            }
        }

        impl ::core::ops::Add<&$struct_name> for $struct_name {
            type Output = Self;

            fn add(self, p2: &$struct_name) -> Self::Output {
                self.add_impl(p2)
            }
        }

        impl ::core::ops::Add for $struct_name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                self.add_impl(&rhs)
            }
        }

        impl ::core::ops::Add<&$struct_name> for &$struct_name {
            type Output = $struct_name;

            fn add(self, p2: &$struct_name) -> Self::Output {
                self.add_impl(p2)
            }
        }

        impl ::core::ops::AddAssign<&$struct_name> for $struct_name {
            fn add_assign(&mut self, p2: &$struct_name) {
                *self = self.add_impl(p2);
            }
        }

        impl ::core::ops::AddAssign for $struct_name {
            fn add_assign(&mut self, rhs: Self) {
                *self = self.add_impl(&rhs);
            }
        }

        impl ::core::ops::Neg for $struct_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.neg_impl()
            }
        }

        impl ::core::ops::Neg for &$struct_name {
            type Output = $struct_name;

            fn neg(self) -> Self::Output {
                self.neg_impl()
            }
        }

        impl ::core::ops::Sub<&$struct_name> for $struct_name {
            type Output = Self;

            fn sub(self, rhs: &$struct_name) -> Self::Output {
                self.add_impl(&rhs.neg_impl())
            }
        }

        impl ::core::ops::Sub for $struct_name {
            type Output = $struct_name;

            fn sub(self, rhs: Self) -> Self::Output {
                self.add_impl(&rhs.neg_impl())
            }
        }

        impl ::core::ops::Sub<&$struct_name> for &$struct_name {
            type Output = $struct_name;

            fn sub(self, p2: &$struct_name) -> Self::Output {
                self.add_impl(&p2.neg_impl())
            }
        }

        impl ::core::ops::SubAssign<&$struct_name> for $struct_name {
            fn sub_assign(&mut self, p2: &$struct_name) {
                *self = self.add_impl(&p2.neg_impl());
            }
        }

        impl ::core::ops::SubAssign for $struct_name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = self.add_impl(&rhs.neg_impl());
            }
        }
    };
}
