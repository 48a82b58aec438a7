/// Implements the operator traits required by [`Field`](crate::Field) for a type in terms of
/// five inherent methods on it:
///
/// - `add_assign_impl(&mut self, other: &Self)`
/// - `sub_assign_impl(&mut self, other: &Self)`
/// - `mul_assign_impl(&mut self, other: &Self)`
/// - `div_assign_unsafe_impl(&mut self, other: &Self)`
/// - `neg_assign_impl(&mut self)`
///
/// The first argument lists the generic parameters of the impl blocks, e.g.
/// `impl_field_ops!([F: IntMod] Complex<F>)` or `impl_field_ops!([] Fp6)`.
#[macro_export]
macro_rules! impl_field_ops {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> ::core::ops::AddAssign<&$ty> for $ty {
            #[inline(always)]
            fn add_assign(&mut self, other: &$ty) {
                self.add_assign_impl(other);
            }
        }

        impl<$($gen)*> ::core::ops::AddAssign for $ty {
            #[inline(always)]
            fn add_assign(&mut self, other: $ty) {
                self.add_assign_impl(&other);
            }
        }

        impl<$($gen)*> ::core::ops::Add for $ty {
            type Output = $ty;
            #[inline(always)]
            fn add(mut self, other: $ty) -> $ty {
                self.add_assign_impl(&other);
                self
            }
        }

        impl<$($gen)*> ::core::ops::Add<&$ty> for $ty {
            type Output = $ty;
            #[inline(always)]
            fn add(mut self, other: &$ty) -> $ty {
                self.add_assign_impl(other);
                self
            }
        }

        impl<$($gen)*> ::core::ops::Add<&$ty> for &$ty {
            type Output = $ty;
            #[inline(always)]
            fn add(self, other: &$ty) -> $ty {
                let mut res = self.clone();
                res.add_assign_impl(other);
                res
            }
        }

        impl<$($gen)*> ::core::ops::SubAssign<&$ty> for $ty {
            #[inline(always)]
            fn sub_assign(&mut self, other: &$ty) {
                self.sub_assign_impl(other);
            }
        }

        impl<$($gen)*> ::core::ops::SubAssign for $ty {
            #[inline(always)]
            fn sub_assign(&mut self, other: $ty) {
                self.sub_assign_impl(&other);
            }
        }

        impl<$($gen)*> ::core::ops::Sub for $ty {
            type Output = $ty;
            #[inline(always)]
            fn sub(mut self, other: $ty) -> $ty {
                self.sub_assign_impl(&other);
                self
            }
        }

        impl<$($gen)*> ::core::ops::Sub<&$ty> for $ty {
            type Output = $ty;
            #[inline(always)]
            fn sub(mut self, other: &$ty) -> $ty {
                self.sub_assign_impl(other);
                self
            }
        }

        impl<$($gen)*> ::core::ops::Sub<&$ty> for &$ty {
            type Output = $ty;
            #[inline(always)]
            fn sub(self, other: &$ty) -> $ty {
                let mut res = self.clone();
                res.sub_assign_impl(other);
                res
            }
        }

        impl<$($gen)*> ::core::ops::MulAssign<&$ty> for $ty {
            #[inline(always)]
            fn mul_assign(&mut self, other: &$ty) {
                self.mul_assign_impl(other);
            }
        }

        impl<$($gen)*> ::core::ops::MulAssign for $ty {
            #[inline(always)]
            fn mul_assign(&mut self, other: $ty) {
                self.mul_assign_impl(&other);
            }
        }

        impl<$($gen)*> ::core::ops::Mul for $ty {
            type Output = $ty;
            #[inline(always)]
            fn mul(mut self, other: $ty) -> $ty {
                self.mul_assign_impl(&other);
                self
            }
        }

        impl<$($gen)*> ::core::ops::Mul<&$ty> for $ty {
            type Output = $ty;
            #[inline(always)]
            fn mul(mut self, other: &$ty) -> $ty {
                self.mul_assign_impl(other);
                self
            }
        }

        impl<$($gen)*> ::core::ops::Mul<&$ty> for &$ty {
            type Output = $ty;
            #[inline(always)]
            fn mul(self, other: &$ty) -> $ty {
                let mut res = self.clone();
                res.mul_assign_impl(other);
                res
            }
        }

        impl<$($gen)*> $crate::DivAssignUnsafe<&$ty> for $ty {
            #[inline(always)]
            fn div_assign_unsafe(&mut self, other: &$ty) {
                self.div_assign_unsafe_impl(other);
            }
        }

        impl<$($gen)*> $crate::DivAssignUnsafe for $ty {
            #[inline(always)]
            fn div_assign_unsafe(&mut self, other: $ty) {
                self.div_assign_unsafe_impl(&other);
            }
        }

        impl<$($gen)*> $crate::DivUnsafe for $ty {
            type Output = $ty;
            #[inline(always)]
            fn div_unsafe(mut self, other: $ty) -> $ty {
                self.div_assign_unsafe_impl(&other);
                self
            }
        }

        impl<$($gen)*> $crate::DivUnsafe<&$ty> for $ty {
            type Output = $ty;
            #[inline(always)]
            fn div_unsafe(mut self, other: &$ty) -> $ty {
                self.div_assign_unsafe_impl(other);
                self
            }
        }

        impl<$($gen)*> $crate::DivUnsafe<&$ty> for &$ty {
            type Output = $ty;
            #[inline(always)]
            fn div_unsafe(self, other: &$ty) -> $ty {
                let mut res = self.clone();
                res.div_assign_unsafe_impl(other);
                res
            }
        }

        impl<$($gen)*> ::core::ops::Neg for $ty {
            type Output = $ty;
            #[inline(always)]
            fn neg(mut self) -> $ty {
                self.neg_assign_impl();
                self
            }
        }

        impl<$($gen)*> ::core::ops::Neg for &$ty {
            type Output = $ty;
            #[inline(always)]
            fn neg(self) -> $ty {
                let mut res = self.clone();
                res.neg_assign_impl();
                res
            }
        }

        impl<$($gen)*> ::core::iter::Sum for $ty {
            fn sum<I: Iterator<Item = $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as $crate::Field>::ZERO, |acc, x| acc + &x)
            }
        }

        impl<'a, $($gen)*> ::core::iter::Sum<&'a $ty> for $ty {
            fn sum<I: Iterator<Item = &'a $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as $crate::Field>::ZERO, |acc, x| acc + x)
            }
        }

        impl<$($gen)*> ::core::iter::Product for $ty {
            fn product<I: Iterator<Item = $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as $crate::Field>::ONE, |acc, x| acc * &x)
            }
        }

        impl<'a, $($gen)*> ::core::iter::Product<&'a $ty> for $ty {
            fn product<I: Iterator<Item = &'a $ty>>(iter: I) -> $ty {
                iter.fold(<$ty as $crate::Field>::ONE, |acc, x| acc * x)
            }
        }
    };
}
