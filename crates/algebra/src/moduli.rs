/// Declares prime fields from decimal modulus strings.
///
/// ```ignore
/// moduli_declare! {
///     Bn254Fp { modulus = "21888242871839275222246405745257275088696311157297823662689037894645226208583" },
/// }
/// ```
///
/// Each declared type is a `Copy` element stored in Montgomery form over four 64-bit limbs. The
/// Montgomery constants are derived from the modulus at compile time, so the modulus must be an
/// odd number below `2^256`.
#[macro_export]
macro_rules! moduli_declare {
    ($($name:ident { modulus = $modulus:literal }),* $(,)?) => {
        $(
            #[derive(Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name([u64; $crate::arithmetic::NUM_LIMBS]);

            impl $name {
                const LIMBS: $crate::arithmetic::Limbs = $crate::arithmetic::parse_decimal($modulus);
                const INV: u64 = $crate::arithmetic::mont_inv(Self::LIMBS[0]);
                /// 2^256 mod p, the Montgomery form of one.
                const R: $crate::arithmetic::Limbs = $crate::arithmetic::pow2_mod(256, &Self::LIMBS);
                const R2: $crate::arithmetic::Limbs = $crate::arithmetic::pow2_mod(512, &Self::LIMBS);
                /// p - 2, the Fermat inversion exponent.
                const P_MINUS_TWO: $crate::arithmetic::Limbs =
                    $crate::arithmetic::sub_limbs(&Self::LIMBS, &[2, 0, 0, 0]).0;

                /// Converts canonical little-endian limbs into a field element. The input must
                /// already be reduced.
                pub const fn from_const_limbs(limbs: [u64; $crate::arithmetic::NUM_LIMBS]) -> Self {
                    Self($crate::arithmetic::mont_mul(&limbs, &Self::R2, &Self::LIMBS, Self::INV))
                }

                /// Converts canonical little-endian bytes into a field element. The input must
                /// already be reduced.
                pub const fn from_const_bytes(bytes: [u8; 32]) -> Self {
                    Self::from_const_limbs($crate::arithmetic::limbs_from_le_bytes(&bytes))
                }

                pub const fn from_const_u64(val: u64) -> Self {
                    Self::from_const_limbs([val, 0, 0, 0])
                }

                /// Canonical little-endian limbs.
                pub const fn to_canonical_limbs(&self) -> [u64; $crate::arithmetic::NUM_LIMBS] {
                    $crate::arithmetic::mont_reduce(
                        [self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0],
                        &Self::LIMBS,
                        Self::INV,
                    )
                }

                /// `self^exp` for an exponent given as little-endian limbs.
                pub fn pow_vartime(&self, exp: &[u64; $crate::arithmetic::NUM_LIMBS]) -> Self {
                    let mut res = Self(Self::R);
                    for limb in exp.iter().rev() {
                        for bit in (0..64).rev() {
                            res.0 = $crate::arithmetic::mont_mul(&res.0, &res.0, &Self::LIMBS, Self::INV);
                            if (limb >> bit) & 1 == 1 {
                                res.0 = $crate::arithmetic::mont_mul(&res.0, &self.0, &Self::LIMBS, Self::INV);
                            }
                        }
                    }
                    res
                }

                #[inline(always)]
                fn add_assign_impl(&mut self, other: &Self) {
                    self.0 = $crate::arithmetic::add_mod(&self.0, &other.0, &Self::LIMBS);
                }

                #[inline(always)]
                fn sub_assign_impl(&mut self, other: &Self) {
                    self.0 = $crate::arithmetic::sub_mod(&self.0, &other.0, &Self::LIMBS);
                }

                #[inline(always)]
                fn mul_assign_impl(&mut self, other: &Self) {
                    self.0 = $crate::arithmetic::mont_mul(&self.0, &other.0, &Self::LIMBS, Self::INV);
                }

                /// Fermat inversion of `other`. Zero maps to zero.
                #[inline(always)]
                fn div_assign_unsafe_impl(&mut self, other: &Self) {
                    let inv = other.pow_vartime(&Self::P_MINUS_TWO);
                    self.mul_assign_impl(&inv);
                }

                #[inline(always)]
                fn neg_assign_impl(&mut self) {
                    self.0 = $crate::arithmetic::neg_mod(&self.0, &Self::LIMBS);
                }
            }

            $crate::impl_field_ops!([] $name);

            impl $crate::Field for $name {
                type SelfRef<'a> = &'a Self;

                const ZERO: Self = Self([0; $crate::arithmetic::NUM_LIMBS]);
                const ONE: Self = Self(Self::R);

                fn double_assign(&mut self) {
                    self.0 = $crate::arithmetic::add_mod(&self.0, &self.0, &Self::LIMBS);
                }

                fn square_assign(&mut self) {
                    self.0 = $crate::arithmetic::mont_mul(&self.0, &self.0, &Self::LIMBS, Self::INV);
                }
            }

            impl $crate::IntMod for $name {
                type Repr = [u8; 32];

                const MODULUS: [u8; 32] = $crate::arithmetic::limbs_to_le_bytes(&Self::LIMBS);
                const NUM_BYTES: usize = 32;

                fn from_le_bytes(
                    bytes: &[u8],
                ) -> ::core::result::Result<Self, $crate::AlgebraError> {
                    if bytes.len() > Self::NUM_BYTES {
                        return Err($crate::AlgebraError::InvalidLength {
                            expected: Self::NUM_BYTES,
                            actual: bytes.len(),
                        });
                    }
                    let mut repr = [0u8; 32];
                    repr[..bytes.len()].copy_from_slice(bytes);
                    let limbs = $crate::arithmetic::limbs_from_le_bytes(&repr);
                    if $crate::arithmetic::geq(&limbs, &Self::LIMBS) {
                        return Err($crate::AlgebraError::NonCanonical);
                    }
                    Ok(Self::from_const_limbs(limbs))
                }

                fn from_biguint(value: $crate::num_bigint::BigUint) -> Self {
                    let reduced = value % <Self as $crate::IntMod>::modulus_biguint();
                    let le = reduced.to_bytes_le();
                    let mut repr = [0u8; 32];
                    repr[..le.len()].copy_from_slice(&le);
                    Self::from_const_bytes(repr)
                }

                fn from_u64(val: u64) -> Self {
                    if Self::LIMBS[1] == 0 && Self::LIMBS[2] == 0 && Self::LIMBS[3] == 0 {
                        return Self::from_const_u64(val % Self::LIMBS[0]);
                    }
                    Self::from_const_u64(val)
                }

                fn to_le_bytes(&self) -> [u8; 32] {
                    $crate::arithmetic::limbs_to_le_bytes(&self.to_canonical_limbs())
                }
            }

            impl ::core::default::Default for $name {
                fn default() -> Self {
                    <Self as $crate::Field>::ZERO
                }
            }

            impl From<u64> for $name {
                fn from(val: u64) -> Self {
                    <Self as $crate::IntMod>::from_u64(val)
                }
            }

            impl ::core::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }

            impl ::core::fmt::Display for $name {
                /// Big-endian hex of the canonical value.
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str("0x")?;
                    for byte in <Self as $crate::IntMod>::to_le_bytes(self).iter().rev() {
                        write!(f, "{:02x}", byte)?;
                    }
                    Ok(())
                }
            }
        )*
    };
}
