use crate::Field;

pub trait ExpBytes: Field {
    /// Exponentiates a field element by an integer given as its sign and big-endian magnitude.
    /// A negative exponent inverts the base first; zero has no inverse, so a negative power of
    /// zero is zero.
    fn exp_bytes(&self, is_positive: bool, bytes_be: &[u8]) -> Self {
        let x = if is_positive {
            self.clone()
        } else {
            Self::ONE.div_unsafe(self)
        };

        let x_sq = x.square();
        let ops = [x.clone(), x_sq.clone(), x_sq * &x];

        let mut res = Self::ONE;
        for &b in bytes_be.iter() {
            let mut mask = 0xc0;
            for j in 0..4 {
                res.square_assign();
                res.square_assign();
                let c = (b & mask) >> (6 - 2 * j);
                if c != 0 {
                    res *= &ops[(c - 1) as usize];
                }
                mask >>= 2;
            }
        }
        res
    }
}

impl<F: Field> ExpBytes for F {}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::{moduli_declare, IntMod};

    moduli_declare! {
        F13 { modulus = "13" },
        Fr { modulus = "21888242871839275222246405745257275088548364400416034343698204186575808495617" },
    }

    #[test]
    fn test_exp_small() {
        let two = F13::from_u8(2);
        assert_eq!(two.exp_bytes(true, &[]), F13::ONE);
        assert_eq!(two.exp_bytes(true, &[5]), F13::from_u8(6));
        assert_eq!(two.exp_bytes(true, &[12]), F13::ONE);
        // 2^-1 = 7 mod 13
        assert_eq!(two.exp_bytes(false, &[1]), F13::from_u8(7));
        assert_eq!(F13::ZERO.exp_bytes(true, &[3]), F13::ZERO);
    }

    #[test]
    fn test_exp_matches_modpow() {
        let r = Fr::modulus_biguint();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let base = BigUint::from_bytes_le(&rng.gen::<[u8; 32]>()) % &r;
            let mut exp_le = [0u8; 40];
            rng.fill(&mut exp_le[..]);
            let exp = BigUint::from_bytes_le(&exp_le);
            let x = Fr::from_biguint(base.clone());
            assert_eq!(
                x.exp_bytes(true, &exp.to_bytes_be()).as_biguint(),
                base.modpow(&exp, &r)
            );
            // Fermat: x^(r-1) = 1
            if !x.is_zero() {
                let r_minus_one = &r - 1u32;
                assert_eq!(x.exp_bytes(true, &r_minus_one.to_bytes_be()), Fr::ONE);
                let exp_be = exp.to_bytes_be();
                assert_eq!(x.exp_bytes(false, &exp_be) * x.exp_bytes(true, &exp_be), Fr::ONE);
            }
        }
    }
}
