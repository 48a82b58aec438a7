//! Little-endian `u64` limb arithmetic backing the Montgomery fields declared with
//! [`moduli_declare!`](crate::moduli_declare).
//!
//! Everything here is a `const fn` so that field constants (including the Montgomery
//! parameters themselves) are computed at compile time.

pub const NUM_LIMBS: usize = 4;

pub type Limbs = [u64; NUM_LIMBS];

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow (0 or 1).
#[inline(always)]
pub const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, ((ret >> 64) as u64) & 1)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

pub const fn add_limbs(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let mut out = [0u64; NUM_LIMBS];
    let mut carry = 0;
    let mut i = 0;
    while i < NUM_LIMBS {
        let (v, c) = adc(a[i], b[i], carry);
        out[i] = v;
        carry = c;
        i += 1;
    }
    (out, carry)
}

pub const fn sub_limbs(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let mut out = [0u64; NUM_LIMBS];
    let mut borrow = 0;
    let mut i = 0;
    while i < NUM_LIMBS {
        let (v, b) = sbb(a[i], b[i], borrow);
        out[i] = v;
        borrow = b;
        i += 1;
    }
    (out, borrow)
}

/// `a >= b` as unsigned integers.
pub const fn geq(a: &Limbs, b: &Limbs) -> bool {
    let mut i = NUM_LIMBS;
    while i > 0 {
        i -= 1;
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

pub const fn is_zero(a: &Limbs) -> bool {
    (a[0] | a[1] | a[2] | a[3]) == 0
}

/// `(a + b) mod m` for `a, b < m`.
pub const fn add_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (sum, carry) = add_limbs(a, b);
    if carry != 0 || geq(&sum, m) {
        sub_limbs(&sum, m).0
    } else {
        sum
    }
}

/// `(a - b) mod m` for `a, b < m`.
pub const fn sub_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (diff, borrow) = sub_limbs(a, b);
    if borrow != 0 {
        add_limbs(&diff, m).0
    } else {
        diff
    }
}

/// `-a mod m` for `a < m`.
pub const fn neg_mod(a: &Limbs, m: &Limbs) -> Limbs {
    if is_zero(a) {
        *a
    } else {
        sub_limbs(m, a).0
    }
}

/// Montgomery reduction of a double-width value `t < m * 2^256`: returns `t * 2^-256 mod m`.
pub const fn mont_reduce(t: [u64; 2 * NUM_LIMBS], m: &Limbs, inv: u64) -> Limbs {
    let mut t = t;
    let mut carry2 = 0;
    let mut i = 0;
    while i < NUM_LIMBS {
        let k = t[i].wrapping_mul(inv);
        let mut carry = 0;
        let mut j = 0;
        while j < NUM_LIMBS {
            let (v, c) = mac(t[i + j], k, m[j], carry);
            t[i + j] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(t[i + NUM_LIMBS], carry2, carry);
        t[i + NUM_LIMBS] = v;
        carry2 = c;
        i += 1;
    }
    let r = [t[4], t[5], t[6], t[7]];
    if carry2 != 0 || geq(&r, m) {
        sub_limbs(&r, m).0
    } else {
        r
    }
}

/// Montgomery product `a * b * 2^-256 mod m`.
pub const fn mont_mul(a: &Limbs, b: &Limbs, m: &Limbs, inv: u64) -> Limbs {
    let mut t = [0u64; 2 * NUM_LIMBS];
    let mut i = 0;
    while i < NUM_LIMBS {
        let mut carry = 0;
        let mut j = 0;
        while j < NUM_LIMBS {
            let (v, c) = mac(t[i + j], a[i], b[j], carry);
            t[i + j] = v;
            carry = c;
            j += 1;
        }
        t[i + NUM_LIMBS] = carry;
        i += 1;
    }
    mont_reduce(t, m, inv)
}

/// `-m0^-1 mod 2^64`. `m0` must be odd.
pub const fn mont_inv(m0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(m0);
        i += 1;
    }
    inv.wrapping_neg()
}

/// `2^bits mod m` by repeated doubling.
pub const fn pow2_mod(bits: usize, m: &Limbs) -> Limbs {
    let mut acc = [1u64, 0, 0, 0];
    let mut i = 0;
    while i < bits {
        acc = add_mod(&acc, &acc, m);
        i += 1;
    }
    acc
}

/// Parses a decimal string into limbs. Panics (at compile time when used in a constant) if the
/// string contains a non-digit or does not fit in 256 bits.
pub const fn parse_decimal(s: &str) -> Limbs {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "empty modulus");
    let mut limbs = [0u64; NUM_LIMBS];
    let mut i = 0;
    while i < bytes.len() {
        let d = bytes[i];
        assert!(d >= b'0' && d <= b'9', "modulus must be a decimal string");
        let mut carry = (d - b'0') as u64;
        let mut j = 0;
        while j < NUM_LIMBS {
            let (v, c) = mac(carry, limbs[j], 10, 0);
            limbs[j] = v;
            carry = c;
            j += 1;
        }
        assert!(carry == 0, "modulus does not fit in 256 bits");
        i += 1;
    }
    limbs
}

pub const fn limbs_from_le_bytes(bytes: &[u8; 8 * NUM_LIMBS]) -> Limbs {
    let mut limbs = [0u64; NUM_LIMBS];
    let mut i = 0;
    while i < 8 * NUM_LIMBS {
        limbs[i / 8] |= (bytes[i] as u64) << (8 * (i % 8));
        i += 1;
    }
    limbs
}

pub const fn limbs_to_le_bytes(limbs: &Limbs) -> [u8; 8 * NUM_LIMBS] {
    let mut bytes = [0u8; 8 * NUM_LIMBS];
    let mut i = 0;
    while i < 8 * NUM_LIMBS {
        bytes[i] = (limbs[i / 8] >> (8 * (i % 8))) as u8;
        i += 1;
    }
    bytes
}
