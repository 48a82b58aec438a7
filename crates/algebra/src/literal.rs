//! Integer literals as they appear in verifying keys, proofs and public-input lists.
//!
//! Accepted forms are decimal (`123`, optionally negative: `-123`) and hexadecimal (`0x7b`).
//! Underscores are ignored anywhere after the sign or prefix.

use num_bigint::{BigInt, BigUint, Sign};

use crate::AlgebraError;

/// Parses a possibly negative integer literal.
pub fn parse_signed_literal(literal: &str) -> Result<BigInt, AlgebraError> {
    let trimmed = literal.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    // Negative hex is not part of the grammar.
    if negative && has_hex_prefix(unsigned) {
        return Err(AlgebraError::InvalidLiteral(literal.to_string()));
    }
    let magnitude = parse_magnitude(unsigned)
        .ok_or_else(|| AlgebraError::InvalidLiteral(literal.to_string()))?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Parses a non-negative integer literal. Negative literals are rejected.
pub fn parse_unsigned_literal(literal: &str) -> Result<BigUint, AlgebraError> {
    let trimmed = literal.trim();
    parse_magnitude(trimmed).ok_or_else(|| AlgebraError::InvalidLiteral(literal.to_string()))
}

fn has_hex_prefix(s: &str) -> bool {
    s.starts_with("0x") || s.starts_with("0X")
}

fn parse_magnitude(s: &str) -> Option<BigUint> {
    let (digits, radix) = if has_hex_prefix(s) {
        (&s[2..], 16)
    } else {
        (s, 10)
    };
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() {
        return None;
    }
    // `parse_bytes` would otherwise accept a leading sign.
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
}
