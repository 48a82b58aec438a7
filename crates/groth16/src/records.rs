//! Serde records for proofs, verifying keys and test vectors.
//!
//! Every coordinate is an integer literal string (`"0x1bba1"`, `"113569"`, `"-1"`). Negative
//! literals are reduced modulo the base field; non-negative ones must already be reduced. A point
//! written as `(0, 0)` is the identity.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use zkv_algebra::{parse_unsigned_literal, IntMod};
use zkv_ecc::weierstrass::WeierstrassPoint;
use zkv_pairing::bn254::{Fp, Fp12, Fp2, Fp6, G1Affine, G2Affine};

use crate::{Groth16Error, Proof, VerifyingKey};

fn format_fp(x: &Fp) -> String {
    format!("{:#x}", x.as_biguint())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct G1Record {
    pub x: String,
    pub y: String,
}

impl G1Record {
    /// `name` identifies the point in [`Groth16Error::InvalidPoint`].
    pub fn parse(&self, name: &str) -> Result<G1Affine, Groth16Error> {
        let x = Fp::from_literal(&self.x)?;
        let y = Fp::from_literal(&self.y)?;
        G1Affine::from_xy(x, y).ok_or_else(|| Groth16Error::InvalidPoint {
            name: name.to_string(),
        })
    }

    pub fn from_point(p: &G1Affine) -> Self {
        Self {
            x: format_fp(p.x()),
            y: format_fp(p.y()),
        }
    }
}

/// `x + y * u`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fq2Record {
    pub x: String,
    pub y: String,
}

impl Fq2Record {
    pub fn parse(&self) -> Result<Fp2, Groth16Error> {
        Ok(Fp2::new(
            Fp::from_literal(&self.x)?,
            Fp::from_literal(&self.y)?,
        ))
    }

    pub fn from_fp2(a: &Fp2) -> Self {
        Self {
            x: format_fp(&a.c0),
            y: format_fp(&a.c1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2Record {
    pub x: Fq2Record,
    pub y: Fq2Record,
}

impl G2Record {
    /// Only checks the curve equation. Subgroup membership is checked by the verifier.
    pub fn parse(&self, name: &str) -> Result<G2Affine, Groth16Error> {
        G2Affine::from_xy(self.x.parse()?, self.y.parse()?).ok_or_else(|| {
            Groth16Error::InvalidPoint {
                name: name.to_string(),
            }
        })
    }

    pub fn from_point(p: &G2Affine) -> Self {
        Self {
            x: Fq2Record::from_fp2(p.x()),
            y: Fq2Record::from_fp2(p.y()),
        }
    }
}

/// `x + y * v + z * v^2`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fq6Record {
    pub x: Fq2Record,
    pub y: Fq2Record,
    pub z: Fq2Record,
}

/// `x + y * w`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fq12Record {
    pub x: Fq6Record,
    pub y: Fq6Record,
}

impl Fq6Record {
    pub fn parse(&self) -> Result<Fp6, Groth16Error> {
        Ok(Fp6::new(self.x.parse()?, self.y.parse()?, self.z.parse()?))
    }

    pub fn from_fp6(a: &Fp6) -> Self {
        Self {
            x: Fq2Record::from_fp2(&a.c0),
            y: Fq2Record::from_fp2(&a.c1),
            z: Fq2Record::from_fp2(&a.c2),
        }
    }
}

impl Fq12Record {
    pub fn parse(&self) -> Result<Fp12, Groth16Error> {
        Ok(Fp12::new(self.x.parse()?, self.y.parse()?))
    }

    pub fn from_fp12(a: &Fp12) -> Self {
        Self {
            x: Fq6Record::from_fp6(&a.c0),
            y: Fq6Record::from_fp6(&a.c1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRecord {
    pub a: G1Record,
    pub b: G2Record,
    pub c: G1Record,
}

impl ProofRecord {
    pub fn parse(&self) -> Result<Proof, Groth16Error> {
        Ok(Proof {
            a: self.a.parse("proof.a")?,
            b: self.b.parse("proof.b")?,
            c: self.c.parse("proof.c")?,
        })
    }

    pub fn from_proof(proof: &Proof) -> Self {
        Self {
            a: G1Record::from_point(&proof.a),
            b: G2Record::from_point(&proof.b),
            c: G1Record::from_point(&proof.c),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKeyRecord {
    pub alpha: G1Record,
    pub beta: G2Record,
    pub gamma: G2Record,
    pub delta: G2Record,
    pub gamma_abc: Vec<G1Record>,
}

impl VerifyingKeyRecord {
    /// Builds a [`VerifyingKey::Full`].
    pub fn parse(&self) -> Result<VerifyingKey, Groth16Error> {
        let gamma_abc = self
            .gamma_abc
            .iter()
            .enumerate()
            .map(|(i, p)| p.parse(&format!("vk.gamma_abc[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(VerifyingKey::Full {
            alpha: self.alpha.parse("vk.alpha")?,
            beta: self.beta.parse("vk.beta")?,
            gamma: self.gamma.parse("vk.gamma")?,
            delta: self.delta.parse("vk.delta")?,
            gamma_abc,
        })
    }
}

/// A verification test vector: inputs, proof and key together with the expected outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Groth16Fixture {
    pub inputs: Vec<String>,
    pub proof: ProofRecord,
    pub vk: VerifyingKeyRecord,
    /// `e(vk.alpha, vk.beta)`, when the vector also exercises the precomputed path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_beta: Option<Fq12Record>,
    pub expected: bool,
}

impl Groth16Fixture {
    pub fn from_json(json: &str) -> Result<Self, Groth16Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, Groth16Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Public inputs are not reduced; the verifier range-checks them.
    pub fn public_inputs(&self) -> Result<Vec<BigUint>, Groth16Error> {
        self.inputs
            .iter()
            .map(|s| parse_unsigned_literal(s).map_err(Groth16Error::from))
            .collect()
    }

    pub fn alpha_beta(&self) -> Result<Option<Fp12>, Groth16Error> {
        self.alpha_beta.as_ref().map(Fq12Record::parse).transpose()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;
    use zkv_algebra::{AlgebraError, Field};
    use zkv_ecc::{CyclicGroup, Group};

    use super::*;

    fn g1(x: &str, y: &str) -> G1Record {
        G1Record {
            x: x.to_string(),
            y: y.to_string(),
        }
    }

    #[test]
    fn test_g1_record() {
        assert_eq!(g1("1", "2").parse("g").unwrap(), G1Affine::GENERATOR);
        assert_eq!(g1("0x1", "0x2").parse("g").unwrap(), G1Affine::GENERATOR);
        // -2 reduces to p - 2
        assert_eq!(g1("1", "-2").parse("g").unwrap(), G1Affine::NEG_GENERATOR);
        assert_eq!(
            g1("0", "0").parse("g").unwrap(),
            <G1Affine as Group>::IDENTITY
        );
        assert_eq!(
            G1Record::from_point(&G1Affine::GENERATOR),
            g1("0x1", "0x2")
        );
    }

    #[test_case("1", "3", Groth16Error::InvalidPoint { name: "g".to_string() } ; "off curve")]
    #[test_case("1", "0x2g", Groth16Error::Algebra(AlgebraError::InvalidLiteral("0x2g".to_string())) ; "bad literal")]
    #[test_case(
        "21888242871839275222246405745257275088696311157297823662689037894645226208584",
        "2",
        Groth16Error::Algebra(AlgebraError::NonCanonical) ;
        "not reduced"
    )]
    fn test_g1_record_rejects(x: &str, y: &str, err: Groth16Error) {
        assert_eq!(g1(x, y).parse("g"), Err(err));
    }

    #[test]
    fn test_g2_record() {
        let g = G2Affine::GENERATOR;
        let record = G2Record::from_point(&g);
        assert_eq!(record.parse("g").unwrap(), g);

        let mut bad = record;
        bad.y.x = "0x1".to_string();
        assert!(matches!(
            bad.parse("vk.beta"),
            Err(Groth16Error::InvalidPoint { name }) if name == "vk.beta"
        ));
    }

    #[test]
    fn test_fq12_record() {
        let two = Fp2::new(Fp::from_u8(2), Fp::ZERO);
        let a = Fp12::new(
            Fp6::new(Fp2::ONE, two, Fp2::ZERO),
            Fp6::new(Fp2::ZERO, -Fp2::ONE, two),
        );
        let record = Fq12Record::from_fp12(&a);
        assert_eq!(record.x.y.x, "0x2");
        assert_eq!(record.parse().unwrap(), a);
    }

    #[test]
    fn test_public_inputs_are_unreduced() {
        let fixture_inputs = [
            "0x1bba1",
            "113569",
            "0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
        ];
        let parsed = fixture_inputs
            .iter()
            .map(|s| parse_unsigned_literal(s).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(parsed[0], parsed[1]);
        assert_eq!(parsed[2], zkv_pairing::bn254::BN254_ORDER.clone());
        assert!(parse_unsigned_literal("-1").is_err());
    }
}
