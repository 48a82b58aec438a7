use eyre::Result;
use num_bigint::BigUint;
use rand::{rngs::StdRng, Rng, SeedableRng};
use test_case::test_case;
use zkv_algebra::{Field, IntMod};
use zkv_ecc::{weierstrass::WeierstrassPoint, CyclicGroup, Group};
use zkv_groth16::{
    bn254::{Fp, Fp12, G1Affine, G2Affine, Scalar, BN254_ORDER},
    verify, verify_optimized, Groth16Error, Groth16Fixture, Proof, ProofRecord, VerifyingKey,
};

const FIXTURE: &str = include_str!("data/bn254_groth16.json");

struct Parsed {
    inputs: Vec<BigUint>,
    proof: Proof,
    vk: VerifyingKey,
    alpha_beta: Fp12,
}

fn load() -> Result<Parsed> {
    let fixture = Groth16Fixture::from_json(FIXTURE)?;
    assert!(fixture.expected);
    Ok(Parsed {
        inputs: fixture.public_inputs()?,
        proof: fixture.proof.parse()?,
        vk: fixture.vk.parse()?,
        alpha_beta: fixture
            .alpha_beta()?
            .ok_or_else(|| eyre::eyre!("fixture has no alpha_beta"))?,
    })
}

#[test]
fn test_fixture_verifies() -> Result<()> {
    let Parsed {
        inputs,
        proof,
        vk,
        alpha_beta,
    } = load()?;
    assert_eq!(inputs, vec![BigUint::from(0x1bba1u32)]);
    assert!(verify(&inputs, &proof, &vk)?);
    assert!(verify_optimized(&inputs, &proof, &vk, &alpha_beta)?);
    Ok(())
}

#[test]
fn test_prepared_key() -> Result<()> {
    let Parsed {
        inputs,
        proof,
        vk,
        alpha_beta,
    } = load()?;
    let prepared = vk.prepare();
    assert_eq!(prepared.alpha_beta(), alpha_beta);
    assert!(verify(&inputs, &proof, &prepared)?);
    assert!(verify_optimized(&inputs, &proof, &prepared, &alpha_beta)?);
    Ok(())
}

#[test]
fn test_wrong_alpha_beta() -> Result<()> {
    let Parsed {
        inputs, proof, vk, ..
    } = load()?;
    assert!(!verify_optimized(&inputs, &proof, &vk, &Fp12::ONE)?);
    Ok(())
}

#[test_case(vec![0x1bba2] ; "next input")]
#[test_case(vec![0] ; "zero input")]
#[test_case(vec![1] ; "one input")]
fn test_wrong_inputs(inputs: Vec<u64>) -> Result<()> {
    let Parsed {
        proof,
        vk,
        alpha_beta,
        ..
    } = load()?;
    let inputs = inputs.into_iter().map(BigUint::from).collect::<Vec<_>>();
    assert!(!verify(&inputs, &proof, &vk)?);
    assert!(!verify_optimized(&inputs, &proof, &vk, &alpha_beta)?);
    Ok(())
}

#[test]
fn test_largest_input_in_range() -> Result<()> {
    let Parsed { proof, vk, .. } = load()?;
    let inputs = vec![BN254_ORDER.clone() - 1u32];
    assert!(!verify(&inputs, &proof, &vk)?);
    Ok(())
}

#[test]
fn test_input_out_of_range() -> Result<()> {
    let Parsed {
        inputs, proof, vk, ..
    } = load()?;
    // 0x1bba1 + r is congruent to the valid input but must still be rejected.
    let shifted = vec![&inputs[0] + &*BN254_ORDER];
    assert_eq!(
        verify(&shifted, &proof, &vk),
        Err(Groth16Error::InputOutOfRange { index: 0 })
    );
    assert_eq!(
        verify(&[BN254_ORDER.clone()], &proof, &vk),
        Err(Groth16Error::InputOutOfRange { index: 0 })
    );
    Ok(())
}

#[test_case(vec![] ; "too few")]
#[test_case(vec![0x1bba1, 0] ; "too many")]
fn test_arity_mismatch(inputs: Vec<u64>) -> Result<()> {
    let Parsed {
        proof,
        vk,
        alpha_beta,
        ..
    } = load()?;
    let inputs = inputs.into_iter().map(BigUint::from).collect::<Vec<_>>();
    let expected = Err(Groth16Error::ArityMismatch {
        expected: 1,
        actual: inputs.len(),
    });
    assert_eq!(verify(&inputs, &proof, &vk), expected);
    assert_eq!(
        verify_optimized(&inputs, &proof, &vk, &alpha_beta),
        expected
    );
    Ok(())
}

/// Replaces the hex digit of `literal` at `pos` (counted after `0x`) by a different digit.
fn mutate_hex_digit(literal: &str, pos: usize) -> String {
    let mut chars = literal.chars().collect::<Vec<_>>();
    let c = &mut chars[2 + pos];
    *c = if *c == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}

fn coordinate<'a>(proof: &'a mut ProofRecord, path: &str) -> &'a mut String {
    match path {
        "a.x" => &mut proof.a.x,
        "a.y" => &mut proof.a.y,
        "b.x.x" => &mut proof.b.x.x,
        "b.x.y" => &mut proof.b.x.y,
        "b.y.x" => &mut proof.b.y.x,
        "b.y.y" => &mut proof.b.y.y,
        "c.x" => &mut proof.c.x,
        "c.y" => &mut proof.c.y,
        _ => panic!("unknown coordinate {path}"),
    }
}

#[test_case("a.x", "proof.a")]
#[test_case("a.y", "proof.a")]
#[test_case("b.x.x", "proof.b")]
#[test_case("b.x.y", "proof.b")]
#[test_case("b.y.x", "proof.b")]
#[test_case("b.y.y", "proof.b")]
#[test_case("c.x", "proof.c")]
#[test_case("c.y", "proof.c")]
fn test_mutated_proof_coordinate(path: &str, point: &str) -> Result<()> {
    let fixture = Groth16Fixture::from_json(FIXTURE)?;
    let inputs = fixture.public_inputs()?;
    let vk = fixture.vk.parse()?;
    let digits = coordinate(&mut fixture.proof.clone(), path).len() - 2;

    for pos in [0, 17, 40, digits - 1] {
        let mut record = fixture.proof.clone();
        let literal = coordinate(&mut record, path);
        *literal = mutate_hex_digit(literal, pos);

        // Parsing rejects points off the curve; G2 subgroup membership is left to the verifier.
        match record.parse() {
            Ok(proof) => match verify(&inputs, &proof, &vk) {
                Ok(accepted) => assert!(!accepted, "{path} digit {pos} still verifies"),
                Err(Groth16Error::InvalidPoint { name }) => assert_eq!(name, point),
                Err(err) => panic!("unexpected error {err}"),
            },
            Err(Groth16Error::InvalidPoint { name }) => assert_eq!(name, point),
            Err(Groth16Error::Algebra(_)) => {}
            Err(err) => panic!("unexpected error {err}"),
        }
    }
    Ok(())
}

#[test_case(0)]
#[test_case(17)]
#[test_case(63)]
fn test_off_curve_proof_a_bypassing_records(pos: usize) -> Result<()> {
    let fixture = Groth16Fixture::from_json(FIXTURE)?;
    let inputs = fixture.public_inputs()?;
    let vk = fixture.vk.parse()?;

    let x = Fp::from_literal(&mutate_hex_digit(&fixture.proof.a.x, pos))?;
    let y = Fp::from_literal(&fixture.proof.a.y)?;
    let a = G1Affine::from_xy_unchecked(x, y);
    let proof = Proof::new(
        a.clone(),
        fixture.proof.b.parse("proof.b")?,
        fixture.proof.c.parse("proof.c")?,
    );
    let result = verify(&inputs, &proof, &vk);
    if a.is_on_curve() {
        assert_eq!(result, Ok(false));
    } else {
        assert_eq!(
            result,
            Err(Groth16Error::InvalidPoint {
                name: "proof.a".to_string()
            })
        );
    }
    Ok(())
}

#[test]
fn test_mutated_proof_on_curve() -> Result<()> {
    let Parsed {
        inputs,
        proof,
        vk,
        alpha_beta,
    } = load()?;

    let negated = Proof::new(-proof.a.clone(), proof.b.clone(), proof.c.clone());
    assert!(!verify(&inputs, &negated, &vk)?);

    let doubled = Proof::new(proof.a.clone(), proof.b.clone(), proof.c.double());
    assert!(!verify(&inputs, &doubled, &vk)?);
    assert!(!verify_optimized(&inputs, &doubled, &vk, &alpha_beta)?);

    let swapped = Proof::new(proof.c.clone(), proof.b.clone(), proof.a.clone());
    assert!(!verify(&inputs, &swapped, &vk)?);
    Ok(())
}

/// A key and proof built from known discrete logs, so that
/// `x * y = a * b + (k_0 + sum_i in_i * k_i) * g + c * d` holds in the exponent.
fn synthetic_instance(rng: &mut StdRng, inputs: &[u64]) -> Result<(VerifyingKey, Proof)> {
    let mut scalar = || Scalar::from_u64(rng.gen_range(1..u64::MAX));
    let (a, b, g, d) = (scalar(), scalar(), scalar(), scalar());
    let ks = (0..=inputs.len()).map(|_| scalar()).collect::<Vec<_>>();
    let (x, y) = (scalar(), scalar());

    let vk_x = inputs
        .iter()
        .zip(&ks[1..])
        .fold(ks[0], |acc, (input, k)| acc + Scalar::from_u64(*input) * k);
    let c = (x * y - a * b - vk_x * g) * d.invert()?;

    let g1 = G1Affine::GENERATOR;
    let g2 = G2Affine::GENERATOR;
    let vk = VerifyingKey::Full {
        alpha: g1.mul_scalar(&a),
        beta: g2.mul_scalar(&b),
        gamma: g2.mul_scalar(&g),
        delta: g2.mul_scalar(&d),
        gamma_abc: ks.iter().map(|k| g1.mul_scalar(k)).collect(),
    };
    let proof = Proof::new(g1.mul_scalar(&x), g2.mul_scalar(&y), g1.mul_scalar(&c));
    Ok((vk, proof))
}

#[test]
fn test_verify_matches_verify_optimized() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x1bba1);
    for num_inputs in [0, 1, 2] {
        let raw_inputs = (0..num_inputs).map(|_| rng.gen::<u64>()).collect::<Vec<_>>();
        let (vk, proof) = synthetic_instance(&mut rng, &raw_inputs)?;
        let alpha_beta = vk.alpha_beta();
        let inputs = raw_inputs
            .iter()
            .map(|&i| BigUint::from(i))
            .collect::<Vec<_>>();

        assert!(verify(&inputs, &proof, &vk)?);
        assert!(verify_optimized(&inputs, &proof, &vk, &alpha_beta)?);
        assert!(verify(&inputs, &proof, &vk.prepare())?);

        let doubled = Proof::new(proof.a.clone(), proof.b.clone(), proof.c.double());
        assert!(!verify(&inputs, &doubled, &vk)?);
        assert!(!verify_optimized(&inputs, &doubled, &vk, &alpha_beta)?);

        if let Some(first) = inputs.first() {
            let mut shifted = inputs.clone();
            shifted[0] = first + 1u32;
            assert!(!verify(&shifted, &proof, &vk)?);
            assert!(!verify_optimized(&shifted, &proof, &vk, &alpha_beta)?);
        }
    }
    Ok(())
}

#[test]
fn test_fixture_json_round_trip() -> Result<()> {
    let fixture = Groth16Fixture::from_json(FIXTURE)?;
    let proof = fixture.proof.parse()?;
    assert_eq!(ProofRecord::from_proof(&proof), fixture.proof);
    let json = fixture.to_json()?;
    assert_eq!(Groth16Fixture::from_json(&json)?, fixture);
    Ok(())
}
