use hex_literal::hex;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use zkv_algebra::{field::Complex, moduli_declare, Field, IntMod};
use zkv_ecc::{impl_sw_affine, impl_sw_group_ops, CyclicGroup};

use crate::pairing::PairingIntrinsics;

mod final_exp;
mod fp12;
mod fp6;
mod pairing;

pub use fp12::*;
pub use fp6::*;


moduli_declare! {
    Bn254Fp { modulus = "21888242871839275222246405745257275088696311157297823662689037894645226208583" },
    Bn254Scalar { modulus = "21888242871839275222246405745257275088548364400416034343698204186575808495617" },
}

pub type Fp = Bn254Fp;
pub type Scalar = Bn254Scalar;
/// `Fp[u] / (u^2 + 1)`
pub type Fp2 = Complex<Fp>;

lazy_static! {
    pub static ref BN254_MODULUS: BigUint = Fp::modulus_biguint();
    pub static ref BN254_ORDER: BigUint = Scalar::modulus_biguint();
}

/// The BN parameter `x` with `p = 36x^4 + 36x^3 + 24x^2 + 6x + 1`.
pub const BN254_SEED: u64 = 0x44e992b44a6909f1;

/// Non-adjacent form of `6x + 2`, least significant digit first.
pub const BN254_PSEUDO_BINARY_ENCODING: [i8; 66] = [
    0, 0, 0, 1, 0, 1, 0, -1, 0, 0, -1, 0, 0, 0, 1, 0, 0, -1, 0, -1, 0, 0, 0, 1, 0, -1, 0, 0, 0, 0,
    -1, 0, 0, 1, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, -1, 0, 1, 0, -1, 0, 0, 0, -1, 0, -1, 0, 0,
    0, 1, 0, -1, 0, 1,
];

const FP_THREE: Fp = Fp::from_const_u64(3);
const CURVE_B: Fp = Fp::from_const_u64(3);

impl_sw_affine!(Bn254G1Affine, Bn254Fp, FP_THREE, CURVE_B);
impl_sw_group_ops!(Bn254G1Affine, Bn254Fp);

pub type G1Affine = Bn254G1Affine;
pub use g2::G2Affine;

impl CyclicGroup for G1Affine {
    // https://eips.ethereum.org/EIPS/eip-197
    const GENERATOR: Self = G1Affine::from_const_xy(Fp::from_const_u64(1), Fp::from_const_u64(2));
    const NEG_GENERATOR: Self = G1Affine::from_const_xy(
        Fp::from_const_u64(1),
        Fp::from_const_bytes(hex!(
            "45FD7CD8168C203C8DCA7168916A81975D588181B64550B829A031E1724E6430"
        )),
    );
}

// G2 is the sextic D-type twist `y^2 = x^3 + 3 / (9 + u)` over Fp2.
mod g2 {
    use hex_literal::hex;
    use zkv_algebra::Field;
    use zkv_ecc::{impl_sw_affine, impl_sw_group_ops, CyclicGroup, Group};

    use super::{Fp, Fp2, BN254_ORDER};

    const THREE: Fp2 = Fp2::new(Fp::from_const_u64(3), Fp::ZERO);
    // 3 / (9 + u)
    // validated by a test below
    const B: Fp2 = Fp2::new(
        Fp::from_const_bytes(hex!(
            "e538a124dce66732a3efdb59e5c5b4b5c36ae01b9918be81aeaab8ce409d142b"
        )),
        Fp::from_const_bytes(hex!(
            "d215c38506bda2e452182de584a04fa7f4fdd8eeadaf2ccdd4fef03ab0139700"
        )),
    );
    impl_sw_affine!(G2Affine, Fp2, THREE, B);
    impl_sw_group_ops!(G2Affine, Fp2);

    impl G2Affine {
        /// Whether `[r] self` is the identity. The twist has a large cofactor, so points on the
        /// curve equation need not lie in G2.
        pub fn is_in_subgroup(&self) -> bool {
            self.mul_be_bytes(&BN254_ORDER.to_bytes_be()).is_identity()
        }
    }

    impl CyclicGroup for G2Affine {
        // https://eips.ethereum.org/EIPS/eip-197
        const GENERATOR: Self = G2Affine::from_const_xy(
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "edf692d95cbdde46ddda5ef7d422436779445c5e66006a42761e1f12efde0018"
                )),
                Fp::from_const_bytes(hex!(
                    "c212f3aeb785e49712e7a9353349aaf1255dfb31b7bf60723a480d9293938e19"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "aa7dfa6601cce64c7bd3430c69e7d1e38f40cb8d8071ab4aeb6d8cdba55ec812"
                )),
                Fp::from_const_bytes(hex!(
                    "5b9722d1dcdaac55f38eb37033314bbc95330c69ad999eec75f05f58d0890609"
                )),
            ),
        );
        const NEG_GENERATOR: Self = G2Affine::from_const_xy(
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "edf692d95cbdde46ddda5ef7d422436779445c5e66006a42761e1f12efde0018"
                )),
                Fp::from_const_bytes(hex!(
                    "c212f3aeb785e49712e7a9353349aaf1255dfb31b7bf60723a480d9293938e19"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "9d7f827115c039ef11f72d5c2883afb3cd17b6f335d4a46d3e32a505cdef9b1d"
                )),
                Fp::from_const_bytes(hex!(
                    "ec655a073ab173e6993bbef75d3936dbc724751809acb1cbb3afd188a2c45d27"
                )),
            ),
        );
    }

    #[test]
    fn test_g2_curve_equation_b() {
        use zkv_algebra::DivUnsafe;
        let b = Fp2::new(Fp::from_const_u64(3), Fp::ZERO)
            .div_unsafe(Fp2::new(Fp::from_const_u64(9), Fp::ONE));
        assert_eq!(b, B);
    }

    #[test]
    fn test_g2_generator() {
        use zkv_ecc::weierstrass::WeierstrassPoint;
        let g = G2Affine::GENERATOR;
        assert!(g.is_on_curve());
        assert!(g.is_in_subgroup());
        assert_eq!(-g, G2Affine::NEG_GENERATOR);
    }
}

pub struct Bn254;

impl Bn254 {
    // Validated by a test in tests.rs
    pub const FROBENIUS_COEFF_FQ6_C1: [Fp2; 3] = [
        Fp2::new(Fp::ONE, Fp::ZERO),
        Fp2::new(
            Fp::from_const_bytes(hex!(
                "3d556f175795e3990c33c3c210c38cb743b159f53cec0b4cf711794f9847b32f"
            )),
            Fp::from_const_bytes(hex!(
                "a2cb0f641cd56516ce9d7c0b1d2aae3294075ad78bcca44b20aeeb6150e5c916"
            )),
        ),
        Fp2::new(
            Fp::from_const_bytes(hex!(
                "48fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
            )),
            Fp::ZERO,
        ),
    ];

    // \xi^{(p - 1) / 2}, validated by a test in tests.rs
    pub const XI_TO_Q_MINUS_1_OVER_2: Fp2 = Fp2::new(
        Fp::from_const_bytes(hex!(
            "5a13a071460154dc9859c9a9ede0aadbb9f9e2b698c65edcdcf59a4805f33c06"
        )),
        Fp::from_const_bytes(hex!(
            "e3b02326637fd382d25ba28fc97d80212b6f79eca7b504079a0441acbc3cc007"
        )),
    );

    // FINAL_EXPONENT = (p^12 - 1) / r in big-endian
    // Validated by a test in tests.rs
    pub const FINAL_EXPONENT: [u8; 349] = hex!(
        "2f4b6dc97020fddadf107d20bc842d43bf6369b1ff6a1c71015f3f7be2e1e30a73bb94fec0daf15466b2383a5d3ec3d15ad524d8f70c54efee1bd8c3b21377e563a09a1b705887e72eceaddea3790364a61f676baaf977870e88d5c6c8fef0781361e443ae77f5b63a2a2264487f2940a8b1ddb3d15062cd0fb2015dfc6668449aed3cc48a82d0d602d268c7daab6a41294c0cc4ebe5664568dfc50e1648a45a4a1e3a5195846a3ed011a337a02088ec80e0ebae8755cfe107acf3aafb40494e406f804216bb10cf430b0f37856b42db8dc5514724ee93dfb10826f0dd4a0364b9580291d2cd65664814fde37ca80bb4ea44eacc5e641bbadf423f9a2cbf813b8d145da90029baee7ddadda71c7f3811c4105262945bba1668c3be69a3c230974d83561841d766f9c9d570bb7fbe04c7e8a6c3c760c0de81def35692da361102b6b9b2b918837fa97896e84abb40a4efb7e54523a486964b64ca86f120"
    );
}

impl PairingIntrinsics for Bn254 {
    type Fp = Fp;
    type Fp2 = Fp2;
    type Fp12 = Fp12;

    const XI: Fp2 = Fp2::new(Fp::from_const_u64(9), Fp::from_const_u64(1));
    const FP2_TWO: Fp2 = Fp2::new(Fp::from_const_u64(2), Fp::ZERO);
    const FP2_THREE: Fp2 = Fp2::new(Fp::from_const_u64(3), Fp::ZERO);
    // Validated against `halo2curves::bn256::FROBENIUS_COEFF_FQ12_C1` in tests.rs
    const FROBENIUS_COEFFS: [[Fp2; 5]; 12] = [
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "70e4c9dcda350bd676212f29081e525c608be676dd9fb9e8dfa765281cb78412"
                )),
                Fp::from_const_bytes(hex!(
                    "ac62f3805ff05ccae5c7ee8e779279748e0b1512fe7c32a6e6e7fab4f3966924"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "3d556f175795e3990c33c3c210c38cb743b159f53cec0b4cf711794f9847b32f"
                )),
                Fp::from_const_bytes(hex!(
                    "a2cb0f641cd56516ce9d7c0b1d2aae3294075ad78bcca44b20aeeb6150e5c916"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "5a13a071460154dc9859c9a9ede0aadbb9f9e2b698c65edcdcf59a4805f33c06"
                )),
                Fp::from_const_bytes(hex!(
                    "e3b02326637fd382d25ba28fc97d80212b6f79eca7b504079a0441acbc3cc007"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "62a71e92551f8a8472ec94bef76533d3841e185ab7c0f38001a8ee645e4fb505"
                )),
                Fp::from_const_bytes(hex!(
                    "26812bcd11473bc163c7de1bead28536921c0b3bb0803a9fee8afde7db5e142c"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "2f69b7ea10c8a22ed31baa559b455c42f43f35a461363ae94986794fe7c18301"
                )),
                Fp::from_const_bytes(hex!(
                    "4b2c0c6eeeb8c624c02a8e6799cb80b07d9f72c746b27fa27506fd76caf2ac12"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "49fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "48fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "46fd7cd8168c203c8dca7168916a81975d588181b64550b829a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "feffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "ffffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "7fa6d41e397d6fe84ad255be8db34c8990aaacd08c60e9efbbe482cccf81dc19"
                )),
                Fp::from_const_bytes(hex!(
                    "01c1c0f42baa9476ec39d497e3a5037f9d137635e3eecb06737de70bb6f8ab00"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "6dfbdc7be86e747bd342695d3dfd5f80ac259f95771cffba0aef55b778e05608"
                )),
                Fp::from_const_bytes(hex!(
                    "de86a5aa2bab0c383126ff98bf31df0f4f0926ec6d0ef3a96f76d1b341def104"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "ede9dc66d08acc5ff470a8bea389d6bba35e9eca1d7ff1db4caa96986d5b272a"
                )),
                Fp::from_const_bytes(hex!(
                    "644c59b2b30c4db9ba6ecfd8c7ec007632e907950e904bb18f9bf034b611a428"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "66f0cb3cbc921a0ecb6bb075450933e64e44b2b5f7e0be19ab8dc011668cc50b"
                )),
                Fp::from_const_bytes(hex!(
                    "9f230c739dede35fe5967f73089e4aa4041dd20ceff6b0fe120a91e199e9d523"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "431b26767084deeba5847c969880d62e693f4d3bfa99167105092c954490c413"
                )),
                Fp::from_const_bytes(hex!(
                    "992428841304251f21800220eada2d3e3d63482a28b2b19f0bddb1596a36db16"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "48fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "feffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "48fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "feffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0fc20a425e476412d4b026958595fa2c301fc659afc02f07dc3c1da4b3ca5707"
                )),
                Fp::from_const_bytes(hex!(
                    "9c5b4a4ce34558e8933c5771fd7d0ba26c60e2a49bb7e918b6351e3835b0a60c"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "e4a9ad1dee13e9623a1fb7b0d41416f7cad90978b8829569513f94bbd474be28"
                )),
                Fp::from_const_bytes(hex!(
                    "c7aac7c9ce0baeed8d06f6c3b40ef4547a4701bebc6ab8c2997b74cbe08aa814"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "5a13a071460154dc9859c9a9ede0aadbb9f9e2b698c65edcdcf59a4805f33c06"
                )),
                Fp::from_const_bytes(hex!(
                    "e3b02326637fd382d25ba28fc97d80212b6f79eca7b504079a0441acbc3cc007"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "7f65920905da7ba94f722c3454fb1ade89f5b67107a49d1d7d6a826aae72e91e"
                )),
                Fp::from_const_bytes(hex!(
                    "c955c2707ee32157d136854130643254247725bbcd13b5d251abd4f86f54de10"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "14b26e8b5fbc3bbdd268d240fd3a7aec74ff17979863dc87bb82b2455dce4012"
                )),
                Fp::from_const_bytes(hex!(
                    "4ef81b16254b5efa605574b8500fad8dbfc3d562e1ff31fd95d6b4e29f432e04"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "46fd7cd8168c203c8dca7168916a81975d588181b64550b829a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "46fd7cd8168c203c8dca7168916a81975d588181b64550b829a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "46fd7cd8168c203c8dca7168916a81975d588181b64550b829a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "d718b3fb3b56156616a9423f894c2f3bfdcc9a0ad9a596cf49f8cbb85697df1d"
                )),
                Fp::from_const_bytes(hex!(
                    "9b9a8957b79bc371a70283d919d80723cf4c6c6fb8c81d1243b8362c7fb7fa0b"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "3d556f175795e3990c33c3c210c38cb743b159f53cec0b4cf711794f9847b32f"
                )),
                Fp::from_const_bytes(hex!(
                    "a2cb0f641cd56516ce9d7c0b1d2aae3294075ad78bcca44b20aeeb6150e5c916"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "ede9dc66d08acc5ff470a8bea389d6bba35e9eca1d7ff1db4caa96986d5b272a"
                )),
                Fp::from_const_bytes(hex!(
                    "644c59b2b30c4db9ba6ecfd8c7ec007632e907950e904bb18f9bf034b611a428"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "62a71e92551f8a8472ec94bef76533d3841e185ab7c0f38001a8ee645e4fb505"
                )),
                Fp::from_const_bytes(hex!(
                    "26812bcd11473bc163c7de1bead28536921c0b3bb0803a9fee8afde7db5e142c"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "1894c5ed05c47d0dbaaec712f624255569184cdd540f16cfdf19b8918b8ce02e"
                )),
                Fp::from_const_bytes(hex!(
                    "fcd0706a28d35917cd9fe300f89e00e7dfb80eba6f93d015b499346aa85bb71d"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "feffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "48fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "0100000000000000000000000000000000000000000000000000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "feffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "48fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "c856a8b9dd0eb15342f81baa03b7340ecdadd4b029e566c86dbbae14a3cc8716"
                )),
                Fp::from_const_bytes(hex!(
                    "463cbce3eae18bc5a0909dd0adc47d18c0440b4cd35684b1b6224ad5bc55b82f"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "6dfbdc7be86e747bd342695d3dfd5f80ac259f95771cffba0aef55b778e05608"
                )),
                Fp::from_const_bytes(hex!(
                    "de86a5aa2bab0c383126ff98bf31df0f4f0926ec6d0ef3a96f76d1b341def104"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "5a13a071460154dc9859c9a9ede0aadbb9f9e2b698c65edcdcf59a4805f33c06"
                )),
                Fp::from_const_bytes(hex!(
                    "e3b02326637fd382d25ba28fc97d80212b6f79eca7b504079a0441acbc3cc007"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "66f0cb3cbc921a0ecb6bb075450933e64e44b2b5f7e0be19ab8dc011668cc50b"
                )),
                Fp::from_const_bytes(hex!(
                    "9f230c739dede35fe5967f73089e4aa4041dd20ceff6b0fe120a91e199e9d523"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "04e25662a6074250e745f5d1f8e9aa68f4183446bcab39472497054c2ebe9f1c"
                )),
                Fp::from_const_bytes(hex!(
                    "aed854540388fb1c6c4a6f48a78f535920f538578e939e181ec37f8708188919"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "ffffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "feffff77314763574f5cdbacf163f2d4ac8bd4a0ce6be2590000000000000000"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "46fd7cd8168c203c8dca7168916a81975d588181b64550b829a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "48fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "49fd7c60e544bde43d6e96bb9f068fc2b0ccace0e7d96d5e29a031e1724e6430"
                )),
                Fp::from_const_bytes(hex!(
                    "0000000000000000000000000000000000000000000000000000000000000000"
                )),
            ),
        ],
        [
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "383b7296b844bc29b9194bd30bd5866a2d39bb27078520b14d63143dbf830c29"
                )),
                Fp::from_const_bytes(hex!(
                    "aba1328c3346c853f98d1af793ec75f5f0f79edc1a8e669f736a13a93d9ebd23"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "e4a9ad1dee13e9623a1fb7b0d41416f7cad90978b8829569513f94bbd474be28"
                )),
                Fp::from_const_bytes(hex!(
                    "c7aac7c9ce0baeed8d06f6c3b40ef4547a4701bebc6ab8c2997b74cbe08aa814"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "ede9dc66d08acc5ff470a8bea389d6bba35e9eca1d7ff1db4caa96986d5b272a"
                )),
                Fp::from_const_bytes(hex!(
                    "644c59b2b30c4db9ba6ecfd8c7ec007632e907950e904bb18f9bf034b611a428"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "7f65920905da7ba94f722c3454fb1ade89f5b67107a49d1d7d6a826aae72e91e"
                )),
                Fp::from_const_bytes(hex!(
                    "c955c2707ee32157d136854130643254247725bbcd13b5d251abd4f86f54de10"
                )),
            ),
            Fp2::new(
                Fp::from_const_bytes(hex!(
                    "334b0e4db7cfe47eba619f27942f07abe85869ea1de273306e1d7f9b1580231e"
                )),
                Fp::from_const_bytes(hex!(
                    "f90461c2f140c2412c75fdaf405bd4099e94ab1ed5451ebb93c97cfed20a362c"
                )),
            ),
        ],
    ];
}
