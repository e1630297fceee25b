use cryptal_secp256k1::encoding::{decode_hex, decode_hex_array};
use cryptal_secp256k1::error::Error;
use cryptal_secp256k1::keys::PrivateKey;
use cryptal_secp256k1::schnorr;
use cryptal_secp256k1::signatures::schnorr::{self as bip340, SchnorrSignature};

use proptest::prelude::*;

const MESSAGE: &str = "243f6a8885a308d313198a2e03707344a4093822299f31d0082efa98ec4e6c89";
const PUBLIC_KEY: &str = "dff1d77f2a671c5f36183726db2341be58feae1da2deced843240f7b502ba659";

struct SignVector {
    secret_key: &'static str,
    public_key: &'static str,
    aux_rand: &'static str,
    message: &'static str,
    signature: &'static str,
}

struct VerifyVector {
    index: u8,
    public_key: &'static str,
    message: &'static str,
    signature: &'static str,
    valid: bool,
}

const SIGN_VECTORS: &[SignVector] = &[
    SignVector {
        secret_key: "0000000000000000000000000000000000000000000000000000000000000003",
        public_key: "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        aux_rand: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "e907831f80848d1069a5371b402410364bdf1c5f8307b0084c55f1ce2dca8215\
                    25f66a4a85ea8b71e482a74f382d2ce5ebeee8fdb2172f477df4900d310536c0",
    },
    SignVector {
        secret_key: "b7e151628aed2a6abf7158809cf4f3c762e7160f38b4da56a784d9045190cfef",
        public_key: PUBLIC_KEY,
        aux_rand: "0000000000000000000000000000000000000000000000000000000000000001",
        message: MESSAGE,
        signature: "6896bd60eeae296db48a229ff71dfe071bde413e6d43f917dc8dcf8c78de3341\
                    8906d11ac976abccb20b091292bff4ea897efcb639ea871cfa95f6de339e4b0a",
    },
    SignVector {
        secret_key: "c90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74020bbea63b14e5c9",
        public_key: "dd308afec5777e13121fa72b9cc1b7cc0139715309b086c960e18fd969774eb8",
        aux_rand: "c87aa53824b4d7ae2eb035a2b5bbbccc080e76cdc6d1692c4b0b62d798e6d906",
        message: "7e2d58d8b3bcdf1abadec7829054f90dda9805aab56c77333024b9d0a508b75c",
        signature: "5831aaeed7b44bb74e5eab94ba9d4294c49bcf2a60728d8b4c200f50dd313c1b\
                    ab745879a5ad954a72c45a91c3a51d3c7adea98d82f8481e0e1e03674a6f3fb7",
    },
    // message and aux above both moduli
    SignVector {
        secret_key: "0b432b2677937381aef05bb02a66ecd012773062cf3fa2549e44f58ed2401710",
        public_key: "25d1dff95105f5253c4022f628a996ad3a0d95fbf21d468a1b33f8c160d8f517",
        aux_rand: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        message: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        signature: "7eb0509757e246f19449885651611cb965ecc1a187dd51b64fda1edc9637d5ec\
                    97582b9cb13db3933705b32ba982af5af25fd78881ebb32771fc5922efc66ea3",
    },
];

const VERIFY_VECTORS: &[VerifyVector] = &[
    VerifyVector {
        index: 4,
        public_key: "d69c3509bb99e412e68b0fe8544e72837dfa30746d8be2aa65975f29d22dc7b9",
        message: "4df3c3f68fcc83b27e9d42c90431a72499f17875c81a599b566c9889b9696703",
        signature: "00000000000000000000003b78ce563f89a0ed9414f5aa28ad0d96d6795f9c63\
                    76afb1548af603b3eb45c9f8207dee1060cb71c04e80f593060b07d28308d7f4",
        valid: true,
    },
    // public key not on the curve
    VerifyVector {
        index: 5,
        public_key: "eefdea4cdb677750a420fee807eacf21eb9898ae79b9768766e4faa04a2d4a34",
        message: MESSAGE,
        signature: "6cff5c3ba86c69ea4b7376f31a9bcb4f74c1976089b2d9963da2e5543e177769\
                    69e89b4c5564d00349106b8497785dd7d1d713a8ae82b32fa79d5f7fc407d39b",
        valid: false,
    },
    // R has odd y
    VerifyVector {
        index: 6,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556\
                    3cc27944640ac607cd107ae10923d9ef7a73c643e166be5ebeafa34b1ac553e2",
        valid: false,
    },
    // negated message
    VerifyVector {
        index: 7,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "1fa62e331edbc21c394792d2ab1100a7b432b013df3f6ff4f99fcb33e0e1515f\
                    28890b3edb6e7189b630448b515ce4f8622a954cfe545735aaea5134fccdb2bd",
        valid: false,
    },
    // negated s
    VerifyVector {
        index: 8,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "6cff5c3ba86c69ea4b7376f31a9bcb4f74c1976089b2d9963da2e5543e177769\
                    961764b3aa9b2ffcb6ef947b6887a226e8d7c93e00c5ed0c1834ff0d0c2e6da6",
        valid: false,
    },
    // s·G − e·P is the identity, r = 0
    VerifyVector {
        index: 9,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "0000000000000000000000000000000000000000000000000000000000000000\
                    123dda8328af9c23a94c1feecfd123ba4fb73476f0d594dcb65c6425bd186051",
        valid: false,
    },
    // s·G − e·P is the identity, r = 1
    VerifyVector {
        index: 10,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "0000000000000000000000000000000000000000000000000000000000000001\
                    7615fbaf5ae28864013c099742deadb4dba87f11ac6754f93780d5a1837cf197",
        valid: false,
    },
    // r is not an x coordinate on the curve
    VerifyVector {
        index: 11,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "4a298dacae57395a15d0795ddbfd1dcb564da82b0f269bc70a74f8220429ba1d\
                    69e89b4c5564d00349106b8497785dd7d1d713a8ae82b32fa79d5f7fc407d39b",
        valid: false,
    },
    // r = P
    VerifyVector {
        index: 12,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f\
                    69e89b4c5564d00349106b8497785dd7d1d713a8ae82b32fa79d5f7fc407d39b",
        valid: false,
    },
    // s = n
    VerifyVector {
        index: 13,
        public_key: PUBLIC_KEY,
        message: MESSAGE,
        signature: "6cff5c3ba86c69ea4b7376f31a9bcb4f74c1976089b2d9963da2e5543e177769\
                    fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        valid: false,
    },
    // public key x exceeds the field size
    VerifyVector {
        index: 14,
        public_key: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc30",
        message: MESSAGE,
        signature: "6cff5c3ba86c69ea4b7376f31a9bcb4f74c1976089b2d9963da2e5543e177769\
                    69e89b4c5564d00349106b8497785dd7d1d713a8ae82b32fa79d5f7fc407d39b",
        valid: false,
    },
];

#[test]
fn bip340_sign_vectors() {
    for (index, vector) in SIGN_VECTORS.iter().enumerate() {
        let secret_key = decode_hex(vector.secret_key).unwrap();
        let aux_rand = decode_hex_array::<32>(vector.aux_rand).unwrap();
        let message = decode_hex(vector.message).unwrap();
        let public_key = decode_hex(vector.public_key).unwrap();

        assert_eq!(
            schnorr::get_public_key(&secret_key).unwrap().to_vec(),
            public_key,
            "vector {index}"
        );

        let signature = schnorr::sign_with_aux(&message, &secret_key, &aux_rand).unwrap();
        assert_eq!(
            signature.to_vec(),
            decode_hex(vector.signature).unwrap(),
            "vector {index}"
        );

        assert!(schnorr::verify(&signature, &message, &public_key), "vector {index}");
    }
}

#[test]
fn bip340_verify_vectors() {
    for vector in VERIFY_VECTORS {
        let public_key = decode_hex(vector.public_key).unwrap();
        let message = decode_hex(vector.message).unwrap();
        let signature = decode_hex(vector.signature).unwrap();

        assert_eq!(
            schnorr::verify(&signature, &message, &public_key),
            vector.valid,
            "vector {}",
            vector.index
        );
    }
}

#[test]
fn every_bit_flip_is_rejected() {
    let vector = &SIGN_VECTORS[1];
    let public_key = decode_hex(vector.public_key).unwrap();
    let message = decode_hex(vector.message).unwrap();
    let signature = decode_hex(vector.signature).unwrap();

    for byte in 0..signature.len() {
        for bit in 0..8 {
            let mut tampered = signature.clone();
            tampered[byte] ^= 1 << bit;

            assert!(
                !schnorr::verify(&tampered, &message, &public_key),
                "byte {byte} bit {bit}"
            );
        }
    }
}

#[test]
fn arbitrary_length_messages() {
    let secret_key = [0x5au8; 32];
    let public_key = schnorr::get_public_key(&secret_key).unwrap();
    let aux_rand = [7u8; 32];

    for message in [&b""[..], &b"a"[..], &[0xabu8; 100][..]] {
        let signature = schnorr::sign_with_aux(message, &secret_key, &aux_rand).unwrap();

        assert!(schnorr::verify(&signature, message, &public_key));
        assert!(!schnorr::verify(&signature, b"other", &public_key));
    }
}

#[test]
fn random_aux_signatures_verify() {
    let secret_key = [0x21u8; 32];
    let public_key = schnorr::get_public_key(&secret_key).unwrap();

    let a = schnorr::sign(b"message", &secret_key).unwrap();
    let b = schnorr::sign(b"message", &secret_key).unwrap();

    assert_ne!(a, b);
    assert!(schnorr::verify(&a, b"message", &public_key));
    assert!(schnorr::verify(&b, b"message", &public_key));
}

#[test]
fn odd_y_key_verifies_through_its_x_coordinate() {
    // vector 3's key has odd y
    let key = PrivateKey::from_hex(SIGN_VECTORS[3].secret_key).unwrap();
    assert!(!key.public_key().has_even_y());

    let aux_rand = [0u8; 32];
    let signature = bip340::sign(b"typed", &key, &aux_rand).unwrap();

    assert!(bip340::verify(&signature, b"typed", &key.public_key()));
}

#[test]
fn signature_decoding_rejects_bad_lengths() {
    assert_eq!(
        SchnorrSignature::from_bytes(&[0u8; 63]),
        Err(Error::InvalidSignature)
    );

    let hex = SIGN_VECTORS[0].signature;
    let signature = SchnorrSignature::from_hex(hex).unwrap();
    assert_eq!(signature.to_hex(), hex);

    assert!(!schnorr::verify(&signature.to_bytes(), &[0u8; 32], &[0u8; 31]));
}

#[test]
fn boundary_rejects_invalid_private_keys() {
    assert_eq!(
        schnorr::get_public_key(&[0u8; 32]),
        Err(Error::InvalidPrivateKey)
    );
    assert_eq!(
        schnorr::sign_with_aux(b"m", &[0xffu8; 32], &[0u8; 32]),
        Err(Error::InvalidPrivateKey)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_then_verify(
        secret_key in any::<[u8; 32]>(),
        aux_rand in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..96),
    ) {
        prop_assume!(cryptal_secp256k1::utils::is_valid_private_key(&secret_key));

        let public_key = schnorr::get_public_key(&secret_key).unwrap();
        let signature = schnorr::sign_with_aux(&message, &secret_key, &aux_rand).unwrap();

        prop_assert!(schnorr::verify(&signature, &message, &public_key));
    }
}
