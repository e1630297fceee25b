use cryptal_secp256k1::encoding::encode_hex;
use cryptal_secp256k1::hash::{hmac_sha256, sha256, sha256_concat, tagged_hash};
use cryptal_secp256k1::signatures::schnorr::TAG_CHALLENGE;

#[test]
fn sha256_known_answers() {
    assert_eq!(
        encode_hex(sha256(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        encode_hex(sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        encode_hex(sha256(&[b'a'; 1000])),
        "41edece42d63e8d9bf515a9ba6932e1c20cbc9f5a5d134645adb5db1b9737ea3"
    );
}

#[test]
fn concat_matches_single_buffer() {
    let whole = sha256(b"hello world");

    assert_eq!(sha256_concat(&[b"hello", b" ", b"world"]), whole);
    assert_eq!(sha256_concat(&[b"", b"hello world", b""]), whole);
}

#[test]
fn tagged_hash_known_answer() {
    assert_eq!(
        encode_hex(tagged_hash(TAG_CHALLENGE, &[b"abc"])),
        "770a5b7e7c304bbcc3ea107343ff951dd404312ef418db0c3b94e2ebfbb50087"
    );
}

#[test]
fn tagged_hash_separates_domains() {
    let tag_hash = sha256(TAG_CHALLENGE.as_bytes());

    assert_eq!(
        tagged_hash(TAG_CHALLENGE, &[b"a", b"bc"]),
        sha256_concat(&[&tag_hash, &tag_hash, b"abc"])
    );
    assert_ne!(
        tagged_hash(TAG_CHALLENGE, &[b"abc"]),
        tagged_hash("BIP0340/nonce", &[b"abc"])
    );
}

#[test]
fn hmac_splits_messages_transparently() {
    let key = [0x0bu8; 20];

    assert_eq!(
        hmac_sha256(&key, &[b"Hi ", b"There"]),
        hmac_sha256(&key, &[b"Hi There"])
    );
    assert_ne!(hmac_sha256(&key, &[b"Hi There"]), sha256(b"Hi There"));
}
