use cryptal_secp256k1::keys::PrivateKey;
use cryptal_secp256k1::signatures::schnorr;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_schnorr(c: &mut Criterion) {
    let key = PrivateKey::from_bytes(&[0x42u8; 32]).unwrap();
    let public = key.public_key();
    let aux_rand = [0u8; 32];
    let message = [0x5au8; 32];

    let signature = schnorr::sign(&message, &key, &aux_rand).unwrap();

    c.bench_function("schnorr sign", |b| {
        b.iter(|| schnorr::sign(black_box(&message), black_box(&key), black_box(&aux_rand)))
    });

    c.bench_function("schnorr verify", |b| {
        b.iter(|| schnorr::verify(black_box(&signature), black_box(&message), black_box(&public)))
    });
}

criterion_group!(benches, bench_schnorr);
criterion_main!(benches);
