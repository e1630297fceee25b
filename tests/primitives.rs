use cryptal_secp256k1::primitives::{U256, U512};

use core::convert::TryFrom;

#[test]
fn u256_max_const() {
    assert_eq!(U256::MAX, U256::from([255u8; 32]));
}

#[test]
fn u256_try_from_small_ints_and_back() {
    let a = U256::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);

    let a = U256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(
        u128::try_from(a).unwrap(),
        0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128
    );

    let bad = U256::from([1u8; 32]);
    assert!(u64::try_from(bad).is_err());
    assert!(u128::try_from(bad).is_err());
}

#[test]
fn u256_be_hex_and_bytes_agree() {
    let mut bytes = [0u8; 32];
    bytes[0] = 0x80;
    bytes[31] = 0x01;

    let from_hex =
        U256::from_be_hex("8000000000000000000000000000000000000000000000000000000000000001");

    assert_eq!(from_hex, U256::from(bytes));
    assert_eq!(from_hex.to_be_bytes(), bytes);
    assert_eq!(
        format!("{from_hex}"),
        "8000000000000000000000000000000000000000000000000000000000000001"
    );
}

#[test]
fn u256_leading_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);

    let mut high = [0u8; 32];
    high[0] = 0x10;
    assert_eq!(U256::from(high).leading_zeros(), 3);

    let mut mid = [0u8; 32];
    mid[10] = 0x01;
    assert_eq!(U256::from(mid).leading_zeros(), 87);
    assert_eq!(U256::from(mid).bits(), 169);
}

#[test]
fn u256_bitwise_ops() {
    let a = U256::from([0xFFu8; 32]);
    let b = U256::from([0x0Fu8; 32]);

    assert_eq!(a & b, U256::from([0x0Fu8; 32]));
    assert_eq!(a ^ b, U256::from([0xF0u8; 32]));
    assert_eq!(b | U256::from([0xF0u8; 32]), a);
}

#[test]
fn u256_shifts() {
    let one = U256::ONE;

    assert_eq!((one << 255) >> 255, one);
    assert_eq!(one << 256, U256::ZERO);
    assert_eq!(U256::MAX >> 192, U256::from(u64::MAX));
    assert_eq!((one << 64).limbs(), [0, 1, 0, 0]);

    let (shifted, carry) = (one << 255).shl1();
    assert_eq!(shifted, U256::ZERO);
    assert!(carry);

    assert_eq!(U256::from(6u64).shr1(), U256::from(3u64));
}

#[test]
fn u256_add_sub_carry() {
    let (sum, carry) = U256::MAX.overflowing_add(&U256::ONE);
    assert_eq!(sum, U256::ZERO);
    assert!(carry);

    let (diff, borrow) = U256::ZERO.overflowing_sub(&U256::ONE);
    assert_eq!(diff, U256::MAX);
    assert!(borrow);

    assert_eq!(U256::from(5u64) - U256::from(3u64), U256::from(2u64));
}

#[test]
fn u256_bit_access() {
    let value = U256::from(0b1010u64);

    assert!(!value.bit(0));
    assert!(value.bit(1));
    assert!(value.bit(3));
    assert!(!value.bit(300));
    assert_eq!(value.bits_at(1, 3), 0b101);
    assert!(value.is_even());
}

#[test]
fn u256_mul_wide() {
    let product = U256::MAX.mul_wide(&U256::MAX);

    // (2²⁵⁶ − 1)² = 2⁵¹² − 2²⁵⁷ + 1
    assert_eq!(product.lo(), U256::ONE);
    assert_eq!(product.hi(), U256::MAX - U256::ONE);
}

#[test]
fn u256_rem_be_bytes() {
    let modulus = U256::from(97u64);

    assert_eq!(U256::rem_be_bytes(&[0x01, 0x00], &modulus), U256::from(256u64 % 97));
    assert_eq!(U256::rem_be_bytes(&[], &modulus), U256::ZERO);
    assert_eq!(
        U256::rem_be_bytes(&[0xff; 64], &U256::MAX),
        U256::ZERO,
        "2⁵¹² − 1 is divisible by 2²⁵⁶ − 1"
    );
}

#[test]
fn u512_div_rem() {
    let divisor = U256::from(1_000_003u64);
    let dividend = U512::from_halves(U256::from(12_345u64), U256::ZERO);

    let (quotient, remainder) = dividend.div_rem(&divisor);
    assert!(quotient.is_zero());
    assert_eq!(remainder, U256::from(12_345u64));

    let a = U256::from_be_hex("fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210");
    let b = U256::from_be_hex("00000000000000000000000000000000ffffffffffffffffffffffffffffffff");
    let (quotient, remainder) = a.mul_wide(&b).div_rem(&b);

    assert_eq!(quotient.lo(), a);
    assert!(quotient.hi().is_zero());
    assert_eq!(remainder, U256::ZERO);
}

#[test]
fn u512_add_carry() {
    let max = U512::from_halves(U256::MAX, U256::MAX);
    let (sum, carry) = max.overflowing_add(&U512::from(U256::ONE));

    assert_eq!(sum, U512::ZERO);
    assert!(carry);
}
