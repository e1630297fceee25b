//! 512-bit unsigned integer primitive
//!
//! `U512` only exists as the output of [`crate::primitives::U256::mul_wide`]
//! and as the dividend of the rounding divisions used by the scalar
//! decomposition. It therefore carries a deliberately small surface: limb
//! access, splitting into halves, addition and division by a `U256`.

mod core;

pub use self::core::U512;
