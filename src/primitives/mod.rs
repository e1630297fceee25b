//! Primitive types
//!
//! This module defines the fixed-size integers every other layer of the
//! crate is built on.
//!
//! Primitives are plain values with well-defined wrapping or overflowing
//! semantics. They know nothing about moduli or curves: modular reduction
//! lives in [`crate::curve::field`], which only relies on the carry and
//! widening operations provided here.
//!
//! Current primitives include:
//! - `U256`: a 256-bit unsigned integer stored as four 64-bit limbs
//! - `U512`: the double-width product of two `U256` values

mod u256;
mod u512;

/// Fixed-size unsigned integer primitives.
pub use u256::U256;
pub use u512::U512;
