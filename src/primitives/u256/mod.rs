//! 256-bit unsigned integer primitive
//!
//! `U256` is the carrier type for field elements, scalars and curve
//! constants. It is split the same way as its 512-bit sibling:
//!
//! - `core`: representation, constants, carry/borrow arithmetic, bit access
//! - `ops`: operator traits (`+`, `-`, `&`, `|`, `^`, `>>`, `<<`)
//! - `conv`: byte and native-integer conversions, formatting

mod conv;
mod core;
mod ops;

pub use self::core::U256;
