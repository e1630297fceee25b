//! The secp256k1 group.
//!
//! Layered bottom-up:
//!
//! - `field`: arithmetic modulo `P` ([`FieldElement`]) and `n` ([`Scalar`])
//! - `params`: the curve constants
//! - `point`: affine points and the group law
//! - `jacobian`: inversion-free projective arithmetic
//! - `window`: precomputed tables and fixed-window multiplication
//! - `endomorphism`: GLV splitting for variable-time multiplication

pub mod endomorphism;
pub mod field;
pub mod jacobian;
pub mod params;
pub mod point;
pub mod window;

pub use field::{FieldElement, Modulus, Residue, Scalar};
pub use jacobian::JacobianPoint;
pub use params::{CURVE, CurveParameters};
pub use point::Point;
pub use window::{BASE_WINDOW, DEFAULT_WINDOW, PrecomputedPoint, WindowConfig, base_table};
