//! Jacobian projective coordinates.
//!
//! A point `(X, Y, Z)` stands for the affine point `(X/Z², Y/Z³)`; `Z = 0`
//! is the point at infinity. Addition and doubling need no field
//! inversion, so all scalar multiplication runs here and converts back to
//! affine once at the end.
//!
//! Formulas are from the Explicit-Formulas Database for `a = 0`:
//! `dbl-2009-l` for doubling and `add-2007-bl` for addition.

use crate::curve::field::FieldElement;
use crate::curve::point::Point;
use crate::primitives::U256;

/// A curve point in Jacobian coordinates.
#[derive(Copy, Clone, Debug)]
pub struct JacobianPoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl JacobianPoint {
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub fn from_affine(point: &Point) -> Self {
        match point {
            Point::Identity => Self::IDENTITY,
            Point::Affine { x, y } => Self {
                x: *x,
                y: *y,
                z: FieldElement::ONE,
            },
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn negate(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    pub fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::IDENTITY;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = ((self.x + b).square() - a - c).double();
        let e = a.double() + a;
        let f = e.square();

        let x3 = f - d.double();
        let eight_c = c.double().double().double();
        let y3 = e * (d - x3) - eight_c;
        let z3 = (self.y * self.z).double();

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * other.z * z2z2;
        let s2 = other.y * self.z * z1z1;

        let h = u2 - u1;
        let r = s2 - s1;

        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let hh = h.square();
        let hhh = h * hh;
        let v = u1 * hh;

        let x3 = r.square() - hhh - v.double();
        let y3 = r * (v - x3) - s1 * hhh;
        let z3 = self.z * other.z * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Applies the endomorphism `(x, y) ↦ (β·x, y)`.
    pub(crate) fn mul_x(&self, factor: &FieldElement) -> Self {
        Self {
            x: self.x * *factor,
            y: self.y,
            z: self.z,
        }
    }

    /// Plain right-to-left double-and-add over every bit of `k`.
    ///
    /// Variable time. `k` is used as-is, without reduction modulo `n`.
    pub fn multiply_double_and_add(&self, k: &U256) -> Self {
        let mut acc = Self::IDENTITY;
        let mut addend = *self;

        for index in 0..k.bits() {
            if k.bit(index) {
                acc = acc.add(&addend);
            }
            addend = addend.double();
        }

        acc
    }

    pub fn to_affine(&self) -> Point {
        let Some(z_inv) = self.z.invert() else {
            return Point::Identity;
        };

        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;

        Point::Affine {
            x: self.x * z_inv2,
            y: self.y * z_inv3,
        }
    }

    /// Converts many points to affine form with a single inversion
    /// (Montgomery's trick).
    pub fn batch_normalize(points: &[Self]) -> Vec<Point> {
        // prefix[i] is the product of the non-zero Z coordinates before i
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = FieldElement::ONE;

        for point in points {
            prefix.push(acc);
            if !point.is_identity() {
                acc = acc * point.z;
            }
        }

        let Some(mut inv) = acc.invert() else {
            return vec![Point::Identity; points.len()];
        };

        let mut out = vec![Point::Identity; points.len()];

        for (index, point) in points.iter().enumerate().rev() {
            if point.is_identity() {
                continue;
            }

            let z_inv = inv * prefix[index];
            inv = inv * point.z;

            let z_inv2 = z_inv.square();
            out[index] = Point::Affine {
                x: point.x * z_inv2,
                y: point.y * z_inv2 * z_inv,
            };
        }

        out
    }
}

impl Default for JacobianPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Point> for JacobianPoint {
    fn from(point: Point) -> Self {
        Self::from_affine(&point)
    }
}

impl PartialEq for JacobianPoint {
    /// Compares `X₁·Z₂² = X₂·Z₁²` and `Y₁·Z₂³ = Y₂·Z₁³`.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        self.x * z2z2 == other.x * z1z1 && self.y * z2z2 * other.z == other.y * z1z1 * self.z
    }
}

impl Eq for JacobianPoint {}
