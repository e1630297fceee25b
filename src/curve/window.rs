//! Fixed-window scalar multiplication with precomputed tables.
//!
//! For a window width `w` the table holds `⌈256/w⌉ + 1` windows of
//! `2^(w−1)` points each:
//!
//! ```text
//! table[i·2^(w−1) + j] = (j + 1) · 2^(i·w) · P
//! ```
//!
//! The scalar is consumed `w` bits at a time as a signed digit in
//! `[−2^(w−1), 2^(w−1)]`; a digit above `2^(w−1)` is replaced by
//! `digit − 2^w` and a carry into the next window. Every window performs
//! exactly one addition: zero digits add into a throwaway accumulator so the
//! sequence of group operations does not depend on the scalar.
//!
//! With the table in hand a multiplication costs about `256/w` additions
//! and no doublings.

use crate::curve::field::Scalar;
use crate::curve::jacobian::JacobianPoint;
use crate::curve::point::Point;
use crate::error::Error;
use crate::primitives::U256;

use log::debug;
use once_cell::sync::OnceCell;

/// Window width used for arbitrary points.
pub const DEFAULT_WINDOW: usize = 4;

/// Window width of the cached base-point table.
pub const BASE_WINDOW: usize = 8;

/// Widest supported window (`2¹⁵` points per window).
pub const MAX_WINDOW: usize = 16;

static BASE_TABLE: OnceCell<PrecomputedPoint> = OnceCell::new();

/// Precomputation parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Bits of scalar consumed per table lookup.
    pub window: usize,
}

impl WindowConfig {
    pub fn new(window: usize) -> Result<Self, Error> {
        let config = Self { window };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=MAX_WINDOW).contains(&self.window) {
            return Err(Error::InvalidWindowSize(self.window));
        }

        Ok(())
    }

    /// Number of windows covering a 256-bit scalar plus the final carry.
    pub fn windows(&self) -> usize {
        256usize.div_ceil(self.window) + 1
    }

    /// Points stored per window.
    pub fn window_size(&self) -> usize {
        1 << (self.window - 1)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window: BASE_WINDOW,
        }
    }
}

/// A point together with its immutable multiplication table.
///
/// Built once by [`PrecomputedPoint::new`] and never mutated afterwards,
/// so it can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct PrecomputedPoint {
    point: Point,
    config: WindowConfig,
    table: Vec<Point>,
}

impl PrecomputedPoint {
    /// Builds the table for `point` after validating `config`.
    pub fn new(point: Point, config: WindowConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self::build(point, config.window))
    }

    /// Builds the table without validating the window width.
    pub(crate) fn build(point: Point, window: usize) -> Self {
        let config = WindowConfig { window };
        let windows = config.windows();
        let window_size = config.window_size();

        let mut points = Vec::with_capacity(windows * window_size);
        let mut p = JacobianPoint::from_affine(&point);

        for _ in 0..windows {
            let mut base = p;
            points.push(base);

            for _ in 1..window_size {
                base = base.add(&p);
                points.push(base);
            }

            p = base.double();
        }

        let table = JacobianPoint::batch_normalize(&points);

        debug!(
            "built window table: window={}, points={}",
            window,
            table.len()
        );

        Self {
            point,
            config,
            table,
        }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn window(&self) -> usize {
        self.config.window
    }

    /// Number of precomputed points.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// `k · P` using the table.
    pub fn multiply(&self, k: &Scalar) -> Point {
        self.multiply_jacobian(k).to_affine()
    }

    pub(crate) fn multiply_jacobian(&self, k: &Scalar) -> JacobianPoint {
        let window = self.config.window;
        let windows = self.config.windows();
        let window_size = self.config.window_size() as i64;
        let max_number = 1i64 << window;
        let mask = (1u64 << window) - 1;

        let mut n = k.value();
        let mut acc = JacobianPoint::IDENTITY;
        let mut fake = JacobianPoint::IDENTITY;

        for index in 0..windows {
            let offset = index * window_size as usize;

            let mut digit = (n.low_u64() & mask) as i64;
            n = n >> window as u32;

            if digit > window_size {
                digit -= max_number;
                n = n + U256::ONE;
            }

            if digit == 0 {
                let mut filler = JacobianPoint::from_affine(&self.table[offset]);
                if index % 2 == 1 {
                    filler = filler.negate();
                }
                fake = fake.add(&filler);
            } else {
                let cached = JacobianPoint::from_affine(
                    &self.table[offset + digit.unsigned_abs() as usize - 1],
                );

                acc = acc.add(&if digit < 0 { cached.negate() } else { cached });
            }
        }

        std::hint::black_box(fake);

        acc
    }
}

/// The process-wide base-point table, built on first use.
///
/// Concurrent first callers block on the same initialisation instead of
/// building duplicate tables.
pub fn base_table() -> &'static PrecomputedPoint {
    BASE_TABLE.get_or_init(|| {
        debug!("materialising base point table");
        PrecomputedPoint::build(Point::BASE, BASE_WINDOW)
    })
}
