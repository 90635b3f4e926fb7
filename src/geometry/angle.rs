use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};
use std::ops::{Add, Sub};

use crate::math::{
    approx_eq, approx_ge, approx_gt, approx_le, approx_lt, Point2, EPSILON_DEGREES,
    EPSILON_DISTANCE,
};

/// A normalized angular value.
///
/// Stored internally as radians in `[0, 2*pi)`; the degree view is derived.
/// Equality and ordering are epsilon-tolerant over degrees (within
/// [`EPSILON_DEGREES`]) via the `approx_*` methods. The derived `PartialEq`
/// is exact and intended for canonical constants only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Self = Self { radians: 0.0 };
    pub const DEG_45: Self = Self { radians: FRAC_PI_4 };
    pub const DEG_90: Self = Self { radians: FRAC_PI_2 };
    pub const DEG_135: Self = Self { radians: 3.0 * FRAC_PI_4 };
    pub const DEG_180: Self = Self { radians: PI };
    pub const DEG_225: Self = Self { radians: 5.0 * FRAC_PI_4 };
    pub const DEG_270: Self = Self { radians: 3.0 * FRAC_PI_2 };
    pub const DEG_315: Self = Self { radians: 7.0 * FRAC_PI_4 };

    /// Creates an angle from radians, normalized into `[0, 2*pi)`.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        let mut r = radians;
        while r < 0.0 {
            r += TAU;
        }
        while r >= TAU {
            r -= TAU;
        }
        Self { radians: r }
    }

    /// Creates an angle from degrees, normalized into `[0, 360)`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Returns the angle in radians, in `[0, 2*pi)`.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees, in `[0, 360)`.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Returns the full turn minus this angle, normalized.
    ///
    /// Flips a sweep between the clockwise and counter-clockwise conventions.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::from_radians(TAU - self.radians)
    }

    /// Re-bases this X-axis-relative angle to the Y axis by subtracting a
    /// quarter turn and renormalizing.
    #[must_use]
    pub fn relative_to_y_axis_ccw(self) -> Self {
        Self::from_radians(self.radians - FRAC_PI_2)
    }

    /// Sine of the angle.
    #[must_use]
    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    /// Cosine of the angle.
    #[must_use]
    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    /// Epsilon-tolerant equality over degrees.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(self.degrees(), other.degrees(), EPSILON_DEGREES)
    }

    /// Epsilon-tolerant `<=` over degrees.
    #[must_use]
    pub fn approx_le(self, other: Self) -> bool {
        approx_le(self.degrees(), other.degrees(), EPSILON_DEGREES)
    }

    /// Epsilon-tolerant `>=` over degrees.
    #[must_use]
    pub fn approx_ge(self, other: Self) -> bool {
        approx_ge(self.degrees(), other.degrees(), EPSILON_DEGREES)
    }

    /// `<` by more than the degree tolerance.
    #[must_use]
    pub fn approx_lt(self, other: Self) -> bool {
        approx_lt(self.degrees(), other.degrees(), EPSILON_DEGREES)
    }

    /// `>` by more than the degree tolerance.
    #[must_use]
    pub fn approx_gt(self, other: Self) -> bool {
        approx_gt(self.degrees(), other.degrees(), EPSILON_DEGREES)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

/// X-axis counter-clockwise angle of the ray from `centre` to `point`.
///
/// Points on (or within [`EPSILON_DISTANCE`] of) a coordinate axis through
/// the centre resolve to the exact axis angle by quadrant sign instead of
/// trusting `atan2` with a near-zero component. A point coinciding with the
/// centre resolves to 0°.
#[must_use]
pub fn ray_angle(centre: &Point2, point: &Point2) -> Angle {
    let dx = point.x - centre.x;
    let dy = point.y - centre.y;

    if dx.abs() <= EPSILON_DISTANCE && dy.abs() <= EPSILON_DISTANCE {
        return Angle::ZERO;
    }
    if dx.abs() <= EPSILON_DISTANCE {
        // On the vertical through the centre.
        return if dy > 0.0 { Angle::DEG_90 } else { Angle::DEG_270 };
    }
    if dy.abs() <= EPSILON_DISTANCE {
        // On the horizontal through the centre.
        return if dx > 0.0 { Angle::ZERO } else { Angle::DEG_180 };
    }

    let raw = dy.atan2(dx);
    if raw < 0.0 {
        Angle::from_radians(raw + TAU)
    } else {
        Angle::from_radians(raw)
    }
}
