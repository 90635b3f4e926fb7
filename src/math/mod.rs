/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for degenerate-geometry checks.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance for angle equality and ordering, in degrees.
pub const EPSILON_DEGREES: f64 = 1e-6;

/// Tolerance for distances and radius membership tests.
pub const EPSILON_DISTANCE: f64 = 1e-6;

/// Per-coordinate tolerance for 2D point equality.
pub const EPSILON_POINT_XY: f64 = 1e-6;

/// Tolerance for spherical-arc endpoint radius agreement.
pub const EPSILON_RADIUS: f64 = 1e-6;

/// Returns true if `a` and `b` differ by at most `eps` (inclusive).
#[must_use]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Returns true if `a <= b` within tolerance `eps`.
#[must_use]
pub fn approx_le(a: f64, b: f64, eps: f64) -> bool {
    a <= b + eps
}

/// Returns true if `a >= b` within tolerance `eps`.
#[must_use]
pub fn approx_ge(a: f64, b: f64, eps: f64) -> bool {
    a >= b - eps
}

/// Returns true if `a < b` by more than tolerance `eps`.
#[must_use]
pub fn approx_lt(a: f64, b: f64, eps: f64) -> bool {
    a < b - eps
}

/// Returns true if `a > b` by more than tolerance `eps`.
#[must_use]
pub fn approx_gt(a: f64, b: f64, eps: f64) -> bool {
    a > b + eps
}

/// Per-coordinate 2D point equality using [`EPSILON_POINT_XY`].
#[must_use]
pub fn points_approx_eq(p: &Point2, q: &Point2) -> bool {
    approx_eq(p.x, q.x, EPSILON_POINT_XY) && approx_eq(p.y, q.y, EPSILON_POINT_XY)
}
