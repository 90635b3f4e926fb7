use nalgebra::distance;

use crate::error::{GeometryError, Result};
use crate::math::{approx_eq, approx_le, Point2, EPSILON_DISTANCE, TOLERANCE};

use super::angle::{ray_angle, Angle};

/// A circle in the XY plane.
///
/// Defined by an immutable centre and positive radius. Angles on the
/// circle are measured counter-clockwise from the positive X axis.
#[derive(Debug, Clone)]
pub struct Circle {
    centre: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Arguments
    ///
    /// * `centre` - Centre of the circle
    /// * `radius` - Radius (must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(centre: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { centre, radius })
    }

    /// Returns the centre of the circle.
    #[must_use]
    pub fn centre(&self) -> &Point2 {
        &self.centre
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the circumference of the circle.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }

    /// Returns true if `point` lies on the circle within [`EPSILON_DISTANCE`].
    #[must_use]
    pub fn is_point_on_circle(&self, point: &Point2) -> bool {
        approx_eq(distance(&self.centre, point), self.radius, EPSILON_DISTANCE)
    }

    /// Returns true if the circles intersect or touch.
    ///
    /// The boundary is inclusive: circles whose centre distance equals the
    /// sum of the radii count as intersecting.
    #[must_use]
    pub fn intersects(&self, other: &Circle) -> bool {
        approx_le(
            distance(&self.centre, &other.centre),
            self.radius + other.radius,
            EPSILON_DISTANCE,
        )
    }

    /// Evaluates the point on the circle at `angle`, measured
    /// counter-clockwise from the positive X axis.
    #[must_use]
    pub fn point_at_angle(&self, angle: Angle) -> Point2 {
        Point2::new(
            self.centre.x + self.radius * angle.cos(),
            self.centre.y + self.radius * angle.sin(),
        )
    }

    /// Clockwise sweep from `p1` to `p2` around the centre.
    #[must_use]
    pub fn angle_between_points_clockwise(&self, p1: &Point2, p2: &Point2) -> Angle {
        let a1 = ray_angle(&self.centre, p1);
        let a2 = ray_angle(&self.centre, p2);
        (a2 - a1).inverse()
    }
}
