use crate::math::Point2;

use super::angle::{ray_angle, Angle};
use super::circle::Circle;

/// The bounded portion of a circle's circumference between two points.
///
/// Boundary angles are derived from the boundary points on demand and
/// never stored.
#[derive(Debug, Clone)]
pub struct ArcSegment {
    circle: Circle,
    start: Point2,
    end: Point2,
}

impl ArcSegment {
    /// Creates a new arc segment on `circle` bounded by `start` and `end`.
    #[must_use]
    pub fn new(circle: Circle, start: Point2, end: Point2) -> Self {
        Self { circle, start, end }
    }

    /// Returns the underlying circle.
    #[must_use]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Returns the centre of the arc's circle.
    #[must_use]
    pub fn centre(&self) -> &Point2 {
        self.circle.centre()
    }

    /// Returns the radius of the arc's circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    /// Returns the start boundary point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end boundary point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// X-axis counter-clockwise angle of the start point from the centre.
    #[must_use]
    pub fn start_angle(&self) -> Angle {
        ray_angle(self.centre(), &self.start)
    }

    /// X-axis counter-clockwise angle of the end point from the centre.
    #[must_use]
    pub fn end_angle(&self) -> Angle {
        ray_angle(self.centre(), &self.end)
    }

    /// Counter-clockwise sweep from the start angle to the end angle.
    #[must_use]
    pub fn sweep(&self) -> Angle {
        self.end_angle() - self.start_angle()
    }

    /// Arc length along the counter-clockwise sweep, `radius * sweep`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius() * self.sweep().radians()
    }
}
