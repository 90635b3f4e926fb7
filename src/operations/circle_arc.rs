use crate::error::Result;
use crate::geometry::{Angle, Circle};
use crate::math::Point2;

use super::{InterpolateAngles, TurnDirection};

/// Generates evenly spaced 2D waypoints along a circle between two angles.
pub struct CircleArc {
    circle: Circle,
    from: Angle,
    to: Angle,
    steps: usize,
    direction: TurnDirection,
}

impl CircleArc {
    /// Creates a new `CircleArc` computation.
    #[must_use]
    pub fn new(
        circle: Circle,
        from: Angle,
        to: Angle,
        steps: usize,
        direction: TurnDirection,
    ) -> Self {
        Self {
            circle,
            from,
            to,
            steps,
            direction,
        }
    }

    /// Executes the interpolation, returning `steps` points on the circle.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is less than 2.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let angles =
            InterpolateAngles::new(self.from, self.to, self.steps, self.direction).execute()?;
        Ok(angles
            .iter()
            .map(|angle| self.circle.point_at_angle(*angle))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn quarter_arc_endpoints_land_on_the_circle() {
        let circle = Circle::new(Point2::new(1.0, 1.0), 2.0).unwrap();
        let points = CircleArc::new(
            circle.clone(),
            Angle::ZERO,
            Angle::DEG_90,
            3,
            TurnDirection::CounterClockwise,
        )
        .execute()
        .unwrap();
        assert_eq!(points.len(), 3);
        let start = circle.point_at_angle(Angle::ZERO);
        let end = circle.point_at_angle(Angle::DEG_90);
        assert!((points[0] - start).norm() < TOL);
        assert!((points[2] - end).norm() < TOL);
        // Midpoint at 45 degrees.
        let mid = circle.point_at_angle(Angle::DEG_45);
        assert!((points[1] - mid).norm() < TOL);
    }

    #[test]
    fn all_waypoints_stay_on_the_circle() {
        let circle = Circle::new(Point2::new(-2.0, 3.0), 1.5).unwrap();
        let points = CircleArc::new(
            circle.clone(),
            Angle::DEG_45,
            Angle::DEG_270,
            9,
            TurnDirection::Clockwise,
        )
        .execute()
        .unwrap();
        assert_eq!(points.len(), 9);
        for p in &points {
            assert!(circle.is_point_on_circle(p));
        }
    }

    #[test]
    fn invalid_step_count_propagates() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap();
        assert!(CircleArc::new(
            circle,
            Angle::ZERO,
            Angle::DEG_90,
            1,
            TurnDirection::Clockwise
        )
        .execute()
        .is_err());
    }
}
