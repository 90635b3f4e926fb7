use tracing::debug;

use crate::error::Result;
use crate::geometry::SphericalCoordinates;
use crate::math::Point3;

use super::{SphericalArc, TurnDirection};

/// Generates a 3D arc waypoint sequence between two Cartesian endpoints.
///
/// The endpoints are converted to spherical coordinates, interpolated as a
/// [`SphericalArc`], and each sample converted back, yielding an ordered
/// waypoint sequence on the sphere of the shared endpoint radius.
pub struct CartesianArc {
    from: Option<Point3>,
    to: Option<Point3>,
    steps: usize,
    direction: TurnDirection,
}

impl CartesianArc {
    /// Default number of waypoints.
    pub const DEFAULT_STEPS: usize = 3;

    /// Creates a new `CartesianArc` computation with the default step
    /// count and a clockwise turn direction.
    #[must_use]
    pub fn new(from: Option<Point3>, to: Option<Point3>) -> Self {
        Self {
            from,
            to,
            steps: Self::DEFAULT_STEPS,
            direction: TurnDirection::Clockwise,
        }
    }

    /// Sets the number of waypoints to generate.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the traversal sense.
    #[must_use]
    pub fn with_turn_direction(mut self, direction: TurnDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Executes the pipeline, returning the ordered waypoint sequence.
    ///
    /// An unknown endpoint yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint radii differ by more than the
    /// radius tolerance, or if the step count is less than 2.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        let (Some(from), Some(to)) = (self.from, self.to) else {
            return Ok(Vec::new());
        };

        let from = SphericalCoordinates::from_cartesian(&from);
        let to = SphericalCoordinates::from_cartesian(&to);
        debug!(
            radius = from.radius,
            steps = self.steps,
            direction = ?self.direction,
            "generating cartesian arc waypoints"
        );

        let samples = SphericalArc::new(from, to, self.steps, self.direction).execute()?;
        Ok(samples.iter().map(SphericalCoordinates::to_cartesian).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    #[test]
    fn endpoints_are_preserved() {
        init_tracing();
        let from = Point3::new(2.0, 0.0, 0.0);
        let to = Point3::new(0.0, 2.0, 0.0);
        let waypoints = CartesianArc::new(Some(from), Some(to))
            .with_turn_direction(TurnDirection::CounterClockwise)
            .execute()
            .unwrap();
        assert_eq!(waypoints.len(), 3);
        assert_relative_eq!(waypoints[0].x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(waypoints[0].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(waypoints[2].x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(waypoints[2].y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn equatorial_midpoint_lies_on_the_sphere() {
        let from = Point3::new(2.0, 0.0, 0.0);
        let to = Point3::new(0.0, 2.0, 0.0);
        let waypoints = CartesianArc::new(Some(from), Some(to))
            .with_turn_direction(TurnDirection::CounterClockwise)
            .execute()
            .unwrap();
        let mid = waypoints[1];
        let expected = std::f64::consts::SQRT_2;
        assert_relative_eq!(mid.x, expected, epsilon = 1e-9);
        assert_relative_eq!(mid.y, expected, epsilon = 1e-9);
        assert_relative_eq!(mid.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn clockwise_default_takes_the_long_way() {
        // Clockwise from +X to +Y sweeps 270 degrees; the midpoint lands
        // at azimuth 225.
        let from = Point3::new(2.0, 0.0, 0.0);
        let to = Point3::new(0.0, 2.0, 0.0);
        let waypoints = CartesianArc::new(Some(from), Some(to)).execute().unwrap();
        let mid = waypoints[1];
        let expected = -std::f64::consts::SQRT_2;
        assert_relative_eq!(mid.x, expected, epsilon = 1e-9);
        assert_relative_eq!(mid.y, expected, epsilon = 1e-9);
    }

    #[test]
    fn step_count_is_respected() {
        let from = Point3::new(1.0, 1.0, 1.0);
        let to = Point3::new(-1.0, 1.0, 1.0);
        let waypoints = CartesianArc::new(Some(from), Some(to))
            .with_steps(7)
            .with_turn_direction(TurnDirection::CounterClockwise)
            .execute()
            .unwrap();
        assert_eq!(waypoints.len(), 7);
        // Every waypoint stays on the endpoint sphere.
        let radius = 3.0_f64.sqrt();
        for p in &waypoints {
            assert_relative_eq!(p.coords.norm(), radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn unknown_endpoint_yields_empty_sequence() {
        let known = Some(Point3::new(1.0, 0.0, 0.0));
        assert!(CartesianArc::new(None, known).execute().unwrap().is_empty());
        assert!(CartesianArc::new(known, None).execute().unwrap().is_empty());
    }

    #[test]
    fn mismatched_endpoint_radii_fail() {
        let from = Point3::new(1.0, 0.0, 0.0);
        let to = Point3::new(0.0, 2.0, 0.0);
        assert!(CartesianArc::new(Some(from), Some(to)).execute().is_err());
    }
}
