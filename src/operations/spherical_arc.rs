use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Angle, SphericalCoordinates};
use crate::math::{approx_eq, EPSILON_RADIUS};

use super::{InterpolateAngles, TurnDirection};

/// Parallel azimuth and polar sample sequences between two spherical
/// coordinates.
#[derive(Debug, Clone)]
pub struct AngleInterval {
    /// Azimuth samples.
    pub phi: Vec<Angle>,
    /// Polar samples.
    pub theta: Vec<Angle>,
}

/// Builds parallel phi and theta sample sequences between two spherical
/// coordinates sharing a radius.
pub struct SphericalInterval {
    from: SphericalCoordinates,
    to: SphericalCoordinates,
    steps: usize,
    direction: TurnDirection,
}

impl SphericalInterval {
    /// Creates a new `SphericalInterval` computation.
    #[must_use]
    pub fn new(
        from: SphericalCoordinates,
        to: SphericalCoordinates,
        steps: usize,
        direction: TurnDirection,
    ) -> Self {
        Self {
            from,
            to,
            steps,
            direction,
        }
    }

    /// Executes the interpolation of both angle sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint radii differ by more than
    /// [`EPSILON_RADIUS`], or if `steps` is less than 2.
    pub fn execute(&self) -> Result<AngleInterval> {
        if !approx_eq(self.from.radius, self.to.radius, EPSILON_RADIUS) {
            return Err(OperationError::RadiusMismatch {
                from: self.from.radius,
                to: self.to.radius,
            }
            .into());
        }

        let phi = InterpolateAngles::new(self.from.phi, self.to.phi, self.steps, self.direction)
            .execute()?;
        let theta =
            InterpolateAngles::new(self.from.theta, self.to.theta, self.steps, self.direction)
                .execute()?;
        Ok(AngleInterval { phi, theta })
    }
}

/// Generates spherical arc waypoints by zipping a [`SphericalInterval`]
/// with the shared endpoint radius.
pub struct SphericalArc {
    from: SphericalCoordinates,
    to: SphericalCoordinates,
    steps: usize,
    direction: TurnDirection,
}

impl SphericalArc {
    /// Creates a new `SphericalArc` computation.
    #[must_use]
    pub fn new(
        from: SphericalCoordinates,
        to: SphericalCoordinates,
        steps: usize,
        direction: TurnDirection,
    ) -> Self {
        Self {
            from,
            to,
            steps,
            direction,
        }
    }

    /// Executes the interpolation, returning `steps` spherical waypoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint radii differ by more than
    /// [`EPSILON_RADIUS`], or if `steps` is less than 2.
    pub fn execute(&self) -> Result<Vec<SphericalCoordinates>> {
        let interval =
            SphericalInterval::new(self.from, self.to, self.steps, self.direction).execute()?;
        debug!(
            radius = self.from.radius,
            steps = self.steps,
            direction = ?self.direction,
            "sampled spherical arc"
        );

        Ok(interval
            .phi
            .into_iter()
            .zip(interval.theta)
            .map(|(phi, theta)| SphericalCoordinates::new(self.from.radius, phi, theta))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArcGeoError;

    #[test]
    fn equator_arc_interpolates_phi_and_holds_theta() {
        let from = SphericalCoordinates::new(2.0, Angle::ZERO, Angle::DEG_90);
        let to = SphericalCoordinates::new(2.0, Angle::DEG_90, Angle::DEG_90);
        let samples = SphericalArc::new(from, to, 3, TurnDirection::CounterClockwise)
            .execute()
            .unwrap();
        assert_eq!(samples.len(), 3);
        let phi: Vec<f64> = samples.iter().map(|s| s.phi.degrees()).collect();
        for (got, expected) in phi.iter().zip([0.0, 45.0, 90.0]) {
            assert!((got - expected).abs() < 1e-9, "phi {got} != {expected}");
        }
        for s in &samples {
            assert!((s.radius - 2.0).abs() < 1e-12);
            assert!(s.theta.approx_eq(Angle::DEG_90));
        }
    }

    #[test]
    fn interval_runs_both_sequences_in_parallel() {
        let from = SphericalCoordinates::new(1.0, Angle::ZERO, Angle::DEG_45);
        let to = SphericalCoordinates::new(1.0, Angle::DEG_180, Angle::DEG_135);
        let interval = SphericalInterval::new(from, to, 5, TurnDirection::CounterClockwise)
            .execute()
            .unwrap();
        assert_eq!(interval.phi.len(), 5);
        assert_eq!(interval.theta.len(), 5);
        assert!(interval.phi[2].approx_eq(Angle::DEG_90));
        assert!(interval.theta[2].approx_eq(Angle::DEG_90));
    }

    #[test]
    fn radius_mismatch_is_a_configuration_error() {
        let from = SphericalCoordinates::new(1.0, Angle::ZERO, Angle::DEG_90);
        let to = SphericalCoordinates::new(1.0 + 1e-3, Angle::DEG_90, Angle::DEG_90);
        let result = SphericalArc::new(from, to, 3, TurnDirection::Clockwise).execute();
        assert!(matches!(
            result,
            Err(ArcGeoError::Operation(OperationError::RadiusMismatch { .. }))
        ));
    }

    #[test]
    fn radius_agreement_within_tolerance_is_accepted() {
        let from = SphericalCoordinates::new(1.0, Angle::ZERO, Angle::DEG_90);
        let to = SphericalCoordinates::new(
            1.0 + 0.5 * EPSILON_RADIUS,
            Angle::DEG_90,
            Angle::DEG_90,
        );
        assert!(SphericalArc::new(from, to, 3, TurnDirection::Clockwise)
            .execute()
            .is_ok());
    }

    #[test]
    fn bad_step_count_propagates() {
        let from = SphericalCoordinates::new(1.0, Angle::ZERO, Angle::DEG_90);
        let to = SphericalCoordinates::new(1.0, Angle::DEG_90, Angle::DEG_90);
        assert!(SphericalArc::new(from, to, 1, TurnDirection::Clockwise)
            .execute()
            .is_err());
    }
}
