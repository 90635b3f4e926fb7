use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::Angle;

use super::TurnDirection;

/// Generates evenly spaced angle samples between two angles, honoring a
/// turn direction.
///
/// Produces exactly `steps` samples inclusive of both endpoints, spaced by
/// the signed sweep divided by `steps - 1`. The counter-clockwise sweep is
/// the wrapping difference `to - from`; the clockwise sweep is the negated
/// inverse of that.
pub struct InterpolateAngles {
    from: Angle,
    to: Angle,
    steps: usize,
    direction: TurnDirection,
}

impl InterpolateAngles {
    /// Creates a new `InterpolateAngles` computation.
    #[must_use]
    pub fn new(from: Angle, to: Angle, steps: usize, direction: TurnDirection) -> Self {
        Self {
            from,
            to,
            steps,
            direction,
        }
    }

    /// Executes the interpolation, returning `steps` samples renormalized
    /// into the canonical range.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is less than 2.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<Angle>> {
        if self.steps < 2 {
            return Err(OperationError::InvalidInput(format!(
                "angle interpolation requires at least 2 samples, got {}",
                self.steps
            ))
            .into());
        }

        let ccw = self.to - self.from;
        let sweep = match self.direction {
            TurnDirection::CounterClockwise => ccw.radians(),
            TurnDirection::Clockwise => -ccw.inverse().radians(),
        };
        let step = sweep / (self.steps - 1) as f64;
        trace!(
            from = self.from.degrees(),
            to = self.to.degrees(),
            steps = self.steps,
            sweep = sweep.to_degrees(),
            "interpolating angles"
        );

        Ok((0..self.steps)
            .map(|i| Angle::from_radians(self.from.radians() + i as f64 * step))
            .collect())
    }
}
