use crate::geometry::{ray_angle, Angle};
use crate::math::Point2;

/// Signed angular sweep between two points, in both traversal senses.
#[derive(Debug, Clone, Copy)]
pub struct Sweep {
    /// Counter-clockwise sweep from start to end.
    pub counterclockwise: Angle,
    /// Clockwise sweep from start to end, the inverse of the above.
    pub clockwise: Angle,
}

/// Computes the angular sweep from a start point to an end point as seen
/// from a centre.
///
/// Each point's Y-axis-relative counter-clockwise angle is taken and the
/// counter-clockwise sweep is their wrapping difference; the clockwise
/// sweep is its inverse. An unknown centre, start, or end resolves both
/// sweeps to 0 degrees.
pub struct SweepBetweenPoints {
    centre: Option<Point2>,
    start: Option<Point2>,
    end: Option<Point2>,
}

impl SweepBetweenPoints {
    /// Creates a new `SweepBetweenPoints` computation.
    #[must_use]
    pub fn new(centre: Option<Point2>, start: Option<Point2>, end: Option<Point2>) -> Self {
        Self { centre, start, end }
    }

    /// Executes the computation.
    #[must_use]
    pub fn execute(&self) -> Sweep {
        let (Some(centre), Some(start), Some(end)) = (self.centre, self.start, self.end)
        else {
            return Sweep {
                counterclockwise: Angle::ZERO,
                clockwise: Angle::ZERO,
            };
        };

        let at_start = ray_angle(&centre, &start).relative_to_y_axis_ccw();
        let at_end = ray_angle(&centre, &end).relative_to_y_axis_ccw();
        let counterclockwise = at_end - at_start;
        Sweep {
            counterclockwise,
            clockwise: counterclockwise.inverse(),
        }
    }
}
