use crate::geometry::{ray_angle, Angle};
use crate::math::Point2;

/// Angles of the ray from a circle's centre to a point, in the three
/// conventions used by the sweep and arc operations.
#[derive(Debug, Clone, Copy)]
pub struct CentreToPointAngles {
    /// Counter-clockwise from the positive X axis.
    pub from_x_axis: Angle,
    /// Counter-clockwise, re-based to the Y axis.
    pub from_y_axis_ccw: Angle,
    /// Clockwise, re-based to the Y axis.
    pub from_y_axis_cw: Angle,
}

/// Computes the angle of a point as seen from a circle's centre.
///
/// An unknown centre or point resolves every output to 0 degrees.
pub struct CentreToPointAngle {
    centre: Option<Point2>,
    point: Option<Point2>,
}

impl CentreToPointAngle {
    /// Creates a new `CentreToPointAngle` computation.
    #[must_use]
    pub fn new(centre: Option<Point2>, point: Option<Point2>) -> Self {
        Self { centre, point }
    }

    /// Executes the computation.
    ///
    /// Axis-adjacent points resolve to the exact axis angle; see
    /// [`ray_angle`].
    #[must_use]
    pub fn execute(&self) -> CentreToPointAngles {
        let (Some(centre), Some(point)) = (self.centre, self.point) else {
            return CentreToPointAngles {
                from_x_axis: Angle::ZERO,
                from_y_axis_ccw: Angle::ZERO,
                from_y_axis_cw: Angle::ZERO,
            };
        };

        let from_x_axis = ray_angle(&centre, &point);
        let from_y_axis_ccw = from_x_axis.relative_to_y_axis_ccw();
        CentreToPointAngles {
            from_x_axis,
            from_y_axis_ccw,
            from_y_axis_cw: from_y_axis_ccw.inverse(),
        }
    }
}
