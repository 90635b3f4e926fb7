use nalgebra::distance;

use crate::geometry::{ray_angle, ArcSegment};
use crate::math::{approx_eq, points_approx_eq, Point2, EPSILON_DISTANCE};

/// Decides whether a point lies on an arc segment, not just on the full
/// circle.
///
/// The angular test is a plain interval check between the arc's boundary
/// angles: arcs whose boundary angles straddle the 0/360 degree seam
/// cannot be represented by a single interval and report non-membership
/// even when the point lies on the arc geometrically.
pub struct PointOnArc {
    arc: Option<ArcSegment>,
    point: Option<Point2>,
}

impl PointOnArc {
    /// Creates a new `PointOnArc` membership test.
    #[must_use]
    pub fn new(arc: Option<ArcSegment>, point: Option<Point2>) -> Self {
        Self { arc, point }
    }

    /// Executes the membership test.
    ///
    /// An unknown arc or point reports `false`.
    #[must_use]
    pub fn execute(&self) -> bool {
        let (Some(arc), Some(point)) = (&self.arc, self.point) else {
            return false;
        };

        if points_approx_eq(&point, arc.start()) || points_approx_eq(&point, arc.end()) {
            return true;
        }
        if !approx_eq(distance(arc.centre(), &point), arc.radius(), EPSILON_DISTANCE) {
            return false;
        }

        let start = arc.start_angle();
        let end = arc.end_angle();
        let at = ray_angle(arc.centre(), &point);
        start.approx_le(at) && at.approx_le(end)
    }
}
