use crate::math::Point3;

use super::angle::Angle;

/// A point in spherical coordinates.
///
/// `phi` is the azimuth, measured counter-clockwise from the positive X
/// axis in `[0, 360)`; `theta` is the polar angle from the positive Z axis,
/// produced in `[0, 180]` by [`SphericalCoordinates::from_cartesian`].
///
/// `P = (r cos(phi) sin(theta), r sin(phi) sin(theta), r cos(theta))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoordinates {
    /// Distance from the origin.
    pub radius: f64,
    /// Azimuth angle.
    pub phi: Angle,
    /// Polar angle.
    pub theta: Angle,
}

impl SphericalCoordinates {
    /// Creates spherical coordinates from radius, azimuth, and polar angle.
    #[must_use]
    pub fn new(radius: f64, phi: Angle, theta: Angle) -> Self {
        Self { radius, phi, theta }
    }

    /// Converts a Cartesian point to spherical coordinates.
    ///
    /// At the poles (`theta` of 0 or 180 degrees) the azimuth is
    /// undefined and resolves to 0.
    #[must_use]
    pub fn from_cartesian(point: &Point3) -> Self {
        let radius = point.coords.norm();
        let phi = Angle::from_radians(point.y.atan2(point.x));
        let theta =
            Angle::from_radians((point.x.powi(2) + point.y.powi(2)).sqrt().atan2(point.z));
        Self { radius, phi, theta }
    }

    /// Converts back to a Cartesian point.
    #[must_use]
    pub fn to_cartesian(&self) -> Point3 {
        let sin_theta = self.theta.sin();
        Point3::new(
            self.radius * self.phi.cos() * sin_theta,
            self.radius * self.phi.sin() * sin_theta,
            self.radius * self.theta.cos(),
        )
    }
}
