mod angle;
mod arc;
mod circle;
mod spherical;

pub use angle::{ray_angle, Angle};
pub use arc::ArcSegment;
pub use circle::Circle;
pub use spherical::SphericalCoordinates;
