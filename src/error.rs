use thiserror::Error;

/// Top-level error type for the arcgeo computation core.
#[derive(Debug, Error)]
pub enum ArcGeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric value construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to arc computations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("spherical arc endpoint radii differ: {from} vs {to}")]
    RadiusMismatch { from: f64, to: f64 },
}

/// Convenience type alias for results using [`ArcGeoError`].
pub type Result<T> = std::result::Result<T, ArcGeoError>;
