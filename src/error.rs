use thiserror::Error;

/// Top-level error type for the geometry kernel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors caused by invalid geometric input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("points must have 2 or 3 coordinates, got {0}")]
    InvalidDimension(usize),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("at least {expected} point(s) required, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },
}

/// Errors related to operations the kernel cannot carry out.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("{operation} is only defined in {dimension}D")]
    Unsupported {
        operation: &'static str,
        dimension: usize,
    },

    #[error("{0} is not implemented")]
    Unimplemented(&'static str),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;

/// Returns an error unless both dimensions agree.
pub(crate) fn ensure_same_dimension(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(GeometryError::DimensionMismatch { expected, found }.into())
    }
}

/// Returns an error unless `dimension` is 2.
pub(crate) fn ensure_planar(operation: &'static str, dimension: usize) -> Result<()> {
    if dimension == 2 {
        Ok(())
    } else {
        Err(OperationError::Unsupported {
            operation,
            dimension: 2,
        }
        .into())
    }
}
