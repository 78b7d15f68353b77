use thiserror::Error;

/// Top-level error type for the trisect classifier.
#[derive(Debug, Error)]
pub enum TrisectError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

/// Input geometry that the predicates cannot work with.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate triangle: area {area} is below tolerance")]
    DegenerateTriangle { area: f64 },

    #[error("zero-length segment")]
    ZeroLengthSegment,
}

/// Errors raised while classifying a face pair.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("face classifier requires an edge intersector")]
    MissingEdgeIntersector,

    #[error("edge intersector failed: {0}")]
    Intersector(String),
}

/// Invalid tuning parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`TrisectError`].
pub type Result<T> = std::result::Result<T, TrisectError>;
