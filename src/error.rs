use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Rejected bound request; the axis keeps its previous bounds.
    #[error("invalid axis bounds: lower={lower}, upper={upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// The data-to-pixel transform is undefined for these inputs.
    #[error("degenerate axis: lower={lower}, upper={upper}, pixel_length={pixel_length}")]
    DegenerateAxis {
        lower: f64,
        upper: f64,
        pixel_length: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
