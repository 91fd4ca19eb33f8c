use gaze_common::Real;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("at least two samples are required, got {0}")]
    TooFewSamples(usize),
    #[error("{name} has length {actual}, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("sampling rate must be positive, got {0}")]
    NonPositiveRate(Real),
    #[error("timestamps must be strictly increasing")]
    NonMonotonicTimestamps,
    #[error("dispersion window of {0}s spans no samples at the resolved rate")]
    WindowTooShort(Real),
    #[error("segmentation has length {actual} but the time array has length {expected}")]
    SegmentationLength { expected: usize, actual: usize },
    #[error("no velocities remain below threshold {0}, cannot derive median statistics")]
    EmptyVelocityPopulation(Real),
    #[error("unknown movement class code '{0}'")]
    UnknownClassCode(String),
}
