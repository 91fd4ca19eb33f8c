pub mod events;
pub mod labels;

pub use events::{ContinuousEvents, DiscreteEvents, Point};
pub use labels::GazeClass;

/// Scalar type for gaze coordinates, timestamps, rates and thresholds.
pub type Real = f64;
