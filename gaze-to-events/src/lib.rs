//! This crate provides tools for converting raw gaze samples into a
//! stream of labeled movement events.
//!
//! A recording takes the form of parallel `x`/`y` slices plus a time
//! argument (either explicit timestamps or a sampling rate). Typical
//! usage may look like:
//! ```rust
//! use gaze_to_events::{
//!     MadThresholdEstimator, Timebase, VelocityClassifier, continuous_to_discrete, resolve,
//! };
//!
//! # fn main() -> gaze_to_events::Result<()> {
//! let x = [0.0, 0.1, 4.0, 8.0, 8.1, 8.2];
//! let y = [0.0, 0.0, 0.5, 1.0, 1.0, 1.1];
//! let time = Timebase::RateHz(60.0);
//!
//! let threshold = MadThresholdEstimator::default().estimate(&x, &y, &time)?;
//! let segmentation = VelocityClassifier::new(threshold.threshold).classify(&x, &y, &time)?;
//!
//! // collapse to one entry per event boundary
//! let clock = resolve(x.len(), &time)?;
//! let events = continuous_to_discrete(&clock.times, &segmentation)?;
//! # let _ = events;
//! # Ok(())
//! # }
//! ```
//!
//! The continuous and discrete representations are interchangeable
//! through the [`codec`]; output from external segmentation engines
//! enters the same representations through [`translate`].

pub mod classifiers;
pub mod codec;
pub mod error;
pub mod geometry;
pub mod timebase;
pub mod translate;

pub use classifiers::{
    DispersionClassifier, MadThreshold, MadThresholdEstimator, VelocityClassifier,
};
pub use codec::{continuous_to_discrete, discrete_to_continuous};
pub use error::{Error, Result};
pub use geometry::{SegmentMetrics, continuous_segment_metrics, discrete_segment_metrics};
pub use timebase::{ResolvedTimebase, Timebase, resolve, sfreq_to_times};

pub use gaze_common::{ContinuousEvents, DiscreteEvents, GazeClass, Point, Real};
