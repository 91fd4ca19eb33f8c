//! The native segmentation algorithms.

pub mod dispersion;
pub mod mad;
pub mod velocity;

pub use dispersion::DispersionClassifier;
pub use mad::{MadThreshold, MadThresholdEstimator};
pub use velocity::VelocityClassifier;

use gaze_common::{Point, Real};
use itertools::Itertools;

use crate::error::{Error, Result};

/// Per-sample displacement magnitudes with a leading zero.
///
/// `v[0] = 0` and `v[i]` is the distance from sample `i-1` to sample `i`,
/// so a jump is attributed to the sample where the eye arrives. The
/// velocity classifier and the MAD estimator share this convention.
pub(crate) fn sample_displacements(x: &[Real], y: &[Real]) -> Vec<Real> {
    std::iter::once(0.0)
        .chain(
            x.iter()
                .zip(y.iter())
                .map(|(&x, &y)| Point::new(x, y))
                .tuple_windows()
                .map(|(previous, next)| previous.distance(&next)),
        )
        .collect()
}

pub(crate) fn check_gaze_lengths(x: &[Real], y: &[Real]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            name: "y",
            expected: x.len(),
            actual: y.len(),
        });
    }
    Ok(())
}
