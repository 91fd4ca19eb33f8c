//! Robust saccade-threshold estimation via the median absolute deviation
//! (Voloh, Watson, König & Womelsdorf, 2019).

use gaze_common::Real;

use super::{check_gaze_lengths, sample_displacements};
use crate::error::{Error, Result};
use crate::timebase::{Timebase, resolve};

/// MAD-to-sigma scale factor for normally distributed data.
const MAD_SIGMA_SCALE: Real = 1.48;

/// Iteration stops once the threshold drops by no more than this, in
/// per-sample units.
const CONVERGENCE_LIMIT: Real = 1.0;

/// Result of the iterative estimation, in gaze-units per second.
#[derive(Debug, Clone, PartialEq)]
pub struct MadThreshold {
    /// The accepted velocity threshold, ready to feed a
    /// [`VelocityClassifier`](super::VelocityClassifier).
    pub threshold: Real,
    /// Every threshold tried, in order; the last entry equals
    /// `threshold`.
    pub history: Vec<Real>,
}

/// Derives a velocity threshold from the signal itself by iteratively
/// re-estimating median + 3·1.48·MAD over the sub-threshold population.
#[derive(Debug, Clone, PartialEq)]
pub struct MadThresholdEstimator {
    /// Starting velocity threshold, in gaze-units per second.
    /// Defaults to 200.
    pub initial_threshold: Real,
}

impl Default for MadThresholdEstimator {
    fn default() -> Self {
        Self {
            initial_threshold: 200.0,
        }
    }
}

impl MadThresholdEstimator {
    pub fn new(initial_threshold: Real) -> Self {
        Self { initial_threshold }
    }

    /// Runs the iteration to convergence.
    ///
    /// Fails with [`Error::EmptyVelocityPopulation`] when no velocity
    /// lies below the current threshold, where the median would
    /// otherwise silently turn into a NaN.
    #[tracing::instrument(skip_all, fields(samples = x.len(), iterations))]
    pub fn estimate(&self, x: &[Real], y: &[Real], time: &Timebase) -> Result<MadThreshold> {
        check_gaze_lengths(x, y)?;
        let timebase = resolve(x.len(), time)?;

        let mut threshold = self.initial_threshold / timebase.sfreq;
        let mut velocities = sample_displacements(x, y);
        let mut history = Vec::new();

        let accepted = loop {
            history.push(threshold);
            velocities.retain(|&velocity| velocity < threshold);
            if velocities.is_empty() {
                return Err(Error::EmptyVelocityPopulation(threshold * timebase.sfreq));
            }

            let center = median(&velocities);
            let deviations: Vec<Real> = velocities
                .iter()
                .map(|velocity| (velocity - center).abs())
                .collect();
            let mad = median(&deviations);

            let candidate = center + 3.0 * MAD_SIGMA_SCALE * mad;
            if threshold - candidate > CONVERGENCE_LIMIT {
                threshold = candidate;
            } else {
                history.push(candidate);
                break candidate;
            }
        };
        tracing::Span::current().record("iterations", history.len());

        // revert to per-second units
        Ok(MadThreshold {
            threshold: accepted * timebase.sfreq,
            history: history
                .into_iter()
                .map(|threshold| threshold * timebase.sfreq)
                .collect(),
        })
    }
}

/// Median of a non-empty population.
fn median(population: &[Real]) -> Real {
    let mut sorted = population.to_vec();
    sorted.sort_by(Real::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn median_of_odd_and_even_populations() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn estimator_converges_below_the_initial_threshold() {
        // fixation jitter with occasional large jumps, 100 Hz
        let mut rng = StdRng::seed_from_u64(17);
        let mut x = vec![0.0];
        let mut y = vec![0.0];
        for i in 1..500 {
            let step = if i % 100 == 0 { 3.0 } else { rng.random_range(-0.01..0.01) };
            x.push(x[i - 1] + step);
            y.push(y[i - 1] + rng.random_range(-0.01..0.01));
        }

        let estimator = MadThresholdEstimator::default();
        let result = estimator.estimate(&x, &y, &Timebase::RateHz(100.0)).unwrap();

        assert!(result.threshold <= estimator.initial_threshold);
        assert!(result.threshold > 0.0);
        assert_eq!(result.history.first(), Some(&estimator.initial_threshold));
        assert_eq!(result.history.last(), Some(&result.threshold));
    }

    #[test]
    fn history_thresholds_never_increase() {
        let mut rng = StdRng::seed_from_u64(3);
        let x: Vec<Real> = (0..200)
            .scan(0.0, |position, _| {
                *position += rng.random_range(-0.5..0.5);
                Some(*position)
            })
            .collect();
        let y = vec![0.0; 200];

        let estimator = MadThresholdEstimator::default();
        let result = estimator.estimate(&x, &y, &Timebase::RateHz(100.0)).unwrap();

        for pair in result.history.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9);
        }
    }

    #[test]
    fn threshold_is_reported_in_per_second_units() {
        // steps cycling 0.9/1.0/1.1: median 1.0, MAD 0.1 in per-sample
        // units, so the iteration accepts 1.0 + 3·1.48·0.1 = 1.444
        let steps = [0.9, 1.0, 1.1];
        let x: Vec<Real> = (0..100)
            .scan(0.0, |position, i| {
                if i > 0 {
                    *position += steps[i % 3];
                }
                Some(*position)
            })
            .collect();
        let y = vec![0.0; 100];

        let at_50 = MadThresholdEstimator::new(200.0)
            .estimate(&x, &y, &Timebase::RateHz(50.0))
            .unwrap();
        // same per-sample iteration, twice the rate and starting point
        let at_100 = MadThresholdEstimator::new(400.0)
            .estimate(&x, &y, &Timebase::RateHz(100.0))
            .unwrap();

        assert_approx_eq!(at_50.threshold, (1.0 + 3.0 * 1.48 * 0.1) * 50.0, 1e-6);
        assert_approx_eq!(at_100.threshold, 2.0 * at_50.threshold, 1e-6);
    }

    #[test]
    fn all_velocities_above_threshold_is_degenerate() {
        // jumps of 300 units at 1 Hz with a 200 units/s start: after the
        // first pass only the leading zero remains, the candidate drops
        // to zero and the population empties
        let x: Vec<Real> = (0..20).map(|i| i as Real * 300.0).collect();
        let y = vec![0.0; 20];

        let estimator = MadThresholdEstimator::default();
        let result = estimator.estimate(&x, &y, &Timebase::RateHz(1.0));
        assert!(matches!(result, Err(Error::EmptyVelocityPopulation(_))));
    }
}
