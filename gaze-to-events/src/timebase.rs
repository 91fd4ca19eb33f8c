//! Normalizes the caller's time argument into a consistent sample clock.

use gaze_common::Real;
use itertools::Itertools;

use crate::error::{Error, Result};

/// Deltas are considered regular while their standard deviation stays
/// within this bound.
const REGULARITY_TOLERANCE: Real = 1e-5;

/// The caller's time argument, decided once at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Timebase {
    /// Sampling rate in Hz; timestamps are synthesized starting at zero.
    RateHz(Real),
    /// Explicit strictly-increasing per-sample timestamps, in seconds.
    Timestamps(Vec<Real>),
}

/// A normalized sample clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTimebase {
    /// One timestamp per sample, in seconds.
    pub times: Vec<Real>,
    /// Sampling rate in Hz. Derived from the mean sample interval when
    /// the caller supplied explicit timestamps.
    pub sfreq: Real,
    /// True when the timestamp deltas were not near-constant and the
    /// mean-derived rate is an approximation.
    pub irregular: bool,
}

/// Synthesizes a timestamp array of `len` samples from a sampling rate.
pub fn sfreq_to_times(len: usize, sfreq: Real, start_time: Real) -> Vec<Real> {
    (0..len).map(|i| start_time + i as Real / sfreq).collect()
}

/// Resolves a time argument against the sample count of the gaze arrays.
///
/// Irregular sampling is an advisory, not an error: the clock is still
/// produced from the mean sample interval, a warning is logged and the
/// `irregular` flag is set on the result.
pub fn resolve(n_samples: usize, time: &Timebase) -> Result<ResolvedTimebase> {
    if n_samples < 2 {
        return Err(Error::TooFewSamples(n_samples));
    }
    match time {
        Timebase::RateHz(sfreq) => {
            if *sfreq <= 0.0 {
                return Err(Error::NonPositiveRate(*sfreq));
            }
            Ok(ResolvedTimebase {
                times: sfreq_to_times(n_samples, *sfreq, 0.0),
                sfreq: *sfreq,
                irregular: false,
            })
        }
        Timebase::Timestamps(times) => {
            if times.len() != n_samples {
                return Err(Error::LengthMismatch {
                    name: "times",
                    expected: n_samples,
                    actual: times.len(),
                });
            }
            let deltas: Vec<Real> = times
                .iter()
                .copied()
                .tuple_windows()
                .map(|(previous, next)| next - previous)
                .collect();
            if deltas.iter().any(|delta| *delta <= 0.0) {
                return Err(Error::NonMonotonicTimestamps);
            }
            let mean = deltas.iter().sum::<Real>() / deltas.len() as Real;
            let variance =
                deltas.iter().map(|delta| (delta - mean).powi(2)).sum::<Real>() / deltas.len() as Real;
            let irregular = variance.sqrt() > REGULARITY_TOLERANCE;
            if irregular {
                tracing::warn!(
                    "irregular sampling detected; using the mean-derived rate. \
                     Consider resampling to a fixed rate."
                );
            }
            Ok(ResolvedTimebase {
                times: times.clone(),
                sfreq: 1.0 / mean,
                irregular,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn rate_synthesizes_clock_from_zero() {
        let resolved = resolve(4, &Timebase::RateHz(10.0)).unwrap();
        assert_eq!(resolved.times, vec![0.0, 0.1, 0.2, 0.3]);
        assert_eq!(resolved.sfreq, 10.0);
        assert!(!resolved.irregular);
    }

    #[test]
    fn start_offset_shifts_the_synthesized_clock() {
        let times = sfreq_to_times(3, 2.0, 1.5);
        assert_eq!(times, vec![1.5, 2.0, 2.5]);
    }

    #[test]
    fn regular_timestamps_resolve_to_mean_rate() {
        let resolved = resolve(4, &Timebase::Timestamps(vec![0.0, 0.1, 0.2, 0.3])).unwrap();
        assert_approx_eq!(resolved.sfreq, 10.0, 1e-9);
        assert!(!resolved.irregular);
    }

    #[test]
    fn jittered_timestamps_are_flagged_irregular() {
        let resolved = resolve(4, &Timebase::Timestamps(vec![0.0, 0.1, 0.3, 0.35])).unwrap();
        assert!(resolved.irregular);
        // rate still derived from the mean interval
        let mean = 0.35 / 3.0;
        assert_approx_eq!(resolved.sfreq, 1.0 / mean, 1e-9);
    }

    #[test]
    fn single_sample_is_rejected() {
        assert!(matches!(
            resolve(1, &Timebase::RateHz(100.0)),
            Err(Error::TooFewSamples(1))
        ));
    }

    #[test]
    fn non_positive_rate_is_rejected() {
        assert!(matches!(
            resolve(10, &Timebase::RateHz(0.0)),
            Err(Error::NonPositiveRate(_))
        ));
        assert!(matches!(
            resolve(10, &Timebase::RateHz(-5.0)),
            Err(Error::NonPositiveRate(_))
        ));
    }

    #[test]
    fn timestamp_count_must_match_samples() {
        let result = resolve(5, &Timebase::Timestamps(vec![0.0, 0.1, 0.2]));
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                name: "times",
                expected: 5,
                actual: 3,
            })
        ));
    }

    #[test]
    fn decreasing_timestamps_are_rejected() {
        let result = resolve(3, &Timebase::Timestamps(vec![0.0, 0.2, 0.1]));
        assert!(matches!(result, Err(Error::NonMonotonicTimestamps)));
    }

    #[test]
    fn repeated_timestamps_are_rejected() {
        let result = resolve(3, &Timebase::Timestamps(vec![0.0, 0.1, 0.1]));
        assert!(matches!(result, Err(Error::NonMonotonicTimestamps)));
    }
}
