//! I-VT velocity-threshold classification (Salvucci & Goldberg, 2000).

use gaze_common::{ContinuousEvents, GazeClass, Real};

use super::{check_gaze_lengths, sample_displacements};
use crate::error::Result;
use crate::timebase::{Timebase, resolve};

/// Labels a sample `Saccade` when its displacement from the previous
/// sample exceeds the velocity threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityClassifier {
    /// Velocity above which a sample is classified as a saccade, in
    /// gaze-units per second.
    pub threshold: Real,
}

impl VelocityClassifier {
    pub fn new(threshold: Real) -> Self {
        Self { threshold }
    }

    /// Classifies each sample as `Fixation` or `Saccade` and groups
    /// consecutive equal labels into segments.
    ///
    /// The comparison is strict: a displacement exactly at the
    /// per-sample threshold remains a fixation.
    #[tracing::instrument(skip_all, fields(samples = x.len(), num_segments))]
    pub fn classify(
        &self,
        x: &[Real],
        y: &[Real],
        time: &Timebase,
    ) -> Result<ContinuousEvents<GazeClass>> {
        check_gaze_lengths(x, y)?;
        let timebase = resolve(x.len(), time)?;
        let sample_threshold = self.threshold / timebase.sfreq;

        let labels = sample_displacements(x, y)
            .into_iter()
            .map(|velocity| {
                if velocity > sample_threshold {
                    GazeClass::Saccade
                } else {
                    GazeClass::Fixation
                }
            })
            .collect();

        let events = ContinuousEvents::from_sample_labels(labels);
        tracing::Span::current().record("num_segments", events.num_segments());
        Ok(events)
    }
}
