//! I-DT dispersion-threshold classification (Salvucci & Goldberg, 2000).

use gaze_common::{ContinuousEvents, GazeClass, Real};

use super::check_gaze_lengths;
use crate::error::{Error, Result};
use crate::timebase::{Timebase, resolve};

/// Spatial spread accumulator over a sample window.
///
/// Extending the window keeps running extrema, so the greedy fixation
/// expansion never rescans absorbed samples.
#[derive(Debug, Clone)]
struct DispersionWindow {
    min_x: Real,
    max_x: Real,
    min_y: Real,
    max_y: Real,
}

impl DispersionWindow {
    fn over(x: &[Real], y: &[Real]) -> Self {
        let mut window = Self {
            min_x: Real::INFINITY,
            max_x: Real::NEG_INFINITY,
            min_y: Real::INFINITY,
            max_y: Real::NEG_INFINITY,
        };
        for (&x, &y) in x.iter().zip(y.iter()) {
            window.push(x, y);
        }
        window
    }

    fn push(&mut self, x: Real, y: Real) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Bounding-box width plus height.
    fn dispersion(&self) -> Real {
        (self.max_x - self.min_x) + (self.max_y - self.min_y)
    }
}

/// Labels a span `Fixation` when the spatial spread of a minimum-length
/// window stays within the dispersion threshold, greedily absorbing
/// further samples while it does.
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionClassifier {
    /// Maximum dispersion (x-extent plus y-extent) a window may have and
    /// still count as a fixation, in gaze units.
    pub threshold: Real,
    /// Minimum fixation window length, in seconds.
    pub window_len: Real,
}

impl DispersionClassifier {
    pub fn new(threshold: Real, window_len: Real) -> Self {
        Self {
            threshold,
            window_len,
        }
    }

    /// Classifies each sample as `Fixation` or `Saccade`.
    ///
    /// Every sample starts as `Saccade`; fixations are carved out by the
    /// sliding window. When the signal opens with a fixation the first
    /// emitted ordinal is 1 and ordinal 0 never appears; trailing samples
    /// that never fill a window keep the last state the walk gave them.
    #[tracing::instrument(skip_all, fields(samples = x.len(), num_segments))]
    pub fn classify(
        &self,
        x: &[Real],
        y: &[Real],
        time: &Timebase,
    ) -> Result<ContinuousEvents<GazeClass>> {
        check_gaze_lengths(x, y)?;
        let timebase = resolve(x.len(), time)?;
        let window_samples = (timebase.sfreq * self.window_len) as usize;
        if window_samples == 0 {
            return Err(Error::WindowTooShort(self.window_len));
        }

        let len = x.len();
        let mut indices = vec![0; len];
        let mut labels = vec![GazeClass::Saccade; len];

        let mut i_start = 0;
        let mut i_stop = window_samples;
        let mut segment = 0;

        while i_stop <= len {
            let mut window = DispersionWindow::over(&x[i_start..i_stop], &y[i_start..i_stop]);
            if window.dispersion() <= self.threshold {
                // a fixation: absorb samples for as long as it holds
                segment += 1;
                while window.dispersion() <= self.threshold && i_stop < len {
                    window.push(x[i_stop], y[i_stop]);
                    i_stop += 1;
                }
                for i in i_start..i_stop {
                    labels[i] = GazeClass::Fixation;
                    indices[i] = segment;
                }
                i_start = i_stop;
                i_stop += window_samples;
                segment += 1;
            } else {
                for i in i_start..i_stop {
                    indices[i] = segment;
                }
                i_start += 1;
                i_stop = i_start + window_samples;
            }
        }

        let events = ContinuousEvents::new(indices, labels);
        tracing::Span::current().record("num_segments", events.num_segments());
        Ok(events)
    }
}
