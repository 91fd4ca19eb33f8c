//! Per-segment geometric summaries: where each event starts, where it
//! ends, and how far the gaze travelled between the two.

use gaze_common::{ContinuousEvents, DiscreteEvents, Point, Real};

use crate::codec::{continuous_to_discrete, discrete_to_continuous};
use crate::error::{Error, Result};

/// Start position, end position and straight-line displacement of one
/// event span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMetrics {
    pub start: Point,
    pub end: Point,
    pub distance: Real,
}

/// Computes metrics for each event of a discrete segmentation.
///
/// Each event's span runs from its boundary time to the next boundary
/// (the last span extends to infinity), inclusive on both ends: a sample
/// sitting exactly on a boundary is the previous span's end point and
/// the next span's start point. A span containing no sample yields
/// `None`. The output is aligned with the input event list's order.
pub fn discrete_segment_metrics<V>(
    x: &[Real],
    y: &[Real],
    times: &[Real],
    events: &DiscreteEvents<V>,
) -> Result<Vec<Option<SegmentMetrics>>> {
    check_sample_lengths(x, y, times)?;
    if events.values.len() != events.times.len() {
        return Err(Error::LengthMismatch {
            name: "discrete values",
            expected: events.times.len(),
            actual: events.values.len(),
        });
    }

    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| events.times[a].total_cmp(&events.times[b]));

    let mut metrics = vec![None; events.len()];
    for (position, &event) in order.iter().enumerate() {
        let span_start = events.times[event];
        let span_end = order.get(position + 1).map(|&next| events.times[next]);

        let first = times.partition_point(|&t| t < span_start);
        let beyond = span_end.map_or(times.len(), |end| times.partition_point(|&t| t <= end));

        if first < beyond {
            let start = Point::new(x[first], y[first]);
            let end = Point::new(x[beyond - 1], y[beyond - 1]);
            metrics[event] = Some(SegmentMetrics {
                start,
                end,
                distance: start.distance(&end),
            });
        }
    }

    Ok(metrics)
}

/// Computes metrics for a continuous segmentation and re-expands them to
/// one entry per sample.
///
/// The segmentation is normalized to its discrete form through the
/// codec, summarized per event, and expanded back against the same
/// clock, so every sample carries the metrics of the segment it belongs
/// to.
pub fn continuous_segment_metrics<V: Clone>(
    x: &[Real],
    y: &[Real],
    times: &[Real],
    segmentation: &ContinuousEvents<V>,
) -> Result<ContinuousEvents<Option<SegmentMetrics>>> {
    check_sample_lengths(x, y, times)?;
    if segmentation.indices.len() != times.len() || segmentation.values.len() != times.len() {
        return Err(Error::SegmentationLength {
            expected: times.len(),
            actual: segmentation.indices.len().max(segmentation.values.len()),
        });
    }

    let discrete = continuous_to_discrete(times, segmentation)?;
    let metrics = discrete_segment_metrics(x, y, times, &discrete)?;
    let expanded = discrete_to_continuous(
        times,
        &DiscreteEvents::new(discrete.times, metrics),
    )?;

    Ok(ContinuousEvents {
        indices: expanded.indices,
        values: expanded.values.into_iter().map(Option::flatten).collect(),
    })
}

fn check_sample_lengths(x: &[Real], y: &[Real], times: &[Real]) -> Result<()> {
    if x.len() != times.len() {
        return Err(Error::LengthMismatch {
            name: "x",
            expected: times.len(),
            actual: x.len(),
        });
    }
    if y.len() != times.len() {
        return Err(Error::LengthMismatch {
            name: "y",
            expected: times.len(),
            actual: y.len(),
        });
    }
    Ok(())
}
