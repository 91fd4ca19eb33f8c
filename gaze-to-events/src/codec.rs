//! The discrete/continuous event codec.
//!
//! A segmentation can be stated two equivalent ways: as a discrete list
//! of event boundaries `(time, value)`, or as a continuous per-sample
//! array of `(ordinal, value)` pairs aligned with the recording's time
//! array. Every classifier and every consumer speaks one of these two
//! forms; the two functions here are the canonical mapping between them.

use gaze_common::{ContinuousEvents, DiscreteEvents, Real};

use crate::error::{Error, Result};

/// Expands a discrete event list against a sample clock.
///
/// Events are stable-sorted by time and numbered `1, 2, …` in sorted
/// order. Each sample receives the ordinal and value of the last event
/// whose time is at or before the sample's time; samples before the
/// first event get ordinal 0 and `None`.
///
/// When two events land on the same sample (no sample time falls between
/// them), the later-sorted one wins; the shadowed event is reported with
/// a warning but the overwrite is preserved.
pub fn discrete_to_continuous<V: Clone>(
    times: &[Real],
    events: &DiscreteEvents<V>,
) -> Result<ContinuousEvents<Option<V>>> {
    if events.values.len() != events.times.len() {
        return Err(Error::LengthMismatch {
            name: "discrete values",
            expected: events.times.len(),
            actual: events.values.len(),
        });
    }
    if !times.is_empty() && events.len() == times.len() {
        tracing::warn!(
            "discrete event count equals sample count; the input may already be continuous"
        );
    }

    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| events.times[a].total_cmp(&events.times[b]));
    let sorted_times: Vec<Real> = order.iter().map(|&i| events.times[i]).collect();

    let mut indices = Vec::with_capacity(times.len());
    let mut values = Vec::with_capacity(times.len());
    let mut used = vec![false; sorted_times.len()];
    for &t in times {
        let ordinal = sorted_times.partition_point(|&event_time| event_time <= t);
        indices.push(ordinal);
        if ordinal == 0 {
            values.push(None);
        } else {
            used[ordinal - 1] = true;
            values.push(Some(events.values[order[ordinal - 1]].clone()));
        }
    }

    for (position, used) in used.into_iter().enumerate() {
        if !used {
            tracing::warn!(
                time = sorted_times[position],
                "discrete event does not appear in the continuous output; \
                 a later event on the same sample wins"
            );
        }
    }

    Ok(ContinuousEvents { indices, values })
}

/// Collapses a continuous per-sample labeling into its minimal discrete
/// event list.
///
/// Samples are stable-sorted by ordinal (sample order breaks ties) and
/// walked in that order; an entry is emitted whenever the ordinal
/// strictly increases. The walk starts below the observed minimum, so
/// the first segment is always emitted.
pub fn continuous_to_discrete<V: Clone>(
    times: &[Real],
    events: &ContinuousEvents<V>,
) -> Result<DiscreteEvents<V>> {
    if events.indices.len() != times.len() {
        return Err(Error::LengthMismatch {
            name: "segment indices",
            expected: times.len(),
            actual: events.indices.len(),
        });
    }
    if events.values.len() != times.len() {
        return Err(Error::LengthMismatch {
            name: "segment values",
            expected: times.len(),
            actual: events.values.len(),
        });
    }

    let mut order: Vec<usize> = (0..times.len()).collect();
    order.sort_by_key(|&i| events.indices[i]);

    let mut discrete_times = Vec::new();
    let mut discrete_values = Vec::new();
    let mut current: Option<usize> = None;
    for &i in &order {
        let ordinal = events.indices[i];
        if current.is_none_or(|c| ordinal > c) {
            discrete_times.push(times[i]);
            discrete_values.push(events.values[i].clone());
        }
        current = Some(ordinal);
    }

    Ok(DiscreteEvents {
        times: discrete_times,
        values: discrete_values,
    })
}
