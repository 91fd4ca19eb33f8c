use crate::Real;

/// A gaze position in the recording's spatial units.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Point) -> Real {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Discrete representation of a segmentation: one entry per event
/// boundary, keyed by the time at which the new event begins.
///
/// `times` and `values` are parallel; entries are ordered by ascending
/// time once normalized through the codec.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DiscreteEvents<V> {
    pub times: Vec<Real>,
    pub values: Vec<V>,
}

impl<V> DiscreteEvents<V> {
    pub fn new(times: Vec<Real>, values: Vec<V>) -> Self {
        Self { times, values }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Real, &V)> {
        self.times.iter().copied().zip(self.values.iter())
    }
}

/// Continuous representation of a segmentation: one entry per input
/// sample, aligned with the recording's time array.
///
/// `indices` holds the event ordinal of each sample and is non-decreasing
/// along time; `values` holds the corresponding label.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ContinuousEvents<V> {
    pub indices: Vec<usize>,
    pub values: Vec<V>,
}

impl<V> ContinuousEvents<V> {
    pub fn new(indices: Vec<usize>, values: Vec<V>) -> Self {
        Self { indices, values }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.indices.iter().copied().zip(self.values.iter())
    }

    /// Number of distinct segments in the labeling.
    pub fn num_segments(&self) -> usize {
        match (self.indices.first(), self.indices.last()) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        }
    }
}

impl<V: PartialEq> ContinuousEvents<V> {
    /// Groups consecutive equal labels into segment ordinals.
    ///
    /// The first sample gets ordinal 0 and the ordinal increments by one
    /// at every label change.
    pub fn from_sample_labels(values: Vec<V>) -> Self {
        let mut indices = Vec::with_capacity(values.len());
        let mut current = 0;
        let mut previous: Option<&V> = None;
        for value in &values {
            if previous.is_some_and(|p| p != value) {
                current += 1;
            }
            indices.push(current);
            previous = Some(value);
        }
        Self { indices, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GazeClass;

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn grouping_increments_at_label_changes() {
        let labels = vec![
            GazeClass::Fixation,
            GazeClass::Fixation,
            GazeClass::Saccade,
            GazeClass::Saccade,
            GazeClass::Fixation,
        ];
        let events = ContinuousEvents::from_sample_labels(labels);
        assert_eq!(events.indices, vec![0, 0, 1, 1, 2]);
        assert_eq!(events.num_segments(), 3);
    }

    #[test]
    fn grouping_of_uniform_labels_is_one_segment() {
        let events = ContinuousEvents::from_sample_labels(vec![GazeClass::Fixation; 7]);
        assert_eq!(events.indices, vec![0; 7]);
        assert_eq!(events.num_segments(), 1);
    }

    #[test]
    fn grouping_of_empty_input_is_empty() {
        let events = ContinuousEvents::<GazeClass>::from_sample_labels(Vec::new());
        assert!(events.is_empty());
        assert_eq!(events.num_segments(), 0);
    }
}
