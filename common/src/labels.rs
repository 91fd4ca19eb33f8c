use std::fmt::{Display, Formatter, Result};

/// Gaze movement classes shared by all classifiers.
///
/// The native velocity and dispersion algorithms emit only `Fixation` and
/// `Saccade`. The remaining variants cover the classes reported by the
/// external segmentation engines and are produced by the translation
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GazeClass {
    /// Gaze remains nearly stationary.
    Fixation,
    /// Rapid movement between fixation points.
    Saccade,
    /// Saccade within an intersaccadic interval.
    SaccadeIsi,
    /// Gaze smoothly follows a moving target.
    SmoothPursuit,
    /// Post-saccadic oscillation.
    Pso,
    HighVelocityPso,
    LowVelocityPso,
    HighVelocityPsoIsi,
    LowVelocityPsoIsi,
}

impl GazeClass {
    /// Collapses the refined classes onto the basic four:
    /// Fixation, Saccade, Smooth Pursuit and PSO.
    pub fn simplified(self) -> GazeClass {
        match self {
            GazeClass::Fixation => GazeClass::Fixation,
            GazeClass::Saccade | GazeClass::SaccadeIsi => GazeClass::Saccade,
            GazeClass::SmoothPursuit => GazeClass::SmoothPursuit,
            GazeClass::Pso
            | GazeClass::HighVelocityPso
            | GazeClass::LowVelocityPso
            | GazeClass::HighVelocityPsoIsi
            | GazeClass::LowVelocityPsoIsi => GazeClass::Pso,
        }
    }
}

impl Display for GazeClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            GazeClass::Fixation => "Fixation",
            GazeClass::Saccade => "Saccade",
            GazeClass::SaccadeIsi => "Saccade (ISI)",
            GazeClass::SmoothPursuit => "Smooth Pursuit",
            GazeClass::Pso => "PSO",
            GazeClass::HighVelocityPso => "High-Velocity PSO",
            GazeClass::LowVelocityPso => "Low-Velocity PSO",
            GazeClass::HighVelocityPsoIsi => "High-Velocity PSO (ISI)",
            GazeClass::LowVelocityPsoIsi => "Low-Velocity PSO (ISI)",
        };
        f.write_str(name)
    }
}
