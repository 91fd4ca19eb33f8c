//! Translation boundary for the external segmentation engines.
//!
//! The NSLR-HMM and REMoDNaV engines report their own class codes. The
//! lookups here map those codes onto [`GazeClass`] so external output can
//! be normalized through the codec exactly like the native algorithms'.

use std::fmt::Display;

use gaze_common::{DiscreteEvents, GazeClass, Real};

use crate::error::{Error, Result};

/// NSLR-HMM integer segment codes.
pub fn nslr_class(code: i64) -> Option<GazeClass> {
    match code {
        1 => Some(GazeClass::Fixation),
        2 => Some(GazeClass::Saccade),
        3 => Some(GazeClass::Pso),
        4 => Some(GazeClass::SmoothPursuit),
        _ => None,
    }
}

/// REMoDNaV string event codes.
pub fn remodnav_class(code: &str) -> Option<GazeClass> {
    match code {
        "FIXA" => Some(GazeClass::Fixation),
        "SACC" => Some(GazeClass::Saccade),
        "ISAC" => Some(GazeClass::SaccadeIsi),
        "PURS" => Some(GazeClass::SmoothPursuit),
        "HPSO" => Some(GazeClass::HighVelocityPso),
        "LPSO" => Some(GazeClass::LowVelocityPso),
        "IHPS" => Some(GazeClass::HighVelocityPsoIsi),
        "ILPS" => Some(GazeClass::LowVelocityPsoIsi),
        _ => None,
    }
}

/// Assembles an external engine's `(start_time, code)` pairs into the
/// common discrete representation.
///
/// Unknown codes are rejected rather than dropped, so a mistranslated
/// event list never silently loses segments.
pub fn discrete_from_codes<C, F>(
    times: &[Real],
    codes: &[C],
    lookup: F,
) -> Result<DiscreteEvents<GazeClass>>
where
    C: Display,
    F: Fn(&C) -> Option<GazeClass>,
{
    if codes.len() != times.len() {
        return Err(Error::LengthMismatch {
            name: "codes",
            expected: times.len(),
            actual: codes.len(),
        });
    }
    let values = codes
        .iter()
        .map(|code| lookup(code).ok_or_else(|| Error::UnknownClassCode(code.to_string())))
        .collect::<Result<Vec<_>>>()?;

    Ok(DiscreteEvents::new(times.to_vec(), values))
}
