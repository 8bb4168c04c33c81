use crate::models::{EngineError, Subject};

/// Credit-weighted grade point average for one semester. Subjects missing
/// credits or a grade, and Satisfactory audit subjects, are left out of both
/// the numerator and the denominator.
pub fn compute_sgpa(subjects: &[Subject]) -> Result<f64, EngineError> {
    let mut total_credits = 0u32;
    let mut total_points = 0u32;

    for subject in subjects {
        let (credits, grade) = match (subject.credits, subject.grade) {
            (Some(credits), Some(grade)) if credits > 0 => (credits, grade),
            _ => continue,
        };
        let Some(points) = grade.points() else {
            continue;
        };
        total_credits += credits;
        total_points += credits * points;
    }

    if total_credits == 0 {
        return Err(EngineError::NoValidSubjects);
    }

    Ok(round2(total_points as f64 / total_credits as f64))
}

/// Round to 2 decimals, halves away from zero. The inner round snaps binary
/// representation noise (8.825 is stored as 8.8249999...) so decimal ties
/// still round away from zero instead of down.
pub(crate) fn round2(value: f64) -> f64 {
    let scaled = (value * 1e8).round() / 1e6;
    scaled.round() / 100.0
}
