use crate::models::{CgpaInput, CgpaResult, EngineError};
use crate::sgpa::round2;

/// Cumulative average of completed semester SGPAs, plus the average SGPA the
/// remaining semesters must hit when a goal is supplied. The required value
/// is left unclamped: above 10 the goal is out of reach, below 0 it is
/// already secured, and the caller decides how to present that.
pub fn compute_cgpa(input: &CgpaInput) -> Result<CgpaResult, EngineError> {
    if input.completed_sgpas.is_empty() {
        return Err(EngineError::NoValidSemesters);
    }
    if input
        .completed_sgpas
        .iter()
        .any(|sgpa| !sgpa.is_finite() || *sgpa < 0.0 || *sgpa > 10.0)
    {
        return Err(EngineError::NoValidSemesters);
    }
    if input.total_semesters == 0 {
        return Err(EngineError::InvalidInput(
            "program length must be at least one semester",
        ));
    }
    if input.completed_sgpas.len() as u64 > input.total_semesters as u64 {
        return Err(EngineError::InvalidInput(
            "more completed semesters than the program length",
        ));
    }

    let completed = input.completed_sgpas.len() as u32;
    let sum: f64 = input.completed_sgpas.iter().sum();
    let current_cgpa = round2(sum / completed as f64);

    let required_future_avg_sgpa = match input.goal_cgpa {
        Some(goal) => {
            if !goal.is_finite() || !(0.0..=10.0).contains(&goal) {
                return Err(EngineError::InvalidInput(
                    "goal CGPA must be in range 0-10",
                ));
            }
            if completed >= input.total_semesters {
                return Err(EngineError::ProgramComplete);
            }
            let remaining = (input.total_semesters - completed) as f64;
            Some(round2((goal * input.total_semesters as f64 - sum) / remaining))
        }
        None => None,
    };

    Ok(CgpaResult {
        current_cgpa,
        required_future_avg_sgpa,
    })
}
