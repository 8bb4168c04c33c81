use std::fmt::Write;

use chrono::NaiveDate;

use crate::cgpa;
use crate::models::{CgpaInput, EngineError};
use crate::store::Profile;

/// Builds a markdown progress report from a saved profile: completed
/// semesters, cumulative standing, and an optional goal projection with the
/// out-of-range readings of the unclamped required SGPA spelled out.
pub fn build_report(profile: &Profile, goal_cgpa: Option<f64>, as_of: NaiveDate) -> String {
    let mut output = String::new();
    let program_label = profile.program.as_deref().unwrap_or("unspecified program");

    let _ = writeln!(output, "# Semester Progress Report");
    let _ = writeln!(
        output,
        "Generated {} for {} ({} of {} semesters completed)",
        as_of,
        program_label,
        profile.completed_sgpas.len(),
        profile.total_semesters
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Completed Semesters");

    if profile.completed_sgpas.is_empty() {
        let _ = writeln!(output, "No semester SGPAs recorded yet.");
    } else {
        for (index, sgpa) in profile.completed_sgpas.iter().enumerate() {
            let _ = writeln!(output, "- Semester {}: SGPA {:.2}", index + 1, sgpa);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Cumulative Standing");

    let outcome = cgpa::compute_cgpa(&CgpaInput {
        completed_sgpas: profile.completed_sgpas.clone(),
        total_semesters: profile.total_semesters,
        goal_cgpa,
    });

    match outcome {
        Ok(result) => {
            let _ = writeln!(output, "Current CGPA: {:.2}", result.current_cgpa);

            if let (Some(goal), Some(required)) = (goal_cgpa, result.required_future_avg_sgpa) {
                let remaining =
                    profile.total_semesters - profile.completed_sgpas.len() as u32;
                let _ = writeln!(output);
                let _ = writeln!(output, "## Goal Projection");
                let _ = writeln!(
                    output,
                    "Reaching a CGPA of {:.2} needs an average SGPA of {:.2} across the remaining {} semesters.",
                    goal, required, remaining
                );
                if required > 10.0 {
                    let _ = writeln!(
                        output,
                        "That is above the 10-point ceiling, so the goal is out of reach within this program length."
                    );
                } else if required < 0.0 {
                    let _ = writeln!(
                        output,
                        "The goal is already secured; any passing performance keeps the average above it."
                    );
                }
            }
        }
        Err(EngineError::NoValidSemesters) => {
            let _ = writeln!(output, "No CGPA available until a semester is recorded.");
        }
        Err(EngineError::ProgramComplete) => {
            let _ = writeln!(
                output,
                "All semesters are complete; the recorded CGPA is final."
            );
        }
        Err(err) => {
            let _ = writeln!(output, "CGPA unavailable: {err}");
        }
    }

    output
}
