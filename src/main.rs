use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{ArgGroup, Parser, Subcommand};

mod attendance;
mod cgpa;
mod curriculum;
mod grades;
mod models;
mod report;
mod sgpa;
mod store;

use models::{AttendanceInput, CgpaInput, Direction, StatusTier};

#[derive(Parser)]
#[command(name = "semester-planner")]
#[command(about = "Attendance, SGPA and CGPA goal planner for university semesters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project attendance against a target percentage
    Attendance {
        #[arg(long)]
        total: u32,
        #[arg(long)]
        attended: u32,
        #[arg(long, default_value_t = 75.0)]
        desired: f64,
    },
    /// Compute a semester SGPA from a subject sheet CSV
    Sgpa {
        #[arg(long)]
        csv: PathBuf,
        /// Append the result to a profile (created if missing)
        #[arg(long)]
        profile: Option<PathBuf>,
        #[arg(long, default_value_t = 8)]
        semesters: u32,
    },
    /// Compute the cumulative CGPA and an optional goal projection
    #[command(group(
        ArgGroup::new("source")
            .args(["sgpa", "profile"])
            .required(true)
            .multiple(false)
    ))]
    Cgpa {
        /// Completed semester SGPAs, one per flag, in order
        #[arg(long)]
        sgpa: Vec<f64>,
        #[arg(long)]
        profile: Option<PathBuf>,
        #[arg(long, default_value_t = 8)]
        semesters: u32,
        #[arg(long)]
        goal: Option<f64>,
    },
    /// Write a curriculum template CSV to fill grades into
    Template {
        #[arg(long)]
        program: String,
        #[arg(long)]
        semester: u32,
        #[arg(long, default_value = "subjects.csv")]
        out: PathBuf,
    },
    /// Generate a markdown progress report from a saved profile
    Report {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        goal: Option<f64>,
        /// Re-project against a different program length than the saved one
        #[arg(long)]
        semesters: Option<u32>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Attendance {
            total,
            attended,
            desired,
        } => {
            let result = attendance::project(&AttendanceInput {
                total_classes: total,
                attended_classes: attended,
                desired_percentage: desired,
            })?;

            println!(
                "Current attendance: {:.2}% ({attended}/{total})",
                result.current_percentage
            );
            match result.direction {
                Direction::Surplus => println!(
                    "You can skip up to {} more classes and stay at or above {desired}%.",
                    result.count
                ),
                Direction::Deficit => println!(
                    "Attend the next {} classes without fail to reach {desired}%.",
                    result.count
                ),
            }
            match result.status {
                StatusTier::Good => println!("Status: on track."),
                StatusTier::Warning => println!("Status: meeting the target, but with little room."),
                StatusTier::Danger => println!("Status: below target."),
            }
        }
        Commands::Sgpa {
            csv,
            profile,
            semesters,
        } => {
            let subjects = store::read_subjects(&csv)?;
            let result = sgpa::compute_sgpa(&subjects)?;
            println!("SGPA: {result:.2} (from {})", csv.display());

            if let Some(path) = profile {
                let mut profile = store::load_or_new_profile(&path, semesters)?;
                profile.record_sgpa(result);
                store::save_profile(&path, &profile)?;
                println!(
                    "Recorded as semester {} in {}.",
                    profile.completed_sgpas.len(),
                    path.display()
                );
            }
        }
        Commands::Cgpa {
            sgpa,
            profile,
            semesters,
            goal,
        } => {
            let (completed_sgpas, total_semesters) = match profile {
                Some(path) => {
                    let profile = store::load_profile(&path)?;
                    (profile.completed_sgpas, profile.total_semesters)
                }
                None => (sgpa, semesters),
            };

            let result = cgpa::compute_cgpa(&CgpaInput {
                completed_sgpas,
                total_semesters,
                goal_cgpa: goal,
            })?;

            println!("Current CGPA: {:.2}", result.current_cgpa);
            if let Some(required) = result.required_future_avg_sgpa {
                println!(
                    "Required average SGPA over the remaining semesters: {required:.2}"
                );
                if required > 10.0 {
                    println!("That exceeds the 10-point ceiling; the goal is out of reach.");
                } else if required < 0.0 {
                    println!("The goal is already secured.");
                }
            }
        }
        Commands::Template {
            program,
            semester,
            out,
        } => {
            let subjects = curriculum::template(&program, semester).with_context(|| {
                format!(
                    "no curriculum template for program '{program}' semester {semester} \
                     (known programs: {})",
                    curriculum::known_programs().join(", ")
                )
            })?;
            store::write_subjects(&out, &subjects)?;
            println!(
                "Template with {} subjects written to {}.",
                subjects.len(),
                out.display()
            );
        }
        Commands::Report {
            profile,
            goal,
            semesters,
            out,
        } => {
            let mut profile = store::load_profile(&profile)?;
            if let Some(semesters) = semesters {
                profile.total_semesters = semesters;
            }
            let report = report::build_report(&profile, goal, Utc::now().date_naive());
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
