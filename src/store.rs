use std::path::Path;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Subject;

/// Saved planner state between sessions: the ordered SGPAs of completed
/// semesters plus the program length they count against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub program: Option<String>,
    pub total_semesters: u32,
    pub completed_sgpas: Vec<f64>,
    pub updated_on: NaiveDate,
}

impl Profile {
    pub fn new(total_semesters: u32) -> Self {
        Profile {
            program: None,
            total_semesters,
            completed_sgpas: Vec::new(),
            updated_on: Utc::now().date_naive(),
        }
    }

    pub fn record_sgpa(&mut self, sgpa: f64) {
        self.completed_sgpas.push(sgpa);
        self.updated_on = Utc::now().date_naive();
    }
}

pub fn load_profile(path: &Path) -> anyhow::Result<Profile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let profile = serde_json::from_str(&raw)
        .with_context(|| format!("profile {} is not valid JSON", path.display()))?;
    Ok(profile)
}

/// Loads the profile if the file exists, otherwise starts a fresh one.
pub fn load_or_new_profile(path: &Path, total_semesters: u32) -> anyhow::Result<Profile> {
    if path.exists() {
        load_profile(path)
    } else {
        Ok(Profile::new(total_semesters))
    }
}

pub fn save_profile(path: &Path, profile: &Profile) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, raw)
        .with_context(|| format!("failed to write profile {}", path.display()))?;
    Ok(())
}

/// Reads a semester sheet from a `name,credits,grade` CSV. Blank credits or
/// grade fields are kept as incomplete rows; the SGPA filter skips them.
pub fn read_subjects(path: &Path) -> anyhow::Result<Vec<Subject>> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open subject sheet {}", path.display()))?;
    collect_subjects(reader)
}

fn collect_subjects<R: std::io::Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Subject>> {
    let mut subjects = Vec::new();
    for row in reader.deserialize::<Subject>() {
        subjects.push(row.context("malformed subject row")?);
    }
    Ok(subjects)
}

/// Writes a semester sheet CSV, typically a curriculum template with the
/// grade column left blank for the student to fill in.
pub fn write_subjects(path: &Path, subjects: &[Subject]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create subject sheet {}", path.display()))?;
    for subject in subjects {
        writer.serialize(subject)?;
    }
    writer.flush()?;
    Ok(())
}
