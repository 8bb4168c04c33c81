use serde::{Deserialize, Serialize};

use crate::grades::Grade;

/// One row of a semester sheet: name is informational only, credits and grade
/// may still be blank while the student is filling the sheet in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub credits: Option<u32>,
    pub grade: Option<Grade>,
}

#[derive(Debug, Clone, Copy)]
pub struct AttendanceInput {
    pub total_classes: u32,
    pub attended_classes: u32,
    pub desired_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Above target: `count` classes can still be skipped.
    Surplus,
    /// Below target: `count` future classes must all be attended.
    Deficit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Good,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy)]
pub struct AttendanceResult {
    pub current_percentage: f64,
    pub direction: Direction,
    pub count: u32,
    pub status: StatusTier,
}

#[derive(Debug, Clone)]
pub struct CgpaInput {
    pub completed_sgpas: Vec<f64>,
    pub total_semesters: u32,
    pub goal_cgpa: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
pub struct CgpaResult {
    pub current_cgpa: f64,
    /// Present only when a goal was supplied. Not clamped to [0, 10]: above
    /// 10 means the goal is out of reach, below 0 means it is already
    /// secured, and callers must surface that rather than cap it.
    pub required_future_avg_sgpa: Option<f64>,
}

/// Expected-failure kinds for all engine calls. Engines return these instead
/// of panicking on bad input; the binary maps them to messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("no subject has both credits and a counting grade")]
    NoValidSubjects,
    #[error("no completed semester SGPAs in range 0-10")]
    NoValidSemesters,
    #[error("a 100% target cannot be recovered once a class has been missed")]
    Unreachable,
    #[error("all program semesters are complete; nothing left to project")]
    ProgramComplete,
}
