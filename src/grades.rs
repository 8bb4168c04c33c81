use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Letter grades on the university's 10-point scale. Satisfactory marks a
/// pass/fail audit subject that carries no grade point and is skipped by the
/// SGPA weighting rather than counted as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    O,
    E,
    A,
    B,
    C,
    D,
    F,
    #[serde(alias = "S")]
    Satisfactory,
}

impl Grade {
    /// Grade point for counting grades, `None` for Satisfactory.
    pub fn points(self) -> Option<u32> {
        match self {
            Grade::O => Some(10),
            Grade::E => Some(9),
            Grade::A => Some(8),
            Grade::B => Some(7),
            Grade::C => Some(6),
            Grade::D => Some(5),
            Grade::F => Some(0),
            Grade::Satisfactory => None,
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "O" | "o" => Ok(Grade::O),
            "E" | "e" => Ok(Grade::E),
            "A" | "a" => Ok(Grade::A),
            "B" | "b" => Ok(Grade::B),
            "C" | "c" => Ok(Grade::C),
            "D" | "d" => Ok(Grade::D),
            "F" | "f" => Ok(Grade::F),
            "S" | "s" | "Satisfactory" | "satisfactory" => Ok(Grade::Satisfactory),
            other => Err(format!("unknown grade symbol: {other}")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Grade::O => "O",
            Grade::E => "E",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::Satisfactory => "Satisfactory",
        };
        f.write_str(symbol)
    }
}
