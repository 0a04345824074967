use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FRAMES_PER_GAME: u32 = 10;
pub const STRIKE_SCORE: i64 = 10;
pub const MIN_FRAME_SCORE: i64 = 0;
pub const MAX_FRAME_SCORE: i64 = 30;

/// A proposed frame result, built right before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    pub score: i64,
    pub is_strike: bool,
    pub is_spare: bool,
}

impl FrameResult {
    pub fn new(score: i64, is_strike: bool, is_spare: bool) -> Self {
        Self {
            score,
            is_strike,
            is_spare,
        }
    }
}

/// The first rule a frame result breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameViolation {
    StrikeScore,
    SpareScore,
    OutOfBounds,
}

impl FrameViolation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::StrikeScore => "Strike frames must have a score of 10",
            Self::SpareScore => "Spare frames must have a score of at least 10",
            Self::OutOfBounds => "Score must be between 0 and 30",
        }
    }
}

impl fmt::Display for FrameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(FrameViolation),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation.message()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame_number: u32,
    pub score: i64,
    #[serde(default)]
    pub is_strike: bool,
    #[serde(default)]
    pub is_spare: bool,
    #[serde(default)]
    pub is_split: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub date: NaiveDate,
    pub total_score: i64,
    #[serde(default)]
    pub notes: Option<String>,
    pub frames: Vec<Frame>,
}

impl Game {
    pub fn frame(&self, frame_number: u32) -> Option<&Frame> {
        self.frames.iter().find(|f| f.frame_number == frame_number)
    }
}
