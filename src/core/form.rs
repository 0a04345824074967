//! Submission-level checks for a game entered through the game form.
//!
//! These are stricter than [`crate::core::validator`]: a submitted frame may
//! not be both a strike and a spare, and a game needs all ten frames.

use crate::domain::model::{
    Frame, Game, FRAMES_PER_GAME, MAX_FRAME_SCORE, MIN_FRAME_SCORE, STRIKE_SCORE,
};
use crate::utils::error::{AnalyticsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const RANGE_MESSAGE: &str = "Number must be between 0 and 30.";
pub const STRIKE_AND_SPARE_MESSAGE: &str = "A frame cannot be both a strike and a spare";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameEntry {
    #[serde(default)]
    pub frame_number: Option<u32>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub is_strike: bool,
    #[serde(default)]
    pub is_spare: bool,
    #[serde(default)]
    pub is_split: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FrameEntry {
    pub fn new(score: i64, is_strike: bool, is_spare: bool) -> Self {
        Self {
            score: Some(score),
            is_strike,
            is_spare,
            ..Default::default()
        }
    }

    /// Collects the messages a form would show under the score field.
    ///
    /// A missing score stops validation. Otherwise the range check and the
    /// first failing flag rule are both reported.
    pub fn errors(&self) -> Vec<String> {
        let Some(score) = self.score else {
            return vec![REQUIRED_MESSAGE.to_string()];
        };

        let mut errors = Vec::new();
        if !(MIN_FRAME_SCORE..=MAX_FRAME_SCORE).contains(&score) {
            errors.push(RANGE_MESSAGE.to_string());
        }

        if self.is_strike && score != STRIKE_SCORE {
            errors.push("Strike frames must have a score of 10".to_string());
        } else if self.is_spare && score < STRIKE_SCORE {
            errors.push("Spare frames must have a score of at least 10".to_string());
        } else if self.is_strike && self.is_spare {
            errors.push(STRIKE_AND_SPARE_MESSAGE.to_string());
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub frames: Vec<FrameEntry>,
}

impl GameEntry {
    pub fn validate(&self, label: &str) -> Result<()> {
        if self.date.is_none() {
            return Err(AnalyticsError::InvalidGame {
                game: label.to_string(),
                reason: format!("date: {}", REQUIRED_MESSAGE),
            });
        }

        if self.frames.len() != FRAMES_PER_GAME as usize {
            return Err(AnalyticsError::InvalidGame {
                game: label.to_string(),
                reason: format!(
                    "expected {} frames, found {}",
                    FRAMES_PER_GAME,
                    self.frames.len()
                ),
            });
        }

        for (index, frame) in self.frames.iter().enumerate() {
            let position = index as u32 + 1;
            if let Some(number) = frame.frame_number {
                if number != position {
                    return Err(AnalyticsError::InvalidGame {
                        game: label.to_string(),
                        reason: format!("frame {} is listed in position {}", number, position),
                    });
                }
            }

            let errors = frame.errors();
            if !errors.is_empty() {
                return Err(AnalyticsError::InvalidFrame {
                    game: label.to_string(),
                    frame: position,
                    reason: errors.join("; "),
                });
            }
        }

        Ok(())
    }

    /// Validates the entry and turns it into a stored game.
    ///
    /// `fallback_id` is used when the entry carries no id of its own. The
    /// game total is the plain sum of frame scores.
    pub fn into_game(self, fallback_id: &str) -> Result<Game> {
        let id = self.id.clone().unwrap_or_else(|| fallback_id.to_string());
        self.validate(&id)?;

        let date = self.date.ok_or_else(|| AnalyticsError::InvalidGame {
            game: id.clone(),
            reason: format!("date: {}", REQUIRED_MESSAGE),
        })?;

        let frames: Vec<Frame> = self
            .frames
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Frame {
                frame_number: index as u32 + 1,
                score: entry.score.unwrap_or_default(),
                is_strike: entry.is_strike,
                is_spare: entry.is_spare,
                is_split: entry.is_split,
                notes: entry.notes.filter(|n| !n.trim().is_empty()),
            })
            .collect();

        let total_score = frames.iter().map(|f| f.score).sum();
        tracing::debug!(game = %id, total_score, "game entry accepted");

        Ok(Game {
            id,
            date,
            total_score,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            frames,
        })
    }
}
