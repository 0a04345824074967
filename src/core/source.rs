use crate::core::form::{FrameEntry, GameEntry};
use crate::utils::error::{AnalyticsError, Result};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(AnalyticsError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// One frame per row; rows sharing a `game_id` form a game.
#[derive(Debug, Deserialize)]
struct FrameRow {
    game_id: String,
    date: Option<NaiveDate>,
    frame_number: u32,
    score: Option<i64>,
    is_strike: bool,
    is_spare: bool,
    is_split: bool,
    notes: Option<String>,
}

pub fn parse_games(data: &[u8], format: InputFormat) -> Result<Vec<GameEntry>> {
    match format {
        InputFormat::Json => parse_json(data),
        InputFormat::Csv => parse_csv(data),
    }
}

fn parse_json(data: &[u8]) -> Result<Vec<GameEntry>> {
    let entries: Vec<GameEntry> = serde_json::from_slice(data)?;
    tracing::debug!("Parsed {} game entries from JSON", entries.len());
    Ok(entries)
}

fn parse_csv(data: &[u8]) -> Result<Vec<GameEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut games: Vec<(GameEntry, Vec<FrameEntry>)> = Vec::new();
    for row in reader.deserialize::<FrameRow>() {
        let row = row?;
        let index = match games
            .iter()
            .position(|(g, _)| g.id.as_deref() == Some(row.game_id.as_str()))
        {
            Some(index) => index,
            None => {
                games.push((
                    GameEntry {
                        id: Some(row.game_id.clone()),
                        ..Default::default()
                    },
                    Vec::new(),
                ));
                games.len() - 1
            }
        };

        let (game, frames) = &mut games[index];
        match (game.date, row.date) {
            (Some(seen), Some(date)) if seen != date => {
                return Err(AnalyticsError::InvalidGame {
                    game: row.game_id,
                    reason: format!(
                        "frame {} is dated {} but earlier frames are dated {}",
                        row.frame_number, date, seen
                    ),
                });
            }
            (None, date) => game.date = date,
            _ => {}
        }
        frames.push(FrameEntry {
            frame_number: Some(row.frame_number),
            score: row.score,
            is_strike: row.is_strike,
            is_spare: row.is_spare,
            is_split: row.is_split,
            notes: row.notes.filter(|n| !n.is_empty()),
        });
    }

    let entries: Vec<GameEntry> = games
        .into_iter()
        .map(|(mut game, mut frames)| {
            frames.sort_by_key(|f| f.frame_number);
            game.frames = frames;
            game
        })
        .collect();
    tracing::debug!("Parsed {} game entries from CSV", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_extension("CSV").unwrap(), InputFormat::Csv);
        assert_eq!(InputFormat::from_extension("json").unwrap(), InputFormat::Json);
        assert!(InputFormat::from_extension("xml").is_err());
    }

    #[test]
    fn test_parse_json_entries() {
        let data = br#"[
            {"id": "g1", "date": "2024-02-01", "frames": [{"score": 10, "is_strike": true}]},
            {"date": "2024-02-02", "notes": "practice"}
        ]"#;
        let entries = parse_games(data, InputFormat::Json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].frames[0].score, Some(10));
        assert!(entries[0].frames[0].is_strike);
        assert!(entries[1].id.is_none());
        assert!(entries[1].frames.is_empty());
    }

    #[test]
    fn test_parse_csv_groups_rows_by_game() {
        let data = b"game_id,date,frame_number,score,is_strike,is_spare,is_split,notes
g2,2024-03-02,2,7,false,false,false,
g1,2024-03-01,1,10,true,false,false,opening strike
g2,2024-03-02,1,12,false,true,false,
g1,2024-03-01,2,,false,false,true,
";
        let entries = parse_games(data, InputFormat::Csv).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id.as_deref(), Some("g2"));
        assert_eq!(entries[0].frames[0].frame_number, Some(1));
        assert_eq!(entries[0].frames[0].score, Some(12));
        assert_eq!(entries[1].frames[0].notes.as_deref(), Some("opening strike"));
        assert_eq!(entries[1].frames[1].score, None);
        assert!(entries[1].frames[1].is_split);
    }

    #[test]
    fn test_parse_csv_rejects_bad_flags() {
        let data = b"game_id,date,frame_number,score,is_strike,is_spare,is_split,notes
g1,2024-03-01,1,10,maybe,false,false,
";
        assert!(matches!(
            parse_games(data, InputFormat::Csv),
            Err(AnalyticsError::CsvError(_))
        ));
    }

    #[test]
    fn test_parse_csv_rejects_conflicting_dates() {
        let data = b"game_id,date,frame_number,score,is_strike,is_spare,is_split,notes
g1,2024-03-01,1,7,false,false,false,
g1,2024-03-02,2,8,false,false,false,
";
        match parse_games(data, InputFormat::Csv) {
            Err(AnalyticsError::InvalidGame { game, reason }) => {
                assert_eq!(game, "g1");
                assert!(reason.contains("2024-03-02"));
                assert!(reason.contains("2024-03-01"));
            }
            other => panic!("expected InvalidGame, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_blank_date_takes_game_date() {
        let data = b"game_id,date,frame_number,score,is_strike,is_spare,is_split,notes
g1,,1,7,false,false,false,
g1,2024-03-01,2,8,false,false,false,
g1,,3,9,false,false,false,
";
        let entries = parse_games(data, InputFormat::Csv).unwrap();
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
