use crate::domain::model::{Frame, Game, FRAMES_PER_GAME};
use crate::utils::format::round_to;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECENT_GAMES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAverage {
    pub frame: u32,
    pub average: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkStat {
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkStats {
    pub strikes: MarkStat,
    pub spares: MarkStat,
    pub splits: MarkStat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentGame {
    pub id: String,
    pub date: chrono::NaiveDate,
    pub total_score: i64,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_games: usize,
    pub avg_score: f64,
    pub high_score: i64,
    pub low_score: i64,
    pub frame_averages: Vec<FrameAverage>,
    pub marks: MarkStats,
    pub recent_games: Vec<RecentGame>,
}

fn mark_stat(count: usize, total_frames: usize) -> MarkStat {
    let percentage = if total_frames > 0 {
        round_to(count as f64 / total_frames as f64 * 100.0, 1)
    } else {
        0.0
    };
    MarkStat { count, percentage }
}

fn average(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

pub fn compute(games: &[Game], recent_limit: usize) -> DashboardStats {
    if games.is_empty() {
        return DashboardStats::default();
    }

    let scores: Vec<i64> = games.iter().map(|g| g.total_score).collect();

    let frame_averages = (1..=FRAMES_PER_GAME)
        .map(|frame| {
            let frame_scores: Vec<i64> = games
                .iter()
                .filter_map(|g| g.frame(frame).map(|f| f.score))
                .collect();
            FrameAverage {
                frame,
                average: round_to(average(&frame_scores), 1),
            }
        })
        .collect();

    let all_frames: Vec<&Frame> = games.iter().flat_map(|g| g.frames.iter()).collect();
    let total_frames = all_frames.len();
    let count = |pred: fn(&Frame) -> bool| all_frames.iter().filter(|f| pred(f)).count();
    let marks = MarkStats {
        strikes: mark_stat(count(|f| f.is_strike), total_frames),
        spares: mark_stat(count(|f| f.is_spare), total_frames),
        splits: mark_stat(count(|f| f.is_split), total_frames),
    };

    // Newest first; ties keep input order.
    let mut by_date: Vec<&Game> = games.iter().collect();
    by_date.sort_by(|a, b| b.date.cmp(&a.date));
    let recent_games = by_date
        .into_iter()
        .take(recent_limit)
        .map(|g| RecentGame {
            id: g.id.clone(),
            date: g.date,
            total_score: g.total_score,
        })
        .collect();

    DashboardStats {
        total_games: games.len(),
        avg_score: round_to(average(&scores), 1),
        high_score: scores.iter().copied().max().unwrap_or_default(),
        low_score: scores.iter().copied().min().unwrap_or_default(),
        frame_averages,
        marks,
        recent_games,
    }
}
