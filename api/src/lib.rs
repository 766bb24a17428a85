pub mod client;
pub mod live;
pub mod quiz;
pub mod scoreboard;
pub mod stats;
pub mod table;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the stats.nba.com wire format
// ---------------------------------------------------------------------------

/// One table row keyed by column header. Null cells map to `""`.
pub type NormalizedRow = HashMap<String, String>;

/// A multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

/// Everything the quiz needs to know about one finished game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFact {
    pub game_id: String,
    pub home: TeamFacts,
    pub away: TeamFacts,
}

/// Per-team facts. `None` means the value could not be resolved from the
/// scoreboard tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFacts {
    pub name: Option<String>,
    pub score: Option<i64>,
    pub points_leader: Option<StatLeader>,
    pub rebounds_leader: Option<StatLeader>,
    pub assists_leader: Option<StatLeader>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLeader {
    pub name: String,
    pub value: i64,
}

impl StatLeader {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self { name: name.into(), value }
    }
}

// ---------------------------------------------------------------------------
// Games, box scores and play-by-play
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Scheduled,
    Live,
    Final,
}

/// One game from the day's scoreboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: String,
    pub status: GameStatus,
    /// `Final`, `Q3 5:12`, `7:30 pm ET`, ...
    pub status_text: String,
    /// Current period for live games, last period for finished ones.
    pub period: Option<u8>,
    pub home: TeamLine,
    pub away: TeamLine,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamLine {
    pub team_id: String,
    pub name: String,
    pub abbrev: String,
    /// `None` before tip-off.
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameBoxScore {
    pub game_id: String,
    pub status_text: String,
    pub home: TeamBox,
    pub away: TeamBox,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamBox {
    pub name: String,
    pub tricode: String,
    pub score: i64,
    /// Points per period, regulation first.
    pub periods: Vec<i64>,
    pub players: Vec<PlayerLine>,
    pub totals: PlayerLine,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerLine {
    pub name: String,
    pub starter: bool,
    pub minutes: String, // "34:12"
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub turnovers: i64,
    pub fouls: i64,
    pub plus_minus: i64,
    pub fg: String,  // "7-12"
    pub fg3: String, // "2-5"
    pub ft: String,
    /// One-decimal percentage, see [`to_display_percentage`].
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Play {
    pub action_number: i64,
    pub period: u8,
    pub clock: String,
    /// Tricode of the team involved, if any.
    pub team: Option<String>,
    pub action_type: String,
    pub description: String,
    pub home_score: u16,
    pub away_score: u16,
}

impl Play {
    /// Period markers and timeouts rather than player actions.
    pub fn is_stoppage(&self) -> bool {
        matches!(self.action_type.as_str(), "period" | "Timeout")
    }
}

/// Convert a 0–1 fraction into a one-decimal percentage: 0.4567 → 45.7.
pub fn to_display_percentage(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}
