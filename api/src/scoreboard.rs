//! Scoreboard tables joined into per-game summaries and quiz facts.

use crate::quiz;
use crate::stats::StatsResponse;
use crate::table::{decode, field, int_field};
use crate::{
    GameStatus, GameSummary, NormalizedRow, Question, QuizFact, StatLeader, TeamFacts, TeamLine,
};
use rand::Rng;

pub const GAME_HEADER: &str = "GameHeader";
pub const LINE_SCORE: &str = "LineScore";
pub const TEAM_LEADERS: &str = "TeamLeaders";

/// `GAME_STATUS_ID` of a game that has ended.
const STATUS_FINAL: &str = "3";
const STATUS_LIVE: &str = "2";

/// The three scoreboardv2 tables the quiz draws on.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    pub game_headers: Vec<NormalizedRow>,
    pub line_scores: Vec<NormalizedRow>,
    pub team_leaders: Vec<NormalizedRow>,
}

impl Scoreboard {
    pub fn from_response(response: &StatsResponse) -> Self {
        let sets: Vec<_> = response.sets().cloned().collect();
        Self {
            game_headers: decode(&sets, Some(GAME_HEADER)),
            line_scores: decode(&sets, Some(LINE_SCORE)),
            team_leaders: decode(&sets, Some(TEAM_LEADERS)),
        }
    }

    /// Header rows of games that have finished.
    pub fn finished_games(&self) -> impl Iterator<Item = &NormalizedRow> {
        self.game_headers
            .iter()
            .filter(|g| field(g, "GAME_STATUS_ID") == Some(STATUS_FINAL))
    }

    /// Every game of the day in header order, with line score names and
    /// points. Teams missing from `LineScore` keep only their id.
    pub fn games(&self) -> Vec<GameSummary> {
        self.game_headers
            .iter()
            .map(|header| {
                let game_id = field(header, "GAME_ID").unwrap_or_default();
                GameSummary {
                    game_id: game_id.to_owned(),
                    status: parse_status(field(header, "GAME_STATUS_ID")),
                    status_text: field(header, "GAME_STATUS_TEXT")
                        .unwrap_or_default()
                        .trim()
                        .to_owned(),
                    period: int_field(header, "LIVE_PERIOD")
                        .and_then(|p| u8::try_from(p).ok())
                        .filter(|p| *p > 0),
                    home: self.team_line(game_id, field(header, "HOME_TEAM_ID")),
                    away: self.team_line(game_id, field(header, "VISITOR_TEAM_ID")),
                }
            })
            .collect()
    }

    /// Join one game header with its line scores and team leaders.
    /// Whatever cannot be found is left as `None`.
    pub fn quiz_fact(&self, game_header: &NormalizedRow) -> QuizFact {
        let game_id = field(game_header, "GAME_ID").unwrap_or_default();
        QuizFact {
            game_id: game_id.to_owned(),
            home: self.team_facts(game_id, field(game_header, "HOME_TEAM_ID")),
            away: self.team_facts(game_id, field(game_header, "VISITOR_TEAM_ID")),
        }
    }

    /// Facts for every finished game, in header order.
    pub fn quiz_facts(&self) -> Vec<QuizFact> {
        self.finished_games().map(|g| self.quiz_fact(g)).collect()
    }

    /// The day's quiz over every finished game.
    pub fn daily_quiz<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        quiz::daily_quiz(&self.quiz_facts(), rng)
    }

    fn team_line(&self, game_id: &str, team_id: Option<&str>) -> TeamLine {
        let team_id = team_id.unwrap_or_default();
        let line = find_team_row(&self.line_scores, game_id, team_id);
        let text = |key: &str| line.and_then(|r| field(r, key)).unwrap_or_default().to_owned();
        TeamLine {
            team_id: team_id.to_owned(),
            name: text("TEAM_NAME"),
            abbrev: text("TEAM_ABBREVIATION"),
            score: line.and_then(|r| int_field(r, "PTS")),
        }
    }

    fn team_facts(&self, game_id: &str, team_id: Option<&str>) -> TeamFacts {
        let Some(team_id) = team_id.filter(|_| !game_id.is_empty()) else {
            return TeamFacts::default();
        };
        let line = find_team_row(&self.line_scores, game_id, team_id);
        let leaders = find_team_row(&self.team_leaders, game_id, team_id);
        TeamFacts {
            name: line.and_then(|r| field(r, "TEAM_NAME")).map(str::to_owned),
            score: line.and_then(|r| int_field(r, "PTS")),
            points_leader: leaders.and_then(|r| leader(r, "PTS_PLAYER_NAME", "PTS")),
            rebounds_leader: leaders.and_then(|r| leader(r, "REB_PLAYER_NAME", "REB")),
            assists_leader: leaders.and_then(|r| leader(r, "AST_PLAYER_NAME", "AST")),
        }
    }
}

fn parse_status(status_id: Option<&str>) -> GameStatus {
    match status_id {
        Some(STATUS_FINAL) => GameStatus::Final,
        Some(STATUS_LIVE) => GameStatus::Live,
        _ => GameStatus::Scheduled,
    }
}

fn find_team_row<'a>(
    rows: &'a [NormalizedRow],
    game_id: &str,
    team_id: &str,
) -> Option<&'a NormalizedRow> {
    rows.iter()
        .find(|r| field(r, "GAME_ID") == Some(game_id) && field(r, "TEAM_ID") == Some(team_id))
}

fn leader(row: &NormalizedRow, name_key: &str, value_key: &str) -> Option<StatLeader> {
    Some(StatLeader::new(field(row, name_key)?, int_field(row, value_key)?))
}
