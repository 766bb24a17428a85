/// Box score (cdn.nba.com liveData) and playbyplayv3 raw wire types — serde shapes for the
/// JSON-object feeds that are not laid out as result sets.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Box score  (liveData/boxscore/boxscore_{gameId}.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct BoxScoreResponse {
    pub game: Option<LiveGame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LiveGame {
    #[serde(rename = "gameId")]
    pub game_id: Option<String>,
    #[serde(rename = "gameStatus")]
    pub game_status: Option<i64>,
    #[serde(rename = "gameStatusText")]
    pub game_status_text: Option<String>,
    pub period: Option<u8>,
    #[serde(rename = "homeTeam")]
    pub home_team: Option<LiveTeam>,
    #[serde(rename = "awayTeam")]
    pub away_team: Option<LiveTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LiveTeam {
    #[serde(rename = "teamId")]
    pub team_id: Option<i64>,
    #[serde(rename = "teamName")]
    pub team_name: Option<String>,
    #[serde(rename = "teamCity")]
    pub team_city: Option<String>,
    #[serde(rename = "teamTricode")]
    pub team_tricode: Option<String>,
    pub score: Option<i64>,
    pub periods: Option<Vec<LivePeriod>>,
    pub players: Option<Vec<LivePlayer>>,
    pub statistics: Option<LiveStatistics>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LivePeriod {
    pub period: Option<u8>,
    pub score: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LivePlayer {
    #[serde(rename = "personId")]
    pub person_id: Option<i64>,
    pub name: Option<String>,
    /// `"1"` / `"0"`.
    pub starter: Option<String>,
    pub played: Option<String>,
    pub statistics: Option<LiveStatistics>,
}

/// Shared by players and team totals; teams carry many more keys that are
/// not read here.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiveStatistics {
    pub minutes: Option<String>,
    pub points: Option<i64>,
    pub rebounds_total: Option<i64>,
    pub assists: Option<i64>,
    pub steals: Option<i64>,
    pub blocks: Option<i64>,
    pub turnovers: Option<i64>,
    pub fouls_personal: Option<i64>,
    pub plus_minus_points: Option<f64>,
    pub field_goals_made: Option<i64>,
    pub field_goals_attempted: Option<i64>,
    pub field_goals_percentage: Option<f64>,
    pub three_pointers_made: Option<i64>,
    pub three_pointers_attempted: Option<i64>,
    pub three_pointers_percentage: Option<f64>,
    pub free_throws_made: Option<i64>,
    pub free_throws_attempted: Option<i64>,
    pub free_throws_percentage: Option<f64>,
}

// ---------------------------------------------------------------------------
// Play-by-play  (stats/playbyplayv3)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PlayByPlayResponse {
    pub game: Option<PlayByPlayGame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PlayByPlayGame {
    #[serde(rename = "gameId")]
    pub game_id: Option<String>,
    pub actions: Option<Vec<PlayAction>>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayAction {
    pub action_number: Option<i64>,
    /// ISO-8601 duration, `PT11M41.00S`.
    pub clock: Option<String>,
    pub period: Option<u8>,
    pub team_tricode: Option<String>,
    pub player_name: Option<String>,
    /// Empty on actions that did not change the score.
    pub score_home: Option<String>,
    pub score_away: Option<String>,
    pub description: Option<String>,
    pub action_type: Option<String>,
}
