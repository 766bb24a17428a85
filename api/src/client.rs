use crate::live::{
    BoxScoreResponse, LiveGame, LivePlayer, LiveStatistics, LiveTeam, PlayAction,
    PlayByPlayResponse,
};
use crate::stats::StatsResponse;
use crate::{GameBoxScore, Play, PlayerLine, TeamBox, to_display_percentage};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use log::debug;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const STATS_BASE: &str = "https://stats.nba.com/stats";
const LIVE_BASE: &str = "https://cdn.nba.com/static/json/liveData";
const STATS_REFERER: &str = "https://stats.nba.com/";
// stats.nba.com drops requests that don't look like a browser.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:72.0) Gecko/20100101 Firefox/72.0";

/// Season rollover: games before July belong to the season that started the
/// previous autumn.
const SEASON_START_MONTH: u32 = 7;

/// Client for the stats.nba.com tabular endpoints.
#[derive(Debug, Clone)]
pub struct StatsApi {
    client: Client,
    base_url: String,
    live_base_url: String,
    timeout: Duration,
}

impl Default for StatsApi {
    fn default() -> Self {
        Self::with_base_urls(STATS_BASE, LIVE_BASE)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
            ApiError::NotFound(_) => None,
        }
    }
}

impl StatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point both the stats and the live feeds at one host, e.g. a mock
    /// server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self::with_base_urls(base_url.clone(), base_url)
    }

    pub fn with_base_urls(base_url: impl Into<String>, live_base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static(STATS_REFERER));
        Self {
            client: Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                .default_headers(headers)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            live_base_url: live_base_url.into().trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Games, line scores and team leaders for one day.
    pub async fn fetch_scoreboard(&self, date: NaiveDate) -> ApiResult<StatsResponse> {
        let day = date.format("%Y-%m-%d");
        self.get(&format!("scoreboardv2?DayOffset=0&GameDate={day}&LeagueID=00"))
            .await
    }

    /// Regular season standings. `season` is a label such as `2023-24`.
    pub async fn fetch_standings(&self, season: &str) -> ApiResult<StatsResponse> {
        self.get(&format!(
            "leaguestandingsv3?LeagueID=00&Season={season}&SeasonType=Regular+Season"
        ))
        .await
    }

    pub async fn fetch_player_stats(&self, player_id: &str) -> ApiResult<StatsResponse> {
        self.get(&format!("playercareerstats?PerMode=Totals&PlayerID={player_id}"))
            .await
    }

    pub async fn fetch_player_awards(&self, player_id: &str) -> ApiResult<StatsResponse> {
        self.get(&format!("playerawards?PlayerID={player_id}")).await
    }

    pub async fn fetch_player_info(&self, player_id: &str) -> ApiResult<StatsResponse> {
        self.get(&format!("commonplayerinfo?PlayerID={player_id}")).await
    }

    pub async fn fetch_all_players(&self, season: &str) -> ApiResult<StatsResponse> {
        self.get(&format!(
            "commonallplayers?IsOnlyCurrentSeason=1&LeagueID=00&Season={season}"
        ))
        .await
    }

    pub async fn fetch_team_details(&self, team_id: &str) -> ApiResult<StatsResponse> {
        self.get(&format!("teamdetails?TeamID={team_id}")).await
    }

    pub async fn fetch_franchise_leaders(&self, team_id: &str) -> ApiResult<StatsResponse> {
        self.get(&format!("franchiseleaders?TeamID={team_id}")).await
    }

    /// Career top-10 grids across every statistical category.
    pub async fn fetch_all_time_leaders(&self) -> ApiResult<StatsResponse> {
        self.get("alltimeleadersgrids?LeagueID=00&PerMode=Totals&SeasonType=Regular+Season&TopX=10")
            .await
    }

    /// League leaders for one stat category (`PTS`, `REB`, `AST`, ...) in the
    /// season starting in `start_year`.
    pub async fn fetch_season_leaders(
        &self,
        stat: &str,
        start_year: i32,
    ) -> ApiResult<StatsResponse> {
        let season = season_label(start_year);
        self.get(&format!(
            "leagueleaders?LeagueID=00&PerMode=Totals&Scope=S&Season={season}&SeasonType=Regular+Season&StatCategory={stat}"
        ))
        .await
    }

    /// Player and team box score of one game. `None` until the game has
    /// tipped off; the feed answers 403 before that.
    pub async fn fetch_box_score(&self, game_id: &str) -> ApiResult<Option<GameBoxScore>> {
        let url = format!("{}/boxscore/boxscore_{game_id}.json", self.live_base_url);
        let raw: BoxScoreResponse = self.get_url(&url).await?;
        Ok(raw.game.map(map_box_score))
    }

    /// Every action from the first period through `end_period`.
    pub async fn fetch_play_by_play(&self, game_id: &str, end_period: u8) -> ApiResult<Vec<Play>> {
        let url = format!(
            "{}/playbyplayv3?EndPeriod={end_period}&GameID={game_id}&StartPeriod=1",
            self.base_url
        );
        let raw: PlayByPlayResponse = self.get_url(&url).await?;
        Ok(map_plays(raw.game.and_then(|g| g.actions).unwrap_or_default()))
    }

    /// Read a saved stats payload from disk instead of the network.
    pub fn load_snapshot(path: impl AsRef<Path>) -> ApiResult<StatsResponse> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiError::NotFound(format!("could not read {}: {e}", path.display())))?;
        serde_json::from_str(&content).map_err(|e| {
            ApiError::NotFound(format!("invalid stats json at {}: {e}", path.display()))
        })
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.get_url(&format!("{}/{endpoint}", self.base_url)).await
    }

    async fn get_url<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    debug!("{url} returned {:?}, treating as empty", e.status());
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

fn map_box_score(game: LiveGame) -> GameBoxScore {
    GameBoxScore {
        game_id: game.game_id.unwrap_or_default(),
        status_text: game.game_status_text.unwrap_or_default().trim().to_owned(),
        home: game.home_team.map(map_team_box).unwrap_or_default(),
        away: game.away_team.map(map_team_box).unwrap_or_default(),
    }
}

fn map_team_box(team: LiveTeam) -> TeamBox {
    let name = match (team.team_city, team.team_name) {
        (Some(city), Some(name)) => format!("{city} {name}"),
        (city, name) => name.or(city).unwrap_or_default(),
    };
    let players = team
        .players
        .unwrap_or_default()
        .into_iter()
        .filter(|p| p.played.as_deref() == Some("1"))
        .map(map_player_line)
        .collect();
    let mut periods: Vec<_> = team.periods.unwrap_or_default();
    periods.sort_by_key(|p| p.period);

    TeamBox {
        name,
        tricode: team.team_tricode.unwrap_or_default(),
        score: team.score.unwrap_or_default(),
        periods: periods.into_iter().map(|p| p.score.unwrap_or_default()).collect(),
        players,
        totals: stat_line("TOTALS".into(), false, &team.statistics.unwrap_or_default()),
    }
}

fn map_player_line(player: LivePlayer) -> PlayerLine {
    stat_line(
        player.name.unwrap_or_default(),
        player.starter.as_deref() == Some("1"),
        &player.statistics.unwrap_or_default(),
    )
}

fn stat_line(name: String, starter: bool, stats: &LiveStatistics) -> PlayerLine {
    let n = |v: Option<i64>| v.unwrap_or_default();
    let made = |m: Option<i64>, a: Option<i64>| format!("{}-{}", n(m), n(a));
    let pct = |v: Option<f64>| to_display_percentage(v.unwrap_or_default());

    PlayerLine {
        name,
        starter,
        minutes: stats.minutes.as_deref().map(clock_display).unwrap_or_default(),
        points: n(stats.points),
        rebounds: n(stats.rebounds_total),
        assists: n(stats.assists),
        steals: n(stats.steals),
        blocks: n(stats.blocks),
        turnovers: n(stats.turnovers),
        fouls: n(stats.fouls_personal),
        plus_minus: stats.plus_minus_points.unwrap_or_default().round() as i64,
        fg: made(stats.field_goals_made, stats.field_goals_attempted),
        fg3: made(stats.three_pointers_made, stats.three_pointers_attempted),
        ft: made(stats.free_throws_made, stats.free_throws_attempted),
        fg_pct: pct(stats.field_goals_percentage),
        fg3_pct: pct(stats.three_pointers_percentage),
        ft_pct: pct(stats.free_throws_percentage),
    }
}

/// Plays in feed order. Actions that leave the score blank keep the last
/// known score.
fn map_plays(actions: Vec<PlayAction>) -> Vec<Play> {
    let (mut home, mut away) = (0u16, 0u16);
    actions
        .into_iter()
        .map(|a| {
            if let Some(score) = a.score_home.as_deref().and_then(|s| s.parse().ok()) {
                home = score;
            }
            if let Some(score) = a.score_away.as_deref().and_then(|s| s.parse().ok()) {
                away = score;
            }
            Play {
                action_number: a.action_number.unwrap_or_default(),
                period: a.period.unwrap_or_default(),
                clock: a.clock.as_deref().map(clock_display).unwrap_or_default(),
                team: a.team_tricode.filter(|t| !t.is_empty()),
                action_type: a.action_type.unwrap_or_default(),
                description: a.description.unwrap_or_default(),
                home_score: home,
                away_score: away,
            }
        })
        .collect()
}

/// `PT11M41.00S` → `11:41`. Anything else is returned unchanged.
pub fn clock_display(clock: &str) -> String {
    let parsed = clock
        .strip_prefix("PT")
        .and_then(|rest| rest.split_once('M'))
        .and_then(|(minutes, seconds)| {
            let seconds = seconds.trim_end_matches('S');
            let whole = seconds.split('.').next().unwrap_or(seconds);
            Some((minutes.parse::<u32>().ok()?, whole.parse::<u32>().ok()?))
        });
    match parsed {
        Some((minutes, seconds)) => format!("{minutes}:{seconds:02}"),
        None => clock.to_owned(),
    }
}

/// First calendar year of the season that `date` falls in.
pub fn season_start_year(date: NaiveDate) -> i32 {
    if date.month() < SEASON_START_MONTH {
        date.year() - 1
    } else {
        date.year()
    }
}

/// `2023` → `"2023-24"`.
pub fn season_label(start_year: i32) -> String {
    format!("{start_year}-{:02}", (start_year + 1).rem_euclid(100))
}

/// Season label for the local date of `now`.
pub fn current_season<Tz: TimeZone>(now: DateTime<Tz>) -> String {
    season_label(season_start_year(now.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockito::Matcher;

    const STANDINGS_JSON: &str = r#"{
        "resource": "leaguestandings",
        "resultSets": [{
            "name": "Standings",
            "headers": ["TeamID", "TeamName", "WINS", "LOSSES", "WinPCT"],
            "rowSet": [
                [1610612738, "Celtics", 64, 18, 0.78],
                [1610612752, "Knicks", 50, 32, 0.61]
            ]
        }]
    }"#;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn season_starts_previous_year_before_july() {
        assert_eq!(season_start_year(date(2024, 1, 15)), 2023);
        assert_eq!(season_start_year(date(2024, 6, 30)), 2023);
    }

    #[test]
    fn season_starts_this_year_from_july() {
        assert_eq!(season_start_year(date(2024, 7, 1)), 2024);
        assert_eq!(season_start_year(date(2024, 12, 25)), 2024);
    }

    #[test]
    fn season_labels() {
        assert_eq!(season_label(2023), "2023-24");
        assert_eq!(season_label(1999), "1999-00");
        assert_eq!(season_label(2009), "2009-10");
    }

    #[test]
    fn current_season_uses_the_date() {
        let now = Utc.with_ymd_and_hms(2026, 2, 24, 12, 0, 0).unwrap();
        assert_eq!(current_season(now), "2025-26");
    }

    #[test]
    fn snapshot_read_failure_is_not_found() {
        let err = StatsApi::load_snapshot("/nonexistent/scoreboard.json").unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn standings_are_fetched_with_browser_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/leaguestandingsv3")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Season".into(), "2023-24".into()),
                Matcher::UrlEncoded("LeagueID".into(), "00".into()),
            ]))
            .match_header("referer", STATS_REFERER)
            .match_header("user-agent", BROWSER_USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STANDINGS_JSON)
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let response = api.fetch_standings("2023-24").await.unwrap();
        mock.assert_async().await;

        let rows = crate::table::decode(&response.into_sets(), Some("Standings"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["TeamName"], "Celtics");
        assert_eq!(rows[1]["WinPCT"], "0.61");
    }

    #[tokio::test]
    async fn scoreboard_query_uses_padded_date() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/scoreboardv2")
            .match_query(Matcher::UrlEncoded("GameDate".into(), "2024-01-05".into()))
            .with_status(200)
            .with_body(r#"{"resultSets": []}"#)
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let response = api.fetch_scoreboard(date(2024, 1, 5)).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response.sets().count(), 0);
    }

    #[tokio::test]
    async fn client_errors_read_as_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/playerawards")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let response = api.fetch_player_awards("2544").await.unwrap();
        assert_eq!(response.sets().count(), 0);
    }

    #[tokio::test]
    async fn server_errors_are_api_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/teamdetails")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let err = api.fetch_team_details("1610612747").await.unwrap_err();
        assert!(matches!(err, ApiError::Api(_, _)), "got {err}");
    }

    #[tokio::test]
    async fn malformed_body_is_a_parsing_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/alltimeleadersgrids")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"resultSets": [{"name": "PTSLeaders", "headers": ["X"], "rowSet": [[true]]}]}"#)
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let err = api.fetch_all_time_leaders().await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing(_, _)), "got {err}");
    }

    const BOX_SCORE_JSON: &str = r#"{
        "meta": {"version": 1, "code": 200},
        "game": {
            "gameId": "0022300551",
            "gameStatus": 3,
            "gameStatusText": "Final ",
            "period": 4,
            "homeTeam": {
                "teamId": 1610612747, "teamName": "Lakers", "teamCity": "Los Angeles",
                "teamTricode": "LAL", "score": 110,
                "periods": [
                    {"period": 2, "periodType": "REGULAR", "score": 30},
                    {"period": 1, "periodType": "REGULAR", "score": 25},
                    {"period": 3, "periodType": "REGULAR", "score": 28},
                    {"period": 4, "periodType": "REGULAR", "score": 27}
                ],
                "players": [
                    {"personId": 203076, "name": "Anthony Davis", "starter": "1", "played": "1",
                     "statistics": {"minutes": "PT36M05.00S", "points": 31, "reboundsTotal": 14,
                        "assists": 3, "steals": 1, "blocks": 2, "turnovers": 2, "foulsPersonal": 3,
                        "plusMinusPoints": 6.0, "fieldGoalsMade": 12, "fieldGoalsAttempted": 20,
                        "fieldGoalsPercentage": 0.6, "threePointersMade": 0, "threePointersAttempted": 1,
                        "threePointersPercentage": 0.0, "freeThrowsMade": 7, "freeThrowsAttempted": 9,
                        "freeThrowsPercentage": 0.777777777777778}},
                    {"personId": 1630559, "name": "Austin Reaves", "starter": "0", "played": "0",
                     "statistics": {"minutes": "", "points": 0}}
                ],
                "statistics": {"minutes": "PT240M00.00S", "points": 110, "reboundsTotal": 45,
                    "assists": 27, "fieldGoalsMade": 41, "fieldGoalsAttempted": 84,
                    "fieldGoalsPercentage": 0.488095238095238}
            },
            "awayTeam": {
                "teamId": 1610612738, "teamName": "Celtics", "teamCity": "Boston",
                "teamTricode": "BOS", "score": 108, "periods": [], "players": []
            }
        }
    }"#;

    #[tokio::test]
    async fn box_score_maps_played_players() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/boxscore/boxscore_0022300551.json")
            .with_status(200)
            .with_body(BOX_SCORE_JSON)
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let box_score = api.fetch_box_score("0022300551").await.unwrap().unwrap();
        mock.assert_async().await;

        assert_eq!(box_score.status_text, "Final");
        let lakers = &box_score.home;
        assert_eq!(lakers.name, "Los Angeles Lakers");
        assert_eq!(lakers.tricode, "LAL");
        assert_eq!(lakers.periods, vec![25, 30, 28, 27]);
        assert_eq!(lakers.players.len(), 1);

        let davis = &lakers.players[0];
        assert!(davis.starter);
        assert_eq!(davis.minutes, "36:05");
        assert_eq!((davis.points, davis.rebounds, davis.plus_minus), (31, 14, 6));
        assert_eq!(davis.fg, "12-20");
        assert_eq!(davis.fg_pct, 60.0);
        assert_eq!(davis.ft_pct, 77.8);
        assert_eq!(lakers.totals.name, "TOTALS");
        assert_eq!(lakers.totals.fg_pct, 48.8);
        assert_eq!(box_score.away.score, 108);
        assert!(box_score.away.players.is_empty());
    }

    #[tokio::test]
    async fn box_score_before_tip_off_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/boxscore/boxscore_0022300552.json")
            .with_status(403)
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        assert_eq!(api.fetch_box_score("0022300552").await.unwrap(), None);
    }

    #[tokio::test]
    async fn play_by_play_carries_the_score_forward() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/playbyplayv3")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("GameID".into(), "0022300551".into()),
                Matcher::UrlEncoded("StartPeriod".into(), "1".into()),
                Matcher::UrlEncoded("EndPeriod".into(), "4".into()),
            ]))
            .match_header("referer", STATS_REFERER)
            .with_status(200)
            .with_body(
                r#"{"meta": {}, "game": {"gameId": "0022300551", "actions": [
                    {"actionNumber": 1, "clock": "PT12M00.00S", "period": 1, "teamTricode": "",
                     "scoreHome": "0", "scoreAway": "0", "description": "Start of 1st Period", "actionType": "period"},
                    {"actionNumber": 4, "clock": "PT11M41.00S", "period": 1, "teamTricode": "LAL",
                     "playerName": "Davis", "scoreHome": "2", "scoreAway": "0",
                     "description": "Davis 2' Driving Layup (2 PTS)", "actionType": "Made Shot"},
                    {"actionNumber": 5, "clock": "PT11M20.50S", "period": 1, "teamTricode": "BOS",
                     "playerName": "Tatum", "scoreHome": "", "scoreAway": "",
                     "description": "MISS Tatum 26' 3PT", "actionType": "Missed Shot"}
                ]}}"#,
            )
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let plays = api.fetch_play_by_play("0022300551", 4).await.unwrap();
        mock.assert_async().await;

        assert_eq!(plays.len(), 3);
        assert!(plays[0].is_stoppage());
        assert_eq!(plays[0].team, None);
        assert_eq!(plays[1].clock, "11:41");
        assert_eq!(plays[1].team.as_deref(), Some("LAL"));
        assert_eq!((plays[1].home_score, plays[1].away_score), (2, 0));
        assert_eq!(plays[2].clock, "11:20");
        assert_eq!((plays[2].home_score, plays[2].away_score), (2, 0));
        assert!(!plays[2].is_stoppage());
    }

    #[test]
    fn clock_formats() {
        assert_eq!(clock_display("PT05M03.00S"), "5:03");
        assert_eq!(clock_display("PT00M00.40S"), "0:00");
        assert_eq!(clock_display("PT240M00.00S"), "240:00");
        assert_eq!(clock_display(""), "");
        assert_eq!(clock_display("5:03"), "5:03");
    }

    #[tokio::test]
    async fn season_leaders_single_result_set() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/leagueleaders")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Season".into(), "2022-23".into()),
                Matcher::UrlEncoded("StatCategory".into(), "AST".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"resultSet": {"name": "LeagueLeaders", "headers": ["RANK", "PLAYER", "AST"], "rowSet": [[1, "James Harden", 741]]}}"#,
            )
            .create_async()
            .await;

        let api = StatsApi::with_base_url(server.url());
        let response = api.fetch_season_leaders("AST", 2022).await.unwrap();
        let rows = crate::table::decode(&response.into_sets(), None);
        assert_eq!(rows[0]["PLAYER"], "James Harden");
        assert_eq!(rows[0]["AST"], "741");
    }
}
