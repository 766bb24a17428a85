use crate::state::app_settings::AppSettings;
use crate::state::session::{QuizRecord, QuizSession};
use crate::state::store::{JsonQuizStore, QuizStore};
use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use nba_stats_api::client::{StatsApi, current_season, season_start_year};
use nba_stats_api::scoreboard::Scoreboard;
use nba_stats_api::stats::StatsResponse;
use nba_stats_api::{
    GameBoxScore, GameStatus, GameSummary, NormalizedRow, Play, PlayerLine, Question, TeamBox,
    table, to_display_percentage,
};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Regulation plus six overtimes; the feed ignores periods that were not played.
pub const DEFAULT_END_PERIOD: u8 = 10;

/// Stats tables the `table` command can print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRequest {
    Standings,
    SeasonLeaders { stat: String },
    AllTimeLeaders { set: String },
    AllPlayers,
    PlayerCareer { player_id: String },
    PlayerInfo { player_id: String },
    TeamDetails { team_id: String },
    FranchiseLeaders { team_id: String },
}

impl TableRequest {
    /// The result set to pull out of the response.
    fn result_set(&self) -> &str {
        match self {
            TableRequest::Standings => "Standings",
            TableRequest::SeasonLeaders { .. } => "LeagueLeaders",
            TableRequest::AllTimeLeaders { set } => set.as_str(),
            TableRequest::AllPlayers => "CommonAllPlayers",
            TableRequest::PlayerCareer { .. } => "CareerTotalsRegularSeason",
            TableRequest::PlayerInfo { .. } => "CommonPlayerInfo",
            TableRequest::TeamDetails { .. } => "TeamBackground",
            TableRequest::FranchiseLeaders { .. } => "FranchiseLeaders",
        }
    }
}

pub struct App {
    pub settings: AppSettings,
    api: StatsApi,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings, api: StatsApi::new() }
    }

    #[cfg(test)]
    pub fn with_api(settings: AppSettings, api: StatsApi) -> Self {
        Self { settings, api }
    }

    /// Scoreboard tables for `date`, from the local snapshot when one is
    /// configured.
    pub async fn load_scoreboard(&self, date: NaiveDate) -> anyhow::Result<Scoreboard> {
        let response = match &self.settings.scoreboard_snapshot {
            Some(path) => {
                debug!("using scoreboard snapshot {}", path.display());
                StatsApi::load_snapshot(path)?
            }
            None => self
                .api
                .fetch_scoreboard(date)
                .await
                .with_context(|| format!("loading scoreboard for {date}"))?,
        };
        Ok(Scoreboard::from_response(&response))
    }

    /// Every game on the scoreboard for `date`.
    pub async fn games(&self, date: NaiveDate) -> anyhow::Result<Vec<GameSummary>> {
        Ok(self.load_scoreboard(date).await?.games())
    }

    pub async fn box_score(&self, game_id: &str) -> anyhow::Result<GameBoxScore> {
        match self.api.fetch_box_score(game_id).await? {
            Some(box_score) => Ok(box_score),
            None => bail!("no box score for game {game_id} yet"),
        }
    }

    pub async fn plays(&self, game_id: &str, end_period: u8) -> anyhow::Result<Vec<Play>> {
        let plays = self.api.fetch_play_by_play(game_id, end_period).await?;
        if plays.is_empty() {
            warn!("no plays for game {game_id}");
        }
        Ok(plays)
    }

    pub async fn questions<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> anyhow::Result<Vec<Question>> {
        let scoreboard = self.load_scoreboard(date).await?;
        let questions = scoreboard.daily_quiz(rng);
        if questions.is_empty() {
            warn!("no finished games with complete box scores on {date}");
        }
        Ok(questions)
    }

    pub async fn table(&self, request: &TableRequest) -> anyhow::Result<Vec<NormalizedRow>> {
        let response = self.fetch_table(request).await?;
        let mut rows = table::decode(&response.into_sets(), Some(request.result_set()));
        display_percentages(&mut rows);
        Ok(rows)
    }

    /// Award descriptions for a player, in the order the API lists them.
    pub async fn awards(&self, player_id: &str) -> anyhow::Result<Vec<String>> {
        let response = self.api.fetch_player_awards(player_id).await?;
        Ok(response
            .find("PlayerAwards")
            .map(|set| table::string_column(set, "DESCRIPTION"))
            .unwrap_or_default())
    }

    async fn fetch_table(&self, request: &TableRequest) -> anyhow::Result<StatsResponse> {
        let today = Local::now().date_naive();
        let response = match request {
            TableRequest::Standings => self.api.fetch_standings(&current_season(Local::now())).await?,
            TableRequest::SeasonLeaders { stat } => {
                self.api.fetch_season_leaders(stat, season_start_year(today)).await?
            }
            TableRequest::AllTimeLeaders { .. } => self.api.fetch_all_time_leaders().await?,
            TableRequest::AllPlayers => {
                self.api.fetch_all_players(&current_season(Local::now())).await?
            }
            TableRequest::PlayerCareer { player_id } => {
                self.api.fetch_player_stats(player_id).await?
            }
            TableRequest::PlayerInfo { player_id } => self.api.fetch_player_info(player_id).await?,
            TableRequest::TeamDetails { team_id } => self.api.fetch_team_details(team_id).await?,
            TableRequest::FranchiseLeaders { team_id } => {
                self.api.fetch_franchise_leaders(team_id).await?
            }
        };
        Ok(response)
    }

    pub fn open_store(&self) -> anyhow::Result<JsonQuizStore> {
        Ok(JsonQuizStore::open(&self.settings.store_path)?)
    }

    /// Play the quiz for `date` on `input`/`output` and save the result.
    /// A day already on record is reported instead of replayed.
    pub async fn play<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        rng: &mut R,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> anyhow::Result<QuizRecord> {
        let mut store = self.open_store()?;
        let user = self.settings.user.as_str();
        if let Some(previous) = store.record_for(user, date)? {
            writeln!(output, "Already played {date}.")?;
            write_summary(output, &previous)?;
            return Ok(previous);
        }

        let questions = self.questions(date, rng).await?;
        if questions.is_empty() {
            bail!("no quiz available for {date}");
        }

        let session = run_session(QuizSession::new(date, questions), input, output)?;
        if !session.is_complete() {
            bail!("quiz for {date} abandoned before the last question");
        }
        let record = session.finish(user);
        store.save(record.clone())?;
        write_summary(output, &record)?;
        Ok(record)
    }
}

/// Ask each remaining question until the session completes or input ends.
pub fn run_session(
    mut session: QuizSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<QuizSession> {
    let mut line = String::new();
    while let Some(question) = session.current().cloned() {
        let (answered, total) = session.progress();
        writeln!(output, "\n[{}/{total}] {}", answered + 1, question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {option}", i + 1)?;
        }

        let choice = loop {
            write!(output, "> ")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(session);
            }
            match pick_option(&question, line.trim()) {
                Some(choice) => break choice,
                None => writeln!(output, "Pick 1-{}.", question.options.len())?,
            }
        };

        if session.answer(&choice) == Some(true) {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "Wrong, it was {}.", question.correct_answer)?;
        }
    }
    Ok(session)
}

pub fn write_games(output: &mut impl Write, games: &[GameSummary]) -> io::Result<()> {
    for game in games {
        let team = |t: &nba_stats_api::TeamLine| {
            if t.abbrev.is_empty() { t.team_id.clone() } else { t.abbrev.clone() }
        };
        let score = |s: Option<i64>| s.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        let marker = match game.status {
            GameStatus::Live => "*",
            GameStatus::Final | GameStatus::Scheduled => " ",
        };
        writeln!(
            output,
            "{marker} {}  {:>4} {:>3} @ {:<3} {:<4}  {}",
            game.game_id,
            team(&game.away),
            score(game.away.score),
            score(game.home.score),
            team(&game.home),
            game.status_text
        )?;
    }
    Ok(())
}

pub fn write_box_score(output: &mut impl Write, box_score: &GameBoxScore) -> io::Result<()> {
    writeln!(
        output,
        "{} {} - {} {}  {}",
        box_score.away.tricode,
        box_score.away.score,
        box_score.home.score,
        box_score.home.tricode,
        box_score.status_text
    )?;
    for team in [&box_score.away, &box_score.home] {
        write_team_box(output, team)?;
    }
    Ok(())
}

fn write_team_box(output: &mut impl Write, team: &TeamBox) -> io::Result<()> {
    let periods: Vec<String> = team.periods.iter().map(i64::to_string).collect();
    writeln!(output, "\n{} ({})", team.name, periods.join(" "))?;
    writeln!(
        output,
        "{:<24} {:>6} {:>4} {:>4} {:>4} {:>3} {:>3} {:>6} {:>6} {:>6} {:>4}",
        "PLAYER", "MIN", "PTS", "REB", "AST", "STL", "BLK", "FG", "3PT", "FT", "+/-"
    )?;
    for line in team.players.iter().chain(std::iter::once(&team.totals)) {
        write_player_line(output, line)?;
    }
    Ok(())
}

fn write_player_line(output: &mut impl Write, line: &PlayerLine) -> io::Result<()> {
    let name = if line.starter { format!("{}*", line.name) } else { line.name.clone() };
    writeln!(
        output,
        "{:<24} {:>6} {:>4} {:>4} {:>4} {:>3} {:>3} {:>6} {:>6} {:>6} {:>+4}",
        name,
        line.minutes,
        line.points,
        line.rebounds,
        line.assists,
        line.steals,
        line.blocks,
        line.fg,
        line.fg3,
        line.ft,
        line.plus_minus
    )
}

pub fn write_plays(output: &mut impl Write, plays: &[Play]) -> io::Result<()> {
    for play in plays {
        if play.is_stoppage() {
            writeln!(output, "-- {}", play.description)?;
            continue;
        }
        writeln!(
            output,
            "Q{} {:>5}  {:<3}  {:>3}-{:<3}  {}",
            play.period,
            play.clock,
            play.team.as_deref().unwrap_or(""),
            play.away_score,
            play.home_score,
            play.description
        )?;
    }
    Ok(())
}

/// Rewrite fractional `*PCT` columns (`FG_PCT`, `WinPCT`) as one-decimal
/// percentages: `0.478` becomes `47.8`. Empty or non-numeric cells are kept.
pub fn display_percentages(rows: &mut [NormalizedRow]) {
    for row in rows {
        for (key, value) in row.iter_mut() {
            if !key.to_ascii_uppercase().ends_with("PCT") {
                continue;
            }
            if let Ok(fraction) = value.parse::<f64>() {
                *value = format!("{:.1}", to_display_percentage(fraction));
            }
        }
    }
}

/// Accept an option number or the option text itself.
fn pick_option(question: &Question, reply: &str) -> Option<String> {
    if let Ok(n) = reply.parse::<usize>()
        && (1..=question.options.len()).contains(&n)
    {
        return question.options.get(n - 1).cloned();
    }
    question
        .options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(reply))
        .cloned()
}

pub fn write_summary(output: &mut impl Write, record: &QuizRecord) -> io::Result<()> {
    let total = record.total();
    let percentage = if total == 0 {
        0.0
    } else {
        to_display_percentage(f64::from(record.correct) / f64::from(total))
    };
    writeln!(
        output,
        "{}: {}/{total} correct ({percentage}%)",
        record.date, record.correct
    )?;
    for wrong in &record.wrong_answers {
        writeln!(
            output,
            "  {} you said {}, answer {}",
            wrong.question, wrong.wrong_answer, wrong.answer
        )?;
    }
    Ok(())
}
