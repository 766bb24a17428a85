mod app;
mod state;

use crate::app::{
    App, DEFAULT_END_PERIOD, TableRequest, write_box_score, write_games, write_plays,
};
use crate::state::app_settings::AppSettings;
use crate::state::store::QuizStore;
use chrono::{Local, NaiveDate};
use log::error;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Questions { date: NaiveDate },
    Play { date: NaiveDate },
    Games { date: NaiveDate },
    BoxScore { game_id: String },
    Plays { game_id: String, end_period: u8 },
    Table(TableRequest),
    Awards { player_id: String },
    Leaderboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = match parse_args(std::env::args().skip(1), yesterday()) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{}", usage_text());
            std::process::exit(2);
        }
    };

    better_panic::install();

    let settings = AppSettings::load();
    init_logging(&settings);

    let app = App::new(settings);
    if let Err(e) = run(&app, command).await {
        error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

async fn run(app: &App, command: Command) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Help => writeln!(out, "{}", usage_text())?,
        Command::Version => writeln!(out, "nbaquiz {}", env!("CARGO_PKG_VERSION"))?,
        Command::Questions { date } => {
            let questions = app.questions(date, &mut rand::thread_rng()).await?;
            serde_json::to_writer_pretty(&mut out, &questions)?;
            writeln!(out)?;
        }
        Command::Play { date } => {
            let stdin = io::stdin();
            app.play(date, &mut rand::thread_rng(), &mut stdin.lock(), &mut out)
                .await?;
        }
        Command::Games { date } => write_games(&mut out, &app.games(date).await?)?,
        Command::BoxScore { game_id } => {
            write_box_score(&mut out, &app.box_score(&game_id).await?)?
        }
        Command::Plays { game_id, end_period } => {
            write_plays(&mut out, &app.plays(&game_id, end_period).await?)?
        }
        Command::Table(request) => {
            let rows = app.table(&request).await?;
            serde_json::to_writer_pretty(&mut out, &rows)?;
            writeln!(out)?;
        }
        Command::Awards { player_id } => {
            for award in app.awards(&player_id).await? {
                writeln!(out, "{award}")?;
            }
        }
        Command::Leaderboard => {
            for entry in app.open_store()?.leaderboard()? {
                writeln!(
                    out,
                    "{:>3}. {:<20} {:>5} correct {:>5} wrong",
                    entry.rank, entry.user, entry.total_correct, entry.total_incorrect
                )?;
            }
        }
    }
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>, default_date: NaiveDate) -> Result<Command, String> {
    let mut args = args.into_iter();
    let Some(arg) = args.next() else {
        return Ok(Command::Help);
    };

    let date_arg = |value: Option<String>| match value {
        Some(v) => NaiveDate::parse_from_str(&v, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date: {v} (expected YYYY-MM-DD)")),
        None => Ok(default_date),
    };
    let required = |value: Option<String>, what: &str| {
        value.ok_or_else(|| format!("Missing {what} for {arg}"))
    };

    let command = match arg.as_str() {
        "-h" | "--help" | "help" => Command::Help,
        "-V" | "--version" => Command::Version,
        "questions" => Command::Questions { date: date_arg(args.next())? },
        "play" => Command::Play { date: date_arg(args.next())? },
        "games" => Command::Games { date: date_arg(args.next())? },
        "boxscore" => Command::BoxScore { game_id: required(args.next(), "game id")? },
        "plays" => {
            let game_id = required(args.next(), "game id")?;
            let end_period = match args.next() {
                Some(p) => p
                    .parse::<u8>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("Invalid period: {p}"))?,
                None => DEFAULT_END_PERIOD,
            };
            Command::Plays { game_id, end_period }
        }
        "leaderboard" => Command::Leaderboard,
        "awards" => Command::Awards { player_id: required(args.next(), "player id")? },
        "table" => {
            let Some(kind) = args.next() else {
                return Err("Missing table name".into());
            };
            let request = match kind.as_str() {
                "standings" => TableRequest::Standings,
                "leaders" => TableRequest::SeasonLeaders {
                    stat: args.next().unwrap_or_else(|| "PTS".into()).to_uppercase(),
                },
                "alltime" => TableRequest::AllTimeLeaders {
                    set: args.next().unwrap_or_else(|| "PTSLeaders".into()),
                },
                "players" => TableRequest::AllPlayers,
                "career" => TableRequest::PlayerCareer { player_id: required(args.next(), "player id")? },
                "player" => TableRequest::PlayerInfo { player_id: required(args.next(), "player id")? },
                "team" => TableRequest::TeamDetails { team_id: required(args.next(), "team id")? },
                "franchise" => {
                    TableRequest::FranchiseLeaders { team_id: required(args.next(), "team id")? }
                }
                other => return Err(format!("Unknown table: {other}")),
            };
            Command::Table(request)
        }
        other => return Err(format!("Unknown argument: {other}")),
    };

    if let Some(extra) = args.next() {
        return Err(format!("Unexpected argument: {extra}"));
    }
    Ok(command)
}

fn yesterday() -> NaiveDate {
    let today = Local::now().date_naive();
    today.pred_opt().unwrap_or(today)
}

fn usage_text() -> &'static str {
    "nbaquiz - NBA stats tables and a daily box-score quiz

Usage:
  nbaquiz questions [YYYY-MM-DD]    print the day's quiz as JSON (default: yesterday)
  nbaquiz play [YYYY-MM-DD]         answer the day's quiz and save the result
  nbaquiz games [YYYY-MM-DD]        list the day's games and scores (default: yesterday)
  nbaquiz boxscore <game id>        player and team box score of one game
  nbaquiz plays <game id> [PERIOD]  play-by-play through PERIOD (default: every period)
  nbaquiz table <name> [arg]        print a stats table as JSON
                                    standings | leaders [STAT] | alltime [SET] | players
                                    career <player id> | player <player id>
                                    team <team id> | franchise <team id>
  nbaquiz awards <player id>        list a player's awards
  nbaquiz leaderboard               rank players by total correct answers
  nbaquiz --help
  nbaquiz --version

Environment:
  NBAQUIZ_USER              Name results are saved under (default $USER)
  NBAQUIZ_STORE             Quiz results file (default nbaquiz-results.json)
  NBAQUIZ_SCOREBOARD_JSON   Path to a local scoreboard snapshot
  NBAQUIZ_LOG               Log level (default warn; RUST_LOG takes precedence)"
}

/// Logs go to stderr so JSON on stdout stays parseable. The subscriber also
/// picks up records emitted through the `log` macros.
fn init_logging(settings: &AppSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_string().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
