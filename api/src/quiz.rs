//! Daily quiz generation from finished games.
//!
//! Every finished game yields a battery of nine questions: who won, both
//! final scores, and the points/rebounds/assists leader of each team. Numeric
//! questions get three distractors drawn near the true value.

use crate::{Question, QuizFact, StatLeader, TeamFacts};
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// Distractor spread for team final scores.
pub const SCORE_SPREAD: i64 = 10;

/// Distractor spread for individual leader stats.
pub const LEADER_SPREAD: i64 = 5;

/// Options per numeric question, the correct value included.
pub const OPTION_COUNT: usize = 4;

/// Questions generated per finished game.
pub const QUESTIONS_PER_GAME: usize = 9;

const MAX_DRAWS_PER_OPTION: usize = 64;
const MAX_WIDENINGS: usize = 8;

/// Build the day's quiz: each complete game's battery, in game order.
/// Games with missing facts contribute nothing.
pub fn daily_quiz<R: Rng + ?Sized>(facts: &[QuizFact], rng: &mut R) -> Vec<Question> {
    facts
        .iter()
        .flat_map(|fact| generate_questions(fact, rng))
        .collect()
}

/// The nine questions for one game, or none at all if any fact is missing.
///
/// Order: winner, home score, away score, home points/rebounds/assists
/// leaders, away points/rebounds/assists leaders.
pub fn generate_questions<R: Rng + ?Sized>(fact: &QuizFact, rng: &mut R) -> Vec<Question> {
    let (home, away) = match (resolve(&fact.home), resolve(&fact.away)) {
        (Ok(home), Ok(away)) => (home, away),
        (Err(missing), _) => {
            debug!("game {}: home {missing} missing, no questions", fact.game_id);
            return Vec::new();
        }
        (_, Err(missing)) => {
            debug!("game {}: away {missing} missing, no questions", fact.game_id);
            return Vec::new();
        }
    };

    let mut questions = Vec::with_capacity(QUESTIONS_PER_GAME);
    questions.push(winner_question(home.name, home.score, away.name, away.score, rng));
    questions.push(numeric_question(
        format!("How many points did the {} score?", home.name),
        home.score,
        SCORE_SPREAD,
        rng,
    ));
    questions.push(numeric_question(
        format!("How many points did the {} score?", away.name),
        away.score,
        SCORE_SPREAD,
        rng,
    ));
    for team in [&home, &away] {
        questions.push(numeric_question(
            format!("How many points did {} score?", team.points.name),
            team.points.value,
            LEADER_SPREAD,
            rng,
        ));
        questions.push(numeric_question(
            format!("How many rebounds did {} have?", team.rebounds.name),
            team.rebounds.value,
            LEADER_SPREAD,
            rng,
        ));
        questions.push(numeric_question(
            format!("How many assists did {} have?", team.assists.name),
            team.assists.value,
            LEADER_SPREAD,
            rng,
        ));
    }
    questions
}

/// "Which team won" with the home team listed first. Options are not
/// shuffled. A tied score credits the away team.
pub fn winner_question<R: Rng + ?Sized>(
    home: &str,
    home_score: i64,
    away: &str,
    away_score: i64,
    rng: &mut R,
) -> Question {
    let winner = if home_score > away_score { home } else { away };
    Question {
        id: question_id(rng),
        prompt: format!("Which team won: {home} vs {away}"),
        options: vec![home.to_owned(), away.to_owned()],
        correct_answer: winner.to_owned(),
    }
}

/// A question whose answer is `correct`, with distractors drawn uniformly
/// from `[correct - spread, correct + spread]` and the options shuffled.
///
/// Colliding draws are retried a bounded number of times. If the interval is
/// too narrow to hold four distinct values the spread is doubled; after
/// `MAX_WIDENINGS` the question keeps whatever distinct options it has.
pub fn numeric_question<R: Rng + ?Sized>(
    prompt: String,
    correct: i64,
    spread: i64,
    rng: &mut R,
) -> Question {
    let mut spread = spread.max(0);
    let mut values = vec![correct];
    let mut widenings = 0;

    while values.len() < OPTION_COUNT {
        match draw_distinct(correct, spread, &values, rng) {
            Some(value) => values.push(value),
            None if widenings < MAX_WIDENINGS => {
                spread = spread.saturating_mul(2).max(1);
                widenings += 1;
                debug!("widening distractor spread to {spread} for {correct}");
            }
            None => {
                warn!("only {} distinct options for {correct}", values.len());
                break;
            }
        }
    }

    values.shuffle(rng);
    Question {
        id: question_id(rng),
        prompt,
        options: values.iter().map(i64::to_string).collect(),
        correct_answer: correct.to_string(),
    }
}

fn draw_distinct<R: Rng + ?Sized>(
    center: i64,
    spread: i64,
    taken: &[i64],
    rng: &mut R,
) -> Option<i64> {
    let low = center.saturating_sub(spread);
    let high = center.saturating_add(spread);
    (0..MAX_DRAWS_PER_OPTION)
        .map(|_| rng.gen_range(low..=high))
        .find(|candidate| !taken.contains(candidate))
}

fn question_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid().to_string()
}

/// A team whose every quiz fact resolved.
struct ResolvedTeam<'a> {
    name: &'a str,
    score: i64,
    points: &'a StatLeader,
    rebounds: &'a StatLeader,
    assists: &'a StatLeader,
}

fn resolve(team: &TeamFacts) -> Result<ResolvedTeam<'_>, &'static str> {
    Ok(ResolvedTeam {
        name: team.name.as_deref().ok_or("team name")?,
        score: team.score.ok_or("final score")?,
        points: team.points_leader.as_ref().ok_or("points leader")?,
        rebounds: team.rebounds_leader.as_ref().ok_or("rebounds leader")?,
        assists: team.assists_leader.as_ref().ok_or("assists leader")?,
    })
}
