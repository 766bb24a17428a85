use chrono::NaiveDate;
use nba_stats_api::Question;
use serde::{Deserialize, Serialize};

/// A question the player got wrong, kept for the end-of-quiz review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongAnswer {
    pub question: String,
    pub answer: String,
    pub wrong_answer: String,
}

/// One user's finished quiz for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub user: String,
    pub date: NaiveDate,
    pub correct: u32,
    pub incorrect: u32,
    #[serde(default)]
    pub wrong_answers: Vec<WrongAnswer>,
}

impl QuizRecord {
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }
}

/// Positional progress through a day's questions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    date: NaiveDate,
    questions: Vec<Question>,
    position: usize,
    correct: u32,
    incorrect: u32,
    wrong_answers: Vec<WrongAnswer>,
}

impl QuizSession {
    pub fn new(date: NaiveDate, questions: Vec<Question>) -> Self {
        Self {
            date,
            questions,
            position: 0,
            correct: 0,
            incorrect: 0,
            wrong_answers: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// Score `choice` against the current question and move on.
    /// Returns `None` once every question has been answered.
    pub fn answer(&mut self, choice: &str) -> Option<bool> {
        let question = self.questions.get(self.position)?;
        let correct = question.is_correct(choice);
        if correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
            self.wrong_answers.push(WrongAnswer {
                question: question.prompt.clone(),
                answer: question.correct_answer.clone(),
                wrong_answer: choice.to_owned(),
            });
        }
        self.position += 1;
        Some(correct)
    }

    /// `(answered, total)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.position, self.questions.len())
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    pub fn score(&self) -> (u32, u32) {
        (self.correct, self.incorrect)
    }

    pub fn finish(self, user: &str) -> QuizRecord {
        QuizRecord {
            user: user.to_owned(),
            date: self.date,
            correct: self.correct,
            incorrect: self.incorrect,
            wrong_answers: self.wrong_answers,
        }
    }
}
