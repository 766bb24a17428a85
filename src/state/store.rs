use crate::state::session::QuizRecord;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error, PathBuf),
    Json(serde_json::Error, PathBuf),
    AlreadyPlayed { user: String, date: NaiveDate },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e, path) => write!(f, "I/O error for {}: {e}", path.display()),
            StoreError::Json(e, path) => write!(f, "Invalid quiz store {}: {e}", path.display()),
            StoreError::AlreadyPlayed { user, date } => {
                write!(f, "{user} already played the quiz for {date}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e, _) => Some(e),
            StoreError::Json(e, _) => Some(e),
            StoreError::AlreadyPlayed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user: String,
    pub total_correct: u32,
    pub total_incorrect: u32,
}

/// Durable quiz results: one record per user per day.
pub trait QuizStore {
    fn has_played(&self, user: &str, date: NaiveDate) -> StoreResult<bool>;

    /// Persist a finished quiz. A second record for the same user and day is
    /// rejected with `StoreError::AlreadyPlayed`.
    fn save(&mut self, record: QuizRecord) -> StoreResult<()>;

    fn records(&self, user: &str) -> StoreResult<Vec<QuizRecord>>;

    fn leaderboard(&self) -> StoreResult<Vec<LeaderboardEntry>>;

    fn record_for(&self, user: &str, date: NaiveDate) -> StoreResult<Option<QuizRecord>> {
        Ok(self.records(user)?.into_iter().find(|r| r.date == date))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    records: Vec<QuizRecord>,
}

/// All records in a single JSON file, rewritten on every save.
#[derive(Debug)]
pub struct JsonQuizStore {
    path: PathBuf,
    data: StoreFile,
}

impl JsonQuizStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created by the first save.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let data = read_store(&path)?;
        Ok(Self { path, data })
    }

    /// Pick up records other processes saved since this store was opened.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.data = read_store(&self.path)?;
        Ok(())
    }

    fn persist(&self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StoreError::Json(e, self.path.clone()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StoreError::Io(e, tmp.clone()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Io(e, self.path.clone()))
    }
}

impl QuizStore for JsonQuizStore {
    fn has_played(&self, user: &str, date: NaiveDate) -> StoreResult<bool> {
        Ok(self
            .data
            .records
            .iter()
            .any(|r| r.user == user && r.date == date))
    }

    fn save(&mut self, record: QuizRecord) -> StoreResult<()> {
        self.reload()?;
        if self.has_played(&record.user, record.date)? {
            return Err(StoreError::AlreadyPlayed { user: record.user, date: record.date });
        }
        debug!(
            "saving quiz for {} on {}: {}/{}",
            record.user,
            record.date,
            record.correct,
            record.total()
        );
        self.data.records.push(record);
        if let Err(e) = self.persist() {
            self.data.records.pop();
            return Err(e);
        }
        Ok(())
    }

    fn records(&self, user: &str) -> StoreResult<Vec<QuizRecord>> {
        Ok(self
            .data
            .records
            .iter()
            .filter(|r| r.user == user)
            .cloned()
            .collect())
    }

    fn leaderboard(&self) -> StoreResult<Vec<LeaderboardEntry>> {
        Ok(rank(&self.data.records))
    }
}

fn read_store(path: &Path) -> StoreResult<StoreFile> {
    match fs::read_to_string(path) {
        Ok(content) => {
            serde_json::from_str(&content).map_err(|e| StoreError::Json(e, path.to_owned()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no quiz store at {}, starting empty", path.display());
            Ok(StoreFile::default())
        }
        Err(e) => Err(StoreError::Io(e, path.to_owned())),
    }
}

/// Totals per user, most correct answers first; ties break on user name.
pub fn rank(records: &[QuizRecord]) -> Vec<LeaderboardEntry> {
    let mut totals: HashMap<&str, (u32, u32)> = HashMap::new();
    for r in records {
        let entry = totals.entry(r.user.as_str()).or_default();
        entry.0 += r.correct;
        entry.1 += r.incorrect;
    }

    let mut users: Vec<(&str, (u32, u32))> = totals.into_iter().collect();
    users.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.0.cmp(b.0)));
    users
        .into_iter()
        .enumerate()
        .map(|(i, (user, (correct, incorrect)))| LeaderboardEntry {
            rank: i + 1,
            user: user.to_owned(),
            total_correct: correct,
            total_incorrect: incorrect,
        })
        .collect()
}
