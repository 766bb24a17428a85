use log::LevelFilter;
use std::env;
use std::path::PathBuf;

const DEFAULT_STORE: &str = "nbaquiz-results.json";
const DEFAULT_USER: &str = "guest";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub user: String,
    pub store_path: PathBuf,
    /// Local scoreboard payload to use instead of the network.
    pub scoreboard_snapshot: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_owned(),
            store_path: PathBuf::from(DEFAULT_STORE),
            scoreboard_snapshot: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            user: non_empty("NBAQUIZ_USER")
                .or_else(|| non_empty("USER"))
                .unwrap_or(defaults.user),
            store_path: non_empty("NBAQUIZ_STORE")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
            scoreboard_snapshot: non_empty("NBAQUIZ_SCOREBOARD_JSON").map(PathBuf::from),
            log_level: non_empty("NBAQUIZ_LOG")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
