//! Process environment access with optional `.env` overlay.
//!
//! [`Env`] is an immutable snapshot taken at startup: `.env` values are
//! read first and process variables layered on top, so anything exported
//! in the shell wins over the file. Controllers receive the snapshot
//! through the command context instead of touching `std::env` directly.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Immutable environment snapshot.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
    dotenv_path: Option<PathBuf>,
}

impl Env {
    /// Snapshot of the process environment only.
    pub fn from_process() -> Self {
        Env {
            vars: std::env::vars().collect(),
            dotenv_path: None,
        }
    }

    /// Snapshot from explicit pairs, for tests and embedding.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Env {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            dotenv_path: None,
        }
    }

    /// Loads `{dir}/.env` and layers the process environment on top.
    ///
    /// Fails when the file is missing or unparsable; callers that treat
    /// the file as optional should check for it first and fall back to
    /// [`Env::from_process`].
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(".env");
        let entries = dotenvy::from_path_iter(&path).map_err(|source| Error::EnvFile {
            path: path.clone(),
            source,
        })?;

        let mut vars: HashMap<String, String> = HashMap::new();
        for entry in entries {
            let (key, value) = entry.map_err(|source| Error::EnvFile {
                path: path.clone(),
                source,
            })?;
            vars.insert(key, value);
        }
        for (key, value) in std::env::vars() {
            vars.insert(key, value);
        }

        Ok(Env {
            vars,
            dotenv_path: Some(path),
        })
    }

    /// Path of the `.env` file this snapshot was loaded from, if any.
    pub fn dotenv_path(&self) -> Option<&Path> {
        self.dotenv_path.as_deref()
    }

    pub fn exists(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Variable value, or `default` when unset.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Boolean variable: only the literal `true` counts as set.
    pub fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some("true"))
    }

    /// Delimited list variable; unset keys yield an empty list.
    pub fn get_array(&self, key: &str, delimiter: char) -> Vec<String> {
        match self.get(key) {
            Some(value) => value.split(delimiter).map(str::to_string).collect(),
            None => Vec::new(),
        }
    }

    /// Switch semantics for `LOG.COMMANDS`-style toggles: unset or the
    /// literal `false` means off, any other value means on.
    pub fn flag_enabled(&self, key: &str) -> bool {
        match self.get(key) {
            None => false,
            Some(value) => value != "false",
        }
    }

    /// Verifies that every listed variable is present, reporting all
    /// missing names in one error.
    pub fn require(&self, keys: &[&str]) -> Result<()> {
        let missing: Vec<String> = keys
            .iter()
            .filter(|key| !self.exists(key))
            .map(|key| key.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingEnvVars {
                vars: missing,
                filepath: self.dotenv_path.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Env {
        Env::from_pairs([
            ("APP_NAME", "steer"),
            ("VERBOSE", "true"),
            ("QUIET", "false"),
            ("HOSTS", "a,b,c"),
            ("LOG.COMMANDS", "1"),
            ("LOG.ERRORS", "false"),
        ])
    }

    #[test]
    fn get_and_get_or_read_the_snapshot() {
        let env = sample();
        assert_eq!(env.get("APP_NAME"), Some("steer"));
        assert_eq!(env.get("MISSING"), None);
        assert_eq!(env.get_or("MISSING", "fallback"), "fallback");
        assert!(env.exists("APP_NAME"));
    }

    #[test]
    fn get_bool_requires_the_literal_true() {
        let env = sample();
        assert!(env.get_bool("VERBOSE"));
        assert!(!env.get_bool("QUIET"));
        assert!(!env.get_bool("APP_NAME"));
        assert!(!env.get_bool("MISSING"));
    }

    #[test]
    fn get_array_splits_on_delimiter() {
        let env = sample();
        assert_eq!(env.get_array("HOSTS", ','), vec!["a", "b", "c"]);
        assert!(env.get_array("MISSING", ',').is_empty());
    }

    #[test]
    fn flag_enabled_treats_absent_and_false_as_off() {
        let env = sample();
        assert!(env.flag_enabled("LOG.COMMANDS"));
        assert!(!env.flag_enabled("LOG.ERRORS"));
        assert!(!env.flag_enabled("LOG.OTHER"));
        assert!(env.flag_enabled("VERBOSE"));
    }

    #[test]
    fn require_reports_all_missing_names() {
        let env = sample();
        assert!(env.require(&["APP_NAME", "HOSTS"]).is_ok());
        let err = env.require(&["APP_NAME", "DB_HOST", "DB_USER"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            ".env missing variables: DB_HOST, DB_USER"
        );
    }

    #[test]
    fn load_reads_a_dotenv_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env"), "FROM_FILE=yes\n").unwrap();
        let env = Env::load(dir.path()).unwrap();
        assert_eq!(env.get("FROM_FILE"), Some("yes"));
        assert_eq!(env.dotenv_path(), Some(dir.path().join(".env").as_path()));
    }

    #[test]
    fn process_variables_win_over_the_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "STEER_ENV_PRECEDENCE_TEST=from-file\n",
        )
        .unwrap();
        std::env::set_var("STEER_ENV_PRECEDENCE_TEST", "from-process");
        let env = Env::load(dir.path()).unwrap();
        assert_eq!(env.get("STEER_ENV_PRECEDENCE_TEST"), Some("from-process"));
        std::env::remove_var("STEER_ENV_PRECEDENCE_TEST");
    }

    #[test]
    fn load_fails_when_the_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let err = Env::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::EnvFile { .. }));
    }

    #[test]
    fn require_names_the_dotenv_file_when_loaded_from_one() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".env"), "PRESENT=1\n").unwrap();
        let env = Env::load(dir.path()).unwrap();
        let err = env.require(&["ABSENT"]).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with(".env missing variables: ABSENT (.env file: "));
        assert!(message.contains(".env)"));
    }
}
