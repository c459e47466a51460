//! Error types shared across the framework.
//!
//! Everything that can fail returns [`Error`] through the crate-wide
//! [`Result`] alias. Dispatch treats [`Error::MissingParameter`] as a
//! user-facing validation failure; every other variant is fatal and
//! propagates to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Framework error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A required command parameter was absent from the invocation.
    #[error("Missing Parameter: {description} ({example})")]
    MissingParameter { description: String, example: String },

    /// Two controllers resolved to the same command key at registration.
    #[error("Duplicate command '{command}' in namespace '{namespace}'")]
    DuplicateCommand { namespace: String, command: String },

    /// One or more required environment variables are unset.
    #[error("{}", missing_env_message(.vars, .filepath))]
    MissingEnvVars {
        vars: Vec<String>,
        filepath: Option<PathBuf>,
    },

    /// The `.env` file could not be read or parsed.
    #[error("Unable to load env file {}: {}", .path.display(), .source)]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A file operation referenced a source path that does not exist.
    #[error("Source file not found: '{}'", .path.display())]
    SourceMissing { path: PathBuf },

    /// A directory-scoped file helper was pointed at a missing directory.
    #[error("Directory not found: '{}'", .path.display())]
    DirectoryMissing { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Application-defined failure raised from a controller.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Shorthand constructor for [`Error::MissingParameter`].
    pub fn missing_parameter(description: impl Into<String>, example: impl Into<String>) -> Self {
        Error::MissingParameter {
            description: description.into(),
            example: example.into(),
        }
    }
}

fn missing_env_message(vars: &[String], filepath: &Option<PathBuf>) -> String {
    let mut message = format!(".env missing variables: {}", vars.join(", "));
    if let Some(path) = filepath {
        message.push_str(&format!(" (.env file: {})", path.display()));
    }
    message
}

/// Convenience alias used across the framework.
pub type Result<T> = std::result::Result<T, Error>;
