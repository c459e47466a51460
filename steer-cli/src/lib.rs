//! Reference application for the steer dispatch framework.
//!
//! The `steer` binary wires a help namespace, a `files` toolbox, a
//! `login` command and an `about` command into one [`App`]. Logging
//! behaviour is driven entirely by the environment: `STEER_LOGS_DIR`
//! moves the log directory, `LOG.FILE_TYPE` switches daily files on,
//! and the `LOG.COMMANDS` / `LOG.ERRORS` switches are honoured by the
//! framework itself.

pub mod controllers;

use std::path::{Path, PathBuf};

use steer_core::{
    default_logs_dir, App, AppBuilder, CommandSource, ControllerSpec, Env, LogFileStyle, Logger,
    Result,
};

pub const APP_NAME: &str = "steer";
pub const APP_DESCRIPTION: &str = "File and session toolbox";

/// Environment variable overriding where log files are written.
pub const LOGS_DIR_VAR: &str = "STEER_LOGS_DIR";

/// Environment variable selecting `single` or `daily` log files.
pub const LOG_FILE_TYPE_VAR: &str = "LOG.FILE_TYPE";

/// Every command the binary registers.
///
/// `files` deliberately has no default controller, so a bare
/// `steer files` reports the command as not found.
pub fn command_sources() -> Vec<CommandSource> {
    vec![
        CommandSource::Namespace {
            name: "help",
            controllers: vec![ControllerSpec::new(
                "DefaultController",
                controllers::help::DefaultController::boxed,
            )],
        },
        CommandSource::Namespace {
            name: "files",
            controllers: vec![
                ControllerSpec::new("CopyController", controllers::files::CopyController::boxed),
                ControllerSpec::new("ReadController", controllers::files::ReadController::boxed),
            ],
        },
        CommandSource::Single {
            command: "login",
            spec: ControllerSpec::new(
                "LoginController",
                controllers::login::LoginController::boxed,
            ),
        },
        CommandSource::Single {
            command: "about",
            spec: ControllerSpec::new(
                "AboutController",
                controllers::about::AboutController::boxed,
            ),
        },
    ]
}

/// Assembles the application from the process environment and an
/// optional `./.env` file.
pub fn build_app() -> Result<App> {
    let env = load_env()?;
    let logs_dir = env
        .get(LOGS_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| default_logs_dir(APP_NAME));
    let style = LogFileStyle::from_config(env.get_or(LOG_FILE_TYPE_VAR, "single"));

    AppBuilder::new(APP_NAME, APP_DESCRIPTION)
        .version(env!("CARGO_PKG_VERSION"))
        .logger(Logger::new(logs_dir).with_style(style))
        .env(env)
        .sources(command_sources())
        .build()
}

/// A missing `.env` file just means process environment only.
fn load_env() -> Result<Env> {
    if Path::new(".env").is_file() {
        Env::load(".")
    } else {
        Ok(Env::from_process())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steer_core::DEFAULT_SUBCOMMAND;

    #[test]
    fn every_command_is_registered() {
        let app = build_app().unwrap();
        let registry = app.registry();
        assert!(registry.contains("help"));
        assert!(registry.contains("files"));
        assert!(registry.contains("login"));
        assert!(registry.contains("about"));
    }

    #[test]
    fn files_namespace_has_no_default() {
        let app = build_app().unwrap();
        let registry = app.registry();
        assert!(registry.lookup("files", "copy").is_some());
        assert!(registry.lookup("files", "read").is_some());
        assert!(registry.lookup("files", DEFAULT_SUBCOMMAND).is_none());
    }

    #[test]
    fn descriptors_are_captured_at_build_time() {
        let app = build_app().unwrap();
        assert_eq!(
            app.registry().describe("files", "copy"),
            Some("Copies a file")
        );
        assert_eq!(
            app.registry().describe("login", DEFAULT_SUBCOMMAND),
            Some("Stores credentials for the invocation")
        );
    }
}
