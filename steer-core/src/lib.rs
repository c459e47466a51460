//! Command dispatch framework for small CLI applications.
//!
//! Applications implement [`Controller`] for each command, declare the
//! controllers as [`CommandSource`] registrations, and hand process argv
//! to [`App::dispatch`]. The framework parses the invocation into a
//! [`CommandCall`], resolves the controller through the
//! [`CommandRegistry`], validates required parameters and drives the
//! controller lifecycle. Printing goes through a themed [`Printer`],
//! auditing through a channel [`Logger`], and configuration through an
//! immutable [`Env`] snapshot, so all side effects stay injectable.

pub mod call;
pub mod context;
pub mod controller;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod files;
pub mod help;
pub mod logging;
pub mod output;
pub mod registry;
pub mod session;

pub use call::{CommandCall, DEFAULT_SUBCOMMAND};
pub use context::{AppInfo, CommandContext};
pub use controller::{
    sanitize_for_log, validate_required, CommandDescriptor, Controller, ControllerFactory,
    LifecyclePhase,
};
pub use dispatch::{default_logs_dir, not_found_message, App, AppBuilder};
pub use env::Env;
pub use error::{Error, Result};
pub use help::{HelpMenu, HelpScreen};
pub use logging::{LogChannel, LogFileStyle, Logger, LOG_COMMANDS_VAR, LOG_ERRORS_VAR};
pub use output::{CapturedOutput, Printer, TextStyle, Theme};
pub use registry::{command_key, CommandRegistry, CommandSource, ControllerSpec, RegistryEntry};
pub use session::SessionStore;
