//! Application shell and the dispatch pipeline.
//!
//! [`AppBuilder`] assembles identity, IO endpoints and command sources;
//! [`App::dispatch`] then runs one invocation end to end: parse argv,
//! resolve the controller, drive its lifecycle and route any output
//! through the shared printer and logger.

use std::path::PathBuf;
use std::rc::Rc;

use crate::call::{CommandCall, DEFAULT_SUBCOMMAND};
use crate::context::{AppInfo, CommandContext};
use crate::controller::{validate_required, LifecyclePhase};
use crate::env::Env;
use crate::error::{Error, Result};
use crate::logging::{Logger, LOG_COMMANDS_VAR};
use crate::output::{Printer, Theme};
use crate::registry::{CommandRegistry, CommandSource};

/// A configured command-line application.
pub struct App {
    info: Rc<AppInfo>,
    registry: Rc<CommandRegistry>,
    printer: Rc<Printer>,
    log: Rc<Logger>,
    env: Rc<Env>,
}

impl App {
    pub fn builder(name: impl Into<String>, description: impl Into<String>) -> AppBuilder {
        AppBuilder::new(name, description)
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn printer(&self) -> &Printer {
        &self.printer
    }

    pub fn logger(&self) -> &Logger {
        &self.log
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Runs one invocation end to end.
    ///
    /// User-facing failures are printed and consumed: an invocation
    /// without a command shows the usage signature, an unresolved command
    /// reports `Controller not found`, and a missing required parameter
    /// is printed and logged. The returned error is reserved for faults
    /// the application cannot recover from.
    pub fn dispatch(&self, argv: &[String]) -> Result<()> {
        let call = CommandCall::parse(argv);

        if call.args.len() < 2 {
            self.printer.display(&self.info.signature, "default");
            return Ok(());
        }

        let Some(entry) = self.registry.lookup(&call.command, &call.subcommand) else {
            self.printer.error(&not_found_message(&call.command, &call.subcommand));
            return Ok(());
        };

        let descriptor = entry.descriptor.clone();
        let factory = entry.factory;
        let mut controller = factory();
        let ctx = CommandContext::new(
            call,
            descriptor,
            Rc::clone(&self.info),
            Rc::clone(&self.registry),
            Rc::clone(&self.printer),
            Rc::clone(&self.log),
            Rc::clone(&self.env),
        );

        let mut phase = LifecyclePhase::Uninitialized;
        controller.boot(&ctx)?;
        advance(&mut phase, LifecyclePhase::Booted);

        if self.env.flag_enabled(LOG_COMMANDS_VAR) {
            self.log.info(&ctx.sanitized_command());
        }

        match validate_required(&ctx.descriptor, &ctx.call) {
            Ok(()) => advance(&mut phase, LifecyclePhase::Validated),
            Err(err @ Error::MissingParameter { .. }) => {
                advance(&mut phase, LifecyclePhase::Failed);
                let sanitized = ctx.sanitized_command();
                let message = err.to_string();
                self.log
                    .error(&Logger::join_tabbed(&[sanitized.as_str(), "->", &message]));
                self.printer.error(&message);
                return Ok(());
            }
            Err(other) => return Err(other),
        }

        match controller.run(&ctx) {
            Ok(()) => {
                advance(&mut phase, LifecyclePhase::Ran);
                controller.teardown(&ctx);
                advance(&mut phase, LifecyclePhase::TornDown);
                Ok(())
            }
            Err(err) => {
                advance(&mut phase, LifecyclePhase::Failed);
                controller.teardown(&ctx);
                Err(err)
            }
        }
    }
}

/// User-facing message for a command that resolved to no controller.
/// The subcommand is only named when the user actually typed one.
pub fn not_found_message(command: &str, subcommand: &str) -> String {
    let mut target = command.to_string();
    if subcommand.to_lowercase() != DEFAULT_SUBCOMMAND {
        target.push(' ');
        target.push_str(subcommand);
    }
    format!("Controller not found for {target}")
}

fn advance(phase: &mut LifecyclePhase, next: LifecyclePhase) {
    debug_assert!(
        phase.can_advance(next),
        "illegal lifecycle transition {phase:?} -> {next:?}"
    );
    tracing::trace!(from = ?phase, to = ?next, "lifecycle");
    *phase = next;
}

/// Where logs land when the application does not configure a directory.
pub fn default_logs_dir(name: &str) -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(name)
        .join("logs")
}

/// Builder for [`App`].
pub struct AppBuilder {
    name: String,
    description: String,
    version: String,
    signature: Option<String>,
    printer: Option<Printer>,
    logger: Option<Logger>,
    env: Option<Env>,
    sources: Vec<CommandSource>,
}

impl AppBuilder {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        AppBuilder {
            name: name.into(),
            description: description.into(),
            version: String::new(),
            signature: None,
            printer: None,
            logger: None,
            env: None,
            sources: Vec::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Usage line shown for bare invocations; defaults to
    /// `./<name> help`.
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn printer(mut self, printer: Printer) -> Self {
        self.printer = Some(printer);
        self
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Adds one registration source.
    pub fn source(mut self, source: CommandSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn sources(mut self, sources: Vec<CommandSource>) -> Self {
        self.sources.extend(sources);
        self
    }

    /// Builds the registry and finalises the application. Fails on
    /// duplicate command registrations.
    pub fn build(self) -> Result<App> {
        let signature = self
            .signature
            .unwrap_or_else(|| format!("./{} help", self.name));
        let logger = self
            .logger
            .unwrap_or_else(|| Logger::new(default_logs_dir(&self.name)));
        let registry = CommandRegistry::build(self.sources)?;

        Ok(App {
            info: Rc::new(AppInfo {
                name: self.name,
                description: self.description,
                signature,
                version: self.version,
            }),
            registry: Rc::new(registry),
            printer: Rc::new(self.printer.unwrap_or_else(|| Printer::stdout(Theme::cli()))),
            log: Rc::new(logger),
            env: Rc::new(self.env.unwrap_or_else(Env::from_process)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_hides_the_default_subcommand() {
        assert_eq!(
            not_found_message("deploy", DEFAULT_SUBCOMMAND),
            "Controller not found for deploy"
        );
        assert_eq!(
            not_found_message("deploy", "Default"),
            "Controller not found for deploy"
        );
        assert_eq!(
            not_found_message("files", "wipe"),
            "Controller not found for files wipe"
        );
    }

    #[test]
    fn builder_defaults_the_signature_from_the_name() {
        let app = AppBuilder::new("steer", "demo").build().unwrap();
        assert_eq!(app.info().signature, "./steer help");
    }

    #[test]
    fn builder_keeps_a_custom_signature() {
        let app = AppBuilder::new("steer", "demo")
            .signature("steer <command>")
            .build()
            .unwrap();
        assert_eq!(app.info().signature, "steer <command>");
    }

    #[test]
    fn default_logs_dir_nests_under_the_app_name() {
        let dir = default_logs_dir("steer");
        assert!(dir.ends_with("steer/logs"));
    }
}
