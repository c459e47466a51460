//! The controller contract and its per-command metadata.

use crate::call::CommandCall;
use crate::context::CommandContext;
use crate::error::{Error, Result};

/// Static metadata describing one command for validation, help rendering
/// and log sanitisation.
#[derive(Debug, Clone, Default)]
pub struct CommandDescriptor {
    /// One-line description shown in help listings.
    pub description: String,
    /// Option name to usage example (`user` -> `user=<name>`), in
    /// declaration order.
    pub options: Vec<(String, String)>,
    /// Option name to help text, in declaration order.
    pub definitions: Vec<(String, String)>,
    /// Parameters that must be present before `run` is entered.
    pub required_params: Vec<String>,
    /// Parameter names whose values never reach a log file.
    pub sensitive_params: Vec<String>,
    /// Free-form lines rendered at the bottom of the help screen.
    pub notes: Vec<String>,
}

impl CommandDescriptor {
    pub fn new(description: impl Into<String>) -> Self {
        CommandDescriptor {
            description: description.into(),
            ..CommandDescriptor::default()
        }
    }

    /// Declares an option with its usage example.
    pub fn option(mut self, name: impl Into<String>, example: impl Into<String>) -> Self {
        self.options.push((name.into(), example.into()));
        self
    }

    /// Attaches help text to an option.
    pub fn define(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.definitions.push((name.into(), text.into()));
        self
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required_params.push(name.into());
        self
    }

    pub fn sensitive(mut self, name: impl Into<String>) -> Self {
        self.sensitive_params.push(name.into());
        self
    }

    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.notes.push(text.into());
        self
    }

    pub fn option_example(&self, name: &str) -> Option<&str> {
        lookup_pair(&self.options, name)
    }

    pub fn definition(&self, name: &str) -> Option<&str> {
        lookup_pair(&self.definitions, name)
    }
}

fn lookup_pair<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// A runnable command endpoint.
///
/// Dispatch drives the lifecycle generically: construct via the
/// registered factory, `boot`, validate required parameters against the
/// descriptor, `run`, then `teardown`. Implementations only fill in the
/// steps they need.
pub trait Controller {
    /// Metadata used for validation, help and log sanitisation.
    fn descriptor(&self) -> CommandDescriptor;

    /// One-time setup before validation.
    fn boot(&mut self, _ctx: &CommandContext) -> Result<()> {
        Ok(())
    }

    /// The command body; only entered after validation passed.
    fn run(&mut self, ctx: &CommandContext) -> Result<()>;

    /// Cleanup; invoked whenever `run` was entered, even on failure.
    fn teardown(&mut self, _ctx: &CommandContext) {}
}

/// Constructor registered for a controller type.
pub type ControllerFactory = fn() -> Box<dyn Controller>;

/// Phases a controller moves through during one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Uninitialized,
    Booted,
    Validated,
    Ran,
    TornDown,
    Failed,
}

impl LifecyclePhase {
    /// Legal transitions; `TornDown` and `Failed` are terminal.
    pub fn can_advance(self, next: LifecyclePhase) -> bool {
        use LifecyclePhase::*;
        matches!(
            (self, next),
            (Uninitialized, Booted)
                | (Booted, Validated)
                | (Validated, Ran)
                | (Ran, TornDown)
                | (Booted, Failed)
                | (Validated, Failed)
        )
    }
}

/// Checks every required parameter against the parsed call, producing
/// the user-facing validation error for the first one missing.
///
/// The error message falls back to the parameter name when no definition
/// text exists, and to an empty example when no option was declared.
pub fn validate_required(descriptor: &CommandDescriptor, call: &CommandCall) -> Result<()> {
    for name in &descriptor.required_params {
        if !call.has_param(name) {
            let description = descriptor.definition(name).unwrap_or(name).to_string();
            let example = descriptor.option_example(name).unwrap_or("").to_string();
            return Err(Error::MissingParameter {
                description,
                example,
            });
        }
    }
    Ok(())
}

/// Rebuilds the raw command line with sensitive parameter values masked
/// as `name=***`. Flags and positional tokens pass through untouched.
pub fn sanitize_for_log(call: &CommandCall, sensitive: &[String]) -> String {
    call.raw
        .iter()
        .map(|token| match token.split_once('=') {
            Some((key, _)) if sensitive.iter().any(|s| s == key) => format!("{key}=***"),
            _ => token.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn login_descriptor() -> CommandDescriptor {
        CommandDescriptor::new("Stores credentials")
            .option("user", "user=<name>")
            .option("token", "token=<value>")
            .define("user", "Account user name")
            .required("user")
            .required("token")
            .sensitive("token")
    }

    #[test]
    fn descriptor_builder_keeps_declaration_order() {
        let descriptor = login_descriptor();
        assert_eq!(descriptor.options[0].0, "user");
        assert_eq!(descriptor.options[1].0, "token");
        assert_eq!(descriptor.option_example("token"), Some("token=<value>"));
        assert_eq!(descriptor.definition("user"), Some("Account user name"));
        assert_eq!(descriptor.definition("token"), None);
    }

    #[test]
    fn validation_passes_when_all_required_present() {
        let call = CommandCall::parse(&argv(&["prog", "login", "user=amy", "token=abc"]));
        assert!(validate_required(&login_descriptor(), &call).is_ok());
    }

    #[test]
    fn validation_reports_the_first_missing_parameter() {
        let call = CommandCall::parse(&argv(&["prog", "login", "token=abc"]));
        let err = validate_required(&login_descriptor(), &call).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing Parameter: Account user name (user=<name>)"
        );
    }

    #[test]
    fn validation_falls_back_to_the_parameter_name() {
        let descriptor = CommandDescriptor::new("Bare").required("target");
        let call = CommandCall::parse(&argv(&["prog", "x"]));
        let err = validate_required(&descriptor, &call).unwrap_err();
        assert_eq!(err.to_string(), "Missing Parameter: target ()");
    }

    #[test]
    fn sanitize_masks_only_listed_parameters() {
        let call = CommandCall::parse(&argv(&[
            "prog", "login", "user=amy", "token=secret123", "--force",
        ]));
        let sanitized = sanitize_for_log(&call, &["token".to_string()]);
        assert_eq!(sanitized, "prog login user=amy token=*** --force");
    }

    #[test]
    fn sanitize_with_no_sensitive_params_is_the_raw_line() {
        let call = CommandCall::parse(&argv(&["prog", "files", "copy", "from=a", "to=b"]));
        assert_eq!(
            sanitize_for_log(&call, &[]),
            "prog files copy from=a to=b"
        );
    }

    #[test]
    fn lifecycle_permits_only_the_documented_transitions() {
        use LifecyclePhase::*;
        assert!(Uninitialized.can_advance(Booted));
        assert!(Booted.can_advance(Validated));
        assert!(Validated.can_advance(Ran));
        assert!(Ran.can_advance(TornDown));
        assert!(Booted.can_advance(Failed));
        assert!(Validated.can_advance(Failed));

        assert!(!Uninitialized.can_advance(Ran));
        assert!(!Uninitialized.can_advance(Failed));
        assert!(!Ran.can_advance(Failed));
        assert!(!TornDown.can_advance(Booted));
        assert!(!Failed.can_advance(TornDown));
    }
}
