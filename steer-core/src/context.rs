//! Execution context handed to controllers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::call::CommandCall;
use crate::controller::{sanitize_for_log, CommandDescriptor};
use crate::env::Env;
use crate::logging::{Logger, LOG_ERRORS_VAR};
use crate::output::Printer;
use crate::registry::CommandRegistry;
use crate::session::SessionStore;

/// Application identity shared with controllers for banners and usage
/// lines.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub name: String,
    pub description: String,
    pub signature: String,
    pub version: String,
}

/// Everything a controller can touch while handling one invocation.
///
/// Contexts are built per dispatch; the session store starts empty and
/// dies with the context.
pub struct CommandContext {
    pub call: CommandCall,
    pub descriptor: CommandDescriptor,
    pub info: Rc<AppInfo>,
    pub registry: Rc<CommandRegistry>,
    pub printer: Rc<Printer>,
    pub log: Rc<Logger>,
    pub env: Rc<Env>,
    pub session: RefCell<SessionStore>,
}

impl CommandContext {
    pub fn new(
        call: CommandCall,
        descriptor: CommandDescriptor,
        info: Rc<AppInfo>,
        registry: Rc<CommandRegistry>,
        printer: Rc<Printer>,
        log: Rc<Logger>,
        env: Rc<Env>,
    ) -> Self {
        CommandContext {
            call,
            descriptor,
            info,
            registry,
            printer,
            log,
            env,
            session: RefCell::new(SessionStore::new()),
        }
    }

    /// The raw command line with sensitive values masked.
    pub fn sanitized_command(&self) -> String {
        sanitize_for_log(&self.call, &self.descriptor.sensitive_params)
    }

    /// Prints an error and, when `LOG.ERRORS` is switched on, records it
    /// against the sanitised command line.
    pub fn report_error(&self, message: &str) {
        self.printer.error(message);
        if self.env.flag_enabled(LOG_ERRORS_VAR) {
            self.log
                .error(&Logger::join_tabbed(&[&self.sanitized_command(), message]));
        }
    }
}
