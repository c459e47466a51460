//! The `login` command.

use serde_json::json;
use steer_core::{CommandContext, CommandDescriptor, Controller, Result};

/// Validates credentials and stores them in the invocation session.
pub struct LoginController;

impl LoginController {
    pub fn boxed() -> Box<dyn Controller> {
        Box::new(LoginController)
    }
}

impl Controller for LoginController {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("Stores credentials for the invocation")
            .option("user", "user=<name>")
            .option("token", "token=<value>")
            .define("user", "Account user name")
            .define("token", "API token used to authenticate")
            .required("user")
            .required("token")
            .sensitive("token")
            .note("The token value never reaches the log files.")
    }

    fn run(&mut self, ctx: &CommandContext) -> Result<()> {
        let user = ctx.call.param_or("user", "");
        let token = ctx.call.param_or("token", "");
        {
            let mut session = ctx.session.borrow_mut();
            session.set_in("auth", "user", user);
            session.set_in("auth", "token", token);
        }
        ctx.log.info_with("login", &json!({ "user": user }));
        ctx.printer.success(&format!("Authenticated as {user}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::testutil;
    use tempfile::TempDir;

    #[test]
    fn login_stores_credentials_in_the_auth_scope() {
        let logs = TempDir::new().unwrap();
        let (ctx, captured) = testutil::context(
            &["steer", "login", "user=amy", "token=secret123"],
            LoginController.descriptor(),
            testutil::empty_env(),
            &logs,
        );
        LoginController.run(&ctx).unwrap();

        assert!(captured.contents().contains("Authenticated as amy"));
        let session = ctx.session.borrow();
        assert_eq!(session.get_in("auth", "user"), Some("amy"));
        assert_eq!(session.get_in("auth", "token"), Some("secret123"));
    }

    #[test]
    fn login_records_the_user_in_the_info_log() {
        let logs = TempDir::new().unwrap();
        let (ctx, _captured) = testutil::context(
            &["steer", "login", "user=amy", "token=secret123"],
            LoginController.descriptor(),
            testutil::empty_env(),
            &logs,
        );
        LoginController.run(&ctx).unwrap();

        let info = std::fs::read_to_string(logs.path().join("info.log")).unwrap();
        assert!(info.contains(r#"login - {"user":"amy"}"#));
        assert!(!info.contains("secret123"));
    }
}
