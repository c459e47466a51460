//! The `about` command.

use steer_core::{CommandContext, CommandDescriptor, Controller, Result};

/// Prints the application name, version and description.
pub struct AboutController;

impl AboutController {
    pub fn boxed() -> Box<dyn Controller> {
        Box::new(AboutController)
    }
}

impl Controller for AboutController {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("Prints version and build information")
    }

    fn run(&mut self, ctx: &CommandContext) -> Result<()> {
        ctx.printer
            .line(&format!("{} {}", ctx.info.name, ctx.info.version));
        ctx.printer.line(&ctx.info.description);
        Ok(())
    }
}
