//! The `help` namespace: command menu and per-command screens.

use steer_core::{
    not_found_message, CommandContext, CommandDescriptor, Controller, HelpMenu, HelpScreen, Result,
    DEFAULT_SUBCOMMAND,
};

/// Shows the command menu, or the detail screen for
/// `help <command> [<subcommand>]`.
pub struct DefaultController;

impl DefaultController {
    pub fn boxed() -> Box<dyn Controller> {
        Box::new(DefaultController)
    }
}

impl Controller for DefaultController {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("Lists commands, or details one with help <command> [<subcommand>]")
    }

    fn run(&mut self, ctx: &CommandContext) -> Result<()> {
        let Some(command) = ctx.call.args.get(2) else {
            HelpMenu::new(&ctx.info, &ctx.registry).render(&ctx.printer);
            return Ok(());
        };
        let subcommand = ctx
            .call
            .args
            .get(3)
            .map(String::as_str)
            .unwrap_or(DEFAULT_SUBCOMMAND);

        let Some(entry) = ctx.registry.lookup(command, subcommand) else {
            ctx.printer.error(&not_found_message(command, subcommand));
            return Ok(());
        };

        let command = command.to_lowercase();
        let subcommand = subcommand.to_lowercase();
        let map = ctx.registry.command_map();
        let subcommands = map.get(&command);
        // An unmapped subcommand resolved through the default entry, so
        // the screen is titled with the command alone.
        let exact = subcommands
            .map(|subs| subs.iter().any(|sub| *sub == subcommand))
            .unwrap_or(false);
        let path = if exact && subcommand != DEFAULT_SUBCOMMAND {
            format!("{command} {subcommand}")
        } else {
            command.clone()
        };
        let siblings: Vec<String> = subcommands
            .map(|subs| {
                subs.iter()
                    .filter(|sub| sub.as_str() != DEFAULT_SUBCOMMAND && **sub != subcommand)
                    .map(|sub| format!("{command} {sub}"))
                    .collect()
            })
            .unwrap_or_default();

        HelpScreen::new(path, &entry.descriptor, &ctx.info.signature)
            .with_see_also(siblings)
            .render(&ctx.printer);
        Ok(())
    }
}
