//! Help menu and per-command help screens.
//!
//! [`HelpMenu`] renders the application banner plus one block per
//! registered command; [`HelpScreen`] renders the detail view for a
//! single command from its descriptor. Both write through a [`Printer`]
//! so they stay testable and theme-aware.

use std::collections::BTreeMap;

use crate::call::DEFAULT_SUBCOMMAND;
use crate::context::AppInfo;
use crate::controller::CommandDescriptor;
use crate::output::Printer;
use crate::registry::CommandRegistry;

const INTRO_DELIMITER: &str = "/////////////////////////////////////////////////////////";
const COLUMN_GAP: usize = 4;

/// Detail view for one command.
pub struct HelpScreen<'a> {
    command: String,
    descriptor: &'a CommandDescriptor,
    signature: &'a str,
    see_also: Vec<String>,
}

impl<'a> HelpScreen<'a> {
    /// `command` is the display path, e.g. `files copy`.
    pub fn new(
        command: impl Into<String>,
        descriptor: &'a CommandDescriptor,
        signature: &'a str,
    ) -> Self {
        HelpScreen {
            command: command.into(),
            descriptor,
            signature,
            see_also: Vec::new(),
        }
    }

    /// Related command paths advertised under `See Also:` as
    /// `help <path>` hints.
    pub fn with_see_also(mut self, targets: Vec<String>) -> Self {
        self.see_also = targets;
        self
    }

    pub fn render(&self, printer: &Printer) {
        self.render_usage(printer);
        self.render_options(printer);
        self.render_required(printer);
        self.render_description(printer);
        self.render_see_also(printer);
        self.render_notes(printer);
        printer.newline();
        printer.newline();
    }

    fn render_usage(&self, printer: &Printer) {
        printer.line(&printer.style("Usage:", "info_header"));
        let usage = format!(
            "{} {} [options]",
            printer.style(self.signature, "italic"),
            printer.style(&self.command, "info")
        );
        printer.line(&usage);
        printer.newline();
    }

    fn render_options(&self, printer: &Printer) {
        printer.line(&printer.style("Options:", "info_header"));
        let width = self.option_column_width();
        for (name, example) in &self.descriptor.options {
            let definition = self.descriptor.definition(name).unwrap_or("");
            printer.line(&format!("  {}{definition}", pad(example, width)));
        }
    }

    fn render_required(&self, printer: &Printer) {
        if self.descriptor.required_params.is_empty() {
            return;
        }
        printer.line(&printer.style("Required:", "info_header"));
        let width = self.option_column_width();
        for name in &self.descriptor.required_params {
            // Only parameters declared as options carry enough detail
            // for a help row.
            if self.descriptor.option_example(name).is_none() {
                continue;
            }
            let definition = self.descriptor.definition(name).unwrap_or("");
            printer.line(&format!("  {}{definition}", pad(name, width)));
        }
    }

    fn render_description(&self, printer: &Printer) {
        printer.line(&printer.style("Help:", "info_header"));
        printer.line(&format!("  {}", self.descriptor.description));
    }

    fn render_see_also(&self, printer: &Printer) {
        if self.see_also.is_empty() {
            return;
        }
        printer.line(&printer.style("See Also:", "info_header"));
        for target in &self.see_also {
            printer.line(&format!("  help {target}"));
        }
    }

    fn render_notes(&self, printer: &Printer) {
        if self.descriptor.notes.is_empty() {
            return;
        }
        printer.line(&printer.style("Notes:", "info_header"));
        for line in &self.descriptor.notes {
            printer.line(&format!("   {line}"));
        }
    }

    fn option_column_width(&self) -> usize {
        longest(
            self.descriptor
                .options
                .iter()
                .map(|(_, example)| example.as_str()),
        ) + COLUMN_GAP
    }
}

/// Application banner plus the command listing.
pub struct HelpMenu<'a> {
    info: &'a AppInfo,
    registry: &'a CommandRegistry,
}

impl<'a> HelpMenu<'a> {
    pub fn new(info: &'a AppInfo, registry: &'a CommandRegistry) -> Self {
        HelpMenu { info, registry }
    }

    pub fn render(&self, printer: &Printer) {
        self.render_intro(printer);
        printer.info("Available Commands:");
        self.render_commands(printer);
        printer.newline();
        printer.newline();
    }

    fn render_intro(&self, printer: &Printer) {
        let width = INTRO_DELIMITER.len() - 4;
        printer.line(INTRO_DELIMITER);
        printer.line(&format!("/ {} /", pad(&format!("{}:", self.info.name), width)));
        printer.line(&format!("/ {} /", pad(&self.info.description, width)));
        printer.line(INTRO_DELIMITER);
        printer.newline();
    }

    /// One block per command, `help` itself always listed last.
    fn render_commands(&self, printer: &Printer) {
        let map = self.registry.command_map();
        let width = column_width(&map);
        for (command, subcommands) in &map {
            if command == "help" {
                continue;
            }
            self.render_command(printer, width, command, subcommands);
        }
        if let Some(subcommands) = map.get("help") {
            self.render_command(printer, width, "help", subcommands);
        }
    }

    fn render_command(
        &self,
        printer: &Printer,
        width: usize,
        command: &str,
        subcommands: &[String],
    ) {
        // Namespaces without a default controller have no headline row,
        // only their subcommand rows.
        if let Some(description) = self.registry.describe(command, DEFAULT_SUBCOMMAND) {
            printer.newline();
            printer.line(&format!(
                "{}{description}",
                printer.style(&pad(command, width), "info")
            ));
        }
        for subcommand in subcommands {
            if subcommand == DEFAULT_SUBCOMMAND {
                continue;
            }
            if let Some(description) = self.registry.describe(command, subcommand) {
                printer.newline();
                let label = format!("  {subcommand}");
                printer.line(&format!(
                    "{}{description}",
                    printer.style(&pad(&label, width), "info")
                ));
            }
        }
        printer.newline();
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn longest<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(str::len).max().unwrap_or(0)
}

fn column_width(map: &BTreeMap<String, Vec<String>>) -> usize {
    let mut labels: Vec<String> = Vec::new();
    for (command, subcommands) in map {
        labels.push(command.clone());
        for subcommand in subcommands {
            labels.push(format!("  {subcommand}"));
        }
    }
    longest(labels.iter().map(String::as_str)) + COLUMN_GAP
}
