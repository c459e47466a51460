//! The `files` namespace: copy and read.

use steer_core::files;
use steer_core::{CommandContext, CommandDescriptor, Controller, Error, Result};

/// Copies one file to a new location.
pub struct CopyController;

impl CopyController {
    pub fn boxed() -> Box<dyn Controller> {
        Box::new(CopyController)
    }
}

impl Controller for CopyController {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("Copies a file")
            .option("from", "from=<path>")
            .option("to", "to=<path>")
            .define("from", "Source file path")
            .define("to", "Destination file path")
            .required("from")
            .required("to")
            .note("Destination directories are created as needed.")
    }

    fn run(&mut self, ctx: &CommandContext) -> Result<()> {
        let from = ctx.call.param_or("from", "");
        let to = ctx.call.param_or("to", "");
        match files::copy(from, to) {
            Ok(bytes) => {
                ctx.printer
                    .success(&format!("Copied {from} to {to} ({bytes} bytes)"));
                Ok(())
            }
            Err(err @ Error::SourceMissing { .. }) => {
                ctx.report_error(&err.to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Prints a file to the terminal, optionally limited to the first
/// lines.
pub struct ReadController;

impl ReadController {
    pub fn boxed() -> Box<dyn Controller> {
        Box::new(ReadController)
    }
}

impl Controller for ReadController {
    fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new("Prints a file to the terminal")
            .option("path", "path=<file>")
            .option("lines", "lines=<n>")
            .define("path", "File to print")
            .define("lines", "Limit output to the first n lines")
            .required("path")
    }

    fn run(&mut self, ctx: &CommandContext) -> Result<()> {
        let path = ctx.call.param_or("path", "");
        let text = match files::read(path) {
            Ok(text) => text,
            Err(err @ Error::SourceMissing { .. }) => {
                ctx.report_error(&err.to_string());
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let limit = ctx.call.param_int("lines");
        for (index, line) in text.lines().enumerate() {
            if limit > 0 && index as i64 >= limit {
                break;
            }
            ctx.printer.line(line);
        }
        Ok(())
    }
}
