//! Parsed command-line invocations.
//!
//! [`CommandCall::parse`] classifies raw argv tokens into positional
//! arguments, `key=value` parameters and `-`/`--` flags. Parsing never
//! fails: tokens that fit no special shape stay positional so controllers
//! can still inspect them.

use std::collections::HashMap;

/// Subcommand assumed when the invocation names only a command.
pub const DEFAULT_SUBCOMMAND: &str = "default";

/// One parsed invocation.
///
/// `raw` preserves the original argv in order, program name included.
/// Log sanitisation works from `raw` so masked entries still read like
/// the command the user typed.
#[derive(Debug, Clone, Default)]
pub struct CommandCall {
    /// Command token, empty when the program was called bare.
    pub command: String,
    /// Subcommand token, [`DEFAULT_SUBCOMMAND`] when absent.
    pub subcommand: String,
    /// Positional tokens in order, program name first.
    pub args: Vec<String>,
    /// `key=value` tokens, split on the first `=`. Repeats keep the last
    /// value.
    pub params: HashMap<String, String>,
    /// Tokens starting with `-` or `--`, stored verbatim.
    pub flags: Vec<String>,
    /// The unmodified argv.
    pub raw: Vec<String>,
}

impl CommandCall {
    /// Parses an argv slice. The first element is expected to be the
    /// program name, matching what [`std::env::args`] yields.
    ///
    /// A token containing `=` is always a parameter, even when it starts
    /// with a dash. Bare `-` and `--` count as flags.
    pub fn parse(argv: &[String]) -> Self {
        let mut args = Vec::new();
        let mut params = HashMap::new();
        let mut flags = Vec::new();

        for token in argv {
            if let Some((key, value)) = token.split_once('=') {
                params.insert(key.to_string(), value.to_string());
            } else if token.starts_with('-') {
                flags.push(token.clone());
            } else {
                args.push(token.clone());
            }
        }

        let command = args.get(1).cloned().unwrap_or_default();
        let subcommand = args
            .get(2)
            .cloned()
            .unwrap_or_else(|| DEFAULT_SUBCOMMAND.to_string());

        CommandCall {
            command,
            subcommand,
            args,
            params,
            flags,
            raw: argv.to_vec(),
        }
    }

    /// Whether the parser saw a `name=value` token.
    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Parameter value, or `default` when absent.
    pub fn param_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.param(name).unwrap_or(default)
    }

    /// Boolean parameter: only `y` and `true` count as set, any case.
    pub fn param_bool(&self, name: &str) -> bool {
        match self.param(name) {
            Some(value) => {
                let value = value.to_lowercase();
                value == "y" || value == "true"
            }
            None => false,
        }
    }

    /// Integer parameter read from the leading digits of the value.
    /// Absent or non-numeric values yield 0.
    pub fn param_int(&self, name: &str) -> i64 {
        self.param(name).map(leading_int).unwrap_or(0)
    }

    /// Delimited list parameter; absent parameters yield an empty list.
    pub fn param_array(&self, name: &str, delimiter: char) -> Vec<String> {
        match self.param(name) {
            Some(value) => value.split(delimiter).map(str::to_string).collect(),
            None => Vec::new(),
        }
    }

    /// Whether `flag` was passed, with or without its `--` prefix.
    pub fn has_flag(&self, flag: &str) -> bool {
        let prefixed = format!("--{flag}");
        self.flags.iter().any(|f| f == flag || *f == prefixed)
    }

    /// Last positional token, `None` for an empty argv.
    pub fn last_arg(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

impl From<Vec<String>> for CommandCall {
    fn from(argv: Vec<String>) -> Self {
        CommandCall::parse(&argv)
    }
}

fn leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    let magnitude = digits
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    if negative {
        magnitude.checked_neg().unwrap_or(i64::MIN)
    } else {
        magnitude
    }
}
