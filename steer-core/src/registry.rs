//! Command lookup tables built from registration declarations.
//!
//! Applications declare their commands as [`CommandSource`] values. At
//! build time the registry instantiates each controller once to capture
//! its descriptor, then serves factory plus descriptor on lookup for the
//! life of the process.

use std::collections::{BTreeMap, HashMap};

use crate::call::DEFAULT_SUBCOMMAND;
use crate::controller::{CommandDescriptor, ControllerFactory};
use crate::error::{Error, Result};

/// One controller type registered under a derived command key.
#[derive(Debug, Clone, Copy)]
pub struct ControllerSpec {
    /// Type name the command key is derived from; `SyncController`
    /// registers as `sync`.
    pub type_name: &'static str,
    pub factory: ControllerFactory,
}

impl ControllerSpec {
    pub const fn new(type_name: &'static str, factory: ControllerFactory) -> Self {
        ControllerSpec { type_name, factory }
    }

    /// Command key for this controller.
    pub fn command_key(&self) -> String {
        command_key(self.type_name)
    }
}

/// Derives a lookup key from a controller type name: a conventional
/// `Controller` suffix is dropped and the remainder lowercased.
pub fn command_key(type_name: &str) -> String {
    type_name
        .strip_suffix("Controller")
        .unwrap_or(type_name)
        .to_lowercase()
}

/// Registration declarations an application hands to the registry.
pub enum CommandSource {
    /// A single controller answering every subcommand of `command`.
    Single {
        command: &'static str,
        spec: ControllerSpec,
    },
    /// A namespace whose subcommand keys are derived from the controller
    /// type names.
    Namespace {
        name: &'static str,
        controllers: Vec<ControllerSpec>,
    },
}

/// Resolved dispatch target: how to build the controller and what it
/// declared about itself.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub factory: ControllerFactory,
    pub descriptor: CommandDescriptor,
}

#[derive(Debug)]
enum NamespaceTable {
    Single(RegistryEntry),
    Grouped(HashMap<String, RegistryEntry>),
}

/// Immutable command lookup structure.
#[derive(Debug)]
pub struct CommandRegistry {
    namespaces: HashMap<String, NamespaceTable>,
}

impl CommandRegistry {
    /// Builds the registry from registration declarations. Duplicate
    /// command or subcommand keys fail construction.
    pub fn build(sources: Vec<CommandSource>) -> Result<Self> {
        let mut namespaces: HashMap<String, NamespaceTable> = HashMap::new();

        for source in sources {
            match source {
                CommandSource::Single { command, spec } => {
                    let key = command.to_lowercase();
                    if namespaces.contains_key(&key) {
                        return Err(Error::DuplicateCommand {
                            namespace: key.clone(),
                            command: key,
                        });
                    }
                    namespaces.insert(key, NamespaceTable::Single(entry_for(&spec)));
                }
                CommandSource::Namespace { name, controllers } => {
                    let namespace = name.to_lowercase();
                    if namespaces.contains_key(&namespace) {
                        return Err(Error::DuplicateCommand {
                            namespace: namespace.clone(),
                            command: namespace,
                        });
                    }
                    let mut table: HashMap<String, RegistryEntry> = HashMap::new();
                    for spec in &controllers {
                        let key = spec.command_key();
                        if table.contains_key(&key) {
                            return Err(Error::DuplicateCommand {
                                namespace: namespace.clone(),
                                command: key,
                            });
                        }
                        table.insert(key, entry_for(spec));
                    }
                    namespaces.insert(namespace, NamespaceTable::Grouped(table));
                }
            }
        }

        Ok(CommandRegistry { namespaces })
    }

    /// Looks up the controller for a command/subcommand pair.
    ///
    /// Matching is case-insensitive. A single-controller command answers
    /// regardless of subcommand; a grouped namespace falls back to its
    /// `default` key when the subcommand has no entry of its own.
    pub fn lookup(&self, command: &str, subcommand: &str) -> Option<&RegistryEntry> {
        match self.namespaces.get(&command.to_lowercase())? {
            NamespaceTable::Single(entry) => Some(entry),
            NamespaceTable::Grouped(table) => {
                let key = subcommand.to_lowercase();
                table.get(&key).or_else(|| table.get(DEFAULT_SUBCOMMAND))
            }
        }
    }

    /// Whether a command namespace exists at all.
    pub fn contains(&self, command: &str) -> bool {
        self.namespaces.contains_key(&command.to_lowercase())
    }

    /// Stable command map for help rendering: command to sorted
    /// subcommand keys, empty for single-controller commands.
    pub fn command_map(&self) -> BTreeMap<String, Vec<String>> {
        self.namespaces
            .iter()
            .map(|(name, table)| {
                let subcommands = match table {
                    NamespaceTable::Single(_) => Vec::new(),
                    NamespaceTable::Grouped(map) => {
                        let mut keys: Vec<String> = map.keys().cloned().collect();
                        keys.sort();
                        keys
                    }
                };
                (name.clone(), subcommands)
            })
            .collect()
    }

    /// Help description for a command/subcommand pair.
    pub fn describe(&self, command: &str, subcommand: &str) -> Option<&str> {
        self.lookup(command, subcommand)
            .map(|entry| entry.descriptor.description.as_str())
    }
}

fn entry_for(spec: &ControllerSpec) -> RegistryEntry {
    let controller = (spec.factory)();
    RegistryEntry {
        factory: spec.factory,
        descriptor: controller.descriptor(),
    }
}
