//! Command trait, registry, and dispatch logic.
//!
//! Dispatch is table-driven: commands implement the `Command` trait and are
//! registered by name. The interpreter splits an input line on `|`, tokenizes
//! the first stage on whitespace, checks the install gate, executes, and
//! applies an optional `grep` substring filter to the output lines.

use std::collections::{BTreeMap, HashMap};

use crate::state::ShellState;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text lines, one history entry each.
    Lines(Vec<String>),
    /// Signal to the session to empty its history.
    Clear,
    /// Command produced no visible output.
    None,
}

impl CommandOutput {
    /// Shorthand for a single-line text output.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Lines(vec![s.into()])
    }
}

/// A single simulated command.
///
/// Commands never fail: the only user-visible error in the sandbox is the
/// "command not found" line, and the registry emits that before a command
/// ever runs. `execute` always terminates with zero or more output lines.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for the session banner.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd \[dir\]").
    fn usage(&self) -> &str;

    /// Command category for grouping.
    fn category(&self) -> &str {
        "general"
    }

    /// Package names that satisfy this command's install gate.
    ///
    /// Empty means the command is always available. Otherwise any one listed
    /// package present in the installed set unlocks the command; with none
    /// present the registry reports "command not found" instead of running it.
    fn packages(&self) -> &[&str] {
        &[]
    }

    /// Execute the command with the given arguments and shell state.
    fn execute(&self, args: &[&str], state: &mut ShellState) -> CommandOutput;
}

/// An input line parsed into its dispatchable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// First whitespace token of the first pipe stage (after `sudo` strip).
    pub base: String,
    /// Remaining tokens of the first pipe stage.
    pub args: Vec<String>,
    /// Pattern of the first `grep <pattern>` pipe stage, if any.
    pub grep: Option<String>,
}

/// Parse one raw input line.
///
/// The line is split on `|`; the first segment is tokenized on plain
/// whitespace (no quoting, no globs, no variables). A leading `sudo` token
/// is stripped. Later pipe stages are scanned for the first one whose
/// command is `grep` with an argument; every other stage is ignored.
/// Returns `None` for blank input (or a bare `sudo`).
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut stages = trimmed.split('|');
    let first = stages.next()?;

    let mut tokens = first.split_whitespace().map(str::to_string);
    let mut base = tokens.next()?;
    let mut args: Vec<String> = tokens.collect();
    if base == "sudo" {
        if args.is_empty() {
            return None;
        }
        base = args.remove(0);
    }

    let grep = stages.find_map(|stage| {
        let mut tokens = stage.split_whitespace();
        match tokens.next() {
            Some("grep") => tokens.next().map(str::to_string),
            _ => None,
        }
    });

    Some(ParsedLine { base, args, grep })
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create a registry with the full NETLAB command set.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        crate::register_builtins(&mut reg);
        reg
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Look up a registered command by name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(Box::as_ref)
    }

    /// Commands grouped by category, for the session banner.
    ///
    /// Categories come back sorted, names sorted within each.
    pub fn list_by_category(&self) -> Vec<(&str, Vec<(&str, &str)>)> {
        let mut categories: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
        for cmd in self.commands.values() {
            categories
                .entry(cmd.category())
                .or_default()
                .push((cmd.name(), cmd.description()));
        }
        let mut grouped: Vec<(&str, Vec<(&str, &str)>)> = categories.into_iter().collect();
        for (_, cmds) in &mut grouped {
            cmds.sort_by_key(|(name, _)| *name);
        }
        grouped
    }

    /// Parse and execute a command line against `state`.
    ///
    /// Unknown names produce the single line
    /// `bash: <name>: command not found (simulation)`; known names whose
    /// install gate is unsatisfied produce `bash: <name>: command not found`.
    /// Text output passes through the grep filter when the line piped into
    /// one; `Clear` and `None` pass through untouched.
    pub fn execute(&self, line: &str, state: &mut ShellState) -> CommandOutput {
        let Some(ParsedLine { base, args, grep }) = parse_line(line) else {
            return CommandOutput::None;
        };

        let output = match self.commands.get(&base) {
            None => CommandOutput::line(format!("bash: {base}: command not found (simulation)")),
            Some(cmd) if !gate_open(cmd.as_ref(), state) => {
                CommandOutput::line(format!("bash: {base}: command not found"))
            },
            Some(cmd) => {
                log::debug!("dispatch: {base} ({} args)", args.len());
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                cmd.execute(&args, state)
            },
        };

        match (output, grep) {
            (CommandOutput::Lines(lines), Some(pattern)) => CommandOutput::Lines(
                lines.into_iter().filter(|l| l.contains(&pattern)).collect(),
            ),
            (output, _) => output,
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a command's install gate is satisfied by the current state.
fn gate_open(cmd: &dyn Command, state: &ShellState) -> bool {
    let packages = cmd.packages();
    packages.is_empty() || packages.iter().any(|p| state.installed.contains(p))
}
