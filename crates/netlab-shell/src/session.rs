//! Session wrapper: prompt, history, and the single-line reducer.

use crate::interpreter::{CommandOutput, CommandRegistry};
use crate::state::ShellState;

/// Result of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Output lines produced by the command (already grep-filtered).
    pub output: Vec<String>,
    /// Whether the line cleared the scrollback.
    pub cleared: bool,
}

/// One terminal session: registry, state, and append-only scrollback.
///
/// `eval` is the reducer the whole simulator hangs off: it captures the
/// prompt with the pre-dispatch working directory, echoes the input, runs
/// the dispatcher, and appends the resulting lines. All of it is
/// synchronous; nothing is shared between sessions.
pub struct Session {
    registry: CommandRegistry,
    state: ShellState,
    history: Vec<String>,
}

impl Session {
    /// Fresh session with the full command set and seeded state.
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::with_builtins(),
            state: ShellState::seeded(),
            history: Vec::new(),
        }
    }

    /// Session with a caller-supplied registry and state.
    pub fn with_parts(registry: CommandRegistry, state: ShellState) -> Self {
        Self {
            registry,
            state,
            history: Vec::new(),
        }
    }

    /// The prompt for the next input line.
    pub fn prompt(&self) -> String {
        format!("root@netlab:{}# ", self.state.cwd)
    }

    /// The scrollback so far.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The current shell state (read-only).
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Evaluate one input line.
    ///
    /// The echoed prompt+command and every output line land in history as
    /// separate entries; a clearing command instead empties history and
    /// retains nothing, not even its own echo.
    pub fn eval(&mut self, line: &str) -> Turn {
        let echoed = format!("{}{}", self.prompt(), line.trim());
        match self.registry.execute(line, &mut self.state) {
            CommandOutput::Clear => {
                self.history.clear();
                Turn {
                    output: Vec::new(),
                    cleared: true,
                }
            },
            CommandOutput::None => {
                self.history.push(echoed);
                Turn {
                    output: Vec::new(),
                    cleared: false,
                }
            },
            CommandOutput::Lines(lines) => {
                self.history.push(echoed);
                self.history.extend(lines.iter().cloned());
                Turn {
                    output: lines,
                    cleared: false,
                }
            },
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
