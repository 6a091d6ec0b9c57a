//! Shell builtins: clear, ls, pwd, whoami, cd, echo, cat.

use netlab_fs::resolve_path;

use crate::interpreter::{Command, CommandOutput};
use crate::state::ShellState;

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal scrollback"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Clear
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List the working directory"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], state: &mut ShellState) -> CommandOutput {
        // A cwd absent from the table lists as empty, not as an error.
        match state.fs.list(&state.cwd) {
            Some(entries) => CommandOutput::Lines(entries.to_vec()),
            None => CommandOutput::None,
        }
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print the working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], state: &mut ShellState) -> CommandOutput {
        CommandOutput::line(state.pwd())
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Print the current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::line("root")
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change the working directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], state: &mut ShellState) -> CommandOutput {
        state.change_dir(args.first().copied());
        CommandOutput::None
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print arguments"
    }
    fn usage(&self) -> &str {
        "echo [words...]"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::line(args.join(" "))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Print a file's contents"
    }
    fn usage(&self) -> &str {
        "cat <file>"
    }
    fn category(&self) -> &str {
        "shell"
    }
    fn execute(&self, args: &[&str], state: &mut ShellState) -> CommandOutput {
        let Some(&arg) = args.first() else {
            return CommandOutput::None;
        };
        let path = resolve_path(&state.cwd, arg);
        match state.fs.read_file(&path) {
            Some(content) => CommandOutput::Lines(content.lines().map(str::to_string).collect()),
            None => CommandOutput::line(format!("cat: {arg}: No such file or directory")),
        }
    }
}

/// Register the shell builtins.
pub fn register_shell_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(CatCmd));
}
