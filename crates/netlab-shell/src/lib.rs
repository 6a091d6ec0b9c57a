//! Simulated terminal for the NETLAB sandbox.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter parses input
//! lines (first pipe stage only, plus an optional `| grep <pattern>` filter),
//! checks the install gate, and dispatches `execute()`. A `Session` wraps
//! registry, state, and scrollback into the single reducer the UI drives.

pub mod admin_commands;
mod interpreter;
pub mod network_commands;
mod session;
mod shell_commands;
mod state;
pub mod vpn_commands;

/// Register the administration commands (apt, ip, ufw, ...) into a registry.
pub use admin_commands::register_admin_commands;
/// A single simulated command trait.
pub use interpreter::Command;
/// Output produced by a command (lines, clear, silent).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// An input line parsed into base, args, and grep pattern.
pub use interpreter::{ParsedLine, parse_line};
/// Register the network tool commands (nmap, ping, dig, ...) into a registry.
pub use network_commands::register_network_commands;
/// One terminal session: registry, state, and scrollback.
pub use session::{Session, Turn};
/// Register the shell builtins (ls, cd, cat, ...) into a registry.
pub use shell_commands::register_shell_commands;
/// Mutable shell state and the simulated installed-package set.
pub use state::{InstalledSet, ShellState};
/// Register the VPN and PKI commands (wg, openvpn, ...) into a registry.
pub use vpn_commands::register_vpn_commands;

/// Register the full NETLAB command set into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    register_shell_commands(reg);
    register_network_commands(reg);
    register_admin_commands(reg);
    register_vpn_commands(reg);
}
