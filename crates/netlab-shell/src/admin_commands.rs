//! System administration tools: apt, ip, ufw, sysctl, iptables, systemctl.

use crate::interpreter::{Command, CommandOutput};
use crate::state::ShellState;

// ---------------------------------------------------------------------------
// apt
// ---------------------------------------------------------------------------

struct AptCmd;
impl Command for AptCmd {
    fn name(&self) -> &str {
        "apt"
    }
    fn description(&self) -> &str {
        "Manage simulated packages"
    }
    fn usage(&self) -> &str {
        "apt install <pkgs...> | apt update"
    }
    fn category(&self) -> &str {
        "admin"
    }
    fn execute(&self, args: &[&str], state: &mut ShellState) -> CommandOutput {
        match args.first().copied() {
            Some("install") => {
                let packages: Vec<&str> = args[1..]
                    .iter()
                    .filter(|a| !a.starts_with('-'))
                    .copied()
                    .collect();
                let mut lines = vec![
                    "Reading package lists... Done".to_string(),
                    "Building dependency tree... Done".to_string(),
                    "Reading state information... Done".to_string(),
                ];
                if packages.is_empty() {
                    lines.push(
                        "0 upgraded, 0 newly installed, 0 to remove and 0 not upgraded."
                            .to_string(),
                    );
                    return CommandOutput::Lines(lines);
                }
                lines.push("The following NEW packages will be installed:".to_string());
                lines.push(format!("  {}", packages.join(" ")));
                lines.push(format!(
                    "0 upgraded, {} newly installed, 0 to remove and 0 not upgraded.",
                    packages.len(),
                ));
                for pkg in &packages {
                    state.installed.add(pkg);
                    lines.push(format!("Setting up {pkg} ..."));
                }
                lines.push("Processing triggers for man-db ...".to_string());
                CommandOutput::Lines(lines)
            },
            Some("update") => CommandOutput::Lines(vec![
                "Hit:1 http://archive.ubuntu.com/ubuntu focal InRelease".to_string(),
                "Get:2 http://archive.ubuntu.com/ubuntu focal-updates InRelease [114 kB]"
                    .to_string(),
                "Fetched 114 kB in 1s (98.3 kB/s)".to_string(),
                "Reading package lists... Done".to_string(),
                "Building dependency tree... Done".to_string(),
                "All packages are up to date.".to_string(),
            ]),
            Some(sub) => CommandOutput::line(format!("E: Invalid operation {sub}")),
            None => CommandOutput::Lines(vec![
                "apt 2.0.10 (amd64)".to_string(),
                "Usage: apt [options] command".to_string(),
            ]),
        }
    }
}

// ---------------------------------------------------------------------------
// ip
// ---------------------------------------------------------------------------

fn link_lines() -> Vec<String> {
    vec![
        "1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN mode DEFAULT \
         group default qlen 1000"
            .to_string(),
        "    link/loopback 00:00:00:00:00:00 brd 00:00:00:00:00:00".to_string(),
        "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP \
         mode DEFAULT group default qlen 1000"
            .to_string(),
        "    link/ether 02:42:ac:11:00:02 brd ff:ff:ff:ff:ff:ff".to_string(),
        "3: wg0: <POINTOPOINT,NOARP,UP,LOWER_UP> mtu 1420 qdisc noqueue state UNKNOWN \
         mode DEFAULT group default qlen 1000"
            .to_string(),
        "    link/none".to_string(),
    ]
}

struct IpCmd;
impl Command for IpCmd {
    fn name(&self) -> &str {
        "ip"
    }
    fn description(&self) -> &str {
        "Show addresses, links, and routes"
    }
    fn usage(&self) -> &str {
        "ip addr|link|route"
    }
    fn category(&self) -> &str {
        "admin"
    }
    fn packages(&self) -> &[&str] {
        &["iproute2"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        match args.first().copied() {
            Some("addr" | "a") => CommandOutput::Lines(vec![
                "1: lo: <LOOPBACK,UP,LOWER_UP> mtu 65536 qdisc noqueue state UNKNOWN \
                 group default qlen 1000"
                    .to_string(),
                "    inet 127.0.0.1/8 scope host lo".to_string(),
                "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP \
                 group default qlen 1000"
                    .to_string(),
                "    link/ether 02:42:ac:11:00:02 brd ff:ff:ff:ff:ff:ff".to_string(),
                "    inet 192.168.1.10/24 brd 192.168.1.255 scope global dynamic eth0"
                    .to_string(),
                "3: wg0: <POINTOPOINT,NOARP,UP,LOWER_UP> mtu 1420 qdisc noqueue state UNKNOWN \
                 group default qlen 1000"
                    .to_string(),
                "    inet 10.0.0.2/24 scope global wg0".to_string(),
            ]),
            Some("link") => CommandOutput::Lines(link_lines()),
            Some("route") => CommandOutput::Lines(vec![
                "default via 192.168.1.1 dev eth0 proto dhcp metric 100".to_string(),
                "10.0.0.0/24 dev wg0 proto kernel scope link src 10.0.0.2".to_string(),
                "192.168.1.0/24 dev eth0 proto kernel scope link src 192.168.1.10 metric 100"
                    .to_string(),
            ]),
            Some(obj) => CommandOutput::line(format!("Object \"{obj}\" is unknown, try \"ip help\".")),
            None => CommandOutput::line("Usage: ip [ OPTIONS ] OBJECT { COMMAND | help }"),
        }
    }
}

// ---------------------------------------------------------------------------
// ufw
// ---------------------------------------------------------------------------

struct UfwCmd;
impl Command for UfwCmd {
    fn name(&self) -> &str {
        "ufw"
    }
    fn description(&self) -> &str {
        "Manage the simulated firewall"
    }
    fn usage(&self) -> &str {
        "ufw enable|disable|status|allow|deny|default"
    }
    fn category(&self) -> &str {
        "admin"
    }
    fn packages(&self) -> &[&str] {
        &["ufw"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        match args.first().copied() {
            Some("enable") => {
                CommandOutput::line("Firewall is active and enabled on system startup")
            },
            Some("disable") => {
                CommandOutput::line("Firewall stopped and disabled on system startup")
            },
            Some("status") => CommandOutput::Lines(vec![
                "Status: active".to_string(),
                String::new(),
                "To                         Action      From".to_string(),
                "--                         ------      ----".to_string(),
                "22/tcp                     ALLOW       Anywhere".to_string(),
                "51820/udp                  ALLOW       Anywhere".to_string(),
            ]),
            Some("allow" | "deny") => CommandOutput::Lines(vec![
                "Rule added".to_string(),
                "Rule added (v6)".to_string(),
            ]),
            Some("default") => {
                let policy = args.get(1).copied().unwrap_or("deny");
                let direction = args.get(2).copied().unwrap_or("incoming");
                CommandOutput::line(format!(
                    "Default {direction} policy changed to '{policy}'"
                ))
            },
            _ => CommandOutput::line("Usage: ufw COMMAND"),
        }
    }
}

// ---------------------------------------------------------------------------
// sysctl
// ---------------------------------------------------------------------------

struct SysctlCmd;
impl Command for SysctlCmd {
    fn name(&self) -> &str {
        "sysctl"
    }
    fn description(&self) -> &str {
        "Read or set kernel parameters"
    }
    fn usage(&self) -> &str {
        "sysctl [-w] variable[=value]"
    }
    fn category(&self) -> &str {
        "admin"
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        match args.first().copied() {
            Some("-w") => match args.get(1).and_then(|a| a.split_once('=')) {
                Some((key, value)) => CommandOutput::line(format!("{key} = {value}")),
                None => CommandOutput::line("sysctl: -w requires variable=value"),
            },
            Some(key) => CommandOutput::line(format!("{key} = 1")),
            None => CommandOutput::line("usage: sysctl [-w] variable[=value]"),
        }
    }
}

// ---------------------------------------------------------------------------
// iptables
// ---------------------------------------------------------------------------

struct IptablesCmd;
impl Command for IptablesCmd {
    fn name(&self) -> &str {
        "iptables"
    }
    fn description(&self) -> &str {
        "List or edit simulated packet filter rules"
    }
    fn usage(&self) -> &str {
        "iptables -L | iptables <rule-spec>"
    }
    fn category(&self) -> &str {
        "admin"
    }
    fn packages(&self) -> &[&str] {
        &["iptables"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        if args.is_empty() {
            return CommandOutput::Lines(vec![
                "iptables v1.8.4 (legacy): no command specified".to_string(),
                "Try `iptables -h' or 'iptables --help' for more information.".to_string(),
            ]);
        }
        if args.contains(&"-L") {
            return CommandOutput::Lines(vec![
                "Chain INPUT (policy ACCEPT)".to_string(),
                "target     prot opt source               destination".to_string(),
                "ACCEPT     tcp  --  anywhere             anywhere             tcp dpt:ssh"
                    .to_string(),
                String::new(),
                "Chain FORWARD (policy ACCEPT)".to_string(),
                "target     prot opt source               destination".to_string(),
                String::new(),
                "Chain OUTPUT (policy ACCEPT)".to_string(),
                "target     prot opt source               destination".to_string(),
            ]);
        }
        // Rule edits succeed silently, like the real tool.
        CommandOutput::None
    }
}

// ---------------------------------------------------------------------------
// systemctl
// ---------------------------------------------------------------------------

struct SystemctlCmd;
impl Command for SystemctlCmd {
    fn name(&self) -> &str {
        "systemctl"
    }
    fn description(&self) -> &str {
        "Control simulated services"
    }
    fn usage(&self) -> &str {
        "systemctl status|start|stop|restart|enable|disable <service>"
    }
    fn category(&self) -> &str {
        "admin"
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        let service = args.get(1).copied().unwrap_or("ssh");
        match args.first().copied() {
            Some("status") => CommandOutput::Lines(vec![
                format!("\u{25cf} {service}.service - {service} service"),
                format!(
                    "     Loaded: loaded (/lib/systemd/system/{service}.service; enabled; \
                     vendor preset: enabled)"
                ),
                "     Active: active (running) since Mon 2024-01-15 09:30:12 UTC; 2h 14min ago"
                    .to_string(),
                format!("   Main PID: 612 ({service})"),
                "      Tasks: 1 (limit: 4563)".to_string(),
                "     Memory: 2.1M".to_string(),
            ]),
            Some("enable") => CommandOutput::line(format!(
                "Created symlink /etc/systemd/system/multi-user.target.wants/{service}.service \
                 \u{2192} /lib/systemd/system/{service}.service."
            )),
            Some("start" | "stop" | "restart" | "disable") => CommandOutput::None,
            _ => CommandOutput::line("systemctl [OPTIONS...] COMMAND [UNIT...]"),
        }
    }
}

/// Register the administration commands.
pub fn register_admin_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(AptCmd));
    reg.register(Box::new(IpCmd));
    reg.register(Box::new(UfwCmd));
    reg.register(Box::new(SysctlCmd));
    reg.register(Box::new(IptablesCmd));
    reg.register(Box::new(SystemctlCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommandRegistry;

    fn exec(line: &str, state: &mut ShellState) -> CommandOutput {
        let mut reg = CommandRegistry::new();
        register_admin_commands(&mut reg);
        reg.execute(line, state)
    }

    #[test]
    fn apt_install_adds_packages() {
        let mut state = ShellState::seeded();
        assert!(!state.installed.contains("hping3"));
        let out = exec("apt install hping3 masscan", &mut state);
        assert!(state.installed.contains("hping3"));
        assert!(state.installed.contains("masscan"));
        match out {
            CommandOutput::Lines(lines) => {
                assert!(lines.contains(&"  hping3 masscan".to_string()));
                assert!(lines.iter().any(|l| l.contains("2 newly installed")));
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn apt_install_skips_flags() {
        let mut state = ShellState::seeded();
        exec("apt install -y hping3", &mut state);
        assert!(state.installed.contains("hping3"));
        assert!(!state.installed.contains("-y"));
    }

    #[test]
    fn apt_invalid_operation() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("apt frobnicate", &mut state),
            CommandOutput::line("E: Invalid operation frobnicate"),
        );
    }

    #[test]
    fn ip_addr_and_alias_agree() {
        let mut state = ShellState::seeded();
        assert_eq!(exec("ip addr", &mut state), exec("ip a", &mut state));
    }

    #[test]
    fn ip_route_lists_default() {
        let mut state = ShellState::seeded();
        match exec("ip route", &mut state) {
            CommandOutput::Lines(lines) => assert!(lines[0].starts_with("default via")),
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn ip_unknown_object() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("ip frob", &mut state),
            CommandOutput::line("Object \"frob\" is unknown, try \"ip help\"."),
        );
    }

    #[test]
    fn ufw_enable_acknowledges() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("ufw enable", &mut state),
            CommandOutput::line("Firewall is active and enabled on system startup"),
        );
    }

    #[test]
    fn ufw_default_policy() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("ufw default deny incoming", &mut state),
            CommandOutput::line("Default incoming policy changed to 'deny'"),
        );
    }

    #[test]
    fn sysctl_write_echoes_assignment() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("sysctl -w net.ipv4.ip_forward=1", &mut state),
            CommandOutput::line("net.ipv4.ip_forward = 1"),
        );
    }

    #[test]
    fn sysctl_read_reports_one() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("sysctl net.ipv4.ip_forward", &mut state),
            CommandOutput::line("net.ipv4.ip_forward = 1"),
        );
    }

    #[test]
    fn iptables_list_has_three_chains() {
        let mut state = ShellState::seeded();
        match exec("iptables -L", &mut state) {
            CommandOutput::Lines(lines) => {
                assert_eq!(lines.iter().filter(|l| l.starts_with("Chain ")).count(), 3);
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn iptables_rule_edit_is_silent() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("iptables -A INPUT -p tcp --dport 22 -j ACCEPT", &mut state),
            CommandOutput::None,
        );
    }

    #[test]
    fn systemctl_status_block() {
        let mut state = ShellState::seeded();
        match exec("systemctl status wg-quick@wg0", &mut state) {
            CommandOutput::Lines(lines) => {
                assert!(lines[0].contains("wg-quick@wg0.service"));
                assert!(lines.iter().any(|l| l.contains("active (running)")));
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn systemctl_start_is_silent() {
        let mut state = ShellState::seeded();
        assert_eq!(exec("systemctl start ssh", &mut state), CommandOutput::None);
    }
}
