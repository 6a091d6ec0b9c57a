//! Network reconnaissance and transfer tools: nmap, ping, traceroute,
//! tracepath, netstat, ss, dig, nslookup, ifconfig, tcpdump, curl, wget.
//!
//! Every output here is a pure function of `(args, state)`: fixed templates
//! with the target argument substituted, no clock and no randomness, so the
//! same invocation always renders the same transcript.

use crate::interpreter::{Command, CommandOutput};
use crate::state::ShellState;

/// Last non-flag argument, or `default` when none is given.
///
/// nmap and ping take their target last (`nmap -O 10.0.0.5`).
fn last_target<'a>(args: &[&'a str], default: &'a str) -> &'a str {
    args.iter()
        .rev()
        .find(|a| !a.starts_with('-'))
        .copied()
        .unwrap_or(default)
}

/// First non-flag argument, or `default` when none is given.
fn first_target<'a>(args: &[&'a str], default: &'a str) -> &'a str {
    args.iter()
        .find(|a| !a.starts_with('-'))
        .copied()
        .unwrap_or(default)
}

// ---------------------------------------------------------------------------
// nmap
// ---------------------------------------------------------------------------

struct NmapCmd;
impl Command for NmapCmd {
    fn name(&self) -> &str {
        "nmap"
    }
    fn description(&self) -> &str {
        "Port scan a host"
    }
    fn usage(&self) -> &str {
        "nmap [-O] <target>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["nmap"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        let target = last_target(args, "localhost");
        let mut lines = vec![
            "Starting Nmap 7.80 ( https://nmap.org )".to_string(),
            format!("Nmap scan report for {target} (192.168.1.1)"),
            "Host is up (0.0042s latency).".to_string(),
            "Not shown: 997 closed ports".to_string(),
            "PORT    STATE SERVICE".to_string(),
            "22/tcp  open  ssh".to_string(),
            "80/tcp  open  http".to_string(),
            "443/tcp open  https".to_string(),
        ];
        if args.contains(&"-O") {
            lines.extend([
                "Device type: general purpose".to_string(),
                "Running: Linux 4.X|5.X".to_string(),
                "OS CPE: cpe:/o:linux:linux_kernel:5".to_string(),
                "OS details: Linux 4.15 - 5.8".to_string(),
                "Network Distance: 1 hop".to_string(),
            ]);
        }
        lines.push("Nmap done: 1 IP address (1 host up) scanned in 2.31 seconds".to_string());
        CommandOutput::Lines(lines)
    }
}

// ---------------------------------------------------------------------------
// ping
// ---------------------------------------------------------------------------

struct PingCmd;
impl Command for PingCmd {
    fn name(&self) -> &str {
        "ping"
    }
    fn description(&self) -> &str {
        "Send ICMP echo requests"
    }
    fn usage(&self) -> &str {
        "ping <target>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["iputils-ping", "ping"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        let target = last_target(args, "localhost");
        CommandOutput::Lines(vec![
            format!("PING {target} ({target}) 56(84) bytes of data."),
            format!("64 bytes from {target}: icmp_seq=1 ttl=64 time=0.421 ms"),
            format!("64 bytes from {target}: icmp_seq=2 ttl=64 time=0.389 ms"),
            format!("64 bytes from {target}: icmp_seq=3 ttl=64 time=0.460 ms"),
            format!("64 bytes from {target}: icmp_seq=4 ttl=64 time=0.412 ms"),
            String::new(),
            format!("--- {target} ping statistics ---"),
            "4 packets transmitted, 4 received, 0% packet loss, time 3004ms".to_string(),
            "rtt min/avg/max/mdev = 0.389/0.420/0.460/0.026 ms".to_string(),
        ])
    }
}

// ---------------------------------------------------------------------------
// traceroute / tracepath
// ---------------------------------------------------------------------------

fn trace_lines(target: &str) -> Vec<String> {
    vec![
        format!("traceroute to {target} (203.0.113.44), 30 hops max, 60 byte packets"),
        " 1  _gateway (192.168.1.1)  0.512 ms  0.488 ms  0.471 ms".to_string(),
        " 2  100.64.0.1 (100.64.0.1)  2.314 ms  2.298 ms  2.250 ms".to_string(),
        " 3  198.51.100.9 (198.51.100.9)  8.120 ms  8.094 ms  8.061 ms".to_string(),
        format!(" 4  {target} (203.0.113.44)  11.402 ms  11.377 ms  11.343 ms"),
    ]
}

struct TracerouteCmd;
impl Command for TracerouteCmd {
    fn name(&self) -> &str {
        "traceroute"
    }
    fn description(&self) -> &str {
        "Trace the route to a host"
    }
    fn usage(&self) -> &str {
        "traceroute <target>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["traceroute"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(trace_lines(first_target(args, "example.com")))
    }
}

struct TracepathCmd;
impl Command for TracepathCmd {
    fn name(&self) -> &str {
        "tracepath"
    }
    fn description(&self) -> &str {
        "Trace the path to a host"
    }
    fn usage(&self) -> &str {
        "tracepath <target>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["iputils-tracepath", "traceroute"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(trace_lines(first_target(args, "example.com")))
    }
}

// ---------------------------------------------------------------------------
// netstat / ss
// ---------------------------------------------------------------------------

fn socket_table() -> Vec<String> {
    vec![
        "Proto Recv-Q Send-Q Local Address           Foreign Address         State".to_string(),
        "tcp        0      0 0.0.0.0:22              0.0.0.0:*               LISTEN".to_string(),
        "tcp        0      0 127.0.0.1:53            0.0.0.0:*               LISTEN".to_string(),
        "tcp        0      0 192.168.1.10:22         192.168.1.34:53412      ESTABLISHED"
            .to_string(),
        "udp        0      0 0.0.0.0:51820           0.0.0.0:*".to_string(),
    ]
}

struct NetstatCmd;
impl Command for NetstatCmd {
    fn name(&self) -> &str {
        "netstat"
    }
    fn description(&self) -> &str {
        "Show socket status"
    }
    fn usage(&self) -> &str {
        "netstat [-tulpn]"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["net-tools"]
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(socket_table())
    }
}

struct SsCmd;
impl Command for SsCmd {
    fn name(&self) -> &str {
        "ss"
    }
    fn description(&self) -> &str {
        "Show socket status"
    }
    fn usage(&self) -> &str {
        "ss [-tulpn]"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["iproute2"]
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(socket_table())
    }
}

// ---------------------------------------------------------------------------
// dig / nslookup
// ---------------------------------------------------------------------------

fn resolver_answer(domain: &str) -> Vec<String> {
    vec![
        "Server:         127.0.0.53".to_string(),
        "Address:        127.0.0.53#53".to_string(),
        String::new(),
        "Non-authoritative answer:".to_string(),
        format!("Name:   {domain}"),
        "Address: 93.184.216.34".to_string(),
    ]
}

struct DigCmd;
impl Command for DigCmd {
    fn name(&self) -> &str {
        "dig"
    }
    fn description(&self) -> &str {
        "Resolve a DNS name"
    }
    fn usage(&self) -> &str {
        "dig <domain>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["dnsutils", "bind9-dnsutils"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(resolver_answer(first_target(args, "example.com")))
    }
}

struct NslookupCmd;
impl Command for NslookupCmd {
    fn name(&self) -> &str {
        "nslookup"
    }
    fn description(&self) -> &str {
        "Resolve a DNS name"
    }
    fn usage(&self) -> &str {
        "nslookup <domain>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["dnsutils", "bind9-dnsutils"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(resolver_answer(first_target(args, "example.com")))
    }
}

// ---------------------------------------------------------------------------
// ifconfig
// ---------------------------------------------------------------------------

struct IfconfigCmd;
impl Command for IfconfigCmd {
    fn name(&self) -> &str {
        "ifconfig"
    }
    fn description(&self) -> &str {
        "Show network interfaces"
    }
    fn usage(&self) -> &str {
        "ifconfig"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["net-tools"]
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(vec![
            "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500".to_string(),
            "        inet 192.168.1.10  netmask 255.255.255.0  broadcast 192.168.1.255"
                .to_string(),
            "        ether 02:42:ac:11:00:02  txqueuelen 1000  (Ethernet)".to_string(),
            "        RX packets 48213  bytes 61234572 (61.2 MB)".to_string(),
            "        TX packets 31870  bytes 4128834 (4.1 MB)".to_string(),
            String::new(),
            "lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536".to_string(),
            "        inet 127.0.0.1  netmask 255.0.0.0".to_string(),
            "        loop  txqueuelen 1000  (Local Loopback)".to_string(),
        ])
    }
}

// ---------------------------------------------------------------------------
// tcpdump
// ---------------------------------------------------------------------------

struct TcpdumpCmd;
impl Command for TcpdumpCmd {
    fn name(&self) -> &str {
        "tcpdump"
    }
    fn description(&self) -> &str {
        "Capture packets on an interface"
    }
    fn usage(&self) -> &str {
        "tcpdump [-i iface]"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["tcpdump"]
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(vec![
            "tcpdump: verbose output suppressed, use -v or -vv for full protocol decode"
                .to_string(),
            "listening on eth0, link-type EN10MB (Ethernet), capture size 262144 bytes"
                .to_string(),
            "09:30:01.102311 IP 192.168.1.34.53412 > 192.168.1.10.22: Flags [P.], \
             seq 1:37, ack 1, win 501, length 36"
                .to_string(),
            "09:30:01.102389 IP 192.168.1.10.22 > 192.168.1.34.53412: Flags [.], \
             ack 37, win 501, length 0"
                .to_string(),
            "09:30:02.441702 IP 192.168.1.10.51820 > 203.0.113.44.51820: UDP, length 148"
                .to_string(),
            "3 packets captured".to_string(),
            "3 packets received by filter".to_string(),
            "0 packets dropped by kernel".to_string(),
        ])
    }
}

// ---------------------------------------------------------------------------
// curl / wget
// ---------------------------------------------------------------------------

struct CurlCmd;
impl Command for CurlCmd {
    fn name(&self) -> &str {
        "curl"
    }
    fn description(&self) -> &str {
        "Fetch a URL"
    }
    fn usage(&self) -> &str {
        "curl <url>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["curl"]
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(vec![
            "<!doctype html>".to_string(),
            "<html>".to_string(),
            "<head><title>Example Domain</title></head>".to_string(),
            "<body>".to_string(),
            "<h1>Example Domain</h1>".to_string(),
            "<p>This domain is for use in illustrative examples in documents.</p>".to_string(),
            "</body>".to_string(),
            "</html>".to_string(),
        ])
    }
}

struct WgetCmd;
impl Command for WgetCmd {
    fn name(&self) -> &str {
        "wget"
    }
    fn description(&self) -> &str {
        "Download a URL"
    }
    fn usage(&self) -> &str {
        "wget <url>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn packages(&self) -> &[&str] {
        &["wget"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        let url = first_target(args, "https://example.com/");
        CommandOutput::Lines(vec![
            format!("--2024-01-15 09:30:12--  {url}"),
            format!("Resolving {url}... 93.184.216.34"),
            format!("Connecting to {url}|93.184.216.34|:443... connected."),
            "HTTP request sent, awaiting response... 200 OK".to_string(),
            "Length: 1256 (1.2K) [text/html]".to_string(),
            "Saving to: 'index.html'".to_string(),
            String::new(),
            "index.html          100%[===================>]   1.23K  --.-KB/s    in 0s"
                .to_string(),
            String::new(),
            "'index.html' saved [1256/1256]".to_string(),
        ])
    }
}

/// Register the network tool commands.
pub fn register_network_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(NmapCmd));
    reg.register(Box::new(PingCmd));
    reg.register(Box::new(TracerouteCmd));
    reg.register(Box::new(TracepathCmd));
    reg.register(Box::new(NetstatCmd));
    reg.register(Box::new(SsCmd));
    reg.register(Box::new(DigCmd));
    reg.register(Box::new(NslookupCmd));
    reg.register(Box::new(IfconfigCmd));
    reg.register(Box::new(TcpdumpCmd));
    reg.register(Box::new(CurlCmd));
    reg.register(Box::new(WgetCmd));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommandRegistry;

    fn exec(line: &str, state: &mut ShellState) -> Vec<String> {
        let mut reg = CommandRegistry::new();
        register_network_commands(&mut reg);
        match reg.execute(line, state) {
            CommandOutput::Lines(lines) => lines,
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn nmap_substitutes_last_argument() {
        let mut state = ShellState::seeded();
        let out = exec("nmap -sV 10.0.0.5", &mut state);
        assert_eq!(out[1], "Nmap scan report for 10.0.0.5 (192.168.1.1)");
    }

    #[test]
    fn nmap_os_block_only_with_flag() {
        let mut state = ShellState::seeded();
        let plain = exec("nmap 10.0.0.5", &mut state);
        let os = exec("nmap -O 10.0.0.5", &mut state);
        assert!(!plain.iter().any(|l| l.starts_with("Device type:")));
        assert!(os.contains(&"Device type: general purpose".to_string()));
    }

    #[test]
    fn ping_replies_then_statistics() {
        let mut state = ShellState::seeded();
        let out = exec("ping 10.0.0.5", &mut state);
        assert_eq!(out[0], "PING 10.0.0.5 (10.0.0.5) 56(84) bytes of data.");
        assert_eq!(out.iter().filter(|l| l.contains("icmp_seq=")).count(), 4);
        assert!(out.iter().any(|l| l.contains("0% packet loss")));
    }

    #[test]
    fn traceroute_and_tracepath_share_template() {
        let mut state = ShellState::seeded();
        assert_eq!(
            exec("traceroute example.com", &mut state),
            exec("tracepath example.com", &mut state),
        );
    }

    #[test]
    fn netstat_and_ss_share_table() {
        let mut state = ShellState::seeded();
        assert_eq!(exec("netstat -tulpn", &mut state), exec("ss", &mut state));
    }

    #[test]
    fn dig_substitutes_first_argument() {
        let mut state = ShellState::seeded();
        let out = exec("dig netlab.example", &mut state);
        assert!(out.contains(&"Name:   netlab.example".to_string()));
    }

    #[test]
    fn gated_tools_report_not_found_when_absent() {
        let mut state = ShellState::bare();
        let mut reg = CommandRegistry::new();
        register_network_commands(&mut reg);
        for tool in ["nmap", "ping", "tcpdump", "curl", "wget"] {
            assert_eq!(
                reg.execute(tool, &mut state),
                CommandOutput::line(format!("bash: {tool}: command not found")),
            );
        }
    }

    #[test]
    fn ping_accepts_either_satisfying_package() {
        let mut reg = CommandRegistry::new();
        register_network_commands(&mut reg);
        let mut state = ShellState::bare();
        state.installed.add("iputils-ping");
        assert!(matches!(
            reg.execute("ping 10.0.0.1", &mut state),
            CommandOutput::Lines(_),
        ));
        let mut state = ShellState::bare();
        state.installed.add("ping");
        assert!(matches!(
            reg.execute("ping 10.0.0.1", &mut state),
            CommandOutput::Lines(_),
        ));
    }

    #[test]
    fn outputs_are_deterministic() {
        let mut state = ShellState::seeded();
        for line in ["nmap -O 10.0.0.5", "ping host", "tcpdump", "ifconfig"] {
            assert_eq!(exec(line, &mut state), exec(line, &mut state));
        }
    }
}
