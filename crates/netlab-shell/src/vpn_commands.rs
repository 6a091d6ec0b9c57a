//! VPN and PKI tools: wg, wg-quick, openvpn, ./easyrsa, make-cadir.

use crate::interpreter::{Command, CommandOutput};
use crate::state::ShellState;

const WG_PUBLIC_KEY: &str = "hIgVdpWnZENNMpNUGdxNbZF2CIsDC5tUHL4ikeZXgkY=";
const WG_PRIVATE_KEY: &str = "yAnz5TF+lXXJte14tji3zlMNq+hd2rYUIgJBgB3fBmk=";
const WG_PRESHARED_KEY: &str = "FpCyhws9cxwWoV4xELtfJvjJN+zQVRPISllRWgeopVE=";

// ---------------------------------------------------------------------------
// wg
// ---------------------------------------------------------------------------

struct WgCmd;
impl Command for WgCmd {
    fn name(&self) -> &str {
        "wg"
    }
    fn description(&self) -> &str {
        "Show WireGuard status or derive keys"
    }
    fn usage(&self) -> &str {
        "wg [show|genkey|genpsk|pubkey]"
    }
    fn category(&self) -> &str {
        "vpn"
    }
    fn packages(&self) -> &[&str] {
        &["wireguard", "wireguard-tools"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        match args.first().copied() {
            None | Some("show") => CommandOutput::Lines(vec![
                "interface: wg0".to_string(),
                format!("  public key: {WG_PUBLIC_KEY}"),
                "  private key: (hidden)".to_string(),
                "  listening port: 51820".to_string(),
                String::new(),
                "peer: xTIBA5rboUvnH4htodjb6e697QjLERt1NAB4mZqp8Dg=".to_string(),
                "  endpoint: 203.0.113.44:51820".to_string(),
                "  allowed ips: 10.0.0.0/24".to_string(),
                "  latest handshake: 1 minute, 12 seconds ago".to_string(),
                "  transfer: 1.21 MiB received, 824.50 KiB sent".to_string(),
            ]),
            Some("genkey") => CommandOutput::line(WG_PRIVATE_KEY),
            Some("genpsk") => CommandOutput::line(WG_PRESHARED_KEY),
            Some("pubkey") => CommandOutput::line(WG_PUBLIC_KEY),
            Some(_) => CommandOutput::line("Usage: wg <cmd> [<args>]"),
        }
    }
}

// ---------------------------------------------------------------------------
// wg-quick
// ---------------------------------------------------------------------------

struct WgQuickCmd;
impl Command for WgQuickCmd {
    fn name(&self) -> &str {
        "wg-quick"
    }
    fn description(&self) -> &str {
        "Bring a WireGuard interface up or down"
    }
    fn usage(&self) -> &str {
        "wg-quick up|down [iface]"
    }
    fn category(&self) -> &str {
        "vpn"
    }
    fn packages(&self) -> &[&str] {
        &["wireguard", "wireguard-tools"]
    }
    fn execute(&self, args: &[&str], _state: &mut ShellState) -> CommandOutput {
        let iface = args.get(1).copied().unwrap_or("wg0");
        match args.first().copied() {
            Some("up") => CommandOutput::Lines(vec![
                format!("[#] ip link add {iface} type wireguard"),
                format!("[#] wg setconf {iface} /dev/fd/63"),
                format!("[#] ip -4 address add 10.0.0.2/24 dev {iface}"),
                format!("[#] ip link set mtu 1420 up dev {iface}"),
                format!("[#] ip -4 route add 10.0.0.0/24 dev {iface}"),
            ]),
            Some("down") => CommandOutput::line(format!("[#] ip link delete dev {iface}")),
            _ => CommandOutput::line("Usage: wg-quick [ up | down ] [ CONFIG_FILE | INTERFACE ]"),
        }
    }
}

// ---------------------------------------------------------------------------
// openvpn
// ---------------------------------------------------------------------------

struct OpenvpnCmd;
impl Command for OpenvpnCmd {
    fn name(&self) -> &str {
        "openvpn"
    }
    fn description(&self) -> &str {
        "Connect a simulated OpenVPN tunnel"
    }
    fn usage(&self) -> &str {
        "openvpn [--config <file>]"
    }
    fn category(&self) -> &str {
        "vpn"
    }
    fn packages(&self) -> &[&str] {
        &["openvpn"]
    }
    fn execute(&self, _args: &[&str], _state: &mut ShellState) -> CommandOutput {
        CommandOutput::Lines(vec![
            "OpenVPN 2.4.7 x86_64-pc-linux-gnu [SSL (OpenSSL)] [LZ4] [EPOLL] built on \
             Jul 19 2021"
                .to_string(),
            "TCP/UDP: Preserving recently used remote address: [AF_INET]203.0.113.44:1194"
                .to_string(),
            "UDP link local: (not bound)".to_string(),
            "UDP link remote: [AF_INET]203.0.113.44:1194".to_string(),
            "[server] Peer Connection Initiated with [AF_INET]203.0.113.44:1194".to_string(),
            "TUN/TAP device tun0 opened".to_string(),
            "net_iface_up: set tun0 up".to_string(),
            "net_addr_v4_add: 10.8.0.2/24 dev tun0".to_string(),
            "Initialization Sequence Completed".to_string(),
        ])
    }
}

// ---------------------------------------------------------------------------
// ./easyrsa
// ---------------------------------------------------------------------------

struct EasyrsaCmd;
impl Command for EasyrsaCmd {
    fn name(&self) -> &str {
        "./easyrsa"
    }
    fn description(&self) -> &str {
        "Run the easy-rsa PKI helper"
    }
    fn usage(&self) -> &str {
        "./easyrsa init-pki|build-ca|gen-req|sign-req"
    }
    fn category(&self) -> &str {
        "vpn"
    }
    fn packages(&self) -> &[&str] {
        &["easy-rsa"]
    }
    fn execute(&self, args: &[&str], state: &mut ShellState) -> CommandOutput {
        let pki_root = state.pwd();
        match args.first().copied() {
            Some("init-pki") => {
                let cwd = state.cwd.clone();
                state.fs.append_entry(&cwd, "pki/");
                CommandOutput::Lines(vec![
                    String::new(),
                    "init-pki complete; you may now create a CA or requests.".to_string(),
                    format!("Your newly created PKI dir is: {pki_root}/pki"),
                ])
            },
            Some("build-ca") => CommandOutput::Lines(vec![
                "Using SSL: openssl OpenSSL 1.1.1f".to_string(),
                "Generating RSA private key, 2048 bit long modulus".to_string(),
                "CA creation complete and you may now import and sign cert requests."
                    .to_string(),
                "Your new CA certificate file for publishing is at:".to_string(),
                format!("{pki_root}/pki/ca.crt"),
            ]),
            Some("gen-req") => {
                let name = args.get(1).copied().unwrap_or("server");
                CommandOutput::Lines(vec![
                    "Using SSL: openssl OpenSSL 1.1.1f".to_string(),
                    "Keypair and certificate request completed. Your files are:".to_string(),
                    format!("req: {pki_root}/pki/reqs/{name}.req"),
                    format!("key: {pki_root}/pki/private/{name}.key"),
                ])
            },
            Some("sign-req") => {
                let name = args.get(2).or(args.get(1)).copied().unwrap_or("server");
                CommandOutput::Lines(vec![
                    "Using SSL: openssl OpenSSL 1.1.1f".to_string(),
                    format!("Certificate created at: {pki_root}/pki/issued/{name}.crt"),
                ])
            },
            Some(sub) => CommandOutput::line(format!(
                "Unknown command '{sub}'. Run without commands for usage help."
            )),
            None => CommandOutput::line("Easy-RSA 3 usage: ./easyrsa <command> [options]"),
        }
    }
}

// ---------------------------------------------------------------------------
// make-cadir
// ---------------------------------------------------------------------------

/// Skeleton a new CA directory starts with.
const CADIR_SKELETON: &[&str] = &["easyrsa", "openssl-easyrsa.cnf", "vars", "x509-types/"];

struct MakeCadirCmd;
impl Command for MakeCadirCmd {
    fn name(&self) -> &str {
        "make-cadir"
    }
    fn description(&self) -> &str {
        "Create an easy-rsa CA directory"
    }
    fn usage(&self) -> &str {
        "make-cadir <dir>"
    }
    fn category(&self) -> &str {
        "vpn"
    }
    fn packages(&self) -> &[&str] {
        &["easy-rsa"]
    }
    fn execute(&self, args: &[&str], state: &mut ShellState) -> CommandOutput {
        let Some(&dir) = args.first() else {
            return CommandOutput::line("usage: make-cadir <dir>");
        };
        let cwd = state.cwd.clone();
        state
            .fs
            .insert_dir(&format!("{cwd}/{dir}"), CADIR_SKELETON);
        state.fs.append_entry(&cwd, &format!("{dir}/"));
        CommandOutput::None
    }
}

/// Register the VPN and PKI commands.
pub fn register_vpn_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(WgCmd));
    reg.register(Box::new(WgQuickCmd));
    reg.register(Box::new(OpenvpnCmd));
    reg.register(Box::new(EasyrsaCmd));
    reg.register(Box::new(MakeCadirCmd));
}
