//! Mutable shell state: working directory, filesystem table, installed set.

use std::collections::BTreeSet;

use netlab_fs::FsTable;

/// Simulated set of installed packages.
///
/// Gates whether a tool command runs or reports "command not found".
#[derive(Debug, Clone, Default)]
pub struct InstalledSet {
    packages: BTreeSet<String>,
}

/// Packages present in every fresh session.
const SEED_PACKAGES: &[&str] = &[
    "ufw",
    "iproute2",
    "iptables",
    "nmap",
    "ping",
    "iputils-ping",
    "wireguard",
    "openvpn",
    "tcpdump",
    "curl",
    "wget",
    "easy-rsa",
    "traceroute",
    "dnsutils",
    "net-tools",
];

impl InstalledSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the set every fresh session starts with.
    pub fn seeded() -> Self {
        let mut set = Self::new();
        for pkg in SEED_PACKAGES {
            set.add(pkg);
        }
        set
    }

    /// Mark a package as installed.
    pub fn add(&mut self, pkg: &str) {
        self.packages.insert(pkg.to_string());
    }

    /// Remove a package.
    pub fn remove(&mut self, pkg: &str) {
        self.packages.remove(pkg);
    }

    /// Whether a package is installed.
    pub fn contains(&self, pkg: &str) -> bool {
        self.packages.contains(pkg)
    }
}

/// The whole mutable state of one shell session.
///
/// Owned by a `Session`; passed mutably into every command. State never
/// outlives the session (nothing persists across remounts).
#[derive(Debug, Clone)]
pub struct ShellState {
    /// Current working directory token (`~` or a `/`-joined path).
    pub cwd: String,
    /// Directory listings and seeded file contents.
    pub fs: FsTable,
    /// Simulated installed packages.
    pub installed: InstalledSet,
}

impl ShellState {
    /// Fresh session state: home directory, seeded table, seeded packages.
    pub fn seeded() -> Self {
        Self {
            cwd: "~".to_string(),
            fs: FsTable::seeded(),
            installed: InstalledSet::seeded(),
        }
    }

    /// Empty state for tests that want full control.
    pub fn bare() -> Self {
        Self {
            cwd: "~".to_string(),
            fs: FsTable::new(),
            installed: InstalledSet::new(),
        }
    }

    /// Apply `cd` semantics to the working directory.
    ///
    /// No argument or `~` resets home. `..` moves `~` to `/root`, otherwise
    /// pops exactly the last `/`-delimited segment (bottoming out at `/`).
    /// An absolute argument is used verbatim; anything else is appended to
    /// the current directory. Nothing is validated against the table.
    pub fn change_dir(&mut self, arg: Option<&str>) {
        match arg {
            None | Some("~") => self.cwd = "~".to_string(),
            Some("..") => {
                if self.cwd == "~" {
                    self.cwd = "/root".to_string();
                } else if let Some(idx) = self.cwd.rfind('/') {
                    self.cwd.truncate(idx);
                    if self.cwd.is_empty() {
                        self.cwd = "/".to_string();
                    }
                }
            },
            Some(path) if path.starts_with('/') => self.cwd = path.to_string(),
            Some(name) => {
                if self.cwd.ends_with('/') {
                    self.cwd = format!("{}{name}", self.cwd);
                } else {
                    self.cwd = format!("{}/{name}", self.cwd);
                }
            },
        }
    }

    /// The working directory with `~` expanded, as `pwd` prints it.
    pub fn pwd(&self) -> String {
        if self.cwd == "~" {
            "/root".to_string()
        } else if let Some(rest) = self.cwd.strip_prefix("~/") {
            format!("/root/{rest}")
        } else {
            self.cwd.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_starts_home() {
        let state = ShellState::seeded();
        assert_eq!(state.cwd, "~");
        assert!(state.installed.contains("nmap"));
        assert!(state.fs.has_dir("/etc/wireguard"));
    }

    #[test]
    fn cd_no_arg_resets_home() {
        let mut state = ShellState::seeded();
        state.change_dir(Some("/etc"));
        state.change_dir(None);
        assert_eq!(state.cwd, "~");
    }

    #[test]
    fn cd_dotdot_from_home_is_root_home() {
        let mut state = ShellState::seeded();
        state.change_dir(Some(".."));
        assert_eq!(state.cwd, "/root");
    }

    #[test]
    fn cd_dotdot_pops_one_segment() {
        let mut state = ShellState::seeded();
        state.change_dir(Some("/etc/wireguard"));
        state.change_dir(Some(".."));
        assert_eq!(state.cwd, "/etc");
        state.change_dir(Some(".."));
        assert_eq!(state.cwd, "/");
    }

    #[test]
    fn cd_absolute_verbatim() {
        let mut state = ShellState::seeded();
        state.change_dir(Some("/var/log"));
        assert_eq!(state.cwd, "/var/log");
    }

    #[test]
    fn cd_relative_appends_segment() {
        let mut state = ShellState::seeded();
        state.change_dir(Some("scripts"));
        assert_eq!(state.cwd, "~/scripts");
    }

    #[test]
    fn pwd_expands_home() {
        let mut state = ShellState::seeded();
        assert_eq!(state.pwd(), "/root");
        state.change_dir(Some("scripts"));
        assert_eq!(state.pwd(), "/root/scripts");
        state.change_dir(Some("/etc"));
        assert_eq!(state.pwd(), "/etc");
    }

    #[test]
    fn installed_set_add_and_remove() {
        let mut set = InstalledSet::new();
        assert!(!set.contains("nmap"));
        set.add("nmap");
        assert!(set.contains("nmap"));
        set.remove("nmap");
        assert!(!set.contains("nmap"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cd_dotdot_removes_exactly_last_segment(
                segments in proptest::collection::vec("[a-z0-9]{1,8}", 2..6),
            ) {
                let path = format!("/{}", segments.join("/"));
                let parent = format!("/{}", segments[..segments.len() - 1].join("/"));
                let mut state = ShellState::bare();
                state.change_dir(Some(&path));
                state.change_dir(Some(".."));
                prop_assert_eq!(&state.cwd, &parent);
            }

            #[test]
            fn cd_relative_then_dotdot_roundtrips(
                name in "[a-z0-9]{1,10}",
            ) {
                let mut state = ShellState::bare();
                state.change_dir(Some("/root"));
                state.change_dir(Some(&name));
                state.change_dir(Some(".."));
                prop_assert_eq!(&state.cwd, "/root");
            }
        }
    }
}
