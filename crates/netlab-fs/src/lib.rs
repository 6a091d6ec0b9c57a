//! Virtual filesystem table backing the NETLAB shell.
//!
//! This is not a real filesystem: it is a table of directory listings plus a
//! handful of seeded file contents, just enough state to make `ls`, `cd`,
//! and `cat` feel consistent within a session. Listings are ordered and keys
//! are plain path strings (`~`, `/etc/wireguard`, ...). The table never
//! validates that an entry name actually resolves to another key.

use std::collections::BTreeMap;

/// Ordered directory listings plus seeded file contents.
#[derive(Debug, Clone, Default)]
pub struct FsTable {
    /// Directory path -> ordered entry names (`scripts/` suffix marks dirs).
    dirs: BTreeMap<String, Vec<String>>,
    /// File path -> content, for the few paths `cat` can read.
    files: BTreeMap<String, String>,
}

/// Content of the one seeded readable file, `~/readme.txt`.
const README: &str = "Welcome to the NETLAB sandbox.\n\
                      Commands here are simulated -- nothing touches a real network.\n\
                      Try: nmap -O 10.0.0.5, ip addr, wg show, apt install openvpn";

impl FsTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the table every fresh session starts with.
    ///
    /// Every key is reachable via `cd` from `~` (with `~/..` landing on
    /// `/root` and absolute paths usable directly).
    pub fn seeded() -> Self {
        let mut fs = Self::new();
        fs.insert_dir("~", &["readme.txt", "scripts/"]);
        fs.insert_dir("~/scripts", &["recon.sh", "sweep.sh"]);
        fs.insert_dir("/root", &["readme.txt", "scripts/"]);
        fs.insert_dir("/etc", &["openvpn/", "wireguard/"]);
        fs.insert_dir("/etc/wireguard", &["wg0.conf"]);
        fs.insert_dir("/etc/openvpn", &["client/", "server/"]);
        fs.seed_file("~/readme.txt", README);
        fs
    }

    /// Insert (or replace) a directory listing.
    pub fn insert_dir(&mut self, path: &str, entries: &[&str]) {
        self.dirs.insert(
            path.to_string(),
            entries.iter().map(|e| (*e).to_string()).collect(),
        );
    }

    /// Append one entry to a directory listing, creating the listing if the
    /// directory is not yet in the table. Duplicate names are kept once.
    pub fn append_entry(&mut self, dir: &str, name: &str) {
        let entries = self.dirs.entry(dir.to_string()).or_default();
        if !entries.iter().any(|e| e == name) {
            entries.push(name.to_string());
        }
    }

    /// Entries of a directory, or `None` if the path is not in the table.
    pub fn list(&self, dir: &str) -> Option<&[String]> {
        self.dirs.get(dir).map(Vec::as_slice)
    }

    /// Whether the table has a listing for `dir`.
    pub fn has_dir(&self, dir: &str) -> bool {
        self.dirs.contains_key(dir)
    }

    /// Seed a readable file.
    pub fn seed_file(&mut self, path: &str, content: &str) {
        self.files.insert(path.to_string(), content.to_string());
    }

    /// Content of a seeded file, or `None` if `cat` should report not found.
    pub fn read_file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

/// Resolve a `cat`/file argument against the working directory.
///
/// Absolute arguments are used verbatim; everything else is joined onto the
/// working directory with a single `/`.
pub fn resolve_path(cwd: &str, arg: &str) -> String {
    if arg.starts_with('/') || arg.starts_with('~') {
        arg.to_string()
    } else {
        format!("{cwd}/{arg}")
    }
}
