//! Error types for NETLAB.
//!
//! The shell simulator itself never fails (its only user-visible failure is
//! a "command not found" output line), so these errors belong to the layers
//! around it: course loading, configuration, and I/O.

use std::io;

/// Errors produced by the NETLAB framework.
#[derive(Debug, thiserror::Error)]
pub enum NetlabError {
    #[error("course error: {0}")]
    Course(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NetlabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_error_display() {
        let e = NetlabError::Course("topic not found".into());
        assert_eq!(format!("{e}"), "course error: topic not found");
    }

    #[test]
    fn config_error_display() {
        let e = NetlabError::Config("unknown extension".into());
        assert_eq!(format!("{e}"), "config error: unknown extension");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: NetlabError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [[[ valid").unwrap_err();
        let e: NetlabError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: NetlabError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(7);
        assert_eq!(r.unwrap(), 7);
    }
}
