//! Foundation types shared by every NETLAB crate.

pub mod error;

pub use error::{NetlabError, Result};
