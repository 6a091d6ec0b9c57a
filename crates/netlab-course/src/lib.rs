//! Course content for NETLAB: modules, topics, and pages.
//!
//! Content is static and read-only after load. Courses come from TOML or
//! JSON files, or from the embedded default course.

mod builtin;
mod loader;
mod model;

pub use builtin::builtin_course;
pub use loader::{from_json_str, from_toml_str, load};
pub use model::{Course, Module, Topic};
