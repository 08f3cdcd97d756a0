//! pkgscope - audit a package list against an npm project
//!
//! This crate cross-references a list of package names with a project's
//! `package.json`, `package-lock.json` and source tree, and reports which
//! packages are used, installed but unused, not installed, or installed
//! without being listed.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod export;
pub mod logging;
pub mod parser;
pub mod runner;

pub use config::AuditConfig;
pub use runner::{run_audit, AuditOutcome};
