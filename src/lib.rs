//! theme-migrate - bulk literal color-token migration for source trees.
//!
//! This library provides the core functionality for theme-migrate, including:
//! - Validated, longest-pattern-first rule sets and the substitution engine
//! - Builtin warm earth to dark luxury rule tables
//! - Candidate file discovery with an extension whitelist and skip list
//! - The read / apply / write-if-changed driver
//! - A residual scan for legacy palette colors
//!
//! # Example
//!
//! ```no_run
//! use theme_migrate::migrate::{MigrateOptions, run_passes};
//! use theme_migrate::rules::builtin_rule_set;
//! use std::path::PathBuf;
//!
//! let rule_sets = vec![
//!     builtin_rule_set("dark-luxury").unwrap(),
//!     builtin_rule_set("residual").unwrap(),
//! ];
//! let files = vec![PathBuf::from("src/app/page.tsx")];
//!
//! let report = run_passes(&files, &rule_sets, MigrateOptions::default());
//! for pass in &report.passes {
//!     println!("{}: {}/{} files updated", pass.pass, pass.changed_count(), pass.total);
//! }
//! ```

pub mod audit;
pub mod config;
pub mod discover;
pub mod error;
pub mod migrate;
pub mod rules;

pub use error::{MigrateError, Result};
