//! Rule tables and the substitution engine.
//!
//! This module handles:
//! - Building validated, length-ordered rule sets from literal pairs
//! - Applying a rule set to a document
//! - The builtin warm earth to dark luxury tables

pub mod builtin;
pub mod engine;
pub mod table;

pub use builtin::{BUILTIN_RULE_SETS, BuiltinRuleSet, builtin_rule_set, default_passes};
pub use engine::{MigrationResult, apply};
pub use table::{Rule, RuleSet, validate_pass_sequence};
