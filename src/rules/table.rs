use crate::error::{MigrateError, Result};
use std::collections::HashSet;

/// A single literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
	/// Exact substring to search for. Never a regex.
	pub pattern: String,

	/// Literal text written in place of every match.
	pub replacement: String,
}

impl Rule {
	pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
		Rule {
			pattern: pattern.into(),
			replacement: replacement.into(),
		}
	}

	/// Pattern length in characters, the sort key for rule ordering.
	pub fn pattern_len(&self) -> usize {
		self.pattern.chars().count()
	}
}

/// An ordered, validated, read-only sequence of rules.
///
/// Rules are sorted by descending pattern length so that a longer pattern
/// (`bg-[#9C4A29]`) is applied across the whole document before any shorter
/// pattern it contains (`#9C4A29`). Ties keep their authoring order.
#[derive(Debug, Clone)]
pub struct RuleSet {
	name: String,
	version: u32,
	rules: Vec<Rule>,
}

impl RuleSet {
	/// Build a rule set from unordered `(pattern, replacement)` pairs.
	///
	/// Rejects empty patterns, duplicate patterns, and any table where a
	/// replacement contains one of the set's patterns, since such a table
	/// would not be idempotent across reruns.
	pub fn new<I, P, R>(name: impl Into<String>, version: u32, pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (P, R)>,
		P: Into<String>,
		R: Into<String>,
	{
		let name = name.into();
		let mut rules: Vec<Rule> = pairs
			.into_iter()
			.map(|(pattern, replacement)| Rule::new(pattern, replacement))
			.collect();

		validate_rules(&name, &rules)?;

		// Stable: equal lengths keep authoring order
		rules.sort_by_key(|rule| std::cmp::Reverse(rule.pattern_len()));

		Ok(RuleSet {
			name,
			version,
			rules,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn version(&self) -> u32 {
		self.version
	}

	/// Rules in application order.
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}

fn validate_rules(rule_set: &str, rules: &[Rule]) -> Result<()> {
	let mut seen = HashSet::new();
	for rule in rules {
		if rule.pattern.is_empty() {
			return Err(MigrateError::EmptyPattern {
				rule_set: rule_set.to_string(),
			});
		}
		if !seen.insert(rule.pattern.as_str()) {
			return Err(MigrateError::DuplicatePattern {
				rule_set: rule_set.to_string(),
				pattern: rule.pattern.clone(),
			});
		}
	}

	for rule in rules {
		if let Some(hit) = rules
			.iter()
			.find(|other| rule.replacement.contains(other.pattern.as_str()))
		{
			return Err(MigrateError::SelfFeedingRule {
				rule_set: rule_set.to_string(),
				source_pattern: rule.pattern.clone(),
				replacement: rule.replacement.clone(),
				pattern: hit.pattern.clone(),
			});
		}
	}

	Ok(())
}

/// Check that rule sets run one after another never re-match each other's output.
///
/// For every pair where `earlier` runs before `later`, no replacement of
/// `earlier` may contain a pattern of `later`.
pub fn validate_pass_sequence(passes: &[&RuleSet]) -> Result<()> {
	for (i, earlier) in passes.iter().enumerate() {
		for later in &passes[i + 1..] {
			for rule in earlier.rules() {
				if let Some(hit) = later
					.rules()
					.iter()
					.find(|other| rule.replacement.contains(other.pattern.as_str()))
				{
					return Err(MigrateError::CrossPassOverlap {
						earlier: earlier.name().to_string(),
						later: later.name().to_string(),
						replacement: rule.replacement.clone(),
						pattern: hit.pattern.clone(),
					});
				}
			}
		}
	}
	Ok(())
}
