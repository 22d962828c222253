use crate::rules::table::RuleSet;

/// Output of one pass of a rule set over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
	/// The transformed document.
	pub text: String,

	/// True iff `text` differs from the input.
	pub changed: bool,
}

/// Apply every rule of `rule_set`, in order, to `document`.
///
/// Each rule replaces all non-overlapping occurrences of its pattern, left to
/// right, in the buffer produced by the previous rules. Never fails.
pub fn apply(document: &str, rule_set: &RuleSet) -> MigrationResult {
	let mut text = document.to_string();

	for rule in rule_set.rules() {
		if text.contains(rule.pattern.as_str()) {
			text = text.replace(rule.pattern.as_str(), &rule.replacement);
		}
	}

	let changed = text != document;
	MigrationResult { text, changed }
}
