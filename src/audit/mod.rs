//! Residual scan for legacy palette colors.
//!
//! After every pass has run, any `#RRGGBB` token that still belongs to the
//! old palette points at a form no rule table covers.

use crate::rules::RuleSet;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"#[0-9A-Fa-f]{6}").expect("hex color regex is valid")
});

/// `#RRGGBB` tokens in `text` that are not the prefix of a longer hex run.
fn hex_colors(text: &str) -> impl Iterator<Item = regex::Match<'_>> {
	HEX_COLOR.find_iter(text).filter(move |m| {
		text[m.end()..]
			.chars()
			.next()
			.is_none_or(|c| !c.is_ascii_hexdigit())
	})
}

/// A legacy color found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residual {
	/// 1-based line number.
	pub line: usize,

	/// 1-based column, counted in characters.
	pub column: usize,

	/// The token as written in the document.
	pub token: String,
}

/// Collect the hex colors the given rule sets migrate away from.
///
/// Codes are stored upper-cased.
pub fn legacy_palette(rule_sets: &[RuleSet]) -> BTreeSet<String> {
	rule_sets
		.iter()
		.flat_map(|set| set.rules())
		.flat_map(|rule| hex_colors(&rule.pattern))
		.map(|m| m.as_str().to_ascii_uppercase())
		.collect()
}

/// Find every legacy palette color left in `document`.
pub fn scan_residuals(document: &str, palette: &BTreeSet<String>) -> Vec<Residual> {
	let mut residuals = Vec::new();

	for (index, line) in document.lines().enumerate() {
		for m in hex_colors(line) {
			if !palette.contains(&m.as_str().to_ascii_uppercase()) {
				continue;
			}
			residuals.push(Residual {
				line: index + 1,
				column: line[..m.start()].chars().count() + 1,
				token: m.as_str().to_string(),
			});
		}
	}

	residuals
}
