//! Rule tables compiled into the binary.
//!
//! Each table is a named, versioned configuration of the same engine.
//! `dark-luxury` performs the full warm earth to dark luxury migration;
//! `residual` is a smaller cleanup pass for `#273B3A`, `#E6D4C7` and
//! `#D4CEB8` forms the first table does not reach.

use crate::error::{MigrateError, Result};
use crate::rules::table::RuleSet;

/// Name of the full migration table.
pub const DARK_LUXURY: &str = "dark-luxury";

/// Name of the residual cleanup table.
pub const RESIDUAL: &str = "residual";

/// Metadata for a rule table shipped with the binary.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRuleSet {
	pub name: &'static str,
	pub version: u32,
	pub description: &'static str,
	pub pairs: &'static [(&'static str, &'static str)],
}

impl BuiltinRuleSet {
	/// Construct and validate the rule set.
	pub fn build(&self) -> Result<RuleSet> {
		RuleSet::new(self.name, self.version, self.pairs.iter().copied())
	}
}

/// All builtin rule tables, in default pass order.
pub const BUILTIN_RULE_SETS: &[BuiltinRuleSet] = &[
	BuiltinRuleSet {
		name: DARK_LUXURY,
		version: 1,
		description: "Warm earth to dark luxury, full table",
		pairs: DARK_LUXURY_RULES,
	},
	BuiltinRuleSet {
		name: RESIDUAL,
		version: 2,
		description: "Residual #273B3A / #E6D4C7 / #D4CEB8 cleanup",
		pairs: RESIDUAL_RULES,
	},
];

/// Names of the passes run when nothing else is configured.
pub fn default_passes() -> Vec<String> {
	BUILTIN_RULE_SETS
		.iter()
		.map(|set| set.name.to_string())
		.collect()
}

/// Look up builtin metadata by name.
pub fn find_builtin(name: &str) -> Option<&'static BuiltinRuleSet> {
	BUILTIN_RULE_SETS.iter().find(|set| set.name == name)
}

/// Build the named builtin rule set.
pub fn builtin_rule_set(name: &str) -> Result<RuleSet> {
	find_builtin(name)
		.ok_or_else(|| MigrateError::UnknownRuleSet {
			name: name.to_string(),
		})?
		.build()
}

/// The full migration table.
pub fn dark_luxury() -> Result<RuleSet> {
	builtin_rule_set(DARK_LUXURY)
}

/// The residual cleanup table.
pub fn residual() -> Result<RuleSet> {
	builtin_rule_set(RESIDUAL)
}

const DARK_LUXURY_RULES: &[(&str, &str)] = &[
	// Backgrounds
	("bg-[#E6D4C7]", "bg-[#0A0A0A]"),
	("bg-[#F5F2E8]", "bg-[#111111]"),
	("bg-[#E8E3CC]", "bg-[#111111]"),
	("bg-[#DDD7C0]", "bg-[#161616]"),
	("bg-[#D4CDB8]", "bg-[#1A1A1A]"),
	("bg-[#D4CEB8]", "bg-[#1A1A1A]"),
	("bg-[#C5BDA8]", "bg-[#1A1A1A]"),
	("bg-[#9C4A29]", "bg-[#CDB49E]"),
	("bg-[#B85A35]", "bg-[#E8D5B7]"),
	("bg-[#7D3B21]", "bg-[#B89B78]"),
	("bg-[#273B3A]", "bg-[#161616]"),
	("bg-[#2D1810]", "bg-[#111111]"),
	("bg-[#3D2820]", "bg-[#1A1A1A]"),
	// Text
	("text-[#273B3A]", "text-[#FAFAFA]"),
	("text-[#2D1810]", "text-[#FAFAFA]"),
	("text-[#6B5B4F]", "text-[#999999]"),
	("text-[#1A0E09]", "text-[#FAFAFA]"),
	("text-[#9C4A29]", "text-[#CDB49E]"),
	("text-[#B85A35]", "text-[#E8D5B7]"),
	("text-[#7D3B21]", "text-[#B89B78]"),
	("text-[#E6D4C7]", "text-[#0A0A0A]"),
	("text-[#F5F2E8]", "text-[#0A0A0A]"),
	("text-[#E8E3CC]", "text-[#FAFAFA]"),
	// Borders
	("border-[#E6D4C7]", "border-[#262626]"),
	("border-[#D4CDB8]", "border-[#1E1E1E]"),
	("border-[#D4CEB8]", "border-[#1E1E1E]"),
	("border-[#DDD7C0]", "border-[#262626]"),
	("border-[#F5F2E8]", "border-[#1E1E1E]"),
	("border-[#9C4A29]", "border-[#CDB49E]"),
	("border-[#273B3A]", "border-[#262626]"),
	("border-[#B85A35]", "border-[#CDB49E]"),
	// Gradients
	("from-[#273B3A]", "from-[#CDB49E]"),
	("to-[#273B3A]", "to-[#B89B78]"),
	("from-[#9C4A29]", "from-[#CDB49E]"),
	("to-[#9C4A29]", "to-[#B89B78]"),
	("from-[#B85A35]", "from-[#E8D5B7]"),
	("to-[#B85A35]", "to-[#CDB49E]"),
	("from-[#7D3B21]", "from-[#B89B78]"),
	("to-[#7D3B21]", "to-[#9A8670]"),
	// Hover
	("hover:bg-[#E6D4C7]", "hover:bg-[#1A1A1A]"),
	("hover:bg-[#F5F2E8]", "hover:bg-[#1A1A1A]"),
	("hover:bg-[#DDD7C0]", "hover:bg-[#262626]"),
	("hover:bg-[#9C4A29]", "hover:bg-[#E8D5B7]"),
	("hover:bg-[#273B3A]", "hover:bg-[#1A1A1A]"),
	("hover:bg-[#3D2820]", "hover:bg-[#262626]"),
	("hover:text-[#273B3A]", "hover:text-[#FAFAFA]"),
	("hover:text-[#9C4A29]", "hover:text-[#CDB49E]"),
	("hover:border-[#9C4A29]", "hover:border-[#CDB49E]"),
	// Ring/focus
	("ring-[#9C4A29]", "ring-[#CDB49E]"),
	("ring-[#273B3A]", "ring-[#CDB49E]"),
	// Utility classes
	("bg-cream-light", "bg-[#111111]"),
	("bg-cream-dark", "bg-[#161616]"),
	("bg-cream", "bg-[#0A0A0A]"),
	("bg-cinnamon-light", "bg-[#E8D5B7]"),
	("bg-cinnamon-dark", "bg-[#B89B78]"),
	("bg-cinnamon", "bg-[#CDB49E]"),
	("text-earth-muted", "text-[#888888]"),
	("text-earth-light", "text-[#999999]"),
	("text-earth", "text-[#FAFAFA]"),
	("text-cream", "text-[#0A0A0A]"),
	("text-cinnamon", "text-[#CDB49E]"),
	("border-cream", "border-[#262626]"),
	("border-cinnamon", "border-[#CDB49E]"),
	("shadow-warm-lg", "shadow-dark-lg"),
	("shadow-warm", "shadow-dark"),
	("shadow-cinnamon", "shadow-gold"),
	("glass-cream", "glass-dark"),
	("card-cream", "card-dark"),
	("animate-pulse-cinnamon", "animate-pulse-gold"),
	// rgba()
	("rgba(156, 74, 41", "rgba(205, 180, 158"),
	("rgba(45, 24, 16", "rgba(0, 0, 0"),
	// Inline styles, single quotes
	("backgroundColor: '#E6D4C7'", "backgroundColor: '#0A0A0A'"),
	("backgroundColor: '#F5F2E8'", "backgroundColor: '#111111'"),
	("backgroundColor: '#273B3A'", "backgroundColor: '#161616'"),
	("backgroundColor: '#9C4A29'", "backgroundColor: '#CDB49E'"),
	("background: '#E6D4C7'", "background: '#0A0A0A'"),
	("background: '#273B3A'", "background: '#161616'"),
	("color: '#273B3A'", "color: '#FAFAFA'"),
	("color: '#E6D4C7'", "color: '#0A0A0A'"),
	("color: '#9C4A29'", "color: '#CDB49E'"),
	("color: '#2D1810'", "color: '#FAFAFA'"),
	("borderColor: '#D4CDB8'", "borderColor: '#262626'"),
	("borderColor: '#E6D4C7'", "borderColor: '#262626'"),
	// Inline styles, double quotes
	(r##"backgroundColor: "#E6D4C7""##, r##"backgroundColor: "#0A0A0A""##),
	(r##"backgroundColor: "#273B3A""##, r##"backgroundColor: "#161616""##),
	(r##"background: "#E6D4C7""##, r##"background: "#0A0A0A""##),
	(r##"color: "#273B3A""##, r##"color: "#FAFAFA""##),
	(r##"color: "#E6D4C7""##, r##"color: "#0A0A0A""##),
	(r##"color: "#9C4A29""##, r##"color: "#CDB49E""##),
	// Raw hex, whatever is left
	("#E6D4C7", "#0A0A0A"),
	("#F5F2E8", "#111111"),
	("#D4CDB8", "#1E1E1E"),
	("#D4CEB8", "#1E1E1E"),
	("#9C4A29", "#CDB49E"),
	("#B85A35", "#E8D5B7"),
	("#7D3B21", "#B89B78"),
	("#2D1810", "#111111"),
	("#3D2820", "#1A1A1A"),
];

const RESIDUAL_RULES: &[(&str, &str)] = &[
	// #273B3A by context
	("text-[#273B3A]", "text-[#FAFAFA]"),
	("bg-[#273B3A]", "bg-[#161616]"),
	("border-[#273B3A]", "border-[#262626]"),
	("hover:bg-[#273B3A]", "hover:bg-[#1A1A1A]"),
	("hover:text-[#273B3A]", "hover:text-[#FAFAFA]"),
	("from-[#273B3A]", "from-[#CDB49E]"),
	("to-[#273B3A]", "to-[#B89B78]"),
	("ring-[#273B3A]", "ring-[#CDB49E]"),
	("shadow-[#273B3A]", "shadow-[#CDB49E]"),
	("divide-[#273B3A]", "divide-[#262626]"),
	("placeholder-[#273B3A]", "placeholder-[#555555]"),
	("fill-[#273B3A]", "fill-[#CDB49E]"),
	("stroke-[#273B3A]", "stroke-[#CDB49E]"),
	("'#273B3A'", "'#CDB49E'"),
	(r##""#273B3A""##, r##""#CDB49E""##),
	// #E6D4C7
	("text-[#E6D4C7]", "text-[#0A0A0A]"),
	("bg-[#E6D4C7]", "bg-[#0A0A0A]"),
	("border-[#E6D4C7]", "border-[#262626]"),
	("'#E6D4C7'", "'#0A0A0A'"),
	(r##""#E6D4C7""##, r##""#0A0A0A""##),
	// #D4CEB8 borders
	("border-[#D4CEB8]", "border-[#1E1E1E]"),
];
