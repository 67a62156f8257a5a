use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Prefix of every category key in CLDR plural data.
pub const RULE_KEY_PREFIX: &str = "pluralRule-count-";

/// A CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Order in which categories are compiled and emitted. `other` comes first
    /// because it becomes the unconditional fallback.
    pub const COMPILE_ORDER: [PluralCategory; 6] = [
        PluralCategory::Other,
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Parses a CLDR data key such as `pluralRule-count-few`.
    pub fn from_rule_key(key: &str) -> Option<Self> {
        key.strip_prefix(RULE_KEY_PREFIX)?.parse().ok()
    }

    /// The CLDR data key for this category.
    pub fn rule_key(self) -> String {
        format!("{RULE_KEY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the six category names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plural category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for PluralCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(PluralCategory::Zero),
            "one" => Ok(PluralCategory::One),
            "two" => Ok(PluralCategory::Two),
            "few" => Ok(PluralCategory::Few),
            "many" => Ok(PluralCategory::Many),
            "other" => Ok(PluralCategory::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Which kind of counting a rule set describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Quantities: "1 day", "2 days".
    Cardinal,
    /// Positions: "1st", "2nd".
    Ordinal,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::Cardinal => f.write_str("cardinal"),
            RuleType::Ordinal => f.write_str("ordinal"),
        }
    }
}
