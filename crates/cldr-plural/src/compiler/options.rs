//! Compilation options.

use std::convert::Infallible;
use std::str::FromStr;

use bon::Builder;

/// Which locales of the input data to compile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocaleSelection {
    /// Every locale that has cardinal rules.
    #[default]
    All,
    /// An explicit allow-list of locale tags as spelled in the data.
    Only(Vec<String>),
}

impl LocaleSelection {
    /// Builds an allow-list, trimming each tag and dropping empty ones.
    pub fn only<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        LocaleSelection::Only(tags)
    }
}

/// Parses `"*"` (or an empty string) as [`LocaleSelection::All`] and anything
/// else as a comma-separated allow-list.
///
/// ```
/// use cldr_plural::LocaleSelection;
///
/// assert_eq!("*".parse(), Ok(LocaleSelection::All));
/// assert_eq!(
///     "en, pt_PT".parse(),
///     Ok(LocaleSelection::Only(vec!["en".into(), "pt_PT".into()]))
/// );
/// ```
impl FromStr for LocaleSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "*" {
            Ok(LocaleSelection::All)
        } else {
            Ok(LocaleSelection::only(s.split(',')))
        }
    }
}

/// What to do with a locale whose cardinal or ordinal rules lack the
/// mandatory `other` category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingOtherPolicy {
    /// Log a warning and leave the locale out of the table.
    #[default]
    Skip,
    /// Fail the whole compilation.
    Abort,
}

/// Options for [`compile`](crate::compile).
///
/// ```
/// use cldr_plural::{CompileOptions, LocaleSelection, MissingOtherPolicy};
///
/// let options = CompileOptions::builder()
///     .locales(LocaleSelection::only(["en", "fr"]))
///     .missing_other(MissingOtherPolicy::Abort)
///     .build();
///
/// assert!(!options.guard_negated_ranges());
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct CompileOptions {
    #[builder(default)]
    locales: LocaleSelection,

    #[builder(default)]
    missing_other: MissingOtherPolicy,

    /// Guard `!=` ranges over `n` with `p` as well, so that
    /// `n != 2..4` compiles to `p && (n < 2 || n > 4)`.
    #[builder(default)]
    guard_negated_ranges: bool,
}

impl CompileOptions {
    pub fn locales(&self) -> &LocaleSelection {
        &self.locales
    }

    pub fn missing_other(&self) -> MissingOtherPolicy {
        self.missing_other
    }

    pub fn guard_negated_ranges(&self) -> bool {
        self.guard_negated_ranges
    }
}
