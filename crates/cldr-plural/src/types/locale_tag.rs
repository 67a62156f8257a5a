use icu_locale_core::Locale;
use tracing::warn;

/// The undetermined pseudo-locale.
pub const UNDETERMINED: &str = "und";

/// Canonicalizes a CLDR locale identifier (`pt_PT` becomes `pt-PT`, `root`
/// becomes `und`).
///
/// Identifiers that do not parse as BCP-47 are kept with `_` normalized to
/// `-` so that every input still gets a stable key.
pub fn canonicalize(tag: &str) -> String {
    if tag.eq_ignore_ascii_case("root") {
        return UNDETERMINED.to_string();
    }
    let normalized = tag.replace('_', "-");
    match normalized.parse::<Locale>() {
        Ok(locale) => locale.to_string(),
        Err(err) => {
            warn!(tag, %err, "keeping locale tag without canonicalization");
            normalized
        }
    }
}

/// Every tag a locale should be reachable under: the tag as spelled in the
/// data, plus its canonical form when that differs.
pub fn alias_tags(raw: &str, canonical: &str) -> Vec<String> {
    if raw == canonical {
        vec![raw.to_string()]
    } else {
        vec![raw.to_string(), canonical.to_string()]
    }
}
