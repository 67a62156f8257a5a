use super::ast::SampleSet;

/// Extracts the sample values of a relation's `@integer` and `@decimal`
/// clauses.
///
/// Values are kept as written. Ellipses and range tildes are dropped, so
/// `"@integer 2~4, 22~24, …"` yields `2, 4, 22, 24`.
///
/// ```
/// use cldr_plural::parser::parse_samples;
///
/// let samples = parse_samples("i = 1 and v = 0 @integer 1 @decimal 0.0~1.5, 10.0");
/// assert_eq!(samples.integers, vec!["1"]);
/// assert_eq!(samples.decimals, vec!["0.0", "1.5", "10.0"]);
/// ```
pub fn parse_samples(relation: &str) -> SampleSet {
    let mut samples = SampleSet::default();
    for clause in relation.split('@').skip(1) {
        if let Some(values) = clause.strip_prefix("integer") {
            samples.integers.extend(split_values(values));
        } else if let Some(values) = clause.strip_prefix("decimal") {
            samples.decimals.extend(split_values(values));
        }
    }
    samples
}

/// Splits a sample list into value runs.
///
/// A run starts at a digit or `.` and ends at a space, `,` or `~`. Other
/// characters inside a run are kept (compact exponents like `1c6`); outside
/// a run they are skipped.
pub(crate) fn split_values(input: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut start = None;

    for (idx, c) in input.char_indices() {
        match c {
            '0'..='9' | '.' => {
                start.get_or_insert(idx);
            }
            ' ' | ',' | '~' => {
                if let Some(pos) = start.take() {
                    values.push(input[pos..idx].to_string());
                }
            }
            _ => {}
        }
    }

    if let Some(pos) = start {
        values.push(input[pos..].to_string());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_ranges_and_drops_ellipsis() {
        assert_eq!(
            split_values(" 2~4, 22~24, 32~34, …"),
            vec!["2", "4", "22", "24", "32", "34"]
        );
    }

    #[test]
    fn keeps_compact_exponents() {
        assert_eq!(
            split_values(" 1000000, 1c6, 2c6, …"),
            vec!["1000000", "1c6", "2c6"]
        );
    }

    #[test]
    fn relation_without_samples_is_empty() {
        assert!(parse_samples("n = 1").is_empty());
        assert!(parse_samples("").is_empty());
    }

    #[test]
    fn other_category_samples() {
        let samples = parse_samples(" @integer 0, 2~16, 100, 1000, … @decimal 0.0~1.5, 10.0, …");
        assert_eq!(samples.integers, vec!["0", "2", "16", "100", "1000"]);
        assert_eq!(samples.decimals, vec!["0.0", "1.5", "10.0"]);
    }
}
