//! Shared helpers for integration tests: rule maps and a slice of real CLDR
//! plural data.

use std::collections::BTreeMap;

use cldr_plural::{PluralData, RuleStrings};

/// Builds a rule map from `(category, relation)` pairs.
pub fn rules(entries: &[(&str, &str)]) -> RuleStrings {
    entries
        .iter()
        .map(|(category, relation)| {
            (
                format!("pluralRule-count-{category}"),
                (*relation).to_string(),
            )
        })
        .collect()
}

/// Cardinal and ordinal rules of a handful of CLDR locales, verbatim.
pub fn cldr_data() -> PluralData {
    let mut cardinal = BTreeMap::new();
    let mut ordinal = BTreeMap::new();

    cardinal.insert(
        "en".to_string(),
        rules(&[
            ("one", "i = 1 and v = 0 @integer 1"),
            (
                "other",
                " @integer 0, 2~16, 100, 1000, 10000, 100000, 1000000, … @decimal 0.0~1.5, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
            ),
        ]),
    );
    ordinal.insert(
        "en".to_string(),
        rules(&[
            (
                "one",
                "n % 10 = 1 and n % 100 != 11 @integer 1, 21, 31, 41, 51, 61, 71, 81, 101, 1001, …",
            ),
            (
                "two",
                "n % 10 = 2 and n % 100 != 12 @integer 2, 22, 32, 42, 52, 62, 72, 82, 102, 1002, …",
            ),
            (
                "few",
                "n % 10 = 3 and n % 100 != 13 @integer 3, 23, 33, 43, 53, 63, 73, 83, 103, 1003, …",
            ),
            (
                "other",
                " @integer 0, 4~18, 100, 1000, 10000, 100000, 1000000, …",
            ),
        ]),
    );

    cardinal.insert(
        "ru".to_string(),
        rules(&[
            (
                "one",
                "v = 0 and i % 10 = 1 and i % 100 != 11 @integer 1, 21, 31, 41, 51, 61, 71, 81, 101, 1001, …",
            ),
            (
                "few",
                "v = 0 and i % 10 = 2..4 and i % 100 != 12..14 @integer 2~4, 22~24, 32~34, 42~44, 52~54, 62, 102, 1002, …",
            ),
            (
                "many",
                "v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14 @integer 0, 5~19, 100, 1000, 10000, 100000, 1000000, …",
            ),
            (
                "other",
                "   @decimal 0.0~1.5, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
            ),
        ]),
    );

    cardinal.insert(
        "pl".to_string(),
        rules(&[
            ("one", "i = 1 and v = 0 @integer 1"),
            (
                "few",
                "v = 0 and i % 10 = 2..4 and i % 100 != 12..14 @integer 2~4, 22~24, 32~34, 42~44, 52~54, 62, 102, 1002, …",
            ),
            (
                "many",
                "v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 12..14 @integer 0, 5~19, 100, 1000, 10000, 100000, 1000000, …",
            ),
            (
                "other",
                "   @decimal 0.0~1.5, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
            ),
        ]),
    );

    cardinal.insert(
        "ar".to_string(),
        rules(&[
            ("zero", "n = 0 @integer 0 @decimal 0.0, 0.00, 0.000, 0.0000"),
            ("one", "n = 1 @integer 1 @decimal 1.0, 1.00, 1.000, 1.0000"),
            ("two", "n = 2 @integer 2 @decimal 2.0, 2.00, 2.000, 2.0000"),
            (
                "few",
                "n % 100 = 3..10 @integer 3~10, 103~110, 1003, … @decimal 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 103.0, 1003.0, …",
            ),
            (
                "many",
                "n % 100 = 11..99 @integer 11~26, 111, 1011, … @decimal 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 111.0, 1011.0, …",
            ),
            (
                "other",
                " @integer 100~102, 200~202, 300~302, 400~402, 500~502, 600, 1000, 10000, 100000, 1000000, … @decimal 0.1~0.9, 1.1~1.7, 10.1, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
            ),
        ]),
    );
    ordinal.insert(
        "ar".to_string(),
        rules(&[("other", " @integer 0~15, 100, 1000, 10000, 100000, 1000000, …")]),
    );

    cardinal.insert(
        "cy".to_string(),
        rules(&[
            ("zero", "n = 0 @integer 0 @decimal 0.0, 0.00, 0.000, 0.0000"),
            ("one", "n = 1 @integer 1 @decimal 1.0, 1.00, 1.000, 1.0000"),
            ("two", "n = 2 @integer 2 @decimal 2.0, 2.00, 2.000, 2.0000"),
            ("few", "n = 3 @integer 3 @decimal 3.0, 3.00, 3.000, 3.0000"),
            ("many", "n = 6 @integer 6 @decimal 6.0, 6.00, 6.000, 6.0000"),
            (
                "other",
                " @integer 4, 5, 7~20, 100, 1000, 10000, 100000, 1000000, … @decimal 0.1~0.9, 1.1~1.7, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
            ),
        ]),
    );
    ordinal.insert(
        "cy".to_string(),
        rules(&[
            ("zero", "n = 0,7,8,9 @integer 0, 7~9"),
            ("one", "n = 1 @integer 1"),
            ("two", "n = 2 @integer 2"),
            ("few", "n = 3,4 @integer 3, 4"),
            ("many", "n = 5,6 @integer 5, 6"),
            (
                "other",
                " @integer 10~25, 100, 1000, 10000, 100000, 1000000, …",
            ),
        ]),
    );

    cardinal.insert(
        "lt".to_string(),
        rules(&[
            (
                "one",
                "n % 10 = 1 and n % 100 != 11..19 @integer 1, 21, 31, 41, 51, 61, 71, 81, 101, 1001, … @decimal 1.0, 21.0, 31.0, 41.0, 51.0, 61.0, 71.0, 81.0, 101.0, 1001.0, …",
            ),
            (
                "few",
                "n % 10 = 2..9 and n % 100 != 11..19 @integer 2~9, 22~29, 102, 1002, … @decimal 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 22.0, 102.0, 1002.0, …",
            ),
            (
                "many",
                "f != 0   @decimal 0.1~0.9, 1.1~1.7, 10.1, 100.1, 1000.1, …",
            ),
            (
                "other",
                " @integer 0, 10~20, 30, 40, 50, 60, 100, 1000, 10000, 100000, 1000000, … @decimal 0.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
            ),
        ]),
    );

    cardinal.insert(
        "am".to_string(),
        rules(&[
            (
                "one",
                "i = 0 or n = 1 @integer 0, 1 @decimal 0.0~1.0, 0.00~0.04",
            ),
            (
                "other",
                " @integer 2~17, 100, 1000, 10000, 100000, 1000000, … @decimal 1.1~2.6, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
            ),
        ]),
    );

    cardinal.insert(
        "ja".to_string(),
        rules(&[(
            "other",
            " @integer 0~15, 100, 1000, 10000, 100000, 1000000, … @decimal 0.0~1.5, 10.0, 100.0, 1000.0, 10000.0, 100000.0, 1000000.0, …",
        )]),
    );
    ordinal.insert(
        "ja".to_string(),
        rules(&[("other", " @integer 0~15, 100, 1000, 10000, 100000, 1000000, …")]),
    );

    PluralData { cardinal, ordinal }
}
