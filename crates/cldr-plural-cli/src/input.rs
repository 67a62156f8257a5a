//! Loading CLDR supplemental plural JSON documents.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use cldr_plural::{PluralData, RuleStrings};
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const CARDINAL_KEY: &str = "plurals-type-cardinal";
const ORDINAL_KEY: &str = "plurals-type-ordinal";

/// An input file could not be turned into plural data.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("cannot read {}", path.display())]
    #[diagnostic(code(makeplural::input::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a CLDR supplemental JSON document", path.display())]
    #[diagnostic(
        code(makeplural::input::json),
        help("expected an object of the form {{\"supplemental\": {{...}}}}")
    )]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no '{key}' section", path.display())]
    #[diagnostic(code(makeplural::input::section))]
    MissingSection { path: PathBuf, key: &'static str },
}

impl InputError {
    /// Exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::Read { .. } => exitcode::NOINPUT,
            InputError::Json { .. } | InputError::MissingSection { .. } => exitcode::DATAERR,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    supplemental: Supplemental,
}

#[derive(Debug, Deserialize)]
struct Supplemental {
    #[serde(default)]
    version: Version,
    #[serde(rename = "plurals-type-cardinal")]
    cardinal: Option<BTreeMap<String, RuleStrings>>,
    #[serde(rename = "plurals-type-ordinal")]
    ordinal: Option<BTreeMap<String, RuleStrings>>,
}

/// Newer CLDR releases write `_cldrVersion`, older ones `_number`.
#[derive(Debug, Default, Deserialize)]
struct Version {
    #[serde(rename = "_cldrVersion")]
    cldr: Option<String>,
    #[serde(rename = "_number")]
    number: Option<String>,
}

impl Version {
    fn into_string(self) -> Option<String> {
        self.cldr.or(self.number)
    }
}

/// Plural data read from disk, with the CLDR version it came from.
#[derive(Debug)]
pub struct Input {
    pub data: PluralData,
    pub version: Option<String>,
}

fn read_document(path: &Path) -> Result<Supplemental, InputError> {
    let content = read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Document =
        serde_json::from_str(&content).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(document.supplemental)
}

/// Reads the cardinal document and, if given, the ordinal document.
///
/// The cardinal document must carry `plurals-type-cardinal`; an ordinal
/// section inside it is used when no separate ordinal file is given.
pub fn load(plurals: &Path, ordinals: Option<&Path>) -> Result<Input, InputError> {
    let cardinal_doc = read_document(plurals)?;
    let cardinal = cardinal_doc
        .cardinal
        .ok_or_else(|| InputError::MissingSection {
            path: plurals.to_path_buf(),
            key: CARDINAL_KEY,
        })?;
    let mut version = cardinal_doc.version.into_string();

    let ordinal = match ordinals {
        Some(path) => {
            let ordinal_doc = read_document(path)?;
            version = version.or(ordinal_doc.version.into_string());
            ordinal_doc
                .ordinal
                .ok_or_else(|| InputError::MissingSection {
                    path: path.to_path_buf(),
                    key: ORDINAL_KEY,
                })?
        }
        None => cardinal_doc.ordinal.unwrap_or_default(),
    };

    debug!(
        cardinal = cardinal.len(),
        ordinal = ordinal.len(),
        version = version.as_deref().unwrap_or("unknown"),
        "loaded plural data"
    );

    Ok(Input {
        data: PluralData { cardinal, ordinal },
        version,
    })
}
