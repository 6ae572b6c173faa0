//! Field rules for a CQL library record.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::cql_library::{CqlLibrary, Model};

pub const NAME_REQUIRED: &str = "Library name is required.";
pub const NAME_PATTERN: &str = "Library name must start with an upper case letter, followed by alpha-numeric character(s) and must not contain spaces or other special characters.";
pub const MODEL_REQUIRED: &str = "A CQL library model is required.";

static LIBRARY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("library name pattern compiles"));

/// Editable fields of the library form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    CqlLibraryName,
    Model,
    Cql,
    Publisher,
    Description,
    Experimental,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::CqlLibraryName,
        Field::Model,
        Field::Cql,
        Field::Publisher,
        Field::Description,
        Field::Experimental,
    ];

    /// Property name the service uses for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::CqlLibraryName => "cqlLibraryName",
            Field::Model => "model",
            Field::Cql => "cql",
            Field::Publisher => "publisher",
            Field::Description => "description",
            Field::Experimental => "experimental",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

pub fn validate_library_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(NAME_REQUIRED.to_string());
    }
    if !LIBRARY_NAME_RE.is_match(name) {
        return Err(NAME_PATTERN.to_string());
    }
    Ok(())
}

pub fn validate_model(model: Option<Model>) -> Result<(), String> {
    match model {
        Some(_) => Ok(()),
        None => Err(MODEL_REQUIRED.to_string()),
    }
}

/// Runs the rule for a single field. Fields without a rule always pass.
pub fn validate_field(library: &CqlLibrary, field: Field) -> Result<(), String> {
    match field {
        Field::CqlLibraryName => validate_library_name(&library.cql_library_name),
        Field::Model => validate_model(library.model),
        Field::Cql | Field::Publisher | Field::Description | Field::Experimental => Ok(()),
    }
}

/// Runs every rule and collects the failures.
pub fn validate_library(library: &CqlLibrary) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(library, field)
                .err()
                .map(|message| (field, message))
        })
        .collect()
}
