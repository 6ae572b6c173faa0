//! Turning a CQL-to-ELM translation into what the editor shows.
//!
//! Errors located in the edited document become editor annotations. Errors
//! raised while resolving an included library cannot be pinned to the edited
//! text in a useful way and are surfaced as notifications instead.

use crate::model::elm::{ElmTranslation, ElmTranslationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn from_translator(severity: Option<&str>) -> Severity {
        match severity {
            Some(s) if s.eq_ignore_ascii_case("warning") => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A diagnostic placed on the edited document. Rows and columns are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorAnnotation {
    pub row: u32,
    pub column: u32,
    pub end_row: u32,
    pub end_column: u32,
    pub severity: Severity,
    pub message: String,
}

impl EditorAnnotation {
    fn from_error(error: &ElmTranslationError) -> Self {
        let row = to_zero_based(error.start_line);
        let column = to_zero_based(error.start_char);
        Self {
            row,
            column,
            end_row: error.end_line.map_or(row, |line| to_zero_based(Some(line)).max(row)),
            end_column: error.end_char.map_or(column, |c| to_zero_based(Some(c))),
            severity: Severity::from_translator(error.error_severity.as_deref()),
            message: error.message.clone(),
        }
    }
}

fn to_zero_based(position: Option<u32>) -> u32 {
    position.unwrap_or(1).saturating_sub(1)
}

/// Identity of an external error: the included library it refers to and where
/// the include sits. Two reports with the same key are the same problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalErrorKey {
    pub library_id: Option<String>,
    pub library_version: Option<String>,
    pub start: (Option<u32>, Option<u32>),
    pub end: (Option<u32>, Option<u32>),
}

impl ExternalErrorKey {
    pub fn of(error: &ElmTranslationError) -> Self {
        Self {
            library_id: error.target_include_library_id.clone(),
            library_version: error.target_include_library_version_id.clone(),
            start: (error.start_line, error.start_char),
            end: (error.end_line, error.end_char),
        }
    }
}

/// Diagnostics of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub annotations: Vec<EditorAnnotation>,
    pub external_errors: Vec<ElmTranslationError>,
}

impl ValidationResult {
    pub fn from_translation(translation: &ElmTranslation) -> Self {
        let mut result = ValidationResult::default();
        let mut seen: Vec<ExternalErrorKey> = Vec::new();

        let mut push_external = |error: &ElmTranslationError, result: &mut ValidationResult| {
            let key = ExternalErrorKey::of(error);
            if !seen.contains(&key) {
                seen.push(key);
                result.external_errors.push(error.clone());
            }
        };

        for error in &translation.error_exceptions {
            if error.target_include_library_id.is_some() {
                push_external(error, &mut result);
            } else {
                result.annotations.push(EditorAnnotation::from_error(error));
            }
        }
        for error in &translation.external_errors {
            push_external(error, &mut result);
        }
        result
    }

    /// Whether the document itself failed to translate. Warnings and external
    /// errors do not count.
    pub fn has_errors(&self) -> bool {
        self.annotations
            .iter()
            .any(|annotation| annotation.severity == Severity::Error)
    }
}
