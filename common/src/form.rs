//! The create/edit workflow of a CQL library, as a state machine.
//!
//! `LibraryForm` owns the record being edited and decides what the user may do
//! next. It performs no I/O: the component driving it starts the service calls
//! and feeds their results back through the `*_succeeded` / `*_failed` methods.
//!
//! ```text
//! Loading --load--> Ready --begin_submit--> Submitting --result--> Ready
//! ```
//!
//! The create flow starts in `Ready`. Read-only is a property of `Ready`: a
//! record that failed to load, is not a draft, or belongs to someone else can
//! be looked at but not changed.

use std::collections::BTreeSet;
use uuid::Uuid;

use crate::cql_header::synchronize_header;
use crate::error::{GatewayError, GatewayResult};
use crate::model::cql_library::{CqlLibrary, Model};
use crate::model::elm::ElmTranslation;
use crate::translation::{EditorAnnotation, ExternalErrorKey, ValidationResult};
use crate::validation::{validate_field, validate_library, Field, FieldErrors};

pub const LOAD_FAILED: &str = "An error occurred while fetching the CQL Library!";
pub const NOT_DRAFT: &str = "CQL Library is not a draft. Only drafts can be edited.";
pub const NOT_OWNER: &str = "You are not the owner of the CQL Library. Only owner can edit it.";
pub const SAVED: &str = "CQL Library saved successfully";
pub const SAVED_WITH_OVERWRITE: &str = "CQL updated successfully! Library Name and/or Version can not be updated in the CQL Editor. MADiE has overwritten the updated Library Name and/or Version.";
pub const CREATE_FAILED: &str = "An error occurred while creating the CQL Library";
pub const UPDATE_FAILED: &str = "An error occurred while updating the CQL Library";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOnlyReason {
    LoadFailed,
    NotDraft,
    NotOwner,
}

impl ReadOnlyReason {
    /// Banner explaining why the form is locked. Load failures are reported
    /// through the server error instead.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            ReadOnlyReason::LoadFailed => None,
            ReadOnlyReason::NotDraft => Some(NOT_DRAFT),
            ReadOnlyReason::NotOwner => Some(NOT_OWNER),
        }
    }
}

/// A user edit to one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    CqlLibraryName(String),
    Model(Option<Model>),
    Cql(String),
    Publisher(Option<String>),
    Description(String),
    Experimental(bool),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::CqlLibraryName(_) => Field::CqlLibraryName,
            FieldChange::Model(_) => Field::Model,
            FieldChange::Cql(_) => Field::Cql,
            FieldChange::Publisher(_) => Field::Publisher,
            FieldChange::Description(_) => Field::Description,
            FieldChange::Experimental(_) => Field::Experimental,
        }
    }

    /// Produces the next draft. The previous one is left as it was.
    fn apply(self, draft: &CqlLibrary) -> CqlLibrary {
        let mut next = draft.clone();
        match self {
            FieldChange::CqlLibraryName(name) => next.cql_library_name = name,
            FieldChange::Model(model) => next.model = model,
            FieldChange::Cql(cql) => next.cql = cql,
            FieldChange::Publisher(publisher) => {
                next.publisher = publisher.filter(|p| !p.trim().is_empty())
            }
            FieldChange::Description(description) => {
                next.description = Some(description).filter(|d| !d.is_empty())
            }
            FieldChange::Experimental(experimental) => next.experimental = experimental,
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

/// Everything the component needs to send a save request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitPlan {
    pub mode: FormMode,
    pub payload: CqlLibrary,
    pub header_overwritten: bool,
}

/// Why `begin_submit` refused to start a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    NotReady,
    ReadOnly,
    Invalid,
    NotDirty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    NavigateToList,
    Stay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    NavigateToList,
    ConfirmDiscard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryForm {
    mode: FormMode,
    phase: FormPhase,
    initial: CqlLibrary,
    draft: CqlLibrary,
    touched: BTreeSet<Field>,
    server_field_errors: FieldErrors,
    server_error: Option<String>,
    read_only: Option<ReadOnlyReason>,
    discard_dialog_open: bool,
    toasts: Vec<Toast>,
    annotations: Vec<EditorAnnotation>,
    reported_external: Vec<ExternalErrorKey>,
    cql_errors: bool,
    overwrite_pending: bool,
}

impl LibraryForm {
    fn with(mode: FormMode, phase: FormPhase) -> Self {
        let initial = CqlLibrary::new_draft();
        Self {
            mode,
            phase,
            draft: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            server_field_errors: FieldErrors::new(),
            server_error: None,
            read_only: None,
            discard_dialog_open: false,
            toasts: Vec::new(),
            annotations: Vec::new(),
            reported_external: Vec::new(),
            cql_errors: false,
            overwrite_pending: false,
        }
    }

    /// Blank, editable form for a new library.
    pub fn new_create() -> Self {
        Self::with(FormMode::Create, FormPhase::Ready)
    }

    /// Form waiting for library `id` to load.
    pub fn new_edit(id: impl Into<String>) -> Self {
        Self::with(FormMode::Edit { id: id.into() }, FormPhase::Loading)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &CqlLibrary {
        &self.draft
    }

    pub fn initial(&self) -> &CqlLibrary {
        &self.initial
    }

    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn read_only_reason(&self) -> Option<ReadOnlyReason> {
        self.read_only
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether inputs take edits: loaded, not locked and no save in flight.
    pub fn accepts_edits(&self) -> bool {
        self.phase == FormPhase::Ready && !self.is_read_only()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.initial
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn discard_dialog_open(&self) -> bool {
        self.discard_dialog_open
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn annotations(&self) -> &[EditorAnnotation] {
        &self.annotations
    }

    /// True when every field rule passes, touched or not.
    pub fn is_valid(&self) -> bool {
        validate_library(&self.draft).is_empty()
    }

    /// Whether the save control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Ready && !self.is_read_only() && self.is_dirty() && self.is_valid()
    }

    /// Error to show under `field`. Service-reported errors win; rule failures
    /// show only once the field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if let Some(message) = self.server_field_errors.get(&field) {
            return Some(message.clone());
        }
        if self.touched.contains(&field) {
            return validate_field(&self.draft, field).err();
        }
        None
    }

    pub fn load_succeeded(&mut self, record: CqlLibrary, current_user: Option<&str>) {
        if self.phase != FormPhase::Loading {
            return;
        }
        self.read_only = if !record.draft {
            Some(ReadOnlyReason::NotDraft)
        } else if !current_user.is_some_and(|user| record.is_owned_by(user)) {
            Some(ReadOnlyReason::NotOwner)
        } else {
            None
        };
        self.reset_to(record);
        self.server_error = None;
        self.phase = FormPhase::Ready;
    }

    pub fn load_failed(&mut self, _error: &GatewayError) {
        if self.phase != FormPhase::Loading {
            return;
        }
        self.read_only = Some(ReadOnlyReason::LoadFailed);
        self.server_error = Some(LOAD_FAILED.to_string());
        self.phase = FormPhase::Ready;
    }

    /// Applies a user edit. Ignored while loading, while a save is in flight
    /// or when the form is locked.
    pub fn edit(&mut self, change: FieldChange) {
        if !self.accepts_edits() {
            return;
        }
        let field = change.field();
        self.draft = change.apply(&self.draft);
        self.server_field_errors.remove(&field);
        self.server_error = None;
    }

    /// Marks `field` as visited so its rule failures become visible.
    pub fn blur(&mut self, field: Field) {
        if self.phase != FormPhase::Loading {
            self.touched.insert(field);
        }
    }

    /// Starts a save.
    ///
    /// Touches every field so failures become visible, then brings the CQL
    /// header in line with the structured name (and version, when editing).
    pub fn begin_submit(&mut self) -> Result<SubmitPlan, SubmitBlocked> {
        if self.phase != FormPhase::Ready {
            return Err(SubmitBlocked::NotReady);
        }
        if self.is_read_only() {
            return Err(SubmitBlocked::ReadOnly);
        }
        self.touched.extend(Field::ALL);
        if !self.is_valid() {
            return Err(SubmitBlocked::Invalid);
        }
        if !self.is_dirty() {
            return Err(SubmitBlocked::NotDirty);
        }

        let version = match self.mode {
            FormMode::Create => None,
            FormMode::Edit { .. } => self.draft.version.as_deref(),
        };
        let sync = synchronize_header(&self.draft.cql, &self.draft.cql_library_name, version);

        let mut payload = self.draft.clone();
        payload.cql = sync.cql;
        payload.cql_errors = self.cql_errors;

        self.overwrite_pending = sync.overwritten;
        self.server_error = None;
        self.server_field_errors.clear();
        self.phase = FormPhase::Submitting;

        Ok(SubmitPlan {
            mode: self.mode.clone(),
            payload,
            header_overwritten: sync.overwritten,
        })
    }

    /// Records a saved library. The service's copy replaces the local one.
    pub fn submit_succeeded(&mut self, record: CqlLibrary) -> SubmitOutcome {
        if self.phase != FormPhase::Submitting {
            return SubmitOutcome::Stay;
        }
        self.phase = FormPhase::Ready;
        let overwritten = std::mem::take(&mut self.overwrite_pending);
        self.reset_to(record);

        match self.mode {
            FormMode::Create => SubmitOutcome::NavigateToList,
            FormMode::Edit { .. } => {
                let message = if overwritten { SAVED_WITH_OVERWRITE } else { SAVED };
                self.push_toast(ToastKind::Success, message);
                SubmitOutcome::Stay
            }
        }
    }

    /// Records a rejected save. Field-level rejections are shown under their
    /// fields as well as in the summary line.
    pub fn submit_failed(&mut self, error: &GatewayError) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = FormPhase::Ready;
        self.overwrite_pending = false;

        if let Some(fields) = error.field_errors() {
            for (key, message) in fields {
                if let Some(field) = Field::from_key(key) {
                    self.server_field_errors.insert(field, message.clone());
                    self.touched.insert(field);
                }
            }
        }

        let fallback = match self.mode {
            FormMode::Create => CREATE_FAILED,
            FormMode::Edit { .. } => UPDATE_FAILED,
        };
        self.server_error = Some(match error {
            GatewayError::Configuration(message) => message.clone(),
            other => other.server_message().unwrap_or_else(|| fallback.to_string()),
        });
    }

    /// Whether the form can be left. Not while a save is in flight, so its
    /// answer always reaches the form.
    pub fn can_cancel(&self) -> bool {
        self.phase != FormPhase::Submitting
    }

    /// Leaves the form, asking first when there are unsaved changes.
    pub fn request_cancel(&mut self) -> CancelOutcome {
        if self.is_dirty() {
            self.discard_dialog_open = true;
            CancelOutcome::ConfirmDiscard
        } else {
            CancelOutcome::NavigateToList
        }
    }

    /// Closes the discard dialog and keeps the draft as it is.
    pub fn resume_editing(&mut self) {
        self.discard_dialog_open = false;
    }

    /// Drops unsaved changes and leaves the form.
    pub fn discard_changes(&mut self) -> CancelOutcome {
        self.discard_dialog_open = false;
        self.draft = self.initial.clone();
        self.touched.clear();
        self.server_field_errors.clear();
        CancelOutcome::NavigateToList
    }

    /// Applies the outcome of a translation run. A failed run changes nothing.
    /// Returns whether the result was applied.
    pub fn apply_translation(&mut self, outcome: GatewayResult<ElmTranslation>) -> bool {
        match outcome {
            Ok(translation) => {
                self.apply_validation(&ValidationResult::from_translation(&translation));
                true
            }
            Err(_) => false,
        }
    }

    /// Stores editor annotations and raises one notification per external
    /// error that was not already reported by the previous run.
    pub fn apply_validation(&mut self, result: &ValidationResult) {
        self.annotations = result.annotations.clone();
        self.cql_errors = result.has_errors();

        let mut current = Vec::with_capacity(result.external_errors.len());
        for error in &result.external_errors {
            let key = ExternalErrorKey::of(error);
            if !self.reported_external.contains(&key) {
                self.toasts.push(Toast::new(ToastKind::Warning, error.message.clone()));
            }
            current.push(key);
        }
        self.reported_external = current;
    }

    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(Toast::new(kind, message));
    }

    pub fn dismiss_toast(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    fn reset_to(&mut self, record: CqlLibrary) {
        self.initial = record.clone();
        self.draft = record;
        self.touched.clear();
        self.server_field_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::NAME_PATTERN;

    fn loaded(record: CqlLibrary) -> LibraryForm {
        let mut form = LibraryForm::new_edit("cql-lib-1234");
        form.load_succeeded(record, Some("john doe"));
        form
    }

    fn owned_draft() -> CqlLibrary {
        CqlLibrary {
            id: Some("cql-lib-1234".to_string()),
            cql_library_name: "Library1".to_string(),
            model: Some(Model::QiCore),
            draft: true,
            created_by: Some("john doe".to_string()),
            ..CqlLibrary::default()
        }
    }

    #[test]
    fn create_form_starts_ready_and_clean() {
        let form = LibraryForm::new_create();
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(form.draft().draft);
        assert!(!form.is_dirty());
        assert!(!form.can_submit());
    }

    #[test]
    fn edits_are_ignored_while_loading() {
        let mut form = LibraryForm::new_edit("x");
        form.edit(FieldChange::CqlLibraryName("Changed".to_string()));
        form.blur(Field::CqlLibraryName);
        assert_eq!(form.draft().cql_library_name, "");
        assert!(!form.is_touched(Field::CqlLibraryName));
    }

    #[test]
    fn rule_errors_show_only_after_blur() {
        let mut form = loaded(owned_draft());
        form.edit(FieldChange::CqlLibraryName("bad name".to_string()));
        assert_eq!(form.visible_error(Field::CqlLibraryName), None);
        assert!(!form.can_submit());

        form.blur(Field::CqlLibraryName);
        assert_eq!(form.visible_error(Field::CqlLibraryName).as_deref(), Some(NAME_PATTERN));
    }

    #[test]
    fn editing_a_rejected_field_clears_its_service_error() {
        let mut form = loaded(owned_draft());
        form.edit(FieldChange::CqlLibraryName("Library2".to_string()));
        form.begin_submit().unwrap();
        form.submit_failed(&GatewayError::from_response(
            400,
            r#"{"message":"Invalid","validationErrors":{"cqlLibraryName":"Name taken"}}"#,
        ));
        assert_eq!(form.visible_error(Field::CqlLibraryName).as_deref(), Some("Name taken"));

        form.edit(FieldChange::CqlLibraryName("Library3".to_string()));
        assert_eq!(form.visible_error(Field::CqlLibraryName), None);
        assert_eq!(form.server_error(), None);
    }

    #[test]
    fn blank_publisher_and_description_clear_the_value() {
        let mut form = loaded(CqlLibrary {
            publisher: Some("Org1".to_string()),
            description: Some("stuff".to_string()),
            ..owned_draft()
        });
        form.edit(FieldChange::Publisher(Some("  ".to_string())));
        form.edit(FieldChange::Description(String::new()));
        assert_eq!(form.draft().publisher, None);
        assert_eq!(form.draft().description, None);
    }

    #[test]
    fn results_outside_their_phase_are_ignored() {
        let mut form = loaded(owned_draft());
        let before = form.clone();
        form.load_succeeded(CqlLibrary::default(), None);
        form.load_failed(&GatewayError::NotFound);
        assert_eq!(form.submit_succeeded(CqlLibrary::default()), SubmitOutcome::Stay);
        form.submit_failed(&GatewayError::NotFound);
        assert_eq!(form, before);
    }

    #[test]
    fn configuration_error_is_shown_verbatim() {
        let mut form = LibraryForm::new_create();
        form.edit(FieldChange::CqlLibraryName("NewLib".to_string()));
        form.edit(FieldChange::Model(Some(Model::QiCore)));
        form.begin_submit().unwrap();
        form.submit_failed(&GatewayError::Configuration("Missing URL".to_string()));
        assert_eq!(form.server_error(), Some("Missing URL"));
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[test]
    fn toasts_can_be_dismissed() {
        let mut form = LibraryForm::new_create();
        form.push_toast(ToastKind::Danger, "one");
        form.push_toast(ToastKind::Danger, "two");
        let first = form.toasts()[0].id;
        form.dismiss_toast(first);
        assert_eq!(form.toasts().len(), 1);
        assert_eq!(form.toasts()[0].message, "two");
    }
}
