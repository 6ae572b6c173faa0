//! End-to-end runs of the library form, from load through save.

use common::error::GatewayError;
use common::form::{
    CancelOutcome, FieldChange, FormPhase, LibraryForm, ReadOnlyReason, SubmitBlocked,
    SubmitOutcome, ToastKind, LOAD_FAILED, NOT_DRAFT, NOT_OWNER, SAVED, SAVED_WITH_OVERWRITE,
};
use common::gateway::translation::decode_translation;
use common::model::cql_library::{CqlLibrary, Model};
use common::model::elm::{ElmTranslation, ElmTranslationError};
use common::route::{Route, LIBRARIES_PATH};
use common::validation::{Field, MODEL_REQUIRED, NAME_PATTERN};

const USER: &str = "john doe";

fn library() -> CqlLibrary {
    CqlLibrary {
        id: Some("cql-lib-1234".to_string()),
        cql_library_name: "Library1".to_string(),
        model: Some(Model::QiCore),
        draft: true,
        version: Some("1.0.000".to_string()),
        group_id: Some("testGroupId".to_string()),
        cql: String::new(),
        created_by: Some(USER.to_string()),
        publisher: Some("Tester".to_string()),
        description: Some("testing stuff.".to_string()),
        ..CqlLibrary::default()
    }
}

fn edit_form(record: CqlLibrary) -> LibraryForm {
    let mut form = LibraryForm::new_edit("cql-lib-1234");
    form.load_succeeded(record, Some(USER));
    form
}

fn external_error() -> ElmTranslationError {
    ElmTranslationError {
        library_id: Some("SupplementalDataElements".to_string()),
        library_version: Some("1.0.000".to_string()),
        start_line: Some(14),
        start_char: Some(1),
        end_line: Some(14),
        end_char: Some(52),
        message: "Could not resolve reference to library QICoreCommon, version 1.0.000 because version 2.0.000 is already loaded.".to_string(),
        error_type: Some("include".to_string()),
        error_severity: Some("Error".to_string()),
        target_include_library_id: Some("QICoreCommon".to_string()),
        target_include_library_version_id: Some("1.0.000".to_string()),
        kind: Some("CqlToElmError".to_string()),
    }
}

#[test]
fn invalid_names_block_submission_with_the_naming_message() {
    for name in ["1234", "Testing_libraryName12", "testinglibraryName12", "Testing libraryName12"] {
        let mut form = edit_form(library());
        form.edit(FieldChange::CqlLibraryName(name.to_string()));
        form.blur(Field::CqlLibraryName);

        assert!(!form.can_submit(), "{name}");
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid), "{name}");
        assert_eq!(form.visible_error(Field::CqlLibraryName).as_deref(), Some(NAME_PATTERN));
        assert_eq!(form.phase(), FormPhase::Ready);
    }
}

#[test]
fn valid_creation_navigates_to_the_list_once() {
    let mut form = LibraryForm::new_create();
    form.edit(FieldChange::CqlLibraryName("NewLibrary".to_string()));
    form.edit(FieldChange::Model(Some(Model::QiCore)));
    assert!(form.can_submit());

    let plan = form.begin_submit().unwrap();
    assert_eq!(plan.payload.id, None);
    assert!(form.is_submitting());
    assert!(!form.can_submit());
    assert_eq!(form.begin_submit(), Err(SubmitBlocked::NotReady));

    let created = CqlLibrary {
        id: Some("new-id".to_string()),
        ..plan.payload.clone()
    };
    assert_eq!(form.submit_succeeded(created.clone()), SubmitOutcome::NavigateToList);
    assert_eq!(form.submit_succeeded(created), SubmitOutcome::Stay);
    assert!(!form.is_dirty());
    assert_eq!(Route::Landing.path(), LIBRARIES_PATH);
}

#[test]
fn loading_the_same_record_twice_gives_the_same_state() {
    let first = edit_form(library());
    let second = edit_form(library());
    assert_eq!(first, second);
    assert!(!first.is_dirty());
}

#[test]
fn disagreeing_header_is_rewritten_and_reported() {
    let mut form = edit_form(library());
    form.edit(FieldChange::CqlLibraryName("UpdatedName1".to_string()));
    form.blur(Field::CqlLibraryName);
    form.edit(FieldChange::Cql("library UpdatedNameTets versionsszz '0.0.000'".to_string()));
    assert!(form.can_submit());

    let plan = form.begin_submit().unwrap();
    assert!(plan.header_overwritten);
    assert_eq!(plan.payload.cql, "library UpdatedName1 version '1.0.000'");
    assert_eq!(plan.payload.cql_library_name, "UpdatedName1");

    let saved = plan.payload.clone();
    assert_eq!(form.submit_succeeded(saved.clone()), SubmitOutcome::Stay);
    assert_eq!(form.toasts().last().map(|t| t.message.as_str()), Some(SAVED_WITH_OVERWRITE));
    assert_eq!(form.toasts().last().map(|t| t.kind), Some(ToastKind::Success));
    assert_eq!(form.draft(), &saved);
    assert!(!form.is_dirty());
}

#[test]
fn consistent_header_saves_with_plain_message() {
    let mut form = edit_form(CqlLibrary {
        cql: "library Library1 version '1.0.000'".to_string(),
        ..library()
    });
    form.edit(FieldChange::Experimental(true));
    form.edit(FieldChange::Publisher(Some("Org2".to_string())));

    let plan = form.begin_submit().unwrap();
    assert!(!plan.header_overwritten);
    assert_eq!(plan.payload.cql, "library Library1 version '1.0.000'");

    let saved = CqlLibrary {
        last_modified_by: Some(USER.to_string()),
        ..plan.payload
    };
    form.submit_succeeded(saved.clone());
    assert_eq!(form.toasts().last().map(|t| t.message.as_str()), Some(SAVED));
    assert_eq!(form.initial(), &saved);
}

#[test]
fn edits_during_a_save_are_ignored() {
    let mut form = edit_form(library());
    form.edit(FieldChange::Description("first".to_string()));

    let plan = form.begin_submit().unwrap();
    assert!(!form.accepts_edits());
    form.edit(FieldChange::Description("typed while saving".to_string()));
    assert_eq!(form.draft().description.as_deref(), Some("first"));

    form.submit_succeeded(plan.payload);
    assert!(form.accepts_edits());
    assert_eq!(form.draft().description.as_deref(), Some("first"));
    assert!(!form.is_dirty());

    form.edit(FieldChange::Description("after save".to_string()));
    assert!(form.is_dirty());
}

#[test]
fn cannot_leave_while_a_create_is_in_flight() {
    let mut form = LibraryForm::new_create();
    assert!(form.can_cancel());
    form.edit(FieldChange::CqlLibraryName("NewLibrary".to_string()));
    form.edit(FieldChange::Model(Some(Model::QiCore)));

    let plan = form.begin_submit().unwrap();
    assert!(!form.can_cancel());

    let created = CqlLibrary {
        id: Some("new-id".to_string()),
        ..plan.payload
    };
    assert_eq!(form.submit_succeeded(created), SubmitOutcome::NavigateToList);
    assert!(form.can_cancel());
}

#[test]
fn cancel_is_available_again_after_a_rejected_save() {
    let mut form = edit_form(library());
    form.edit(FieldChange::Experimental(true));
    form.begin_submit().unwrap();
    assert!(!form.can_cancel());

    form.submit_failed(&GatewayError::Transport("offline".to_string()));
    assert!(form.can_cancel());
    assert_eq!(form.request_cancel(), CancelOutcome::ConfirmDiscard);
}

#[test]
fn non_draft_records_are_read_only() {
    let mut form = edit_form(CqlLibrary {
        draft: false,
        ..library()
    });
    assert_eq!(form.read_only_reason(), Some(ReadOnlyReason::NotDraft));
    assert_eq!(form.read_only_reason().and_then(|r| r.notice()), Some(NOT_DRAFT));

    form.edit(FieldChange::CqlLibraryName("Another".to_string()));
    form.edit(FieldChange::Description("changed".to_string()));
    assert!(!form.is_dirty());
    assert!(!form.can_submit());
    assert_eq!(form.begin_submit(), Err(SubmitBlocked::ReadOnly));
}

#[test]
fn records_of_other_users_are_read_only() {
    let mut form = edit_form(CqlLibrary {
        created_by: Some("someone else".to_string()),
        ..library()
    });
    assert_eq!(form.read_only_reason().and_then(|r| r.notice()), Some(NOT_OWNER));
    form.edit(FieldChange::Experimental(true));
    assert!(!form.can_submit());

    let mut anonymous = LibraryForm::new_edit("cql-lib-1234");
    anonymous.load_succeeded(library(), None);
    assert_eq!(anonymous.read_only_reason(), Some(ReadOnlyReason::NotOwner));
}

#[test]
fn failed_load_locks_the_form() {
    let mut form = LibraryForm::new_edit("cql-lib-1234");
    assert!(form.is_loading());
    form.load_failed(&GatewayError::from_response(500, r#"{"message":"Test error!!"}"#));

    assert_eq!(form.server_error(), Some(LOAD_FAILED));
    assert_eq!(form.read_only_reason(), Some(ReadOnlyReason::LoadFailed));
    assert!(!form.can_submit());
    form.edit(FieldChange::CqlLibraryName("Changed".to_string()));
    assert!(!form.is_dirty());
}

#[test]
fn missing_model_keeps_save_disabled() {
    let mut form = LibraryForm::new_create();
    form.edit(FieldChange::CqlLibraryName("TestingLibraryName12".to_string()));
    form.blur(Field::CqlLibraryName);
    form.blur(Field::Model);

    assert!(!form.can_submit());
    assert_eq!(form.visible_error(Field::CqlLibraryName), None);
    assert_eq!(form.visible_error(Field::Model).as_deref(), Some(MODEL_REQUIRED));
}

#[test]
fn rejected_create_shows_consolidated_message() {
    let mut form = LibraryForm::new_create();
    form.edit(FieldChange::CqlLibraryName("TestingLibraryName12".to_string()));
    form.edit(FieldChange::Model(Some(Model::QiCore)));
    form.begin_submit().unwrap();

    form.submit_failed(&GatewayError::from_response(
        400,
        r#"{"message":"Error X","validationErrors":{"error1":"e1","error2":"e2"}}"#,
    ));

    assert_eq!(form.server_error(), Some("Error X error1 : e1 error2 : e2"));
    assert_eq!(form.phase(), FormPhase::Ready);
    assert!(form.can_submit());
}

#[test]
fn rejected_update_maps_known_fields() {
    let mut form = edit_form(library());
    form.edit(FieldChange::CqlLibraryName("Library2".to_string()));
    form.begin_submit().unwrap();
    form.submit_failed(&GatewayError::from_response(
        400,
        r#"{"message":"Invalid","validationErrors":{"cqlLibraryName":"Library name must be unique.","other":"x"}}"#,
    ));

    assert_eq!(
        form.visible_error(Field::CqlLibraryName).as_deref(),
        Some("Library name must be unique.")
    );
    assert_eq!(
        form.server_error(),
        Some("Invalid cqlLibraryName : Library name must be unique. other : x")
    );
}

#[test]
fn failure_without_message_uses_generic_text() {
    let mut form = edit_form(library());
    form.edit(FieldChange::Description("new".to_string()));
    form.begin_submit().unwrap();
    form.submit_failed(&GatewayError::Transport("connection reset".to_string()));
    assert_eq!(form.server_error(), Some("An error occurred while updating the CQL Library"));
}

#[test]
fn failed_translation_applies_nothing() {
    let mut form = edit_form(library());
    let outcome = decode_translation(500, "");
    assert!(outcome.is_err());
    assert!(!form.apply_translation(outcome));
    assert!(form.toasts().is_empty());
    assert!(form.annotations().is_empty());
}

#[test]
fn external_errors_raise_one_notification_each() {
    let mut form = edit_form(library());
    let translation = ElmTranslation {
        external_errors: vec![external_error()],
        ..ElmTranslation::default()
    };

    assert!(form.apply_translation(Ok(translation.clone())));
    assert_eq!(form.toasts().len(), 1);
    assert_eq!(form.toasts()[0].kind, ToastKind::Warning);
    assert_eq!(form.toasts()[0].message, external_error().message);

    form.apply_translation(Ok(translation.clone()));
    assert_eq!(form.toasts().len(), 1);

    form.apply_translation(Ok(ElmTranslation::default()));
    form.apply_translation(Ok(translation));
    assert_eq!(form.toasts().len(), 2);
}

#[test]
fn translation_errors_never_block_saving() {
    let mut form = edit_form(library());
    form.edit(FieldChange::Cql("library Library1 version '1.0.000'\ndefine X: ".to_string()));
    form.apply_translation(Ok(ElmTranslation {
        error_exceptions: vec![ElmTranslationError {
            start_line: Some(2),
            start_char: Some(10),
            message: "Syntax error".to_string(),
            error_severity: Some("Error".to_string()),
            ..ElmTranslationError::default()
        }],
        ..ElmTranslation::default()
    }));

    assert_eq!(form.annotations().len(), 1);
    assert!(form.can_submit());
    let plan = form.begin_submit().unwrap();
    assert!(plan.payload.cql_errors);
}

#[test]
fn cancel_with_unsaved_changes_asks_first() {
    let mut form = edit_form(library());
    form.edit(FieldChange::CqlLibraryName("TestinglibraryName12".to_string()));
    let draft = form.draft().clone();

    assert_eq!(form.request_cancel(), CancelOutcome::ConfirmDiscard);
    assert!(form.discard_dialog_open());

    form.resume_editing();
    assert!(!form.discard_dialog_open());
    assert_eq!(form.draft(), &draft);

    assert_eq!(form.request_cancel(), CancelOutcome::ConfirmDiscard);
    assert_eq!(form.discard_changes(), CancelOutcome::NavigateToList);
    assert!(!form.is_dirty());
    assert_eq!(Route::recognize(LIBRARIES_PATH), Route::Landing);
}

#[test]
fn cancel_without_changes_leaves_immediately() {
    let mut form = edit_form(library());
    assert_eq!(form.request_cancel(), CancelOutcome::NavigateToList);
    assert!(!form.discard_dialog_open());
}
