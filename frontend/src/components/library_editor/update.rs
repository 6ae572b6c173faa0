//! Update function for the library editor.
//!
//! Every message is forwarded to the `LibraryForm`; this function only adds
//! the side effects the form cannot perform itself (network calls, timers,
//! navigation and the page-level unsaved-changes flag).

use common::form::{CancelOutcome, FormMode, SubmitOutcome};
use common::route::Route;
use common::translation::ValidationResult;
use common::validation::Field;
use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::navigation::set_dirty_flag;

use super::helpers::schedule_validation;
use super::messages::Msg;
use super::state::LibraryEditorComponent;

pub fn update(
    component: &mut LibraryEditorComponent,
    ctx: &Context<LibraryEditorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded(Ok(record)) => {
            let user = ctx.props().services.current_user();
            component.form.load_succeeded(record, user.as_deref());
            let seq = component.validations.next();
            ctx.link().send_message(Msg::ValidateCql(seq));
            true
        }
        Msg::Loaded(Err(error)) => {
            warn!("Failed to load CQL library:", error.to_string());
            component.form.load_failed(&error);
            true
        }
        Msg::OrganizationsLoaded(Ok(organizations)) => {
            component.organizations = organizations.into_iter().map(|o| o.name).collect();
            true
        }
        Msg::OrganizationsLoaded(Err(error)) => {
            warn!("Failed to load organizations:", error.to_string());
            false
        }
        Msg::Edit(change) => {
            let touches_cql = change.field() == Field::Cql;
            component.form.edit(change);
            set_dirty_flag(component.form.is_dirty());
            if touches_cql {
                let seq = component.validations.next();
                schedule_validation(ctx.link(), seq);
            }
            true
        }
        Msg::Blur(field) => {
            component.form.blur(field);
            true
        }
        Msg::ValidateCql(seq) => {
            if !component.validations.is_current(seq) {
                return false;
            }
            let cql = component.form.draft().cql.clone();
            if cql.trim().is_empty() {
                component.form.apply_validation(&ValidationResult::default());
                return true;
            }
            let translator = ctx.props().services.translator.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = translator.translate_cql_to_elm(&cql).await;
                link.send_message(Msg::Translated(seq, result));
            });
            false
        }
        Msg::Translated(seq, result) => {
            if !component.validations.is_current(seq) {
                return false;
            }
            if let Err(error) = &result {
                warn!("CQL validation did not complete:", error.to_string());
            }
            component.form.apply_translation(result)
        }
        Msg::Submit => {
            let plan = match component.form.begin_submit() {
                Ok(plan) => plan,
                // Blocked submits may still have touched every field.
                Err(_) => return true,
            };
            if plan.header_overwritten {
                log!("Library header rewritten to match name and version");
            }
            let libraries = ctx.props().services.libraries.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match plan.mode {
                    FormMode::Create => libraries.create_cql_library(&plan.payload).await,
                    FormMode::Edit { .. } => libraries.update_cql_library(&plan.payload).await,
                };
                link.send_message(Msg::Saved(result));
            });
            true
        }
        Msg::Saved(Ok(record)) => {
            let outcome = component.form.submit_succeeded(record);
            set_dirty_flag(component.form.is_dirty());
            if outcome == SubmitOutcome::NavigateToList {
                ctx.props().on_navigate.emit(Route::Landing);
            }
            true
        }
        Msg::Saved(Err(error)) => {
            warn!("Failed to save CQL library:", error.to_string());
            component.form.submit_failed(&error);
            true
        }
        Msg::Cancel => {
            if !component.form.can_cancel() {
                return false;
            }
            if component.form.request_cancel() == CancelOutcome::NavigateToList {
                leave(ctx);
            }
            true
        }
        Msg::ResumeEditing => {
            component.form.resume_editing();
            true
        }
        Msg::DiscardChanges => {
            if component.form.discard_changes() == CancelOutcome::NavigateToList {
                leave(ctx);
            }
            true
        }
        Msg::DismissToast(id) => {
            component.form.dismiss_toast(id);
            true
        }
    }
}

fn leave(ctx: &Context<LibraryEditorComponent>) {
    set_dirty_flag(false);
    ctx.props().on_navigate.emit(Route::Landing);
}
