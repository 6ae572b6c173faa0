//! Small utilities shared by the editor's update and view code.

use common::translation::{EditorAnnotation, Severity};
use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LibraryEditorComponent;

/// Pause in typing before the CQL is sent for validation.
pub const VALIDATION_DEBOUNCE_MS: u32 = 500;

/// Sends `Msg::ValidateCql(seq)` after the debounce pause. Only the latest
/// run survives the sequence check in `update`.
pub fn schedule_validation(link: &Scope<LibraryEditorComponent>, seq: u64) {
    let link = link.clone();
    spawn_local(async move {
        TimeoutFuture::new(VALIDATION_DEBOUNCE_MS).await;
        link.send_message(Msg::ValidateCql(seq));
    });
}

/// Worst severity reported on `row` (0-based), if any.
pub fn row_severity(annotations: &[EditorAnnotation], row: u32) -> Option<Severity> {
    annotations
        .iter()
        .filter(|a| a.row <= row && row <= a.end_row)
        .map(|a| a.severity)
        .min_by_key(|severity| match severity {
            Severity::Error => 0,
            Severity::Warning => 1,
        })
}

/// Value of a text input after an `input` event.
pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Value of a textarea after an `input` event.
pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}
