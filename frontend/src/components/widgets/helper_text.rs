use common::form::LibraryForm;
use common::validation::Field;
use yew::prelude::*;

/// Error line under a form field, or nothing when the field is fine.
pub fn helper_text(form: &LibraryForm, field: Field) -> Html {
    match form.visible_error(field) {
        Some(message) => html! {
            <p class="helper-text error" data-testid={format!("{}-helper-text", field.key())}>
                { message }
            </p>
        },
        None => html! {},
    }
}
