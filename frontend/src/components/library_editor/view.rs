//! View rendering for the library editor.
//!
//! Layout, top to bottom: server error summary, read-only notice, the
//! structured fields (name, model, description, publisher, experimental),
//! the CQL editor with its gutter and annotation list, then the action bar.
//! The discard dialog and the toast stack float above the page.

use common::form::{FieldChange, LibraryForm};
use common::model::cql_library::Model;
use common::translation::Severity;
use common::validation::Field;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::widgets::discard_dialog::DiscardDialog;
use crate::components::widgets::helper_text::helper_text;
use crate::components::widgets::publisher_autocomplete::PublisherAutocomplete;
use crate::components::widgets::toast_stack::ToastStack;

use super::helpers::{input_value, row_severity, textarea_value};
use super::messages::Msg;
use super::state::LibraryEditorComponent;

pub fn view(component: &LibraryEditorComponent, ctx: &Context<LibraryEditorComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    html! {
        <div class="page" data-testid="cql-library-editor-page">
            { build_alerts(form) }
            if form.is_loading() {
                <div class="notice" data-testid="cql-library-loading">{"Loading..."}</div>
            }
            <form
                data-testid="cql-library-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                <div class="form-row">
                    { build_name_field(form, link) }
                    { build_model_field(form, link) }
                </div>
                <div class="form-row">
                    { build_description_field(form, link) }
                    <div class="field">
                        <PublisherAutocomplete
                            id="publisher"
                            label="Publisher"
                            options={component.organizations.clone()}
                            value={form.draft().publisher.clone()}
                            disabled={!form.accepts_edits()}
                            on_change={link.callback(|publisher: Option<String>| Msg::Edit(FieldChange::Publisher(publisher)))}
                            on_blur={link.callback(|_: ()| Msg::Blur(Field::Publisher))}
                        />
                        { helper_text(form, Field::Publisher) }
                    </div>
                </div>
                <div class="form-row">
                    { build_experimental_field(form, link) }
                </div>
                { build_editor(component, link) }
                { build_action_bar(form, link) }
            </form>
            <DiscardDialog
                open={form.discard_dialog_open()}
                on_continue={link.callback(|_: ()| Msg::DiscardChanges)}
                on_cancel={link.callback(|_: ()| Msg::ResumeEditing)}
            />
            <ToastStack
                toasts={form.toasts().to_vec()}
                on_dismiss={link.callback(Msg::DismissToast)}
            />
        </div>
    }
}

fn build_alerts(form: &LibraryForm) -> Html {
    let server_error = form.server_error().map(|message| {
        html! {
            <div class="error-alert" role="alert" data-testid="cql-library-server-error-alerts">
                { message.to_string() }
            </div>
        }
    });
    let notice = form.read_only_reason().and_then(|reason| reason.notice()).map(|message| {
        html! {
            <div class="notice" data-testid="cql-library-read-only-notice">{ message }</div>
        }
    });
    html! { <>{ for server_error }{ for notice }</> }
}

fn build_name_field(form: &LibraryForm, link: &Scope<LibraryEditorComponent>) -> Html {
    html! {
        <div class="field">
            <label for="cqlLibraryName">{"Library Name"}</label>
            <input
                id="cqlLibraryName"
                type="text"
                placeholder="Enter a Cql Library Name"
                data-testid="cql-library-name-text-field-input"
                value={form.draft().cql_library_name.clone()}
                readonly={!form.accepts_edits()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::Edit(FieldChange::CqlLibraryName(input_value(&e)))
                })}
                onblur={link.callback(|_: FocusEvent| Msg::Blur(Field::CqlLibraryName))}
            />
            { helper_text(form, Field::CqlLibraryName) }
        </div>
    }
}

fn build_model_field(form: &LibraryForm, link: &Scope<LibraryEditorComponent>) -> Html {
    let selected = form.draft().model;
    html! {
        <div class="field">
            <label for="model-select">{"Model"}</label>
            <select
                id="model-select"
                data-testid="cql-library-model-select"
                disabled={!form.accepts_edits()}
                onchange={link.callback(|e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    Msg::Edit(FieldChange::Model(Model::from_label(&value)))
                })}
                onblur={link.callback(|_: FocusEvent| Msg::Blur(Field::Model))}
            >
                <option value="" selected={selected.is_none()}>{"Select a model"}</option>
                { for Model::ALL.iter().map(|model| html! {
                    <option
                        value={model.label()}
                        selected={selected == Some(*model)}
                        data-testid={format!("cql-library-model-option-{}", model.label())}
                    >
                        { model.label() }
                    </option>
                }) }
            </select>
            { helper_text(form, Field::Model) }
        </div>
    }
}

fn build_description_field(form: &LibraryForm, link: &Scope<LibraryEditorComponent>) -> Html {
    html! {
        <div class="field">
            <label for="description">{"Description"}</label>
            <textarea
                id="description"
                data-testid="cql-library-description"
                value={form.draft().description.clone().unwrap_or_default()}
                readonly={!form.accepts_edits()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::Edit(FieldChange::Description(textarea_value(&e)))
                })}
                onblur={link.callback(|_: FocusEvent| Msg::Blur(Field::Description))}
            />
            { helper_text(form, Field::Description) }
        </div>
    }
}

fn build_experimental_field(form: &LibraryForm, link: &Scope<LibraryEditorComponent>) -> Html {
    html! {
        <label class="field checkbox" for="experimental">
            <input
                id="experimental"
                type="checkbox"
                data-testid="cql-library-experimental-checkbox"
                checked={form.draft().experimental}
                disabled={!form.accepts_edits()}
                onchange={link.callback(|e: Event| {
                    let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                    Msg::Edit(FieldChange::Experimental(checked))
                })}
            />
            {"Experimental"}
        </label>
    }
}

/// CQL editor: a numbered gutter marked by annotation severity, the
/// textarea itself and the list of annotations below it.
fn build_editor(component: &LibraryEditorComponent, link: &Scope<LibraryEditorComponent>) -> Html {
    let form = &component.form;
    let annotations = form.annotations();
    let line_count = form.draft().cql.lines().count().max(1);
    let line_numbers = (0..line_count as u32).map(|row| {
        let class = match row_severity(annotations, row) {
            Some(Severity::Error) => "line-number error",
            Some(Severity::Warning) => "line-number warning",
            None => "line-number",
        };
        html! { <div class={class}>{ row + 1 }</div> }
    });

    html! {
        <div class="editor">
            <div class="line-numbers" aria-hidden="true">
                { for line_numbers }
            </div>
            <textarea
                id="cql-editor"
                ref={component.cql_ref.clone()}
                data-testid="cql-library-editor"
                spellcheck="false"
                value={form.draft().cql.clone()}
                readonly={!form.accepts_edits()}
                oninput={link.callback(|e: InputEvent| Msg::Edit(FieldChange::Cql(textarea_value(&e))))}
                onblur={link.callback(|_: FocusEvent| Msg::Blur(Field::Cql))}
            />
            if !annotations.is_empty() {
                <ul class="annotations" data-testid="cql-library-editor-annotations">
                    { for annotations.iter().map(|a| {
                        let (label, class) = match a.severity {
                            Severity::Error => ("Error", "error"),
                            Severity::Warning => ("Warning", "warning"),
                        };
                        html! {
                            <li class={class}>
                                { format!("{label} at line {}:{}: {}", a.row + 1, a.column + 1, a.message) }
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}

fn build_action_bar(form: &LibraryForm, link: &Scope<LibraryEditorComponent>) -> Html {
    html! {
        <div class="actions">
            <button
                type="button"
                class="secondary"
                data-testid="cql-library-cancel-button"
                disabled={!form.can_cancel()}
                onclick={link.callback(|_: MouseEvent| Msg::Cancel)}
            >
                {"Cancel"}
            </button>
            <button
                type="submit"
                data-testid="cql-library-save-button"
                disabled={!form.can_submit()}
            >
                { if form.is_submitting() { "Saving..." } else { "Save" } }
            </button>
        </div>
    }
}
