//! Dialog that creates a library from just a name and a model.
//!
//! Runs the same `LibraryForm` workflow as the full editor, so validation
//! and server error handling match. The landing page decides what to do
//! with the outcome.

use common::error::GatewayResult;
use common::form::{FieldChange, LibraryForm, SubmitOutcome, CREATE_FAILED};
use common::model::cql_library::{CqlLibrary, Model};
use common::validation::Field;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::Services;
use crate::components::widgets::helper_text::helper_text;
use crate::components::widgets::top_sheet::TopSheet;

pub const CREATED: &str = "Cql Library successfully created";

#[derive(Properties, PartialEq, Clone)]
pub struct CreateLibraryDialogProps {
    pub services: Services,
    pub open: bool,
    pub on_created: Callback<CqlLibrary>,
    /// Consolidated server message of a rejected create.
    pub on_failed: Callback<String>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Edit(FieldChange),
    Blur(Field),
    Submit,
    Saved(GatewayResult<CqlLibrary>),
    Close,
}

pub struct CreateLibraryDialog {
    form: LibraryForm,
}

impl Component for CreateLibraryDialog {
    type Message = Msg;
    type Properties = CreateLibraryDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LibraryForm::new_create(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().open && !old_props.open {
            self.form = LibraryForm::new_create();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(change) => {
                self.form.edit(change);
                true
            }
            Msg::Blur(field) => {
                self.form.blur(field);
                true
            }
            Msg::Submit => {
                let Ok(plan) = self.form.begin_submit() else {
                    return true;
                };
                let libraries = ctx.props().services.libraries.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = libraries.create_cql_library(&plan.payload).await;
                    link.send_message(Msg::Saved(result));
                });
                true
            }
            Msg::Saved(Ok(record)) => {
                if self.form.submit_succeeded(record.clone()) == SubmitOutcome::NavigateToList {
                    self.form = LibraryForm::new_create();
                    ctx.props().on_created.emit(record);
                }
                true
            }
            Msg::Saved(Err(error)) => {
                gloo_console::warn!("Failed to create CQL library:", error.to_string());
                self.form.submit_failed(&error);
                let message = self.form.server_error().unwrap_or(CREATE_FAILED).to_string();
                ctx.props().on_failed.emit(message);
                true
            }
            Msg::Close => {
                if !self.form.can_cancel() {
                    return false;
                }
                self.form = LibraryForm::new_create();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;
        let selected = form.draft().model;

        html! {
            <TopSheet open={ctx.props().open} test_id="create-new-library-dialog">
                <form
                    class="dialog"
                    data-testid="create-new-library-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <h2>{"Create New Library"}</h2>
                    <div class="field">
                        <label for="create-library-name">{"Library Name"}</label>
                        <input
                            id="create-library-name"
                            type="text"
                            placeholder="Enter a Cql Library Name"
                            data-testid="cql-library-name-text-field-input"
                            value={form.draft().cql_library_name.clone()}
                            readonly={!form.accepts_edits()}
                            oninput={link.callback(|e: InputEvent| {
                                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                                Msg::Edit(FieldChange::CqlLibraryName(value))
                            })}
                            onblur={link.callback(|_: FocusEvent| Msg::Blur(Field::CqlLibraryName))}
                        />
                        { helper_text(form, Field::CqlLibraryName) }
                    </div>
                    <div class="field">
                        <label for="create-library-model">{"Model"}</label>
                        <select
                            id="create-library-model"
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
                                <option value={model.label()} selected={selected == Some(*model)}>
                                    { model.label() }
                                </option>
                            }) }
                        </select>
                        { helper_text(form, Field::Model) }
                    </div>
                    <div class="actions">
                        <button
                            type="button"
                            data-testid="cql-library-cancel-button"
                            disabled={!form.can_cancel()}
                            onclick={link.callback(|_: MouseEvent| Msg::Close)}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            data-testid="continue-button"
                            disabled={!form.can_submit()}
                        >
                            {"Continue"}
                        </button>
                    </div>
                </form>
            </TopSheet>
        }
    }
}
