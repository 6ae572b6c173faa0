//! Library list: the current user's libraries (or everyone's), links into
//! the editor and the create dialog.

use common::error::GatewayResult;
use common::form::{Toast, ToastKind};
use common::model::cql_library::CqlLibrary;
use common::request_seq::RequestSeq;
use common::route::Route;
use uuid::Uuid;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::Services;
use crate::components::widgets::toast_stack::ToastStack;

pub mod create_dialog;

use create_dialog::{CreateLibraryDialog, CREATED};

#[derive(Properties, PartialEq, Clone)]
pub struct LibraryLandingProps {
    pub services: Services,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Fetch,
    Fetched(u64, GatewayResult<Vec<CqlLibrary>>),
    ShowMine(bool),
    OpenCreate,
    CloseCreate,
    Created(CqlLibrary),
    CreateFailed(String),
    Open(Route),
    DismissToast(Uuid),
}

enum Listing {
    Loading,
    Loaded(Vec<CqlLibrary>),
    Failed(String),
}

pub struct LibraryLandingComponent {
    listing: Listing,
    /// Numbers list fetches. Answers to an earlier toggle state are dropped.
    fetches: RequestSeq,
    mine_only: bool,
    create_open: bool,
    toasts: Vec<Toast>,
}

impl Component for LibraryLandingComponent {
    type Message = Msg;
    type Properties = LibraryLandingProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            listing: Listing::Loading,
            fetches: RequestSeq::default(),
            mine_only: true,
            create_open: false,
            toasts: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                self.listing = Listing::Loading;
                let libraries = ctx.props().services.libraries.clone();
                let mine_only = self.mine_only;
                let seq = self.fetches.next();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = libraries.fetch_cql_libraries(mine_only).await;
                    link.send_message(Msg::Fetched(seq, result));
                });
                true
            }
            Msg::Fetched(seq, _) if !self.fetches.is_current(seq) => false,
            Msg::Fetched(_, Ok(libraries)) => {
                self.listing = Listing::Loaded(libraries);
                true
            }
            Msg::Fetched(_, Err(error)) => {
                gloo_console::warn!("Failed to fetch CQL libraries:", error.to_string());
                self.listing = Listing::Failed(error.to_string());
                true
            }
            Msg::ShowMine(mine_only) => {
                if self.mine_only == mine_only {
                    return false;
                }
                self.mine_only = mine_only;
                ctx.link().send_message(Msg::Fetch);
                true
            }
            Msg::OpenCreate => {
                self.create_open = true;
                true
            }
            Msg::CloseCreate => {
                self.create_open = false;
                true
            }
            Msg::Created(library) => {
                gloo_console::log!("Created CQL library", library.cql_library_name);
                self.create_open = false;
                self.toasts.push(Toast::new(ToastKind::Success, CREATED));
                ctx.link().send_message(Msg::Fetch);
                true
            }
            Msg::CreateFailed(message) => {
                self.toasts.push(Toast::new(ToastKind::Danger, message));
                true
            }
            Msg::Open(route) => {
                ctx.props().on_navigate.emit(route);
                false
            }
            Msg::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab_class = |active: bool| classes!("tab", active.then_some("active"));

        html! {
            <div class="page" data-testid="cql-library-landing">
                <div class="form-row">
                    <h1>{"Libraries"}</h1>
                    <div class="actions">
                        <button
                            type="button"
                            data-testid="create-new-cql-library-button"
                            onclick={link.callback(|_: MouseEvent| Msg::OpenCreate)}
                        >
                            {"New Library"}
                        </button>
                    </div>
                </div>
                <div class="actions">
                    <button
                        type="button"
                        class={tab_class(self.mine_only)}
                        data-testid="my-cql-libraries-tab"
                        onclick={link.callback(|_: MouseEvent| Msg::ShowMine(true))}
                    >
                        {"My Libraries"}
                    </button>
                    <button
                        type="button"
                        class={tab_class(!self.mine_only)}
                        data-testid="all-cql-libraries-tab"
                        onclick={link.callback(|_: MouseEvent| Msg::ShowMine(false))}
                    >
                        {"All Libraries"}
                    </button>
                </div>
                { self.build_listing(link) }
                <CreateLibraryDialog
                    services={ctx.props().services.clone()}
                    open={self.create_open}
                    on_created={link.callback(Msg::Created)}
                    on_failed={link.callback(Msg::CreateFailed)}
                    on_close={link.callback(|_: ()| Msg::CloseCreate)}
                />
                <ToastStack toasts={self.toasts.clone()} on_dismiss={link.callback(Msg::DismissToast)} />
            </div>
        }
    }
}

impl LibraryLandingComponent {
    fn build_listing(&self, link: &Scope<Self>) -> Html {
        let libraries = match &self.listing {
            Listing::Loading => {
                return html! { <div class="notice" data-testid="cql-library-list-loading">{"Loading..."}</div> };
            }
            Listing::Failed(message) => {
                return html! {
                    <div class="error-alert" role="alert" data-testid="cql-library-list-error">
                        { format!("Unable to fetch CQL libraries: {message}") }
                    </div>
                };
            }
            Listing::Loaded(libraries) => libraries,
        };
        if libraries.is_empty() {
            return html! { <p data-testid="cql-library-list-empty">{"No libraries found."}</p> };
        }

        html! {
            <table class="libraries" data-testid="cql-library-list">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Version"}</th>
                        <th>{"Model"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for libraries.iter().map(|library| Self::build_row(library, link)) }
                </tbody>
            </table>
        }
    }

    fn build_row(library: &CqlLibrary, link: &Scope<Self>) -> Html {
        let model = library.model.map(|m| m.label()).unwrap_or("-");
        let status = if library.draft { "Draft" } else { "Versioned" };
        let action = match &library.id {
            Some(id) => {
                let route = Route::Edit { id: id.clone() };
                let href = route.path();
                html! {
                    <a
                        href={href}
                        data-testid={format!("edit-cql-library-button-{id}")}
                        onclick={link.callback(move |e: MouseEvent| {
                            e.prevent_default();
                            Msg::Open(route.clone())
                        })}
                    >
                        {"Edit"}
                    </a>
                }
            }
            None => html! {},
        };

        html! {
            <tr>
                <td>{ library.cql_library_name.clone() }</td>
                <td>{ library.version.clone().unwrap_or_default() }</td>
                <td>{ model }</td>
                <td>{ status }</td>
                <td>{ action }</td>
            </tr>
        }
    }
}
