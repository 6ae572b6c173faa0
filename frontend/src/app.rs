//! Root of the micro-frontend: loads the service configuration, then maps the
//! current path to a page.

use std::rc::Rc;

use common::error::GatewayResult;
use common::model::service_config::ServiceConfig;
use common::route::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, Event};
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api::service_config::fetch_service_config;
use crate::api::session::BrowserSession;
use crate::api::Services;
use crate::components::library_editor::LibraryEditorComponent;
use crate::components::library_landing::LibraryLandingComponent;
use crate::navigation::{
    current_route, has_unsaved_changes, push_route, set_document_title,
};

pub enum Msg {
    ConfigLoaded(GatewayResult<ServiceConfig>),
    Navigate(Route),
    LocationChanged,
}

enum ConfigState {
    Loading,
    Loaded(Services),
    Failed,
}

type WindowListener = Closure<dyn Fn(Event)>;

pub struct App {
    config: ConfigState,
    route: Route,
    listeners: Vec<(&'static str, WindowListener)>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(fetch_service_config().await));
        });

        let mut listeners = Vec::new();
        let link = ctx.link().clone();
        if let Some(listener) = add_window_listener("popstate", move |_| {
            link.send_message(Msg::LocationChanged)
        }) {
            listeners.push(("popstate", listener));
        }
        if let Some(listener) = add_window_listener("beforeunload", |event| {
            if has_unsaved_changes() {
                if let Some(event) = event.dyn_ref::<BeforeUnloadEvent>() {
                    event.prevent_default();
                    event.set_return_value("");
                }
            }
        }) {
            listeners.push(("beforeunload", listener));
        }

        let route = current_route();
        set_document_title(route.title());
        Self {
            config: ConfigState::Loading,
            route,
            listeners,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(Ok(config)) => {
                self.config = ConfigState::Loaded(Services::new(&config, Rc::new(BrowserSession)));
                true
            }
            Msg::ConfigLoaded(Err(err)) => {
                gloo_console::error!("failed to load service config:", err.to_string());
                self.config = ConfigState::Failed;
                true
            }
            Msg::Navigate(route) => {
                if route == self.route {
                    return false;
                }
                push_route(&route);
                set_document_title(route.title());
                self.route = route;
                true
            }
            Msg::LocationChanged => {
                let route = current_route();
                set_document_title(route.title());
                let changed = route != self.route;
                self.route = route;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let services = match &self.config {
            ConfigState::Loading => {
                return html! { <div data-testid="loading-state">{"Loading..."}</div> };
            }
            ConfigState::Failed => {
                return html! {
                    <div data-testid="service-config-error">{"Error loading service config"}</div>
                };
            }
            ConfigState::Loaded(services) => services.clone(),
        };
        let on_navigate = ctx.link().callback(Msg::Navigate);

        match &self.route {
            Route::Landing => html! {
                <LibraryLandingComponent {services} {on_navigate} />
            },
            Route::Create => html! {
                <LibraryEditorComponent key="create" {services} library_id={None::<String>} {on_navigate} />
            },
            Route::Edit { id } => html! {
                <LibraryEditorComponent key={id.clone()} {services} library_id={Some(id.clone())} {on_navigate} />
            },
            Route::NotFound => html! {
                <div class="page" data-testid="route-not-found">{"Page not found"}</div>
            },
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            for (event, listener) in &self.listeners {
                let _ = window
                    .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
    }
}

fn add_window_listener(event: &str, handler: impl Fn(Event) + 'static) -> Option<WindowListener> {
    let window = web_sys::window()?;
    let listener = Closure::<dyn Fn(Event)>::new(handler);
    window
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}
