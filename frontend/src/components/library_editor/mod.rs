//! Library editor: create or edit one CQL library.
//!
//! The workflow lives in `common::form::LibraryForm`. This module wires it to
//! the browser: loading the record and the organization list on first
//! render, debounced CQL validation against the translator, saving through
//! the library service, and leaving the page through the shell's navigation.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LibraryEditorProps;
pub use state::LibraryEditorComponent;

use crate::navigation::set_dirty_flag;

impl Component for LibraryEditorComponent {
    type Message = Msg;
    type Properties = LibraryEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        LibraryEditorComponent::new(ctx.props().library_id.as_deref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let organizations = ctx.props().services.organizations.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = organizations.get_all_organizations().await;
                link.send_message(Msg::OrganizationsLoaded(result));
            });

            if let Some(id) = ctx.props().library_id.clone() {
                let libraries = ctx.props().services.libraries.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = libraries.fetch_cql_library(&id).await;
                    link.send_message(Msg::Loaded(result));
                });
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        set_dirty_flag(false);
    }
}
