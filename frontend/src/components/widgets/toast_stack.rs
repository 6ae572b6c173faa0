use std::collections::HashSet;

use common::form::{Toast, ToastKind};
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<Uuid>,
    #[prop_or(6000)]
    pub auto_hide_ms: u32,
}

/// Notifications pinned to the bottom of the page. Each one asks to be
/// dismissed once `auto_hide_ms` has passed since it first appeared.
pub struct ToastStack {
    scheduled: HashSet<Uuid>,
}

impl Component for ToastStack {
    type Message = ();
    type Properties = ToastStackProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            scheduled: HashSet::new(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="toast-stack">
                { for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss)) }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        let live: HashSet<Uuid> = props.toasts.iter().map(|t| t.id).collect();
        self.scheduled.retain(|id| live.contains(id));

        for toast in &props.toasts {
            if self.scheduled.insert(toast.id) {
                let on_dismiss = props.on_dismiss.clone();
                let id = toast.id;
                let delay = props.auto_hide_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    on_dismiss.emit(id);
                });
            }
        }
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<Uuid>) -> Html {
    let (class, test_id) = match toast.kind {
        ToastKind::Success => ("success", "generic-success-text-header"),
        ToastKind::Warning => ("warning", "generic-warning-text-header"),
        ToastKind::Danger => ("danger", "generic-error-text-header"),
    };
    let id = toast.id;
    let on_close = on_dismiss.reform(move |_: MouseEvent| id);

    html! {
        <div class={classes!("toast", class)} role="status" key={id.to_string()}>
            <span data-testid={test_id}>{ toast.message.clone() }</span>
            <button type="button" aria-label="Close" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
