use yew::prelude::*;

use super::top_sheet::TopSheet;

#[derive(Properties, PartialEq)]
pub struct DiscardDialogProps {
    pub open: bool,
    /// Leave and drop the changes.
    pub on_continue: Callback<()>,
    /// Stay on the form.
    pub on_cancel: Callback<()>,
}

/// Confirmation asked before unsaved changes are thrown away.
pub struct DiscardDialog;

impl Component for DiscardDialog {
    type Message = ();
    type Properties = DiscardDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DiscardDialog
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
        let on_continue = props.on_continue.reform(|_: MouseEvent| ());

        html! {
            <TopSheet open={props.open} test_id="discard-dialog">
                <div class="dialog">
                    <h2>{"You have unsaved changes."}</h2>
                    <p>{"Are you sure you want to discard your changes?"}</p>
                    <div class="actions">
                        <button
                            type="button"
                            data-testid="discard-dialog-cancel-button"
                            onclick={on_cancel}
                        >
                            {"No, Keep Working"}
                        </button>
                        <button
                            type="button"
                            data-testid="discard-dialog-continue-button"
                            onclick={on_continue}
                        >
                            {"Yes, Discard All Changes"}
                        </button>
                    </div>
                </div>
            </TopSheet>
        }
    }
}
