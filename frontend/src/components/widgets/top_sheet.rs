use uuid::Uuid;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

/// Full-screen overlay that hosts a dialog. Shown while `open` is set.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    #[prop_or_default]
    pub test_id: AttrValue,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("top-sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div
                class={classes!("top-sheet", props.open.then_some("show"))}
                id={self.id.clone()}
                data-testid={props.test_id.clone()}
                role="dialog"
                aria-hidden={(!props.open).to_string()}
            >
                { props.children.clone() }
            </div>
        }
    }
}
