use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

#[derive(Properties, PartialEq)]
pub struct PublisherAutocompleteProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub options: Vec<String>,
    pub value: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    /// Called with the typed or picked value; `None` when cleared.
    pub on_change: Callback<Option<String>>,
    #[prop_or_default]
    pub on_blur: Callback<()>,
}

/// Text input suggesting known organizations while still accepting free text.
pub struct PublisherAutocomplete;

impl Component for PublisherAutocomplete {
    type Message = ();
    type Properties = PublisherAutocompleteProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PublisherAutocomplete
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let list_id = format!("{}-options", props.id);
        let oninput = props.on_change.reform(|e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            Some(value).filter(|v| !v.trim().is_empty())
        });
        let onblur = props.on_blur.reform(|_: FocusEvent| ());

        html! {
            <div class="field">
                <label for={props.id.clone()}>{ props.label.clone() }</label>
                <input
                    id={props.id.clone()}
                    type="text"
                    role="combobox"
                    list={list_id.clone()}
                    value={props.value.clone().unwrap_or_default()}
                    disabled={props.disabled}
                    data-testid="publisher"
                    {oninput}
                    {onblur}
                />
                <datalist id={list_id}>
                    { for props.options.iter().map(|name| html! { <option value={name.clone()} /> }) }
                </datalist>
            </div>
        }
    }
}
