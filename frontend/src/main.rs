use crate::app::App;

mod api;
mod app;
mod components;
mod navigation;

fn main() {
    yew::Renderer::<App>::new().render();
}
