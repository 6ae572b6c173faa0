//! Properties of the library editor.

use common::route::Route;
use yew::prelude::*;

use crate::api::Services;

#[derive(Properties, PartialEq, Clone)]
pub struct LibraryEditorProps {
    pub services: Services,

    /// Library to edit. `None` opens the editor on a new, unsaved library.
    ///
    /// Read once when the component is created; the shell keys the editor by
    /// route so a different id mounts a fresh instance.
    #[prop_or_default]
    pub library_id: Option<String>,

    /// Asks the shell to switch pages, e.g. back to the list after a create.
    pub on_navigate: Callback<Route>,
}
