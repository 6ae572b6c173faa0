use common::form::LibraryForm;
use common::request_seq::RequestSeq;
use yew::prelude::*;

/// Runtime state of the editor: the form workflow plus what only the page needs.
pub struct LibraryEditorComponent {
    pub form: LibraryForm,

    /// Organization names offered by the publisher picker, already sorted.
    pub organizations: Vec<String>,

    /// Numbers CQL validation runs. Results of older runs are dropped.
    pub validations: RequestSeq,

    /// Guard so first-render loading happens once.
    pub loaded: bool,

    pub cql_ref: NodeRef,
}

impl LibraryEditorComponent {
    pub fn new(library_id: Option<&str>) -> Self {
        let form = match library_id {
            Some(id) => LibraryForm::new_edit(id),
            None => LibraryForm::new_create(),
        };
        Self {
            form,
            organizations: Vec::new(),
            validations: RequestSeq::default(),
            loaded: false,
            cql_ref: NodeRef::default(),
        }
    }
}
