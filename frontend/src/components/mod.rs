pub mod library_editor;
pub mod library_landing;
pub mod widgets;
