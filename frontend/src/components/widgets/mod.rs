//! Presentational building blocks. They hold at most local UI state and
//! report everything else through callbacks.

pub mod discard_dialog;
pub mod helper_text;
pub mod publisher_autocomplete;
pub mod toast_stack;
pub mod top_sheet;
