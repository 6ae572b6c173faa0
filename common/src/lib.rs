//! Domain types and workflow logic shared by the CQL library frontend and its host.
//!
//! Everything here is plain Rust with no browser dependency so the form
//! workflow, validation rules and wire helpers can be tested natively.

pub mod cql_header;
pub mod error;
pub mod form;
pub mod gateway;
pub mod model;
pub mod route;
pub mod request_seq;
pub mod session;
pub mod translation;
pub mod validation;
