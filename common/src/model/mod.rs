pub mod cql_library;
pub mod elm;
pub mod organization;
pub mod service_config;
