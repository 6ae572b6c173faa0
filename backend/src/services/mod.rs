pub mod service_config;
pub mod static_files;
