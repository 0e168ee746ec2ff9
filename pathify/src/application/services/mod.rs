// pathify/src/application/services/mod.rs
pub mod registry_service;
pub mod registry_service_impl;
