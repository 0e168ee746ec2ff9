// pathify/src/application/mod.rs
pub mod selector;
pub mod services;

// Re-export key services for easier imports
pub use services::registry_service::RegistryService;
pub use services::registry_service_impl::RegistryServiceImpl;
