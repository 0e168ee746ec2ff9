// pathify/src/application/services/registry_service.rs
use crate::domain::error::DomainResult;
use crate::domain::list_kind::ListKind;
use std::fmt::Debug;

/// Service interface over the general and the marked path list
pub trait RegistryService: Send + Sync + Debug {
    /// Append the current working directory to the general list, returns it
    fn add_current(&self) -> DomainResult<String>;

    /// Append the current working directory to the marked list, returns it
    fn mark_current(&self) -> DomainResult<String>;

    /// Append an explicit path to the given list
    fn add(&self, kind: ListKind, path: &str) -> DomainResult<()>;

    /// Remove the path from both lists. Lists without the path, or without a
    /// backing file yet, are left alone. Returns the total number removed.
    fn delete_path(&self, path: &str) -> DomainResult<usize>;

    /// All entries of the given list in insertion order
    fn list_for(&self, kind: ListKind) -> DomainResult<Vec<String>>;
}
