// pathify/src/domain/repositories/line_store.rs

use crate::domain::error::DomainResult;

/// Repository trait for a flat list of path entries, one per line.
///
/// Implementations keep no state between calls: every operation opens,
/// uses and closes its backing resource before returning.
pub trait LineStore: std::fmt::Debug + Send + Sync {
    /// Append a single entry at the end of the list, creating the list if absent
    fn append(&self, path: &str) -> DomainResult<()>;

    /// Get all entries in insertion order, line terminators stripped.
    /// A list that does not exist yet is an error, not an empty result.
    fn read_all(&self) -> DomainResult<Vec<String>>;

    /// Remove every entry whose trimmed text equals the trimmed `path`.
    /// Remaining entries keep their relative order. Returns the number removed.
    fn delete_matching(&self, path: &str) -> DomainResult<usize>;
}
