// pathify/src/application/services/registry_service_impl.rs
use std::sync::Arc;

use crate::application::services::registry_service::RegistryService;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::list_kind::ListKind;
use crate::domain::repositories::line_store::LineStore;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
pub struct RegistryServiceImpl {
    general: Arc<dyn LineStore>,
    marked: Arc<dyn LineStore>,
}

impl RegistryServiceImpl {
    pub fn new(general: Arc<dyn LineStore>, marked: Arc<dyn LineStore>) -> Self {
        Self { general, marked }
    }

    fn store(&self, kind: ListKind) -> &dyn LineStore {
        match kind {
            ListKind::General => self.general.as_ref(),
            ListKind::Marked => self.marked.as_ref(),
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn append_current(&self, kind: ListKind) -> DomainResult<String> {
        let cwd = std::env::current_dir().map_err(DomainError::CurrentDirectory)?;
        let path = cwd.to_string_lossy().into_owned();
        self.add(kind, &path)?;
        Ok(path)
    }
}

impl RegistryService for RegistryServiceImpl {
    fn add_current(&self) -> DomainResult<String> {
        self.append_current(ListKind::General)
    }

    fn mark_current(&self) -> DomainResult<String> {
        self.append_current(ListKind::Marked)
    }

    #[instrument(skip(self), level = "debug")]
    fn add(&self, kind: ListKind, path: &str) -> DomainResult<()> {
        self.store(kind).append(path)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_path(&self, path: &str) -> DomainResult<usize> {
        let mut removed = 0;
        let mut first_error = None;

        // every list is attempted even if an earlier one fails
        for kind in ListKind::ALL {
            match self.store(kind).delete_matching(path) {
                Ok(n) => {
                    debug!("Removed {} entries from {} list", n, kind);
                    removed += n;
                }
                Err(e) if e.is_missing_file() => {
                    info!("No {} list yet, nothing to delete: {}", kind, e);
                }
                Err(e) => {
                    warn!("Delete from {} list failed: {}", kind, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(removed),
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn list_for(&self, kind: ListKind) -> DomainResult<Vec<String>> {
        self.store(kind).read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::FileLineStore;
    use crate::util::testing::{init_test_env, TestStorage};
    use std::fs;

    fn create_test_service(storage: &TestStorage) -> RegistryServiceImpl {
        RegistryServiceImpl::new(
            Arc::new(FileLineStore::new(storage.settings.list_path(ListKind::General))),
            Arc::new(FileLineStore::new(storage.settings.list_path(ListKind::Marked))),
        )
    }

    fn seed(storage: &TestStorage, kind: ListKind, content: &str) {
        fs::write(storage.settings.list_path(kind), content).unwrap();
    }

    #[test]
    fn given_path_when_add_then_last_line_of_general_list() {
        // Arrange
        let storage = TestStorage::new();
        let service = create_test_service(&storage);
        seed(&storage, ListKind::General, "/first\n");

        // Act
        service.add(ListKind::General, "/home/user/work").unwrap();

        // Assert
        let lines = service.list_for(ListKind::General).unwrap();
        assert_eq!(lines.last().map(String::as_str), Some("/home/user/work"));
        assert!(!storage.settings.list_path(ListKind::Marked).exists());
    }

    #[test]
    fn given_cwd_when_add_current_then_appended_to_general_list() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);
        let cwd = std::env::current_dir().unwrap();

        let added = service.add_current().unwrap();

        assert_eq!(added, cwd.to_string_lossy());
        assert_eq!(service.list_for(ListKind::General).unwrap(), vec![added]);
    }

    #[test]
    fn given_cwd_when_mark_current_then_appended_to_marked_list_only() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);

        let marked = service.mark_current().unwrap();

        assert_eq!(service.list_for(ListKind::Marked).unwrap(), vec![marked]);
        assert!(service.list_for(ListKind::General).is_err());
    }

    #[test]
    fn given_repeated_add_when_listed_then_duplicates_kept() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);

        service.add(ListKind::Marked, "/dup").unwrap();
        service.add(ListKind::Marked, "/dup").unwrap();

        assert_eq!(service.list_for(ListKind::Marked).unwrap(), vec!["/dup", "/dup"]);
    }

    #[test]
    fn given_path_in_both_lists_when_delete_then_removed_everywhere() {
        // Arrange
        init_test_env();
        let storage = TestStorage::new();
        let service = create_test_service(&storage);
        seed(&storage, ListKind::General, "/a\n/gone\n/b\n/gone\n");
        seed(&storage, ListKind::Marked, "/gone\n/m\n");

        // Act
        let removed = service.delete_path("/gone").unwrap();

        // Assert
        assert_eq!(removed, 3);
        assert_eq!(service.list_for(ListKind::General).unwrap(), vec!["/a", "/b"]);
        assert_eq!(service.list_for(ListKind::Marked).unwrap(), vec!["/m"]);
    }

    #[test]
    fn given_absent_path_when_delete_then_noop_success() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);
        seed(&storage, ListKind::General, "/a\n");
        seed(&storage, ListKind::Marked, "/m\n");

        assert_eq!(service.delete_path("/nothing").unwrap(), 0);
        assert_eq!(service.list_for(ListKind::General).unwrap(), vec!["/a"]);
        assert_eq!(service.list_for(ListKind::Marked).unwrap(), vec!["/m"]);
    }

    #[test]
    fn given_no_list_files_when_delete_then_success_and_nothing_created() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);

        assert_eq!(service.delete_path("/a").unwrap(), 0);
        assert!(!storage.settings.list_path(ListKind::General).exists());
        assert!(!storage.settings.list_path(ListKind::Marked).exists());
    }

    #[test]
    fn given_path_when_deleted_twice_then_same_end_state() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);
        seed(&storage, ListKind::General, "/a\n/x\n/b\n");
        seed(&storage, ListKind::Marked, "/x\n");

        service.delete_path("/x").unwrap();
        let general_once = service.list_for(ListKind::General).unwrap();
        let marked_once = service.list_for(ListKind::Marked).unwrap();
        service.delete_path("/x").unwrap();

        assert_eq!(service.list_for(ListKind::General).unwrap(), general_once);
        assert_eq!(service.list_for(ListKind::Marked).unwrap(), marked_once);
    }

    #[test]
    fn given_unreadable_general_list_when_delete_then_marked_still_cleaned() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);
        // a directory where the general list file should be cannot be read as lines
        fs::create_dir(storage.settings.list_path(ListKind::General)).unwrap();
        seed(&storage, ListKind::Marked, "/x\n/keep\n");

        let result = service.delete_path("/x");

        assert!(result.is_err());
        assert_eq!(service.list_for(ListKind::Marked).unwrap(), vec!["/keep"]);
    }

    #[test]
    fn given_missing_list_when_list_for_then_error() {
        let storage = TestStorage::new();
        let service = create_test_service(&storage);

        let err = service.list_for(ListKind::Marked).unwrap_err();
        assert!(err.is_missing_file());
    }
}
