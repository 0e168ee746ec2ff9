pub mod file_line_store;

pub use file_line_store::FileLineStore;
