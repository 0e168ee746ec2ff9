pub mod error;
pub mod list_kind;
pub mod matcher;
pub mod repositories;
