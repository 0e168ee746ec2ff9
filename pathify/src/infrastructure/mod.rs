pub mod di;
pub mod matching;
pub mod repositories;
