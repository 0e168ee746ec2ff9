// pathify/src/domain/list_kind.rs
use std::fmt;

/// Which of the two path lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Every directory recorded with `add`
    General,
    /// Directories recorded with `mark`
    Marked,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::General, ListKind::Marked];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::General => "general",
            ListKind::Marked => "marked",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
