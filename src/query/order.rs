//! Ordering types for query results.

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns `true` for [`Direction::Desc`].
    pub fn is_descending(&self) -> bool {
        matches!(self, Direction::Desc)
    }
}
