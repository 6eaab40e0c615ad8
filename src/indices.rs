/// The position of a node in the sequential table of a [`Matrix`].
///
/// Every link of the toroidal structure (up, down, left and right) is stored
/// as one of these indices rather than as a pointer.
///
/// [`Matrix`]: `crate::matrix::Matrix`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[repr(transparent)]
pub(crate) struct NodeIndex(usize);

impl NodeIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// The position of a row in the `rows` table of a [`DlSolver`]. Rows are
/// numbered densely from zero in the order in which they were registered.
///
/// [`DlSolver`]: `crate::DlSolver`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[repr(transparent)]
pub(crate) struct RowIndex(usize);

impl RowIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// The position of a column in the `columns` table of a [`DlSolver`].
///
/// [`DlSolver`]: `crate::DlSolver`
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[repr(transparent)]
pub(crate) struct ColumnIndex(usize);

impl ColumnIndex {
    /// Creates a new index.
    #[must_use]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_get() {
        assert_eq!(NodeIndex::new(0).get(), 0);
        assert_eq!(NodeIndex::new(87935).get(), 87935);

        assert_eq!(RowIndex::new(0).get(), 0);
        assert_eq!(RowIndex::new(123).get(), 123);

        assert_eq!(ColumnIndex::new(65).get(), 65);
        assert_eq!(ColumnIndex::new(456789).get(), 456789);
    }

    #[test]
    fn index_equality() {
        assert_eq!(RowIndex::new(7), RowIndex::new(7));
        assert_ne!(ColumnIndex::new(1), ColumnIndex::new(2));
    }
}
