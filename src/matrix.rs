use crate::indices::{ColumnIndex, NodeIndex, RowIndex};

/// One occurrence of a column in a row, or a sentinel, represented as
/// a record in the sequential table of a [`Matrix`].
///
/// Each node sits on two circular doubly linked lists: the _vertical_ list
/// of its column and the _horizontal_ list of its row. Sentinels close these
/// rings, so that an empty ring is simply a sentinel that points to itself.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(crate) struct Node {
    /// The previous node in the vertical list.
    ///
    /// This field corresponds to the `ULINK` pointer in Knuth's data structure.
    pub up: NodeIndex,
    /// The next node in the vertical list.
    ///
    /// This field corresponds to the `DLINK` pointer in Knuth's data structure.
    pub down: NodeIndex,
    /// The previous node in the horizontal list.
    ///
    /// This field corresponds to the `LLINK` pointer in Knuth's data structure.
    pub left: NodeIndex,
    /// The next node in the horizontal list.
    ///
    /// This field corresponds to the `RLINK` pointer in Knuth's data structure.
    pub right: NodeIndex,
    /// The row that owns this node, or [`None`] for a column head or for the
    /// root of a header ring.
    pub row: Option<RowIndex>,
    /// The column that owns this node, or [`None`] for a row head or for the
    /// root of a header ring.
    ///
    /// This field corresponds to the `TOP` pointer in Knuth's data structure.
    pub column: Option<ColumnIndex>,
}

impl Node {
    /// Creates a node whose four links point back to itself.
    fn singleton(ix: NodeIndex, row: Option<RowIndex>, column: Option<ColumnIndex>) -> Self {
        Self {
            up: ix,
            down: ix,
            left: ix,
            right: ix,
            row,
            column,
        }
    }

    /// Returns whether this node is the head of a row.
    pub fn is_row_head(&self) -> bool {
        self.column.is_none()
    }
}

/// The position of the root of the global header ring, which links the heads
/// of all mandatory columns that remain to be covered. Knuth called this node
/// the _root_ in the paper "Dancing links", [arXiv:cs/0011047][dl] [cs.DS] (2000).
///
/// [dl]: https://arxiv.org/pdf/cs/0011047.pdf
pub(crate) const ROOT: NodeIndex = NodeIndex::new(0);

/// A boolean matrix stored as a torus of quadruply linked nodes.
///
/// All nodes live in one arena and are never freed or reordered; rings are
/// only spliced out and spliced back in, always in LIFO order.
#[derive(Debug, Eq, PartialEq, Clone)]
pub(crate) struct Matrix {
    nodes: Vec<Node>,
}

impl Matrix {
    /// Creates a matrix that holds just the root of the global header ring.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::singleton(ROOT, None, None)],
        }
    }

    /// Appends a node whose horizontal and vertical rings contain only itself.
    pub fn push(&mut self, row: Option<RowIndex>, column: Option<ColumnIndex>) -> NodeIndex {
        let ix = NodeIndex::new(self.nodes.len());
        self.nodes.push(Node::singleton(ix, row, column));
        ix
    }

    /// Inserts a singleton node into the horizontal ring of `head`, right
    /// before `head` itself; that is, at the end of the ring.
    pub fn link_into_row(&mut self, ix: NodeIndex, head: NodeIndex) {
        let last = self.node(head).left;
        let node = self.node_mut(ix);
        node.left = last;
        node.right = head;
        self.node_mut(last).right = ix;
        self.node_mut(head).left = ix;
    }

    /// Inserts a singleton node into the vertical ring of `head`, right
    /// before `head` itself; that is, at the bottom of the column.
    pub fn link_into_column(&mut self, ix: NodeIndex, head: NodeIndex) {
        let last = self.node(head).up;
        let node = self.node_mut(ix);
        node.up = last;
        node.down = head;
        self.node_mut(last).down = ix;
        self.node_mut(head).up = ix;
    }

    /// Removes a node from its vertical ring. The links of the node itself are
    /// preserved, so [`Self::restore_vertical`] can put it back later.
    pub fn splice_out_vertical(&mut self, ix: NodeIndex) {
        let Node { up, down, .. } = *self.node(ix);
        self.node_mut(up).down = down;
        self.node_mut(down).up = up;
    }

    /// Undoes the last [`Self::splice_out_vertical`] applied to the node.
    pub fn restore_vertical(&mut self, ix: NodeIndex) {
        let Node { up, down, .. } = *self.node(ix);
        self.node_mut(up).down = ix;
        self.node_mut(down).up = ix;
    }

    /// Removes a column head from the header ring it belongs to.
    pub fn splice_out_horizontal(&mut self, ix: NodeIndex) {
        let Node { left, right, .. } = *self.node(ix);
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;
    }

    /// Undoes the last [`Self::splice_out_horizontal`] applied to the node.
    pub fn restore_horizontal(&mut self, ix: NodeIndex) {
        let Node { left, right, .. } = *self.node(ix);
        self.node_mut(left).right = ix;
        self.node_mut(right).left = ix;
    }

    /// Returns whether the node can currently be reached from its vertical
    /// neighbours, meaning it has not been spliced out of its column.
    pub fn is_linked_vertically(&self, ix: NodeIndex) -> bool {
        let node = self.node(ix);
        self.node(node.up).down == ix && self.node(node.down).up == ix
    }

    /// Returns the number of nodes in the arena, sentinels included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    // Accessor methods.

    pub fn up(&self, ix: NodeIndex) -> NodeIndex {
        self.node(ix).up
    }

    pub fn down(&self, ix: NodeIndex) -> NodeIndex {
        self.node(ix).down
    }

    pub fn left(&self, ix: NodeIndex) -> NodeIndex {
        self.node(ix).left
    }

    pub fn right(&self, ix: NodeIndex) -> NodeIndex {
        self.node(ix).right
    }

    /// Returns a reference to the node at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    pub fn node(&self, ix: NodeIndex) -> &Node {
        &self.nodes[ix.get()]
    }

    fn node_mut(&mut self, ix: NodeIndex) -> &mut Node {
        &mut self.nodes[ix.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects the nodes of a ring, starting after `head` and following
    /// the given link until returning to `head`.
    fn ring(matrix: &Matrix, head: NodeIndex, next: fn(&Matrix, NodeIndex) -> NodeIndex) -> Vec<usize> {
        let mut result = Vec::new();
        let mut cur = next(matrix, head);
        while cur != head {
            result.push(cur.get());
            cur = next(matrix, cur);
        }
        result
    }

    #[test]
    fn new_matrix_has_empty_root_ring() {
        let matrix = Matrix::new();
        assert_eq!(matrix.len(), 1);
        assert_eq!(matrix.right(ROOT), ROOT);
        assert_eq!(matrix.left(ROOT), ROOT);
        assert_eq!(matrix.up(ROOT), ROOT);
        assert_eq!(matrix.down(ROOT), ROOT);
    }

    #[test]
    fn link_appends_to_the_end_of_rings() {
        let mut matrix = Matrix::new();
        let head = matrix.push(None, Some(ColumnIndex::new(0)));
        matrix.link_into_row(head, ROOT);
        let a = matrix.push(Some(RowIndex::new(0)), Some(ColumnIndex::new(0)));
        let b = matrix.push(Some(RowIndex::new(1)), Some(ColumnIndex::new(0)));
        matrix.link_into_column(a, head);
        matrix.link_into_column(b, head);

        assert_eq!(ring(&matrix, ROOT, Matrix::right), [1]);
        assert_eq!(ring(&matrix, head, Matrix::down), [2, 3]);
        assert_eq!(ring(&matrix, head, Matrix::up), [3, 2]);
        // Unlinked rings stay singletons.
        assert_eq!(matrix.right(a), a);
        let row_head = matrix.push(Some(RowIndex::new(2)), None);
        assert!(matrix.node(row_head).is_row_head());
    }

    #[test]
    fn splice_and_restore_are_inverse() {
        let mut matrix = Matrix::new();
        let heads: Vec<_> = (0..3)
            .map(|c| {
                let head = matrix.push(None, Some(ColumnIndex::new(c)));
                matrix.link_into_row(head, ROOT);
                head
            })
            .collect();
        let x = matrix.push(Some(RowIndex::new(0)), Some(ColumnIndex::new(1)));
        matrix.link_into_column(x, heads[1]);
        let before = matrix.clone();

        matrix.splice_out_horizontal(heads[1]);
        matrix.splice_out_vertical(x);
        assert_eq!(ring(&matrix, ROOT, Matrix::right), [heads[0].get(), heads[2].get()]);
        assert!(ring(&matrix, heads[1], Matrix::down).is_empty());
        assert!(!matrix.is_linked_vertically(x));

        matrix.restore_vertical(x);
        matrix.restore_horizontal(heads[1]);
        assert!(matrix.is_linked_vertically(x));
        assert_eq!(matrix, before);
    }
}
