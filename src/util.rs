use generational_arena::Index;

/// Which child slot of a node a search continues into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Where a key search ended up.
pub(crate) enum Descent {
    /// The tree has no nodes at all.
    Empty,
    /// A node holding the key.
    Found(Index),
    /// The key isn't stored. It would be inserted as the `side` child of `parent`, whose slot is
    /// currently empty.
    Vacant { parent: Index, side: Side },
}
