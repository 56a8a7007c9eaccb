//! A mutable, unbalanced BST. Nodes are kept in an arena and refer to their parent and children
//! by index, so the tree never needs shared ownership or unsafe pointers to relink itself.
//!
//! Nothing here rebalances. Inserting keys in ascending order produces a tree that is really a
//! linked list, and lookups degrade to `O(n)`.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//! assert_eq!(tree.depth(), 0);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! assert_eq!(tree.insert(1, 3), Some(2));
//! assert_eq!(tree.find(&1), Ok(&3));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Ok(3));
//! assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::util::{Descent, Side};

/// An unbalanced Binary Search Tree mapping keys to values. Each key is stored at most once.
///
/// The `Tree` itself is the handle callers hold onto. Removing the root swaps what the tree's
/// root slot refers to, so the handle never goes stale.
#[derive(Clone)]
pub struct Tree<K, V> {
    nodes: Arena<Node<K, V>>,
    // `None` is the empty tree.
    root: Option<Index>,
}

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    /// `None` only for the root. Used for relinking during removal, never for reads.
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Option<Index>) -> Self {
        Self {
            key,
            value,
            parent,
            left: None,
            right: None,
        }
    }

    fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root.map(|index| DebugNode { tree: self, index }))
            .finish()
    }
}

/// Borrowed view of a subtree so `Debug` can print the nested structure instead of the arena.
struct DebugNode<'a, K, V> {
    tree: &'a Tree<K, V>,
    index: Index,
}

impl<K, V> fmt::Debug for DebugNode<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.nodes[self.index];
        let subtree = |index: Option<Index>| {
            index.map(|index| DebugNode {
                tree: self.tree,
                index,
            })
        };
        f.debug_struct("Node")
            .field("key", &node.key)
            .field("value", &node.value)
            .field("left", &subtree(node.left))
            .field("right", &subtree(node.right))
            .finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Generates a `Tree` whose root already holds the given key and value.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree = Tree::with_entry("k", 1);
    /// assert_eq!(tree.find(&"k"), Ok(&1));
    /// assert_eq!(tree.depth(), 1);
    /// ```
    pub fn with_entry(key: K, value: V) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.insert(Node::new(key, value, None));
        Self {
            nodes,
            root: Some(root),
        }
    }

    /// How many entries are stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every entry, leaving an empty tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for
    /// an existing key overwrites its value in place and returns the old one.
    ///
    /// The first entry goes straight into the root slot. Later entries descend from the root,
    /// going left for smaller keys and right for larger ones, until they hit an empty child slot
    /// where a new leaf is attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.find(&1), Ok(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.find(&1), Ok(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        match self.descend(&key) {
            Descent::Empty => {
                trace!("root absorbs the first entry");
                self.root = Some(self.nodes.insert(Node::new(key, value, None)));
                None
            }
            Descent::Found(index) => Some(mem::replace(&mut self.nodes[index].value, value)),
            Descent::Vacant { parent, side } => {
                let leaf = self.nodes.insert(Node::new(key, value, Some(parent)));
                *self.nodes[parent].child_mut(side) = Some(leaf);
                None
            }
        }
    }

    /// Finds the value associated with the given key.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node has the key. An empty tree holds no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.find(&42), Err(Error::KeyNotFound));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        self.locate(key).map(|index| &self.nodes[index].value)
    }

    /// Like [`find`][Self::find] but hands out a mutable reference to the value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node has the key.
    pub fn find_mut(&mut self, key: &K) -> Result<&mut V>
    where
        K: Ord,
    {
        let index = self.locate(key)?;
        Ok(&mut self.nodes[index].value)
    }

    /// Whether some node holds the given key.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.locate(key).is_ok()
    }

    /// Removes the node containing the given key and returns its value.
    ///
    /// A node with two children takes the key and value of its in-order successor (the leftmost
    /// node of its right subtree), and the successor node is spliced out instead. A node with one
    /// child is replaced by that child. A leaf is simply unlinked.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node has the key. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for key in [10, 5, 15, 12, 20] {
    ///     tree.insert(key, key * 2);
    /// }
    ///
    /// assert_eq!(tree.remove(&10), Ok(20));
    /// assert_eq!(tree.find(&10), Err(Error::KeyNotFound));
    /// assert_eq!(tree.find(&12), Ok(&24));
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let index = self.locate(key)?;
        let node = &self.nodes[index];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                debug!("promoting in-order successor of a node with two children");
                // The successor has no left child, so splicing it out never recurses back here.
                let promoted = self.splice_out(successor);
                let node = &mut self.nodes[index];
                node.key = promoted.key;
                Ok(mem::replace(&mut node.value, promoted.value))
            }
            _ => Ok(self.splice_out(index).value),
        }
    }

    /// Gets the depth of this tree: the number of nodes on the longest path from the root down
    /// to a leaf. An empty tree has depth 0 and a lone root has depth 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.depth(), 0);
    ///
    /// // Ascending keys only ever go right.
    /// for key in 0..4 {
    ///     tree.insert(key, ());
    /// }
    /// assert_eq!(tree.depth(), 4);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.subtree_depth(root))
    }

    /// Gets the depth of the subtree rooted at the node holding `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node has the key.
    pub fn depth_of(&self, key: &K) -> Result<usize>
    where
        K: Ord,
    {
        self.locate(key).map(|index| self.subtree_depth(index))
    }

    /// Walks down from the root towards `key` without recursing.
    fn descend(&self, key: &K) -> Descent
    where
        K: Ord,
    {
        let Some(mut current) = self.root else {
            return Descent::Empty;
        };
        loop {
            let node = &self.nodes[current];
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Descent::Found(current),
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return Descent::Vacant { parent: current, side },
            }
        }
    }

    fn locate(&self, key: &K) -> Result<Index>
    where
        K: Ord,
    {
        match self.descend(key) {
            Descent::Found(index) => Ok(index),
            Descent::Empty | Descent::Vacant { .. } => Err(Error::KeyNotFound),
        }
    }

    fn leftmost(&self, mut index: Index) -> Index {
        while let Some(left) = self.nodes[index].left {
            index = left;
        }
        index
    }

    /// Removes a node with at most one child from the arena, moving that child (or nothing) into
    /// its place, and returns the node.
    fn splice_out(&mut self, index: Index) -> Node<K, V> {
        let node = self
            .nodes
            .remove(index)
            .expect("Spliced node is stored in the arena");
        debug_assert!(node.left.is_none() || node.right.is_none());

        self.replace_in_parent(index, node.parent, node.left.or(node.right));
        node
    }

    /// Points whichever slot referred to `index` at `replacement` instead. For the root that slot
    /// is the tree's own root slot.
    fn replace_in_parent(
        &mut self,
        index: Index,
        parent: Option<Index>,
        replacement: Option<Index>,
    ) {
        match parent {
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(index) {
                    parent.left = replacement;
                } else {
                    parent.right = replacement;
                }
            }
            None => {
                trace!(emptied = replacement.is_none(), "replacing the root");
                self.root = replacement;
            }
        }

        if let Some(replacement) = replacement {
            self.nodes[replacement].parent = parent;
        }
    }

    /// `1 + max(depth(left), depth(right))`, with absent children counting 0. Uses an explicit
    /// stack since the tree's depth is unbounded.
    fn subtree_depth(&self, index: Index) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(index, 1)];
        while let Some((index, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[index];
            stack.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, level + 1)),
            );
        }
        deepest
    }
}
