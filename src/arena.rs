use crate::node::{Label, Node};

/// The Type used to reference a Node in a [`NodeArena`]
pub type NodeId = usize;

/// Owns every Node created during a single search.
///
/// Nodes refer to their Parent by [`NodeId`], so the Path tree can be walked without any
/// references between the Nodes themselves. Nodes are never removed while a search is running,
/// which keeps every handle valid until the Arena is dropped.
#[derive(Clone, Debug)]
pub struct NodeArena<L: Label> {
	nodes: slab::Slab<Node<L>>,
}

impl<L: Label> NodeArena<L> {
	/// Creates an empty Arena
	pub fn new() -> Self {
		Self {
			nodes: slab::Slab::new(),
		}
	}

	/// Creates an empty Arena with room for `capacity` Nodes
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			nodes: slab::Slab::with_capacity(capacity),
		}
	}

	/// The number of Nodes created so far
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// `true` if no Node was created yet
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Moves `node` into the Arena and returns its handle
	pub fn insert(&mut self, node: Node<L>) -> NodeId {
		self.nodes.insert(node)
	}

	/// The Node behind `id`, if any
	pub fn get(&self, id: NodeId) -> Option<&Node<L>> {
		self.nodes.get(id)
	}

	/// Iterates over the Parent chain, starting with `id` itself and ending at the root
	pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, L> {
		Ancestors {
			arena: self,
			next: Some(id),
		}
	}
}

impl<L: Label> Default for NodeArena<L> {
	fn default() -> Self {
		Self::new()
	}
}

use std::ops::{Index, IndexMut};
impl<L: Label> Index<NodeId> for NodeArena<L> {
	type Output = Node<L>;
	#[track_caller]
	fn index(&self, index: NodeId) -> &Node<L> {
		&self.nodes[index]
	}
}
impl<L: Label> IndexMut<NodeId> for NodeArena<L> {
	#[track_caller]
	fn index_mut(&mut self, index: NodeId) -> &mut Node<L> {
		&mut self.nodes[index]
	}
}

/// Iterator over the Parent chain of a Node. See [`NodeArena::ancestors`]
#[derive(Debug)]
pub struct Ancestors<'a, L: Label> {
	arena: &'a NodeArena<L>,
	next: Option<NodeId>,
}

impl<'a, L: Label> Iterator for Ancestors<'a, L> {
	type Item = &'a Node<L>;
	fn next(&mut self) -> Option<&'a Node<L>> {
		let node = self.arena.get(self.next?)?;
		self.next = node.parent;
		Some(node)
	}
}
