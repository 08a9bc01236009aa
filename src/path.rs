//! Paths found by the search and how to rebuild them

use crate::{node::Label, Cost, NodeArena, NodeId};
use serde::{Deserialize, Serialize};

/// A Path from the start of a search to some Node
///
/// Stores a sequence of Labels in `path` and the total Cost of traversing them in `cost`.
/// Note that the individual costs of the steps within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<L> {
	/// the Path, starting with the start of the search
	pub path: Vec<L>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<L> Path<L> {
	/// creates a new Path with the given sequence of Labels and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use a_star_pathfinding::path::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost, 4.5);
	/// ```
	pub fn new(path: Vec<L>, cost: Cost) -> Path<L> {
		Path { path, cost }
	}

	/// The number of Steps in the Path, which is one less than the number of Labels
	pub fn steps(&self) -> usize {
		self.path.len().saturating_sub(1)
	}
}

/// Rebuilds the Path to `id` by following the Parent handles back to the root.
///
/// The resulting Path runs from the root to `id` (inclusive), its cost is the `g` Score of `id`.
pub fn reconstruct_path<L: Label>(arena: &NodeArena<L>, id: NodeId) -> Path<L> {
	let mut steps: Vec<L> = arena
		.ancestors(id)
		.map(|node| node.label().clone())
		.collect();
	steps.reverse();
	let cost = arena.get(id).map_or(0.0, |node| node.g);
	Path::new(steps, cost)
}

use std::ops::{Deref, Index};

impl<L> Index<usize> for Path<L> {
	type Output = L;
	fn index(&self, index: usize) -> &L {
		&self.path[index]
	}
}

impl<L> Deref for Path<L> {
	type Target = [L];
	fn deref(&self) -> &[L] {
		&self.path
	}
}

use std::fmt;
impl<L: fmt::Debug> fmt::Display for Path<L> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}
