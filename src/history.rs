//! Recording the state of a search on every iteration
//!
//! The search hands a borrowed [`Snapshot`] to a [`Recorder`] before every iteration and once
//! more when the end is reached. Recorders decide what to keep: [`NoHistory`] keeps nothing,
//! [`MemoryHistory`] keeps owned [`Frame`]s, and [`HistoryWriter`] writes them to disk in a
//! layout that [`HistoryReader`] can replay.

use crate::{
	frontier::Frontier,
	graph::Graph,
	node::{Label, Node},
	Cost, NodeArena, NodeId, Result,
};
use serde::{Deserialize, Serialize};

mod files;
pub use self::files::{HistoryReader, HistoryWriter};

/// Receives the state of a running search.
pub trait Recorder<G: Graph> {
	/// Called with the state of the search. Any Error aborts the search.
	fn record(&mut self, snapshot: &Snapshot<'_, G>) -> Result<()>;
}

/// The state of a search at the start of an iteration.
///
/// Iteration `0` is recorded before anything was expanded: the current Node is the start, the
/// open list holds only the start and the closed list is empty.
#[derive(Debug)]
pub struct Snapshot<'a, G: Graph> {
	iteration: usize,
	graph: &'a G,
	arena: &'a NodeArena<G::Label>,
	current: NodeId,
	frontier: &'a Frontier<NodeId>,
	closed: &'a [NodeId],
}

impl<'a, G: Graph> Snapshot<'a, G> {
	pub(crate) fn new(
		iteration: usize,
		graph: &'a G,
		arena: &'a NodeArena<G::Label>,
		current: NodeId,
		frontier: &'a Frontier<NodeId>,
		closed: &'a [NodeId],
	) -> Self {
		Snapshot {
			iteration,
			graph,
			arena,
			current,
			frontier,
			closed,
		}
	}

	/// The number of iterations completed so far
	pub fn iteration(&self) -> usize {
		self.iteration
	}

	/// The Graph being searched
	pub fn graph(&self) -> &'a G {
		self.graph
	}

	/// The Node expanded last, or the start before the first iteration
	pub fn current(&self) -> &'a Node<G::Label> {
		let arena = self.arena;
		&arena[self.current]
	}

	/// The open list with priorities, in the order it would be popped
	pub fn open_list(&self) -> Vec<(&'a Node<G::Label>, Cost)> {
		let arena = self.arena;
		self.frontier
			.sorted()
			.into_iter()
			.map(|(&id, priority)| (&arena[id], priority))
			.collect()
	}

	/// The closed list, in the order the Nodes were expanded
	pub fn closed_list(&self) -> impl Iterator<Item = &'a Node<G::Label>> + 'a {
		let arena = self.arena;
		self.closed.iter().map(move |&id| &arena[id])
	}

	/// A serializable copy of `node`, with its Parent replaced by the Parent's Label
	pub fn record_of(&self, node: &Node<G::Label>) -> NodeRecord<G::Label> {
		NodeRecord {
			label: node.label().clone(),
			parent: node
				.parent
				.and_then(|id| self.arena.get(id))
				.map(|parent| parent.label().clone()),
			g: node.g,
			h: node.h,
			f: node.f,
		}
	}

	/// [`current`](Snapshot::current) as a [`NodeRecord`]
	pub fn current_record(&self) -> NodeRecord<G::Label> {
		self.record_of(self.current())
	}

	/// [`open_list`](Snapshot::open_list) as [`OpenRecord`]s
	pub fn open_records(&self) -> Vec<OpenRecord<G::Label>> {
		self.open_list()
			.into_iter()
			.map(|(node, priority)| OpenRecord {
				node: self.record_of(node),
				priority,
			})
			.collect()
	}

	/// [`closed_list`](Snapshot::closed_list) as [`NodeRecord`]s
	pub fn closed_records(&self) -> Vec<NodeRecord<G::Label>> {
		self.closed_list().map(|node| self.record_of(node)).collect()
	}

	/// An owned copy of everything in this Snapshot except the Graph
	pub fn to_frame(&self) -> Frame<G::Label> {
		Frame {
			iteration: self.iteration,
			current: self.current_record(),
			open_list: self.open_records(),
			closed_list: self.closed_records(),
		}
	}
}

/// A Node as it is stored in the History
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Label"))]
pub struct NodeRecord<L> {
	/// the Label of the Node
	pub label: L,
	/// the Label of the Node it was reached from
	pub parent: Option<L>,
	/// Cost so far
	pub g: Cost,
	/// Heuristic estimate
	pub h: Cost,
	/// `g + h`
	pub f: Cost,
}

/// An entry of the open list as it is stored in the History
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Label"))]
pub struct OpenRecord<L> {
	/// the Node
	pub node: NodeRecord<L>,
	/// its priority in the open list
	pub priority: Cost,
}

/// An owned copy of a [`Snapshot`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Label"))]
pub struct Frame<L> {
	/// see [`Snapshot::iteration`]
	pub iteration: usize,
	/// see [`Snapshot::current`]
	pub current: NodeRecord<L>,
	/// see [`Snapshot::open_list`]
	pub open_list: Vec<OpenRecord<L>>,
	/// see [`Snapshot::closed_list`]
	pub closed_list: Vec<NodeRecord<L>>,
}

/// A Recorder that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHistory;

impl<G: Graph> Recorder<G> for NoHistory {
	fn record(&mut self, _snapshot: &Snapshot<'_, G>) -> Result<()> {
		Ok(())
	}
}

/// A Recorder that keeps a [`Frame`] of every Snapshot in memory.
///
/// ## Examples
/// ```
/// use a_star_pathfinding::prelude::*;
///
/// let mut grid = SquareGrid::new(vec![vec![1.0; 3]], false, Heuristic::Manhattan).unwrap();
/// grid.set_start((0, 0)).unwrap();
/// grid.set_end((0, 2)).unwrap();
///
/// let mut history = MemoryHistory::new();
/// run_search_with(&grid, Heuristic::Manhattan, &SearchConfig::default(), &mut history).unwrap();
///
/// let iterations: Vec<usize> = history.frames().iter().map(|frame| frame.iteration).collect();
/// assert_eq!(iterations, vec![0, 1, 2, 3]);
/// assert_eq!(history.frames()[0].current.label, (0, 0));
/// assert!(history.frames()[0].closed_list.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MemoryHistory<L> {
	frames: Vec<Frame<L>>,
}

impl<L> MemoryHistory<L> {
	/// Creates an empty MemoryHistory
	pub fn new() -> Self {
		MemoryHistory { frames: vec![] }
	}

	/// All Frames recorded so far
	pub fn frames(&self) -> &[Frame<L>] {
		&self.frames
	}

	/// Takes the recorded Frames
	pub fn into_frames(self) -> Vec<Frame<L>> {
		self.frames
	}
}

impl<L> Default for MemoryHistory<L> {
	fn default() -> Self {
		Self::new()
	}
}

impl<G: Graph> Recorder<G> for MemoryHistory<G::Label> {
	fn record(&mut self, snapshot: &Snapshot<'_, G>) -> Result<()> {
		self.frames.push(snapshot.to_frame());
		Ok(())
	}
}
