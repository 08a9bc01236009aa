//! The Graphs that can be searched

use crate::{
	heuristic::Heuristic,
	node::{Label, Node},
	Cost, Error, NodeId, Result,
};

mod network;
pub use self::network::{Edge, Network};

mod square_grid;
pub use self::square_grid::SquareGrid;

/// Everything the search needs to know about a Graph.
///
/// A Graph knows its start and end, which Labels are part of it and accessible, and how much it
/// costs to move between neighbouring Labels. It is only ever borrowed immutably while a search
/// is running.
pub trait Graph {
	/// The identity of the Nodes in this Graph
	type Label: Label;

	/// A human readable name for this kind of Graph, used in log messages
	const KIND: &'static str;

	/// The start of the search, if set
	fn start(&self) -> Option<&Self::Label>;

	/// The end of the search, if set
	fn end(&self) -> Option<&Self::Label>;

	/// Sets the start of the search.
	///
	/// Fails with [`Error::Validation`] if `label` is not on the Graph, not accessible or
	/// already the start or end.
	fn set_start(&mut self, label: impl Into<Self::Label>) -> Result<()>;

	/// Sets the end of the search. Fails under the same conditions as [`Graph::set_start`].
	fn set_end(&mut self, label: impl Into<Self::Label>) -> Result<()>;

	/// The Heuristic that [`run_search`](crate::search::run_search) should use when solving
	/// this Graph on its own
	fn heuristic(&self) -> Heuristic;

	/// Fails with [`Error::Validation`] if `label` is not part of this Graph.
	fn check_label_on_graph(&self, label: &Self::Label) -> Result<()>;

	/// Lists all neighbours of `label` along with the Cost of the Edge _into_ each of them.
	///
	/// Neighbours are listed in a fixed order, which keeps searches deterministic. Note that
	/// inaccessible neighbours may be part of the list, checking them is up to the caller.
	fn find_neighbours(&self, label: &Self::Label) -> Result<Vec<(Self::Label, Cost)>>;

	/// `true` if `label` is on the Graph and may be part of a Path.
	fn is_accessible(&self, label: &Self::Label) -> bool;

	/// Checks that the Graph is ready to be searched.
	///
	/// Fails with [`Error::Configuration`] if there is no data, start or end are missing, or
	/// start and end are identical.
	fn check_graph(&self) -> Result<()>;

	/// Creates a fresh Node for `label`, with all Scores set to `0`.
	fn create_node(&self, label: Self::Label, parent: Option<NodeId>) -> Result<Node<Self::Label>> {
		let neighbour_costs = self.find_neighbours(&label)?;
		let accessible = self.is_accessible(&label);
		Ok(Node::new(label, neighbour_costs, parent, accessible))
	}

	/// Checks that `label` can become the start or end.
	fn check_label_setting(&self, label: &Self::Label) -> Result<()> {
		self.check_label_on_graph(label)?;
		if !self.is_accessible(label) || self.start() == Some(label) || self.end() == Some(label) {
			return Err(Error::Validation(format!(
				"cannot place a start or end at {:?}: it is inaccessible or already an existing start or end",
				label
			)));
		}
		Ok(())
	}

	/// The start and end of the search, after [`check_graph`](Graph::check_graph) succeeded.
	fn endpoints(&self) -> Result<(Self::Label, Self::Label)> {
		self.check_graph()?;
		match (self.start(), self.end()) {
			(Some(start), Some(end)) => Ok((start.clone(), end.clone())),
			_ => Err(Error::Configuration("no start or end labels specified".into())),
		}
	}
}

/// The common part of [`Graph::check_graph`]: start and end must be set and differ.
pub(crate) fn check_endpoints<L: Label>(start: Option<&L>, end: Option<&L>) -> Result<()> {
	match (start, end) {
		(None, None) => Err(Error::Configuration("no start or end labels specified".into())),
		(None, Some(_)) => Err(Error::Configuration("no start label specified".into())),
		(Some(_), None) => Err(Error::Configuration("no end label specified".into())),
		(Some(start), Some(end)) if start == end => Err(Error::Configuration(
			"the start and end labels are identical".into(),
		)),
		_ => Ok(()),
	}
}
