//! The Nodes created during a search

use crate::{heuristic::Heuristic, Cost, NodeId, Point};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// The identity of a Node.
///
/// A Label is all that is needed to tell two Nodes apart: Nodes with the same Label are equal,
/// no matter their Scores or Parents. The two implementations of this Trait decide the geometry
/// of their Graph:
/// - `String` for Places in a [`Network`](crate::graph::Network), which have no geometry at all
/// - [`Point`] for Squares on a [`SquareGrid`](crate::graph::SquareGrid)
pub trait Label: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned {
	/// The factor that the Cost of the Edge from `self` into `next` is multiplied with.
	fn step_factor(&self, next: &Self) -> Cost;
	/// The estimated remaining Cost from `self` to `goal`.
	fn heuristic_dist(&self, goal: &Self, heuristic: Heuristic) -> Cost;
}

impl Label for String {
	fn step_factor(&self, _next: &String) -> Cost {
		1.0
	}
	/// Places have no coordinates, so the only admissible estimate is `0`.
	fn heuristic_dist(&self, _goal: &String, _heuristic: Heuristic) -> Cost {
		0.0
	}
}

impl Label for Point {
	fn step_factor(&self, next: &Point) -> Cost {
		if is_diagonal_neighbour(*self, *next) {
			std::f64::consts::SQRT_2
		} else {
			1.0
		}
	}
	fn heuristic_dist(&self, goal: &Point, heuristic: Heuristic) -> Cost {
		heuristic.distance(*self, *goal)
	}
}

/// Checks if two Points touch only by their corners.
pub fn is_diagonal_neighbour(a: Point, b: Point) -> bool {
	a.0.abs_diff(b.0) == 1 && a.1.abs_diff(b.1) == 1
}

/// A Node of the search.
///
/// Stores the Costs of leaving into each neighbour, a handle to the Parent on the best known
/// Path and the Scores of the search:
/// - `g`: the Cost of the Path from the start to this Node
/// - `h`: the Heuristic estimate from this Node to the end
/// - `f`: `g + h`, the priority in the open list
#[derive(Clone)]
pub struct Node<L: Label> {
	label: L,
	neighbour_costs: Vec<(L, Cost)>,
	/// handle of the Node this one was reached from
	pub parent: Option<NodeId>,
	/// `false` if this Node may never be part of a Path
	pub accessible: bool,
	/// Cost so far
	pub g: Cost,
	/// Heuristic estimate
	pub h: Cost,
	/// `g + h`
	pub f: Cost,
}

/// A Node in a [`Network`](crate::graph::Network)
pub type Place = Node<String>;
/// A Node on a [`SquareGrid`](crate::graph::SquareGrid)
pub type Square = Node<Point>;

impl<L: Label> Node<L> {
	/// Creates a new Node with all Scores set to `0`.
	///
	/// `neighbour_costs` holds the Cost of the Edge _into_ each neighbour.
	pub fn new(
		label: L,
		neighbour_costs: Vec<(L, Cost)>,
		parent: Option<NodeId>,
		accessible: bool,
	) -> Node<L> {
		Node {
			label,
			neighbour_costs,
			parent,
			accessible,
			g: 0.0,
			h: 0.0,
			f: 0.0,
		}
	}

	/// The identity of this Node
	pub fn label(&self) -> &L {
		&self.label
	}

	/// All neighbours and the Cost of the Edge into them, as handed out by the Graph
	pub fn neighbour_costs(&self) -> &[(L, Cost)] {
		&self.neighbour_costs
	}

	/// The Cost of the Edge into `neighbour` as recorded by the Graph, without any geometry
	pub fn edge_cost(&self, neighbour: &L) -> Option<Cost> {
		self.neighbour_costs
			.iter()
			.find(|(label, _)| label == neighbour)
			.map(|&(_, cost)| cost)
	}

	/// The Cost of moving from this Node into `neighbour`.
	///
	/// Diagonal Steps on a Grid cost `√2` times the weight of the entered Cell.
	/// Returns `None` if `neighbour` is not adjacent to this Node.
	///
	/// ## Examples
	/// ```
	/// # use a_star_pathfinding::node::Square;
	/// let square = Square::new((1, 1), vec![((1, 2), 3.0), ((2, 2), 3.0)], None, true);
	/// let straight = Square::new((1, 2), vec![], None, true);
	/// let diagonal = Square::new((2, 2), vec![], None, true);
	///
	/// assert_eq!(square.get_cost_to_leave(&straight), Some(3.0));
	/// assert_eq!(square.get_cost_to_leave(&diagonal), Some(3.0 * std::f64::consts::SQRT_2));
	/// assert_eq!(straight.get_cost_to_leave(&square), None);
	/// ```
	pub fn get_cost_to_leave(&self, neighbour: &Node<L>) -> Option<Cost> {
		self.edge_cost(&neighbour.label)
			.map(|cost| cost * self.label.step_factor(&neighbour.label))
	}

	/// The Heuristic estimate of the Cost from this Node to `other`.
	pub fn get_heuristic_dist(&self, other: &Node<L>, heuristic: Heuristic) -> Cost {
		self.label.heuristic_dist(&other.label, heuristic)
	}
}

impl<L: Label> PartialEq for Node<L> {
	fn eq(&self, other: &Node<L>) -> bool {
		self.label == other.label
	}
}
impl<L: Label> Eq for Node<L> {}

impl<L: Label> Debug for Node<L> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"Node {:?} - g={}, h={} f={}",
			self.label, self.g, self.h, self.f
		)
	}
}
