//! The A* search itself

use crate::{
	frontier::Frontier,
	graph::Graph,
	heuristic::Heuristic,
	history::{NoHistory, Recorder, Snapshot},
	node::{Label, Node},
	path::{reconstruct_path, Path},
	Error, NodeArena, NodeId, Result,
};
use hashbrown::HashSet;
use log::{debug, info, warn};

mod config;
pub use self::config::SearchConfig;

/// How a search ended.
///
/// Always check the variant: an unsuccessful search does not return an empty Path, but the
/// number of Nodes it expanded.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<L> {
	/// The end was reached. The Path runs from start to end, both inclusive.
	Found(Path<L>),
	/// Every reachable Node was expanded without reaching the end.
	NotFound {
		/// the number of expanded Nodes
		iterations: usize,
	},
	/// [`SearchConfig::max_iterations`] was exceeded. The Path leads from the start to the Node
	/// that was expanded last and does not necessarily reach the end.
	LimitReached(Path<L>),
}

impl<L> Outcome<L> {
	/// The Path from start to end, if the end was reached
	pub fn path(&self) -> Option<&Path<L>> {
		match self {
			Outcome::Found(path) => Some(path),
			_ => None,
		}
	}

	/// `true` if the end was reached
	pub fn is_found(&self) -> bool {
		matches!(self, Outcome::Found(_))
	}
}

/// Searches `graph` from its start to its end using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// `heuristic` is handed to every [`Node::get_heuristic_dist`] call, Places in a Network ignore it.
///
/// ## Errors
/// - [`Error::Configuration`] if the Graph has no data, no start, no end, or start == end
/// - [`Error::Domain`] if start or end is not accessible
/// - any Error of the Graph while creating Nodes
///
/// ## Examples
/// ```
/// use a_star_pathfinding::prelude::*;
///
/// let mut grid = SquareGrid::new(vec![vec![1.0; 4]; 4], false, Heuristic::Euclidean).unwrap();
/// grid.set_start((0, 0)).unwrap();
/// grid.set_end((0, 3)).unwrap();
///
/// let outcome = run_search(&grid, Heuristic::Manhattan, &SearchConfig::default()).unwrap();
/// assert_eq!(outcome.path().unwrap().path, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
/// assert_eq!(outcome.path().unwrap().cost, 3.0);
/// ```
pub fn run_search<G: Graph>(
	graph: &G,
	heuristic: Heuristic,
	config: &SearchConfig,
) -> Result<Outcome<G::Label>> {
	run_search_with(graph, heuristic, config, &mut NoHistory)
}

/// Like [`run_search`], but hands the state of the search to `recorder` before every iteration
/// and once more when the end is reached.
pub fn run_search_with<G: Graph, R: Recorder<G>>(
	graph: &G,
	heuristic: Heuristic,
	config: &SearchConfig,
	recorder: &mut R,
) -> Result<Outcome<G::Label>> {
	let (start, end) = graph.endpoints()?;

	let start_node = graph.create_node(start, None)?;
	let end_node = graph.create_node(end, None)?;
	for node in [&start_node, &end_node] {
		if !node.accessible {
			return Err(Error::Domain {
				label: format!("{:?}", node.label()),
			});
		}
	}

	let capacity = start_node.neighbour_costs().len() + 1;
	let mut arena = NodeArena::with_capacity(capacity);
	let mut frontier = Frontier::with_capacity(capacity);
	let mut closed: Vec<NodeId> = vec![];
	let mut closed_labels = HashSet::new();

	let mut current = arena.insert(start_node);
	frontier.put(current, 0.0);

	let mut iterations = 0;
	while !frontier.is_empty() {
		recorder.record(&Snapshot::new(
			iterations, graph, &arena, current, &frontier, &closed,
		))?;

		iterations += 1;
		if iterations > config.max_iterations {
			warn!(
				"Exceeded max_iterations ({}), returning path so far.",
				config.max_iterations
			);
			return Ok(Outcome::LimitReached(reconstruct_path(&arena, current)));
		}

		current = frontier.pop_min()?;
		closed.push(current);
		closed_labels.insert(arena[current].label().clone());

		if arena[current] == end_node {
			recorder.record(&Snapshot::new(
				iterations, graph, &arena, current, &frontier, &closed,
			))?;
			let path = reconstruct_path(&arena, current);
			debug!(
				"Reached {:?} after {} iterations, {} nodes created.",
				end_node.label(),
				iterations,
				arena.len()
			);
			return Ok(Outcome::Found(path));
		}

		let children = expand(
			graph,
			&arena,
			current,
			&end_node,
			heuristic,
			&closed_labels,
			&frontier,
			config,
		)?;
		for child in children {
			let priority = child.f;
			frontier.put(arena.insert(child), priority);
		}
	}

	debug!(
		"Exhausted the open list after {} iterations, {} nodes created.",
		iterations,
		arena.len()
	);
	Ok(Outcome::NotFound { iterations })
}

/// Scores all neighbours of `current` that should enter the open list.
#[allow(clippy::too_many_arguments)]
fn expand<G: Graph>(
	graph: &G,
	arena: &NodeArena<G::Label>,
	current: NodeId,
	end_node: &Node<G::Label>,
	heuristic: Heuristic,
	closed_labels: &HashSet<G::Label>,
	frontier: &Frontier<NodeId>,
	config: &SearchConfig,
) -> Result<Vec<Node<G::Label>>> {
	let parent = &arena[current];
	let mut children = vec![];

	for (label, _) in parent.neighbour_costs() {
		if !graph.is_accessible(label) || closed_labels.contains(label) {
			continue;
		}
		let mut child = graph.create_node(label.clone(), Some(current))?;
		let step = match parent.get_cost_to_leave(&child) {
			Some(step) => step,
			None => continue,
		};

		child.g = parent.g + step;
		child.h = child.get_heuristic_dist(end_node, heuristic);
		child.f = child.g + child.h;

		if config.suppress_duplicates && has_better_entry(arena, frontier, &child) {
			continue;
		}
		children.push(child);
	}

	Ok(children)
}

/// `true` if the open list already holds `child` with an equal or lower `g`.
fn has_better_entry<L: Label>(
	arena: &NodeArena<L>,
	frontier: &Frontier<NodeId>,
	child: &Node<L>,
) -> bool {
	frontier.iter().any(|(&id, _)| {
		let open = &arena[id];
		open == child && open.g <= child.g
	})
}

/// Runs [`run_search_with`] with the Heuristic of the Graph and logs the result.
pub(crate) fn solve<G: Graph, R: Recorder<G>>(
	graph: &G,
	config: &SearchConfig,
	recorder: &mut R,
) -> Result<Outcome<G::Label>> {
	let outcome = run_search_with(graph, graph.heuristic(), config, recorder)?;
	match &outcome {
		Outcome::Found(path) => info!(
			"Successfully solved the {} with {} steps.",
			G::KIND,
			path.steps()
		),
		Outcome::NotFound { iterations } => info!(
			"Unable to solve the {} after {} iterations.",
			G::KIND,
			iterations
		),
		Outcome::LimitReached(path) => info!(
			"Stopped solving the {} after {} iterations, best effort path has {} steps.",
			G::KIND,
			config.max_iterations,
			path.steps()
		),
	}
	Ok(outcome)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Network, SquareGrid};
	use crate::history::MemoryHistory;

	fn grid(cells: Vec<Vec<f64>>, diagonality: bool, heuristic: Heuristic) -> SquareGrid {
		SquareGrid::new(cells, diagonality, heuristic).unwrap()
	}

	#[test]
	fn open_grid() {
		let mut grid = grid(vec![vec![1.0; 4]; 4], false, Heuristic::Euclidean);
		grid.set_start((0, 0)).unwrap();
		grid.set_end((0, 3)).unwrap();

		let outcome = run_search(&grid, Heuristic::Euclidean, &SearchConfig::default()).unwrap();
		assert_eq!(
			outcome,
			Outcome::Found(Path::new(vec![(0, 0), (0, 1), (0, 2), (0, 3)], 3.0))
		);
	}

	#[test]
	fn prefers_cheaper_detour() {
		let mut network =
			Network::from_edges(vec![("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)]).unwrap();
		network.set_start("A").unwrap();
		network.set_end("C").unwrap();

		let outcome = run_search(&network, Heuristic::Zero, &SearchConfig::default()).unwrap();
		let path = outcome.path().unwrap();
		assert_eq!(path.path, vec!["A", "B", "C"]);
		assert_eq!(path.cost, 2.0);
	}

	#[test]
	fn walled_off() {
		let mut grid = grid(vec![vec![1.0, 1.0, 0.0, 1.0]; 3], true, Heuristic::Euclidean);
		grid.set_start((0, 0)).unwrap();
		grid.set_end((2, 3)).unwrap();

		match run_search(&grid, Heuristic::Euclidean, &SearchConfig::default()).unwrap() {
			Outcome::NotFound { iterations } => assert!(iterations >= 6),
			other => panic!("expected no path, got {:?}", other),
		}
	}

	#[test]
	fn diagonal_costs() {
		let mut grid = grid(vec![vec![2.0; 3]; 3], true, Heuristic::Octile);
		grid.set_start((0, 0)).unwrap();
		grid.set_end((2, 2)).unwrap();

		let outcome = run_search(&grid, Heuristic::Octile, &SearchConfig::default()).unwrap();
		let path = outcome.path().unwrap();
		assert_eq!(path.path, vec![(0, 0), (1, 1), (2, 2)]);
		assert!((path.cost - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
	}

	#[test]
	fn iteration_limit() {
		let mut grid = grid(vec![vec![1.0; 10]], false, Heuristic::Manhattan);
		grid.set_start((0, 0)).unwrap();
		grid.set_end((0, 9)).unwrap();

		let outcome =
			run_search(&grid, Heuristic::Manhattan, &SearchConfig::with_max_iterations(3)).unwrap();
		assert_eq!(
			outcome,
			Outcome::LimitReached(Path::new(vec![(0, 0), (0, 1), (0, 2)], 2.0))
		);
	}

	#[test]
	fn inaccessible_endpoints() {
		// endpoints are validated when set or loaded, so the Wall is placed afterwards
		let grid = grid(vec![vec![1.0, 1.0, 0.0]], false, Heuristic::Manhattan)
			.with_unchecked_endpoints((0, 0), (0, 2));

		assert!(matches!(
			run_search(&grid, Heuristic::Manhattan, &SearchConfig::default()),
			Err(Error::Domain { .. })
		));
	}

	#[test]
	fn unconfigured() {
		let grid = grid(vec![vec![1.0, 1.0]], false, Heuristic::Manhattan);
		assert!(matches!(
			run_search(&grid, Heuristic::Manhattan, &SearchConfig::default()),
			Err(Error::Configuration(_))
		));
	}

	#[test]
	fn duplicate_suppression() {
		// two routes of equal length lead into the bottom right corner
		let mut grid = grid(vec![vec![1.0; 5]; 5], false, Heuristic::Zero);
		grid.set_start((0, 0)).unwrap();
		grid.set_end((4, 4)).unwrap();

		let mut suppressed = MemoryHistory::new();
		let mut faithful = MemoryHistory::new();
		let a = run_search_with(&grid, Heuristic::Zero, &SearchConfig::default(), &mut suppressed)
			.unwrap();
		let b = run_search_with(&grid, Heuristic::Zero, &SearchConfig::FAITHFUL, &mut faithful)
			.unwrap();

		assert_eq!(a.path().unwrap().cost, 8.0);
		assert_eq!(b.path().unwrap().cost, 8.0);

		let max_open = |history: &MemoryHistory<_>| {
			history
				.frames()
				.iter()
				.map(|frame| frame.open_list.len())
				.max()
				.unwrap()
		};
		assert!(max_open(&suppressed) < max_open(&faithful));

		// no Label is ever in the suppressed open list twice with the same g
		for frame in suppressed.frames() {
			for (i, x) in frame.open_list.iter().enumerate() {
				for y in frame.open_list.iter().skip(i + 1) {
					assert!(x.node.label != y.node.label || x.node.g != y.node.g);
				}
			}
		}
	}
}
