#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find the cheapest Path between two Points using A*.
//!
//! ## Introduction
//! This crate implements a classic [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! over two kinds of Graphs:
//! - a [`SquareGrid`](graph::SquareGrid) of weighted Cells, where a Cell with weight `0` is a
//!   Wall, optionally allowing diagonal Steps
//! - a [`Network`](graph::Network) of named Places connected by undirected, weighted Edges
//!
//! Both implement the [`Graph`](graph::Graph) Trait, which is all the search itself ever asks for.
//! Every Node created during a search is kept in an Arena for the duration of that search, so
//! that the Path can be reconstructed by following Parent handles.
//!
//! Optionally, the complete state of the search (current Node, open list and closed list) can be
//! recorded on every iteration through a [`Recorder`](history::Recorder), for example to a
//! directory of JSON files that can be replayed later.
//!
//! ## Examples
//! Solving a Grid:
//! ```
//! use a_star_pathfinding::prelude::*;
//!
//! // 0 = wall, anything else = cost of entering the Cell
//! let mut grid = SquareGrid::new(
//!     vec![
//!         vec![1.0, 1.0, 1.0, 1.0],
//!         vec![1.0, 0.0, 0.0, 1.0],
//!         vec![1.0, 1.0, 0.0, 1.0],
//!         vec![0.0, 1.0, 1.0, 1.0],
//!     ],
//!     false, // diagonality
//!     Heuristic::Manhattan,
//! )
//! .unwrap();
//!
//! grid.set_start((2, 0)).unwrap();
//! grid.set_end((3, 3)).unwrap();
//!
//! match grid.solve(&SearchConfig::default()).unwrap() {
//!     Outcome::Found(path) => {
//!         assert_eq!(path.path, vec![(2, 0), (2, 1), (3, 1), (3, 2), (3, 3)]);
//!         assert_eq!(path.cost, 4.0);
//!     }
//!     other => panic!("expected a path, got {:?}", other),
//! }
//! ```
//!
//! Solving a Network:
//! ```
//! use a_star_pathfinding::prelude::*;
//!
//! let mut network = Network::from_edges(vec![
//!     ("A", "B", 1.0),
//!     ("B", "C", 1.0),
//!     ("A", "C", 5.0),
//! ])
//! .unwrap();
//!
//! network.set_start("A").unwrap();
//! network.set_end("C").unwrap();
//!
//! let outcome = network.solve(&SearchConfig::default()).unwrap();
//! let path = outcome.path().unwrap();
//! assert_eq!(path.path, vec!["A", "B", "C"]);
//! assert_eq!(path.cost, 2.0);
//! ```
//!
//! ### Unreachable Goals
//! If the Goal cannot be reached, the number of expanded Nodes is returned instead of a Path:
//! ```
//! use a_star_pathfinding::prelude::*;
//!
//! let mut grid = SquareGrid::new(
//!     vec![
//!         vec![1.0, 0.0, 1.0],
//!         vec![1.0, 0.0, 1.0],
//!     ],
//!     true,
//!     Heuristic::Euclidean,
//! )
//! .unwrap();
//! grid.set_start((0, 0)).unwrap();
//! grid.set_end((1, 2)).unwrap();
//!
//! let outcome = grid.solve(&SearchConfig::default()).unwrap();
//! assert_eq!(outcome, &Outcome::NotFound { iterations: 2 });
//! ```
//!
//! ### Configuration
//! [`SearchConfig`](search::SearchConfig) controls the iteration ceiling and how duplicate
//! entries in the open list are handled:
//! ```
//! use a_star_pathfinding::prelude::*;
//!
//! let config = SearchConfig {
//!     max_iterations: 10_000,
//!     ..SearchConfig::default()
//! };
//! assert!(config.suppress_duplicates);
//! ```

/// A shorthand for Cells on a [`SquareGrid`](graph::SquareGrid), as `(row, col)`
pub type Point = (usize, usize);

/// The Type used for all Costs and Scores
pub type Cost = f64;

mod error;
pub use self::error::{Error, Result};

mod arena;
pub use self::arena::{Ancestors, NodeArena, NodeId};

pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod history;
pub mod node;
pub mod path;
pub mod search;

/// The most commonly used Types and Traits of this crate
pub mod prelude {
	pub use crate::graph::{Graph, Network, SquareGrid};
	pub use crate::heuristic::Heuristic;
	pub use crate::history::{HistoryReader, HistoryWriter, MemoryHistory, NoHistory, Recorder};
	pub use crate::node::{Label, Node, Place, Square};
	pub use crate::path::Path;
	pub use crate::search::{run_search, run_search_with, Outcome, SearchConfig};
	pub use crate::{Cost, Error, Point, Result};
}
