//! The distance functions used to estimate the remaining Cost of a Path

use crate::{Cost, Error, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Heuristic for how long it takes to reach one Point from another.
///
/// The Heuristic is only ever consulted for [`Square`](crate::node::Square) Nodes, since
/// Places in a [`Network`](crate::graph::Network) have no geometry. Note that only Heuristics
/// that never overestimate the actual Cost lead to optimal Paths. On a Grid with Cell weights
/// of at least `1`:
/// - [`Heuristic::Manhattan`] is admissible without diagonal movement
/// - [`Heuristic::Euclidean`], [`Heuristic::Octile`] and [`Heuristic::Chebyshev`] are admissible
///   with diagonal movement (Chebyshev being the weakest)
/// - [`Heuristic::Zero`] is always admissible and turns A* into Dijkstra
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
	/// no estimate at all
	Zero,
	/// straight-line distance
	#[default]
	Euclidean,
	/// sum of the differences along both axes, also known as
	/// [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry)
	Manhattan,
	/// the larger of the differences along both axes, also known as the
	/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance)
	Chebyshev,
	/// diagonal steps for the shorter axis, straight steps for the rest
	Octile,
}

impl Heuristic {
	/// Calculates the distance between two Points according to this Heuristic.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use a_star_pathfinding::heuristic::Heuristic;
	/// assert_eq!(Heuristic::Manhattan.distance((3, 1), (0, 0)), 3.0 + 1.0);
	/// assert_eq!(Heuristic::Chebyshev.distance((3, 1), (0, 0)), 3.0);
	/// assert_eq!(Heuristic::Euclidean.distance((0, 0), (3, 4)), 5.0);
	/// assert_eq!(Heuristic::Zero.distance((0, 0), (3, 4)), 0.0);
	/// ```
	pub fn distance(self, point: Point, goal: Point) -> Cost {
		let diff_0 = point.0.abs_diff(goal.0) as Cost;
		let diff_1 = point.1.abs_diff(goal.1) as Cost;
		match self {
			Heuristic::Zero => 0.0,
			Heuristic::Euclidean => diff_0.hypot(diff_1),
			Heuristic::Manhattan => diff_0 + diff_1,
			Heuristic::Chebyshev => diff_0.max(diff_1),
			Heuristic::Octile => {
				let (short, long) = if diff_0 < diff_1 {
					(diff_0, diff_1)
				} else {
					(diff_1, diff_0)
				};
				short * std::f64::consts::SQRT_2 + (long - short)
			}
		}
	}

	/// The name used when parsing or printing this Heuristic
	pub fn name(self) -> &'static str {
		match self {
			Heuristic::Zero => "zero",
			Heuristic::Euclidean => "euclidean",
			Heuristic::Manhattan => "manhattan",
			Heuristic::Chebyshev => "chebyshev",
			Heuristic::Octile => "octile",
		}
	}
}

impl fmt::Display for Heuristic {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Heuristic {
	type Err = Error;

	/// Parses a Heuristic by name, case-insensitively.
	///
	/// ```
	/// # use a_star_pathfinding::heuristic::Heuristic;
	/// assert_eq!("Manhattan".parse::<Heuristic>().unwrap(), Heuristic::Manhattan);
	/// assert_eq!("euclidian".parse::<Heuristic>().unwrap(), Heuristic::Euclidean);
	/// assert!("hexagonal".parse::<Heuristic>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Heuristic, Error> {
		match s.trim().to_ascii_lowercase().as_str() {
			"zero" | "none" => Ok(Heuristic::Zero),
			// the misspelling is what older saved configurations contain
			"euclidean" | "euclidian" => Ok(Heuristic::Euclidean),
			"manhattan" => Ok(Heuristic::Manhattan),
			"chebyshev" => Ok(Heuristic::Chebyshev),
			"octile" => Ok(Heuristic::Octile),
			other => Err(Error::Validation(format!("unknown heuristic '{}'", other))),
		}
	}
}
