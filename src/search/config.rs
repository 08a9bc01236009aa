/// Options for configuring a search. See [`run_search`](crate::search::run_search)
///
/// Default options:
/// ```
/// # use a_star_pathfinding::search::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		max_iterations: 1_000_000,
/// 		suppress_duplicates: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The number of Nodes that may be expanded before the search gives up (defaults to
	/// `1_000_000`).
	///
	/// Reaching the limit is not an error: the search returns
	/// [`Outcome::LimitReached`](crate::search::Outcome::LimitReached) with the Path to the Node
	/// it was looking at last. Lower this to bound the time a single search can take.
	pub max_iterations: usize,
	/// `true` (default): a Node is not added to the open list if an entry with the same Label
	/// and an equal or lower `g` is already in there.
	///
	/// `false`: every Node that is not in the closed list is added, so the open list may contain
	/// any number of stale entries per Label. Paths are just as cheap, but the search may
	/// expand more Nodes.
	pub suppress_duplicates: bool,
}

impl SearchConfig {
	/// a SearchConfig that keeps every duplicate in the open list, reproducing the expansion
	/// counts of searches made before duplicates were suppressed
	///
	/// Values:
	/// ```
	/// # use a_star_pathfinding::search::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		max_iterations: 1_000_000,
	/// 		suppress_duplicates: false,
	/// 	},
	/// 	SearchConfig::FAITHFUL
	/// );
	/// ```
	pub const FAITHFUL: SearchConfig = SearchConfig {
		max_iterations: 1_000_000,
		suppress_duplicates: false,
	};

	/// creates a default SearchConfig with the given iteration limit
	pub fn with_max_iterations(max_iterations: usize) -> SearchConfig {
		SearchConfig {
			max_iterations,
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			max_iterations: 1_000_000,
			suppress_duplicates: true,
		}
	}
}
