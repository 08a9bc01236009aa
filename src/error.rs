use thiserror::Error;

/// Convenient result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading, configuring or searching a Graph.
#[derive(Debug, Error)]
pub enum Error {
	/// The Graph is not ready to be searched: no data, missing start or end, or start == end.
	#[error("invalid graph configuration: {0}")]
	Configuration(String),

	/// A label handed to the Graph is off the Graph, on a Wall or collides with an endpoint.
	#[error("invalid label: {0}")]
	Validation(String),

	/// The start or end Node turned out to be inaccessible when the search began.
	#[error("start and end nodes must both be accessible, {label} is not")]
	Domain {
		/// the offending label
		label: String,
	},

	/// `pop_min` was called on an empty open list.
	#[error("cannot pop from an empty open list")]
	EmptyQueue,

	/// The same unordered pair of Places was specified more than once.
	#[error("network invalid: {a} - {b} node pairing has multiple specifications")]
	DuplicateEdge {
		/// first Place of the pair
		a: String,
		/// second Place of the pair
		b: String,
	},

	/// The source data could not be turned into a Graph.
	#[error("malformed graph source: {0}")]
	MalformedSource(String),

	/// Wrapper for IO errors.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Wrapper for JSON errors while writing or reading search History.
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Wrapper for CSV errors while loading a Graph.
	#[error(transparent)]
	Csv(#[from] csv::Error),
}
