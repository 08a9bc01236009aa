use super::{check_endpoints, Graph};
use crate::{
	heuristic::Heuristic,
	history::{NoHistory, Recorder},
	search::{self, Outcome, SearchConfig},
	Cost, Error, Result,
};
use hashbrown::{HashMap, HashSet};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::io;

/// An undirected, weighted Edge between two Places
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
	/// one end of the Edge
	pub a: String,
	/// the other end of the Edge
	pub b: String,
	/// the Cost of moving along the Edge in either direction
	pub cost: Cost,
}

/// A Network of named Places connected by undirected, weighted Edges.
///
/// Every unordered pair of Places may only be connected once; specifying `A-B` twice, or both
/// `A-B` and `B-A`, is rejected when the Network is loaded. Places have no coordinates, which
/// means that the search has no Heuristic to go on and behaves like Dijkstra.
///
/// ## Examples
/// ```
/// use a_star_pathfinding::prelude::*;
///
/// let csv = "A,B,1\nB,C,1\nA,C,5\n";
/// let network = Network::from_csv(csv.as_bytes()).unwrap();
///
/// assert_eq!(network.edges().len(), 3);
/// assert_eq!(
///     network.find_neighbours(&"A".to_string()).unwrap(),
///     vec![("B".to_string(), 1.0), ("C".to_string(), 5.0)],
/// );
///
/// let duplicate = "A,B,1\nB,A,2\n";
/// assert!(Network::from_csv(duplicate.as_bytes()).is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "NetworkRecord", into = "NetworkRecord")]
pub struct Network {
	edges: Vec<Edge>,
	adjacency: HashMap<String, Vec<(String, Cost)>>,
	start: Option<String>,
	end: Option<String>,
	solution: Option<Outcome<String>>,
}

/// What a Network looks like on disk
#[derive(Serialize, Deserialize)]
struct NetworkRecord {
	edges: Vec<Edge>,
	start: Option<String>,
	end: Option<String>,
}

impl TryFrom<NetworkRecord> for Network {
	type Error = Error;
	fn try_from(record: NetworkRecord) -> Result<Network> {
		let mut network = Network::from_edges(
			record
				.edges
				.into_iter()
				.map(|Edge { a, b, cost }| (a, b, cost)),
		)?;
		if let Some(start) = record.start {
			network.set_start(start)?;
		}
		if let Some(end) = record.end {
			network.set_end(end)?;
		}
		Ok(network)
	}
}

impl From<Network> for NetworkRecord {
	fn from(network: Network) -> NetworkRecord {
		NetworkRecord {
			edges: network.edges,
			start: network.start,
			end: network.end,
		}
	}
}

impl Network {
	/// Creates a Network from `(a, b, cost)` triples.
	///
	/// Fails with [`Error::DuplicateEdge`] if a pair of Places is connected more than once, and
	/// with [`Error::MalformedSource`] for empty labels or negative / non-finite costs.
	pub fn from_edges<I, S>(edges: I) -> Result<Network>
	where
		I: IntoIterator<Item = (S, S, Cost)>,
		S: Into<String>,
	{
		let mut seen = HashSet::new();
		let mut list = vec![];
		for (a, b, cost) in edges {
			let (a, b) = (a.into(), b.into());
			if a.is_empty() || b.is_empty() {
				return Err(Error::MalformedSource(format!(
					"edge {} - {} has an empty label",
					a, b
				)));
			}
			if !cost.is_finite() || cost < 0.0 {
				return Err(Error::MalformedSource(format!(
					"edge {} - {} has invalid cost {}",
					a, b, cost
				)));
			}
			let pair = if a <= b {
				(a.clone(), b.clone())
			} else {
				(b.clone(), a.clone())
			};
			if !seen.insert(pair) {
				error!(
					"Network invalid: [{}, {}] node pairing has multiple specifications.",
					a, b
				);
				return Err(Error::DuplicateEdge { a, b });
			}
			list.push(Edge { a, b, cost });
		}

		// all Edges leaving from the first column come before those from the second
		let mut adjacency: HashMap<String, Vec<(String, Cost)>> = HashMap::new();
		for edge in list.iter() {
			adjacency
				.entry(edge.a.clone())
				.or_default()
				.push((edge.b.clone(), edge.cost));
			adjacency.entry(edge.b.clone()).or_default();
		}
		for edge in list.iter().filter(|edge| edge.a != edge.b) {
			adjacency
				.entry(edge.b.clone())
				.or_default()
				.push((edge.a.clone(), edge.cost));
		}

		Ok(Network {
			edges: list,
			adjacency,
			start: None,
			end: None,
			solution: None,
		})
	}

	/// Loads a Network from header-less CSV with the columns `a,b,cost`.
	pub fn from_csv<R: io::Read>(reader: R) -> Result<Network> {
		let mut reader = csv::ReaderBuilder::new()
			.has_headers(false)
			.trim(csv::Trim::All)
			.from_reader(reader);
		let mut edges = vec![];
		for row in reader.deserialize::<(String, String, Cost)>() {
			edges.push(row?);
		}
		let network = Network::from_edges(edges)?;
		info!(
			"Loaded network with {} places and {} edges.",
			network.adjacency.len(),
			network.edges.len()
		);
		Ok(network)
	}

	/// All Edges in the order they were loaded
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// All Places that are connected to at least one Edge, in no particular order
	pub fn labels(&self) -> impl Iterator<Item = &String> + '_ {
		self.adjacency.keys()
	}

	/// The result of the last call to [`solve`](Network::solve), if any
	pub fn solution(&self) -> Option<&Outcome<String>> {
		self.solution.as_ref()
	}

	/// Searches the Network from start to end and stores the result as the
	/// [`solution`](Network::solution).
	pub fn solve(&mut self, config: &SearchConfig) -> Result<&Outcome<String>> {
		self.solve_with(config, &mut NoHistory)
	}

	/// Like [`solve`](Network::solve), but hands every iteration to `recorder`.
	pub fn solve_with<R: Recorder<Network>>(
		&mut self,
		config: &SearchConfig,
		recorder: &mut R,
	) -> Result<&Outcome<String>> {
		let outcome = search::solve(&*self, config, recorder)?;
		Ok(self.solution.insert(outcome))
	}
}

impl Graph for Network {
	type Label = String;

	const KIND: &'static str = "Network";

	fn start(&self) -> Option<&String> {
		self.start.as_ref()
	}

	fn end(&self) -> Option<&String> {
		self.end.as_ref()
	}

	fn set_start(&mut self, label: impl Into<String>) -> Result<()> {
		let label = label.into();
		self.check_label_setting(&label)?;
		self.start = Some(label);
		Ok(())
	}

	fn set_end(&mut self, label: impl Into<String>) -> Result<()> {
		let label = label.into();
		self.check_label_setting(&label)?;
		self.end = Some(label);
		Ok(())
	}

	fn heuristic(&self) -> Heuristic {
		Heuristic::Zero
	}

	fn check_label_on_graph(&self, label: &String) -> Result<()> {
		if label.is_empty() {
			return Err(Error::Validation("a place label must be a non-empty string".into()));
		}
		if !self.adjacency.contains_key(label) {
			return Err(Error::Validation(format!("label {} not in network", label)));
		}
		Ok(())
	}

	fn find_neighbours(&self, label: &String) -> Result<Vec<(String, Cost)>> {
		self.adjacency
			.get(label)
			.cloned()
			.ok_or_else(|| Error::Validation(format!("label {} not in network", label)))
	}

	fn is_accessible(&self, label: &String) -> bool {
		self.adjacency.contains_key(label)
	}

	fn check_graph(&self) -> Result<()> {
		if self.edges.is_empty() {
			return Err(Error::Configuration("the specified network is empty".into()));
		}
		check_endpoints(self.start.as_ref(), self.end.as_ref())
	}
}
