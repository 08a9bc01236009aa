use super::{check_endpoints, Graph};
use crate::{
	heuristic::Heuristic,
	history::{NoHistory, Recorder},
	search::{self, Outcome, SearchConfig},
	Cost, Error, Point, Result,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::io;

const STRAIGHT_DELTAS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const DIAGONAL_DELTAS: [(isize, isize); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// A rectangular Grid of weighted Cells.
///
/// Cells are addressed as `(row, col)`. A Cell with weight `0` is a Wall, any other weight is the
/// Cost of entering that Cell. With `diagonality` enabled, the 4 diagonal neighbours can be
/// entered too, for `√2` times the weight of the entered Cell.
///
/// ```no_code
/// A: Agent, o: reachable in one step, x: reachable with diagonality
/// x o x
///  \|/
/// o-A-o
///  /|\
/// x o x
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GridRecord", into = "GridRecord")]
pub struct SquareGrid {
	cells: Vec<Vec<Cost>>,
	dimensions: (usize, usize),
	diagonality: bool,
	heuristic: Heuristic,
	start: Option<Point>,
	end: Option<Point>,
	solution: Option<Outcome<Point>>,
}

/// What a SquareGrid looks like on disk
#[derive(Serialize, Deserialize)]
struct GridRecord {
	cells: Vec<Vec<Cost>>,
	diagonality: bool,
	heuristic: Heuristic,
	start: Option<Point>,
	end: Option<Point>,
}

impl TryFrom<GridRecord> for SquareGrid {
	type Error = Error;
	fn try_from(record: GridRecord) -> Result<SquareGrid> {
		let mut grid = SquareGrid::new(record.cells, record.diagonality, record.heuristic)?;
		if let Some(start) = record.start {
			grid.set_start(start)?;
		}
		if let Some(end) = record.end {
			grid.set_end(end)?;
		}
		Ok(grid)
	}
}

impl From<SquareGrid> for GridRecord {
	fn from(grid: SquareGrid) -> GridRecord {
		GridRecord {
			cells: grid.cells,
			diagonality: grid.diagonality,
			heuristic: grid.heuristic,
			start: grid.start,
			end: grid.end,
		}
	}
}

impl SquareGrid {
	/// Creates a new SquareGrid from rows of Cell weights.
	///
	/// Fails with [`Error::MalformedSource`] if the rows differ in length or any weight is
	/// negative or not finite. An empty Grid can be created, but not searched.
	pub fn new(cells: Vec<Vec<Cost>>, diagonality: bool, heuristic: Heuristic) -> Result<SquareGrid> {
		let width = cells.first().map_or(0, Vec::len);
		for (row, values) in cells.iter().enumerate() {
			if values.len() != width {
				return Err(Error::MalformedSource(format!(
					"row {} has {} cells, expected {}",
					row,
					values.len(),
					width
				)));
			}
			if let Some(col) = values.iter().position(|w| !w.is_finite() || *w < 0.0) {
				return Err(Error::MalformedSource(format!(
					"cell ({}, {}) has invalid weight {}",
					row, col, values[col]
				)));
			}
		}
		let dimensions = if width == 0 { (0, 0) } else { (cells.len(), width) };
		Ok(SquareGrid {
			cells,
			dimensions,
			diagonality,
			heuristic,
			start: None,
			end: None,
			solution: None,
		})
	}

	/// Loads a SquareGrid from header-less CSV, one row of the Grid per line.
	///
	/// Blank Cells are treated as Walls.
	///
	/// ## Examples
	/// ```
	/// use a_star_pathfinding::prelude::*;
	///
	/// let csv = "1,1,1\n1,,1\n";
	/// let grid = SquareGrid::from_csv(csv.as_bytes(), false, Heuristic::Manhattan).unwrap();
	///
	/// assert_eq!(grid.dimensions(), (2, 3));
	/// assert!(!grid.is_accessible(&(1, 1)));
	/// ```
	pub fn from_csv<R: io::Read>(
		reader: R,
		diagonality: bool,
		heuristic: Heuristic,
	) -> Result<SquareGrid> {
		let mut reader = csv::ReaderBuilder::new()
			.has_headers(false)
			.trim(csv::Trim::All)
			.from_reader(reader);
		let mut cells = vec![];
		for (row, record) in reader.records().enumerate() {
			let record = record?;
			let values = record
				.iter()
				.enumerate()
				.map(|(col, field)| {
					if field.is_empty() {
						return Ok(0.0);
					}
					field.parse::<Cost>().map_err(|_| {
						Error::MalformedSource(format!(
							"cell ({}, {}) is not a number: '{}'",
							row, col, field
						))
					})
				})
				.collect::<Result<Vec<Cost>>>()?;
			cells.push(values);
		}
		let grid = SquareGrid::new(cells, diagonality, heuristic)?;
		info!("Loaded maze with dimensions {:?}.", grid.dimensions);
		Ok(grid)
	}

	/// The size of the Grid as `(rows, cols)`
	pub fn dimensions(&self) -> (usize, usize) {
		self.dimensions
	}

	/// The weight of the Cell at `point`, if it is on the Grid
	pub fn cell(&self, point: Point) -> Option<Cost> {
		self.cells.get(point.0).and_then(|row| row.get(point.1)).copied()
	}

	/// `true` if diagonal Steps are allowed
	pub fn diagonality(&self) -> bool {
		self.diagonality
	}

	/// Replaces the Heuristic used by [`solve`](SquareGrid::solve)
	pub fn set_heuristic(&mut self, heuristic: Heuristic) {
		self.heuristic = heuristic;
	}

	/// `true` if `point` lies within the Grid
	pub fn is_on_grid(&self, point: Point) -> bool {
		point.0 < self.dimensions.0 && point.1 < self.dimensions.1
	}

	fn offset(&self, point: Point, (d_row, d_col): (isize, isize)) -> Option<Point> {
		let row = point.0.checked_add_signed(d_row)?;
		let col = point.1.checked_add_signed(d_col)?;
		Some((row, col)).filter(|&p| self.is_on_grid(p))
	}

	/// The result of the last call to [`solve`](SquareGrid::solve), if any
	pub fn solution(&self) -> Option<&Outcome<Point>> {
		self.solution.as_ref()
	}

	/// Searches the Grid from start to end and stores the result as the
	/// [`solution`](SquareGrid::solution).
	pub fn solve(&mut self, config: &SearchConfig) -> Result<&Outcome<Point>> {
		self.solve_with(config, &mut NoHistory)
	}

	/// Like [`solve`](SquareGrid::solve), but hands every iteration to `recorder`.
	pub fn solve_with<R: Recorder<SquareGrid>>(
		&mut self,
		config: &SearchConfig,
		recorder: &mut R,
	) -> Result<&Outcome<Point>> {
		let outcome = search::solve(&*self, config, recorder)?;
		Ok(self.solution.insert(outcome))
	}

	/// A copy of the Cell weights with the solution drawn in.
	///
	/// The `n`-th Cell after the start is marked with `-n`, start and end keep their weights.
	/// Returns `None` unless the last [`solve`](SquareGrid::solve) found a Path.
	///
	/// ## Examples
	/// ```
	/// use a_star_pathfinding::prelude::*;
	///
	/// let mut grid = SquareGrid::new(vec![vec![1.0; 4]], false, Heuristic::Manhattan).unwrap();
	/// grid.set_start((0, 0)).unwrap();
	/// grid.set_end((0, 3)).unwrap();
	/// grid.solve(&SearchConfig::default()).unwrap();
	///
	/// assert_eq!(grid.solved_cells().unwrap(), vec![vec![1.0, -1.0, -2.0, 1.0]]);
	/// ```
	pub fn solved_cells(&self) -> Option<Vec<Vec<Cost>>> {
		let path = self.solution.as_ref()?.path()?;
		let mut cells = self.cells.clone();
		let inner = path.len().saturating_sub(1);
		for (i, &(row, col)) in path.iter().enumerate().take(inner).skip(1) {
			cells[row][col] = -(i as Cost);
		}
		Some(cells)
	}

	/// Places start and end without checking them, to build Grids that could not be loaded.
	#[cfg(test)]
	pub(crate) fn with_unchecked_endpoints(mut self, start: Point, end: Point) -> SquareGrid {
		self.start = Some(start);
		self.end = Some(end);
		self
	}
}

impl Graph for SquareGrid {
	type Label = Point;

	const KIND: &'static str = "SquareGrid";

	fn start(&self) -> Option<&Point> {
		self.start.as_ref()
	}

	fn end(&self) -> Option<&Point> {
		self.end.as_ref()
	}

	fn set_start(&mut self, label: impl Into<Point>) -> Result<()> {
		let label = label.into();
		self.check_label_setting(&label)?;
		self.start = Some(label);
		Ok(())
	}

	fn set_end(&mut self, label: impl Into<Point>) -> Result<()> {
		let label = label.into();
		self.check_label_setting(&label)?;
		self.end = Some(label);
		Ok(())
	}

	fn heuristic(&self) -> Heuristic {
		self.heuristic
	}

	fn check_label_on_graph(&self, label: &Point) -> Result<()> {
		if !self.is_on_grid(*label) {
			return Err(Error::Validation(format!(
				"label {:?} is not on the grid (dimensions {:?})",
				label, self.dimensions
			)));
		}
		Ok(())
	}

	/// Straight neighbours first, then diagonal ones. A Wall has no neighbours at all.
	fn find_neighbours(&self, label: &Point) -> Result<Vec<(Point, Cost)>> {
		self.check_label_on_graph(label)?;
		if !self.is_accessible(label) {
			return Ok(vec![]);
		}
		let diagonals: &[(isize, isize)] = if self.diagonality {
			&DIAGONAL_DELTAS
		} else {
			&[]
		};
		Ok(STRAIGHT_DELTAS
			.iter()
			.chain(diagonals)
			.filter_map(|&delta| self.offset(*label, delta))
			.map(|(row, col)| ((row, col), self.cells[row][col]))
			.collect())
	}

	fn is_accessible(&self, label: &Point) -> bool {
		self.cell(*label).map_or(false, |weight| weight != 0.0)
	}

	fn check_graph(&self) -> Result<()> {
		if self.dimensions.0 == 0 || self.dimensions.1 == 0 {
			return Err(Error::Configuration("no maze geometry specified".into()));
		}
		check_endpoints(self.start.as_ref(), self.end.as_ref())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn open_grid(rows: usize, cols: usize, diagonality: bool) -> SquareGrid {
		SquareGrid::new(vec![vec![1.0; cols]; rows], diagonality, Heuristic::Euclidean).unwrap()
	}

	#[test]
	fn straight_neighbours() {
		let grid = open_grid(3, 3, false);
		let neighbours: Vec<Point> = grid
			.find_neighbours(&(0, 1))
			.unwrap()
			.into_iter()
			.map(|(p, _)| p)
			.collect();
		assert_eq!(neighbours, vec![(0, 0), (0, 2), (1, 1)]);
	}

	#[test]
	fn diagonal_neighbours() {
		let grid = open_grid(3, 3, true);
		let neighbours: Vec<Point> = grid
			.find_neighbours(&(1, 1))
			.unwrap()
			.into_iter()
			.map(|(p, _)| p)
			.collect();
		assert_eq!(
			neighbours,
			vec![(0, 1), (1, 0), (1, 2), (2, 1), (0, 0), (2, 2), (0, 2), (2, 0)]
		);
	}

	#[test]
	fn destination_weights() {
		let grid = SquareGrid::new(
			vec![vec![1.0, 7.0], vec![3.0, 2.0]],
			true,
			Heuristic::Octile,
		)
		.unwrap();
		let neighbours = grid.find_neighbours(&(0, 0)).unwrap();
		assert_eq!(neighbours, vec![((0, 1), 7.0), ((1, 0), 3.0), ((1, 1), 2.0)]);

		let from = grid.create_node((0, 0), None).unwrap();
		let straight = grid.create_node((0, 1), None).unwrap();
		let diagonal = grid.create_node((1, 1), None).unwrap();
		assert_eq!(from.get_cost_to_leave(&straight), Some(7.0));
		assert_eq!(
			from.get_cost_to_leave(&diagonal),
			Some(2.0 * std::f64::consts::SQRT_2)
		);
	}

	#[test]
	fn walls_have_no_neighbours() {
		let grid = SquareGrid::new(vec![vec![1.0, 0.0, 1.0]], false, Heuristic::Manhattan).unwrap();
		assert!(!grid.is_accessible(&(0, 1)));
		assert!(grid.find_neighbours(&(0, 1)).unwrap().is_empty());
		assert!(!grid.create_node((0, 1), None).unwrap().accessible);
		assert!(!grid.is_accessible(&(5, 5)));
		assert!(matches!(grid.find_neighbours(&(5, 5)), Err(Error::Validation(_))));
	}

	#[test]
	fn endpoints() {
		let mut grid = SquareGrid::new(vec![vec![1.0, 0.0, 1.0]], false, Heuristic::Manhattan).unwrap();
		assert!(matches!(grid.set_start((0, 1)), Err(Error::Validation(_))));
		assert!(matches!(grid.set_start((1, 0)), Err(Error::Validation(_))));
		grid.set_start((0, 0)).unwrap();
		assert!(matches!(grid.set_end((0, 0)), Err(Error::Validation(_))));
		assert!(matches!(grid.check_graph(), Err(Error::Configuration(_))));
		grid.set_end((0, 2)).unwrap();
		grid.check_graph().unwrap();
	}

	#[test]
	fn malformed() {
		assert!(matches!(
			SquareGrid::new(vec![vec![1.0, 1.0], vec![1.0]], false, Heuristic::Zero),
			Err(Error::MalformedSource(_))
		));
		assert!(matches!(
			SquareGrid::new(vec![vec![1.0, -2.0]], false, Heuristic::Zero),
			Err(Error::MalformedSource(_))
		));
		assert!(matches!(
			SquareGrid::from_csv("1,x\n".as_bytes(), false, Heuristic::Zero),
			Err(Error::MalformedSource(_))
		));
	}

	#[test]
	fn empty() {
		let grid = SquareGrid::new(vec![], false, Heuristic::Zero).unwrap();
		assert!(matches!(grid.check_graph(), Err(Error::Configuration(_))));
	}

	#[test]
	fn json_round_trip() {
		let mut grid = open_grid(2, 3, true);
		grid.set_start((0, 0)).unwrap();
		grid.set_end((1, 2)).unwrap();

		let json = serde_json::to_string(&grid).unwrap();
		let loaded: SquareGrid = serde_json::from_str(&json).unwrap();
		assert_eq!(loaded.dimensions(), (2, 3));
		assert!(loaded.diagonality());
		assert_eq!(loaded.end(), Some(&(1, 2)));
		assert!(loaded.solution().is_none());
	}

	#[test]
	fn json_endpoints_are_validated() {
		let mut grid = open_grid(2, 3, false);
		grid.set_start((0, 0)).unwrap();
		grid.set_end((1, 2)).unwrap();
		let json = serde_json::to_string(&grid).unwrap();
		assert!(json.contains("\"end\":[1,2]"));

		let off_grid = json.replace("\"end\":[1,2]", "\"end\":[7,2]");
		assert!(serde_json::from_str::<SquareGrid>(&off_grid).is_err());
		let same = json.replace("\"end\":[1,2]", "\"end\":[0,0]");
		assert!(serde_json::from_str::<SquareGrid>(&same).is_err());
		let wall = json.replace("[1.0,1.0,1.0]]", "[1.0,1.0,0.0]]");
		assert!(serde_json::from_str::<SquareGrid>(&wall).is_err());
	}
}
