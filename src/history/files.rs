use super::{Frame, NodeRecord, OpenRecord, Recorder, Snapshot};
use crate::{graph::Graph, node::Label, Result};
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const GRAPH_FILE: &str = "graph.json";
const CURRENT_NODE: &str = "current_node";
const OPEN_LIST: &str = "open_list";
const CLOSED_LIST: &str = "closed_list";

fn iteration_file(dir: &Path, iteration: usize, name: &str) -> PathBuf {
	dir.join(format!("{}_{}.json", iteration, name))
}

/// A Recorder that writes every Snapshot to a directory of JSON files.
///
/// The layout of the directory is:
/// - `graph.json`: the Graph, written once per directory
/// - `{i}_current_node.json`: a [`NodeRecord`] of the current Node at iteration `i`
/// - `{i}_open_list.json`: the [`OpenRecord`]s of the open list at iteration `i`
/// - `{i}_closed_list.json`: the [`NodeRecord`]s of the closed list at iteration `i`
///
/// Use a [`HistoryReader`] to load them again.
#[derive(Debug)]
pub struct HistoryWriter {
	directory: PathBuf,
	graph_written: bool,
}

impl HistoryWriter {
	/// Creates a new directory named after the current local time in `root` and writes there.
	///
	/// Every writer gets a directory of its own: if a search was already recorded within the
	/// same second, the name is suffixed with `_1`, `_2` and so on.
	pub fn new(root: impl AsRef<Path>) -> Result<HistoryWriter> {
		let root = root.as_ref();
		fs::create_dir_all(root)?;
		let stamp = chrono::Local::now().format("%Y-%m-%d_%H_%M_%S").to_string();
		let mut directory = root.join(&stamp);
		let mut suffix = 0;
		loop {
			match fs::create_dir(&directory) {
				Ok(()) => break,
				Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
					suffix += 1;
					directory = root.join(format!("{}_{}", stamp, suffix));
				}
				Err(err) => return Err(err.into()),
			}
		}
		HistoryWriter::in_dir(directory)
	}

	/// Like [`new`](HistoryWriter::new), using `saved_histories` in the working directory as root.
	pub fn in_working_dir() -> Result<HistoryWriter> {
		HistoryWriter::new(std::env::current_dir()?.join("saved_histories"))
	}

	/// Writes into `directory` directly, creating it if necessary.
	///
	/// Files of an earlier search in the same directory are overwritten where the iterations
	/// overlap, but not removed.
	pub fn in_dir(directory: impl Into<PathBuf>) -> Result<HistoryWriter> {
		let directory = directory.into();
		fs::create_dir_all(&directory)?;
		info!("Saving algo history to: {}", directory.display());
		Ok(HistoryWriter {
			directory,
			graph_written: false,
		})
	}

	/// The directory the History is written to
	pub fn directory(&self) -> &Path {
		&self.directory
	}

	fn write<T: Serialize + ?Sized>(&self, path: PathBuf, value: &T) -> Result<()> {
		let mut writer = BufWriter::new(File::create(path)?);
		serde_json::to_writer(&mut writer, value)?;
		writer.flush()?;
		Ok(())
	}
}

impl<G: Graph + Serialize> Recorder<G> for HistoryWriter {
	fn record(&mut self, snapshot: &Snapshot<'_, G>) -> Result<()> {
		if !self.graph_written {
			self.write(self.directory.join(GRAPH_FILE), snapshot.graph())?;
			self.graph_written = true;
		}
		let (dir, i) = (self.directory.as_path(), snapshot.iteration());
		self.write(iteration_file(dir, i, CURRENT_NODE), &snapshot.current_record())?;
		self.write(iteration_file(dir, i, OPEN_LIST), &snapshot.open_records())?;
		self.write(iteration_file(dir, i, CLOSED_LIST), &snapshot.closed_records())?;
		Ok(())
	}
}

/// Loads a History written by a [`HistoryWriter`].
#[derive(Clone, Debug)]
pub struct HistoryReader {
	directory: PathBuf,
}

impl HistoryReader {
	/// Opens the History in `directory`.
	///
	/// Fails if `directory` is not a directory.
	pub fn open(directory: impl Into<PathBuf>) -> Result<HistoryReader> {
		let directory = directory.into();
		if !directory.is_dir() {
			return Err(io::Error::new(
				io::ErrorKind::NotFound,
				format!("{} is not a directory", directory.display()),
			)
			.into());
		}
		Ok(HistoryReader { directory })
	}

	/// The directory the History is read from
	pub fn directory(&self) -> &Path {
		&self.directory
	}

	/// All iterations with at least one saved record, ascending
	pub fn iterations(&self) -> Result<Vec<usize>> {
		let mut iterations = vec![];
		for entry in fs::read_dir(&self.directory)? {
			let path = entry?.path();
			if !path.is_file() {
				continue;
			}
			let iteration = path
				.file_stem()
				.and_then(|stem| stem.to_str())
				.and_then(|stem| stem.split('_').next())
				.and_then(|prefix| prefix.parse::<usize>().ok());
			if let Some(iteration) = iteration {
				iterations.push(iteration);
			}
		}
		iterations.sort_unstable();
		iterations.dedup();
		Ok(iterations)
	}

	/// The last saved iteration, or `None` if the History is empty
	pub fn max_iteration(&self) -> Result<Option<usize>> {
		Ok(self.iterations()?.last().copied())
	}

	fn read<T: DeserializeOwned>(&self, path: PathBuf) -> Result<T> {
		let reader = BufReader::new(File::open(path)?);
		Ok(serde_json::from_reader(reader)?)
	}

	/// Loads the Graph that was searched
	pub fn load_graph<G: DeserializeOwned>(&self) -> Result<G> {
		self.read(self.directory.join(GRAPH_FILE))
	}

	/// Loads the state of the search at `iteration`
	pub fn load_frame<L: Label>(&self, iteration: usize) -> Result<Frame<L>> {
		let dir = self.directory.as_path();
		let current: NodeRecord<L> = self.read(iteration_file(dir, iteration, CURRENT_NODE))?;
		let open_list: Vec<OpenRecord<L>> = self.read(iteration_file(dir, iteration, OPEN_LIST))?;
		let closed_list: Vec<NodeRecord<L>> =
			self.read(iteration_file(dir, iteration, CLOSED_LIST))?;
		Ok(Frame {
			iteration,
			current,
			open_list,
			closed_list,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn iteration_file_names() {
		let dir = Path::new("history");
		assert_eq!(
			iteration_file(dir, 12, OPEN_LIST),
			Path::new("history").join("12_open_list.json")
		);
	}

	#[test]
	fn open_missing_directory() {
		let dir = tempfile::tempdir().unwrap();
		assert!(HistoryReader::open(dir.path().join("missing")).is_err());
	}

	#[test]
	fn ignores_foreign_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join(GRAPH_FILE), "{}").unwrap();
		fs::write(dir.path().join("3_open_list.json"), "[]").unwrap();
		fs::write(dir.path().join("notes.txt"), "").unwrap();
		fs::create_dir(dir.path().join("7_frames")).unwrap();

		let reader = HistoryReader::open(dir.path()).unwrap();
		assert_eq!(reader.iterations().unwrap(), vec![3]);
		assert_eq!(reader.max_iteration().unwrap(), Some(3));
	}
}
