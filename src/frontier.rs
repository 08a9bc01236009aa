//! The open list of the search

use crate::{Cost, Error, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
	item: T,
	priority: Cost,
	insertion: u64,
}

impl<T> Entry<T> {
	/// lower priority first, then earlier insertion first
	fn pop_order(&self, rhs: &Self) -> Ordering {
		self.priority
			.total_cmp(&rhs.priority)
			.then(self.insertion.cmp(&rhs.insertion))
	}
}

impl<T> PartialEq for Entry<T> {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl<T> Eq for Entry<T> {}
impl<T> PartialOrd for Entry<T> {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl<T> Ord for Entry<T> {
	fn cmp(&self, rhs: &Self) -> Ordering {
		// BinaryHeap is a max-heap
		rhs.pop_order(self)
	}
}

/// A priority queue that always hands out the entry with the lowest priority.
///
/// Entries with equal priority are handed out in the order they were inserted, which keeps
/// every search deterministic. The same item may be inserted any number of times; entries
/// only ever leave through [`pop_min`](Frontier::pop_min).
///
/// ## Examples
/// ```
/// # use a_star_pathfinding::frontier::Frontier;
/// let mut frontier = Frontier::new();
/// frontier.put('b', 2.0);
/// frontier.put('a', 1.0);
/// frontier.put('c', 2.0);
///
/// assert_eq!(frontier.pop_min().unwrap(), 'a');
/// assert_eq!(frontier.pop_min().unwrap(), 'b');
/// assert_eq!(frontier.pop_min().unwrap(), 'c');
/// assert!(frontier.pop_min().is_err());
/// ```
#[derive(Debug)]
pub struct Frontier<T> {
	heap: BinaryHeap<Entry<T>>,
	insertions: u64,
}

impl<T> Frontier<T> {
	/// Creates an empty Frontier
	pub fn new() -> Self {
		Frontier {
			heap: BinaryHeap::new(),
			insertions: 0,
		}
	}

	/// Creates an empty Frontier with room for `capacity` entries
	pub fn with_capacity(capacity: usize) -> Self {
		Frontier {
			heap: BinaryHeap::with_capacity(capacity),
			insertions: 0,
		}
	}

	/// Inserts `item` with the given priority
	pub fn put(&mut self, item: T, priority: Cost) {
		self.heap.push(Entry {
			item,
			priority,
			insertion: self.insertions,
		});
		self.insertions += 1;
	}

	/// Removes and returns the item with the lowest priority.
	///
	/// Fails with [`Error::EmptyQueue`] if there is nothing left.
	pub fn pop_min(&mut self) -> Result<T> {
		self.heap
			.pop()
			.map(|entry| entry.item)
			.ok_or(Error::EmptyQueue)
	}

	/// `true` if there are no entries
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// The number of entries, counting duplicates
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// Iterates over all entries and their priorities in no particular order
	pub fn iter(&self) -> impl Iterator<Item = (&T, Cost)> + '_ {
		self.heap.iter().map(|entry| (&entry.item, entry.priority))
	}

	/// All entries and their priorities, in the order they would be popped
	pub fn sorted(&self) -> Vec<(&T, Cost)> {
		let mut entries: Vec<&Entry<T>> = self.heap.iter().collect();
		entries.sort_by(|a, b| a.pop_order(b));
		entries
			.into_iter()
			.map(|entry| (&entry.item, entry.priority))
			.collect()
	}
}

impl<T> Default for Frontier<T> {
	fn default() -> Self {
		Self::new()
	}
}
