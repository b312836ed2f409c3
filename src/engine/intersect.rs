use super::SegmentStore;
use glam::DVec2;
use itertools::Itertools;

/// A point where two stored segments cross, along with the positions of the pair in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
	pub point: DVec2,
	pub first: usize,
	pub second: usize,
}

/// Every crossing in the store, visiting each unordered pair exactly once.
///
/// This is quadratic in the number of segments and is rerun after every mutation and on every
/// animation frame. Nothing is cached between calls.
pub fn crossings(store: &SegmentStore) -> impl Iterator<Item = Crossing> + '_ {
	store
		.iter()
		.enumerate()
		.tuple_combinations()
		.filter_map(|((first, a), (second, b))| {
			a.intersection(b).map(|point| Crossing {
				point,
				first,
				second,
			})
		})
}
