use crate::geom::Segment;

/// Identity of a stored segment. Ids are never reused, so a stale id simply stops resolving.
#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct SegmentId(u64);

#[derive(Debug, Clone)]
struct Entry {
	id: SegmentId,
	segment: Segment,
}

/// The ordered collection of drawn segments. Insertion order is draw order.
///
/// No coordinate validation happens here: duplicates, zero-length and off-canvas segments are
/// all stored as given.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
	entries: Vec<Entry>,
	next_id: u64,
}

impl SegmentStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, segment: Segment) -> SegmentId {
		let id = SegmentId(self.next_id);
		self.next_id += 1;
		self.entries.push(Entry { id, segment });
		id
	}

	pub fn remove(&mut self, index: usize) -> Option<Segment> {
		if index >= self.entries.len() {
			return None;
		}
		Some(self.entries.remove(index).segment)
	}

	pub fn remove_id(&mut self, id: SegmentId) -> Option<Segment> {
		let index = self.index_of(id)?;
		self.remove(index)
	}

	pub fn index_of(&self, id: SegmentId) -> Option<usize> {
		self.entries.iter().position(|entry| entry.id == id)
	}

	pub fn get(&self, id: SegmentId) -> Option<&Segment> {
		self
			.entries
			.iter()
			.find(|entry| entry.id == id)
			.map(|entry| &entry.segment)
	}

	pub fn get_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
		self
			.entries
			.iter_mut()
			.find(|entry| entry.id == id)
			.map(|entry| &mut entry.segment)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Segment> + Clone + '_ {
		self.entries.iter().map(|entry| &entry.segment)
	}

	pub fn ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
		self.entries.iter().map(|entry| entry.id)
	}

	pub fn segments(&self) -> Vec<Segment> {
		self.iter().copied().collect()
	}
}
