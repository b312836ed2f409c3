use super::SegmentId;

/// A mouse button as reported by `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Auxiliary,
	Secondary,
	Other(i16),
}

impl From<i16> for PointerButton {
	fn from(value: i16) -> Self {
		match value {
			0 => PointerButton::Primary,
			1 => PointerButton::Auxiliary,
			2 => PointerButton::Secondary,
			other => PointerButton::Other(other),
		}
	}
}

/// What the current drag is doing. Only one segment can be in progress at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawingSession {
	in_progress: Option<SegmentId>,
	ignore_next_release: bool,
}

impl DrawingSession {
	pub fn is_pressed(&self) -> bool {
		self.in_progress.is_some()
	}

	pub fn in_progress(&self) -> Option<SegmentId> {
		self.in_progress
	}

	pub fn ignores_next_release(&self) -> bool {
		self.ignore_next_release
	}

	pub fn begin(&mut self, id: SegmentId) {
		debug_assert!(self.in_progress.is_none());
		self.in_progress = Some(id);
	}

	/// Ends the drag, returning the segment that was being drawn.
	pub fn finish(&mut self) -> Option<SegmentId> {
		self.in_progress.take()
	}

	/// Ends the drag like `finish`, and additionally swallows the release that follows.
	pub fn cancel(&mut self) -> Option<SegmentId> {
		let id = self.in_progress.take()?;
		self.ignore_next_release = true;
		Some(id)
	}

	/// Consumes a pending suppression. Returns whether the release should be ignored.
	pub fn take_ignored_release(&mut self) -> bool {
		std::mem::take(&mut self.ignore_next_release)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::SegmentStore;
	use crate::geom::Segment;

	#[test]
	fn buttons_follow_dom_numbering() {
		assert_eq!(PointerButton::from(0), PointerButton::Primary);
		assert_eq!(PointerButton::from(1), PointerButton::Auxiliary);
		assert_eq!(PointerButton::from(2), PointerButton::Secondary);
		assert_eq!(PointerButton::from(4), PointerButton::Other(4));
	}

	#[test]
	fn cancel_suppresses_exactly_one_release() {
		let mut store = SegmentStore::new();
		let id = store.push(Segment::default());
		let mut session = DrawingSession::default();
		session.begin(id);
		assert!(session.is_pressed());
		assert_eq!(session.cancel(), Some(id));
		assert!(!session.is_pressed());
		assert!(session.take_ignored_release());
		assert!(!session.take_ignored_release());
	}

	#[test]
	fn cancel_without_a_drag_does_nothing() {
		let mut session = DrawingSession::default();
		assert_eq!(session.cancel(), None);
		assert!(!session.ignores_next_release());
	}
}
