use super::{SegmentId, SegmentStore};
use crate::geom::Segment;
use crate::render::{Renderer, Surface};

/// The line through a segment's endpoints as they were when its collapse started, evaluated at
/// whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeEvaluator {
	slope: f64,
	x0: f64,
	y0: f64,
}

impl SlopeEvaluator {
	/// `None` for vertical and zero-length segments, whose slope is undefined.
	pub fn through(segment: &Segment) -> Option<Self> {
		let run = segment.x_end - segment.x_start;
		if run == 0.0 || !run.is_finite() {
			return None;
		}
		Some(Self {
			slope: (segment.y_end - segment.y_start) / run,
			x0: segment.x_start,
			y0: segment.y_start,
		})
	}

	pub fn y(&self, x: f64) -> f64 {
		(self.slope * (x - self.x0) + self.y0).round()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
	Running,
	Collapsed,
	/// The segment was removed from the store while collapsing.
	Gone,
}

/// Shrinks one segment toward a point, one pixel per endpoint per frame.
#[derive(Debug, Clone)]
pub struct CollapseTask {
	id: SegmentId,
	line: SlopeEvaluator,
}

impl CollapseTask {
	/// Starts collapsing `id`, snapping its x endpoints to whole pixels so the endpoints meet
	/// instead of stepping past each other.
	pub fn start(store: &mut SegmentStore, id: SegmentId) -> Option<Self> {
		let segment = store.get_mut(id)?;
		let line = SlopeEvaluator::through(segment)?;
		let (x_start, x_end) = (segment.x_start.round(), segment.x_end.round());
		if x_start == x_end {
			return None;
		}
		segment.x_start = x_start;
		segment.x_end = x_end;
		Some(Self { id, line })
	}

	pub fn id(&self) -> SegmentId {
		self.id
	}

	pub fn step(&self, store: &mut SegmentStore) -> Progress {
		let Some(segment) = store.get_mut(self.id) else {
			return Progress::Gone;
		};
		step_segment(segment, &self.line);
		if (segment.x_start - segment.x_end).abs() > 0.0 {
			Progress::Running
		} else {
			Progress::Collapsed
		}
	}
}

fn step_segment(segment: &mut Segment, line: &SlopeEvaluator) {
	if segment.x_start < segment.x_end {
		segment.x_start += 1.0;
		segment.x_end -= 1.0;
	} else {
		segment.x_start -= 1.0;
		segment.x_end += 1.0;
	}
	segment.y_start = line.y(segment.x_start);
	segment.y_end = line.y(segment.x_end);

	// Endpoints one pixel apart would otherwise swap places forever.
	if (segment.x_start - segment.x_end).abs() == 1.0 {
		segment.x_start -= 1.0;
		segment.y_start = line.y(segment.x_start);
	}
}

/// Drives every running collapse from a single per-frame tick.
#[derive(Debug, Default)]
pub struct Animator {
	tasks: Vec<CollapseTask>,
}

impl Animator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts collapsing every segment currently in `store` that is not already collapsing.
	/// Returns the number of new tasks.
	pub fn trigger(&mut self, store: &mut SegmentStore) -> usize {
		let ids: Vec<_> = store
			.ids()
			.filter(|id| !self.tasks.iter().any(|task| task.id() == *id))
			.collect();
		let before = self.tasks.len();
		for id in ids {
			match CollapseTask::start(store, id) {
				Some(task) => self.tasks.push(task),
				None => tracing::debug!(%id, "segment has no slope to collapse along"),
			}
		}
		let started = self.tasks.len() - before;
		tracing::debug!(started, running = self.tasks.len(), "collapse triggered");
		started
	}

	pub fn is_idle(&self) -> bool {
		self.tasks.is_empty()
	}

	pub fn len(&self) -> usize {
		self.tasks.len()
	}

	pub fn is_animating(&self, id: SegmentId) -> bool {
		self.tasks.iter().any(|task| task.id() == id)
	}

	/// Advances every task by one frame. Each task's step is followed by a complete render pass
	/// before the next task steps. Returns whether any task is still running.
	pub fn tick<S: Surface + ?Sized>(
		&mut self,
		store: &mut SegmentStore,
		renderer: &mut Renderer<'_, S>,
	) -> bool {
		self.tasks.retain(|task| match task.step(store) {
			Progress::Running => {
				renderer.frame(store);
				true
			}
			Progress::Collapsed => {
				renderer.frame(store);
				tracing::debug!(id = %task.id(), "segment collapsed");
				false
			}
			Progress::Gone => false,
		});
		!self.tasks.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::SketchConfig;
	use crate::test::RecordingSurface;
	use glam::dvec2;

	fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
		Segment::new(dvec2(x1, y1), dvec2(x2, y2))
	}

	fn collapse(initial: Segment) -> (Vec<Segment>, SlopeEvaluator) {
		let mut store = SegmentStore::new();
		let id = store.push(initial);
		let line = SlopeEvaluator::through(&initial).unwrap();
		let task = CollapseTask::start(&mut store, id).unwrap();
		let mut states = Vec::new();
		loop {
			let progress = task.step(&mut store);
			states.push(*store.get(id).unwrap());
			match progress {
				Progress::Running => assert!(states.len() < 10_000, "did not converge"),
				Progress::Collapsed => break,
				Progress::Gone => unreachable!(),
			}
		}
		(states, line)
	}

	#[test]
	fn evaluator_rounds_to_whole_pixels() {
		let line = SlopeEvaluator::through(&segment(0.0, 0.0, 3.0, 1.0)).unwrap();
		assert_eq!(line.y(0.0), 0.0);
		assert_eq!(line.y(1.0), 0.0);
		assert_eq!(line.y(2.0), 1.0);
		assert_eq!(line.y(3.0), 1.0);
		assert_eq!(line.y(-3.0), -1.0);
	}

	#[test]
	fn evaluator_is_undefined_for_vertical_segments() {
		assert_eq!(SlopeEvaluator::through(&segment(4.0, 0.0, 4.0, 9.0)), None);
		assert_eq!(SlopeEvaluator::through(&Segment::point(dvec2(4.0, 4.0))), None);
	}

	#[test]
	fn converges_for_every_small_span() {
		for x_end in -25..=25 {
			let x_end = x_end as f64;
			if x_end == 0.0 {
				continue;
			}
			let span = x_end.abs() as usize;
			let (states, _) = collapse(segment(0.0, 0.0, x_end, 2.0 * x_end));
			assert!(
				states.len() <= span + 1,
				"span {span} took {} frames",
				states.len()
			);
			let last = states.last().unwrap();
			assert_eq!(last.x_start, last.x_end);
			assert_eq!(last.y_start, last.y_end);
		}
	}

	#[test]
	fn every_state_stays_on_the_starting_line() {
		for initial in [
			segment(100.0, 40.0, 317.0, 251.0),
			segment(480.0, 12.0, 20.0, 300.0),
			segment(5.0, 5.0, 6.0, 400.0),
			segment(0.0, 0.0, 7.0, 0.0),
		] {
			let (states, line) = collapse(initial);
			for state in states {
				assert_eq!(state.y_start, line.y(state.x_start), "{state}");
				assert_eq!(state.y_end, line.y(state.x_end), "{state}");
			}
		}
	}

	#[test]
	fn endpoints_move_toward_each_other() {
		let (states, _) = collapse(segment(10.0, 0.0, 20.0, 10.0));
		let xs: Vec<_> = states.iter().map(|s| (s.x_start, s.x_end)).collect();
		assert_eq!(
			xs,
			vec![(11.0, 19.0), (12.0, 18.0), (13.0, 17.0), (14.0, 16.0), (15.0, 15.0)]
		);

		// Odd spans snap once the endpoints are a pixel apart.
		let (states, _) = collapse(segment(10.0, 0.0, 13.0, 3.0));
		let xs: Vec<_> = states.iter().map(|s| (s.x_start, s.x_end)).collect();
		assert_eq!(xs, vec![(10.0, 12.0), (11.0, 11.0)]);
	}

	#[test]
	fn fractional_endpoints_still_converge() {
		let (states, _) = collapse(segment(10.4, 0.0, 15.2, 3.0));
		let last = states.last().unwrap();
		assert_eq!(last.x_start, last.x_end);
	}

	#[test]
	fn animator_renders_after_every_step_and_goes_idle() {
		let config = SketchConfig::default();
		let mut surface = RecordingSurface::default();
		let mut store = SegmentStore::new();
		store.push(segment(0.0, 0.0, 4.0, 4.0));
		store.push(segment(0.0, 4.0, 2.0, 2.0));

		let mut animator = Animator::new();
		assert_eq!(animator.trigger(&mut store), 2);

		let mut frames = 0;
		while !animator.is_idle() {
			let mut renderer = Renderer::new(&mut surface, &config);
			animator.tick(&mut store, &mut renderer);
			frames += 1;
			assert!(frames < 100);
		}
		// Spans of 4 and 2 take 2 and 1 frames, each frame rendering once per live task.
		assert_eq!(frames, 2);
		assert_eq!(surface.frame_count(), 3);
		for segment in store.iter() {
			assert_eq!(segment.x_start, segment.x_end);
		}
	}

	#[test]
	fn segments_drawn_after_the_trigger_are_left_alone() {
		let config = SketchConfig::default();
		let mut surface = RecordingSurface::default();
		let mut store = SegmentStore::new();
		store.push(segment(0.0, 0.0, 10.0, 0.0));
		let mut animator = Animator::new();
		animator.trigger(&mut store);

		let late = store.push(segment(0.0, 5.0, 10.0, 5.0));
		while animator.tick(&mut store, &mut Renderer::new(&mut surface, &config)) {}
		assert_eq!(store.get(late), Some(&segment(0.0, 5.0, 10.0, 5.0)));
		assert!(!animator.is_animating(late));
	}

	#[test]
	fn vertical_segments_are_not_animated() {
		let mut store = SegmentStore::new();
		let vertical = store.push(segment(7.0, 0.0, 7.0, 30.0));
		store.push(Segment::point(dvec2(1.0, 1.0)));
		let mut animator = Animator::new();
		assert_eq!(animator.trigger(&mut store), 0);
		assert!(animator.is_idle());
		assert_eq!(store.len(), 2);
		assert_eq!(store.get(vertical), Some(&segment(7.0, 0.0, 7.0, 30.0)));
	}

	#[test]
	fn retrigger_does_not_double_animate() {
		let mut store = SegmentStore::new();
		store.push(segment(0.0, 0.0, 10.0, 0.0));
		let mut animator = Animator::new();
		assert_eq!(animator.trigger(&mut store), 1);
		assert_eq!(animator.trigger(&mut store), 0);
		store.push(segment(0.0, 5.0, 10.0, 5.0));
		assert_eq!(animator.trigger(&mut store), 1);
		assert_eq!(animator.len(), 2);
	}

	#[test]
	fn removed_segments_end_their_task() {
		let config = SketchConfig::default();
		let mut surface = RecordingSurface::default();
		let mut store = SegmentStore::new();
		let id = store.push(segment(0.0, 0.0, 10.0, 0.0));
		let mut animator = Animator::new();
		animator.trigger(&mut store);
		store.remove_id(id);
		assert!(!animator.tick(&mut store, &mut Renderer::new(&mut surface, &config)));
		assert_eq!(surface.frame_count(), 0);
	}
}
