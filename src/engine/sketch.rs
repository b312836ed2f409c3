use super::{Animator, DrawingSession, PointerButton, SegmentStore};
use crate::config::SketchConfig;
use crate::geom::Segment;
use crate::render::{Renderer, Surface};
use glam::DVec2;

/// Everything a windowing layer needs to forward to the sketch.
///
/// Every handler runs to completion, including its render pass, before returning.
pub trait InputSink {
	fn on_press(&mut self, surface: &mut dyn Surface, button: PointerButton, position: DVec2);
	fn on_move(&mut self, surface: &mut dyn Surface, position: DVec2);
	fn on_release(&mut self, surface: &mut dyn Surface, button: PointerButton);
	fn on_cancel(&mut self, surface: &mut dyn Surface);
	/// Returns whether frames should be delivered to `on_frame`.
	fn on_trigger(&mut self, surface: &mut dyn Surface) -> bool;
	/// Returns whether another frame is wanted.
	fn on_frame(&mut self, surface: &mut dyn Surface) -> bool;
}

/// The drawing session: segments, the in-progress drag and any running collapses.
#[derive(Debug, Default)]
pub struct Sketch {
	config: SketchConfig,
	store: SegmentStore,
	session: DrawingSession,
	animator: Animator,
}

impl Sketch {
	pub fn new(config: SketchConfig) -> Self {
		Self {
			config,
			..Default::default()
		}
	}

	pub fn config(&self) -> &SketchConfig {
		&self.config
	}

	pub fn store(&self) -> &SegmentStore {
		&self.store
	}

	pub fn session(&self) -> &DrawingSession {
		&self.session
	}

	pub fn is_animating(&self) -> bool {
		!self.animator.is_idle()
	}

	fn render(&self, surface: &mut dyn Surface) -> usize {
		Renderer::new(surface, &self.config).frame(&self.store)
	}
}

impl InputSink for Sketch {
	fn on_press(&mut self, surface: &mut dyn Surface, button: PointerButton, position: DVec2) {
		if button != PointerButton::Primary || self.session.is_pressed() {
			return;
		}
		let id = self.store.push(Segment::point(position));
		self.session.begin(id);
		tracing::trace!(%id, %position, "press");
		self.render(surface);
	}

	fn on_move(&mut self, surface: &mut dyn Surface, position: DVec2) {
		let Some(id) = self.session.in_progress() else {
			return;
		};
		if let Some(segment) = self.store.get_mut(id) {
			segment.set_end(position);
		}
		let markers = self.render(surface);
		tracing::trace!(%id, %position, markers, "move");
	}

	fn on_release(&mut self, surface: &mut dyn Surface, button: PointerButton) {
		if button != PointerButton::Primary {
			return;
		}
		if self.session.take_ignored_release() {
			tracing::trace!("release after cancel ignored");
			return;
		}
		let id = self.session.finish();
		let markers = self.render(surface);
		tracing::trace!(?id, markers, "release");
	}

	fn on_cancel(&mut self, surface: &mut dyn Surface) {
		let Some(id) = self.session.cancel() else {
			return;
		};
		self.store.remove_id(id);
		self.render(surface);
		tracing::trace!(%id, "cancel");
	}

	fn on_trigger(&mut self, _surface: &mut dyn Surface) -> bool {
		self.animator.trigger(&mut self.store);
		self.is_animating()
	}

	fn on_frame(&mut self, surface: &mut dyn Surface) -> bool {
		let mut renderer = Renderer::new(surface, &self.config);
		self.animator.tick(&mut self.store, &mut renderer)
	}
}
