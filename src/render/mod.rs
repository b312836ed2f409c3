mod canvas2d;
pub use canvas2d::*;

use crate::config::SketchConfig;
use crate::engine::{crossings, SegmentStore};
use crate::geom::Segment;
use crate::util::ResultExt;
use glam::DVec2;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum SurfaceError {
	#[error("arc rejected: {0}")]
	Arc(String),
}

static_assertions::assert_impl_all!(SurfaceError: std::error::Error, Send, Sync);

/// The subset of an immediate-mode 2D drawing API that the sketch needs.
///
/// This mirrors the browser's `CanvasRenderingContext2D` so that the browser canvas is a thin
/// implementation, while tests can record the calls instead.
pub trait Surface {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	fn begin_path(&mut self);
	fn move_to(&mut self, x: f64, y: f64);
	fn line_to(&mut self, x: f64, y: f64);
	fn stroke(&mut self);
	fn arc(
		&mut self,
		x: f64,
		y: f64,
		radius: f64,
		start_angle: f64,
		end_angle: f64,
	) -> Result<(), SurfaceError>;
	fn fill(&mut self);
	fn set_fill_style(&mut self, color: &str);
	fn set_stroke_style(&mut self, color: &str);
}

/// A surface that may not exist yet. Drawing on an absent surface does nothing.
impl<S: Surface> Surface for Option<S> {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		if let Some(surface) = self {
			surface.clear_rect(x, y, width, height);
		}
	}

	fn begin_path(&mut self) {
		if let Some(surface) = self {
			surface.begin_path();
		}
	}

	fn move_to(&mut self, x: f64, y: f64) {
		if let Some(surface) = self {
			surface.move_to(x, y);
		}
	}

	fn line_to(&mut self, x: f64, y: f64) {
		if let Some(surface) = self {
			surface.line_to(x, y);
		}
	}

	fn stroke(&mut self) {
		if let Some(surface) = self {
			surface.stroke();
		}
	}

	fn arc(
		&mut self,
		x: f64,
		y: f64,
		radius: f64,
		start_angle: f64,
		end_angle: f64,
	) -> Result<(), SurfaceError> {
		match self {
			Some(surface) => surface.arc(x, y, radius, start_angle, end_angle),
			None => Ok(()),
		}
	}

	fn fill(&mut self) {
		if let Some(surface) = self {
			surface.fill();
		}
	}

	fn set_fill_style(&mut self, color: &str) {
		if let Some(surface) = self {
			surface.set_fill_style(color);
		}
	}

	fn set_stroke_style(&mut self, color: &str) {
		if let Some(surface) = self {
			surface.set_stroke_style(color);
		}
	}
}

/// Immediate-mode drawing of the sketch. Every frame is a full clear followed by a full redraw;
/// nothing is retained between frames except the segments themselves.
pub struct Renderer<'a, S: Surface + ?Sized> {
	surface: &'a mut S,
	config: &'a SketchConfig,
}

impl<'a, S: Surface + ?Sized> Renderer<'a, S> {
	pub fn new(surface: &'a mut S, config: &'a SketchConfig) -> Self {
		Self { surface, config }
	}

	pub fn clear(&mut self) {
		self
			.surface
			.clear_rect(0.0, 0.0, self.config.width, self.config.height);
	}

	pub fn draw_segment(&mut self, segment: &Segment) {
		self.surface.set_stroke_style(&self.config.stroke_color);
		self.surface.begin_path();
		self.surface.move_to(segment.x_start, segment.y_start);
		self.surface.line_to(segment.x_end, segment.y_end);
		self.surface.stroke();
	}

	pub fn draw_all(&mut self, store: &SegmentStore) {
		for segment in store.iter() {
			self.draw_segment(segment);
		}
	}

	/// Returns whether the marker was drawn.
	pub fn draw_marker(&mut self, point: DVec2) -> bool {
		self.surface.set_fill_style(&self.config.marker_color);
		self.surface.set_stroke_style(&self.config.stroke_color);
		self.surface.begin_path();
		let drawn = self
			.surface
			.arc(
				point.x,
				point.y,
				self.config.marker_radius,
				0.0,
				std::f64::consts::TAU,
			)
			.ok_or_log()
			.is_some();
		if drawn {
			self.surface.stroke();
			self.surface.fill();
		}
		drawn
	}

	/// Clears, draws every segment and then marks every crossing. Returns the number of markers.
	pub fn frame(&mut self, store: &SegmentStore) -> usize {
		self.clear();
		self.draw_all(store);
		crossings(store)
			.filter(|crossing| self.draw_marker(crossing.point))
			.count()
	}
}
