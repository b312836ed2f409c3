use super::{Surface, SurfaceError};
use crate::util::JsError;
use wasm_bindgen::JsCast;

#[derive(Clone, Debug, thiserror::Error)]
pub enum CanvasError {
	#[error("canvas has no 2d context")]
	NoContext,

	#[error("2d context has an unexpected type")]
	WrongContextType,

	#[error("failed to get 2d context")]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(CanvasError: std::error::Error, Send, Sync);

/// A browser canvas drawn through its `CanvasRenderingContext2D`.
#[derive(Clone, Debug)]
pub struct Canvas2d {
	context: web_sys::CanvasRenderingContext2d,
}

impl Canvas2d {
	#[tracing::instrument(err, skip(canvas))]
	pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Result<Self, CanvasError> {
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(CanvasError::NoContext)?
			.dyn_into::<web_sys::CanvasRenderingContext2d>()
			.map_err(|_| CanvasError::WrongContextType)?;
		Ok(Self { context })
	}
}

impl Surface for Canvas2d {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.context.clear_rect(x, y, width, height);
	}

	fn begin_path(&mut self) {
		self.context.begin_path();
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.context.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.context.line_to(x, y);
	}

	fn stroke(&mut self) {
		self.context.stroke();
	}

	fn arc(
		&mut self,
		x: f64,
		y: f64,
		radius: f64,
		start_angle: f64,
		end_angle: f64,
	) -> Result<(), SurfaceError> {
		self
			.context
			.arc(x, y, radius, start_angle, end_angle)
			.map_err(|err| SurfaceError::Arc(JsError::from(err).to_string()))
	}

	fn fill(&mut self) {
		self.context.fill();
	}

	fn set_fill_style(&mut self, color: &str) {
		self.context.set_fill_style_str(color);
	}

	fn set_stroke_style(&mut self, color: &str) {
		self.context.set_stroke_style_str(color);
	}
}
