use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
	#[error("canvas size must be positive, got {width}x{height}")]
	CanvasSize { width: f64, height: f64 },

	#[error("marker radius must not be negative, got {0}")]
	MarkerRadius(f64),

	#[error("invalid colour {value:?}: {reason}")]
	Color { value: String, reason: String },
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Everything about the sketch that is fixed for its lifetime.
///
/// Colours are CSS colour strings handed straight to the drawing surface.
#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct SketchConfig {
	#[builder(default = 1200.0)]
	pub width: f64,

	#[builder(default = 500.0)]
	pub height: f64,

	#[builder(default = 5.0)]
	pub marker_radius: f64,

	#[builder(into, default = "#fc0000".to_owned())]
	pub marker_color: String,

	#[builder(into, default = "black".to_owned())]
	pub stroke_color: String,
}

impl Default for SketchConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

fn check_color(value: &str) -> Result<(), ConfigError> {
	value
		.parse::<csscolorparser::Color>()
		.map(|_| ())
		.map_err(|err| ConfigError::Color {
			value: value.to_owned(),
			reason: err.to_string(),
		})
}

impl SketchConfig {
	pub fn validate(self) -> Result<Self, ConfigError> {
		if !(self.width > 0.0 && self.height > 0.0) {
			return Err(ConfigError::CanvasSize {
				width: self.width,
				height: self.height,
			});
		}
		if !(self.marker_radius >= 0.0) {
			return Err(ConfigError::MarkerRadius(self.marker_radius));
		}
		check_color(&self.marker_color)?;
		check_color(&self.stroke_color)?;
		Ok(self)
	}
}
