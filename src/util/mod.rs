mod result_ext;
pub use result_ext::*;

use glam::{dvec2, DVec2};

#[derive(Clone, Debug, thiserror::Error)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

pub trait CoordinateSource {
	/// Position relative to the padding edge of the event's target, in CSS pixels.
	fn get_offset(&self) -> DVec2;
}

impl CoordinateSource for leptos::ev::MouseEvent {
	fn get_offset(&self) -> DVec2 {
		dvec2(self.offset_x() as f64, self.offset_y() as f64)
	}
}
