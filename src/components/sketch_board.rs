use crate::config::SketchConfig;
use crate::engine::{InputSink, PointerButton, Sketch};
use crate::render::{Canvas2d, Surface};
use crate::util::*;
use leptos::*;
use leptos_use::{use_raf_fn_with_options, UseRafFnOptions};
use thaw::Button;

/// Shared handle to the sketch and the canvas it draws on. Every event borrows both for the whole
/// of its handler, so handlers never interleave.
#[derive(Clone, Copy)]
struct SketchHandle {
	sketch: StoredValue<Sketch>,
	surface: StoredValue<Option<Canvas2d>>,
	canvas: NodeRef<html::Canvas>,
}

impl SketchHandle {
	fn new(config: SketchConfig, canvas: NodeRef<html::Canvas>) -> Self {
		Self {
			sketch: store_value(Sketch::new(config)),
			surface: store_value(None),
			canvas,
		}
	}

	/// Runs `f` against the sketch. Until the canvas is mounted, drawing goes nowhere.
	fn dispatch<R: Default>(&self, f: impl FnOnce(&mut Sketch, &mut dyn Surface) -> R) -> R {
		if self.surface.with_value(Option::is_none) {
			let acquired = self
				.canvas
				.get_untracked()
				.and_then(|canvas| Canvas2d::from_canvas(&canvas).ok_or_log());
			self.surface.set_value(acquired);
		}
		let sketch = self.sketch;
		self
			.surface
			.try_update_value(move |surface| sketch.try_update_value(move |sketch| f(sketch, surface)))
			.flatten()
			.unwrap_or_default()
	}
}

#[component]
pub fn SketchBoard(#[prop(optional)] config: Option<SketchConfig>) -> impl IntoView {
	let config = config
		.unwrap_or_default()
		.validate()
		.ok_or_log()
		.unwrap_or_default();
	let (width, height) = (config.width as u32, config.height as u32);

	let canvas_ref = create_node_ref::<html::Canvas>();
	let handle = SketchHandle::new(config, canvas_ref);

	let (animating, set_animating) = create_signal(false);
	let frames = use_raf_fn_with_options(
		move |_| {
			if !handle.dispatch(|sketch, surface| sketch.on_frame(surface)) {
				tracing::debug!("collapse finished");
				set_animating.set(false);
			}
		},
		UseRafFnOptions::default().immediate(false),
	);
	{
		let (pause, resume) = (frames.pause, frames.resume);
		create_effect(move |_| {
			if animating.get() {
				resume();
			} else {
				pause();
			}
		});
	}

	let mousedown = move |e: ev::MouseEvent| {
		let button = PointerButton::from(e.button());
		let position = e.get_offset();
		handle.dispatch(|sketch, surface| sketch.on_press(surface, button, position));
	};

	let mousemove = move |e: ev::MouseEvent| {
		let position = e.get_offset();
		handle.dispatch(|sketch, surface| sketch.on_move(surface, position));
	};

	let mouseup = move |e: ev::MouseEvent| {
		let button = PointerButton::from(e.button());
		handle.dispatch(|sketch, surface| sketch.on_release(surface, button));
	};

	let contextmenu = move |e: ev::MouseEvent| {
		e.prevent_default();
		handle.dispatch(|sketch, surface| sketch.on_cancel(surface));
	};

	let collapse = move |e: ev::MouseEvent| {
		e.prevent_default();
		if handle.dispatch(|sketch, surface| sketch.on_trigger(surface)) {
			tracing::debug!("collapse started");
			set_animating.set(true);
		}
	};

	view! {
		<div class="SketchBoard">
			<canvas
				class="SketchCanvas"
				node_ref=canvas_ref
				width=width
				height=height
				on:mousedown=mousedown
				on:mousemove=mousemove
				on:mouseup=mouseup
				on:contextmenu=contextmenu
			></canvas>
			<Button on_click=collapse>"Collapse lines"</Button>
		</div>
	}
}
