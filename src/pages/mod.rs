use crate::components::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text="Sketch"/>
		<div class="Home">
			<SketchBoard/>
		</div>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get_untracked();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return to the sketch"</A>
		</div>
	}
}
