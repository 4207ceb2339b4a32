//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fullscreen canvas element and wires up
//! mouse/touch handlers that feed the shared pointer position. An animation
//! loop runs via `requestAnimationFrame`, rendering one frame per display
//! refresh for the lifetime of the page. Theme changes arrive through the
//! `theme` signal and recolor the live particles without recreating them.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::render;
use super::state::FieldState;
use super::theme::ThemeName;

/// Renders the animated particle background on a fullscreen canvas.
///
/// The `theme` signal is the subscription interface for theme changes: any
/// external actor that writes it recolors the field. A window resize
/// resets the whole particle set at the new dimensions.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] theme: Signal<ThemeName>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<FieldState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (field_init, animate_init, resize_cb_init) =
		(field.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut rng = || js_sys::Math::random();
		*field_init.borrow_mut() = Some(FieldState::new(w, h, theme.get_untracked(), &mut rng));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				let mut rng = || js_sys::Math::random();
				f.resize(nw, nh, &mut rng);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner) = (field_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				render::frame(f, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Theme subscription: pushes signal changes into the live field.
	let field_theme = field.clone();
	Effect::new(move |_| {
		let new_theme = theme.get();
		if let Some(ref mut f) = *field_theme.borrow_mut() {
			let mut rng = || js_sys::Math::random();
			f.set_theme(new_theme, &mut rng);
		}
	});

	let field_mm = field.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		if let Some(ref mut f) = *field_mm.borrow_mut() {
			f.set_pointer(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		}
	};

	let field_ml = field.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut f) = *field_ml.borrow_mut() {
			f.clear_pointer();
		}
	};

	let field_tm = field.clone();
	let on_touchmove = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		if let Some(ref mut f) = *field_tm.borrow_mut() {
			f.set_pointer(
				touch.client_x() as f64 - rect.left(),
				touch.client_y() as f64 - rect.top(),
			);
		}
	};

	let field_te = field.clone();
	let on_touchend = move |_: TouchEvent| {
		if let Some(ref mut f) = *field_te.borrow_mut() {
			f.clear_pointer();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="display: block; position: fixed; inset: 0;"
		/>
	}
}
