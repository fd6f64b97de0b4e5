//! Browser implementation of [`FrameDriver`].
//!
//! Frame and resize callbacks are `wasm_bindgen` closures owned by the driver,
//! so they live exactly as long as the host that owns the driver. The
//! `requestAnimationFrame` id is kept for cancellation.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::config::BoundsSource;
use super::host::FrameDriver;

pub struct BrowserDriver {
	window: Window,
	canvas: HtmlCanvasElement,
	bounds: BoundsSource,
	on_frame: Closure<dyn FnMut()>,
	on_resize: Closure<dyn FnMut()>,
	frame_id: Option<i32>,
}

impl BrowserDriver {
	pub fn new(
		window: Window,
		canvas: HtmlCanvasElement,
		bounds: BoundsSource,
		on_frame: Closure<dyn FnMut()>,
		on_resize: Closure<dyn FnMut()>,
	) -> Self {
		Self {
			window,
			canvas,
			bounds,
			on_frame,
			on_resize,
			frame_id: None,
		}
	}

	fn viewport_size(&self) -> (f64, f64) {
		let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		(read(self.window.inner_width()), read(self.window.inner_height()))
	}
}

impl FrameDriver for BrowserDriver {
	fn layout_size(&self) -> (f64, f64) {
		match self.bounds {
			BoundsSource::Viewport => self.viewport_size(),
			BoundsSource::Element => (
				self.canvas.client_width() as f64,
				self.canvas.client_height() as f64,
			),
		}
	}

	fn set_backing_size(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn request_frame(&mut self) {
		match self
			.window
			.request_animation_frame(self.on_frame.as_ref().unchecked_ref())
		{
			Ok(id) => self.frame_id = Some(id),
			Err(e) => warn!("particle host: requestAnimationFrame failed: {e:?}"),
		}
	}

	fn cancel_frame(&mut self) {
		if let Some(id) = self.frame_id.take() {
			if let Err(e) = self.window.cancel_animation_frame(id) {
				warn!("particle host: cancelAnimationFrame failed: {e:?}");
			}
		}
	}

	fn listen_resize(&mut self) {
		if let Err(e) = self
			.window
			.add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
		{
			warn!("particle host: adding resize listener failed: {e:?}");
		}
	}

	fn unlisten_resize(&mut self) {
		if let Err(e) = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
		{
			warn!("particle host: removing resize listener failed: {e:?}");
		}
	}
}
