//! Viewport-derived signals: device class and scroll offset.

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Media query separating phone-sized viewports from everything else.
pub const NARROW_QUERY: &str = "(max-width: 768px)";

/// Coarse viewport classification; only used to scale particle counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
	Narrow,
	#[default]
	Wide,
}

impl DeviceClass {
	pub fn from_narrow(narrow: bool) -> Self {
		if narrow { DeviceClass::Narrow } else { DeviceClass::Wide }
	}
}

/// Shared viewport signals, provided once by the app.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
	pub device: RwSignal<DeviceClass>,
}

impl Viewport {
	pub fn device_signal(&self) -> Signal<DeviceClass> {
		self.device.into()
	}
}

/// Track [`NARROW_QUERY`] and provide the result as [`Viewport`] context.
pub fn provide_viewport() -> Viewport {
	let viewport = Viewport {
		device: RwSignal::new(DeviceClass::default()),
	};
	provide_context(viewport);

	let Some(query) = web_sys::window().and_then(|w| w.match_media(NARROW_QUERY).ok().flatten())
	else {
		return viewport;
	};
	let device = viewport.device;
	device.set(DeviceClass::from_narrow(query.matches()));

	let query_cb = query.clone();
	let on_change =
		Closure::<dyn FnMut()>::new(move || device.set(DeviceClass::from_narrow(query_cb.matches())));
	if let Err(e) =
		query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
	{
		warn!("viewport: could not watch media query: {e:?}");
	}

	let listener = SendWrapper::new((query, on_change));
	on_cleanup(move || {
		let (query, on_change) = listener.take();
		let _ =
			query.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
	});

	viewport
}

pub fn use_viewport() -> Viewport {
	expect_context::<Viewport>()
}

/// `true` once the page is scrolled further than `threshold` pixels.
pub fn use_scrolled(threshold: f64) -> Signal<bool> {
	let scrolled = RwSignal::new(false);
	let read = move || {
		if let Some(w) = web_sys::window() {
			scrolled.set(w.scroll_y().unwrap_or(0.0) > threshold);
		}
	};
	read();

	let handle = window_event_listener(leptos::ev::scroll, move |_| read());
	on_cleanup(move || handle.remove());
	scrolled.into()
}
