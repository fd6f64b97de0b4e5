//! Leptos component wrapping a section's particle background canvas.
//!
//! The host is created once the canvas node exists, reconfigured whenever the
//! theme or device class signals change, and stopped when the owning section
//! unmounts. Frame and resize callbacks only hold a weak reference to the
//! host, so a callback that fires after teardown finds nothing to do.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use crate::theme::ThemeMode;
use crate::viewport::DeviceClass;

use super::config::FieldConfig;
use super::driver::BrowserDriver;
use super::host::AnimationHost;
use super::surface::CanvasSurface;

type CanvasHost = AnimationHost<CanvasSurface, BrowserDriver>;
type HostCell = Rc<RefCell<Option<CanvasHost>>>;

/// Run `f` against the host if it is still alive and not already borrowed.
fn with_host(host: &Weak<RefCell<Option<CanvasHost>>>, f: impl FnOnce(&mut CanvasHost)) {
	let Some(cell) = host.upgrade() else {
		return;
	};
	let Ok(mut slot) = cell.try_borrow_mut() else {
		return;
	};
	if let Some(h) = slot.as_mut() {
		f(h);
	}
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

fn mount_host(
	cell: &HostCell,
	window: Window,
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	theme: ThemeMode,
	device: DeviceClass,
) {
	let (weak_frame, weak_resize) = (Rc::downgrade(cell), Rc::downgrade(cell));
	let on_frame = Closure::<dyn FnMut()>::new(move || with_host(&weak_frame, |h| h.on_frame()));
	let on_resize = Closure::<dyn FnMut()>::new(move || with_host(&weak_resize, |h| h.on_resize()));

	let surface = match CanvasSurface::from_canvas(&canvas) {
		Ok(s) => Some(s),
		Err(e) => {
			warn!("particle canvas: {e}");
			None
		}
	};
	let driver = BrowserDriver::new(window, canvas, config.bounds, on_frame, on_resize);

	let mut host = CanvasHost::new(config, theme, device, random_seed());
	if host.start(surface, driver) {
		*cell.borrow_mut() = Some(host);
	}
}

/// Full-size background canvas animating a particle field.
///
/// Place it as the first child of a `relative` section; it fills the section
/// (or the viewport, for [`BoundsSource::Viewport`](super::BoundsSource)
/// configs) behind the content.
#[component]
pub fn ParticleCanvas(
	config: FieldConfig,
	#[prop(into)] theme: Signal<ThemeMode>,
	#[prop(into)] device: Signal<DeviceClass>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let host: HostCell = Rc::new(RefCell::new(None));
	let (host_init, host_config) = (host.clone(), host.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		// One host per mounted canvas.
		if let Some(mut previous) = host_init.borrow_mut().take() {
			previous.stop();
		}
		mount_host(
			&host_init,
			window,
			canvas,
			config.clone(),
			theme.get_untracked(),
			device.get_untracked(),
		);
	});

	Effect::new(move |_| {
		let (mode, class) = (theme.get(), device.get());
		with_host(&Rc::downgrade(&host_config), |h| h.reconfigure(mode, class));
	});

	let host_cleanup = SendWrapper::new(host);
	on_cleanup(move || {
		let host = host_cleanup.take();
		let stopped = host.borrow_mut().take();
		if let Some(mut h) = stopped {
			h.stop();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas absolute inset-0 z-0 w-full h-full"
			aria-hidden="true"
		/>
	}
}
