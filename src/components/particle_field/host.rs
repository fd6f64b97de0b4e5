//! Lifecycle of one section's particle background.
//!
//! The host binds a [`ParticleField`] to a surface for exactly the mounted
//! lifetime of its section:
//!
//! ```text
//! Unmounted -> Initializing -> Running <-> Reconfiguring
//!                                 |
//!                                 v
//!                              Stopped
//! ```
//!
//! Everything platform-specific (frame scheduling, the window resize
//! listener, layout measurement) goes through [`FrameDriver`], so the state
//! machine itself runs unchanged under test.

use log::{debug, warn};

use crate::theme::ThemeMode;
use crate::viewport::DeviceClass;

use super::color::ColorTemplate;
use super::config::FieldConfig;
use super::field::ParticleField;
use super::surface::Surface;

/// Platform services a host needs while it runs.
pub trait FrameDriver {
	/// Rendered (layout) size of the surface, as opposed to its backing store.
	fn layout_size(&self) -> (f64, f64);
	/// Resize the backing store so drawing is not stretched or clipped.
	fn set_backing_size(&mut self, width: f64, height: f64);
	/// Schedule one frame callback.
	fn request_frame(&mut self);
	/// Cancel the outstanding frame callback, if any.
	fn cancel_frame(&mut self);
	fn listen_resize(&mut self);
	fn unlisten_resize(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostState {
	Unmounted,
	Initializing,
	Running,
	Reconfiguring,
	/// Terminal; a new mount creates a new host.
	Stopped,
}

pub struct AnimationHost<S, D> {
	config: FieldConfig,
	field: ParticleField,
	state: HostState,
	surface: Option<S>,
	driver: Option<D>,
	width: f64,
	height: f64,
	theme: ThemeMode,
	device: DeviceClass,
	template: ColorTemplate,
	frame_pending: bool,
	listening: bool,
}

impl<S: Surface, D: FrameDriver> AnimationHost<S, D> {
	pub fn new(config: FieldConfig, theme: ThemeMode, device: DeviceClass, seed: u64) -> Self {
		let field = ParticleField::new(config.growth_rate, seed);
		let template = config.colors.template_for(theme);
		Self {
			config,
			field,
			state: HostState::Unmounted,
			surface: None,
			driver: None,
			width: 0.0,
			height: 0.0,
			theme,
			device,
			template,
			frame_pending: false,
			listening: false,
		}
	}

	pub fn state(&self) -> HostState {
		self.state
	}

	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	pub fn template(&self) -> ColorTemplate {
		self.template
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	pub fn field_mut(&mut self) -> &mut ParticleField {
		&mut self.field
	}

	/// Start animating on `surface`. A missing surface leaves the host
	/// unmounted; there is simply nothing to animate yet.
	pub fn start(&mut self, surface: Option<S>, driver: D) -> bool {
		if self.state != HostState::Unmounted {
			warn!("particle host: start ignored in state {:?}", self.state);
			return false;
		}
		let Some(surface) = surface else {
			debug!("particle host: no surface, not starting");
			return false;
		};

		self.state = HostState::Initializing;
		self.surface = Some(surface);
		let driver = self.driver.insert(driver);

		let (width, height) = driver.layout_size();
		driver.set_backing_size(width, height);
		self.width = width;
		self.height = height;

		if !self.listening {
			driver.listen_resize();
			self.listening = true;
		}

		self.field.initialize(
			self.config.count.resolve(self.device),
			width,
			height,
			self.config.speed_scale,
			self.config.radius_scale,
		);
		self.state = HostState::Running;
		debug!(
			"particle host: running with {} particles in {}x{}",
			self.field.len(),
			width,
			height
		);
		self.schedule();
		true
	}

	fn schedule(&mut self) {
		if self.frame_pending {
			return;
		}
		if let Some(driver) = self.driver.as_mut() {
			driver.request_frame();
			self.frame_pending = true;
		}
	}

	/// Frame callback. Late callbacks after [`stop`](Self::stop) do nothing.
	pub fn on_frame(&mut self) {
		if self.state != HostState::Running {
			return;
		}
		self.frame_pending = false;
		self.field.tick(self.width, self.height);
		if let Some(surface) = self.surface.as_ref() {
			self.field.draw(surface, &self.template);
		}
		self.schedule();
	}

	/// Window resize callback: adopt the surface's new layout size.
	pub fn on_resize(&mut self) {
		if self.state != HostState::Running {
			return;
		}
		let Some(driver) = self.driver.as_mut() else {
			return;
		};
		let (width, height) = driver.layout_size();
		driver.set_backing_size(width, height);
		self.width = width;
		self.height = height;
	}

	/// Apply a new theme and device class without interrupting the frame loop.
	///
	/// A changed particle count is applied to the live field: new particles
	/// fade in, surplus ones are dropped, the rest keep their state.
	pub fn reconfigure(&mut self, theme: ThemeMode, device: DeviceClass) {
		match self.state {
			HostState::Stopped => return,
			HostState::Running => self.state = HostState::Reconfiguring,
			_ => {}
		}

		self.theme = theme;
		self.template = self.config.colors.template_for(theme);
		if device != self.device {
			self.device = device;
			if self.state == HostState::Reconfiguring {
				self.field.set_count(self.config.count.resolve(device));
			}
		}

		if self.state == HostState::Reconfiguring {
			self.state = HostState::Running;
		}
	}

	/// Tear down: cancel the pending frame, drop the resize listener and
	/// empty the field. Safe to call more than once.
	pub fn stop(&mut self) {
		if self.state == HostState::Stopped {
			return;
		}
		if let Some(driver) = self.driver.as_mut() {
			if self.frame_pending {
				driver.cancel_frame();
				self.frame_pending = false;
			}
			if self.listening {
				driver.unlisten_resize();
				self.listening = false;
			}
		}
		self.field.clear();
		self.state = HostState::Stopped;
		debug!("particle host: stopped");
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::components::particle_field::surface::testing::{DrawCall, RecordingSurface};

	#[derive(Debug, Default)]
	struct DriverLog {
		layout: (f64, f64),
		backing: Option<(f64, f64)>,
		requested: usize,
		cancelled: usize,
		listeners: i32,
		max_listeners: i32,
	}

	#[derive(Clone, Default)]
	struct MockDriver {
		log: Rc<RefCell<DriverLog>>,
	}

	impl MockDriver {
		fn with_layout(width: f64, height: f64) -> Self {
			let driver = Self::default();
			driver.log.borrow_mut().layout = (width, height);
			driver
		}

		fn resize_to(&self, width: f64, height: f64) {
			self.log.borrow_mut().layout = (width, height);
		}
	}

	impl FrameDriver for MockDriver {
		fn layout_size(&self) -> (f64, f64) {
			self.log.borrow().layout
		}

		fn set_backing_size(&mut self, width: f64, height: f64) {
			self.log.borrow_mut().backing = Some((width, height));
		}

		fn request_frame(&mut self) {
			self.log.borrow_mut().requested += 1;
		}

		fn cancel_frame(&mut self) {
			self.log.borrow_mut().cancelled += 1;
		}

		fn listen_resize(&mut self) {
			let mut log = self.log.borrow_mut();
			log.listeners += 1;
			log.max_listeners = log.max_listeners.max(log.listeners);
		}

		fn unlisten_resize(&mut self) {
			self.log.borrow_mut().listeners -= 1;
		}
	}

	type TestHost = AnimationHost<RecordingSurface, MockDriver>;

	fn running_host(config: FieldConfig, theme: ThemeMode) -> (TestHost, RecordingSurface, MockDriver) {
		let surface = RecordingSurface::default();
		let driver = MockDriver::with_layout(800.0, 600.0);
		let mut host = TestHost::new(config, theme, DeviceClass::Wide, 17);
		assert!(host.start(Some(surface.clone()), driver.clone()));
		(host, surface, driver)
	}

	#[test]
	fn test_missing_surface_is_a_noop() {
		let driver = MockDriver::with_layout(800.0, 600.0);
		let mut host = TestHost::new(FieldConfig::section(), ThemeMode::Dark, DeviceClass::Wide, 1);

		assert!(!host.start(None, driver.clone()));
		assert_eq!(host.state(), HostState::Unmounted);
		let log = driver.log.borrow();
		assert_eq!((log.requested, log.listeners), (0, 0));
		assert!(log.backing.is_none());
	}

	#[test]
	fn test_start_sizes_backing_store_from_layout() {
		let (host, _, driver) = running_host(FieldConfig::section(), ThemeMode::Dark);

		assert_eq!(host.state(), HostState::Running);
		assert_eq!(host.bounds(), (800.0, 600.0));
		assert_eq!(host.field().len(), 50);
		let log = driver.log.borrow();
		assert_eq!(log.backing, Some((800.0, 600.0)));
		assert_eq!((log.requested, log.listeners), (1, 1));
	}

	#[test]
	fn test_frames_tick_then_draw() {
		let (mut host, surface, driver) = running_host(FieldConfig::section(), ThemeMode::Dark);
		host.on_frame();

		let calls = surface.calls.borrow();
		assert_eq!(calls.len(), 51);
		assert_eq!(
			calls[0],
			DrawCall::Clear {
				width: 800.0,
				height: 600.0
			}
		);
		// Particles were advanced before being drawn.
		assert!(host.field().particles().iter().any(|p| p.alpha > 0.0));
		assert_eq!(driver.log.borrow().requested, 2);
	}

	#[test]
	fn test_no_draws_after_stop() {
		let (mut host, surface, driver) = running_host(FieldConfig::section(), ThemeMode::Light);
		for _ in 0..3 {
			host.on_frame();
		}
		assert!(surface.len() > 0);

		host.stop();
		surface.reset();
		for _ in 0..10 {
			host.on_frame();
			host.on_resize();
		}

		assert_eq!(surface.len(), 0);
		assert_eq!(host.state(), HostState::Stopped);
		assert!(host.field().is_empty());
		let log = driver.log.borrow();
		assert_eq!(log.cancelled, 1);
		assert_eq!(log.listeners, 0);
		assert_eq!(log.requested, 4);
	}

	#[test]
	fn test_stop_is_idempotent_and_terminal() {
		let (mut host, _, driver) = running_host(FieldConfig::section(), ThemeMode::Dark);
		host.stop();
		host.stop();
		assert!(!host.start(Some(RecordingSurface::default()), driver.clone()));
		host.reconfigure(ThemeMode::Light, DeviceClass::Narrow);

		assert_eq!(host.state(), HostState::Stopped);
		let log = driver.log.borrow();
		assert_eq!((log.cancelled, log.listeners, log.max_listeners), (1, 0, 1));
	}

	#[test]
	fn test_single_frame_request_outstanding() {
		let (mut host, _, driver) = running_host(FieldConfig::section(), ThemeMode::Dark);
		host.reconfigure(ThemeMode::Light, DeviceClass::Narrow);
		host.on_resize();
		assert_eq!(driver.log.borrow().requested, 1);
		host.on_frame();
		assert_eq!(driver.log.borrow().requested, 2);
	}

	#[test]
	fn test_resize_updates_bounds_without_respawn() {
		let (mut host, _, driver) = running_host(FieldConfig::section(), ThemeMode::Dark);
		{
			let p = &mut host.field_mut().particles_mut()[0];
			p.x = 850.0;
			p.y = 100.0;
			p.vx = 0.1;
			p.vy = 0.0;
			p.alpha = 0.4;
		}

		driver.resize_to(1024.0, 768.0);
		host.on_resize();
		assert_eq!(host.bounds(), (1024.0, 768.0));
		assert_eq!(driver.log.borrow().backing, Some((1024.0, 768.0)));
		assert_eq!(host.field().particles()[0].x, 850.0);

		host.on_frame();
		let p = &host.field().particles()[0];
		assert!((p.x - 850.1).abs() < 1e-9);
		assert!(p.alpha > 0.4);
	}

	#[test]
	fn test_theme_flip_changes_template_only() {
		let (mut host, surface, _) = running_host(FieldConfig::section(), ThemeMode::Light);
		host.on_frame();
		let before = host.field().particles().to_vec();
		surface.reset();

		host.reconfigure(ThemeMode::Dark, DeviceClass::Wide);
		assert_eq!(host.state(), HostState::Running);
		assert_eq!(host.field().particles(), &before[..]);

		host.on_frame();
		let circles = surface.circles();
		assert_eq!(circles.len(), 50);
		assert!(circles.iter().all(|c| matches!(
			c,
			DrawCall::Circle { fill, .. } if fill.starts_with("rgba(255, 255, 255,")
		)));
	}

	#[test]
	fn test_device_change_resizes_live_population() {
		let (mut host, _, _) = running_host(FieldConfig::footer(), ThemeMode::Dark);
		assert_eq!(host.field().len(), 50);

		host.reconfigure(ThemeMode::Dark, DeviceClass::Narrow);
		assert_eq!(host.field().len(), 10);
		host.reconfigure(ThemeMode::Dark, DeviceClass::Wide);
		assert_eq!(host.field().len(), 50);
	}

	#[test]
	fn test_reconfigure_before_start_is_recorded() {
		let mut host = TestHost::new(FieldConfig::work(), ThemeMode::Dark, DeviceClass::Wide, 3);
		host.reconfigure(ThemeMode::Light, DeviceClass::Narrow);
		assert_eq!(host.state(), HostState::Unmounted);
		assert_eq!(host.template(), ColorTemplate::VIOLET);

		assert!(host.start(Some(RecordingSurface::default()), MockDriver::with_layout(400.0, 300.0)));
		assert_eq!(host.field().len(), 10);
	}
}
