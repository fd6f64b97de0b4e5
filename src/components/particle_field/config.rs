//! Per-section particle field configuration.
//!
//! Each section mounts its own field; the presets below capture the
//! parameters every call site uses. The hero preset is deliberately more
//! energetic (faster fade-in, larger and quicker particles) than the in-page
//! sections.

use crate::viewport::DeviceClass;

use super::color::{ColorScheme, ColorTemplate};

/// Fade-in speed used by in-page sections.
pub const DEFAULT_GROWTH_RATE: f64 = 0.003;

/// Particle population, optionally dependent on the device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleCount {
	Fixed(usize),
	Responsive { narrow: usize, wide: usize },
}

impl ParticleCount {
	pub fn resolve(&self, device: DeviceClass) -> usize {
		match (self, device) {
			(ParticleCount::Fixed(n), _) => *n,
			(ParticleCount::Responsive { narrow, .. }, DeviceClass::Narrow) => *narrow,
			(ParticleCount::Responsive { wide, .. }, DeviceClass::Wide) => *wide,
		}
	}
}

/// Where a field takes its bounds from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsSource {
	/// The whole browser viewport (hero header).
	Viewport,
	/// The canvas element's own rendered box.
	Element,
}

/// Tunable parameters for one particle field instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	pub count: ParticleCount,
	/// Multiplier applied to velocity components sampled from `[-0.5, 0.5]`.
	pub speed_scale: f64,
	/// Upper bound (exclusive) of the particle radius.
	pub radius_scale: f64,
	/// Alpha added per frame until the particle is fully opaque.
	pub growth_rate: f64,
	pub colors: ColorScheme,
	pub bounds: BoundsSource,
}

impl FieldConfig {
	/// Full-viewport header background.
	pub fn hero() -> Self {
		Self {
			count: ParticleCount::Fixed(100),
			speed_scale: 1.0,
			radius_scale: 2.0,
			growth_rate: 0.005,
			colors: ColorScheme::monochrome(),
			bounds: BoundsSource::Viewport,
		}
	}

	/// Standard in-page section (about, services).
	pub fn section() -> Self {
		Self {
			count: ParticleCount::Fixed(50),
			speed_scale: 0.5,
			radius_scale: 1.5,
			growth_rate: DEFAULT_GROWTH_RATE,
			colors: ColorScheme::monochrome(),
			bounds: BoundsSource::Element,
		}
	}

	pub fn contact() -> Self {
		Self {
			colors: ColorScheme::Fixed(ColorTemplate::WHITE),
			..Self::section()
		}
	}

	pub fn work() -> Self {
		Self {
			count: ParticleCount::Responsive {
				narrow: 10,
				wide: 50,
			},
			colors: ColorScheme::Adaptive {
				dark: ColorTemplate::WHITE,
				light: ColorTemplate::VIOLET,
			},
			..Self::section()
		}
	}

	pub fn footer() -> Self {
		Self {
			count: ParticleCount::Responsive {
				narrow: 10,
				wide: 50,
			},
			colors: ColorScheme::Fixed(ColorTemplate::WHITE),
			..Self::section()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::theme::ThemeMode;

	#[test]
	fn test_hero_is_twice_as_energetic() {
		let (hero, section) = (FieldConfig::hero(), FieldConfig::section());
		assert_eq!(hero.speed_scale, section.speed_scale * 2.0);
		assert!(hero.radius_scale > section.radius_scale);
		assert!(hero.growth_rate > section.growth_rate);
		assert_eq!(hero.bounds, BoundsSource::Viewport);
		assert_eq!(hero.count.resolve(DeviceClass::Narrow), 100);
	}

	#[test]
	fn test_responsive_counts() {
		let footer = FieldConfig::footer();
		assert_eq!(footer.count.resolve(DeviceClass::Narrow), 10);
		assert_eq!(footer.count.resolve(DeviceClass::Wide), 50);
		assert_eq!(FieldConfig::section().count.resolve(DeviceClass::Narrow), 50);
	}

	#[test]
	fn test_work_light_mode_is_violet() {
		let work = FieldConfig::work();
		assert_eq!(work.colors.template_for(ThemeMode::Light), ColorTemplate::VIOLET);
		assert_eq!(work.colors.template_for(ThemeMode::Dark), ColorTemplate::WHITE);
	}
}
